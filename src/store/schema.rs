use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::report::Report;

pub const EXPORT_VERSION: u32 = 1;

/// Document written after each run: the report plus the settings that
/// produced it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportData {
    pub olsfit_export_version: u32,
    pub exported_at: DateTime<Utc>,
    pub config: Config,
    pub report: Report,
}

impl ExportData {
    pub fn new(config: &Config, report: &Report) -> Self {
        Self {
            olsfit_export_version: EXPORT_VERSION,
            exported_at: Utc::now(),
            config: config.clone(),
            report: report.clone(),
        }
    }
}
