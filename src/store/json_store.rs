use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Serialize, de::DeserializeOwned};

use crate::store::schema::{EXPORT_VERSION, ExportData};

pub struct JsonStore;

impl JsonStore {
    /// Pretty JSON written to a sibling temp file, synced, then renamed
    /// over `path`.
    pub fn save<T: Serialize>(path: &Path, data: &T) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = path.with_extension("tmp");

        let json = serde_json::to_string_pretty(data)?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let data = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(data)
    }

    pub fn save_export(path: &Path, data: &ExportData) -> Result<()> {
        Self::save(path, data)
    }

    /// Load an export, refusing files written by a newer format version.
    pub fn load_export(path: &Path) -> Result<ExportData> {
        let data: ExportData = Self::load(path)?;
        if data.olsfit_export_version > EXPORT_VERSION {
            bail!(
                "export version {} is newer than supported version {}",
                data.olsfit_export_version,
                EXPORT_VERSION
            );
        }
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis;
    use crate::config::Config;
    use crate::data::SampleSet;
    use tempfile::TempDir;

    fn sample_export() -> ExportData {
        let set = SampleSet::from_pairs(&[(0.0, 0.0), (1.0, 0.5), (2.0, 1.0), (3.0, 2.1)]);
        let report = analysis::run(&set).unwrap().report;
        ExportData::new(&Config::default(), &report)
    }

    #[test]
    fn test_save_then_load_export() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("results.json");
        let export = sample_export();

        JsonStore::save_export(&path, &export).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());

        let loaded = JsonStore::load_export(&path).unwrap();
        assert_eq!(
            loaded.report.regression_coefficients.equation,
            export.report.regression_coefficients.equation
        );
        assert_eq!(loaded.report.analysis_insights, export.report.analysis_insights);
        assert!(
            (loaded.report.model_performance.r_squared - export.report.model_performance.r_squared)
                .abs()
                < 1e-12
        );
        assert_eq!(loaded.olsfit_export_version, EXPORT_VERSION);
    }

    #[test]
    fn test_newer_export_version_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.json");
        let mut export = sample_export();
        export.olsfit_export_version = EXPORT_VERSION + 1;
        JsonStore::save_export(&path, &export).unwrap();
        assert!(JsonStore::load_export(&path).is_err());
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = JsonStore::load_export(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
