use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use olsfit::config::Config;
use olsfit::data::SampleSet;
use olsfit::generator::SampleGenerator;
use olsfit::generator::loader::load_samples;
use olsfit::generator::synthetic::LinearNoiseGenerator;
use olsfit::report::render::render_text;
use olsfit::store::json_store::JsonStore;
use olsfit::store::schema::ExportData;
use olsfit::ui::plot::{self, PlotView};
use olsfit::ui::theme::Theme;

#[derive(Parser)]
#[command(
    name = "olsfit",
    version,
    about = "Fit a least-squares line to paired samples and report R²"
)]
struct Cli {
    #[arg(short, long, help = "Config file (defaults to the user config dir)")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Load samples from a .csv or .json file instead of generating them")]
    input: Option<PathBuf>,

    #[arg(short = 'n', long, help = "Number of synthetic samples")]
    samples: Option<usize>,

    #[arg(long, conflicts_with = "unseeded", help = "RNG seed for synthetic samples")]
    seed: Option<u64>,

    #[arg(long, help = "Seed synthetic samples from OS entropy instead of the configured seed")]
    unseeded: bool,

    #[arg(long, allow_hyphen_values = true, help = "True slope of the synthetic data")]
    slope: Option<f64>,

    #[arg(long, allow_hyphen_values = true, help = "True intercept of the synthetic data")]
    intercept: Option<f64>,

    #[arg(long, help = "Half-width of the uniform noise band")]
    noise: Option<f64>,

    #[arg(short, long, help = "Where to write the JSON report")]
    output: Option<PathBuf>,

    #[arg(long, help = "Skip writing the JSON report")]
    no_save: bool,

    #[arg(short, long, help = "Show the samples and fitted line in the terminal")]
    plot: bool,

    #[arg(short, long, help = "Chart theme name")]
    theme: Option<String>,

    #[arg(long, help = "Persist the effective settings to the user config file")]
    write_config: bool,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(samples) = self.samples {
            config.sample_size = samples;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.unseeded {
            config.seed = None;
        }
        if let Some(slope) = self.slope {
            config.true_slope = slope;
        }
        if let Some(intercept) = self.intercept {
            config.true_intercept = intercept;
        }
        if let Some(noise) = self.noise {
            config.noise_range = noise;
        }
        if let Some(ref output) = self.output {
            config.output_path = output.to_string_lossy().to_string();
        }
        if let Some(ref theme) = self.theme {
            config.theme = theme.clone();
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "olsfit=info".into()),
        )
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => Config::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    if cli.write_config {
        config.save()?;
        info!("saved settings to {}", Config::config_path().display());
    }

    let samples = acquire_samples(&cli, &config)?;

    println!("Linear Regression Analysis Tool");
    println!("{}", "=".repeat(50));

    let analysis = olsfit::run(&samples)?;
    println!();
    print!("{}", render_text(&analysis.report));

    if !cli.no_save {
        let path = Path::new(&config.output_path);
        JsonStore::save_export(path, &ExportData::new(&config, &analysis.report))?;
        println!();
        println!("Results saved to '{}'", path.display());
    }

    if cli.plot {
        let theme = Theme::load(&config.theme).unwrap_or_default();
        plot::show(&PlotView::new(&samples, &analysis, theme))?;
    }

    Ok(())
}

fn acquire_samples(cli: &Cli, config: &Config) -> Result<SampleSet> {
    match cli.input {
        Some(ref path) => {
            let samples = load_samples(path)
                .with_context(|| format!("failed to load samples from {}", path.display()))?;
            info!("loaded {} samples from {}", samples.len(), path.display());
            Ok(samples)
        }
        None => {
            let mut generator = LinearNoiseGenerator::with_seed(
                config.true_slope,
                config.true_intercept,
                config.noise_range,
                config.seed,
            );
            let samples = generator.generate(config.sample_size);
            info!(
                "generated {} synthetic samples around y = {}x + {} (noise ±{})",
                samples.len(),
                config.true_slope,
                config.true_intercept,
                config.noise_range
            );
            Ok(samples)
        }
    }
}
