use crate::report::{render_json, render_text};
use clap::{Parser, ValueEnum};
use employee_insights::analysis::analyze;
use employee_insights::config::AppConfig;
use employee_insights::dataset::export::write_csv_path;
use employee_insights::dataset::generate;
use employee_insights::error::AppError;
use employee_insights::telemetry;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "employee-insights",
    about = "Generate a synthetic employee dataset, summarize it and export it as CSV",
    version
)]
pub(crate) struct Cli {
    /// Seed for the pseudorandom stream (defaults to APP_SEED or 42)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Number of rows to generate (defaults to APP_ROWS or 100)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) rows: Option<i64>,
    /// CSV destination (defaults to APP_OUTPUT or employee_data.csv)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Skip writing the CSV export
    #[arg(long)]
    pub(crate) no_export: bool,
    /// Rows shown in the dataset preview
    #[arg(long, default_value_t = 5)]
    pub(crate) preview: usize,
    /// Report format printed to stdout
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub(crate) format: ReportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReportFormat {
    Text,
    Json,
}

pub(crate) fn run() -> Result<(), AppError> {
    execute(Cli::parse())
}

fn execute(mut cli: Cli) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(seed) = cli.seed.take() {
        config.dataset.seed = seed;
    }
    if let Some(rows) = cli.rows.take() {
        config.dataset.rows = rows;
    }
    if let Some(output) = cli.output.take() {
        config.dataset.output = output;
    }

    telemetry::init(&config.telemetry)?;
    info!(
        ?config.environment,
        seed = config.dataset.seed,
        rows = config.dataset.rows,
        "starting run"
    );

    let table = generate(config.dataset.seed, config.dataset.rows)?;
    let summary = analyze(&table)?;

    let export_path = if cli.no_export {
        None
    } else {
        write_csv_path(&table, &config.dataset.output)?;
        Some(config.dataset.output.as_path())
    };

    match cli.format {
        ReportFormat::Text => render_text(&table, &summary, cli.preview, export_path),
        ReportFormat::Json => render_json(&summary)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use employee_insights::dataset::DatasetError;
    use std::env;
    use std::path::Path;
    use std::sync::{Mutex, OnceLock};

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_use_configured_defaults() {
        let cli = Cli::try_parse_from(["employee-insights"]).expect("parses");
        assert_eq!(cli.seed, None);
        assert_eq!(cli.rows, None);
        assert!(!cli.no_export);
        assert_eq!(cli.preview, 5);
        assert_eq!(cli.format, ReportFormat::Text);
    }

    #[test]
    fn negative_rows_reach_the_generator() {
        let cli = Cli::try_parse_from(["employee-insights", "--rows", "-3", "--format", "json"])
            .expect("parses");
        assert_eq!(cli.rows, Some(-3));
        assert_eq!(cli.format, ReportFormat::Json);
    }

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    // Explicit values also shadow anything a stray `.env` would supply.
    fn pin_env(output: &Path) {
        env::set_var("APP_ENV", "test");
        env::set_var("APP_SEED", "42");
        env::set_var("APP_ROWS", "100");
        env::set_var("APP_OUTPUT", output);
        env::set_var("APP_LOG_LEVEL", "warn");
    }

    #[test]
    fn negative_rows_fail_before_export() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("employee_data.csv");
        pin_env(&output);

        let cli = Cli::try_parse_from(["employee-insights", "--rows", "-1"]).expect("parses");
        let error = execute(cli).expect_err("negative rows rejected");

        assert!(
            matches!(error, AppError::Dataset(DatasetError::InvalidRowCount { requested: -1 })),
            "got {error:?}"
        );
        assert!(!output.exists());
    }
}
