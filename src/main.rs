//! Точка входа slovo.
//!
//! Принимает необязательный путь к входному файлу, печатает итоговую
//! сводку (слова, символы) в stdout. Отсутствующий файл даёт нулевые
//! счётчики, а не ошибку.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use slovo::{
    logging::{self, LoggingConfig},
    Pipeline, Settings,
};

/// Основная структура CLI аргументов.
#[derive(Parser)]
#[command(name = "slovo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Broker-topology text analysis: word and character counts", long_about = None)]
struct Cli {
    /// Путь к входному файлу (по умолчанию — из конфигурации)
    input: Option<PathBuf>,
    /// Включить подробный вывод (debug)
    #[arg(short, long)]
    verbose: bool,
    /// Подавить большинство логов (только warn/error)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load()?;

    let mut log_config = LoggingConfig {
        level: settings.log_level.clone(),
        ..LoggingConfig::default()
    };
    if cli.verbose {
        log_config.level = "debug".to_string();
    }
    if cli.quiet {
        log_config.level = "warn".to_string();
    }
    logging::init_logging(&log_config);

    let input = cli
        .input
        .unwrap_or_else(|| PathBuf::from(&settings.input_path));

    let pipeline = Pipeline::new()?;
    let summary = pipeline.run(&input)?;
    info!(%summary, "run finished");
    println!("{summary}");
    Ok(())
}
