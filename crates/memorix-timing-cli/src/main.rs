//! Analisa o dataset de rodadas do Memorix em busca de manipulação de timing
//! e grava `timing_manipulation_report.json` no diretório atual.
//!
//! ```bash
//! cargo run -p memorix-timing-cli -- --dataset dataset.csv --threshold 0.8
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use memorix_dataset::DEFAULT_DATASET_PATH;
use memorix_detector_timing::{AnalyzerConfig, TimingAnalyzer, DEFAULT_THRESHOLD};
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "detect-timing-manipulation")]
#[command(about = "Detecta manipulação de timing nas rodadas do Memorix", long_about = None)]
struct Args {
    /// Caminho do dataset CSV
    #[arg(long, default_value = DEFAULT_DATASET_PATH)]
    dataset: String,

    /// Threshold de suspeita (0.0-1.0)
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = AnalyzerConfig::new(args.dataset, args.threshold);
    let top_players = config.top_players;

    let rule = "=".repeat(80);
    println!("\n{rule}\n⚠️  RELATÓRIO DE DETECÇÃO DE MANIPULAÇÃO DE TIMING\n{rule}\n");

    let report = TimingAnalyzer::from_config(config)
        .run()
        .map_err(|e| {
            error!("❌ {e}");
            e
        })
        .context("falha na análise de timing")?;

    print!("{}", report.render_summary(top_players));
    println!("{rule}\n");
    Ok(())
}
