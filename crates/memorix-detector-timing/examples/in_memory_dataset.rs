use chrono::Utc;
use memorix_core::error::Result;
use memorix_core::traits::DatasetLoader;
use memorix_core::types::RawTable;
use memorix_detector_timing::{AnalyzerConfig, TimingAnalyzer};

/// Dataset servido de memória, sem passar por arquivo
struct StaticLoader;

impl DatasetLoader for StaticLoader {
    fn source(&self) -> String {
        "memória".to_string()
    }

    fn load(&self) -> Result<RawTable> {
        let headers = [
            "round_id",
            "player_address",
            "gas_price_vs_network_median",
            "tx_position_in_block",
            "similar_tx_in_same_block",
            "is_front_run_candidate",
            "submission_to_block_delay_ms",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect();
        let rows = vec![
            vec!["r1", "0xhot00000000", "3.4", "0", "3", "1", "120"],
            vec!["r2", "0xhot00000000", "2.5", "1", "3", "1", "850"],
            vec!["r3", "0xhot00000000", "2.2", "2", "1", "0", "900"],
            vec!["r4", "0xcalm0000000", "1.0", "40", "1", "0", "12000"],
            vec!["r5", "0xcalm0000000", "0.9", "35", "0", "0", "11000"],
        ]
        .into_iter()
        .map(|r| r.into_iter().map(str::to_string).collect())
        .collect();
        Ok(RawTable::new(headers, rows))
    }
}

fn main() -> Result<()> {
    let analyzer = TimingAnalyzer::with_loader(StaticLoader, AnalyzerConfig::default());
    let table = analyzer.load()?;
    let report = analyzer.analyze_table(&table, Utc::now());

    println!("{}", report.render_summary(analyzer.config().top_players));
    println!("{}", report.to_json()?);
    Ok(())
}
