use super::RowDetector;
use memorix_core::types::{AttackType, Evidence};
use memorix_dataset::{flag_is, Column, RoundRecord};
use serde_json::json;

/// Posição máxima (exclusiva) no bloco para considerar front-running
pub const MAX_TX_POSITION: f64 = 3.0;
/// Mínimo (exclusivo) de transações similares no mesmo bloco
pub const MIN_SIMILAR_TX: f64 = 1.0;

/// Detector de front-running: candidata marcada, no topo do bloco e
/// cercada de transações similares
pub struct FrontRunningDetector;

impl FrontRunningDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FrontRunningDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl RowDetector for FrontRunningDetector {
    fn name(&self) -> &str {
        "FrontRunningDetector"
    }

    fn attack_type(&self) -> AttackType {
        AttackType::FrontRunning
    }

    fn confidence(&self) -> f64 {
        0.95
    }

    fn required_columns(&self) -> &'static [Column] {
        &[
            Column::IsFrontRunCandidate,
            Column::TxPositionInBlock,
            Column::SimilarTxInSameBlock,
        ]
    }

    fn matches(&self, row: &RoundRecord) -> bool {
        flag_is(row.is_front_run_candidate, 1.0)
            && matches!(row.tx_position_in_block, Some(p) if p < MAX_TX_POSITION)
            && matches!(row.similar_tx_in_same_block, Some(n) if n > MIN_SIMILAR_TX)
    }

    fn evidence(&self, row: &RoundRecord) -> Evidence {
        let mut data = Evidence::new();
        data.insert("gas_price_vs_median".to_string(), json!(row.gas_price_vs_network_median));
        data.insert("tx_position".to_string(), json!(row.tx_position_in_block));
        data.insert("similar_tx_count".to_string(), json!(row.similar_tx_in_same_block));
        data
    }
}
