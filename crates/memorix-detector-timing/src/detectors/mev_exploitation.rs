use super::RowDetector;
use memorix_core::types::{AttackType, Evidence};
use memorix_dataset::{Column, RoundRecord};
use serde_json::json;

/// Atraso máximo (exclusivo) entre submissão e inclusão, em ms
pub const MAX_BLOCK_DELAY_MS: f64 = 200.0;
/// Razão mínima (exclusiva) sobre a mediana de gas da rede
pub const MIN_GAS_RATIO: f64 = 3.0;

/// Detector de exploração por bots de MEV: inclusão rápida demais,
/// primeira posição do bloco e gas muito acima da mediana
pub struct MevExploitationDetector;

impl MevExploitationDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MevExploitationDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl RowDetector for MevExploitationDetector {
    fn name(&self) -> &str {
        "MevExploitationDetector"
    }

    fn attack_type(&self) -> AttackType {
        AttackType::MevExploitation
    }

    fn confidence(&self) -> f64 {
        0.91
    }

    fn required_columns(&self) -> &'static [Column] {
        &[
            Column::SubmissionToBlockDelayMs,
            Column::TxPositionInBlock,
            Column::GasPriceVsNetworkMedian,
        ]
    }

    fn matches(&self, row: &RoundRecord) -> bool {
        matches!(row.submission_to_block_delay_ms, Some(d) if d < MAX_BLOCK_DELAY_MS)
            && matches!(row.tx_position_in_block, Some(p) if p == 0.0)
            && matches!(row.gas_price_vs_network_median, Some(g) if g > MIN_GAS_RATIO)
    }

    fn evidence(&self, row: &RoundRecord) -> Evidence {
        let mut data = Evidence::new();
        data.insert("block_delay_ms".to_string(), json!(row.submission_to_block_delay_ms));
        data.insert("tx_position".to_string(), json!(row.tx_position_in_block));
        data.insert("gas_price_ratio".to_string(), json!(row.gas_price_vs_network_median));
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_first_position() {
        let d = MevExploitationDetector::new();
        let mut row = RoundRecord {
            submission_to_block_delay_ms: Some(150.0),
            tx_position_in_block: Some(0.0),
            gas_price_vs_network_median: Some(3.5),
            ..RoundRecord::new("r1", "0xbot")
        };
        assert!(d.matches(&row));
        row.tx_position_in_block = Some(1.0);
        assert!(!d.matches(&row));
        row.tx_position_in_block = None;
        assert!(!d.matches(&row));
    }

    #[test]
    fn boundaries_are_exclusive() {
        let d = MevExploitationDetector::new();
        let row = RoundRecord {
            submission_to_block_delay_ms: Some(200.0),
            tx_position_in_block: Some(0.0),
            gas_price_vs_network_median: Some(3.5),
            ..RoundRecord::new("r1", "0xbot")
        };
        assert!(!d.matches(&row));
        let row = RoundRecord {
            submission_to_block_delay_ms: Some(10.0),
            gas_price_vs_network_median: Some(3.0),
            ..row
        };
        assert!(!d.matches(&row));
    }
}
