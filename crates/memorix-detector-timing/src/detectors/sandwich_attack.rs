use super::RowDetector;
use memorix_core::types::{AttackType, Evidence};
use memorix_dataset::{Column, RoundRecord};
use serde_json::json;

/// Mínimo (exclusivo) de transações similares no bloco
pub const MIN_SIMILAR_TX: f64 = 2.0;
/// Razão mínima (exclusiva) sobre a mediana de gas da rede
pub const MIN_GAS_RATIO: f64 = 2.0;

/// Detector de sandwich attacks em desafios diários
pub struct SandwichAttackDetector;

impl SandwichAttackDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SandwichAttackDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl RowDetector for SandwichAttackDetector {
    fn name(&self) -> &str {
        "SandwichAttackDetector"
    }

    fn attack_type(&self) -> AttackType {
        AttackType::SandwichAttack
    }

    fn confidence(&self) -> f64 {
        0.82
    }

    fn required_columns(&self) -> &'static [Column] {
        &[Column::SimilarTxInSameBlock, Column::GasPriceVsNetworkMedian]
    }

    fn matches(&self, row: &RoundRecord) -> bool {
        matches!(row.similar_tx_in_same_block, Some(n) if n > MIN_SIMILAR_TX)
            && matches!(row.gas_price_vs_network_median, Some(g) if g > MIN_GAS_RATIO)
    }

    fn evidence(&self, row: &RoundRecord) -> Evidence {
        let mut data = Evidence::new();
        data.insert("similar_tx_count".to_string(), json!(row.similar_tx_in_same_block));
        data.insert("gas_price_ratio".to_string(), json!(row.gas_price_vs_network_median));
        data.insert("block_number".to_string(), json!(row.block_number));
        data
    }
}
