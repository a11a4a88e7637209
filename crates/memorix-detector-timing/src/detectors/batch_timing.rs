use super::GroupDetector;
use memorix_core::types::{AttackType, Detection, Evidence};
use memorix_dataset::{Column, RoundRecord};
use serde_json::json;

/// Rodadas mínimas do jogador para avaliar lotes
pub const MIN_PLAYER_ROUNDS: usize = 3;
/// Mínimo (exclusivo) de transações similares para a rodada contar como lote
pub const MIN_SIMILAR_TX: f64 = 3.0;
/// Rodadas em lote necessárias para sinalizar o jogador
pub const MIN_BATCH_ROUNDS: usize = 2;
/// Quantidade de round ids de amostra na evidência
pub const SAMPLE_ROUND_IDS: usize = 5;

/// Detector de submissões coordenadas em lote, agrupado por jogador.
/// Emite uma detecção por jogador, não por rodada.
pub struct BatchTimingDetector;

impl BatchTimingDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BatchTimingDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupDetector for BatchTimingDetector {
    fn name(&self) -> &str {
        "BatchTimingDetector"
    }

    fn attack_type(&self) -> AttackType {
        AttackType::BatchTiming
    }

    fn confidence(&self) -> f64 {
        0.79
    }

    fn required_columns(&self) -> &'static [Column] {
        &[Column::SimilarTxInSameBlock]
    }

    fn detect_player(&self, player: &str, rows: &[&RoundRecord]) -> Option<Detection> {
        if rows.len() < MIN_PLAYER_ROUNDS {
            return None;
        }

        let batch: Vec<&RoundRecord> = rows
            .iter()
            .copied()
            .filter(|r| matches!(r.similar_tx_in_same_block, Some(n) if n > MIN_SIMILAR_TX))
            .collect();
        if batch.len() < MIN_BATCH_ROUNDS {
            return None;
        }

        let sample: Vec<&str> = batch
            .iter()
            .take(SAMPLE_ROUND_IDS)
            .map(|r| r.round_id.as_str())
            .collect();

        let mut data = Evidence::new();
        data.insert("batch_round_count".to_string(), json!(batch.len()));
        data.insert("round_ids".to_string(), json!(sample));

        Some(Detection {
            round_id: None,
            player_address: player.to_string(),
            attack_type: self.attack_type(),
            confidence: self.confidence(),
            evidence: data,
        })
    }
}
