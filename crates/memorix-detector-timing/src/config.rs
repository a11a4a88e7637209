use crate::player_aggregator::DEFAULT_THRESHOLD;
use crate::report::DEFAULT_REPORT_PATH;
use memorix_core::error::{Error, Result};
use memorix_dataset::DEFAULT_DATASET_PATH;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuração de uma execução da análise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Caminho do dataset CSV
    pub dataset_path: PathBuf,
    /// Score mínimo para o jogador entrar no relatório
    pub threshold: f64,
    /// Destino do relatório JSON
    pub report_path: PathBuf,
    /// Jogadores listados no resumo de console
    pub top_players: usize,
}

impl AnalyzerConfig {
    pub fn new(dataset_path: impl Into<PathBuf>, threshold: f64) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            threshold,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::ValidationError(format!(
                "threshold deve estar em [0, 1], recebido {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            threshold: DEFAULT_THRESHOLD,
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            top_players: 10,
        }
    }
}
