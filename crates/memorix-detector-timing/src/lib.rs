/*!
 * Memorix Detector Timing
 *
 * Detecção heurística de manipulação de timing nas rodadas on-chain do
 * Memorix: front-running, timestamp, sandwich, MEV, virada do dia e
 * submissões em lote, mais o score de suspeita por jogador.
 */

mod analyzer;
mod config;
mod player_aggregator;
mod report;
mod scoring;
pub mod detectors;

pub use analyzer::*;
pub use config::*;
pub use detectors::{
    Detector, DetectorSet, DetectorTally, DetectionRun, GroupDetector, RowDetector,
};
pub use player_aggregator::*;
pub use report::*;
pub use scoring::*;
