/*!
 * Memorix Detector Timing - Detectors
 *
 * Detectores heurísticos independentes, um por padrão de ataque.
 * Detectores de linha avaliam cada rodada isoladamente; detectores de grupo
 * avaliam o conjunto de rodadas de um jogador.
 */

use memorix_core::error::{Error, Result};
use memorix_core::types::{AttackType, Detection, Evidence};
use memorix_dataset::{Column, NormalizedTable, RoundRecord};
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, info, warn};

pub mod batch_timing;
pub mod day_boundary;
pub mod front_running;
pub mod mev_exploitation;
pub mod sandwich_attack;
pub mod timestamp_manipulation;

pub use batch_timing::BatchTimingDetector;
pub use day_boundary::DayBoundaryDetector;
pub use front_running::FrontRunningDetector;
pub use mev_exploitation::MevExploitationDetector;
pub use sandwich_attack::SandwichAttackDetector;
pub use timestamp_manipulation::TimestampManipulationDetector;

/// Detector avaliado rodada a rodada
pub trait RowDetector: Send + Sync {
    fn name(&self) -> &str;

    fn attack_type(&self) -> AttackType;

    /// Confiança fixa atribuída a cada detecção
    fn confidence(&self) -> f64;

    /// Colunas sem as quais o detector não executa
    fn required_columns(&self) -> &'static [Column];

    /// Condição de disparo; campos ausentes nunca satisfazem a condição
    fn matches(&self, row: &RoundRecord) -> bool;

    fn evidence(&self, row: &RoundRecord) -> Evidence;

    fn detect(&self, table: &NormalizedTable) -> Result<Vec<Detection>> {
        if !table.schema().has_all(self.required_columns()) {
            debug!(
                "{} degradado, colunas ausentes: {:?}",
                self.name(),
                table.schema().missing(self.required_columns())
            );
            return Ok(Vec::new());
        }

        Ok(table
            .rows()
            .iter()
            .filter(|row| self.matches(row))
            .map(|row| Detection {
                round_id: Some(row.round_id.clone()),
                player_address: row.player_address.clone(),
                attack_type: self.attack_type(),
                confidence: self.confidence(),
                evidence: self.evidence(row),
            })
            .collect())
    }
}

/// Detector avaliado sobre todas as rodadas de um jogador
pub trait GroupDetector: Send + Sync {
    fn name(&self) -> &str;

    fn attack_type(&self) -> AttackType;

    fn confidence(&self) -> f64;

    fn required_columns(&self) -> &'static [Column];

    /// No máximo uma detecção por jogador
    fn detect_player(&self, player: &str, rows: &[&RoundRecord]) -> Option<Detection>;

    fn detect(&self, table: &NormalizedTable) -> Result<Vec<Detection>> {
        if !table.schema().has_all(self.required_columns()) {
            debug!(
                "{} degradado, colunas ausentes: {:?}",
                self.name(),
                table.schema().missing(self.required_columns())
            );
            return Ok(Vec::new());
        }

        Ok(table
            .group_by_player()
            .into_iter()
            .filter_map(|(player, rows)| self.detect_player(player, &rows))
            .collect())
    }
}

/// Detector de linha ou de grupo, composto uniformemente pelo `DetectorSet`
pub enum Detector {
    Row(Box<dyn RowDetector>),
    Group(Box<dyn GroupDetector>),
}

impl Detector {
    pub fn name(&self) -> &str {
        match self {
            Detector::Row(d) => d.name(),
            Detector::Group(d) => d.name(),
        }
    }

    pub fn attack_type(&self) -> AttackType {
        match self {
            Detector::Row(d) => d.attack_type(),
            Detector::Group(d) => d.attack_type(),
        }
    }

    /// Executa o detector isolado: um panic vira `Error::Detector`
    pub fn run(&self, table: &NormalizedTable) -> Result<Vec<Detection>> {
        let outcome = catch_unwind(AssertUnwindSafe(|| match self {
            Detector::Row(d) => d.detect(table),
            Detector::Group(d) => d.detect(table),
        }));
        outcome.unwrap_or_else(|payload| {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "panic".to_string());
            Err(Error::Detector { name: self.name().to_string(), reason })
        })
    }
}

/// Contagem de detecções de um detector em uma execução
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorTally {
    pub name: String,
    pub attack_type: AttackType,
    pub count: usize,
    pub failed: bool,
}

/// Resultado da execução de todos os detectores
#[derive(Debug, Clone, Default)]
pub struct DetectionRun {
    pub detections: Vec<Detection>,
    pub tallies: Vec<DetectorTally>,
}

/// Conjunto ordenado de detectores
pub struct DetectorSet {
    detectors: Vec<Detector>,
}

impl DetectorSet {
    /// Os seis detectores padrão, na ordem fixa do relatório
    pub fn new() -> Self {
        let detectors = vec![
            Detector::Row(Box::new(FrontRunningDetector::new())),
            Detector::Row(Box::new(TimestampManipulationDetector::new())),
            Detector::Row(Box::new(SandwichAttackDetector::new())),
            Detector::Row(Box::new(MevExploitationDetector::new())),
            Detector::Row(Box::new(DayBoundaryDetector::new())),
            Detector::Group(Box::new(BatchTimingDetector::new())),
        ];
        Self { detectors }
    }

    pub fn empty() -> Self {
        Self { detectors: Vec::new() }
    }

    /// Adiciona um detector ao final da ordem de execução
    pub fn add_detector(&mut self, detector: Detector) {
        self.detectors.push(detector);
    }

    /// Executa todos os detectores em ordem. Cada detector vê apenas a
    /// tabela, nunca as detecções dos anteriores; falhas são isoladas.
    pub fn detect_all(&self, table: &NormalizedTable) -> DetectionRun {
        let mut run = DetectionRun::default();

        for detector in &self.detectors {
            let (mut detections, failed) = match detector.run(table) {
                Ok(detections) => (detections, false),
                Err(e) => {
                    warn!("{}", e);
                    (Vec::new(), true)
                }
            };
            info!("🔴 {}: {} detecções", detector.name(), detections.len());
            run.tallies.push(DetectorTally {
                name: detector.name().to_string(),
                attack_type: detector.attack_type(),
                count: detections.len(),
                failed,
            });
            run.detections.append(&mut detections);
        }

        run
    }

    pub fn available_detectors(&self) -> Vec<&str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }
}

impl Default for DetectorSet {
    fn default() -> Self {
        Self::new()
    }
}
