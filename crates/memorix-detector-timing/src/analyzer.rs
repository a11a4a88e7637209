use crate::config::AnalyzerConfig;
use crate::detectors::{DetectionRun, DetectorSet};
use crate::player_aggregator::PlayerAggregator;
use crate::report::Report;
use chrono::{DateTime, Utc};
use memorix_core::error::Result;
use memorix_core::traits::DatasetLoader;
use memorix_dataset::{CsvDatasetLoader, NormalizedTable, SchemaNormalizer};
use tracing::info;

/// Orquestra uma execução completa: carga → normalização → detectores
/// → agregação por jogador → relatório.
pub struct TimingAnalyzer<L> {
    loader: L,
    config: AnalyzerConfig,
    normalizer: SchemaNormalizer,
    detectors: DetectorSet,
    aggregator: PlayerAggregator,
}

impl TimingAnalyzer<CsvDatasetLoader> {
    /// Analisador lendo o CSV apontado pela configuração
    pub fn from_config(config: AnalyzerConfig) -> Self {
        let loader = CsvDatasetLoader::new(&config.dataset_path);
        Self::with_loader(loader, config)
    }
}

impl<L: DatasetLoader> TimingAnalyzer<L> {
    pub fn with_loader(loader: L, config: AnalyzerConfig) -> Self {
        Self {
            loader,
            config,
            normalizer: SchemaNormalizer::new(),
            detectors: DetectorSet::new(),
            aggregator: PlayerAggregator::new(),
        }
    }

    pub fn with_detectors(mut self, detectors: DetectorSet) -> Self {
        self.detectors = detectors;
        self
    }

    pub fn with_aggregator(mut self, aggregator: PlayerAggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Carrega e normaliza o dataset. Erros aqui são fatais para a execução.
    pub fn load(&self) -> Result<NormalizedTable> {
        self.config.validate()?;
        let raw = self.loader.load()?;
        self.normalizer.normalize(raw)
    }

    /// Aplica detectores e agregador sobre uma tabela já normalizada
    pub fn analyze_table(&self, table: &NormalizedTable, generated_at: DateTime<Utc>) -> Report {
        let DetectionRun { detections, .. } = self.detectors.detect_all(table);
        let players = self.aggregator.suspicious_players(table, self.config.threshold);
        info!(
            "{} detecções, {} jogadores acima do threshold {:.2}",
            detections.len(),
            players.len(),
            self.config.threshold
        );
        Report::assemble(generated_at, table.len(), detections, players)
    }

    /// Executa a análise sem gravar o relatório
    pub fn analyze(&self) -> Result<Report> {
        let table = self.load()?;
        Ok(self.analyze_table(&table, Utc::now()))
    }

    /// Executa a análise e grava o relatório no destino configurado
    pub fn run(&self) -> Result<Report> {
        info!("⚠️  Detecção de manipulação de timing em {}", self.loader.source());
        let report = self.analyze()?;
        report.persist(&self.config.report_path)?;
        Ok(report)
    }
}
