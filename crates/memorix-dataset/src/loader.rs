use memorix_core::error::{Error, Result};
use memorix_core::traits::DatasetLoader;
use memorix_core::types::RawTable;
use std::path::{Path, PathBuf};
use tracing::info;

/// Nome padrão do dataset exportado pelo servidor do jogo
pub const DEFAULT_DATASET_PATH: &str = "dataset.csv";

/// Leitor de dataset em CSV com cabeçalho.
///
/// Linhas com mais ou menos células que o cabeçalho são aceitas.
#[derive(Debug, Clone)]
pub struct CsvDatasetLoader {
    path: PathBuf,
    delimiter: u8,
}

impl CsvDatasetLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for CsvDatasetLoader {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_PATH)
    }
}

impl DatasetLoader for CsvDatasetLoader {
    fn source(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<RawTable> {
        if !self.path.is_file() {
            return Err(Error::DatasetNotFound(self.source()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_path(&self.path)
            .map_err(|e| Error::DatasetRead(format!("{}: {}", self.source(), e)))?;

        let headers = reader
            .headers()
            .map_err(|e| Error::DatasetRead(format!("{}: {}", self.source(), e)))?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| Error::DatasetRead(format!("{}: {}", self.source(), e)))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        info!("✅ {} rodadas carregadas de {}", rows.len(), self.source());
        Ok(RawTable::new(headers, rows))
    }
}
