use thiserror::Error;

/// Erros comuns da biblioteca Memorix
#[derive(Error, Debug)]
pub enum Error {
    /// Arquivo do dataset não existe
    #[error("Dataset não encontrado: {0}")]
    DatasetNotFound(String),

    /// Falha de leitura ou parsing do dataset
    #[error("Erro ao carregar dataset: {0}")]
    DatasetRead(String),

    /// Coluna obrigatória ausente no cabeçalho
    #[error("Coluna obrigatória ausente: {0}")]
    MissingColumn(String),

    /// Erro de validação
    #[error("Erro de validação: {0}")]
    ValidationError(String),

    /// Erro de serialização do relatório
    #[error("Erro de serialização: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Falha ao gravar o relatório
    #[error("Erro ao persistir relatório em {path}: {source}")]
    Persist {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Falha isolada de um detector
    #[error("Erro no detector {name}: {reason}")]
    Detector { name: String, reason: String },

    /// Erro genérico
    #[error("{0}")]
    Other(String),
}

/// Tipo de resultado usado em toda a biblioteca
pub type Result<T> = std::result::Result<T, Error>;
