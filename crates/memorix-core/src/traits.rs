/*!
 * Memorix Traits
 *
 * Traits comuns usados em toda a workspace Memorix
 */

use crate::error::Result;
use crate::types::RawTable;

/// Fonte do dataset de rodadas.
///
/// O núcleo de detecção só depende desta interface; a origem real (CSV,
/// memória, outro produtor) fica do lado de fora.
pub trait DatasetLoader: Send + Sync {
    /// Descrição da origem, usada apenas em logs
    fn source(&self) -> String;

    /// Carrega a tabela bruta, com células ainda em texto
    fn load(&self) -> Result<RawTable>;
}
