/*!
 * Memorix Dataset
 *
 * Leitura do dataset de rodadas (CSV) e normalização das colunas numéricas.
 * Valores inválidos viram "ausente", nunca zero.
 */

mod loader;
mod normalizer;
mod record;
mod schema;

pub use loader::*;
pub use normalizer::*;
pub use record::*;
pub use schema::*;
