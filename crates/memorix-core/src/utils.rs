/*!
 * Memorix Utils
 *
 * Utilitários comuns usados em toda a workspace Memorix
 */

/// Abrevia um endereço para exibição: primeiros `len` caracteres seguidos de `...`
pub fn short_address(address: &str, len: usize) -> String {
    let prefix: String = address.chars().take(len).collect();
    format!("{prefix}...")
}

/// Média aritmética; `None` para fatia vazia
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Máximo; `None` para fatia vazia
pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}
