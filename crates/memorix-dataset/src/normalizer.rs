use crate::record::RoundRecord;
use crate::schema::{Column, Schema};
use memorix_core::error::{Error, Result};
use memorix_core::types::RawTable;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Placeholder usado pelo produtor do dataset para "sem valor"
pub const NA_PLACEHOLDER: &str = "NA";

/// Estatísticas informativas da normalização
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationStats {
    pub total_rows: usize,
    /// Linhas com todo o subconjunto de timing on-chain presente
    pub complete_timing_rows: usize,
    /// Células que não eram vazias nem `NA` e falharam na conversão
    pub coercion_failures: BTreeMap<Column, usize>,
}

/// Resultado da coerção de uma célula
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coerced {
    Value(f64),
    Placeholder,
    Malformed,
}

impl Coerced {
    pub fn value(self) -> Option<f64> {
        match self {
            Coerced::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// Converte uma célula textual em número.
///
/// Vazio e `NA` são placeholders; texto inválido e valores não finitos
/// (`NaN`, `inf`) são malformados. Em nenhum caso vira zero.
pub fn coerce_numeric(raw: &str) -> Coerced {
    let cell = raw.trim();
    if cell.is_empty() || cell == NA_PLACEHOLDER {
        return Coerced::Placeholder;
    }
    match cell.parse::<f64>() {
        Ok(v) if v.is_finite() => Coerced::Value(v),
        _ => Coerced::Malformed,
    }
}

/// Tabela normalizada, somente leitura depois de construída
#[derive(Debug, Clone, Default)]
pub struct NormalizedTable {
    schema: Schema,
    rows: Vec<RoundRecord>,
    stats: NormalizationStats,
}

impl NormalizedTable {
    /// Monta uma tabela já tipada; usado por produtores em memória e testes
    pub fn from_records(schema: Schema, rows: Vec<RoundRecord>) -> Self {
        let stats = NormalizationStats {
            total_rows: rows.len(),
            complete_timing_rows: count_complete_timing(&schema, &rows),
            coercion_failures: BTreeMap::new(),
        };
        Self { schema, rows, stats }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rows(&self) -> &[RoundRecord] {
        &self.rows
    }

    pub fn stats(&self) -> &NormalizationStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Agrupa as linhas por jogador em ordem crescente de endereço,
    /// preservando a ordem das linhas dentro de cada grupo.
    /// Linhas sem `player_address` ficam de fora.
    pub fn group_by_player(&self) -> Vec<(&str, Vec<&RoundRecord>)> {
        let mut groups: BTreeMap<&str, Vec<&RoundRecord>> = BTreeMap::new();
        for row in &self.rows {
            if row.player_address.is_empty() {
                continue;
            }
            groups.entry(row.player_address.as_str()).or_default().push(row);
        }
        groups.into_iter().collect()
    }
}

fn count_complete_timing(schema: &Schema, rows: &[RoundRecord]) -> usize {
    if !schema.has_all(&Column::BLOCKCHAIN_TIMING) {
        return 0;
    }
    rows.iter()
        .filter(|r| r.has_all(&Column::BLOCKCHAIN_TIMING))
        .count()
}

/// Normalizador de schema: texto bruto → `RoundRecord` tipado
pub struct SchemaNormalizer {
    numeric_columns: Vec<Column>,
}

impl SchemaNormalizer {
    pub fn new() -> Self {
        Self { numeric_columns: Column::NUMERIC.to_vec() }
    }

    /// Restringe a coerção a um subconjunto das colunas numéricas
    pub fn with_numeric_columns(columns: &[Column]) -> Self {
        let numeric_columns = columns
            .iter()
            .copied()
            .filter(|c| Column::NUMERIC.contains(c))
            .collect();
        Self { numeric_columns }
    }

    /// Consome a cópia de trabalho da tabela bruta.
    ///
    /// Só falha se `round_id` ou `player_address` não existirem no cabeçalho.
    pub fn normalize(&self, raw: RawTable) -> Result<NormalizedTable> {
        let round_idx = raw
            .column_index(Column::RoundId.name())
            .ok_or_else(|| Error::MissingColumn(Column::RoundId.name().into()))?;
        let player_idx = raw
            .column_index(Column::PlayerAddress.name())
            .ok_or_else(|| Error::MissingColumn(Column::PlayerAddress.name().into()))?;
        let round_type_idx = raw.column_index(Column::RoundType.name());

        // colunas numéricas fora da coerção não entram no schema
        let schema = Schema::with_columns(
            Schema::from_headers(&raw.headers)
                .columns()
                .filter(|c| !Column::NUMERIC.contains(c) || self.numeric_columns.contains(c)),
        );
        let numeric: Vec<(Column, usize)> = self
            .numeric_columns
            .iter()
            .filter_map(|c| raw.column_index(c.name()).map(|idx| (*c, idx)))
            .collect();

        let mut failures: BTreeMap<Column, usize> = BTreeMap::new();
        let mut rows = Vec::with_capacity(raw.len());
        for i in 0..raw.len() {
            let text = |idx: usize| raw.cell(i, idx).unwrap_or("").trim().to_string();
            let mut record = RoundRecord::new(text(round_idx), text(player_idx));
            record.round_type = round_type_idx
                .map(text)
                .filter(|v| !v.is_empty() && v != NA_PLACEHOLDER);

            for (column, idx) in &numeric {
                let coerced = coerce_numeric(raw.cell(i, *idx).unwrap_or(""));
                if coerced == Coerced::Malformed {
                    *failures.entry(*column).or_default() += 1;
                }
                record.set_numeric(*column, coerced.value());
            }
            rows.push(record);
        }

        for (column, count) in &failures {
            debug!("{} células inválidas em {} tratadas como ausentes", count, column);
        }

        let mut table = NormalizedTable::from_records(schema, rows);
        table.stats.coercion_failures = failures;
        info!(
            "📊 {} rodadas têm dados completos de timing on-chain",
            table.stats.complete_timing_rows
        );
        Ok(table)
    }
}

impl Default for SchemaNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
