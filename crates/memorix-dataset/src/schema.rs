use std::collections::BTreeSet;
use std::fmt;

/// Colunas reconhecidas do dataset. Qualquer outra coluna é ignorada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    RoundId,
    PlayerAddress,
    RoundType,
    TxSubmissionTimestamp,
    BlockTimestamp,
    BlockNumber,
    SubmissionToBlockDelayMs,
    GasPriceUsed,
    GasPriceVsNetworkMedian,
    TxPositionInBlock,
    SimilarTxInSameBlock,
    IsFrontRunCandidate,
    IsNearDayBoundary,
    BlockTimestampVsSystemTimeDiff,
    DailyChallengeCompletionTimeOfDay,
}

impl Column {
    pub const ALL: [Column; 15] = [
        Column::RoundId,
        Column::PlayerAddress,
        Column::RoundType,
        Column::TxSubmissionTimestamp,
        Column::BlockTimestamp,
        Column::BlockNumber,
        Column::SubmissionToBlockDelayMs,
        Column::GasPriceUsed,
        Column::GasPriceVsNetworkMedian,
        Column::TxPositionInBlock,
        Column::SimilarTxInSameBlock,
        Column::IsFrontRunCandidate,
        Column::IsNearDayBoundary,
        Column::BlockTimestampVsSystemTimeDiff,
        Column::DailyChallengeCompletionTimeOfDay,
    ];

    /// Colunas convertidas para número pelo normalizador
    pub const NUMERIC: [Column; 12] = [
        Column::TxSubmissionTimestamp,
        Column::BlockTimestamp,
        Column::BlockNumber,
        Column::SubmissionToBlockDelayMs,
        Column::GasPriceUsed,
        Column::GasPriceVsNetworkMedian,
        Column::TxPositionInBlock,
        Column::SimilarTxInSameBlock,
        Column::IsFrontRunCandidate,
        Column::IsNearDayBoundary,
        Column::BlockTimestampVsSystemTimeDiff,
        Column::DailyChallengeCompletionTimeOfDay,
    ];

    /// Subconjunto de timing on-chain usado no diagnóstico de completude
    pub const BLOCKCHAIN_TIMING: [Column; 6] = [
        Column::TxSubmissionTimestamp,
        Column::BlockTimestamp,
        Column::BlockNumber,
        Column::SubmissionToBlockDelayMs,
        Column::GasPriceUsed,
        Column::TxPositionInBlock,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Column::RoundId => "round_id",
            Column::PlayerAddress => "player_address",
            Column::RoundType => "round_type",
            Column::TxSubmissionTimestamp => "tx_submission_timestamp",
            Column::BlockTimestamp => "block_timestamp",
            Column::BlockNumber => "block_number",
            Column::SubmissionToBlockDelayMs => "submission_to_block_delay_ms",
            Column::GasPriceUsed => "gas_price_used",
            Column::GasPriceVsNetworkMedian => "gas_price_vs_network_median",
            Column::TxPositionInBlock => "tx_position_in_block",
            Column::SimilarTxInSameBlock => "similar_tx_in_same_block",
            Column::IsFrontRunCandidate => "is_front_run_candidate",
            Column::IsNearDayBoundary => "is_near_day_boundary",
            Column::BlockTimestampVsSystemTimeDiff => "block_timestamp_vs_system_time_diff",
            Column::DailyChallengeCompletionTimeOfDay => "daily_challenge_completion_time_of_day",
        }
    }

    pub fn from_name(name: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Conjunto de colunas reconhecidas presentes no cabeçalho.
///
/// Os detectores consultam o schema antes de executar; coluna ausente
/// significa detector degradado, não erro.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    columns: BTreeSet<Column>,
}

impl Schema {
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        let columns = headers
            .iter()
            .filter_map(|h| Column::from_name(h.as_ref().trim()))
            .collect();
        Self { columns }
    }

    pub fn with_columns(columns: impl IntoIterator<Item = Column>) -> Self {
        Self { columns: columns.into_iter().collect() }
    }

    pub fn contains(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    pub fn has_all(&self, columns: &[Column]) -> bool {
        columns.iter().all(|c| self.contains(*c))
    }

    /// Colunas da lista que não existem no schema
    pub fn missing(&self, columns: &[Column]) -> Vec<Column> {
        columns.iter().copied().filter(|c| !self.contains(*c)).collect()
    }

    pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.columns.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_ignores_unknown_headers() {
        let schema = Schema::from_headers(&["round_id", " player_address ", "mouse_avg_speed"]);
        assert!(schema.contains(Column::RoundId));
        assert!(schema.contains(Column::PlayerAddress));
        assert_eq!(schema.columns().count(), 2);
    }

    #[test]
    fn missing_lists_absent_columns() {
        let schema = Schema::with_columns([Column::RoundId, Column::TxPositionInBlock]);
        assert!(!schema.has_all(&[Column::TxPositionInBlock, Column::SimilarTxInSameBlock]));
        assert_eq!(
            schema.missing(&[Column::TxPositionInBlock, Column::SimilarTxInSameBlock]),
            vec![Column::SimilarTxInSameBlock]
        );
    }

    #[test]
    fn names_round_trip() {
        for c in Column::ALL {
            assert_eq!(Column::from_name(c.name()), Some(c));
        }
    }
}
