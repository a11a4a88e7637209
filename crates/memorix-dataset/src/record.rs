use crate::schema::Column;

/// Uma linha normalizada do dataset.
///
/// Campos numéricos são `None` quando a célula não existe ou não pôde ser
/// convertida. `None` significa "desconhecido": nunca zero, nunca falso.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundRecord {
    pub round_id: String,
    pub player_address: String,
    pub round_type: Option<String>,
    pub tx_submission_timestamp: Option<f64>,
    pub block_timestamp: Option<f64>,
    pub block_number: Option<f64>,
    pub submission_to_block_delay_ms: Option<f64>,
    pub gas_price_used: Option<f64>,
    pub gas_price_vs_network_median: Option<f64>,
    pub tx_position_in_block: Option<f64>,
    pub similar_tx_in_same_block: Option<f64>,
    pub is_front_run_candidate: Option<f64>,
    pub is_near_day_boundary: Option<f64>,
    pub block_timestamp_vs_system_time_diff: Option<f64>,
    pub daily_challenge_completion_time_of_day: Option<f64>,
}

impl RoundRecord {
    pub fn new(round_id: impl Into<String>, player_address: impl Into<String>) -> Self {
        Self {
            round_id: round_id.into(),
            player_address: player_address.into(),
            ..Default::default()
        }
    }

    /// Valor numérico da coluna; colunas textuais retornam `None`
    pub fn numeric(&self, column: Column) -> Option<f64> {
        match column {
            Column::TxSubmissionTimestamp => self.tx_submission_timestamp,
            Column::BlockTimestamp => self.block_timestamp,
            Column::BlockNumber => self.block_number,
            Column::SubmissionToBlockDelayMs => self.submission_to_block_delay_ms,
            Column::GasPriceUsed => self.gas_price_used,
            Column::GasPriceVsNetworkMedian => self.gas_price_vs_network_median,
            Column::TxPositionInBlock => self.tx_position_in_block,
            Column::SimilarTxInSameBlock => self.similar_tx_in_same_block,
            Column::IsFrontRunCandidate => self.is_front_run_candidate,
            Column::IsNearDayBoundary => self.is_near_day_boundary,
            Column::BlockTimestampVsSystemTimeDiff => self.block_timestamp_vs_system_time_diff,
            Column::DailyChallengeCompletionTimeOfDay => self.daily_challenge_completion_time_of_day,
            Column::RoundId | Column::PlayerAddress | Column::RoundType => None,
        }
    }

    pub fn set_numeric(&mut self, column: Column, value: Option<f64>) {
        let slot = match column {
            Column::TxSubmissionTimestamp => &mut self.tx_submission_timestamp,
            Column::BlockTimestamp => &mut self.block_timestamp,
            Column::BlockNumber => &mut self.block_number,
            Column::SubmissionToBlockDelayMs => &mut self.submission_to_block_delay_ms,
            Column::GasPriceUsed => &mut self.gas_price_used,
            Column::GasPriceVsNetworkMedian => &mut self.gas_price_vs_network_median,
            Column::TxPositionInBlock => &mut self.tx_position_in_block,
            Column::SimilarTxInSameBlock => &mut self.similar_tx_in_same_block,
            Column::IsFrontRunCandidate => &mut self.is_front_run_candidate,
            Column::IsNearDayBoundary => &mut self.is_near_day_boundary,
            Column::BlockTimestampVsSystemTimeDiff => &mut self.block_timestamp_vs_system_time_diff,
            Column::DailyChallengeCompletionTimeOfDay => {
                &mut self.daily_challenge_completion_time_of_day
            }
            Column::RoundId | Column::PlayerAddress | Column::RoundType => return,
        };
        *slot = value;
    }

    /// Verdadeiro se todas as colunas informadas têm valor
    pub fn has_all(&self, columns: &[Column]) -> bool {
        columns.iter().all(|c| self.numeric(*c).is_some())
    }
}

/// Compara uma flag 0/1 numericamente; ausente nunca é igual a nada.
pub fn flag_is(value: Option<f64>, expected: f64) -> bool {
    matches!(value, Some(v) if v == expected)
}
