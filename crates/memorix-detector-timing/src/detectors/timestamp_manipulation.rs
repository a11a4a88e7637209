use super::RowDetector;
use memorix_core::types::{AttackType, Evidence};
use memorix_dataset::{flag_is, Column, RoundRecord};
use serde_json::json;

/// Diferença mínima (exclusiva) entre timestamp do bloco e do sistema, em ms
pub const MIN_TIMESTAMP_DIFF_MS: f64 = 10_000.0;

/// Detector de manipulação de timestamp perto da virada do dia
pub struct TimestampManipulationDetector;

impl TimestampManipulationDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TimestampManipulationDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl RowDetector for TimestampManipulationDetector {
    fn name(&self) -> &str {
        "TimestampManipulationDetector"
    }

    fn attack_type(&self) -> AttackType {
        AttackType::TimestampManipulation
    }

    fn confidence(&self) -> f64 {
        0.88
    }

    fn required_columns(&self) -> &'static [Column] {
        &[Column::BlockTimestampVsSystemTimeDiff, Column::IsNearDayBoundary]
    }

    fn matches(&self, row: &RoundRecord) -> bool {
        matches!(row.block_timestamp_vs_system_time_diff, Some(d) if d > MIN_TIMESTAMP_DIFF_MS)
            && flag_is(row.is_near_day_boundary, 1.0)
    }

    fn evidence(&self, row: &RoundRecord) -> Evidence {
        let mut data = Evidence::new();
        data.insert("timestamp_diff_ms".to_string(), json!(row.block_timestamp_vs_system_time_diff));
        data.insert("near_boundary".to_string(), json!(flag_is(row.is_near_day_boundary, 1.0)));
        data.insert("completion_hour".to_string(), json!(row.daily_challenge_completion_time_of_day));
        data
    }
}
