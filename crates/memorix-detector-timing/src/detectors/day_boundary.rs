use super::RowDetector;
use memorix_core::types::{AttackType, Evidence};
use memorix_dataset::{Column, RoundRecord};
use serde_json::json;

/// Hora de conclusão abaixo da qual a rodada está logo após a meia-noite
pub const EARLY_HOUR: f64 = 0.1;
/// Hora de conclusão acima da qual a rodada está logo antes da meia-noite
pub const LATE_HOUR: f64 = 23.9;
/// Diferença mínima (exclusiva) de timestamp, em ms
pub const MIN_TIMESTAMP_DIFF_MS: f64 = 30_000.0;

/// Detector de exploração da virada do desafio diário
pub struct DayBoundaryDetector;

impl DayBoundaryDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DayBoundaryDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl RowDetector for DayBoundaryDetector {
    fn name(&self) -> &str {
        "DayBoundaryDetector"
    }

    fn attack_type(&self) -> AttackType {
        AttackType::DayBoundaryExploitation
    }

    fn confidence(&self) -> f64 {
        0.87
    }

    fn required_columns(&self) -> &'static [Column] {
        &[
            Column::DailyChallengeCompletionTimeOfDay,
            Column::BlockTimestampVsSystemTimeDiff,
        ]
    }

    fn matches(&self, row: &RoundRecord) -> bool {
        let near_midnight = matches!(
            row.daily_challenge_completion_time_of_day,
            Some(h) if h < EARLY_HOUR || h > LATE_HOUR
        );
        near_midnight
            && matches!(row.block_timestamp_vs_system_time_diff, Some(d) if d > MIN_TIMESTAMP_DIFF_MS)
    }

    fn evidence(&self, row: &RoundRecord) -> Evidence {
        let mut data = Evidence::new();
        data.insert("completion_hour".to_string(), json!(row.daily_challenge_completion_time_of_day));
        data.insert("timestamp_diff_ms".to_string(), json!(row.block_timestamp_vs_system_time_diff));
        data.insert("round_type".to_string(), json!(row.round_type));
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(hour: f64, diff: f64) -> RoundRecord {
        RoundRecord {
            daily_challenge_completion_time_of_day: Some(hour),
            block_timestamp_vs_system_time_diff: Some(diff),
            round_type: Some("DAILY".into()),
            ..RoundRecord::new("r1", "0xaaa")
        }
    }

    #[test]
    fn both_sides_of_midnight() {
        let d = DayBoundaryDetector::new();
        assert!(d.matches(&row(0.05, 45_000.0)));
        assert!(d.matches(&row(23.95, 45_000.0)));
        assert!(!d.matches(&row(12.0, 45_000.0)));
        assert!(!d.matches(&row(0.05, 30_000.0)));
    }

    #[test]
    fn round_type_in_evidence() {
        let ev = DayBoundaryDetector::new().evidence(&row(0.05, 45_000.0));
        assert_eq!(ev["round_type"], "DAILY");
    }
}
