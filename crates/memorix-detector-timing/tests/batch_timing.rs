use memorix_core::types::AttackType;
use memorix_dataset::{Column, NormalizedTable, RoundRecord, Schema};
use memorix_detector_timing::detectors::BatchTimingDetector;
use memorix_detector_timing::GroupDetector;

fn round(id: &str, player: &str, similar: Option<f64>) -> RoundRecord {
    RoundRecord {
        similar_tx_in_same_block: similar,
        ..RoundRecord::new(id, player)
    }
}

fn table(rows: Vec<RoundRecord>) -> NormalizedTable {
    NormalizedTable::from_records(Schema::with_columns(Column::ALL), rows)
}

#[test]
fn one_detection_per_player() {
    let rows = vec![
        round("r1", "0xbatch", Some(5.0)),
        round("r2", "0xbatch", Some(1.0)),
        round("r3", "0xbatch", Some(5.0)),
    ];
    let hits = BatchTimingDetector::new().detect(&table(rows)).unwrap();
    assert_eq!(hits.len(), 1);
    let det = &hits[0];
    assert_eq!(det.attack_type, AttackType::BatchTiming);
    assert_eq!(det.confidence, 0.79);
    assert_eq!(det.round_id, None);
    assert_eq!(det.evidence["batch_round_count"], 2);
    assert_eq!(det.evidence["round_ids"], serde_json::json!(["r1", "r3"]));
}

#[test]
fn needs_three_rounds_and_two_batches() {
    let two_rounds = vec![round("r1", "0xa", Some(5.0)), round("r2", "0xa", Some(5.0))];
    assert!(BatchTimingDetector::new().detect(&table(two_rounds)).unwrap().is_empty());

    let one_batch = vec![
        round("r1", "0xa", Some(5.0)),
        round("r2", "0xa", Some(3.0)),
        round("r3", "0xa", None),
    ];
    assert!(BatchTimingDetector::new().detect(&table(one_batch)).unwrap().is_empty());
}

#[test]
fn samples_at_most_five_round_ids() {
    let rows: Vec<RoundRecord> = (0..8)
        .map(|i| round(&format!("r{i}"), "0xbot", Some(9.0)))
        .collect();
    let hits = BatchTimingDetector::new().detect(&table(rows)).unwrap();
    assert_eq!(hits[0].evidence["batch_round_count"], 8);
    assert_eq!(
        hits[0].evidence["round_ids"],
        serde_json::json!(["r0", "r1", "r2", "r3", "r4"])
    );
}

#[test]
fn players_in_address_order() {
    let mut rows = Vec::new();
    for p in ["0xcc", "0xaa"] {
        for i in 0..3 {
            rows.push(round(&format!("{p}-{i}"), p, Some(4.0)));
        }
    }
    let hits = BatchTimingDetector::new().detect(&table(rows)).unwrap();
    let players: Vec<_> = hits.iter().map(|d| d.player_address.as_str()).collect();
    assert_eq!(players, vec!["0xaa", "0xcc"]);
}
