use memorix_core::error::Error;
use memorix_core::traits::DatasetLoader;
use memorix_dataset::{Column, CsvDatasetLoader, SchemaNormalizer};
use std::io::Write;

fn write_dataset(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let loader = CsvDatasetLoader::new(dir.path().join("nao_existe.csv"));
    match loader.load() {
        Err(Error::DatasetNotFound(path)) => assert!(path.ends_with("nao_existe.csv")),
        other => panic!("expected DatasetNotFound, got {other:?}"),
    }
}

#[test]
fn loads_quoted_na_and_extra_columns() {
    let file = write_dataset(
        "round_id,player_address,mouse_avg_speed,tx_position_in_block,gas_price_vs_network_median\n\
         r1,0xaaa,12.5,\"NA\",2.5\n\
         r2,0xaaa,3.1,0,\"3.2\"\n",
    );
    let raw = CsvDatasetLoader::new(file.path()).load().unwrap();
    assert_eq!(raw.headers.len(), 5);
    assert_eq!(raw.len(), 2);
    assert_eq!(raw.cell(0, 3), Some("NA"));

    let table = SchemaNormalizer::new().normalize(raw).unwrap();
    assert!(table.schema().contains(Column::TxPositionInBlock));
    assert_eq!(table.rows()[0].tx_position_in_block, None);
    assert_eq!(table.rows()[1].tx_position_in_block, Some(0.0));
    assert_eq!(table.rows()[1].gas_price_vs_network_median, Some(3.2));
}

#[test]
fn ragged_rows_are_tolerated() {
    let file = write_dataset(
        "round_id,player_address,similar_tx_in_same_block\n\
         r1,0xaaa\n\
         r2,0xbbb,4,extra\n",
    );
    let raw = CsvDatasetLoader::new(file.path()).load().unwrap();
    let table = SchemaNormalizer::new().normalize(raw).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0].similar_tx_in_same_block, None);
    assert_eq!(table.rows()[1].similar_tx_in_same_block, Some(4.0));
}

#[test]
fn semicolon_delimiter() {
    let file = write_dataset("round_id;player_address\nr1;0xaaa\n");
    let raw = CsvDatasetLoader::new(file.path()).with_delimiter(b';').load().unwrap();
    assert_eq!(raw.cell(0, 1), Some("0xaaa"));
}
