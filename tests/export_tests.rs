mod common;
use calamine::{Data, Reader, open_workbook_auto};
use common::{sample_records, temp_path};
use ractivitylog::config::Config;
use ractivitylog::core::filters::Selection;
use ractivitylog::core::pipeline::FilterChain;
use ractivitylog::export::csv_cache::{decode_csv, encode_csv};
use ractivitylog::export::model::DetailRow;
use ractivitylog::export::{CsvCache, DetailTable, ExportLogic, ExportFormat};
use serde_json::Value;
use std::fs;
use std::path::Path;

fn detail(show_location: bool, has_location: bool) -> DetailTable {
    let chain = FilterChain::from_config(&Config::default()).unwrap();
    let out = chain.run(sample_records(), &Selection::default());
    DetailTable::build(&out.non_role, show_location, has_location)
}

#[test]
fn test_csv_header_and_rows() {
    let table = detail(false, true);
    let text = String::from_utf8(encode_csv(&table).unwrap()).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "NAMAUSER,TANGGAL,JAM_TEXT,PROGRAM");
    assert_eq!(lines[1], "andi,2025-03-10,17:30:00,Entry Nota");
    assert_eq!(lines.len(), 7);
    assert!(!text.contains("3EDPO"));
}

#[test]
fn test_location_column_only_when_asked_and_present() {
    assert_eq!(detail(true, true).headers().last(), Some(&"LOKASI"));
    assert!(!detail(false, true).headers().contains(&"LOKASI"));
    // toggle has no effect without the column
    assert!(!detail(true, false).headers().contains(&"LOKASI"));
    assert!(detail(true, false).rows.iter().all(|r| r.location.is_none()));
}

#[test]
fn test_csv_round_trip() {
    for table in [detail(true, true), detail(false, true)] {
        let bytes = encode_csv(&table).unwrap();
        let decoded = decode_csv(&bytes).unwrap();
        assert_eq!(decoded, table.rows);
    }
}

#[test]
fn test_csv_cache_memoizes_by_content() {
    let mut cache = CsvCache::new();
    let with_loc = detail(true, true);
    let without_loc = detail(false, true);

    let first = cache.encode(&with_loc).unwrap().to_vec();
    let again = cache.encode(&with_loc.clone()).unwrap().to_vec();
    assert_eq!(first, again);
    assert_eq!(cache.len(), 1);

    let other = cache.encode(&without_loc).unwrap().to_vec();
    assert_ne!(first, other);
    assert_eq!(cache.len(), 2);
    assert_eq!(first, encode_csv(&with_loc).unwrap());
}

#[test]
fn test_export_csv_file() {
    let out = temp_path("export_detail", "csv");
    let mut cache = CsvCache::new();

    ExportLogic::export(&detail(true, true), ExportFormat::Csv, Path::new(&out), true, &mut cache)
        .unwrap();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("NAMAUSER,TANGGAL,JAM_TEXT,PROGRAM,LOKASI\n"));
    assert!(content.contains("budi,2025-03-11,18:45:00,Posting Jurnal,Bandung"));
}

#[test]
fn test_export_json_file() {
    let out = temp_path("export_detail", "json");
    let mut cache = CsvCache::new();

    ExportLogic::export(&detail(false, true), ExportFormat::Json, Path::new(&out), true, &mut cache)
        .unwrap();

    let json: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0]["NAMAUSER"], "andi");
    assert_eq!(rows[0]["JAM_TEXT"], "17:30:00");
    assert!(rows[0].get("LOKASI").is_none());
    assert!(cache.is_empty());
}

#[test]
fn test_export_xlsx_file() {
    let out = temp_path("export_detail", "xlsx");
    let mut cache = CsvCache::new();

    ExportLogic::export(&detail(true, true), ExportFormat::Xlsx, Path::new(&out), true, &mut cache)
        .unwrap();

    let mut workbook = open_workbook_auto(&out).unwrap();
    let range = workbook.worksheet_range_at(0).unwrap().unwrap();
    assert_eq!(range.height(), 7);
    assert_eq!(range.width(), 5);
}

#[test]
fn test_xlsx_keeps_date_like_names_as_text() {
    let out = temp_path("export_date_like_names", "xlsx");
    let mut cache = CsvCache::new();
    let table = DetailTable {
        include_location: false,
        rows: vec![DetailRow {
            user: "2025-03-10".to_string(),
            date: "2025-03-10".to_string(),
            time: "18:00:00".to_string(),
            program: "18:00:00".to_string(),
            location: None,
        }],
    };

    ExportLogic::export(&table, ExportFormat::Xlsx, Path::new(&out), true, &mut cache).unwrap();

    let mut workbook = open_workbook_auto(&out).unwrap();
    let range = workbook.worksheet_range_at(0).unwrap().unwrap();
    assert_eq!(range.get((1, 0)), Some(&Data::String("2025-03-10".to_string())));
    assert!(matches!(range.get((1, 1)), Some(Data::DateTime(_))));
    assert!(matches!(range.get((1, 2)), Some(Data::DateTime(_))));
    assert_eq!(range.get((1, 3)), Some(&Data::String("18:00:00".to_string())));
}

#[test]
fn test_empty_table_is_not_written() {
    let out = temp_path("export_empty", "csv");
    let mut cache = CsvCache::new();

    ExportLogic::export(&DetailTable::default(), ExportFormat::Csv, Path::new(&out), true, &mut cache)
        .unwrap();

    assert!(!Path::new(&out).exists());
}
