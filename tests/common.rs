#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use ractivitylog::core::normalize::normalize;
use ractivitylog::models::raw_table::RawTable;
use ractivitylog::models::record::ActivityRecord;
use rust_xlsxwriter::Workbook;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::FileOptions;

pub const HEADER: &str = "NAMAUSER,TANGGAL,JAM,PROGRAM,LOKASI";

/// Mixed sample: login/logout markers, a role account, daytime rows and
/// after-hours rows from two real users on two dates.
pub const SAMPLE_ROWS: &[&str] = &[
    "andi,2025-03-10,08:01:00,MASUK KE SYSTEM,Jakarta",
    "andi,2025-03-10,09:15:00,Entry Nota,Jakarta",
    "andi,2025-03-10,17:30:00,Entry Nota,Jakarta",
    "andi,2025-03-10,18:10:00,Cetak Laporan,Jakarta",
    "budi,2025-03-10,18:20:00,Entry Nota,Bandung",
    "budi,2025-03-10,19:05:00,Entry Nota,Bandung",
    "budi,2025-03-11,18:45:00,Posting Jurnal,Bandung",
    "3EDPO,2025-03-11,20:00:00,Backup Data,Jakarta",
    "andi,2025-03-11,18:40:00,Entry Nota,Jakarta",
    "andi,2025-03-11,21:00:00, keluar dari system ,Jakarta",
    "budi,2025-03-11,17:00:00,Entry Nota,Bandung",
];

/// Binary under test, always pointed at a config file that does not exist
/// so the built-in defaults are used.
pub fn rti() -> Command {
    let mut cmd = cargo_bin_cmd!("ractivitylog");
    let cfg = temp_path("no_config", "conf");
    cmd.args(["--config", &cfg]);
    cmd
}

/// Binary under test with an explicit configuration file.
pub fn rti_with_config(cfg: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("ractivitylog");
    cmd.args(["--config", cfg]);
    cmd
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("ractivitylog_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a CSV log (header + rows) and return its path.
pub fn write_csv(name: &str, header: &str, rows: &[&str]) -> String {
    let path = temp_path(name, "csv");
    let mut content = String::from(header);
    content.push('\n');
    for r in rows {
        content.push_str(r);
        content.push('\n');
    }
    fs::write(&path, content).expect("write csv fixture");
    path
}

/// Write an XLSX log with string cells and return its path.
pub fn write_xlsx(name: &str, header: &[&str], rows: &[Vec<&str>]) -> String {
    let path = temp_path(name, "xlsx");
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();

    for (c, h) in header.iter().enumerate() {
        ws.write_string(0, c as u16, *h).expect("write header");
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, v) in row.iter().enumerate() {
            ws.write_string((r + 1) as u32, c as u16, *v)
                .expect("write cell");
        }
    }

    workbook.save(&path).expect("save xlsx fixture");
    path
}

/// One cell of an ODS fixture.
pub enum OdsCell<'a> {
    Text(&'a str),
    /// `office:date-value`, e.g. `2025-03-10`
    Date(&'a str),
    /// `office:time-value`, e.g. `PT18H05M09S`
    Time(&'a str),
}

fn ods_cell_xml(cell: &OdsCell) -> String {
    match cell {
        OdsCell::Text(v) => format!(
            r#"<table:table-cell office:value-type="string"><text:p>{v}</text:p></table:table-cell>"#
        ),
        OdsCell::Date(v) => format!(
            r#"<table:table-cell office:value-type="date" office:date-value="{v}"><text:p>{v}</text:p></table:table-cell>"#
        ),
        OdsCell::Time(v) => format!(
            r#"<table:table-cell office:value-type="time" office:time-value="{v}"><text:p>{v}</text:p></table:table-cell>"#
        ),
    }
}

/// Write a single-sheet ODS log with typed cells and return its path.
pub fn write_ods(name: &str, header: &[&str], rows: &[Vec<OdsCell>]) -> String {
    let path = temp_path(name, "ods");

    let mut body = String::new();
    let header_row: Vec<OdsCell> = header.iter().map(|h| OdsCell::Text(h)).collect();
    for row in std::iter::once(&header_row).chain(rows.iter()) {
        body.push_str("<table:table-row>");
        for cell in row {
            body.push_str(&ods_cell_xml(cell));
        }
        body.push_str("</table:table-row>");
    }

    let content = format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" "#,
            r#"xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0" "#,
            r#"xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" office:version="1.2">"#,
            r#"<office:body><office:spreadsheet><table:table table:name="log">{}</table:table>"#,
            r#"</office:spreadsheet></office:body></office:document-content>"#
        ),
        body
    );
    let manifest = concat!(
        r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        r#"<manifest:manifest xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0" manifest:version="1.2">"#,
        r#"<manifest:file-entry manifest:full-path="/" manifest:media-type="application/vnd.oasis.opendocument.spreadsheet"/>"#,
        r#"<manifest:file-entry manifest:full-path="content.xml" manifest:media-type="text/xml"/>"#,
        r#"</manifest:manifest>"#
    );

    let file = fs::File::create(&path).expect("create ods fixture");
    let mut zip = ZipWriter::new(file);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Stored);

    for (entry, data) in [
        ("mimetype", "application/vnd.oasis.opendocument.spreadsheet"),
        ("META-INF/manifest.xml", manifest),
        ("content.xml", content.as_str()),
    ] {
        zip.start_file(entry, options).expect("start ods entry");
        zip.write_all(data.as_bytes()).expect("write ods entry");
    }
    zip.finish().expect("finish ods fixture");
    path
}

/// Normalized records from `NAMAUSER,TANGGAL,JAM,PROGRAM` tuples.
pub fn records(rows: &[[&str; 4]]) -> Vec<ActivityRecord> {
    let table = RawTable {
        headers: ["NAMAUSER", "TANGGAL", "JAM", "PROGRAM"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
        rows: rows
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    };
    normalize(&table).expect("normalize fixture")
}

/// Records of the sample log, LOKASI included.
pub fn sample_records() -> Vec<ActivityRecord> {
    let table = RawTable {
        headers: HEADER.split(',').map(str::to_string).collect(),
        rows: SAMPLE_ROWS
            .iter()
            .map(|r| r.split(',').map(str::to_string).collect())
            .collect(),
    };
    normalize(&table).expect("normalize sample")
}
