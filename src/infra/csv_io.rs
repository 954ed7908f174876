//! # CSV Module / CSV 模块
//!
//! Reading reviewed translation sheets and writing export sheets.
//!
//! 读取经审阅的翻译表格并写出导出表格。
//!
//! ## Format / 格式
//!
//! - Export: header `English,Translation`, or `Key,English,Translation` with keys
//! - Import: first record is always treated as the header; the first two columns
//!   are English and Translation, extra columns are ignored and shorter records
//!   are skipped. Blank lines still advance the row number
//!
//! - 导出：表头为 `English,Translation`，包含键时为 `Key,English,Translation`
//! - 导入：第一条记录始终视为表头；前两列分别为英文和译文，多余的列被忽略，
//!   更短的记录被跳过。空行仍会使行号递增

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::fs;
use std::path::Path;

use crate::core::error::SyncError;
use crate::core::export::ExportRow;
use crate::core::reconcile::CsvRow;
use crate::infra::fs::write_atomic;

/// Spreadsheet row number of the header record.
/// 表头记录所在的表格行号。
const HEADER_ROW: usize = 1;

/// Reads all usable data rows from a reviewed CSV file, in file order.
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Returns
/// The rows with at least two columns, `FileNotFound` if the path is missing,
/// or `MalformedCsv` on a parse or encoding error
pub fn read_rows(path: &Path) -> Result<Vec<CsvRow>, SyncError> {
    if !path.exists() {
        return Err(SyncError::FileNotFound(path.to_path_buf()));
    }
    let data = fs::read(path).map_err(|e| SyncError::io(path, e))?;
    parse_rows(&data).map_err(|source| SyncError::MalformedCsv {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses CSV bytes into data rows numbered the way a spreadsheet shows them:
/// the first record is the header, blank lines occupy a row of their own and a
/// record whose quoted fields span several lines still counts as one row.
///
/// 将 CSV 字节解析为数据行，行号与电子表格一致：第一条记录为表头，
/// 空行单独占一行，引号字段跨多行的记录仍只算一行。
pub fn parse_rows(data: &[u8]) -> Result<Vec<CsvRow>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut record = StringRecord::new();
    let mut rows = Vec::new();
    let mut next_row = HEADER_ROW;
    let mut cursor = 0;
    let mut header_seen = false;

    while reader.read_record(&mut record)? {
        let row = next_row + blank_lines_at(data, cursor);
        next_row = row + 1;
        cursor = usize::try_from(reader.position().byte()).unwrap_or(data.len());

        if !header_seen {
            header_seen = true;
            continue;
        }
        if let Some(parsed) = CsvRow::from_fields(row, record.iter()) {
            rows.push(parsed);
        }
    }
    Ok(rows)
}

/// Counts the empty lines starting at byte `at`, which the reader skips
/// without yielding a record.
fn blank_lines_at(data: &[u8], mut at: usize) -> usize {
    // The reader stops between the CR and LF of a CRLF terminator.
    if at > 0 && data.get(at - 1) == Some(&b'\r') && data.get(at) == Some(&b'\n') {
        at += 1;
    }

    let mut blanks = 0;
    while let Some(&byte) = data.get(at) {
        match byte {
            b'\n' => at += 1,
            b'\r' if data.get(at + 1) == Some(&b'\n') => at += 2,
            b'\r' => at += 1,
            _ => break,
        }
        blanks += 1;
    }
    blanks
}

/// Renders export rows as CSV bytes with CRLF record terminators.
/// 将导出行渲染为使用 CRLF 记录终止符的 CSV 字节。
pub fn render_export(rows: &[ExportRow], include_keys: bool) -> Result<Vec<u8>, csv::Error> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    if include_keys {
        writer.write_record(["Key", "English", "Translation"])?;
        for row in rows {
            writer.write_record([&row.key, &row.source, &row.translation])?;
        }
    } else {
        writer.write_record(["English", "Translation"])?;
        for row in rows {
            writer.write_record([&row.source, &row.translation])?;
        }
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

/// Writes an export sheet to `path`, replacing any existing file atomically.
pub fn write_export(path: &Path, rows: &[ExportRow], include_keys: bool) -> Result<(), SyncError> {
    let bytes = render_export(rows, include_keys).map_err(|source| SyncError::MalformedCsv {
        path: path.to_path_buf(),
        source,
    })?;
    write_atomic(path, &bytes)
}
