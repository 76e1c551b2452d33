use std::path::Path;

use rust_xlsxwriter::{Workbook, XlsxError};

use crate::domain::article::ArticleRecord;

pub const SHEET_NAME: &str = "Articles Data";

pub const HEADERS: [&str; 6] = [
    "Title",
    "Date",
    "Description",
    "Screenshot Path",
    "Contains Money",
    "Search Phrase Count",
];

#[derive(Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Bool(bool),
    Number(u32),
}

pub fn to_row(record: &ArticleRecord) -> [Cell; 6] {
    [
        Cell::Text(record.title.clone()),
        Cell::Text(record.formatted_date()),
        Cell::Text(record.description.clone()),
        Cell::Text(record.screenshot_path.clone()),
        Cell::Bool(record.contains_money),
        Cell::Number(record.search_phrase_count),
    ]
}

/// Writes the records to `path`, replacing any previous workbook.
///
/// Errors are logged and swallowed so the run always completes.
pub fn save_articles(records: &[ArticleRecord], path: &Path) {
    log::info!("Generating workbook with {} articles", records.len());

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            log::error!("Error creating output directory {:?}: {}", parent, e);
            return;
        }
    }

    match write_workbook(records, path) {
        Ok(()) => log::info!("Workbook generated at {:?}", path),
        Err(e) => log::error!("Error saving workbook to {:?}: {}", path, e),
    }
}

pub fn write_workbook(records: &[ArticleRecord], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        for (col, cell) in to_row(record).into_iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Text(text) => worksheet.write_string(row, col, text)?,
                Cell::Bool(value) => worksheet.write_boolean(row, col, value)?,
                Cell::Number(value) => worksheet.write_number(row, col, value)?,
            };
        }
    }

    workbook.save(path)
}
