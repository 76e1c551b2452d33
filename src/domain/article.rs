use chrono::NaiveDate;

use super::field_parser::format_date;

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleRecord {
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    pub image_url: String,
    pub screenshot_path: String,
    pub contains_money: bool,
    pub search_phrase_count: u32,
}

impl ArticleRecord {
    pub fn formatted_date(&self) -> String {
        format_date(self.date)
    }
}

#[derive(Debug, PartialEq)]
pub enum ArticleOutcome {
    Kept(ArticleRecord),
    Skipped(SkipReason),
}

#[derive(Debug, PartialEq)]
pub enum SkipReason {
    Placeholder,
    MissingTitle,
    UnparsableDate(String),
    OutsideWindow(NaiveDate),
    Failed(String),
}

impl ArticleOutcome {
    pub fn kept(self) -> Option<ArticleRecord> {
        match self {
            ArticleOutcome::Kept(record) => Some(record),
            ArticleOutcome::Skipped(_) => None,
        }
    }
}
