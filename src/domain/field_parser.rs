use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Day, abbreviated month and year as printed on the result cards, e.g. `18 JUL 2024`.
pub const DATE_FORMAT: &str = "%d %b %Y";

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{1,2} \w{3} \d{4}").unwrap());

static MONEY_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"\$\d{1,3}(,\d{3})*(\.\d{1,2})?").unwrap(), // $111,111.11
        Regex::new(r"\d{1,3}(,\d{3})*(\.\d{1,2})? dollars").unwrap(), // 11 dollars
        Regex::new(r"\d{1,3}(,\d{3})*(\.\d{1,2})? USD").unwrap(), // 11 USD
    ]
});

static ELLIPSIS_REMAINDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\.\.\.\s*(.+)").unwrap());

/// Returns the first `D MMM YYYY` looking substring, or an empty string.
pub fn extract_date(text: &str) -> String {
    DATE_PATTERN
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            log::error!("Error parsing date {:?}: {}", date_str, e);
            None
        }
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

pub fn contains_money(text: &str) -> bool {
    MONEY_PATTERNS.iter().any(|pattern| pattern.is_match(text))
}

/// Drops the teaser before the first `...` when something follows it.
pub fn clean_description(description: &str) -> String {
    match ELLIPSIS_REMAINDER.captures(description) {
        Some(caps) => caps[1].to_string(),
        None => description.to_string(),
    }
}

pub fn count_phrase(text: &str, phrase: &str) -> u32 {
    if phrase.is_empty() {
        return 0;
    }

    text.to_lowercase()
        .matches(&phrase.to_lowercase())
        .count() as u32
}
