use std::path::Path;

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchInput {
    pub website: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub month_filter: u32,
    pub search_phrase: String,
}

#[derive(Deserialize)]
struct WorkItem {
    payload: SearchInput,
}

/// Reads a work-items file (`[{"payload": {...}}, ...]`).
///
/// When several items are queued the last one wins.
pub fn load_search_input(path: &Path) -> anyhow::Result<Option<SearchInput>> {
    let raw = std::fs::read_to_string(path)?;
    parse_work_items(&raw)
}

fn parse_work_items(raw: &str) -> anyhow::Result<Option<SearchInput>> {
    let items: Vec<WorkItem> = serde_json::from_str(raw)?;
    Ok(items.into_iter().last().map(|item| item.payload))
}
