pub mod article;
pub mod field_parser;
pub mod recency;
pub mod selector;
pub mod work_item;
