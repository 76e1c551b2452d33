use std::collections::HashMap;

use serde::Deserialize;

pub const SEARCH_BUTTON: &str = "search_button";
pub const SEARCH_FIELD: &str = "search_field";
pub const SORT_DROPDOWN: &str = "sort_dropdown";
pub const ARTICLES_CONTAINER: &str = "articles_container";
pub const ARTICLE_TITLE: &str = "article_title_element";
pub const ARTICLE_DESCRIPTION: &str = "article_description_element";
pub const ARTICLE_DATE: &str = "article_date_element";
pub const ARTICLE_IMAGE: &str = "article_image_element";
pub const ARTICLE_LINK: &str = "article_link_element";
pub const SHOW_MORE_BUTTON: &str = "show_more_button";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "by", content = "value", rename_all = "lowercase")]
pub enum Locator {
    Css(String),
    Id(String),
    XPath(String),
}

/// Maps the names used by the pipeline to the markup of one site.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct SelectorTable {
    selectors: HashMap<String, Locator>,
}

impl SelectorTable {
    pub fn get(&self, name: &str) -> Option<&Locator> {
        self.selectors.get(name)
    }

    /// Entries from `overrides` replace the ones with the same name.
    pub fn merge(mut self, overrides: SelectorTable) -> Self {
        self.selectors.extend(overrides.selectors);
        self
    }
}

impl Default for SelectorTable {
    fn default() -> Self {
        let css = |s: &str| Locator::Css(s.to_string());
        let selectors = HashMap::from([
            (SEARCH_BUTTON.to_string(), css(r#"[class*="search-trigger"]"#)),
            (
                SEARCH_FIELD.to_string(),
                css(r#"[title="Type search term here"]"#),
            ),
            (
                SORT_DROPDOWN.to_string(),
                Locator::Id("search-sort-option".to_string()),
            ),
            (
                ARTICLES_CONTAINER.to_string(),
                css(r#"div[class*="search-result"] article.gc"#),
            ),
            (ARTICLE_TITLE.to_string(), css(r#"h3[class*="title"]"#)),
            (
                ARTICLE_DESCRIPTION.to_string(),
                css(r#"div[class*="excerpt"]"#),
            ),
            (
                ARTICLE_DATE.to_string(),
                css(r#"div.date-simple span[aria-hidden="true"]"#),
            ),
            (
                ARTICLE_IMAGE.to_string(),
                css(r#"div[class*=article-card] img"#),
            ),
            (
                ARTICLE_LINK.to_string(),
                css(r#"a[class*="clickable-card__link"]"#),
            ),
            (
                SHOW_MORE_BUTTON.to_string(),
                css(r#"button[class*="show-more-button"]"#),
            ),
        ]);

        SelectorTable { selectors }
    }
}
