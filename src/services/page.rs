use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("No element found for {0}")]
    NotFound(String),

    #[error("Element went stale: {0}")]
    Stale(String),

    #[error("Unknown selector name: {0}")]
    UnknownSelector(String),

    #[error("WebDriver error: {0}")]
    WebDriver(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PageError {
    /// Element lookups that are expected to fail on a noisy result list.
    pub fn is_transient(&self) -> bool {
        matches!(self, PageError::NotFound(_) | PageError::Stale(_))
    }
}

/// Everything the pipeline needs from a live browser session.
///
/// Elements are addressed by selector name; the mapping to real locators
/// belongs to the implementation. Lookups wait a bounded amount of time
/// before failing with [`PageError::NotFound`].
#[async_trait]
pub trait Page: Send + Sync {
    type Element: Send + Sync;
    type Window: Clone + std::fmt::Debug + Send + Sync;

    async fn locate(&self, name: &str) -> Result<Self::Element, PageError>;

    async fn locate_all(&self, name: &str) -> Result<Vec<Self::Element>, PageError>;

    async fn locate_in(
        &self,
        parent: &Self::Element,
        name: &str,
    ) -> Result<Self::Element, PageError>;

    async fn text(&self, element: &Self::Element) -> Result<String, PageError>;

    async fn attribute(
        &self,
        element: &Self::Element,
        attribute: &str,
    ) -> Result<Option<String>, PageError>;

    async fn click(&self, element: &Self::Element) -> Result<(), PageError>;

    /// Clicks through `arguments[0].click()` for controls a native click misses.
    async fn click_via_script(&self, element: &Self::Element) -> Result<(), PageError>;

    /// Replaces the element's value with `text` and submits with Enter.
    async fn type_text(&self, element: &Self::Element, text: &str) -> Result<(), PageError>;

    async fn select_by_value(&self, element: &Self::Element, value: &str)
        -> Result<(), PageError>;

    async fn goto(&self, url: &str) -> Result<(), PageError>;

    async fn current_window(&self) -> Result<Self::Window, PageError>;

    async fn open_window(&self) -> Result<Self::Window, PageError>;

    async fn switch_to_window(&self, window: &Self::Window) -> Result<(), PageError>;

    async fn close_window(&self) -> Result<(), PageError>;

    async fn screenshot(&self, path: &Path) -> Result<(), PageError>;
}
