use std::{
    collections::HashSet,
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use async_trait::async_trait;

use crate::domain::selector::{
    ARTICLES_CONTAINER, ARTICLE_DATE, ARTICLE_DESCRIPTION, ARTICLE_IMAGE, ARTICLE_LINK,
    ARTICLE_TITLE, SEARCH_BUTTON, SEARCH_FIELD, SHOW_MORE_BUTTON, SORT_DROPDOWN,
};

use super::{Page, PageError};

#[derive(Debug, Clone, Default)]
pub struct FakeArticle {
    pub title: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub stale: bool,
}

impl FakeArticle {
    pub fn new(title: &str, date: &str, description: &str) -> Self {
        FakeArticle {
            title: Some(title.to_string()),
            date: Some(date.to_string()),
            description: Some(description.to_string()),
            ..Default::default()
        }
    }

    pub fn with_image(mut self, url: &str) -> Self {
        self.image = Some(url.to_string());
        self
    }

    pub fn with_link(mut self, url: &str) -> Self {
        self.link = Some(url.to_string());
        self
    }

    pub fn stale(mut self) -> Self {
        self.stale = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FakeElement {
    Control(&'static str),
    Article(usize),
    Field(usize, &'static str),
}

#[derive(Default)]
struct State {
    show_more_remaining: u32,
    script_clicks: u32,
    actions: Vec<String>,
    windows: Vec<String>,
    active: String,
    opened: u32,
    visited: Vec<(String, String)>,
    screenshots: Vec<(String, PathBuf)>,
}

/// In-memory stand-in for a browser session showing a search result list.
pub struct FakePage {
    articles: Vec<FakeArticle>,
    broken_show_more: bool,
    search_ui: bool,
    failing_screenshots: bool,
    failing_tab_switch: bool,
    unreachable: HashSet<String>,
    state: Mutex<State>,
}

impl Default for FakePage {
    fn default() -> Self {
        FakePage {
            articles: vec![],
            broken_show_more: false,
            search_ui: false,
            failing_screenshots: false,
            failing_tab_switch: false,
            unreachable: HashSet::new(),
            state: Mutex::new(State {
                windows: vec!["main".to_string()],
                active: "main".to_string(),
                ..Default::default()
            }),
        }
    }
}

impl FakePage {
    pub fn with_articles(mut self, articles: Vec<FakeArticle>) -> Self {
        self.articles = articles;
        self
    }

    pub fn with_show_more(self, times: u32) -> Self {
        self.state.lock().unwrap().show_more_remaining = times;
        self
    }

    pub fn with_broken_show_more(mut self) -> Self {
        self.broken_show_more = true;
        self
    }

    pub fn with_search_ui(mut self) -> Self {
        self.search_ui = true;
        self
    }

    pub fn with_failing_screenshots(mut self) -> Self {
        self.failing_screenshots = true;
        self
    }

    /// Switching into any opened tab fails; the original window still works.
    pub fn with_failing_tab_switch(mut self) -> Self {
        self.failing_tab_switch = true;
        self
    }

    pub fn with_unreachable(mut self, url: &str) -> Self {
        self.unreachable.insert(url.to_string());
        self
    }

    pub fn script_clicks(&self) -> u32 {
        self.state.lock().unwrap().script_clicks
    }

    pub fn actions(&self) -> Vec<String> {
        self.state.lock().unwrap().actions.clone()
    }

    pub fn active_window(&self) -> String {
        self.state.lock().unwrap().active.clone()
    }

    pub fn open_windows(&self) -> Vec<String> {
        self.state.lock().unwrap().windows.clone()
    }

    pub fn visited(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().visited.clone()
    }

    pub fn screenshots(&self) -> Vec<(String, PathBuf)> {
        self.state.lock().unwrap().screenshots.clone()
    }

    fn article(&self, index: usize) -> Result<&FakeArticle, PageError> {
        match self.articles.get(index) {
            Some(article) if article.stale => Err(PageError::Stale(format!("article {}", index))),
            Some(article) => Ok(article),
            None => Err(PageError::NotFound(format!("article {}", index))),
        }
    }

    fn field(&self, index: usize, name: &str) -> Result<Option<&String>, PageError> {
        let article = self.article(index)?;
        let value = match name {
            ARTICLE_TITLE => article.title.as_ref(),
            ARTICLE_DATE => article.date.as_ref(),
            ARTICLE_DESCRIPTION => article.description.as_ref(),
            ARTICLE_IMAGE => article.image.as_ref(),
            ARTICLE_LINK => article.link.as_ref(),
            other => return Err(PageError::UnknownSelector(other.to_string())),
        };
        Ok(value)
    }
}

#[async_trait]
impl Page for FakePage {
    type Element = FakeElement;
    type Window = String;

    async fn locate(&self, name: &str) -> Result<FakeElement, PageError> {
        match name {
            SHOW_MORE_BUTTON if self.state.lock().unwrap().show_more_remaining > 0 => {
                Ok(FakeElement::Control(SHOW_MORE_BUTTON))
            }
            SEARCH_BUTTON if self.search_ui => Ok(FakeElement::Control(SEARCH_BUTTON)),
            SEARCH_FIELD if self.search_ui => Ok(FakeElement::Control(SEARCH_FIELD)),
            SORT_DROPDOWN if self.search_ui => Ok(FakeElement::Control(SORT_DROPDOWN)),
            other => Err(PageError::NotFound(other.to_string())),
        }
    }

    async fn locate_all(&self, name: &str) -> Result<Vec<FakeElement>, PageError> {
        if name != ARTICLES_CONTAINER || self.articles.is_empty() {
            return Err(PageError::NotFound(name.to_string()));
        }
        Ok((0..self.articles.len()).map(FakeElement::Article).collect())
    }

    async fn locate_in(&self, parent: &FakeElement, name: &str) -> Result<FakeElement, PageError> {
        let FakeElement::Article(index) = parent else {
            return Err(PageError::NotFound(name.to_string()));
        };
        let field = [
            ARTICLE_TITLE,
            ARTICLE_DATE,
            ARTICLE_DESCRIPTION,
            ARTICLE_IMAGE,
            ARTICLE_LINK,
        ]
        .into_iter()
        .find(|field| *field == name)
        .ok_or_else(|| PageError::UnknownSelector(name.to_string()))?;

        match self.field(*index, field)? {
            Some(_) => Ok(FakeElement::Field(*index, field)),
            None => Err(PageError::NotFound(name.to_string())),
        }
    }

    async fn text(&self, element: &FakeElement) -> Result<String, PageError> {
        match element {
            FakeElement::Field(index, name) => Ok(self
                .field(*index, name)?
                .cloned()
                .unwrap_or_default()),
            other => Ok(format!("{:?}", other)),
        }
    }

    async fn attribute(
        &self,
        element: &FakeElement,
        attribute: &str,
    ) -> Result<Option<String>, PageError> {
        match element {
            FakeElement::Field(index, name)
                if matches!(
                    (*name, attribute),
                    (ARTICLE_IMAGE, "src") | (ARTICLE_LINK, "href")
                ) =>
            {
                Ok(self.field(*index, name)?.cloned())
            }
            _ => Ok(None),
        }
    }

    async fn click(&self, element: &FakeElement) -> Result<(), PageError> {
        self.state
            .lock()
            .unwrap()
            .actions
            .push(format!("click {:?}", element));
        Ok(())
    }

    async fn click_via_script(&self, element: &FakeElement) -> Result<(), PageError> {
        let mut state = self.state.lock().unwrap();
        state.script_clicks += 1;
        if *element == FakeElement::Control(SHOW_MORE_BUTTON) {
            if self.broken_show_more {
                return Err(PageError::Stale(SHOW_MORE_BUTTON.to_string()));
            }
            state.show_more_remaining = state.show_more_remaining.saturating_sub(1);
        }
        Ok(())
    }

    async fn type_text(&self, element: &FakeElement, text: &str) -> Result<(), PageError> {
        self.state
            .lock()
            .unwrap()
            .actions
            .push(format!("type {:?} into {:?}", text, element));
        Ok(())
    }

    async fn select_by_value(&self, element: &FakeElement, value: &str) -> Result<(), PageError> {
        self.state
            .lock()
            .unwrap()
            .actions
            .push(format!("select {:?} in {:?}", value, element));
        Ok(())
    }

    async fn goto(&self, url: &str) -> Result<(), PageError> {
        if self.unreachable.contains(url) {
            return Err(PageError::WebDriver(format!("unreachable {}", url)));
        }
        let mut state = self.state.lock().unwrap();
        let active = state.active.clone();
        state.visited.push((active, url.to_string()));
        Ok(())
    }

    async fn current_window(&self) -> Result<String, PageError> {
        Ok(self.state.lock().unwrap().active.clone())
    }

    async fn open_window(&self) -> Result<String, PageError> {
        let mut state = self.state.lock().unwrap();
        state.opened += 1;
        let handle = format!("tab-{}", state.opened);
        state.windows.push(handle.clone());
        Ok(handle)
    }

    async fn switch_to_window(&self, window: &String) -> Result<(), PageError> {
        let mut state = self.state.lock().unwrap();
        let refused = self.failing_tab_switch && window.starts_with("tab-");
        if refused || !state.windows.contains(window) {
            return Err(PageError::WebDriver(format!("no such window {}", window)));
        }
        state.active = window.clone();
        Ok(())
    }

    async fn close_window(&self) -> Result<(), PageError> {
        let mut state = self.state.lock().unwrap();
        let active = std::mem::take(&mut state.active);
        state.windows.retain(|w| *w != active);
        Ok(())
    }

    async fn screenshot(&self, path: &Path) -> Result<(), PageError> {
        if self.failing_screenshots {
            return Err(PageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only output",
            )));
        }
        let mut state = self.state.lock().unwrap();
        let active = state.active.clone();
        state.screenshots.push((active, path.to_path_buf()));
        Ok(())
    }
}
