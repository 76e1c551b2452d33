use chrono::NaiveDate;

use crate::domain::{
    article::{ArticleOutcome, ArticleRecord, SkipReason},
    field_parser::{clean_description, contains_money, count_phrase, extract_date, parse_date},
    recency::is_within_window,
    selector::{
        ARTICLES_CONTAINER, ARTICLE_DATE, ARTICLE_DESCRIPTION, ARTICLE_IMAGE, ARTICLE_LINK,
        ARTICLE_TITLE,
    },
};

use super::{capture_in_new_window, Page, PageError, ScreenshotStore};

pub struct SearchCriteria {
    pub month_filter: u32,
    pub search_phrase: String,
    /// Pinned entries whose title contains this text are not articles.
    pub placeholder_title: String,
    pub today: NaiveDate,
}

/// Walks the loaded result list once, top to bottom, and returns the kept records.
///
/// Every element is read exactly once. A failure on one element is logged and
/// only that element is dropped.
pub async fn extract_articles<P: Page>(
    page: &P,
    criteria: &SearchCriteria,
    screenshots: &ScreenshotStore,
) -> Vec<ArticleRecord> {
    log::info!("Getting articles info");

    let articles = match page.locate_all(ARTICLES_CONTAINER).await {
        Ok(articles) => articles,
        Err(e) => {
            log::error!("Found no articles in the result list: {}", e);
            return vec![];
        }
    };
    let total = articles.len();

    let mut records = vec![];
    for (index, article) in articles.iter().enumerate() {
        if let Some(record) = extract_article(page, article, index, criteria, screenshots)
            .await
            .kept()
        {
            records.push(record);
        }
    }

    log::info!("Kept {} of {} articles", records.len(), total);
    records
}

pub async fn extract_article<P: Page>(
    page: &P,
    article: &P::Element,
    index: usize,
    criteria: &SearchCriteria,
    screenshots: &ScreenshotStore,
) -> ArticleOutcome {
    match read_article(page, article, index, criteria, screenshots).await {
        Ok(ArticleOutcome::Skipped(reason)) => {
            log::debug!("Skipping article {}: {:?}", index, reason);
            ArticleOutcome::Skipped(reason)
        }
        Ok(kept) => kept,
        Err(e) => {
            if e.is_transient() {
                log::debug!("Skipping article {}: {}", index, e);
            } else {
                log::error!("Error getting info of article {}: {}", index, e);
            }
            ArticleOutcome::Skipped(SkipReason::Failed(e.to_string()))
        }
    }
}

async fn read_article<P: Page>(
    page: &P,
    article: &P::Element,
    index: usize,
    criteria: &SearchCriteria,
    screenshots: &ScreenshotStore,
) -> Result<ArticleOutcome, PageError> {
    let title = read_text(page, article, ARTICLE_TITLE).await?;
    if !criteria.placeholder_title.is_empty() && title.contains(&criteria.placeholder_title) {
        return Ok(ArticleOutcome::Skipped(SkipReason::Placeholder));
    }
    if title.is_empty() {
        return Ok(ArticleOutcome::Skipped(SkipReason::MissingTitle));
    }

    let date_text = read_text(page, article, ARTICLE_DATE).await?;
    let Some(date) = parse_date(&extract_date(&date_text)) else {
        return Ok(ArticleOutcome::Skipped(SkipReason::UnparsableDate(
            date_text,
        )));
    };

    if !is_within_window(criteria.month_filter, date, criteria.today) {
        return Ok(ArticleOutcome::Skipped(SkipReason::OutsideWindow(date)));
    }

    let description = read_text(page, article, ARTICLE_DESCRIPTION).await?;
    let image_url = read_attribute(page, article, ARTICLE_IMAGE, "src")
        .await?
        .unwrap_or_default();
    let link = read_attribute(page, article, ARTICLE_LINK, "href").await?;

    let screenshot_target = link.unwrap_or_else(|| image_url.clone());
    let screenshot_path = match screenshot_target.is_empty() {
        true => String::new(),
        false => {
            let path = screenshots.path_for(index);
            match capture_in_new_window(page, &screenshot_target, &path).await {
                Ok(()) => path.to_string_lossy().into_owned(),
                Err(e) => {
                    log::error!("Error taking screenshot of {}: {}", screenshot_target, e);
                    String::new()
                }
            }
        }
    };

    let search_phrase_count = count_phrase(
        &format!("{} {}", title, description),
        &criteria.search_phrase,
    );

    Ok(ArticleOutcome::Kept(ArticleRecord {
        contains_money: contains_money(&description),
        description: clean_description(&description),
        title,
        date,
        image_url,
        screenshot_path,
        search_phrase_count,
    }))
}

async fn read_text<P: Page>(
    page: &P,
    article: &P::Element,
    name: &str,
) -> Result<String, PageError> {
    let element = page.locate_in(article, name).await?;
    Ok(page.text(&element).await?.trim().to_string())
}

/// A missing element is an absent value, not a failure.
async fn read_attribute<P: Page>(
    page: &P,
    article: &P::Element,
    name: &str,
    attribute: &str,
) -> Result<Option<String>, PageError> {
    let element = match page.locate_in(article, name).await {
        Ok(element) => element,
        Err(PageError::NotFound(_)) => return Ok(None),
        Err(e) => return Err(e),
    };
    Ok(page
        .attribute(&element, attribute)
        .await?
        .filter(|value| !value.is_empty()))
}
