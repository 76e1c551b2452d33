use crate::domain::selector::{SEARCH_BUTTON, SEARCH_FIELD, SORT_DROPDOWN};

use super::{Page, PageError};

const SORT_BY_DATE: &str = "date";

/// Runs the site's own search for `query` and sorts the results newest first.
///
/// Failures are logged; the run carries on with whatever the page shows.
pub async fn search<P: Page>(page: &P, query: &str) {
    log::info!("Beginning search for {}", query);

    match submit_search(page, query).await {
        Ok(()) => log::info!("Search for {} submitted", query),
        Err(e) => {
            log::error!("Error searching for {}: {}", query, e);
            return;
        }
    }

    sort_results(page).await;
}

async fn submit_search<P: Page>(page: &P, query: &str) -> Result<(), PageError> {
    let search_button = page.locate(SEARCH_BUTTON).await?;
    page.click(&search_button).await?;

    let search_field = page.locate(SEARCH_FIELD).await?;
    page.type_text(&search_field, query).await
}

async fn sort_results<P: Page>(page: &P) {
    log::info!("Sorting results by date");

    let sorted = match page.locate(SORT_DROPDOWN).await {
        Ok(dropdown) => page.select_by_value(&dropdown, SORT_BY_DATE).await,
        Err(e) => Err(e),
    };

    match sorted {
        Ok(()) => log::info!("Results sorted"),
        Err(e) => log::error!("Error sorting results: {}", e),
    }
}
