use crate::domain::selector::SHOW_MORE_BUTTON;

use super::{Page, PageError};

/// Clicks "show more" until the button no longer shows up.
///
/// Returns how many times the list was expanded. A button that is found but
/// cannot be clicked ends the whole search with an error.
pub async fn expand_results<P: Page>(page: &P) -> Result<u32, PageError> {
    let mut expansions = 0;

    loop {
        let show_more_button = match page.locate(SHOW_MORE_BUTTON).await {
            Ok(button) => button,
            Err(PageError::NotFound(_)) => {
                log::info!("No more articles to load after {} expansions", expansions);
                return Ok(expansions);
            }
            Err(e) => return Err(e),
        };

        page.click_via_script(&show_more_button).await?;
        expansions += 1;
        log::debug!("Expanded result list {} times", expansions);
    }
}
