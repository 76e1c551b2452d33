use chrono::{Local, NaiveDate};

use crate::{
    configuration::Settings,
    domain::article::ArticleRecord,
    services::{
        expand_results, extract_articles, save_articles, search, Droid, ImageDownloader, Page,
        ScreenshotStore, SearchCriteria,
    },
};

pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let droid = Droid::new(&settings.webdriver, settings.site.selector_table()).await?;

    let result = scrape(&droid, &settings, Local::now().date_naive()).await;
    droid.quit().await;

    let records = result?;
    if settings.output.download_images {
        match ImageDownloader::new(settings.output.images_path()) {
            Ok(downloader) => {
                downloader.download_all(&records).await;
            }
            Err(e) => log::error!("Error building image downloader: {}", e),
        }
    }

    Ok(())
}

/// One full pass over the site: search, expand, extract, save.
///
/// Only a page that cannot be opened at all is an error. A list that cannot
/// be fully expanded is not read, and an empty workbook is still written.
pub async fn scrape<P: Page>(
    page: &P,
    settings: &Settings,
    today: NaiveDate,
) -> anyhow::Result<Vec<ArticleRecord>> {
    let input = &settings.search;
    page.goto(&input.website).await?;

    search(page, &input.search_phrase).await;

    let records = match expand_results(page).await {
        Ok(_) => {
            let screenshots = ScreenshotStore::new(settings.output.screenshots_path());
            if let Err(e) = tokio::fs::create_dir_all(screenshots.directory()).await {
                log::error!(
                    "Error creating screenshot directory {:?}: {}",
                    screenshots.directory(),
                    e
                );
            }

            let criteria = SearchCriteria {
                month_filter: input.month_filter,
                search_phrase: input.search_phrase.clone(),
                placeholder_title: settings.site.placeholder_title.clone(),
                today,
            };
            extract_articles(page, &criteria, &screenshots).await
        }
        Err(e) => {
            log::error!("Error loading more articles for {}: {}", input.search_phrase, e);
            vec![]
        }
    };

    save_articles(&records, &settings.output.workbook_path());

    Ok(records)
}
