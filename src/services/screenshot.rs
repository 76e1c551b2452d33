use std::path::{Path, PathBuf};

use super::{Page, PageError};

pub struct ScreenshotStore {
    directory: PathBuf,
}

impl ScreenshotStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        ScreenshotStore {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// One file per position in the result list, so reruns overwrite.
    pub fn path_for(&self, index: usize) -> PathBuf {
        self.directory.join(format!("article_{:03}.png", index + 1))
    }
}

/// Opens `url` in a new window, saves a screenshot to `path` and closes it.
///
/// The window that was active before the call is switched back to on every
/// path, including failures.
pub async fn capture_in_new_window<P: Page>(
    page: &P,
    url: &str,
    path: &Path,
) -> Result<(), PageError> {
    log::debug!("Taking screenshot of {} into {:?}", url, path);

    let original = page.current_window().await?;
    let tab = page.open_window().await?;

    let captured = match page.switch_to_window(&tab).await {
        Ok(()) => {
            let shot = shoot(page, url, path).await;
            let closed = page.close_window().await;
            shot.and(closed)
        }
        Err(e) => {
            log::error!("Could not switch to window {:?}, leaving it open: {}", tab, e);
            Err(e)
        }
    };
    let restored = page.switch_to_window(&original).await;

    captured.and(restored)
}

async fn shoot<P: Page>(page: &P, url: &str, path: &Path) -> Result<(), PageError> {
    page.goto(url).await?;
    page.screenshot(path).await
}
