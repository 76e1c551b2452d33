use std::{
    error::Error,
    path::{Path, PathBuf},
    time::Duration,
};

use reqwest::Client;
use url::Url;

use crate::domain::article::ArticleRecord;

pub struct ImageDownloader {
    client: Client,
    directory: PathBuf,
}

impl ImageDownloader {
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .read_timeout(Duration::from_secs(30))
            .build()?;

        Ok(ImageDownloader {
            client,
            directory: directory.into(),
        })
    }

    /// Downloads the image of every record that has one, one at a time.
    ///
    /// Returns how many images were saved; failures are logged and skipped.
    pub async fn download_all(&self, records: &[ArticleRecord]) -> usize {
        if let Err(e) = tokio::fs::create_dir_all(&self.directory).await {
            log::error!(
                "Error creating image directory {:?}: {}",
                self.directory,
                e
            );
            return 0;
        }

        let mut saved = 0;
        for (index, record) in records.iter().enumerate() {
            if record.image_url.is_empty() {
                continue;
            }
            let path = self
                .directory
                .join(image_file_name(index, &record.image_url));
            match self.download(&record.image_url, &path).await {
                Ok(()) => saved += 1,
                Err(e) => log::error!("Error downloading image {}: {}", record.image_url, e),
            }
        }

        log::info!("Downloaded {} images", saved);
        saved
    }

    async fn download(&self, url: &str, path: &Path) -> Result<(), Box<dyn Error>> {
        log::debug!("Downloading image at {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        tokio::fs::write(path, &bytes).await?;

        Ok(())
    }
}

/// `image_003.jpg` style names, keeping the extension from the URL path.
pub fn image_file_name(index: usize, image_url: &str) -> String {
    let extension = Url::parse(image_url)
        .ok()
        .and_then(|url| {
            url.path_segments()
                .and_then(|mut segments| segments.next_back().map(|s| s.to_string()))
        })
        .and_then(|name| {
            name.rsplit_once('.')
                .map(|(_, ext)| ext.to_lowercase())
                .filter(|ext| !ext.is_empty() && ext.len() <= 4)
        })
        .unwrap_or_else(|| "jpg".to_string());

    format!("image_{:03}.{}", index + 1, extension)
}
