pub mod article_extractor;
pub mod droid;
pub mod image_downloader;
pub mod page;
pub mod pagination;
pub mod screenshot;
pub mod site_search;
pub mod workbook;

#[cfg(test)]
pub mod test_page;

pub use article_extractor::*;
pub use droid::*;
pub use image_downloader::*;
pub use page::*;
pub use pagination::*;
pub use screenshot::*;
pub use site_search::*;
pub use workbook::*;
