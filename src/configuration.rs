use std::{path::PathBuf, time::Duration};

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::{
    selector::SelectorTable,
    work_item::{load_search_input, SearchInput},
};

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub search: SearchInput,
    pub webdriver: WebDriverSettings,
    pub output: OutputSettings,
    pub site: SiteSettings,
    pub work_item: Option<PathBuf>,
}

#[derive(Deserialize, Clone)]
pub struct WebDriverSettings {
    pub server_url: String,
    pub headless: bool,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub window_width: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub window_height: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub wait_timeout_secs: u64,
}

impl WebDriverSettings {
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }
}

#[derive(Deserialize, Clone)]
pub struct OutputSettings {
    pub directory: PathBuf,
    pub workbook_name: String,
    pub screenshots_dir: String,
    pub images_dir: String,
    pub download_images: bool,
}

impl OutputSettings {
    pub fn workbook_path(&self) -> PathBuf {
        self.directory.join(&self.workbook_name)
    }

    pub fn screenshots_path(&self) -> PathBuf {
        self.directory.join(&self.screenshots_dir)
    }

    pub fn images_path(&self) -> PathBuf {
        self.directory.join(&self.images_dir)
    }
}

#[derive(Deserialize, Clone)]
pub struct SiteSettings {
    pub placeholder_title: String,
    #[serde(default)]
    pub selectors: Option<SelectorTable>,
}

impl SiteSettings {
    pub fn selector_table(&self) -> SelectorTable {
        match &self.selectors {
            Some(overrides) => SelectorTable::default().merge(overrides.clone()),
            None => SelectorTable::default(),
        }
    }
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename))
                .required(false),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let mut settings = settings.try_deserialize::<Settings>()?;

    // A queued work item takes precedence over the configured search
    if let Some(path) = settings.work_item.clone() {
        match load_search_input(&path) {
            Ok(Some(input)) => settings.search = input,
            Ok(None) => log::info!("Work items file {:?} is empty", path),
            Err(e) => {
                return Err(config::ConfigError::Message(format!(
                    "Failed to read work items from {:?}: {}",
                    path, e
                )))
            }
        }
    }

    Ok(settings)
}
