use std::{path::Path, time::Duration};

use async_trait::async_trait;
use thirtyfour::{components::SelectElement, prelude::*, ChromiumLikeCapabilities, WindowHandle};

use crate::{
    configuration::WebDriverSettings,
    domain::selector::{Locator, SelectorTable},
};

use super::{Page, PageError};

const POLL_INTERVAL: Duration = Duration::from_millis(500);

const CHROME_ARGS: [&str; 9] = [
    "--no-sandbox",
    "--disable-dev-shm-usage",
    "--disable-gpu",
    "--disable-extensions",
    "--disable-infobars",
    "--disable-web-security",
    "--disable-blink-features=AutomationControlled",
    "--disable-popup-blocking",
    "--start-maximized",
];

pub struct Droid {
    pub driver: WebDriver,
    selectors: SelectorTable,
    wait: Duration,
}

impl Droid {
    pub async fn new(
        settings: &WebDriverSettings,
        selectors: SelectorTable,
    ) -> Result<Self, WebDriverError> {
        let mut caps = DesiredCapabilities::chrome();
        if settings.headless {
            caps.add_arg("--headless")?;
        }
        for arg in CHROME_ARGS {
            caps.add_arg(arg)?;
        }
        caps.add_arg(&format!(
            "--window-size={},{}",
            settings.window_width, settings.window_height
        ))?;

        log::info!("Initializing Chrome at {}", settings.server_url);
        let driver = WebDriver::new(&settings.server_url, caps).await?;
        log::info!("Chrome initialized");

        Ok(Droid {
            driver,
            selectors,
            wait: settings.wait_timeout(),
        })
    }

    pub async fn quit(self) {
        if let Err(e) = self.driver.quit().await {
            log::error!("Failed to quit the browser session: {:?}", e);
        }
    }

    fn by(&self, name: &str) -> Result<By, PageError> {
        match self.selectors.get(name) {
            Some(Locator::Css(value)) => Ok(By::Css(value.as_str())),
            Some(Locator::Id(value)) => Ok(By::Id(value.as_str())),
            Some(Locator::XPath(value)) => Ok(By::XPath(value.as_str())),
            None => Err(PageError::UnknownSelector(name.to_string())),
        }
    }
}

fn page_error(context: &str, e: WebDriverError) -> PageError {
    match e {
        WebDriverError::NoSuchElement(..) => PageError::NotFound(context.to_string()),
        WebDriverError::StaleElementReference(..) => PageError::Stale(context.to_string()),
        other => PageError::WebDriver(format!("{}: {}", context, other)),
    }
}

#[async_trait]
impl Page for Droid {
    type Element = WebElement;
    type Window = WindowHandle;

    async fn locate(&self, name: &str) -> Result<WebElement, PageError> {
        self.driver
            .query(self.by(name)?)
            .wait(self.wait, POLL_INTERVAL)
            .and_clickable()
            .first()
            .await
            .map_err(|e| page_error(name, e))
    }

    async fn locate_all(&self, name: &str) -> Result<Vec<WebElement>, PageError> {
        self.driver
            .query(self.by(name)?)
            .wait(self.wait, POLL_INTERVAL)
            .all_from_selector_required()
            .await
            .map_err(|e| page_error(name, e))
    }

    async fn locate_in(&self, parent: &WebElement, name: &str) -> Result<WebElement, PageError> {
        parent
            .query(self.by(name)?)
            .wait(self.wait, POLL_INTERVAL)
            .first()
            .await
            .map_err(|e| page_error(name, e))
    }

    async fn text(&self, element: &WebElement) -> Result<String, PageError> {
        element.text().await.map_err(|e| page_error("text", e))
    }

    async fn attribute(
        &self,
        element: &WebElement,
        attribute: &str,
    ) -> Result<Option<String>, PageError> {
        element
            .attr(attribute)
            .await
            .map_err(|e| page_error(attribute, e))
    }

    async fn click(&self, element: &WebElement) -> Result<(), PageError> {
        element.click().await.map_err(|e| page_error("click", e))
    }

    async fn click_via_script(&self, element: &WebElement) -> Result<(), PageError> {
        let arg = element
            .to_json()
            .map_err(|e| page_error("script click", e))?;
        self.driver
            .execute("arguments[0].click();", vec![arg])
            .await
            .map_err(|e| page_error("script click", e))?;
        Ok(())
    }

    async fn type_text(&self, element: &WebElement, text: &str) -> Result<(), PageError> {
        element.clear().await.map_err(|e| page_error("clear", e))?;
        element
            .send_keys(text)
            .await
            .map_err(|e| page_error("send keys", e))?;
        element
            .send_keys(Key::Enter)
            .await
            .map_err(|e| page_error("submit", e))
    }

    async fn select_by_value(&self, element: &WebElement, value: &str) -> Result<(), PageError> {
        let select = SelectElement::new(element)
            .await
            .map_err(|e| page_error("select", e))?;
        select
            .select_by_value(value)
            .await
            .map_err(|e| page_error(value, e))
    }

    async fn goto(&self, url: &str) -> Result<(), PageError> {
        log::info!("Opening {}", url);
        self.driver.goto(url).await.map_err(|e| page_error(url, e))
    }

    async fn current_window(&self) -> Result<WindowHandle, PageError> {
        self.driver
            .window()
            .await
            .map_err(|e| page_error("current window", e))
    }

    async fn open_window(&self) -> Result<WindowHandle, PageError> {
        self.driver
            .new_tab()
            .await
            .map_err(|e| page_error("new tab", e))
    }

    async fn switch_to_window(&self, window: &WindowHandle) -> Result<(), PageError> {
        self.driver
            .switch_to_window(window.clone())
            .await
            .map_err(|e| page_error("switch window", e))
    }

    async fn close_window(&self) -> Result<(), PageError> {
        self.driver
            .close_window()
            .await
            .map_err(|e| page_error("close window", e))
    }

    async fn screenshot(&self, path: &Path) -> Result<(), PageError> {
        self.driver
            .screenshot(path)
            .await
            .map_err(|e| page_error("screenshot", e))
    }
}
