#[cfg(test)]
use std::sync::Mutex;

use crate::app::{Result, WidgetError};
use crate::domain::EntityDetails;

/// Opens URLs in a new browsing context.
pub trait Launcher {
    fn open(&self, url: &str) -> Result<()>;
}

/// Launches the system's default browser.
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, url: &str) -> Result<()> {
        open::that(url)?;
        Ok(())
    }
}

/// Records opened URLs instead of launching anything.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingLauncher {
    opened: Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingLauncher {
    pub(crate) fn opened(&self) -> Vec<String> {
        self.opened.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl Launcher for RecordingLauncher {
    fn open(&self, url: &str) -> Result<()> {
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(url.to_string());
        }
        Ok(())
    }
}

/// A navigation bound to a URL captured from a widget session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewAction {
    label: &'static str,
    url: Option<String>,
}

impl ReviewAction {
    pub fn new(label: &'static str, url: Option<&str>) -> Self {
        Self {
            label,
            url: url.map(String::from),
        }
    }

    pub fn review_generation(entity: &EntityDetails) -> Self {
        Self::new("review generation URL", entity.review_generation_url())
    }

    pub fn first_party_page(entity: &EntityDetails) -> Self {
        Self::new("first-party review page", entity.first_party_review_page())
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }

    pub fn click(&self, launcher: &dyn Launcher) -> Result<()> {
        let url = self.url.as_deref().ok_or(WidgetError::NotReady(self.label))?;
        tracing::info!("Opening {}: {}", self.label, url);
        launcher.open(url)
    }
}
