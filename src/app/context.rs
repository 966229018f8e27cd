use std::sync::Arc;

use crate::app::error::{Result, WidgetError};
use crate::client::{HttpReviewClient, ReviewSource};
use crate::config::Config;
use crate::render::{PageDocument, PublisherIcons, ReviewRenderer};
use crate::widget::{Widget, WidgetConfig};

pub struct AppContext {
    pub config: Config,
    pub widget: Widget,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let source: Arc<dyn ReviewSource + Send + Sync> = Arc::new(HttpReviewClient::new(&config.api)?);
        Ok(Self::with_source(config, source))
    }

    pub fn with_source(config: Config, source: Arc<dyn ReviewSource + Send + Sync>) -> Self {
        let icons = PublisherIcons::with_overrides(config.publishers.clone());
        let widget = Widget::new(source, ReviewRenderer::new(icons));
        Self { config, widget }
    }

    /// Widget config for `entity_id`, falling back to the configured entity.
    pub fn widget_config(&self, entity_id: Option<&str>) -> Result<WidgetConfig> {
        entity_id
            .map(String::from)
            .or_else(|| self.config.widget.entity_id.clone())
            .filter(|id| !id.trim().is_empty())
            .map(WidgetConfig::new)
            .ok_or_else(|| {
                WidgetError::Config("No entity id given; pass --entity-id or set widget.entity_id".into())
            })
    }

    pub fn new_document(&self) -> PageDocument {
        PageDocument::new(self.config.widget.page_title.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_config_prefers_argument() {
        let mut config = Config::default();
        config.widget.entity_id = Some("from-config".into());
        let ctx = AppContext::new(config).unwrap();

        assert_eq!(ctx.widget_config(Some("from-cli")).unwrap().entity_id, "from-cli");
        assert_eq!(ctx.widget_config(None).unwrap().entity_id, "from-config");
    }

    #[test]
    fn test_widget_config_missing() {
        let ctx = AppContext::new(Config::default()).unwrap();
        assert!(matches!(ctx.widget_config(None), Err(WidgetError::Config(_))));
        assert!(matches!(ctx.widget_config(Some(" ")), Err(WidgetError::Config(_))));
    }
}
