//! Widget orchestration: fetch, summarize, render, bind the review button.

mod action;

pub use action::{Launcher, ReviewAction, SystemLauncher};

#[cfg(test)]
pub(crate) use action::RecordingLauncher;

use std::sync::Arc;

use futures::future::join;
use serde::Deserialize;
use tracing::{error, info};

use crate::app::{Result, WidgetError};
use crate::client::ReviewSource;
use crate::domain::{summarize, EntityDetails, Review, ReviewSummary};
use crate::render::{RenderTarget, ReviewRenderer};

/// Inbound widget configuration. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct WidgetConfig {
    #[serde(rename = "entityId", alias = "entity_id")]
    pub entity_id: String,
}

impl WidgetConfig {
    pub fn new(entity_id: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
        }
    }
}

/// Everything one initialization produced. Immutable once built.
#[derive(Debug, Clone)]
pub struct WidgetSession {
    pub entity: EntityDetails,
    pub reviews: Vec<Review>,
    pub summary: ReviewSummary,
}

impl WidgetSession {
    /// The review generation button's click action.
    pub fn review_action(&self) -> ReviewAction {
        ReviewAction::review_generation(&self.entity)
    }

    pub fn first_party_action(&self) -> ReviewAction {
        ReviewAction::first_party_page(&self.entity)
    }
}

pub struct Widget {
    source: Arc<dyn ReviewSource + Send + Sync>,
    renderer: ReviewRenderer,
}

impl Widget {
    pub fn new(source: Arc<dyn ReviewSource + Send + Sync>, renderer: ReviewRenderer) -> Self {
        Self { source, renderer }
    }

    /// Fetch entity details and reviews concurrently and summarize them.
    pub async fn init(&self, config: &WidgetConfig) -> Result<WidgetSession> {
        let (entity, reviews) = self.fetch_all(config).await?;
        Ok(Self::session(entity?, reviews?))
    }

    /// Fetch only the entity details, for actions that need no reviews.
    pub async fn fetch_entity(&self, config: &WidgetConfig) -> Result<EntityDetails> {
        let entity_id = entity_id(config)?;
        self.source.fetch_entity_details(entity_id).await
    }

    /// Render a session and bind the review button to it.
    pub fn render<T: RenderTarget + ?Sized>(&self, session: &WidgetSession, target: &mut T) {
        self.renderer
            .render(target, &session.summary, &session.reviews, &session.entity.name);
        target.bind_review_button(session.entity.review_generation_url());
    }

    /// Initialize and render into `target`.
    ///
    /// On failure the target shows an error message, the reviews container
    /// is left untouched, and the error is returned. The review button is
    /// bound whenever the entity fetch succeeded, even if the reviews fetch
    /// did not.
    pub async fn mount<T: RenderTarget + ?Sized>(
        &self,
        config: &WidgetConfig,
        target: &mut T,
    ) -> Result<WidgetSession> {
        let fetched = self
            .fetch_all(config)
            .await
            .and_then(|(entity, reviews)| Ok((entity?, reviews)));
        let (entity, reviews) = match fetched {
            Ok(fetched) => fetched,
            Err(e) => return Err(self.fail(config, target, e)),
        };

        match reviews {
            Ok(reviews) => {
                let session = Self::session(entity, reviews);
                self.render(&session, target);
                Ok(session)
            }
            Err(e) => {
                target.bind_review_button(entity.review_generation_url());
                Err(self.fail(config, target, e))
            }
        }
    }

    async fn fetch_all(
        &self,
        config: &WidgetConfig,
    ) -> Result<(Result<EntityDetails>, Result<Vec<Review>>)> {
        let entity_id = entity_id(config)?;
        Ok(join(
            self.source.fetch_entity_details(entity_id),
            self.source.fetch_reviews(entity_id),
        )
        .await)
    }

    fn session(entity: EntityDetails, reviews: Vec<Review>) -> WidgetSession {
        let summary = summarize(&reviews);
        info!(
            "Widget ready for {}: {} reviews, average {:.2}, review URL {:?}, first-party page {:?}",
            entity.name,
            summary.count,
            summary.average_rating,
            entity.review_generation_url(),
            entity.first_party_review_page(),
        );

        WidgetSession {
            entity,
            reviews,
            summary,
        }
    }

    fn fail<T: RenderTarget + ?Sized>(
        &self,
        config: &WidgetConfig,
        target: &mut T,
        error: WidgetError,
    ) -> WidgetError {
        error!("Widget initialization failed for {}: {}", config.entity_id, error);
        self.renderer.render_error(target, &error);
        error
    }
}

fn entity_id(config: &WidgetConfig) -> Result<&str> {
    let entity_id = config.entity_id.trim();
    if entity_id.is_empty() {
        return Err(WidgetError::Config("Entity id is empty".into()));
    }
    Ok(entity_id)
}
