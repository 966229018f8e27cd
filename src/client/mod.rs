pub mod envelope;
pub mod http_client;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{EntityDetails, Review};

pub use http_client::HttpReviewClient;

/// Source of entity details and reviews.
#[async_trait]
pub trait ReviewSource {
    async fn fetch_entity_details(&self, entity_id: &str) -> Result<EntityDetails>;

    /// Reviews in API order. A response without a review list yields an empty vec.
    async fn fetch_reviews(&self, entity_id: &str) -> Result<Vec<Review>>;
}
