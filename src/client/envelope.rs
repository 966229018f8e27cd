use serde::Deserialize;
use serde_json::Value;

use crate::app::{Result, WidgetError};
use crate::domain::{EntityDetails, Review};

#[derive(Deserialize)]
struct Envelope<T> {
    response: T,
}

/// Decode an entity response body: `{ "response": { ...entity } }`.
pub fn parse_entity_details(body: &[u8]) -> Result<EntityDetails> {
    let envelope: Envelope<EntityDetails> =
        serde_json::from_slice(body).map_err(|e| WidgetError::Parse(e.to_string()))?;
    Ok(envelope.response)
}

/// Decode a reviews response body: `{ "response": { "docs": [...] } }`.
///
/// The body must be JSON, but a missing or non-list `response.docs` is
/// treated as no reviews. Docs that fail to decode are skipped.
pub fn parse_reviews(body: &[u8]) -> Result<Vec<Review>> {
    let value: Value = serde_json::from_slice(body).map_err(|e| WidgetError::Parse(e.to_string()))?;

    let docs = match value.pointer("/response/docs") {
        Some(Value::Array(docs)) => docs,
        _ => {
            tracing::debug!("Reviews response has no docs list");
            return Ok(Vec::new());
        }
    };

    let reviews = docs
        .iter()
        .enumerate()
        .filter_map(|(index, doc)| match Review::deserialize(doc) {
            Ok(review) => Some(review),
            Err(e) => {
                tracing::warn!("Skipping malformed review at index {}: {}", index, e);
                None
            }
        })
        .collect();

    Ok(reviews)
}
