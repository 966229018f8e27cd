//! # Review Widget
//!
//! Fetches a business entity and its customer reviews from a content API,
//! summarizes them and renders a paginated review list with star ratings
//! and publisher icons into a host page.
//!
//! ## Architecture
//!
//! ```text
//!            ┌→ fetch_entity_details ┐
//! Widget ────┤                       ├→ summarize → ReviewRenderer → RenderTarget
//!            └→ fetch_reviews ───────┘
//! ```
//!
//! - [`client`]: content API access behind the [`ReviewSource`](client::ReviewSource) trait
//! - [`domain`]: entity, review and summary models
//! - [`render`]: stars, dates, publisher icons and the HTML renderer
//! - [`widget`]: orchestration and the review generation action
//!
//! ## Quick Start
//!
//! ```bash
//! # Render a page for an entity
//! review-widget render --entity-id my-location --output reviews.html --open
//!
//! # Print a summary
//! review-widget summary --entity-id my-location
//!
//! # Open the "leave a review" page
//! review-widget review --entity-id my-location
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together configuration,
/// the API client and the widget.
pub mod app;

/// Command-line interface using clap.
///
/// - `render` - Write the widget as an HTML page
/// - `summary` - Print count, average and reviews
/// - `review` - Open the review generation page
pub mod cli;

/// HTTP access to the content API.
///
/// - [`ReviewSource`](client::ReviewSource): Async trait for the two fetches
/// - [`HttpReviewClient`](client::HttpReviewClient): reqwest-based implementation
pub mod client;

/// Configuration loaded from `~/.config/review-widget/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`EntityDetails`](domain::EntityDetails): the reviewed business
/// - [`Review`](domain::Review) and [`Comment`](domain::Comment)
/// - [`ReviewSummary`](domain::ReviewSummary): count and average rating
pub mod domain;

/// HTML rendering into a host page.
pub mod render;

/// Widget orchestration.
pub mod widget;
