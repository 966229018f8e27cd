//! HTML rendering of a review list into a [`RenderTarget`].
//!
//! ```text
//! summary ─┐
//! reviews ─┼→ ReviewRenderer → RenderSession → RenderTarget slots
//! entity  ─┘
//! ```

pub mod date;
pub mod document;
pub mod publisher;
pub mod stars;

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::app::WidgetError;
use crate::domain::{Comment, Review, ReviewSummary};

pub use date::{format_comment_date, format_review_date};
pub use document::{PageDocument, RenderSession, RenderTarget, Slot};
pub use publisher::PublisherIcons;
pub use stars::{star_glyphs, StarBreakdown};

pub const REVIEWS_PER_PAGE: usize = 5;
pub const NO_REVIEWS_MESSAGE: &str = "Be the first to leave a review!";

/// Split reviews into contiguous pages of [`REVIEWS_PER_PAGE`], in order.
pub fn paginate(reviews: &[Review]) -> Vec<&[Review]> {
    reviews.chunks(REVIEWS_PER_PAGE).collect()
}

#[derive(Debug, Clone, Default)]
pub struct ReviewRenderer {
    icons: PublisherIcons,
}

impl ReviewRenderer {
    pub fn new(icons: PublisherIcons) -> Self {
        Self { icons }
    }

    /// Replace the target's content with the summary header and review pages.
    pub fn render<T: RenderTarget + ?Sized>(
        &self,
        target: &mut T,
        summary: &ReviewSummary,
        reviews: &[Review],
        entity_name: &str,
    ) {
        let mut session = RenderSession::open(target);

        if summary.is_empty() {
            session.set_text(Slot::TotalCount, NO_REVIEWS_MESSAGE);
            return;
        }

        session.set_text(Slot::TotalCount, &format!("Total Reviews: {}", summary.count));
        session.set_text(
            Slot::AverageRating,
            &format!("Average Rating: {:.2}", summary.average_rating),
        );
        session.set_text(Slot::StarIcons, &star_glyphs(summary.average_rating));

        for (index, page) in paginate(reviews).into_iter().enumerate() {
            session.append_html(
                Slot::ReviewsContainer,
                &self.render_page(index + 1, page, entity_name),
            );
        }
    }

    /// Show a failure in the header. The reviews container is left as is.
    pub fn render_error<T: RenderTarget + ?Sized>(&self, target: &mut T, error: &WidgetError) {
        target.set_text(Slot::TotalCount, error.user_message());
        target.clear(Slot::AverageRating);
        target.clear(Slot::StarIcons);
    }

    fn render_page(&self, number: usize, reviews: &[Review], entity_name: &str) -> String {
        let mut html = String::new();
        let _ = writeln!(html, "<div class=\"review-page\" data-page=\"{number}\">");
        for review in reviews {
            html.push_str(&self.render_review(review));
            if let Some(comments) = render_comments(&review.comments, entity_name) {
                html.push_str(&comments);
            }
        }
        html.push_str("</div>\n");
        html
    }

    fn render_review(&self, review: &Review) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            "<div class=\"review\">\n\
             <div class=\"review-details\">\n\
             <img class=\"publisher-icon\" src=\"{icon}\" alt=\"{publisher}\">\n\
             <div class=\"details-right\">\n\
             <p><strong>Date:</strong> {date}</p>\n\
             <p><strong>Author:</strong> {author}</p>\n\
             <p><strong>Rating:</strong> <span class=\"stars\">{stars}</span></p>\n",
            icon = encode_double_quoted_attribute(self.icons.icon_for(&review.publisher)),
            publisher = encode_double_quoted_attribute(&review.publisher),
            date = encode_text(&format_review_date(review.review_date.as_deref())),
            author = encode_text(&review.author_name),
            stars = star_glyphs(review.rating),
        );
        if let Some(content) = review.display_content() {
            let _ = writeln!(html, "<p><strong>Content:</strong> {}</p>", encode_text(content));
        }
        html.push_str("</div>\n</div>\n</div>\n");
        html
    }
}

/// Owner replies, indented under the review they answer.
fn render_comments(comments: &[Comment], entity_name: &str) -> Option<String> {
    if comments.is_empty() {
        return None;
    }

    let mut html = String::from("<div class=\"comment-section\">\n");
    for comment in comments {
        let _ = write!(
            html,
            "<div class=\"comment\">\n\
             <p><strong>Date:</strong> {}</p>\n\
             <p><strong>{}:</strong> {}</p>\n\
             </div>\n",
            encode_text(&format_comment_date(comment.comment_date.as_deref())),
            encode_text(entity_name),
            encode_text(&comment.content),
        );
    }
    html.push_str("</div>\n");
    Some(html)
}
