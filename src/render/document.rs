use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

/// Host-page elements the widget writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    TotalCount,
    AverageRating,
    StarIcons,
    ReviewsContainer,
}

impl Slot {
    pub const ALL: [Slot; 4] = [
        Slot::TotalCount,
        Slot::AverageRating,
        Slot::StarIcons,
        Slot::ReviewsContainer,
    ];

    /// Element id in the host page.
    pub fn id(self) -> &'static str {
        match self {
            Slot::TotalCount => "total-count",
            Slot::AverageRating => "average-rating",
            Slot::StarIcons => "star-icons",
            Slot::ReviewsContainer => "reviews-container",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

pub const REVIEW_BUTTON_ID: &str = "review-generation-button";

/// The set of host-page elements a widget renders into.
///
/// Implementations only populate existing elements; they never create the
/// page structure around them.
pub trait RenderTarget {
    /// Replace the slot's content with escaped text.
    fn set_text(&mut self, slot: Slot, text: &str) {
        self.set_html(slot, &encode_text(text));
    }

    fn set_html(&mut self, slot: Slot, html: &str);

    fn append_html(&mut self, slot: Slot, html: &str);

    fn clear(&mut self, slot: Slot) {
        self.set_html(slot, "");
    }

    /// Point the review generation button at `url`, or disable it with `None`.
    fn bind_review_button(&mut self, url: Option<&str>);

    /// Called when a render session closes.
    fn end_render(&mut self) {}
}

/// Exclusive rendering pass over a target.
///
/// Opening the session clears every slot so a repeated render replaces the
/// previous output. Dropping it closes the pass.
pub struct RenderSession<'a, T: RenderTarget + ?Sized> {
    target: &'a mut T,
}

impl<'a, T: RenderTarget + ?Sized> RenderSession<'a, T> {
    pub fn open(target: &'a mut T) -> Self {
        for slot in Slot::ALL {
            target.clear(slot);
        }
        Self { target }
    }

    pub fn set_text(&mut self, slot: Slot, text: &str) {
        self.target.set_text(slot, text);
    }

    pub fn append_html(&mut self, slot: Slot, html: &str) {
        self.target.append_html(slot, html);
    }
}

impl<T: RenderTarget + ?Sized> Drop for RenderSession<'_, T> {
    fn drop(&mut self) {
        self.target.end_render();
    }
}

const PAGE_STYLE: &str = r#"
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; color: #222; }
#star-icons, .stars { color: #f5a623; letter-spacing: 0.1em; }
.review-page { border-top: 1px solid #ddd; padding-top: 1rem; margin-top: 1rem; }
.review-details { display: flex; gap: 1rem; align-items: flex-start; }
.publisher-icon { width: 32px; height: 32px; }
.comment-section { margin-left: 3rem; border-left: 3px solid #eee; padding-left: 1rem; }
.review-button { display: inline-block; padding: 0.5rem 1rem; background: #0a66c2; color: #fff; text-decoration: none; border-radius: 4px; }
button.review-button { background: #999; }
"#;

/// In-memory host page holding the widget's elements.
#[derive(Debug, Clone)]
pub struct PageDocument {
    title: String,
    slots: [String; 4],
    review_button: Option<String>,
    revision: u64,
}

impl PageDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slots: Default::default(),
            review_button: None,
            revision: 0,
        }
    }

    pub fn slot_html(&self, slot: Slot) -> &str {
        &self.slots[slot.index()]
    }

    /// URL the review generation button opens, `None` while disabled.
    pub fn review_button_target(&self) -> Option<&str> {
        self.review_button.as_deref()
    }

    /// Number of completed render passes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Serialize as a standalone HTML page.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
             <title>{title}</title>\n<style>{PAGE_STYLE}</style>\n</head>\n<body>\n\
             <h1>{title}</h1>\n<div class=\"summary\">\n",
            title = encode_text(&self.title),
        );

        for slot in [Slot::TotalCount, Slot::AverageRating, Slot::StarIcons] {
            let _ = writeln!(
                html,
                "<div id=\"{}\">{}</div>",
                slot.id(),
                self.slot_html(slot)
            );
        }
        html.push_str("</div>\n");

        match &self.review_button {
            Some(url) => {
                let _ = writeln!(
                    html,
                    "<a id=\"{REVIEW_BUTTON_ID}\" class=\"review-button\" role=\"button\" \
                     href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Leave a review</a>",
                    encode_double_quoted_attribute(url)
                );
            }
            None => {
                let _ = writeln!(
                    html,
                    "<button id=\"{REVIEW_BUTTON_ID}\" class=\"review-button\" type=\"button\" disabled>Leave a review</button>"
                );
            }
        }

        let _ = write!(
            html,
            "<div id=\"{}\">{}</div>\n</body>\n</html>\n",
            Slot::ReviewsContainer.id(),
            self.slot_html(Slot::ReviewsContainer)
        );
        html
    }
}

impl RenderTarget for PageDocument {
    fn set_html(&mut self, slot: Slot, html: &str) {
        self.slots[slot.index()] = html.to_string();
    }

    fn append_html(&mut self, slot: Slot, html: &str) {
        self.slots[slot.index()].push_str(html);
    }

    fn bind_review_button(&mut self, url: Option<&str>) {
        self.review_button = url.map(String::from);
    }

    fn end_render(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_escapes() {
        let mut doc = PageDocument::new("Reviews");
        doc.set_text(Slot::TotalCount, "<b>5</b> & more");
        assert_eq!(doc.slot_html(Slot::TotalCount), "&lt;b&gt;5&lt;/b&gt; &amp; more");
    }

    #[test]
    fn test_append_and_clear() {
        let mut doc = PageDocument::new("Reviews");
        doc.append_html(Slot::ReviewsContainer, "<p>a</p>");
        doc.append_html(Slot::ReviewsContainer, "<p>b</p>");
        assert_eq!(doc.slot_html(Slot::ReviewsContainer), "<p>a</p><p>b</p>");
        doc.clear(Slot::ReviewsContainer);
        assert_eq!(doc.slot_html(Slot::ReviewsContainer), "");
    }

    #[test]
    fn test_session_clears_and_counts_revisions() {
        let mut doc = PageDocument::new("Reviews");
        doc.set_text(Slot::AverageRating, "stale");
        {
            let mut session = RenderSession::open(&mut doc);
            session.set_text(Slot::TotalCount, "fresh");
        }
        assert_eq!(doc.slot_html(Slot::AverageRating), "");
        assert_eq!(doc.slot_html(Slot::TotalCount), "fresh");
        assert_eq!(doc.revision(), 1);
    }

    #[test]
    fn test_button_disabled_until_bound() {
        let mut doc = PageDocument::new("Reviews");
        let html = doc.to_html();
        assert!(html.contains("<button id=\"review-generation-button\""));
        assert!(html.contains("disabled"));

        doc.bind_review_button(Some("https://example.com/review?a=1&b=2"));
        let html = doc.to_html();
        assert!(html.contains("href=\"https://example.com/review?a=1&amp;b=2\""));
        assert!(html.contains("target=\"_blank\""));
    }

    #[test]
    fn test_page_contains_all_elements() {
        let html = PageDocument::new("Acme <Reviews>").to_html();
        for slot in Slot::ALL {
            assert!(html.contains(&format!("id=\"{}\"", slot.id())));
        }
        assert!(html.contains("<title>Acme &lt;Reviews&gt;</title>"));
    }
}
