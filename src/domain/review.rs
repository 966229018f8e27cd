use serde::Deserialize;

use crate::domain::null_as_default;

/// A single customer review as returned by the content API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default, deserialize_with = "null_as_default")]
    pub author_name: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub publisher: String,
    /// A null rating counts as 0
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(default)]
    pub review_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<Comment>,
}

/// Owner reply attached to a review.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default)]
    pub comment_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

impl Review {
    pub fn new(author_name: impl Into<String>, publisher: impl Into<String>, rating: f64) -> Self {
        Self {
            author_name: author_name.into(),
            publisher: publisher.into(),
            rating,
            ..Default::default()
        }
    }

    /// Review text, if the reviewer wrote any.
    pub fn display_content(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }

    pub fn has_comments(&self) -> bool {
        !self.comments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_review() {
        let json = r#"{
            "authorName": "Jane",
            "content": "Great service",
            "publisher": "GOOGLEMYBUSINESS",
            "rating": 4.5,
            "reviewDate": "2023-10-30T12:00:00Z",
            "comments": [{ "commentDate": "2023-10-31T08:00:00Z", "content": "Thanks!" }]
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.author_name, "Jane");
        assert_eq!(review.rating, 4.5);
        assert_eq!(review.comments.len(), 1);
        assert_eq!(review.comments[0].content, "Thanks!");
    }

    #[test]
    fn test_missing_optional_fields() {
        let review: Review = serde_json::from_str(r#"{"authorName": "Bob", "rating": 3}"#).unwrap();
        assert_eq!(review.content, None);
        assert_eq!(review.review_date, None);
        assert!(!review.has_comments());
    }

    #[test]
    fn test_null_comments() {
        let review: Review = serde_json::from_str(r#"{"rating": 2, "comments": null}"#).unwrap();
        assert!(review.comments.is_empty());
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let json = r#"{
            "authorName": null,
            "publisher": null,
            "rating": null,
            "content": null,
            "comments": [{ "commentDate": null, "content": null }]
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.author_name, "");
        assert_eq!(review.publisher, "");
        assert_eq!(review.rating, 0.0);
        assert_eq!(review.content, None);
        assert_eq!(review.comments, vec![Comment::default()]);
    }

    #[test]
    fn test_mistyped_rating_is_rejected() {
        assert!(serde_json::from_str::<Review>(r#"{"rating": "five"}"#).is_err());
    }

    #[test]
    fn test_display_content_skips_empty() {
        let mut review = Review::new("Bob", "FIRSTPARTY", 5.0);
        review.content = Some(String::new());
        assert_eq!(review.display_content(), None);
        review.content = Some("Nice".into());
        assert_eq!(review.display_content(), Some("Nice"));
    }
}
