use serde::Deserialize;

use crate::domain::null_as_default;

/// Business entity the reviews are attached to.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDetails {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub review_generation_url: Option<String>,
    #[serde(default)]
    pub first_party_review_page: Option<String>,
}

impl EntityDetails {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Review generation link, ignoring blank values.
    pub fn review_generation_url(&self) -> Option<&str> {
        non_blank(self.review_generation_url.as_deref())
    }

    pub fn first_party_review_page(&self) -> Option<&str> {
        non_blank(self.first_party_review_page.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
