use std::collections::HashMap;

pub const GOOGLE_MY_BUSINESS: &str = "GOOGLEMYBUSINESS";
pub const FIRST_PARTY: &str = "FIRSTPARTY";
pub const FACEBOOK: &str = "FACEBOOK";

const BUILTIN_ICONS: &[(&str, &str)] = &[
    (GOOGLE_MY_BUSINESS, "https://www.yext-static.com/cms/spark/1/site-icon-250.svg"),
    (FIRST_PARTY, "https://www.yext-static.com/cms/spark/1/site-icon-283.svg"),
    (FACEBOOK, "https://www.yext-static.com/cms/spark/1/site-icon-71.svg"),
];

/// Publisher id to icon URL lookup.
#[derive(Debug, Clone)]
pub struct PublisherIcons {
    icons: HashMap<String, String>,
}

impl Default for PublisherIcons {
    fn default() -> Self {
        Self {
            icons: BUILTIN_ICONS
                .iter()
                .map(|(publisher, url)| (publisher.to_string(), url.to_string()))
                .collect(),
        }
    }
}

impl PublisherIcons {
    /// Built-in icons plus `extra`, which wins on conflicts.
    pub fn with_overrides<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut icons = Self::default();
        icons
            .icons
            .extend(extra.into_iter().map(|(k, v)| (k.into(), v.into())));
        icons
    }

    /// Icon URL for a publisher, empty when the publisher is unknown.
    pub fn icon_for(&self, publisher: &str) -> &str {
        self.icons.get(publisher).map(String::as_str).unwrap_or("")
    }
}
