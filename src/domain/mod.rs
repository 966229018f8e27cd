pub mod entity;
pub mod review;
pub mod summary;

pub use entity::EntityDetails;
pub use review::{Comment, Review};
pub use summary::{summarize, ReviewSummary};

use serde::{Deserialize, Deserializer};

/// Read JSON `null` the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

