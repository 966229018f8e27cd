use crate::domain::Review;

/// Aggregate statistics derived from a review list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReviewSummary {
    pub count: usize,
    pub average_rating: f64,
}

impl ReviewSummary {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Count the reviews and take the arithmetic mean of their ratings.
///
/// An empty list yields an average of 0. No rounding is applied here.
pub fn summarize(reviews: &[Review]) -> ReviewSummary {
    if reviews.is_empty() {
        return ReviewSummary::default();
    }

    let total: f64 = reviews.iter().map(|r| r.rating).sum();
    ReviewSummary {
        count: reviews.len(),
        average_rating: total / reviews.len() as f64,
    }
}
