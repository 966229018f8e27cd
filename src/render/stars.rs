pub const STAR_COUNT: usize = 5;

pub const FULL_STAR: char = '\u{2605}';
pub const HALF_STAR: char = '\u{2BEA}';
pub const EMPTY_STAR: char = '\u{2606}';

/// How a rating splits into full, half and empty glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarBreakdown {
    pub full: usize,
    pub half: usize,
    pub empty: usize,
}

impl StarBreakdown {
    /// Split a rating into glyph counts that always sum to [`STAR_COUNT`].
    ///
    /// The fractional part rounds to the nearest half, ties away from zero:
    /// below 0.25 adds nothing, 0.25 up to 0.75 adds a half star and
    /// 0.75 or more carries into a full star.
    pub fn from_rating(rating: f64) -> Self {
        let max = STAR_COUNT as f64;
        let rating = if rating.is_nan() { 0.0 } else { rating.clamp(0.0, max) };

        let mut full = rating.floor();
        let rounded_half = ((rating - full) * 2.0).round() / 2.0;
        let mut half = 0;
        if rounded_half >= 1.0 {
            full += 1.0;
        } else if rounded_half > 0.0 {
            half = 1;
        }

        let full = (full as usize).min(STAR_COUNT);
        let half = half.min(STAR_COUNT - full);
        Self {
            full,
            half,
            empty: STAR_COUNT - full - half,
        }
    }
}

/// Render a rating as a fixed-width string of star glyphs.
pub fn star_glyphs(rating: f64) -> String {
    let stars = StarBreakdown::from_rating(rating);
    let mut glyphs = String::with_capacity(STAR_COUNT * 3);
    glyphs.extend(std::iter::repeat_n(FULL_STAR, stars.full));
    glyphs.extend(std::iter::repeat_n(HALF_STAR, stars.half));
    glyphs.extend(std::iter::repeat_n(EMPTY_STAR, stars.empty));
    glyphs
}
