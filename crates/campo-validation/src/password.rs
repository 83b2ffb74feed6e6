//! Password strength scoring
//!
//! The score is additive over five independent checks, so the range is
//! 0..=5. The meter only has four bars; `lit_bars` caps the lit count.

/// Color tier of the strength meter for a given score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthTier {
    /// Score 0-2
    Weak,
    /// Score 3
    Fair,
    /// Score 4-5
    Strong,
}

impl StrengthTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthTier::Weak,
            3 => StrengthTier::Fair,
            _ => StrengthTier::Strong,
        }
    }
}

/// Computes the additive strength score for a password.
///
/// One point each for: length >= 6, length >= 8, an ASCII uppercase letter,
/// an ASCII digit, and any character outside `[A-Za-z0-9]`.
pub fn score(password: &str) -> u8 {
    let len = password.chars().count();

    let mut score = 0;
    if len >= 6 {
        score += 1;
    }
    if len >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    score
}

/// Number of meter bars lit for a score.
///
/// The meter has four bars, so a score of five still lights four. A score
/// of one lights exactly one bar, in the weak-tier color.
pub fn lit_bars(score: u8) -> usize {
    usize::from(score.min(4))
}
