// File: src/render.rs
// Purpose: Pure mapping from validation state to the page's utility classes

use campo_validation::{lit_bars, StrengthTier};

use crate::field::{FieldId, FieldState, StrengthMeter};

pub const HIDDEN: &str = "hidden";
pub const BORDER_ERROR: &str = "border-red-500";

/// Color class of one strength bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    Gray,
    Red,
    Yellow,
    Green,
}

impl BarColor {
    pub fn as_class(&self) -> &'static str {
        match self {
            BarColor::Gray => "bg-gray-200",
            BarColor::Red => "bg-red-500",
            BarColor::Yellow => "bg-yellow-500",
            BarColor::Green => "bg-green-500",
        }
    }

    fn from_tier(tier: StrengthTier) -> Self {
        match tier {
            StrengthTier::Weak => BarColor::Red,
            StrengthTier::Fair => BarColor::Yellow,
            StrengthTier::Strong => BarColor::Green,
        }
    }
}

/// Whether the validation container for a field carries the `hidden` class.
pub fn container_hidden(state: &FieldState) -> bool {
    !state.error_visible()
}

/// Extra class on the input element, if any. The password input never takes
/// the error border; only its hint panel toggles.
pub fn input_error_class(id: FieldId, state: &FieldState) -> Option<&'static str> {
    if id != FieldId::Password && state.error_visible() {
        Some(BORDER_ERROR)
    } else {
        None
    }
}

/// The four strength bars, leftmost first. The first `min(score, 4)` bars
/// take the tier color and the rest stay gray, so a score of one lights a
/// single red bar.
pub fn meter_bars(meter: &StrengthMeter) -> [BarColor; 4] {
    let mut bars = [BarColor::Gray; 4];
    let color = BarColor::from_tier(StrengthTier::from_score(meter.score));
    for bar in bars.iter_mut().take(lit_bars(meter.score)) {
        *bar = color;
    }
    bars
}

#[cfg(test)]
mod tests {
    use super::*;
    use campo_validation::score;

    fn meter_for(password: &str) -> StrengthMeter {
        StrengthMeter {
            score: score(password),
        }
    }

    #[test]
    fn test_full_score_colors_four_green_bars() {
        assert_eq!(meter_bars(&meter_for("Password1!")), [BarColor::Green; 4]);
    }

    #[test]
    fn test_score_one_lights_a_single_red_bar() {
        assert_eq!(
            meter_bars(&meter_for("abcdef")),
            [BarColor::Red, BarColor::Gray, BarColor::Gray, BarColor::Gray]
        );
    }

    #[test]
    fn test_score_three_is_the_only_yellow_tier() {
        assert_eq!(
            meter_bars(&meter_for("abcdefg1")),
            [
                BarColor::Yellow,
                BarColor::Yellow,
                BarColor::Yellow,
                BarColor::Gray
            ]
        );
    }

    #[test]
    fn test_empty_password_leaves_all_bars_gray() {
        assert_eq!(meter_bars(&StrengthMeter::default()), [BarColor::Gray; 4]);
    }

    #[test]
    fn test_container_and_border_classes() {
        let invalid = FieldState::invalid("mal");
        assert!(!container_hidden(&invalid));
        assert_eq!(
            input_error_class(FieldId::Email, &invalid),
            Some(BORDER_ERROR)
        );

        let valid = FieldState::valid();
        assert!(container_hidden(&valid));
        assert_eq!(input_error_class(FieldId::Email, &valid), None);

        // The password input keeps its border even while the hint is shown
        assert_eq!(input_error_class(FieldId::Password, &invalid), None);
    }

    #[test]
    fn test_bar_classes_match_page_contract() {
        assert_eq!(BarColor::Gray.as_class(), "bg-gray-200");
        assert_eq!(BarColor::Red.as_class(), "bg-red-500");
        assert_eq!(BarColor::Yellow.as_class(), "bg-yellow-500");
        assert_eq!(BarColor::Green.as_class(), "bg-green-500");
    }
}
