//! Haptic feedback configuration for a custom keyboard.
//!
//! A pure data record: the action handler reads it and decides when to
//! actually vibrate. Nothing in this crate triggers feedback directly.

/// One kind of haptic feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HapticFeedback {
    #[default]
    None,
    LightImpact,
    MediumImpact,
    HeavyImpact,
    SelectionChanged,
    Success,
    Warning,
    Error,
}

/// Feedback to fire per gesture kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HapticFeedbackConfiguration {
    pub tap: HapticFeedback,
    pub double_tap: HapticFeedback,
    pub long_press: HapticFeedback,
    pub long_press_on_space: HapticFeedback,
    pub repeat: HapticFeedback,
}

impl HapticFeedbackConfiguration {
    /// Standard configuration: silent except for a medium impact on a
    /// long-press of the space key.
    pub fn standard() -> Self {
        Self {
            long_press_on_space: HapticFeedback::MediumImpact,
            ..Self::no_feedback()
        }
    }

    /// Disables all haptic feedback.
    pub fn no_feedback() -> Self {
        Self {
            tap: HapticFeedback::None,
            double_tap: HapticFeedback::None,
            long_press: HapticFeedback::None,
            long_press_on_space: HapticFeedback::None,
            repeat: HapticFeedback::None,
        }
    }
}

impl Default for HapticFeedbackConfiguration {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_differs_from_silent_only_on_space_long_press() {
        let standard = HapticFeedbackConfiguration::standard();
        let silent = HapticFeedbackConfiguration::no_feedback();
        assert_eq!(standard.long_press_on_space, HapticFeedback::MediumImpact);
        assert_eq!(
            HapticFeedbackConfiguration {
                long_press_on_space: HapticFeedback::None,
                ..standard
            },
            silent
        );
    }

    #[test]
    fn default_is_standard() {
        assert_eq!(
            HapticFeedbackConfiguration::default(),
            HapticFeedbackConfiguration::standard()
        );
    }
}
