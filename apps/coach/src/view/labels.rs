pub use crate::orchestrator::Trigger;
use crate::orchestrator::Feature;

/// Caption for a submit trigger. While busy the trigger stays visible but shows
/// its in-progress caption and ignores presses.
pub fn button_label(feature: Feature, trigger: Trigger, busy: bool) -> &'static str {
    match (feature, trigger, busy) {
        (Feature::Profile, _, false) => "Save Profile",
        (Feature::Profile, _, true) => "Saving...",
        (Feature::Chat, _, false) => "Ask",
        (Feature::Chat, _, true) => "Thinking...",
        (Feature::Resume, _, false) => "Analyze",
        (Feature::Resume, _, true) => "Analyzing...",
        (Feature::Interview, Trigger::Primary, false) => "Start Interview",
        (Feature::Interview, Trigger::Primary, true) => "Loading...",
        (Feature::Interview, Trigger::Secondary, false) => "Get Feedback",
        (Feature::Interview, Trigger::Secondary, true) => "Evaluating...",
        (Feature::Roadmap, _, false) => "Generate Roadmap",
        (Feature::Roadmap, _, true) => "Generating...",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_labels() {
        assert_eq!(button_label(Feature::Chat, Trigger::Primary, true), "Thinking...");
        assert_eq!(
            button_label(Feature::Interview, Trigger::Secondary, false),
            "Get Feedback"
        );
        assert_eq!(
            button_label(Feature::Interview, Trigger::Secondary, true),
            "Evaluating..."
        );
    }
}
