use std::fmt;

/// The isolated feature slices. Interview start and feedback share one slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Profile,
    Chat,
    Resume,
    Interview,
    Roadmap,
}

impl Feature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Profile => "profile",
            Feature::Chat => "chat",
            Feature::Resume => "resume",
            Feature::Interview => "interview",
            Feature::Roadmap => "roadmap",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which trigger of a slice started a submit. Interview has two: start and feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Primary,
    Secondary,
}

/// Result of one submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Required input was blank; nothing was sent.
    Skipped,
    /// A request for this slice is already in flight; nothing was sent.
    Busy,
    Succeeded,
    /// The slice now shows its fallback text.
    Failed,
}

/// Notifications for whatever renders the slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoachEvent {
    Started(Feature, Trigger),
    Finished(Feature, SubmitStatus),
    /// The chat view should bring its newest message into view.
    ScrollToLatest,
}
