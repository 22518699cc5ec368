//! View state owned by each feature slice: draft inputs plus the last result.

use crate::models::{InterviewLevel, Profile, Transcript};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePanel {
    pub profile: Profile,
    /// Transient save confirmation (or failure notice). Cleared by the next edit.
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatPanel {
    pub transcript: Transcript,
    pub draft: String,
}

impl ChatPanel {
    pub fn new(system_brief: &str) -> Self {
        Self {
            transcript: Transcript::new(system_brief),
            draft: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumePanel {
    pub text: String,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterviewPanel {
    pub level: InterviewLevel,
    pub questions: Vec<String>,
    pub answer: String,
    pub feedback: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadmapPanel {
    pub steps: Vec<String>,
}
