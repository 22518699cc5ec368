//! Interaction orchestrator: five isolated feature slices behind one facade.
//!
//! Slices share nothing but the profile, which is snapshotted into each action
//! when a submit starts. Different slices may have requests in flight at the same
//! time; within one slice the busy flag allows a single request.

pub mod actions;
pub mod events;
pub mod panels;
pub mod slice;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::info;

use crate::backend::CoachBackend;
use crate::config::Config;
use crate::models::{InterviewLevel, Profile};

use actions::{AnalyzeResume, GenerateRoadmap, RequestFeedback, SaveProfile, SendChat, StartInterview};
pub use events::{CoachEvent, Feature, SubmitStatus, Trigger};
use panels::{ChatPanel, InterviewPanel, ProfilePanel, ResumePanel, RoadmapPanel};
use slice::Slice;

/// Pause between a chat response landing and the scroll-to-latest notification,
/// so the renderer has laid out the new message.
pub const CHAT_SCROLL_DELAY: Duration = Duration::from_millis(50);

const EVENT_CAPACITY: usize = 64;

pub struct Coach {
    backend: Arc<dyn CoachBackend>,
    events: broadcast::Sender<CoachEvent>,
    profile: Slice<ProfilePanel>,
    chat: Slice<ChatPanel>,
    resume: Slice<ResumePanel>,
    interview: Slice<InterviewPanel>,
    roadmap: Slice<RoadmapPanel>,
}

impl Coach {
    pub fn new(config: &Config, backend: Arc<dyn CoachBackend>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            backend,
            events,
            profile: Slice::new(Feature::Profile, ProfilePanel::default()),
            chat: Slice::new(Feature::Chat, ChatPanel::new(&config.system_brief)),
            resume: Slice::new(Feature::Resume, ResumePanel::default()),
            interview: Slice::new(Feature::Interview, InterviewPanel::default()),
            roadmap: Slice::new(Feature::Roadmap, RoadmapPanel::default()),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CoachEvent> {
        self.events.subscribe()
    }

    /// Pings the backend once in the background; the outcome is ignored.
    pub fn spawn_warm_up(&self) -> JoinHandle<()> {
        let backend = self.backend.clone();
        tokio::spawn(async move { backend.warm_up().await })
    }

    pub fn is_busy(&self, feature: Feature) -> bool {
        match feature {
            Feature::Profile => self.profile.is_busy(),
            Feature::Chat => self.chat.is_busy(),
            Feature::Resume => self.resume.is_busy(),
            Feature::Interview => self.interview.is_busy(),
            Feature::Roadmap => self.roadmap.is_busy(),
        }
    }

    // ── Draft input ────────────────────────────────────────────────────────

    /// Edits the profile and discards any save confirmation on display.
    pub fn edit_profile<R>(&self, f: impl FnOnce(&mut Profile) -> R) -> R {
        self.profile.edit(|panel| {
            panel.status = None;
            f(&mut panel.profile)
        })
    }

    pub fn set_chat_draft(&self, text: impl Into<String>) {
        let text = text.into();
        self.chat.edit(|panel| panel.draft = text);
    }

    pub fn set_resume_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.resume.edit(|panel| panel.text = text);
    }

    pub fn append_resume_line(&self, line: &str) {
        self.resume.edit(|panel| {
            if !panel.text.is_empty() {
                panel.text.push('\n');
            }
            panel.text.push_str(line);
        });
    }

    pub fn set_interview_level(&self, level: InterviewLevel) {
        self.interview.edit(|panel| panel.level = level);
    }

    pub fn set_interview_answer(&self, answer: impl Into<String>) {
        let answer = answer.into();
        self.interview.edit(|panel| panel.answer = answer);
    }

    // ── Snapshots for rendering ────────────────────────────────────────────

    pub fn profile(&self) -> Profile {
        self.profile.read(|panel| panel.profile.clone())
    }

    pub fn profile_panel(&self) -> ProfilePanel {
        self.profile.read(Clone::clone)
    }

    pub fn chat_panel(&self) -> ChatPanel {
        self.chat.read(Clone::clone)
    }

    pub fn resume_panel(&self) -> ResumePanel {
        self.resume.read(Clone::clone)
    }

    pub fn interview_panel(&self) -> InterviewPanel {
        self.interview.read(Clone::clone)
    }

    pub fn roadmap_panel(&self) -> RoadmapPanel {
        self.roadmap.read(Clone::clone)
    }

    // ── Submits ────────────────────────────────────────────────────────────

    pub async fn save_profile(&self) -> SubmitStatus {
        self.profile
            .submit(self.backend.as_ref(), &self.events, SaveProfile)
            .await
    }

    pub async fn send_chat(&self) -> SubmitStatus {
        let action = SendChat {
            user_email: self.profile().user_email(),
        };
        let status = self
            .chat
            .submit(self.backend.as_ref(), &self.events, action)
            .await;

        if matches!(status, SubmitStatus::Succeeded | SubmitStatus::Failed) {
            let events = self.events.clone();
            tokio::spawn(async move {
                tokio::time::sleep(CHAT_SCROLL_DELAY).await;
                let _ = events.send(CoachEvent::ScrollToLatest);
            });
        }
        status
    }

    pub async fn analyze_resume(&self) -> SubmitStatus {
        let profile = self.profile();
        let action = AnalyzeResume {
            user_email: profile.user_email(),
            target_role: profile.target_role_opt(),
        };
        self.resume
            .submit(self.backend.as_ref(), &self.events, action)
            .await
    }

    pub async fn start_interview(&self) -> SubmitStatus {
        let profile = self.profile();
        let action = StartInterview {
            user_email: profile.user_email(),
            target_role: profile.target_role_or_default(),
        };
        self.interview
            .submit(self.backend.as_ref(), &self.events, action)
            .await
    }

    pub async fn request_feedback(&self) -> SubmitStatus {
        let profile = self.profile();
        let action = RequestFeedback {
            user_email: profile.user_email(),
            target_role: profile.target_role_or_default(),
        };
        self.interview
            .submit(self.backend.as_ref(), &self.events, action)
            .await
    }

    pub async fn generate_roadmap(&self) -> SubmitStatus {
        let profile = self.profile();
        info!(
            skills = profile.skills.len(),
            interests = profile.interests.len(),
            "Requesting roadmap"
        );
        let action = GenerateRoadmap {
            user_email: profile.user_email(),
            target_role: profile.target_role_or_default(),
            current_skills: profile.skills,
            interests: profile.interests,
        };
        self.roadmap
            .submit(self.backend.as_ref(), &self.events, action)
            .await
    }
}
