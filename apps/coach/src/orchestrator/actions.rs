//! The six submit operations, one `Action` each.
//!
//! Actions carry the profile context they need (email, target role, tags) as a
//! snapshot taken when the submit starts; the rest comes from the slice's view.

use crate::backend::wire::{
    ChatRequest, ChatResponse, FeedbackResponse, InterviewFeedbackRequest, InterviewStartRequest,
    ProfileResponse, QuestionsResponse, ResumeAnalyzeRequest, RoadmapRequest, RoadmapResponse,
    TipsResponse, CHAT_PATH, INTERVIEW_FEEDBACK_PATH, INTERVIEW_START_PATH, PROFILE_PATH,
    RESUME_ANALYZE_PATH, ROADMAP_PATH,
};
use crate::errors::ClientError;
use crate::models::{ChatMessage, Profile, TagSet};
use crate::orchestrator::panels::{
    ChatPanel, InterviewPanel, ProfilePanel, ResumePanel, RoadmapPanel,
};
use crate::orchestrator::events::Trigger;
use crate::orchestrator::slice::Action;

pub const PROFILE_SAVED: &str = "Profile saved!";
pub const PROFILE_SAVE_FAILED: &str = "Failed to save profile";
pub const CHAT_NO_REPLY: &str = "Sorry, no response.";
pub const CHAT_FAILED: &str = "Error contacting server.";
pub const RESUME_FAILED: &str = "Error analyzing resume";
pub const INTERVIEW_START_FAILED: &str = "Error starting interview";
pub const INTERVIEW_FEEDBACK_FAILED: &str = "Error getting feedback";
pub const ROADMAP_FAILED: &str = "Error generating roadmap";

fn non_blank(text: &str) -> Option<&str> {
    (!text.trim().is_empty()).then_some(text)
}

// ────────────────────────────────────────────────────────────────────────────
// Profile
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/profile. No required fields.
pub struct SaveProfile;

impl Action for SaveProfile {
    type View = ProfilePanel;
    type Request = Profile;
    type Response = ProfileResponse;

    const PATH: &'static str = PROFILE_PATH;

    fn prepare(&self, view: &ProfilePanel) -> Option<Profile> {
        Some(view.profile.clone())
    }

    fn on_start(&self, view: &mut ProfilePanel, _request: &Profile) {
        view.status = None;
    }

    fn on_success(&self, view: &mut ProfilePanel, response: ProfileResponse) -> Result<(), ClientError> {
        if response.ok != Some(true) {
            return Err(ClientError::Rejected("profile save was not acknowledged".into()));
        }
        view.status = Some(PROFILE_SAVED.to_string());
        Ok(())
    }

    fn on_failure(&self, view: &mut ProfilePanel) {
        view.status = Some(PROFILE_SAVE_FAILED.to_string());
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Chat
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/chat with the current draft. The draft moves into the transcript
/// as soon as the request starts.
pub struct SendChat {
    pub user_email: Option<String>,
}

impl Action for SendChat {
    type View = ChatPanel;
    type Request = ChatRequest;
    type Response = ChatResponse;

    const PATH: &'static str = CHAT_PATH;

    fn prepare(&self, view: &ChatPanel) -> Option<ChatRequest> {
        non_blank(&view.draft).map(|message| ChatRequest {
            user_email: self.user_email.clone(),
            message: message.to_string(),
        })
    }

    fn on_start(&self, view: &mut ChatPanel, request: &ChatRequest) {
        view.transcript.push(ChatMessage::user(request.message.clone()));
        view.draft.clear();
    }

    fn on_success(&self, view: &mut ChatPanel, response: ChatResponse) -> Result<(), ClientError> {
        let text = response
            .into_text()
            .unwrap_or_else(|| CHAT_NO_REPLY.to_string());
        view.transcript.push(ChatMessage::assistant(text));
        Ok(())
    }

    fn on_failure(&self, view: &mut ChatPanel) {
        view.transcript.push(ChatMessage::assistant(CHAT_FAILED));
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resume
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/resume/analyze. Requires resume text.
pub struct AnalyzeResume {
    pub user_email: Option<String>,
    pub target_role: Option<String>,
}

impl Action for AnalyzeResume {
    type View = ResumePanel;
    type Request = ResumeAnalyzeRequest;
    type Response = TipsResponse;

    const PATH: &'static str = RESUME_ANALYZE_PATH;

    fn prepare(&self, view: &ResumePanel) -> Option<ResumeAnalyzeRequest> {
        non_blank(&view.text).map(|text| ResumeAnalyzeRequest {
            user_email: self.user_email.clone(),
            resume_text: text.to_string(),
            target_role: self.target_role.clone(),
        })
    }

    fn on_start(&self, view: &mut ResumePanel, _request: &ResumeAnalyzeRequest) {
        view.tips.clear();
    }

    fn on_success(&self, view: &mut ResumePanel, response: TipsResponse) -> Result<(), ClientError> {
        view.tips = response.tips.unwrap_or_default();
        Ok(())
    }

    fn on_failure(&self, view: &mut ResumePanel) {
        view.tips = vec![RESUME_FAILED.to_string()];
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Interview
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/interview/start at the panel's level. Clears earlier questions and feedback.
pub struct StartInterview {
    pub user_email: Option<String>,
    pub target_role: String,
}

impl Action for StartInterview {
    type View = InterviewPanel;
    type Request = InterviewStartRequest;
    type Response = QuestionsResponse;

    const PATH: &'static str = INTERVIEW_START_PATH;

    fn prepare(&self, view: &InterviewPanel) -> Option<InterviewStartRequest> {
        Some(InterviewStartRequest {
            user_email: self.user_email.clone(),
            target_role: self.target_role.clone(),
            level: view.level,
        })
    }

    fn on_start(&self, view: &mut InterviewPanel, _request: &InterviewStartRequest) {
        view.questions.clear();
        view.feedback.clear();
    }

    fn on_success(&self, view: &mut InterviewPanel, response: QuestionsResponse) -> Result<(), ClientError> {
        view.questions = response.questions.unwrap_or_default();
        Ok(())
    }

    fn on_failure(&self, view: &mut InterviewPanel) {
        view.questions = vec![INTERVIEW_START_FAILED.to_string()];
    }
}

/// POST /api/interview/feedback for the drafted answer. Shares the interview busy flag.
pub struct RequestFeedback {
    pub user_email: Option<String>,
    pub target_role: String,
}

impl Action for RequestFeedback {
    type View = InterviewPanel;
    type Request = InterviewFeedbackRequest;
    type Response = FeedbackResponse;

    const PATH: &'static str = INTERVIEW_FEEDBACK_PATH;
    const TRIGGER: Trigger = Trigger::Secondary;

    fn prepare(&self, view: &InterviewPanel) -> Option<InterviewFeedbackRequest> {
        non_blank(&view.answer).map(|answer| InterviewFeedbackRequest {
            user_email: self.user_email.clone(),
            target_role: self.target_role.clone(),
            level: view.level,
            answer: answer.to_string(),
        })
    }

    fn on_success(&self, view: &mut InterviewPanel, response: FeedbackResponse) -> Result<(), ClientError> {
        view.feedback = response.feedback.unwrap_or_default();
        Ok(())
    }

    fn on_failure(&self, view: &mut InterviewPanel) {
        view.feedback = INTERVIEW_FEEDBACK_FAILED.to_string();
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Roadmap
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/roadmap from the profile's role, skills and interests.
pub struct GenerateRoadmap {
    pub user_email: Option<String>,
    pub target_role: String,
    pub current_skills: TagSet,
    pub interests: TagSet,
}

impl Action for GenerateRoadmap {
    type View = RoadmapPanel;
    type Request = RoadmapRequest;
    type Response = RoadmapResponse;

    const PATH: &'static str = ROADMAP_PATH;

    fn prepare(&self, _view: &RoadmapPanel) -> Option<RoadmapRequest> {
        Some(RoadmapRequest {
            user_email: self.user_email.clone(),
            target_role: self.target_role.clone(),
            current_skills: self.current_skills.clone(),
            interests: self.interests.clone(),
        })
    }

    fn on_start(&self, view: &mut RoadmapPanel, _request: &RoadmapRequest) {
        view.steps.clear();
    }

    fn on_success(&self, view: &mut RoadmapPanel, response: RoadmapResponse) -> Result<(), ClientError> {
        view.steps = response.roadmap.unwrap_or_default();
        Ok(())
    }

    fn on_failure(&self, view: &mut RoadmapPanel) {
        view.steps = vec![ROADMAP_FAILED.to_string()];
    }
}
