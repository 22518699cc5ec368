//! Request and response bodies for the coach backend's JSON endpoints.
//!
//! Requests omit optional fields entirely rather than sending `null`.
//! Responses tolerate missing or `null` fields; an absent list reads as empty.

use serde::{Deserialize, Serialize};

use crate::models::{InterviewLevel, TagSet};

pub const PROFILE_PATH: &str = "/api/profile";
pub const CHAT_PATH: &str = "/api/chat";
pub const RESUME_ANALYZE_PATH: &str = "/api/resume/analyze";
pub const INTERVIEW_START_PATH: &str = "/api/interview/start";
pub const INTERVIEW_FEEDBACK_PATH: &str = "/api/interview/feedback";
pub const ROADMAP_PATH: &str = "/api/roadmap";

// ────────────────────────────────────────────────────────────────────────────
// Requests
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeAnalyzeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    pub resume_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewStartRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    pub target_role: String,
    pub level: InterviewLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewFeedbackRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    pub target_role: String,
    pub level: InterviewLevel,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    pub target_role: String,
    pub current_skills: TagSet,
    pub interests: TagSet,
}

// ────────────────────────────────────────────────────────────────────────────
// Responses
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub ok: Option<bool>,
}

/// Older backends answered chat under `assistant` or `assistantMessage`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub assistant: Option<String>,
    #[serde(default, rename = "assistantMessage")]
    pub assistant_message: Option<String>,
}

impl ChatResponse {
    pub fn into_text(self) -> Option<String> {
        self.reply.or(self.assistant).or(self.assistant_message)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TipsResponse {
    #[serde(default)]
    pub tips: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionsResponse {
    #[serde(default)]
    pub questions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackResponse {
    #[serde(default)]
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoadmapResponse {
    #[serde(default)]
    pub roadmap: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_request_omits_missing_email() {
        let body = ChatRequest {
            user_email: None,
            message: "What skills for a PM role?".into(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "message": "What skills for a PM role?" })
        );
    }

    #[test]
    fn test_chat_response_aliases() {
        let r: ChatResponse = serde_json::from_value(json!({ "assistantMessage": "hi" })).unwrap();
        assert_eq!(r.into_text().as_deref(), Some("hi"));

        let r: ChatResponse =
            serde_json::from_value(json!({ "reply": "first", "assistant": "second" })).unwrap();
        assert_eq!(r.into_text().as_deref(), Some("first"));

        let r: ChatResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(r.into_text(), None);
    }

    #[test]
    fn test_null_list_reads_as_none() {
        let r: TipsResponse = serde_json::from_value(json!({ "tips": null })).unwrap();
        assert!(r.tips.is_none());
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        assert!(serde_json::from_value::<QuestionsResponse>(json!({ "questions": "Q1" })).is_err());
    }
}
