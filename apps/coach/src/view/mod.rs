//! Plain-text rendering of each panel for the console front-end.
//!
//! Everything here is a pure function of a panel snapshot plus its busy flag.

pub mod labels;

use std::fmt::Write;

use crate::models::{Profile, Role, TagSet};
use crate::orchestrator::panels::{ChatPanel, InterviewPanel, ProfilePanel, ResumePanel, RoadmapPanel};

pub use labels::button_label;

fn header(out: &mut String, title: &str, subtitle: &str) {
    let _ = writeln!(out, "== {title} ==");
    let _ = writeln!(out, "   {subtitle}");
}

fn tags_line(out: &mut String, label: &str, tags: &TagSet) {
    let joined = tags.as_slice().join(", ");
    let _ = writeln!(out, "  {label:<11} [{joined}]");
}

fn field_line(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {label:<11} {value}");
}

pub fn render_profile(panel: &ProfilePanel) -> String {
    let mut out = String::new();
    header(&mut out, "Your Profile", "Tell the coach about your background");
    let Profile {
        name,
        email,
        location,
        education,
        experience,
        target_role,
        goals,
        skills,
        interests,
    } = &panel.profile;
    field_line(&mut out, "Name", name);
    field_line(&mut out, "Email", email);
    field_line(&mut out, "Location", location);
    field_line(&mut out, "Education", education);
    field_line(&mut out, "Experience", experience);
    field_line(&mut out, "Target role", target_role);
    tags_line(&mut out, "Goals", goals);
    tags_line(&mut out, "Skills", skills);
    tags_line(&mut out, "Interests", interests);
    if let Some(status) = &panel.status {
        let _ = writeln!(out, "  {status}");
    }
    out
}

pub fn render_chat(panel: &ChatPanel) -> String {
    let mut out = String::new();
    header(&mut out, "AI Chat Assistant", "Ask anything about your career path");
    for message in panel.transcript.visible() {
        let who = match message.role {
            Role::User => "you",
            Role::Assistant => "coach",
            Role::System => continue,
        };
        let _ = writeln!(out, "  {who:>5}: {}", message.content);
    }
    out
}

/// Only the newest message, used when the chat scrolls to its latest entry.
pub fn render_latest_chat(panel: &ChatPanel) -> Option<String> {
    panel
        .transcript
        .last()
        .filter(|m| m.role == Role::Assistant)
        .map(|m| format!("coach: {}", m.content))
}

pub fn render_resume(panel: &ResumePanel) -> String {
    let mut out = String::new();
    header(&mut out, "Resume Analyzer", "Paste your resume text for suggestions");
    let lines = panel.text.lines().count();
    let _ = writeln!(out, "  ({lines} line(s) of resume text)");
    for tip in &panel.tips {
        let _ = writeln!(out, "  - {tip}");
    }
    out
}

pub fn render_interview(panel: &InterviewPanel) -> String {
    let mut out = String::new();
    header(&mut out, "Interview Practice", "Start a mock interview and get feedback");
    let _ = writeln!(out, "  Level: {}", panel.level);
    for question in &panel.questions {
        let _ = writeln!(out, "  > {question}");
    }
    if !panel.feedback.is_empty() {
        let _ = writeln!(out, "  Feedback: {}", panel.feedback);
    }
    out
}

pub fn render_roadmap(panel: &RoadmapPanel) -> String {
    let mut out = String::new();
    header(&mut out, "Career Roadmap", "Get a step-by-step plan based on your goals");
    for (i, step) in panel.steps.iter().enumerate() {
        let _ = writeln!(out, "  {}. {step}", i + 1);
    }
    out
}
