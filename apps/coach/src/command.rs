//! Console command parsing. One command per input line.

use thiserror::Error;

use crate::models::{InterviewLevel, Profile, TagSet};

pub const HELP: &str = "\
Profile:    name|email|location|education|experience|role <text>
            goal|skill|interest add|rm <tag>
            save
Chat:       ask <message>
Resume:     resume <line>   (appends a line)   resume clear   analyze
Interview:  level junior|mid|senior   interview   answer <text>   feedback
Roadmap:    roadmap
Other:      show   help   quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Location,
    Education,
    Experience,
    TargetRole,
}

impl ProfileField {
    pub fn apply(self, profile: &mut Profile, value: String) {
        let slot = match self {
            ProfileField::Name => &mut profile.name,
            ProfileField::Email => &mut profile.email,
            ProfileField::Location => &mut profile.location,
            ProfileField::Education => &mut profile.education,
            ProfileField::Experience => &mut profile.experience,
            ProfileField::TargetRole => &mut profile.target_role,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagField {
    Goals,
    Skills,
    Interests,
}

impl TagField {
    pub fn tags_mut(self, profile: &mut Profile) -> &mut TagSet {
        match self {
            TagField::Goals => &mut profile.goals,
            TagField::Skills => &mut profile.skills,
            TagField::Interests => &mut profile.interests,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetField(ProfileField, String),
    AddTag(TagField, String),
    RemoveTag(TagField, String),
    Level(InterviewLevel),
    SaveProfile,
    Ask(String),
    ResumeLine(String),
    ResumeClear,
    Analyze,
    StartInterview,
    Answer(String),
    Feedback,
    Roadmap,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}' (type 'help')")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    InvalidLevel(String),
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "name" => Command::SetField(ProfileField::Name, rest.to_string()),
        "email" => Command::SetField(ProfileField::Email, rest.to_string()),
        "location" => Command::SetField(ProfileField::Location, rest.to_string()),
        "education" => Command::SetField(ProfileField::Education, rest.to_string()),
        "experience" => Command::SetField(ProfileField::Experience, rest.to_string()),
        "role" => Command::SetField(ProfileField::TargetRole, rest.to_string()),
        "goal" => parse_tag(TagField::Goals, rest, "goal add|rm <tag>")?,
        "skill" => parse_tag(TagField::Skills, rest, "skill add|rm <tag>")?,
        "interest" => parse_tag(TagField::Interests, rest, "interest add|rm <tag>")?,
        "level" => Command::Level(rest.parse().map_err(CommandError::InvalidLevel)?),
        "save" => Command::SaveProfile,
        "ask" => Command::Ask(rest.to_string()),
        "resume" if rest.eq_ignore_ascii_case("clear") => Command::ResumeClear,
        "resume" => Command::ResumeLine(rest.to_string()),
        "analyze" => Command::Analyze,
        "interview" => Command::StartInterview,
        "answer" => Command::Answer(rest.to_string()),
        "feedback" => Command::Feedback,
        "roadmap" => Command::Roadmap,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_tag(field: TagField, rest: &str, usage: &'static str) -> Result<Command, CommandError> {
    let (verb, tag) = rest
        .split_once(char::is_whitespace)
        .ok_or(CommandError::Usage(usage))?;
    match verb {
        "add" => Ok(Command::AddTag(field, tag.trim().to_string())),
        "rm" | "remove" => Ok(Command::RemoveTag(field, tag.trim().to_string())),
        _ => Err(CommandError::Usage(usage)),
    }
}
