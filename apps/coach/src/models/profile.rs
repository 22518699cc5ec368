use serde::Serialize;

use super::tags::TagSet;

/// Role used when the profile leaves `target_role` blank.
pub const DEFAULT_TARGET_ROLE: &str = "Software Engineer";

/// The user's background as entered in the profile panel.
///
/// Serialises to the `/api/profile` request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub location: String,
    pub education: String,
    pub experience: String,
    pub target_role: String,
    pub goals: TagSet,
    pub skills: TagSet,
    pub interests: TagSet,
}

impl Profile {
    /// The correlation id sent alongside feature requests. Blank emails are omitted.
    pub fn user_email(&self) -> Option<String> {
        non_blank(&self.email)
    }

    /// Target role for endpoints where the backend needs one.
    pub fn target_role_or_default(&self) -> String {
        non_blank(&self.target_role).unwrap_or_else(|| DEFAULT_TARGET_ROLE.to_string())
    }

    /// Target role for endpoints where it is optional.
    pub fn target_role_opt(&self) -> Option<String> {
        non_blank(&self.target_role)
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_body_shape() {
        let profile = Profile {
            name: "Ada".into(),
            email: "ada@x.com".into(),
            target_role: "Data Analyst".into(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&profile).unwrap(),
            json!({
                "name": "Ada",
                "email": "ada@x.com",
                "location": "",
                "education": "",
                "experience": "",
                "target_role": "Data Analyst",
                "goals": [],
                "skills": [],
                "interests": []
            })
        );
    }

    #[test]
    fn test_blank_email_is_omitted() {
        let mut profile = Profile::default();
        assert_eq!(profile.user_email(), None);
        profile.email = "  ".into();
        assert_eq!(profile.user_email(), None);
        profile.email = "ada@x.com".into();
        assert_eq!(profile.user_email().as_deref(), Some("ada@x.com"));
    }

    #[test]
    fn test_target_role_default() {
        let mut profile = Profile::default();
        assert_eq!(profile.target_role_or_default(), DEFAULT_TARGET_ROLE);
        assert_eq!(profile.target_role_opt(), None);
        profile.target_role = "PM".into();
        assert_eq!(profile.target_role_or_default(), "PM");
    }
}
