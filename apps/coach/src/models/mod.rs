pub mod chat;
pub mod interview;
pub mod profile;
pub mod tags;

pub use chat::{ChatMessage, Role, Transcript};
pub use interview::InterviewLevel;
pub use profile::Profile;
pub use tags::TagSet;
