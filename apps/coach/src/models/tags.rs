use serde::Serialize;

/// Insertion-ordered set of short labels (goals, skills, interests).
///
/// Entries are trimmed on the way in; blank and duplicate entries are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// Adds `raw` (trimmed) to the end of the set. Returns `false` when nothing changed.
    pub fn add(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    /// Removes an exact tag. Returns `false` when it was not present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
