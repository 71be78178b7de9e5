use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Returns `true` when the skill name is non-empty.
///
/// Whitespace is not trimmed, so `"  "` counts as a skill.
pub fn is_valid_skill(name: &str) -> bool {
    !name.is_empty()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkillError {
    #[error("Skill name cannot be empty")]
    Empty,
}

/// A free-text label describing something a volunteer can do.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Skill(String);

impl TryFrom<String> for Skill {
    type Error = SkillError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        if !is_valid_skill(&name) {
            return Err(SkillError::Empty);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for Skill {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
