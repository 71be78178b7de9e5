use serde::Serialize;
use thiserror::Error;

use super::{
    skill::{Skill, SkillError},
    volunteer_hours::{VolunteerHours, VolunteerHoursError},
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VolunteerShiftError {
    #[error("Invalid hours: {0}")]
    InvalidHours(#[from] VolunteerHoursError),
    #[error("Invalid skill at position {index}: {source}")]
    InvalidSkill { index: usize, source: SkillError },
}

/// Hours volunteered in one sitting together with the skills used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolunteerShift {
    hours: VolunteerHours,
    skills: Vec<Skill>,
}

impl VolunteerShift {
    /// Validates raw form input into a shift.
    ///
    /// Hours are checked first; for skills the first invalid entry wins.
    pub fn new<I, S>(hours: f64, skills: I) -> Result<Self, VolunteerShiftError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let hours = VolunteerHours::try_from(hours)?;
        let skills = skills
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                Skill::try_from(name.into())
                    .map_err(|source| VolunteerShiftError::InvalidSkill { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { hours, skills })
    }

    pub fn hours(&self) -> VolunteerHours {
        self.hours
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// One-line description, e.g. `"2 hours: Cooking, Driving"`.
    pub fn summary(&self) -> String {
        if self.skills.is_empty() {
            return self.hours.to_string();
        }

        let skills = self
            .skills
            .iter()
            .map(AsRef::<str>::as_ref)
            .collect::<Vec<&str>>()
            .join(", ");
        format!("{}: {}", self.hours, skills)
    }
}
