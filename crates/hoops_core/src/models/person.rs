use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Identity record shared by every roster entity.
///
/// This is the leaf of the model: it knows nothing about positions or
/// scoring. A `Player` embeds one rather than extending it, so the same
/// record could back coaches or referees without change.
///
/// Fields are public and mutated by plain assignment; overwrites are
/// unconditional and carry no side effects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    /// Full name, e.g. "juan perez garcia". Always present once
    /// constructed; may be empty text.
    pub full_name: String,

    /// Calendar birth date. `None` when the entity was created through the
    /// name-only path.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub birth_date: Option<NaiveDate>,
}

impl Person {
    /// Name-only form; the birth date stays unset.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self { full_name: full_name.into(), birth_date: None }
    }

    /// Full form with both identity fields.
    pub fn with_birth_date(full_name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self { full_name: full_name.into(), birth_date: Some(birth_date) }
    }

    /// Whole calendar years between the birth date and `on`.
    ///
    /// Month/day aware: when `on` falls earlier in the year than the birth
    /// month/day, one year less has been completed. Born 2000-05-15 the
    /// person is 23 on 2024-05-14 and 24 on 2024-05-15.
    pub fn age_on(&self, on: NaiveDate) -> Result<u32> {
        let birth_date = self
            .birth_date
            .ok_or_else(|| RosterError::MissingBirthDate { name: self.full_name.clone() })?;

        on.years_since(birth_date).ok_or(RosterError::BirthDateInFuture { birth_date, on })
    }

    /// Age in whole years as of today's local date.
    pub fn age(&self) -> Result<u32> {
        self.age_on(Local::now().date_naive())
    }

    /// Rewrites the name in word-capitalized form.
    ///
    /// Splits the current name on single spaces, lower-cases each word and
    /// upper-cases its first character, then rejoins with single spaces:
    /// "juan perez garcia" becomes "Juan Perez Garcia".
    ///
    /// An empty segment (empty name, leading/trailing/consecutive spaces)
    /// aborts with [`RosterError::EmptyNameWord`] and leaves the name
    /// unmodified.
    pub fn capitalize_name(&mut self) -> Result<()> {
        let lowered = self.full_name.to_lowercase();
        let mut words = Vec::new();

        for word in lowered.split(' ') {
            let mut chars = word.chars();
            let first = chars
                .next()
                .ok_or_else(|| RosterError::EmptyNameWord { name: self.full_name.clone() })?;

            let mut capitalized: String = first.to_uppercase().collect();
            capitalized.push_str(chars.as_str());
            words.push(capitalized);
        }

        self.full_name = words.join(" ");
        Ok(())
    }
}
