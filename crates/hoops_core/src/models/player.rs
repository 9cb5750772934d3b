use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};
use crate::models::person::Person;
use crate::scoring::PointsTally;

/// Court position in the five-slot basketball lineup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    PointGuard,
    ShootingGuard,
    Forward,
    PowerForward,
    Center,
}

impl Position {
    /// All five positions in lineup order.
    pub fn all() -> &'static [Position] {
        &[
            Position::PointGuard,
            Position::ShootingGuard,
            Position::Forward,
            Position::PowerForward,
            Position::Center,
        ]
    }

    /// Position display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Position::PointGuard => "Point Guard",
            Position::ShootingGuard => "Shooting Guard",
            Position::Forward => "Forward",
            Position::PowerForward => "Power Forward",
            Position::Center => "Center",
        }
    }

    /// Position abbreviation for compact display.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::Forward => "F",
            Position::PowerForward => "PF",
            Position::Center => "C",
        }
    }

    /// Guards handle the ball in the backcourt.
    pub fn is_backcourt(&self) -> bool {
        matches!(self, Position::PointGuard | Position::ShootingGuard)
    }

    /// Forwards and the center fill the frontcourt.
    pub fn is_frontcourt(&self) -> bool {
        !self.is_backcourt()
    }
}

impl FromStr for Position {
    type Err = RosterError;

    /// Parses an abbreviation or an underscored full name, case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "PG" | "POINT_GUARD" => Ok(Position::PointGuard),
            "SG" | "SHOOTING_GUARD" => Ok(Position::ShootingGuard),
            "F" | "FORWARD" => Ok(Position::Forward),
            "PF" | "POWER_FORWARD" => Ok(Position::PowerForward),
            "C" | "CENTER" => Ok(Position::Center),
            _ => Err(RosterError::InvalidPosition(s.to_string())),
        }
    }
}

/// A roster player: identity plus position, code and made-basket counters.
///
/// Composes a [`Person`] instead of extending one; the delegating accessors
/// below cover the identity operations a caller needs. `code` and `position`
/// are absent for name-only prospects.
///
/// Every stored field is public and freely mutable. The derived values
/// ([`points`](Player::points), [`age`](Player::age)) are computed from the
/// fields on demand and never cached, so they always reflect the current
/// state. The cumulative tally is the one exception: it is credited once at
/// signing time and later counter mutations are never re-applied to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub person: Person,

    /// Identifying text such as "J001"; stored exactly as given.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub position: Option<Position>,

    /// Free throws made (one point each).
    #[serde(default)]
    pub one_point_made: u32,

    /// Two-point field goals made.
    #[serde(default)]
    pub two_point_made: u32,

    /// Three-pointers made.
    #[serde(default)]
    pub three_point_made: u32,
}

impl Player {
    /// Name-only form: a prospect with zeroed counters and no code or
    /// position. Does not touch any points tally.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            person: Person::new(full_name),
            code: None,
            position: None,
            one_point_made: 0,
            two_point_made: 0,
            three_point_made: 0,
        }
    }

    /// Full form: every field populated.
    ///
    /// Credits `tally` with the player's computed points exactly once, here
    /// at construction time. The tally is an explicit parameter so the
    /// shared state is visible at every call site.
    pub fn signed(
        full_name: impl Into<String>,
        code: impl Into<String>,
        birth_date: NaiveDate,
        position: Position,
        one_point_made: u32,
        two_point_made: u32,
        three_point_made: u32,
        tally: &PointsTally,
    ) -> Self {
        let player = Self {
            person: Person::with_birth_date(full_name, birth_date),
            code: Some(code.into()),
            position: Some(position),
            one_point_made,
            two_point_made,
            three_point_made,
        };

        tally.credit(player.points());
        player
    }

    /// Total points from the current counters: free throws count one,
    /// field goals two, three-pointers three.
    pub fn points(&self) -> u32 {
        self.one_point_made + 2 * self.two_point_made + 3 * self.three_point_made
    }

    /// Full name of the embedded person.
    pub fn full_name(&self) -> &str {
        &self.person.full_name
    }

    /// Rewrites the name in word-capitalized form
    /// (see [`Person::capitalize_name`]).
    pub fn capitalize_name(&mut self) -> Result<()> {
        self.person.capitalize_name()
    }

    /// Age in whole years as of today's local date.
    pub fn age(&self) -> Result<u32> {
        self.person.age()
    }

    /// Age in whole years as of `on`.
    pub fn age_on(&self, on: NaiveDate) -> Result<u32> {
        self.person.age_on(on)
    }
}
