//! Roster: the players under contract and the tally they report into.
//!
//! The roster owns a [`PointsTally`] and passes it to every full-form
//! signing, so the cumulative total stays an explicit dependency instead
//! of process-wide hidden state. Two rosters share one total only when
//! built over the same tally via [`Roster::with_tally`].

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{Player, Position};
use crate::scoring::PointsTally;

#[derive(Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
    tally: PointsTally,
}

impl Roster {
    /// Empty roster over a fresh tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty roster over an existing tally, for sharing one cumulative
    /// total across rosters.
    pub fn with_tally(tally: PointsTally) -> Self {
        Self {
            players: Vec::new(),
            tally,
        }
    }

    /// Signs a player with the full field set and credits the roster tally
    /// with their points. Returns the stored player.
    pub fn sign(
        &mut self,
        full_name: impl Into<String>,
        code: impl Into<String>,
        birth_date: NaiveDate,
        position: Position,
        one_point_made: u32,
        two_point_made: u32,
        three_point_made: u32,
    ) -> &Player {
        let player = Player::signed(
            full_name,
            code,
            birth_date,
            position,
            one_point_made,
            two_point_made,
            three_point_made,
            &self.tally,
        );
        debug!(
            name = %player.full_name(),
            points = player.points(),
            "signed player"
        );

        let idx = self.players.len();
        self.players.push(player);
        &self.players[idx]
    }

    /// Signs a name-only prospect. The tally is untouched.
    pub fn sign_prospect(&mut self, full_name: impl Into<String>) -> &Player {
        let player = Player::new(full_name);
        debug!(name = %player.full_name(), "signed prospect");

        let idx = self.players.len();
        self.players.push(player);
        &self.players[idx]
    }

    /// All players in signing order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Mutable access to a player by roster index.
    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// Looks up a player by exact code. Prospects have no code and never
    /// match.
    pub fn player_by_code(&self, code: &str) -> Option<&Player> {
        self.players
            .iter()
            .find(|player| player.code.as_deref() == Some(code))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Cumulative points credited at signing time across the tally. Not
    /// recomputed from current counters; see [`PointsTally`].
    pub fn total_points(&self) -> u64 {
        self.tally.total()
    }

    /// The tally this roster credits.
    pub fn tally(&self) -> &PointsTally {
        &self.tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn sign_juan(roster: &mut Roster) {
        roster.sign(
            "juan perez garcia",
            "J001",
            birth_date(2000, 5, 15),
            Position::PointGuard,
            5,
            10,
            3,
        );
    }

    fn sign_maria(roster: &mut Roster) {
        roster.sign(
            "maria lopez sanchez",
            "J002",
            birth_date(1998, 8, 22),
            Position::ShootingGuard,
            3,
            8,
            2,
        );
    }

    #[test]
    fn test_sign_credits_the_tally() {
        let mut roster = Roster::new();

        sign_juan(&mut roster);

        assert_eq!(roster.total_points(), 34);
    }

    #[test]
    fn test_prospect_does_not_credit_the_tally() {
        let mut roster = Roster::new();
        sign_juan(&mut roster);

        roster.sign_prospect("carlos ruiz");

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.total_points(), 34);
    }

    #[test]
    fn test_total_accumulates_across_signings() {
        let mut roster = Roster::new();

        sign_juan(&mut roster);
        sign_maria(&mut roster);
        roster.sign_prospect("carlos ruiz");

        let individual: Vec<u32> = roster.players().iter().map(Player::points).collect();
        assert_eq!(individual, vec![34, 25, 0]);
        assert_eq!(roster.total_points(), 59);
    }

    #[test]
    fn test_counter_mutation_leaves_total_at_signing_value() {
        let mut roster = Roster::new();
        sign_juan(&mut roster);

        let juan = roster.player_mut(0).unwrap();
        juan.three_point_made = 10;

        assert_eq!(roster.players()[0].points(), 55);
        assert_eq!(roster.total_points(), 34);
    }

    #[test]
    fn test_player_by_code() {
        let mut roster = Roster::new();
        sign_juan(&mut roster);
        sign_maria(&mut roster);
        roster.sign_prospect("carlos ruiz");

        assert_eq!(
            roster.player_by_code("J002").map(Player::full_name),
            Some("maria lopez sanchez")
        );
        assert!(roster.player_by_code("J999").is_none());
    }

    #[test]
    fn test_rosters_share_a_tally() {
        let tally = PointsTally::new();
        let mut first = Roster::with_tally(tally.clone());
        let mut second = Roster::with_tally(tally.clone());

        sign_juan(&mut first);
        sign_maria(&mut second);

        assert_eq!(tally.total(), 59);
        assert_eq!(first.total_points(), 59);
        assert_eq!(second.total_points(), 59);
    }

    #[test]
    fn test_empty_roster() {
        let roster = Roster::new();

        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
        assert_eq!(roster.total_points(), 0);
        assert!(roster.players().is_empty());
    }
}
