//! # hoops_core - Basketball Roster and Scoring Statistics Model
//!
//! This library provides the player model for a basketball roster:
//! personal data, court positions, made-basket counters and the
//! cumulative points total credited when players are signed.
//!
//! ## Features
//! - Person and Player records with optional fields for partial data
//! - Points derived on demand from made-basket counters
//! - Shared cumulative tally, explicit instead of process-global
//! - Word-by-word name capitalization and calendar-aware ages

// Full-form constructors take the record's whole field list
#![allow(clippy::too_many_arguments)]

pub mod error;
pub mod models;
pub mod roster;
pub mod scoring;

// Re-export the model types
pub use models::{Person, Player, Position};

// Re-export roster and scoring
pub use roster::Roster;
pub use scoring::PointsTally;

// Re-export error types
pub use error::{Result, RosterError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
