//! Roster demo CLI
//!
//! Signs a handful of sample players and prints their computed
//! statistics section by section: individual points, the cumulative
//! total, name capitalization and current ages.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use hoops_core::{Position, Roster};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    tracing::debug!(version = hoops_core::VERSION, "starting roster demo");

    let mut roster = Roster::new();

    roster.sign(
        "juan perez garcia",
        "J001",
        date(2000, 5, 15)?,
        Position::PointGuard,
        5,
        10,
        3,
    );
    roster.sign(
        "maria lopez sanchez",
        "J002",
        date(1998, 8, 22)?,
        Position::ShootingGuard,
        3,
        8,
        2,
    );
    roster.sign_prospect("carlos ruiz");

    println!("PUNTOS INDIVIDUALES");
    for player in roster.players() {
        println!("{}: {} puntos", player.full_name(), player.points());
    }

    println!("PUNTOS GLOBALES");
    println!("Total de todos los jugadores: {}", roster.total_points());

    println!("CAPITALIZAR NOMBRES");
    let juan = roster
        .player_mut(0)
        .context("roster lost its first player")?;
    println!("Antes: {}", juan.full_name());
    juan.capitalize_name()?;
    println!("Después: {}", juan.full_name());

    println!("EDADES");
    for player in roster.players().iter().take(2) {
        println!("{} tiene {} años", player.full_name(), player.age()?);
    }

    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("invalid calendar date {year}-{month:02}-{day:02}"))
}
