use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("no birth date recorded for {name}")]
    MissingBirthDate { name: String },

    #[error("birth date {birth_date} is later than {on}")]
    BirthDateInFuture { birth_date: NaiveDate, on: NaiveDate },

    #[error("name {name:?} contains an empty word")]
    EmptyNameWord { name: String },

    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
