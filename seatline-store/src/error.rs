use seatline_shared::Section;

/// Failures returned by the allocation store. None of them are fatal and
/// the store never retries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("User already has a ticket: {0}")]
    AlreadyExists(String),

    #[error("No available seats")]
    Exhausted,

    #[error("No ticket found for email: {0}")]
    NotFound(String),

    #[error("Invalid section: {0}")]
    InvalidSection(String),

    #[error("Seat {number} in section {section} is already occupied")]
    Occupied {
        section: Section,
        number: u32,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;
