pub mod models;
pub mod pii;

pub use models::booking::{Snapshot, Ticket, User, UserSeat};
pub use models::seat::{Seat, SeatSelection, Section, UnknownSection};
pub use pii::Masked;
