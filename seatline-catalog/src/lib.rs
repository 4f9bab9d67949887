pub mod fare;
pub mod inventory;

pub use fare::Fare;
pub use inventory::{SeatMap, SeatMapError};
