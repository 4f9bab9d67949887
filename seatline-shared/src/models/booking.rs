use serde::{Deserialize, Serialize};

use super::seat::Seat;

/// A passenger. Email is the identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct User {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

/// An active allocation of one seat to one user on the fixed route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub from: String,
    pub to: String,
    pub user: User,
    pub price: f64,
    pub seat: Seat,
}

/// A user together with the seat they occupy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSeat {
    pub user: User,
    pub seat: Seat,
}

impl From<&Ticket> for UserSeat {
    fn from(ticket: &Ticket) -> Self {
        Self {
            user: ticket.user.clone(),
            seat: ticket.seat,
        }
    }
}

/// Point-in-time view of the whole allocation store.
///
/// `seats` lists only seats that are occupied at the instant the snapshot
/// was taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub seats: Vec<Seat>,
    pub tickets: Vec<Ticket>,
}
