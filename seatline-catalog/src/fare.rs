use serde::{Deserialize, Serialize};
use seatline_shared::{Seat, Ticket, User};

pub const DEFAULT_ORIGIN: &str = "London";
pub const DEFAULT_DESTINATION: &str = "France";
pub const DEFAULT_PRICE: f64 = 20.0;

/// The single route sold by the system and its flat price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fare {
    /// Departure station
    pub origin: String,

    /// Arrival station
    pub destination: String,

    /// Price of every ticket on the route
    pub price: f64,
}

impl Fare {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, price: f64) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            price,
        }
    }

    /// Stamp a ticket for `user` in `seat`
    pub fn issue(&self, user: User, seat: Seat) -> Ticket {
        Ticket {
            from: self.origin.clone(),
            to: self.destination.clone(),
            user,
            price: self.price,
            seat,
        }
    }
}

impl Default for Fare {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN, DEFAULT_DESTINATION, DEFAULT_PRICE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatline_shared::Section;

    #[test]
    fn test_default_route() {
        let fare = Fare::default();
        assert_eq!(fare.origin, "London");
        assert_eq!(fare.destination, "France");
        assert_eq!(fare.price, 20.0);
    }

    #[test]
    fn test_issue_stamps_route_and_price() {
        let fare = Fare::new("Paris", "Lyon", 35.5);
        let user = User::new("Jane", "Doe", "jane@example.com");
        let ticket = fare.issue(user.clone(), Seat::new(Section::B, 3));

        assert_eq!(ticket.from, "Paris");
        assert_eq!(ticket.to, "Lyon");
        assert_eq!(ticket.price, 35.5);
        assert_eq!(ticket.user, user);
        assert_eq!(ticket.seat, Seat::new(Section::B, 3));
    }
}
