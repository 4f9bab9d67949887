use std::collections::HashMap;

use parking_lot::RwLock;
use seatline_catalog::{Fare, SeatMap, SeatMapError};
use seatline_shared::{Masked, Seat, SeatSelection, Section, Snapshot, Ticket, User};
use tracing::debug;

use crate::app_config::StoreConfig;
use crate::error::{StoreError, StoreResult};

pub const DEFAULT_SEATS_PER_SECTION: u32 = 50;

/// Upper bound accepted from configuration for seats per section
pub const MAX_SEATS_PER_SECTION: u32 = 1_000;

/// In-memory seat allocation store.
///
/// Keeps the email -> ticket map and the section -> seat -> email occupancy
/// behind a single lock, so every operation sees both maps in agreement.
/// Mutations hold the write guard for their whole read-modify-write; reads
/// share the read guard. Share it between callers with an `Arc`.
pub struct AllocationStore {
    fare: Fare,
    inner: RwLock<Allocations>,
}

struct Allocations {
    tickets: HashMap<String, Ticket>,
    seats: SeatMap,
}

impl AllocationStore {
    pub fn new(fare: Fare, seats_per_section: u32) -> Self {
        Self {
            fare,
            inner: RwLock::new(Allocations {
                tickets: HashMap::new(),
                seats: SeatMap::new(seats_per_section),
            }),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(
            Fare::new(&config.origin, &config.destination, config.price),
            config.seats_per_section,
        )
    }

    /// Seats per section
    pub fn capacity(&self) -> u32 {
        self.inner.read().seats.capacity()
    }

    pub fn fare(&self) -> &Fare {
        &self.fare
    }

    /// Number of active tickets
    pub fn len(&self) -> usize {
        self.inner.read().tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Issue a ticket for `user` in the first free seat.
    ///
    /// Seats are handed out first-fit: section A before B, numbers ascending.
    pub fn allocate(&self, user: User) -> StoreResult<Ticket> {
        if user.email.trim().is_empty() {
            return Err(StoreError::InvalidInput("user email is required".to_string()));
        }

        let mut inner = self.inner.write();

        if inner.tickets.contains_key(&user.email) {
            return Err(StoreError::AlreadyExists(user.email));
        }

        let seat = inner.seats.first_free().ok_or(StoreError::Exhausted)?;
        inner
            .seats
            .occupy(&seat, &user.email)
            .map_err(|e| seat_conflict(e, &seat))?;

        let email = user.email.clone();
        let ticket = self.fare.issue(user, seat);
        inner.tickets.insert(email.clone(), ticket.clone());

        debug!(email = %Masked(&email), %seat, "Ticket allocated");
        Ok(ticket)
    }

    pub fn receipt(&self, email: &str) -> StoreResult<Ticket> {
        self.inner
            .read()
            .tickets
            .get(email)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(email.to_string()))
    }

    /// Tickets seated in `section`. Callers must not rely on the order.
    pub fn section_occupants(&self, section: &str) -> StoreResult<Vec<Ticket>> {
        let section = parse_section(section)?;
        let inner = self.inner.read();

        Ok(inner
            .seats
            .occupied_in(section)
            .filter_map(|(_, email)| inner.tickets.get(email).cloned())
            .collect())
    }

    /// Delete the ticket for `email` and free its seat
    pub fn remove(&self, email: &str) -> StoreResult<()> {
        let mut inner = self.inner.write();

        let ticket = inner
            .tickets
            .remove(email)
            .ok_or_else(|| StoreError::NotFound(email.to_string()))?;
        inner.seats.release(&ticket.seat);

        debug!(email = %Masked(email), seat = %ticket.seat, "Ticket removed");
        Ok(())
    }

    /// Move the ticket for `email` to `new_seat`.
    ///
    /// Checks run in a fixed order: section label, seat number range, then
    /// occupancy, then ticket existence. A seat held by someone else reports
    /// `Occupied` even when `email` has no ticket at all. Moving onto one's
    /// own seat succeeds without changes.
    pub fn reassign(&self, email: &str, new_seat: &SeatSelection) -> StoreResult<Ticket> {
        let section = parse_section(&new_seat.section)?;
        let mut inner = self.inner.write();

        let seat = inner
            .seats
            .seat(section, new_seat.number)
            .map_err(|e| StoreError::InvalidInput(e.to_string()))?;

        if let Some(occupant) = inner.seats.occupant(&seat) {
            if occupant != email {
                return Err(StoreError::Occupied {
                    section: seat.section,
                    number: seat.number,
                });
            }
        }

        let Allocations { tickets, seats } = &mut *inner;
        let ticket = tickets
            .get_mut(email)
            .ok_or_else(|| StoreError::NotFound(email.to_string()))?;

        let old_seat = ticket.seat;
        if old_seat == seat {
            return Ok(ticket.clone());
        }

        // Occupy first so a failure leaves the old seat in place
        seats
            .occupy(&seat, email)
            .map_err(|e| seat_conflict(e, &seat))?;
        seats.release(&old_seat);
        ticket.seat = seat;

        debug!(email = %Masked(email), from = %old_seat, to = %seat, "Seat reassigned");
        Ok(ticket.clone())
    }

    /// Consistent view of every active user, occupied seat and ticket.
    ///
    /// Only currently occupied seats are listed; freed seats disappear.
    pub fn snapshot(&self) -> Snapshot {
        let inner = self.inner.read();
        let mut snapshot = Snapshot::default();

        for (seat, email) in inner.seats.occupied() {
            if let Some(ticket) = inner.tickets.get(email) {
                snapshot.users.push(ticket.user.clone());
                snapshot.seats.push(seat);
                snapshot.tickets.push(ticket.clone());
            }
        }

        snapshot
    }
}

impl Default for AllocationStore {
    fn default() -> Self {
        Self::new(Fare::default(), DEFAULT_SEATS_PER_SECTION)
    }
}

fn parse_section(label: &str) -> StoreResult<Section> {
    label
        .parse::<Section>()
        .map_err(|_| StoreError::InvalidSection(label.to_string()))
}

// Callers check occupancy under the same guard first, so `Taken` does not surface here.
fn seat_conflict(err: SeatMapError, seat: &Seat) -> StoreError {
    match err {
        SeatMapError::Taken { .. } => StoreError::Occupied {
            section: seat.section,
            number: seat.number,
        },
        SeatMapError::OutOfRange { .. } => StoreError::InvalidInput(err.to_string()),
    }
}
