use seatline_shared::{Seat, Section};

/// Seat occupancy for the fixed sections of one train.
///
/// Each section is a fixed-size array of `capacity` slots; slot `n - 1`
/// holds the email occupying seat `n`. Not synchronized: the allocation
/// store owns the lock around it.
#[derive(Debug, Clone)]
pub struct SeatMap {
    capacity: u32,
    sections: [Vec<Option<String>>; 2],
}

impl SeatMap {
    pub fn new(capacity: u32) -> Self {
        let slots = capacity as usize;
        Self {
            capacity,
            sections: [vec![None; slots], vec![None; slots]],
        }
    }

    /// Seats per section
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Validate a seat number for a section
    pub fn seat(&self, section: Section, number: i64) -> Result<Seat, SeatMapError> {
        match u32::try_from(number) {
            Ok(n) if n >= 1 && n <= self.capacity => Ok(Seat::new(section, n)),
            _ => Err(SeatMapError::OutOfRange {
                section,
                number,
                capacity: self.capacity,
            }),
        }
    }

    /// First unoccupied seat, scanning sections in declared order and
    /// numbers ascending.
    pub fn first_free(&self) -> Option<Seat> {
        Section::ALL.iter().find_map(|&section| {
            self.sections[section.index()]
                .iter()
                .position(Option::is_none)
                .map(|slot| Seat::new(section, slot as u32 + 1))
        })
    }

    /// Email currently holding the seat, if any
    pub fn occupant(&self, seat: &Seat) -> Option<&str> {
        self.slot(seat).and_then(|slot| slot.as_deref())
    }

    /// Mark a seat as held by `email`
    pub fn occupy(&mut self, seat: &Seat, email: &str) -> Result<(), SeatMapError> {
        let capacity = self.capacity;
        let slot = self
            .slot_mut(seat)
            .ok_or(SeatMapError::OutOfRange {
                section: seat.section,
                number: i64::from(seat.number),
                capacity,
            })?;

        if let Some(holder) = slot.as_deref() {
            if holder != email {
                return Err(SeatMapError::Taken {
                    seat: *seat,
                    holder: holder.to_string(),
                });
            }
        }

        *slot = Some(email.to_string());
        Ok(())
    }

    /// Free a seat, returning the email that held it
    pub fn release(&mut self, seat: &Seat) -> Option<String> {
        self.slot_mut(seat).and_then(Option::take)
    }

    /// Occupied seats of one section, ascending by number
    pub fn occupied_in(&self, section: Section) -> impl Iterator<Item = (Seat, &str)> + '_ {
        self.sections[section.index()]
            .iter()
            .enumerate()
            .filter_map(move |(slot, holder)| {
                holder
                    .as_deref()
                    .map(|email| (Seat::new(section, slot as u32 + 1), email))
            })
    }

    /// All occupied seats, in scan order
    pub fn occupied(&self) -> impl Iterator<Item = (Seat, &str)> + '_ {
        Section::ALL
            .iter()
            .flat_map(move |&section| self.occupied_in(section))
    }

    fn slot(&self, seat: &Seat) -> Option<&Option<String>> {
        let index = (seat.number as usize).checked_sub(1)?;
        self.sections[seat.section.index()].get(index)
    }

    fn slot_mut(&mut self, seat: &Seat) -> Option<&mut Option<String>> {
        let index = (seat.number as usize).checked_sub(1)?;
        self.sections[seat.section.index()].get_mut(index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatMapError {
    #[error("Seat {number} is outside section {section} (1..={capacity})")]
    OutOfRange {
        section: Section,
        number: i64,
        capacity: u32,
    },

    #[error("Seat {seat} is already held by another passenger")]
    Taken {
        seat: Seat,
        holder: String,
    },
}
