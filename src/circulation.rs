use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents the possible circulation statuses of a library book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum BookStatus {
    /// Book is on the shelf, free to borrow or reserve
    #[default]
    Available,
    /// Book is checked out; only a return moves it back to the shelf
    Borrowed,
    /// Book is held for a patron; only a return releases the hold
    Reserved,
}

/// Requests a patron can make against a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum CirculationEvent {
    /// Check the book out
    Borrow,
    /// Place a hold on the book
    Reserve,
    /// Bring the book back
    Return,
}

/// Why a request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum RejectReason {
    /// A return was requested but the book is already on the shelf
    AlreadyAvailable,
    /// A borrow was requested but the book is already checked out
    AlreadyBorrowed,
    /// A hold was requested but the book is already on hold
    AlreadyReserved,
    /// A hold was requested while the book is checked out
    ReserveWhileBorrowed,
    /// A borrow was requested while the book is on hold
    BorrowWhileReserved,
    /// The book belongs to the premium collection and the patron does not
    PremiumRequired,
}

/// Whether a request was honored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Outcome {
    /// The request moved the book to its next status
    Success,
    /// The request was refused; the book did not move
    Rejected(RejectReason),
}

/// The result of asking the machine to process one event: the status the book
/// ends up in, and whether the request was honored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Transition {
    /// Status the book holds after the event
    pub next: BookStatus,
    /// Decision for the request
    pub outcome: Outcome,
}

impl Transition {
    /// A granted request that moves the book to `next`
    const fn to(next: BookStatus) -> Self {
        Self { next, outcome: Outcome::Success }
    }

    /// A refused request; the book stays in `current`
    const fn refused(current: BookStatus, reason: RejectReason) -> Self {
        Self { next: current, outcome: Outcome::Rejected(reason) }
    }
}

impl BookStatus {
    /// All statuses, in table order
    pub const ALL: [Self; 3] = [Self::Available, Self::Borrowed, Self::Reserved];

    /// Lowercase status name for listings
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Borrowed => "borrowed",
            Self::Reserved => "reserved",
        }
    }

    /// Process one event against the current status.
    ///
    /// This is the whole transition table; it is total, so every
    /// (status, event) pairing has a defined result and nothing can fail:
    ///
    /// | Current   | Borrow   | Reserve  | Return    |
    /// |-----------|----------|----------|-----------|
    /// | Available | Borrowed | Reserved | rejected  |
    /// | Borrowed  | rejected | rejected | Available |
    /// | Reserved  | rejected | rejected | Available |
    ///
    /// A refused request keeps the book exactly where it was.
    #[must_use]
    pub const fn transition(self, event: CirculationEvent) -> Transition {
        match (self, event) {
            (Self::Available, CirculationEvent::Borrow) => Transition::to(Self::Borrowed),
            (Self::Available, CirculationEvent::Reserve) => Transition::to(Self::Reserved),
            (Self::Available, CirculationEvent::Return) => {
                Transition::refused(self, RejectReason::AlreadyAvailable)
            }
            (Self::Borrowed, CirculationEvent::Borrow) => {
                Transition::refused(self, RejectReason::AlreadyBorrowed)
            }
            (Self::Borrowed, CirculationEvent::Reserve) => {
                Transition::refused(self, RejectReason::ReserveWhileBorrowed)
            }
            (Self::Reserved, CirculationEvent::Borrow) => {
                Transition::refused(self, RejectReason::BorrowWhileReserved)
            }
            (Self::Reserved, CirculationEvent::Reserve) => {
                Transition::refused(self, RejectReason::AlreadyReserved)
            }
            (Self::Borrowed | Self::Reserved, CirculationEvent::Return) => {
                Transition::to(Self::Available)
            }
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl CirculationEvent {
    /// All events, in table order
    pub const ALL: [Self; 3] = [Self::Borrow, Self::Reserve, Self::Return];

    /// Lowercase verb for log lines
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Borrow => "borrow",
            Self::Reserve => "reserve",
            Self::Return => "return",
        }
    }
}

impl fmt::Display for CirculationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl RejectReason {
    /// Get a human-readable description of the refusal
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AlreadyAvailable => "the book is already available",
            Self::AlreadyBorrowed => "the book is already borrowed",
            Self::AlreadyReserved => "the book is already reserved",
            Self::ReserveWhileBorrowed => "a borrowed book cannot be reserved",
            Self::BorrowWhileReserved => "a reserved book cannot be borrowed",
            Self::PremiumRequired => "premium membership required",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl Outcome {
    /// Whether the request was granted
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Rejected(reason) => write!(f, "rejected ({reason})"),
        }
    }
}
