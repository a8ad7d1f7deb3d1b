use std::{cell::RefCell, rc::Rc};

use crate::{
    catalog::Book,
    circulation::{BookStatus, CirculationEvent, Outcome, RejectReason},
    desk::{CirculationDesk, LoanRecord},
    observers::DeskObserver,
    patron::{Entitlement, Patron},
};

/// Helper function to set up a desk with one general and one premium book
fn setup_desk() -> CirculationDesk {
    let mut desk = CirculationDesk::new();
    desk.add_book(Book::new("The Count of Monte Cristo", "Alexandre Dumas", false));
    desk.add_book(Book::new("Principia Mathematica", "Isaac Newton", true));
    desk
}

fn alice() -> Patron {
    Patron::new("Alice", Entitlement::Premium)
}

fn bob() -> Patron {
    Patron::new("Bob", Entitlement::Standard)
}

fn status_of(desk: &CirculationDesk, index: usize) -> Option<BookStatus> {
    desk.catalog().get(index).map(Book::status)
}

#[test]
fn test_borrow_then_return_cycle() {
    let mut desk = setup_desk();
    let bob = bob();

    // Borrow the general book
    assert_eq!(desk.borrow(&bob, 0), Some(Outcome::Success));
    assert_eq!(status_of(&desk, 0), Some(BookStatus::Borrowed));

    // Return it
    assert_eq!(desk.return_book(&bob, 0), Some(Outcome::Success));
    assert_eq!(status_of(&desk, 0), Some(BookStatus::Available));

    // A second return finds it already on the shelf
    assert_eq!(
        desk.return_book(&bob, 0),
        Some(Outcome::Rejected(RejectReason::AlreadyAvailable))
    );
    assert_eq!(status_of(&desk, 0), Some(BookStatus::Available));
}

#[test]
fn test_reserved_book_refuses_borrowers() {
    let mut desk = setup_desk();
    let alice = alice();
    let bob = bob();

    // Alice puts the general book on hold
    assert_eq!(desk.reserve(&alice, 0), Some(Outcome::Success));

    // Bob cannot take it while the hold stands
    assert_eq!(
        desk.borrow(&bob, 0),
        Some(Outcome::Rejected(RejectReason::BorrowWhileReserved))
    );
    assert_eq!(status_of(&desk, 0), Some(BookStatus::Reserved));
}

#[test]
fn test_return_releases_a_hold() {
    let mut desk = setup_desk();
    let alice = alice();
    let bob = bob();

    desk.reserve(&alice, 0);
    assert_eq!(desk.return_book(&alice, 0), Some(Outcome::Success));

    // The shelf is open again, so Bob's borrow goes through
    assert_eq!(desk.borrow(&bob, 0), Some(Outcome::Success));
    assert_eq!(status_of(&desk, 0), Some(BookStatus::Borrowed));
}

#[test]
fn test_premium_gate_at_the_desk() {
    let mut desk = setup_desk();
    let alice = alice();
    let bob = bob();

    // Bob is refused the premium book, and it stays on the shelf
    assert_eq!(
        desk.borrow(&bob, 1),
        Some(Outcome::Rejected(RejectReason::PremiumRequired))
    );
    assert_eq!(status_of(&desk, 1), Some(BookStatus::Available));

    // Alice clears the gate
    assert_eq!(desk.borrow(&alice, 1), Some(Outcome::Success));
    assert_eq!(status_of(&desk, 1), Some(BookStatus::Borrowed));
}

#[test]
fn test_unknown_book_index() {
    let mut desk = setup_desk();
    let bob = bob();

    // No book sits at index 2, so nothing is decided or recorded
    assert_eq!(desk.borrow(&bob, 2), None);
    assert!(desk.history().is_empty());
}

#[test]
#[allow(clippy::expect_used)]
fn test_every_request_lands_in_history() {
    let mut desk = setup_desk();
    let alice = alice();
    let bob = bob();

    // Initially empty history
    assert!(desk.history().is_empty());

    // One granted, one refused
    desk.borrow(&bob, 0);
    desk.borrow(&bob, 1);

    assert_eq!(desk.history().len(), 2);

    // Check the refused record's details
    let refused = desk.history().last().expect("history should have an entry");
    assert_eq!(refused.book, "Principia Mathematica");
    assert_eq!(refused.patron, "Bob");
    assert_eq!(refused.event, CirculationEvent::Borrow);
    assert_eq!(refused.from, BookStatus::Available);
    assert_eq!(refused.to, BookStatus::Available);
    assert_eq!(refused.outcome, Outcome::Rejected(RejectReason::PremiumRequired));

    // A third request keeps appending in order
    desk.borrow(&alice, 1);
    assert_eq!(desk.history().len(), 3);
}

#[test]
fn test_history_keeps_only_the_latest_entries() {
    let mut desk = setup_desk();
    let bob = bob();

    // 105 refused returns, each one recorded
    for _ in 0..105 {
        desk.return_book(&bob, 0);
    }

    // Only the most recent 100 survive
    assert_eq!(desk.history().len(), 100);
}

/// Observer that counts how many records it hears about
struct RecordCounter {
    heard: Rc<RefCell<usize>>,
}

impl DeskObserver for RecordCounter {
    #[allow(clippy::arithmetic_side_effects)]
    fn on_record(&self, _record: &LoanRecord) {
        *self.heard.borrow_mut() += 1;
    }
}

#[test]
fn test_observers_hear_every_record() {
    // Use a shared counter to check the observer was called
    let heard = Rc::new(RefCell::new(0));
    let mut desk = setup_desk();
    desk.register_observer(Box::new(RecordCounter { heard: Rc::clone(&heard) }));

    let bob = bob();

    // Granted and refused requests both reach the observer
    desk.borrow(&bob, 0);
    desk.borrow(&bob, 1);
    assert_eq!(*heard.borrow(), 2);

    // A miss on the catalog reaches nobody
    desk.borrow(&bob, 9);
    assert_eq!(*heard.borrow(), 2);
}
