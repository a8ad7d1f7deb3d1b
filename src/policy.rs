use crate::catalog::Book;
use crate::circulation::{CirculationEvent, Outcome, RejectReason};
use crate::patron::Patron;

/// Whether a patron at the given tier may borrow a book of the given kind.
///
/// General books are open to everyone; premium books need a premium patron.
#[must_use]
pub const fn can_borrow(patron_is_premium: bool, book_is_premium: bool) -> bool {
    !book_is_premium || patron_is_premium
}

/// Try to check a book out for a patron.
///
/// The membership gate runs before the status machine is consulted, so a
/// standard patron asking for a premium book always hears `PremiumRequired`,
/// no matter where the book currently sits.
pub fn attempt_borrow(patron: &Patron, book: &mut Book) -> Outcome {
    if !can_borrow(patron.is_premium(), book.is_premium()) {
        return Outcome::Rejected(RejectReason::PremiumRequired);
    }
    book.apply(CirculationEvent::Borrow)
}

/// Try to place a hold on a book.
///
/// Holds are open to every tier, premium books included, so there is no gate
/// here; the status machine alone decides.
pub fn attempt_reserve(book: &mut Book) -> Outcome {
    book.apply(CirculationEvent::Reserve)
}

/// Try to bring a book back to the shelf
pub fn attempt_return(book: &mut Book) -> Outcome {
    book.apply(CirculationEvent::Return)
}

#[cfg(test)]
mod tests {
    use super::{attempt_borrow, attempt_reserve, attempt_return, can_borrow};
    use crate::catalog::Book;
    use crate::circulation::{BookStatus, CirculationEvent, Outcome, RejectReason};
    use crate::patron::{Entitlement, Patron};

    fn premium_book() -> Book {
        Book::new("Principia Mathematica", "Isaac Newton", true)
    }

    fn general_book() -> Book {
        Book::new("Pride and Prejudice", "Jane Austen", false)
    }

    #[test]
    fn borrow_gate_covers_every_tier_pairing() {
        // (patron premium, book premium) -> allowed
        let grid = [
            (false, false, true),
            (false, true, false),
            (true, false, true),
            (true, true, true),
        ];
        for (patron, book, allowed) in grid {
            assert_eq!(can_borrow(patron, book), allowed, "patron={patron} book={book}");
        }
    }

    #[test]
    fn standard_patron_is_refused_a_premium_book() {
        let bob = Patron::new("Bob", Entitlement::Standard);
        let mut book = premium_book();

        let outcome = attempt_borrow(&bob, &mut book);

        assert_eq!(outcome, Outcome::Rejected(RejectReason::PremiumRequired));
        assert_eq!(book.status(), BookStatus::Available);
    }

    #[test]
    fn premium_patron_borrows_a_premium_book() {
        let alice = Patron::new("Alice", Entitlement::Premium);
        let mut book = premium_book();

        let outcome = attempt_borrow(&alice, &mut book);

        assert_eq!(outcome, Outcome::Success);
        assert_eq!(book.status(), BookStatus::Borrowed);
    }

    #[test]
    fn membership_gate_runs_before_the_status_machine() {
        // The book is on hold, but the standard patron still hears about the
        // membership first.
        let bob = Patron::new("Bob", Entitlement::Standard);
        let mut book = premium_book();
        book.apply(CirculationEvent::Reserve);

        let outcome = attempt_borrow(&bob, &mut book);

        assert_eq!(outcome, Outcome::Rejected(RejectReason::PremiumRequired));
        assert_eq!(book.status(), BookStatus::Reserved);
    }

    #[test]
    fn holds_are_open_to_every_tier() {
        let mut book = premium_book();
        assert_eq!(attempt_reserve(&mut book), Outcome::Success);
        assert_eq!(book.status(), BookStatus::Reserved);
    }

    #[test]
    fn anyone_can_borrow_a_general_book() {
        let bob = Patron::new("Bob", Entitlement::Standard);
        let mut book = general_book();

        assert_eq!(attempt_borrow(&bob, &mut book), Outcome::Success);
        assert_eq!(book.status(), BookStatus::Borrowed);
    }

    #[test]
    fn borrowed_book_comes_back_through_a_return() {
        let bob = Patron::new("Bob", Entitlement::Standard);
        let mut book = general_book();

        attempt_borrow(&bob, &mut book);
        assert_eq!(attempt_return(&mut book), Outcome::Success);
        assert_eq!(book.status(), BookStatus::Available);
    }
}
