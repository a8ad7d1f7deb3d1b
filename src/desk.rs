use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{Book, Catalog},
    circulation::{BookStatus, CirculationEvent, Outcome},
    observers::DeskObserver,
    patron::Patron,
    policy,
};

/// One processed request, kept in the desk's history
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoanRecord {
    /// Title of the book the request named
    pub book: String,
    /// Name of the patron who made the request
    pub patron: String,
    /// The request itself
    pub event: CirculationEvent,
    /// Status before the request was processed
    pub from: BookStatus,
    /// Status after the request was processed
    pub to: BookStatus,
    /// Whether the request was honored
    pub outcome: Outcome,
}

impl fmt::Display for LoanRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' for {}: {} [{} -> {}]",
            self.event, self.book, self.patron, self.outcome, self.from, self.to
        )
    }
}

/// The circulation desk: every borrow, hold, and return goes through here.
///
/// The desk owns the catalog, answers each request through the lending policy
/// and the status machine, keeps a bounded history of everything it decided,
/// and tells registered observers about each record.
pub struct CirculationDesk {
    /// The collection the desk lends from
    catalog: Catalog,
    /// Processed requests, oldest first
    history: Vec<LoanRecord>,
    /// Maximum number of history entries to keep
    max_history: usize,
    /// Registered circulation observers
    observers: Vec<Box<dyn DeskObserver>>,
}

// Manual implementation of Debug for CirculationDesk
impl fmt::Debug for CirculationDesk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CirculationDesk")
            .field("catalog", &self.catalog)
            .field("history", &self.history)
            .field("max_history", &self.max_history)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Default for CirculationDesk {
    fn default() -> Self {
        Self::new()
    }
}

impl CirculationDesk {
    /// Open a desk over an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            history: Vec::new(),
            max_history: 100, // Keep the last 100 requests
            observers: Vec::new(),
        }
    }

    /// Register a book and hand back its index for later requests
    pub fn add_book(&mut self, book: Book) -> usize {
        self.catalog.add(book)
    }

    /// The catalog behind the desk
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Register an observer to be told about every processed request
    pub fn register_observer(&mut self, observer: Box<dyn DeskObserver>) {
        self.observers.push(observer);
    }

    /// Ask to borrow the book at `index` for `patron`.
    ///
    /// Returns `None` when no book sits at that index; otherwise the
    /// policy's decision.
    pub fn borrow(&mut self, patron: &Patron, index: usize) -> Option<Outcome> {
        self.process(patron, CirculationEvent::Borrow, index)
    }

    /// Ask to place a hold on the book at `index` for `patron`
    pub fn reserve(&mut self, patron: &Patron, index: usize) -> Option<Outcome> {
        self.process(patron, CirculationEvent::Reserve, index)
    }

    /// Ask to return the book at `index` on behalf of `patron`
    pub fn return_book(&mut self, patron: &Patron, index: usize) -> Option<Outcome> {
        self.process(patron, CirculationEvent::Return, index)
    }

    /// Answer one request: run it through the policy, record the decision,
    /// and notify observers
    fn process(
        &mut self,
        patron: &Patron,
        event: CirculationEvent,
        index: usize,
    ) -> Option<Outcome> {
        let book = self.catalog.get_mut(index)?;
        let from = book.status();

        let outcome = match event {
            CirculationEvent::Borrow => policy::attempt_borrow(patron, book),
            CirculationEvent::Reserve => policy::attempt_reserve(book),
            CirculationEvent::Return => policy::attempt_return(book),
        };

        let record = LoanRecord {
            book: book.title().to_owned(),
            patron: patron.name().to_owned(),
            event,
            from,
            to: book.status(),
            outcome,
        };

        // Record the decision in history
        self.history.push(record.clone());

        // Maintain history size limit
        if self.history.len() > self.max_history {
            self.history.remove(0); // Remove oldest entry
        }

        // Notify observers
        for observer in &self.observers {
            observer.on_record(&record);
        }

        Some(outcome)
    }

    /// Get the recorded request history, oldest first
    #[must_use]
    pub fn history(&self) -> &[LoanRecord] {
        &self.history
    }

    /// Print the request history to stdout
    #[allow(clippy::arithmetic_side_effects)]
    pub fn print_history(&self) {
        println!("Request History:");
        for (i, record) in self.history.iter().enumerate() {
            println!("{}. {record}", i + 1);
        }
    }
}

// Include tests module
#[cfg(test)]
mod tests;
