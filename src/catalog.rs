use serde::{Deserialize, Serialize};

use crate::circulation::{BookStatus, CirculationEvent, Outcome};

/// One title in the collection, together with its live circulation status
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Book {
    /// Title of the book
    title: String,
    /// Author of the book
    author: String,
    /// Whether the book sits in the premium collection
    premium: bool,
    /// Live circulation status
    status: BookStatus,
}

impl Book {
    /// Register a book; every book starts on the shelf
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>, premium: bool) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            premium,
            status: BookStatus::Available,
        }
    }

    /// The book's title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The book's author
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Whether the book sits in the premium collection
    #[must_use]
    pub const fn is_premium(&self) -> bool {
        self.premium
    }

    /// Current circulation status
    #[must_use]
    pub const fn status(&self) -> BookStatus {
        self.status
    }

    /// Run one event through the status machine and keep the result
    pub fn apply(&mut self, event: CirculationEvent) -> Outcome {
        let transition = self.status.transition(event);
        self.status = transition.next;
        transition.outcome
    }
}

/// The collection, in the order the books were registered
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Catalog {
    /// Registered books, oldest first
    books: Vec<Book>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub const fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Register a book and hand back its index for later requests
    pub fn add(&mut self, book: Book) -> usize {
        let index = self.books.len();
        self.books.push(book);
        index
    }

    /// Look a book up by index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    /// Look a book up by index, for updating
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Book> {
        self.books.get_mut(index)
    }

    /// Walk the collection in registration order.
    ///
    /// The walk reads live status: a book borrowed after the catalog was
    /// built shows up as borrowed here.
    #[must_use]
    pub fn list(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// Number of registered books
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether no books are registered yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
