use clap::Parser;
use colored::Colorize;
use lending_library::{
    Book, CirculationDesk, CirculationEvent, CirculationReport, Entitlement, Outcome, Patron,
    observers::{ActivityLog, PatronNotices},
};

/// Command-line arguments for the lending library walkthrough
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print the status machine and the session history as markdown tables
    #[arg(short, long)]
    table: bool,

    /// Print a DOT graph of the status machine
    #[arg(short, long)]
    dot: bool,

    /// Include refused requests as dashed self-loops in the DOT graph
    #[arg(long)]
    rejections: bool,

    /// Dump the session history as JSON at the end
    #[arg(short, long)]
    json: bool,
}

/// Catalog index of the Dumas novel, general collection
const MONTE_CRISTO: usize = 0;
/// Catalog index of the Knuth volumes, premium collection
const ART_OF_PROGRAMMING: usize = 1;
/// Catalog index of the Austen novel, general collection
const PRIDE_AND_PREJUDICE: usize = 2;
/// Catalog index of the Newton treatise, premium collection
const PRINCIPIA: usize = 3;

/// Register the four demo books; registration order matches the index constants
fn stock_desk(desk: &mut CirculationDesk) {
    desk.add_book(Book::new("The Count of Monte Cristo", "Alexandre Dumas", false));
    desk.add_book(Book::new("The Art of Computer Programming", "Donald E. Knuth", true));
    desk.add_book(Book::new("Pride and Prejudice", "Jane Austen", false));
    desk.add_book(Book::new("Principia Mathematica", "Isaac Newton", true));
}

/// Send one request through the desk and print the decision
fn request(desk: &mut CirculationDesk, patron: &Patron, event: CirculationEvent, index: usize) {
    let title = desk
        .catalog()
        .get(index)
        .map_or_else(|| format!("book #{index}"), |book| book.title().to_string());

    let outcome = match event {
        CirculationEvent::Borrow => desk.borrow(patron, index),
        CirculationEvent::Reserve => desk.reserve(patron, index),
        CirculationEvent::Return => desk.return_book(patron, index),
    };

    match outcome {
        Some(Outcome::Success) => {
            println!("  {} -> {event} '{title}': {}", patron.name(), "success".green());
        }
        Some(Outcome::Rejected(reason)) => {
            println!("  {} -> {event} '{title}': {} ({reason})", patron.name(), "rejected".red());
        }
        None => {
            println!("  {} -> {event} '{title}': {}", patron.name(), "no such book".yellow());
        }
    }
}

/// Walk the catalog through the premium gate, occupied books, and returns
fn scripted_tour(desk: &mut CirculationDesk, alice: &Patron, bob: &Patron) {
    println!("{}", "\nPremium gate".yellow().bold());

    // Bob hits the membership gate; Alice clears it
    request(desk, bob, CirculationEvent::Borrow, ART_OF_PROGRAMMING);
    request(desk, alice, CirculationEvent::Borrow, ART_OF_PROGRAMMING);
    request(desk, bob, CirculationEvent::Borrow, MONTE_CRISTO);

    println!("{}", "\nOccupied books".yellow().bold());

    // A borrowed book turns everyone else away
    request(desk, alice, CirculationEvent::Borrow, MONTE_CRISTO);
    request(desk, bob, CirculationEvent::Reserve, ART_OF_PROGRAMMING);

    // A hold keeps the book off the open shelf
    request(desk, alice, CirculationEvent::Reserve, PRIDE_AND_PREJUDICE);
    request(desk, bob, CirculationEvent::Borrow, PRIDE_AND_PREJUDICE);
    request(desk, bob, CirculationEvent::Reserve, PRIDE_AND_PREJUDICE);

    println!("{}", "\nReturns".yellow().bold());

    // Returns free the books, and a second return is refused
    request(desk, alice, CirculationEvent::Return, ART_OF_PROGRAMMING);
    request(desk, alice, CirculationEvent::Return, ART_OF_PROGRAMMING);
    request(desk, bob, CirculationEvent::Return, MONTE_CRISTO);
    request(desk, alice, CirculationEvent::Borrow, PRINCIPIA);
    request(desk, bob, CirculationEvent::Return, PRIDE_AND_PREJUDICE);
}

fn main() {
    let args = Args::parse();

    println!("{}", "Lending Library Walkthrough".green().bold());
    println!("=====================================\n");

    if args.table {
        println!("{}", "Status machine".yellow().bold());
        println!("{}", CirculationReport::transition_table());
    }

    // Open the desk and attach the console observers
    let mut desk = CirculationDesk::new();
    desk.register_observer(Box::new(ActivityLog));
    desk.register_observer(Box::new(PatronNotices));
    stock_desk(&mut desk);

    let alice = Patron::new("Alice", Entitlement::Premium);
    let bob = Patron::new("Bob", Entitlement::Standard);
    println!(
        "Patrons: {} ({}), {} ({})\n",
        alice.name(),
        alice.entitlement(),
        bob.name(),
        bob.entitlement()
    );

    CirculationReport::print_catalog(desk.catalog());

    scripted_tour(&mut desk, &alice, &bob);

    println!("{}", "\nClosing shelves".yellow().bold());
    CirculationReport::print_catalog(desk.catalog());

    println!();
    desk.print_history();

    if args.table {
        println!("{}", "\nSession history".yellow().bold());
        println!("{}", CirculationReport::history_table(desk.history()));
    }

    println!();
    CirculationReport::print_summary(&desk);

    if args.dot {
        println!("{}", "\nStatus graph (DOT)".yellow().bold());
        println!("{}", CirculationReport::status_graph(None, args.rejections));
    }

    if args.json {
        println!("{}", "\nSession JSON".yellow().bold());
        match CirculationReport::session_json(desk.history()) {
            Ok(json) => println!("{json}"),
            Err(e) => println!("Failed to serialize the session: {e}"),
        }
    }

    println!("\n{}", "Walkthrough complete!".green().bold());
}
