use crate::{
    catalog::Catalog,
    circulation::{BookStatus, CirculationEvent, Outcome},
    desk::{CirculationDesk, LoanRecord},
};

/// Reporting tools for the circulation desk
#[derive(Debug)]
pub struct CirculationReport;

impl CirculationReport {
    /// Print the catalog with each book's live status
    pub fn print_catalog(catalog: &Catalog) {
        println!("Catalog ({} books):", catalog.len());
        for book in catalog.list() {
            let collection = if book.is_premium() { "premium" } else { "general" };
            println!("  '{}' by {}: {} [{collection}]", book.title(), book.author(), book.status());
        }
    }

    /// Generate a markdown table of the whole status machine
    #[must_use]
    pub fn transition_table() -> String {
        let mut table = String::from("| Current | borrow | reserve | return |\n");
        table.push_str("|---------|--------|---------|--------|\n");

        for status in BookStatus::ALL {
            table.push_str(&format!("| {status} |"));
            for event in CirculationEvent::ALL {
                let transition = status.transition(event);
                let cell = match transition.outcome {
                    Outcome::Success => format!("success -> {}", transition.next),
                    Outcome::Rejected(reason) => format!("rejected ({reason})"),
                };
                table.push_str(&format!(" {cell} |"));
            }
            table.push('\n');
        }

        table
    }

    /// Generate a DOT graph of the status machine.
    ///
    /// `highlight` marks one status the way a map marks "you are here";
    /// `include_rejections` adds a dashed self-loop for every refused
    /// request, which makes the totality of the table visible.
    #[must_use]
    pub fn status_graph(highlight: Option<BookStatus>, include_rejections: bool) -> String {
        let mut dot = String::from("digraph circulation {\n");
        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  node [shape=circle, style=filled, fillcolor=lightblue];\n");

        // Add statuses
        for status in BookStatus::ALL {
            if highlight == Some(status) {
                dot.push_str(&format!(
                    "  {status} [label=\"{status:?}\", fillcolor=palegreen, peripheries=2];\n"
                ));
            } else {
                dot.push_str(&format!("  {status} [label=\"{status:?}\"];\n"));
            }
        }

        // Add every cell of the table as an edge
        for status in BookStatus::ALL {
            for event in CirculationEvent::ALL {
                let transition = status.transition(event);
                match transition.outcome {
                    Outcome::Success => {
                        dot.push_str(&format!(
                            "  {status} -> {} [label=\"{event}\"];\n",
                            transition.next
                        ));
                    }
                    Outcome::Rejected(reason) if include_rejections => {
                        let label = format!("{event}: {reason}");
                        let edge =
                            format!("  {status} -> {status} [label=\"{label}\", style=dashed];\n");
                        dot.push_str(&edge);
                    }
                    Outcome::Rejected(_) => {}
                }
            }
        }

        dot.push_str("}\n");
        dot
    }

    /// Generate a markdown table of the request history
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)]
    pub fn history_table(records: &[LoanRecord]) -> String {
        if records.is_empty() {
            return "No requests recorded yet.".to_string();
        }

        let mut table = String::from("| # | Patron | Request | Book | From | To | Outcome |\n");
        table.push_str("|---|--------|---------|------|------|----|---------|\n");

        for (i, record) in records.iter().enumerate() {
            table.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                i + 1,
                record.patron,
                record.event,
                record.book,
                record.from,
                record.to,
                record.outcome
            ));
        }

        table
    }

    /// Serialize the request history as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the records cannot be serialized
    pub fn session_json(records: &[LoanRecord]) -> serde_json::Result<String> {
        serde_json::to_string_pretty(records)
    }

    /// Print a summary of the session to stdout
    pub fn print_summary(desk: &CirculationDesk) {
        println!("=== Circulation Summary ===");
        println!("Books in catalog: {}", desk.catalog().len());

        for status in BookStatus::ALL {
            let count = desk.catalog().list().filter(|book| book.status() == status).count();
            println!("  {status}: {count}");
        }

        let processed = desk.history().len();
        let granted = desk.history().iter().filter(|record| record.outcome.is_success()).count();
        let refused = processed.saturating_sub(granted);
        println!("Requests processed: {processed}");
        println!("  granted: {granted}");
        println!("  refused: {refused}");
    }
}
