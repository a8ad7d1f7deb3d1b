use crate::circulation::{CirculationEvent, Outcome, RejectReason};
use crate::desk::LoanRecord;

/// Observer trait for circulation activity.
///
/// The desk calls every registered observer once per processed request,
/// granted or refused.
pub trait DeskObserver {
    /// Called after the desk records a request
    fn on_record(&self, record: &LoanRecord);
}

/// Observer that prints every recorded request
#[derive(Debug)]
pub struct ActivityLog;

impl DeskObserver for ActivityLog {
    fn on_record(&self, record: &LoanRecord) {
        println!(
            "LOG: '{}': {} --({})--> {} [{}]",
            record.book, record.from, record.event, record.to, record.outcome
        );
    }
}

/// Observer that prints patron-facing notices for the requests patrons care
/// about, and stays quiet for the rest
#[derive(Debug)]
pub struct PatronNotices;

impl DeskObserver for PatronNotices {
    fn on_record(&self, record: &LoanRecord) {
        match (record.event, record.outcome) {
            (CirculationEvent::Return, Outcome::Success) => {
                println!("NOTICE: '{}' is back on the shelf.", record.book);
            }
            (CirculationEvent::Reserve, Outcome::Success) => {
                println!("NOTICE: '{}' is on hold for {}.", record.book, record.patron);
            }
            (CirculationEvent::Borrow, Outcome::Rejected(RejectReason::PremiumRequired)) => {
                println!(
                    "NOTICE: {} needs a premium membership for '{}'.",
                    record.patron, record.book
                );
            }
            _ => {}
        }
    }
}
