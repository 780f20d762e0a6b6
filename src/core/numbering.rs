use std::sync::atomic::{AtomicU64, Ordering};

static GLOBAL: InvoiceNumbering = InvoiceNumbering::new();

/// Sequential invoice number source.
///
/// Hands out 1, 2, 3, ... to every invoice created from it. The counter is an
/// atomic, so invoices may be created concurrently from several threads and
/// still never observe the same number.
///
/// [`Invoice::new`](super::Invoice::new) draws from [`InvoiceNumbering::global`].
/// Use [`Invoice::with_numbering`](super::Invoice::with_numbering) with a local
/// sequence to keep numbers predictable, e.g. in tests.
#[derive(Debug, Default)]
pub struct InvoiceNumbering {
    last: AtomicU64,
}

impl InvoiceNumbering {
    /// Create a sequence whose first number is 1.
    pub const fn new() -> Self {
        Self::starting_after(0)
    }

    /// Create a sequence continuing after an already issued number.
    pub const fn starting_after(last: u64) -> Self {
        Self {
            last: AtomicU64::new(last),
        }
    }

    /// The process-wide sequence.
    pub fn global() -> &'static InvoiceNumbering {
        &GLOBAL
    }

    /// Issue the next number. Never returns 0.
    pub fn next_number(&self) -> u64 {
        loop {
            let issued = self.last.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
            if issued != 0 {
                return issued;
            }
        }
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> u64 {
        match self.last.load(Ordering::Relaxed).wrapping_add(1) {
            0 => 1,
            n => n,
        }
    }

    /// The most recently issued number, or 0 if none was issued yet.
    pub fn last_issued(&self) -> u64 {
        self.last.load(Ordering::Relaxed)
    }
}
