#![doc(test(attr(deny(warnings))))]

//! Tally Core offers local-first personal finance tracking primitives:
//! income/expense transactions, per-category monthly budgets, savings goals,
//! and the derived dashboard aggregates computed from them.

pub mod analytics;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod store;
pub mod utils;

/// Initializes global tracing and emits a startup info log. Safe to call
/// more than once; only the first call installs the subscriber.
pub fn init() {
    utils::init_tracing();
    tracing::info!("Tally Core tracing initialized.");
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
    }
}
