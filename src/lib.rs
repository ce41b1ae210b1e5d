#![doc(test(attr(deny(warnings))))]

//! Payday Core offers the payday scheduling, balance aggregation, and
//! budget-overhead primitives behind a personal finance dashboard.

pub mod calendar;
pub mod core;
pub mod domain;
pub mod errors;
pub mod schedule;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Payday Core tracing initialized.");
    });
}
