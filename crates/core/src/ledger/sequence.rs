//! Per-account sequence allocation.
//!
//! The next sequence number is derived from the log, not from a counter:
//! `max(sequence) + 1` over the account's trades, starting at 1. The
//! `max` read and the append that consumes the result must share one
//! transaction; the unique `(account_id, sequence)` key turns any race
//! that slips through into a retryable conflict.

/// Derives the next sequence number from the current maximum, if any.
pub fn next_sequence(max: Option<i64>) -> i64 {
    max.unwrap_or(0) + 1
}
