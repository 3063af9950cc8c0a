use rust_decimal::Decimal;

/// Sentinel account id returned by the owners query when no account
/// has ever traded the symbol.
pub const NO_OWNER: i64 = -1;

/// Sentinel holding returned when the queried account or symbol does not exist.
/// A real holding is never negative, so the value is unambiguous.
pub const HOLDING_UNKNOWN: Decimal = Decimal::NEGATIVE_ONE;

/// How many times a trade submission is re-attempted after a transaction
/// conflict before the failure is surfaced to the caller.
pub const MAX_CONFLICT_RETRIES: u32 = 3;
