//! Property-based tests for the holdings fold and the oversell invariant.
//!
//! These verify universal properties over random trade sequences, using
//! the `proptest` crate for test case generation.

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;
use tradepit_core::ledger::{net_position, next_sequence, Trade, TradeSide};

// =============================================================================
// Generators
// =============================================================================

fn arb_side() -> impl Strategy<Value = TradeSide> {
    prop_oneof![Just(TradeSide::Buy), Just(TradeSide::Sell)]
}

/// Positive share quantities with four decimal places, up to 100.0000.
fn arb_shares() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000).prop_map(|n| Decimal::new(n, 4))
}

fn arb_price() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000).prop_map(|n| Decimal::new(n, 2))
}

prop_compose! {
    fn arb_trade_parts()(side in arb_side(), shares in arb_shares(), price in arb_price())
        -> (TradeSide, Decimal, Decimal) {
        (side, shares, price)
    }
}

fn trade(sequence: i64, side: TradeSide, shares: Decimal, price: Decimal) -> Trade {
    Trade {
        account_id: 1,
        sequence,
        side,
        timestamp: Utc::now(),
        symbol: "AAPL".to_string(),
        shares,
        price,
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Conservation: the fold equals the signed sum of the trades' shares.
    #[test]
    fn prop_fold_equals_signed_sum(parts in prop::collection::vec(arb_trade_parts(), 0..64)) {
        let trades: Vec<Trade> = parts
            .iter()
            .enumerate()
            .map(|(i, (side, shares, price))| trade(i as i64 + 1, *side, *shares, *price))
            .collect();

        let expected = trades.iter().fold(Decimal::ZERO, |acc, t| match t.side {
            TradeSide::Buy => acc + t.shares,
            TradeSide::Sell => acc - t.shares,
        });

        prop_assert_eq!(net_position(&trades), expected);
    }

    /// No negative holdings: admitting each sell only when it is covered
    /// by the running position (the validator's oversell rule) keeps the
    /// fold non-negative at every prefix of the log.
    #[test]
    fn prop_oversell_rule_keeps_holdings_non_negative(
        parts in prop::collection::vec(arb_trade_parts(), 0..64)
    ) {
        let mut log: Vec<Trade> = Vec::new();

        for (side, shares, price) in parts {
            let held = net_position(&log);
            if side == TradeSide::Sell && shares > held {
                // Rejected: the log must be left exactly as it was.
                continue;
            }
            let sequence = next_sequence(log.iter().map(|t| t.sequence).max());
            log.push(trade(sequence, side, shares, price));
        }

        for prefix_len in 0..=log.len() {
            prop_assert!(net_position(&log[..prefix_len]) >= Decimal::ZERO);
        }
    }

    /// Sequence numbers derived from the log are strictly increasing
    /// and start at 1.
    #[test]
    fn prop_sequences_start_at_one_and_increase(count in 0usize..32) {
        let mut max = None;
        let mut assigned = Vec::new();
        for _ in 0..count {
            let next = next_sequence(max);
            assigned.push(next);
            max = Some(next);
        }

        let expected: Vec<i64> = (1..=count as i64).collect();
        prop_assert_eq!(assigned, expected);
    }
}
