//! Pure ledger rules.
//!
//! These functions decide what a movement does to on-hand stock; actually
//! persisting the outcome (atomically with the appended movement row) is
//! the store's job. Keeping the decision pure means every backend applies
//! exactly the same invariants.

use restock_core::{EngineError, EngineResult};

use crate::movement::MovementKind;

/// Apply one movement to a stock level.
///
/// Entries always succeed (overflow aside); an exit is rejected with
/// `InsufficientStock` when it would drive stock below zero, and in that
/// case the caller must persist neither the stock change nor the movement.
pub fn apply_kind(stock: u32, kind: MovementKind, quantity: u32) -> EngineResult<u32> {
    if quantity == 0 {
        return Err(EngineError::invalid_parameter(
            "movement quantity must be positive",
        ));
    }
    match kind {
        MovementKind::Entry => stock
            .checked_add(quantity)
            .ok_or_else(|| EngineError::invalid_parameter("stock overflow")),
        MovementKind::Exit => {
            if stock < quantity {
                Err(EngineError::insufficient_stock(stock, quantity))
            } else {
                Ok(stock - quantity)
            }
        }
    }
}

/// Synthetic movement for a direct stock edit.
///
/// Returns the (kind, quantity) to append, or `None` when nothing is
/// recorded: either the stock did not change, or the previous stock was
/// exactly zero. The zero-baseline case reproduces the source system's
/// behavior (a first stocking via the edit form leaves no ledger trace)
/// and is kept for compatibility with existing movement histories.
pub fn adjustment_for_edit(previous_stock: u32, new_stock: u32) -> Option<(MovementKind, u32)> {
    if previous_stock == new_stock || previous_stock == 0 {
        return None;
    }
    if new_stock > previous_stock {
        Some((MovementKind::Entry, new_stock - previous_stock))
    } else {
        Some((MovementKind::Exit, previous_stock - new_stock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_adds_stock() {
        assert_eq!(apply_kind(5, MovementKind::Entry, 3).unwrap(), 8);
    }

    #[test]
    fn exit_subtracts_stock() {
        assert_eq!(apply_kind(5, MovementKind::Exit, 5).unwrap(), 0);
    }

    #[test]
    fn exit_below_zero_is_rejected() {
        let err = apply_kind(5, MovementKind::Exit, 6).unwrap_err();
        assert_eq!(
            err,
            EngineError::InsufficientStock {
                available: 5,
                requested: 6
            }
        );
    }

    #[test]
    fn zero_quantity_is_rejected_for_both_kinds() {
        for kind in [MovementKind::Entry, MovementKind::Exit] {
            assert!(matches!(
                apply_kind(5, kind, 0),
                Err(EngineError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn entry_overflow_is_rejected() {
        assert!(matches!(
            apply_kind(u32::MAX, MovementKind::Entry, 1),
            Err(EngineError::InvalidParameter(_))
        ));
    }

    #[test]
    fn edit_records_entry_when_stock_rises() {
        assert_eq!(adjustment_for_edit(4, 10), Some((MovementKind::Entry, 6)));
    }

    #[test]
    fn edit_records_exit_when_stock_falls() {
        assert_eq!(adjustment_for_edit(10, 4), Some((MovementKind::Exit, 6)));
    }

    #[test]
    fn unchanged_stock_records_nothing() {
        assert_eq!(adjustment_for_edit(7, 7), None);
    }

    #[test]
    fn zero_baseline_edit_records_nothing() {
        // Compatibility quirk: first stocking through the edit form is
        // not ledgered.
        assert_eq!(adjustment_for_edit(0, 50), None);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a successful movement changes stock by exactly the
            /// signed quantity, and a failed exit changes nothing.
            #[test]
            fn apply_kind_is_exact(stock in 0u32..1_000_000, quantity in 1u32..1_000_000) {
                match apply_kind(stock, MovementKind::Exit, quantity) {
                    Ok(new_stock) => prop_assert_eq!(new_stock, stock - quantity),
                    Err(EngineError::InsufficientStock { available, requested }) => {
                        prop_assert_eq!(available, stock);
                        prop_assert_eq!(requested, quantity);
                        prop_assert!(stock < quantity);
                    }
                    Err(e) => return Err(TestCaseError::fail(format!("unexpected error: {e}"))),
                }
                let entered = apply_kind(stock, MovementKind::Entry, quantity).unwrap();
                prop_assert_eq!(u64::from(entered), u64::from(stock) + u64::from(quantity));
            }

            /// Property: the synthetic edit adjustment, replayed through
            /// apply_kind, reproduces the edited stock (whenever the quirk
            /// records one at all).
            #[test]
            fn edit_adjustment_round_trips(previous in 0u32..1_000_000, new in 0u32..1_000_000) {
                match adjustment_for_edit(previous, new) {
                    Some((kind, quantity)) => {
                        let replayed = apply_kind(previous, kind, quantity).unwrap();
                        prop_assert_eq!(replayed, new);
                    }
                    None => prop_assert!(previous == new || previous == 0),
                }
            }
        }
    }
}
