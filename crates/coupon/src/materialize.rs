//! Materialization: digit vectors + hedge assignment -> coupon rows.
//!
//! Digit-to-position mapping follows array order within each category of
//! the assignment, not match-number order: the h ternary digits map to
//! the three-way matches in assignment order, the v binary digits to the
//! two-way matches in assignment order. A given vector index therefore
//! means the same thing across the whole key-row set.

use crate::row::CouponRow;
use covering::DigitVector;
use hedging::HedgeAssignment;
use thiserror::Error;
use types::{MatchId, Outcome};

/// Errors when combining key rows with an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CouponError {
    /// The assignment names a match that is not in the round.
    #[error("assignment references {0} which is not in the round")]
    UnknownMatch(MatchId),

    /// A round match is not covered by the assignment.
    #[error("{0} is not covered by the assignment")]
    UnassignedMatch(MatchId),

    /// A digit vector's dimension does not match the assignment's hedges.
    #[error("digit vector has {got} positions, assignment needs {want}")]
    DigitArityMismatch { got: usize, want: usize },

    /// A digit exceeds the radix of its position.
    #[error("digit {digit} out of range at hedge position {position}")]
    DigitOutOfRange { position: usize, digit: u8 },
}

/// How one match position derives its symbol from a digit vector.
#[derive(Debug, Clone, Copy)]
enum Slot {
    /// Single pick: same symbol in every row.
    Fixed(Outcome),
    /// Three-way hedge reading the ternary digit at this index.
    Ternary(usize),
    /// Two-way hedge reading the binary digit at this index.
    Binary(usize, [Outcome; 2]),
}

/// Produce one coupon row per digit vector.
///
/// `match_order` is the round's draw order and defines row positions.
/// The result is deterministic: the same inputs always yield identical
/// rows.
pub fn materialize(
    key_rows: &[DigitVector],
    assignment: &HedgeAssignment,
    match_order: &[MatchId],
) -> Result<Vec<CouponRow>, CouponError> {
    let slots = build_slots(assignment, match_order)?;
    let dims = assignment.three_way.len() + assignment.two_way.len();

    let mut rows = Vec::with_capacity(key_rows.len());
    for vector in key_rows {
        if vector.len() != dims {
            return Err(CouponError::DigitArityMismatch {
                got: vector.len(),
                want: dims,
            });
        }
        let mut symbols = Vec::with_capacity(slots.len());
        for slot in &slots {
            symbols.push(slot_symbol(*slot, vector)?);
        }
        rows.push(CouponRow(symbols));
    }
    Ok(rows)
}

fn build_slots(
    assignment: &HedgeAssignment,
    match_order: &[MatchId],
) -> Result<Vec<Slot>, CouponError> {
    let position_of = |id: MatchId| match_order.iter().position(|&m| m == id);
    let mut slots: Vec<Option<Slot>> = vec![None; match_order.len()];

    for single in &assignment.singles {
        let pos = position_of(single.match_id).ok_or(CouponError::UnknownMatch(single.match_id))?;
        slots[pos] = Some(Slot::Fixed(single.symbol));
    }
    for (digit, &id) in assignment.three_way.iter().enumerate() {
        let pos = position_of(id).ok_or(CouponError::UnknownMatch(id))?;
        slots[pos] = Some(Slot::Ternary(digit));
    }
    let ternary_count = assignment.three_way.len();
    for (offset, hedge) in assignment.two_way.iter().enumerate() {
        let pos = position_of(hedge.match_id).ok_or(CouponError::UnknownMatch(hedge.match_id))?;
        slots[pos] = Some(Slot::Binary(ternary_count + offset, hedge.symbols));
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(pos, slot)| slot.ok_or(CouponError::UnassignedMatch(match_order[pos])))
        .collect()
}

fn slot_symbol(slot: Slot, vector: &DigitVector) -> Result<Outcome, CouponError> {
    match slot {
        Slot::Fixed(symbol) => Ok(symbol),
        Slot::Ternary(position) => {
            let digit = vector.digit(position);
            Outcome::CANONICAL
                .get(digit as usize)
                .copied()
                .ok_or(CouponError::DigitOutOfRange { position, digit })
        }
        Slot::Binary(position, symbols) => {
            let digit = vector.digit(position);
            symbols
                .get(digit as usize)
                .copied()
                .ok_or(CouponError::DigitOutOfRange { position, digit })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covering::enumerate;
    use hedging::{SinglePick, TwoWayHedge};

    fn sample_assignment() -> HedgeAssignment {
        HedgeAssignment {
            singles: vec![SinglePick {
                match_id: MatchId(2),
                symbol: Outcome::Away,
            }],
            three_way: vec![MatchId(3)],
            two_way: vec![TwoWayHedge {
                match_id: MatchId(1),
                symbols: [Outcome::Home, Outcome::Draw],
            }],
        }
    }

    fn order() -> Vec<MatchId> {
        vec![MatchId(1), MatchId(2), MatchId(3)]
    }

    #[test]
    fn test_materialize_maps_digits_positionally() {
        let key_rows = enumerate(1, 1).unwrap();
        let rows = materialize(&key_rows, &sample_assignment(), &order()).unwrap();

        assert_eq!(rows.len(), 6);
        // Vector (0, 0): three-way digit 0 -> '1', two-way digit 0 -> '1'.
        // Positions: match 1 two-way, match 2 single '2', match 3 three-way.
        assert_eq!(rows[0].signs(), "121");
        // Vector (0, 1): two-way digit selects Draw.
        assert_eq!(rows[1].signs(), "X21");
        // Vector (2, 1): three-way digit 2 -> '2'.
        assert_eq!(rows[5].signs(), "X22");
    }

    #[test]
    fn test_materialize_is_idempotent() {
        let key_rows = enumerate(1, 1).unwrap();
        let first = materialize(&key_rows, &sample_assignment(), &order()).unwrap();
        let second = materialize(&key_rows, &sample_assignment(), &order()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_singles_constant_across_rows() {
        let key_rows = enumerate(1, 1).unwrap();
        let rows = materialize(&key_rows, &sample_assignment(), &order()).unwrap();
        assert!(rows.iter().all(|row| row.get(1) == Some(Outcome::Away)));
    }

    #[test]
    fn test_unknown_match_rejected() {
        let mut assignment = sample_assignment();
        assignment.three_way = vec![MatchId(9)];
        let key_rows = enumerate(1, 1).unwrap();
        assert_eq!(
            materialize(&key_rows, &assignment, &order()),
            Err(CouponError::UnknownMatch(MatchId(9)))
        );
    }

    #[test]
    fn test_unassigned_match_rejected() {
        let assignment = sample_assignment();
        let order = vec![MatchId(1), MatchId(2), MatchId(3), MatchId(4)];
        let key_rows = enumerate(1, 1).unwrap();
        assert_eq!(
            materialize(&key_rows, &assignment, &order),
            Err(CouponError::UnassignedMatch(MatchId(4)))
        );
    }

    #[test]
    fn test_arity_mismatch_rejected() {
        let key_rows = enumerate(2, 1).unwrap();
        assert!(matches!(
            materialize(&key_rows, &sample_assignment(), &order()),
            Err(CouponError::DigitArityMismatch { got: 3, want: 2 })
        ));
    }
}
