//! Coverage extensions: multiplicative widening of a finished row set.

use crate::row::CouponRow;
use types::Outcome;

/// Replace one match position's symbol in every row with each member of
/// `symbols`, renumbering rows.
///
/// The row count multiplies by `symbols.len()`: a full extension (all
/// three outcomes) triples the set, a partial one multiplies by its
/// subset size. Applying two extensions in either order yields the same
/// row count.
pub fn apply_extension(rows: &[CouponRow], position: usize, symbols: &[Outcome]) -> Vec<CouponRow> {
    let mut extended = Vec::with_capacity(rows.len() * symbols.len());
    for row in rows {
        for &symbol in symbols {
            let mut widened = row.clone();
            widened.0[position] = symbol;
            extended.push(widened);
        }
    }
    extended
}
