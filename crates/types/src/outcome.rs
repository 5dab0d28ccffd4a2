//! Match outcome symbols for 1X2 pool betting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three possible results of a pool match.
///
/// Displayed with the traditional coupon signs: `1` for a home win,
/// `X` for a draw, `2` for an away win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Home win (`1`).
    Home,
    /// Draw (`X`).
    Draw,
    /// Away win (`2`).
    Away,
}

impl Outcome {
    /// The canonical sign order. Ternary hedge digits index into this array.
    pub const CANONICAL: [Outcome; 3] = [Outcome::Home, Outcome::Draw, Outcome::Away];

    /// The coupon sign for this outcome.
    pub fn sign(self) -> char {
        match self {
            Outcome::Home => '1',
            Outcome::Draw => 'X',
            Outcome::Away => '2',
        }
    }

    /// Parse a coupon sign. Accepts `1`, `X`/`x`, and `2`.
    pub fn from_sign(c: char) -> Option<Outcome> {
        match c {
            '1' => Some(Outcome::Home),
            'X' | 'x' => Some(Outcome::Draw),
            '2' => Some(Outcome::Away),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sign())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_round_trip() {
        for outcome in Outcome::CANONICAL {
            assert_eq!(Outcome::from_sign(outcome.sign()), Some(outcome));
        }
    }

    #[test]
    fn test_canonical_order_matches_signs() {
        let signs: String = Outcome::CANONICAL.iter().map(|o| o.sign()).collect();
        assert_eq!(signs, "1X2");
    }

    #[test]
    fn test_from_sign_rejects_garbage() {
        assert_eq!(Outcome::from_sign('3'), None);
        assert_eq!(Outcome::from_sign(' '), None);
    }
}
