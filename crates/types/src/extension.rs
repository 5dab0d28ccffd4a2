//! Coverage extensions: post-hoc multiplicative expansion of a row set.

use crate::ids::MatchId;
use crate::outcome::Outcome;
use serde::{Deserialize, Serialize};

/// How far an extension widens its match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtensionKind {
    /// Cover all three outcomes.
    Full,
    /// Cover the listed subset of outcomes.
    Partial(Vec<Outcome>),
}

/// A defensive widening of one match applied after row generation.
///
/// A full extension multiplies the row count by 3, a partial one by the
/// size of its symbol subset. Multiple extensions compose multiplicatively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageExtension {
    /// Match to widen.
    pub match_id: MatchId,
    /// Widening kind.
    pub kind: ExtensionKind,
}

impl CoverageExtension {
    /// Extend a match to all three outcomes.
    pub fn full(match_id: MatchId) -> Self {
        Self {
            match_id,
            kind: ExtensionKind::Full,
        }
    }

    /// Extend a match to the given outcome subset.
    pub fn partial(match_id: MatchId, symbols: Vec<Outcome>) -> Self {
        Self {
            match_id,
            kind: ExtensionKind::Partial(symbols),
        }
    }

    /// The symbols this extension writes into its match column.
    pub fn symbols(&self) -> &[Outcome] {
        match &self.kind {
            ExtensionKind::Full => &Outcome::CANONICAL,
            ExtensionKind::Partial(symbols) => symbols,
        }
    }

    /// The row-count multiplier this extension applies.
    pub fn factor(&self) -> usize {
        self.symbols().len()
    }
}
