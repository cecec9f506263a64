//! Per-variant descriptor records.
//!
//! A `VariantDescriptor` is the immutable bundle of facts the tracker needs
//! about a rule variant: what the oracle calls it, how its positions are
//! serialized, and which optional position features it carries.

/// Serialization dialect requested from the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FenDialect {
    /// Forsyth-Edwards style, used by the chess family.
    Fen,
    /// Shogi-style SFEN, used by the shogi family.
    Sfen,
}

impl FenDialect {
    #[inline]
    pub const fn is_sfen(self) -> bool {
        matches!(self, FenDialect::Sfen)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantDescriptor {
    pub canonical_key: &'static str,
    pub oracle_id: &'static str,
    /// Table default; a `960` suffix on the requested name turns it on per game.
    pub is_960: bool,
    pub show_promoted: bool,
    pub dialect: FenDialect,
    /// The serialized position embeds a move counter (Makruk-style counting).
    pub counting: bool,
    /// Captured pieces re-enter play from a bracketed holdings field.
    pub holdings: bool,
}

impl VariantDescriptor {
    pub(crate) const fn chess_family(canonical_key: &'static str, oracle_id: &'static str) -> Self {
        Self {
            canonical_key,
            oracle_id,
            is_960: false,
            show_promoted: false,
            dialect: FenDialect::Fen,
            counting: false,
            holdings: false,
        }
    }

    pub(crate) const fn shogi_family(canonical_key: &'static str) -> Self {
        Self {
            canonical_key,
            oracle_id: canonical_key,
            is_960: false,
            show_promoted: false,
            dialect: FenDialect::Sfen,
            counting: false,
            holdings: true,
        }
    }

    pub(crate) const fn with_holdings(mut self) -> Self {
        self.holdings = true;
        self
    }

    pub(crate) const fn with_counting(mut self) -> Self {
        self.counting = true;
        self
    }

    pub(crate) const fn with_promoted_marks(mut self) -> Self {
        self.show_promoted = true;
        self
    }
}

/// A descriptor together with the 960 flag of one particular game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedVariant {
    pub descriptor: &'static VariantDescriptor,
    pub chess960: bool,
}

impl ResolvedVariant {
    #[inline]
    pub fn oracle_id(&self) -> &'static str {
        self.descriptor.oracle_id
    }
}
