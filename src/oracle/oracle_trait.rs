//! Contract of the external move-generation oracle.
//!
//! The oracle is authoritative for legal moves and for the serialized form of
//! a position. It is stateless from the tracker's point of view: every call
//! carries the full (variant, start position, move list) triple.

use crate::tracker::tracker_types::FenFormat;

pub trait MoveOracle: Send + Sync {
    /// Engine-level configuration (for example `VariantPath`).
    fn set_option(&self, _name: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    /// Default starting position of `variant`.
    fn start_fen(&self, variant: &str) -> Result<String, String>;

    /// Legal moves after `moves` have been played from `fen`.
    ///
    /// Order is unspecified and may change between calls.
    fn legal_moves(
        &self,
        variant: &str,
        fen: &str,
        moves: &[String],
        chess960: bool,
    ) -> Result<Vec<String>, String>;

    /// Serialized position after `moves` have been played from `fen`.
    fn get_fen(
        &self,
        variant: &str,
        fen: &str,
        moves: &[String],
        chess960: bool,
        format: &FenFormat,
    ) -> Result<String, String>;
}
