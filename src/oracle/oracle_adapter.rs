//! Marshalling layer between tracker types and the oracle call shape.
//!
//! Nothing here decides anything: it flattens `NativeMove` slices into plain
//! strings, reads the descriptor fields the oracle wants, and lifts oracle
//! failures into `TrackerError::Oracle`.

use std::sync::Arc;

use crate::errors::{TrackerError, TrackerResult};
use crate::oracle::oracle_trait::MoveOracle;
use crate::tracker::tracker_types::{FenFormat, NativeMove};
use crate::variants::descriptor::ResolvedVariant;

#[derive(Clone)]
pub struct OracleAdapter {
    oracle: Arc<dyn MoveOracle>,
}

impl OracleAdapter {
    pub fn new(oracle: Arc<dyn MoveOracle>) -> Self {
        Self { oracle }
    }

    pub fn set_option(&self, name: &str, value: &str) -> TrackerResult<()> {
        self.oracle.set_option(name, value).map_err(TrackerError::Oracle)
    }

    pub fn start_fen(&self, variant: ResolvedVariant) -> TrackerResult<String> {
        log::trace!("oracle start_fen({})", variant.oracle_id());
        self.oracle
            .start_fen(variant.oracle_id())
            .map_err(TrackerError::Oracle)
    }

    pub fn legal_moves(
        &self,
        variant: ResolvedVariant,
        start_fen: &str,
        history: &[NativeMove],
    ) -> TrackerResult<Vec<String>> {
        let moves = history_strings(history);
        log::trace!(
            "oracle legal_moves({}, {start_fen}, {} moves, 960: {})",
            variant.oracle_id(),
            moves.len(),
            variant.chess960
        );
        self.oracle
            .legal_moves(variant.oracle_id(), start_fen, &moves, variant.chess960)
            .map_err(TrackerError::Oracle)
    }

    pub fn get_fen(
        &self,
        variant: ResolvedVariant,
        start_fen: &str,
        history: &[NativeMove],
        format: &FenFormat,
    ) -> TrackerResult<String> {
        let moves = history_strings(history);
        log::trace!(
            "oracle get_fen({}, {start_fen}, {} moves, {format:?})",
            variant.oracle_id(),
            moves.len()
        );
        self.oracle
            .get_fen(variant.oracle_id(), start_fen, &moves, variant.chess960, format)
            .map_err(TrackerError::Oracle)
    }
}

impl std::fmt::Debug for OracleAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleAdapter").finish_non_exhaustive()
    }
}

fn history_strings(history: &[NativeMove]) -> Vec<String> {
    history.iter().map(|mv| mv.as_str().to_owned()).collect()
}
