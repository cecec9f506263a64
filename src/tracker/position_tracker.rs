//! Variant-aware position tracker.
//!
//! `PositionTracker` holds one game: the starting position, the move stack
//! and the side to move, plus the counting state of Makruk-style variants.
//! It never evaluates rules. Legal moves and serialized positions come from
//! the oracle, which is re-queried with the full (start, moves) pair on
//! every call.

use std::sync::Arc;

use crate::errors::{TrackerError, TrackerResult};
use crate::oracle::oracle_adapter::OracleAdapter;
use crate::oracle::oracle_trait::MoveOracle;
use crate::tracker::tracker_types::*;
use crate::utils::fen_fields::{count_board_pieces, count_holdings, parse_side_to_move};
use crate::variants::descriptor::{ResolvedVariant, VariantDescriptor};
use crate::variants::registry;

/// Start-position argument meaning "use the variant default".
pub const STARTPOS_PLACEHOLDER: &str = "startpos";

/// Counter value a counting variant starts from when nothing was carried over.
pub const DEFAULT_COUNT_STARTED: i32 = 0;

#[derive(Debug, Clone)]
pub struct PositionTracker {
    variant: ResolvedVariant,
    oracle: OracleAdapter,

    // Fixed at construction.
    initial_fen: String,
    initial_side: Color,
    count_started: i32,
    manual_count: bool,

    // Game evolution.
    move_stack: Vec<NativeMove>,
    side_to_move: Color,
}

impl PositionTracker {
    /// Start a game of `variant`.
    ///
    /// Without an explicit start position the oracle's default for the
    /// variant is adopted. An explicit one is taken verbatim; only its
    /// side-to-move field is read.
    pub fn new(
        variant: ResolvedVariant,
        oracle: Arc<dyn MoveOracle>,
        params: NewGameParams,
    ) -> TrackerResult<Self> {
        let oracle = OracleAdapter::new(oracle);

        let initial_fen = match params.start_fen {
            Some(fen) if !fen.is_empty() && fen != STARTPOS_PLACEHOLDER => fen,
            _ => oracle.start_fen(variant)?,
        };
        let initial_side = parse_side_to_move(&initial_fen)?;

        log::debug!(
            "new {} game (960: {}) from '{initial_fen}', count_started {}",
            variant.descriptor.canonical_key,
            variant.chess960,
            params.count_started
        );

        Ok(Self {
            variant,
            oracle,
            initial_fen,
            initial_side,
            count_started: params.count_started,
            manual_count: params.count_started != DEFAULT_COUNT_STARTED,
            move_stack: Vec::new(),
            side_to_move: initial_side,
        })
    }

    /// Resolve `variant_name` through the registry, then start a game.
    pub fn for_variant(
        variant_name: &str,
        oracle: Arc<dyn MoveOracle>,
        params: NewGameParams,
    ) -> TrackerResult<Self> {
        Self::new(registry::resolve(variant_name)?, oracle, params)
    }

    #[inline]
    pub fn descriptor(&self) -> &'static VariantDescriptor {
        self.variant.descriptor
    }

    #[inline]
    pub fn variant(&self) -> ResolvedVariant {
        self.variant
    }

    #[inline]
    pub fn chess960(&self) -> bool {
        self.variant.chess960
    }

    #[inline]
    pub fn initial_fen(&self) -> &str {
        &self.initial_fen
    }

    #[inline]
    pub fn initial_side(&self) -> Color {
        self.initial_side
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn move_history(&self) -> &[NativeMove] {
        &self.move_stack
    }

    #[inline]
    pub fn ply(&self) -> usize {
        self.move_stack.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<&NativeMove> {
        self.move_stack.last()
    }

    #[inline]
    pub fn count_started(&self) -> i32 {
        self.count_started
    }

    /// True when the game was resumed with a non-default move counter.
    #[inline]
    pub fn manual_count(&self) -> bool {
        self.manual_count
    }

    /// The game is never over at this layer; ask the oracle or the caller.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        false
    }

    /// Forward an engine option to the shared oracle.
    pub fn set_option(&self, name: &str, value: &str) -> TrackerResult<()> {
        log::debug!("set oracle option {name} = {value}");
        self.oracle.set_option(name, value)
    }

    // --- Move application ---

    /// Append `mv` without consulting the oracle.
    pub fn push(&mut self, mv: NativeMove) {
        log::debug!("push {mv} at ply {}", self.move_stack.len());
        self.move_stack.push(mv);
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Wrap native notation into a move without applying it.
    pub fn parse_native(&self, notation: &str) -> TrackerResult<NativeMove> {
        NativeMove::new(notation)
    }

    /// Append a move given in native notation. Legality is not checked.
    pub fn push_native(&mut self, notation: &str) -> TrackerResult<NativeMove> {
        let mv = self.parse_native(notation)?;
        self.push(mv.clone());
        Ok(mv)
    }

    /// Remove and return the most recent move.
    pub fn pop(&mut self) -> TrackerResult<NativeMove> {
        let mv = self.move_stack.pop().ok_or(TrackerError::EmptyHistory)?;
        self.side_to_move = self.side_to_move.opposite();
        log::debug!("pop {mv}, ply now {}", self.move_stack.len());
        Ok(mv)
    }

    /// Legal moves in the current position, as reported by the oracle.
    pub fn legal_moves(&self) -> TrackerResult<Vec<NativeMove>> {
        self.oracle_legal_moves()?
            .into_iter()
            .map(NativeMove::new)
            .collect()
    }

    pub fn is_legal(&self, mv: &NativeMove) -> TrackerResult<bool> {
        Ok(self
            .oracle_legal_moves()?
            .iter()
            .any(|legal| legal == mv.as_str()))
    }

    /// Match `notation` against the oracle's legal moves.
    ///
    /// Exactly one legal move must render as `notation`. No tie-breaking is
    /// attempted when several do.
    pub fn parse_ambiguous(&self, notation: &str) -> TrackerResult<NativeMove> {
        let legal = self.oracle_legal_moves()?;
        let mut matches = legal.iter().filter(|candidate| candidate.as_str() == notation);

        let Some(matched) = matches.next() else {
            log::warn!(
                "'{notation}' matches none of {} legal moves at ply {}",
                legal.len(),
                self.move_stack.len()
            );
            return Err(TrackerError::NoSuchMove(notation.to_owned()));
        };

        if matches.next().is_some() {
            log::warn!(
                "'{notation}' matches several legal moves at ply {} in {}",
                self.move_stack.len(),
                self.variant.oracle_id()
            );
            return Err(TrackerError::AmbiguousMove(notation.to_owned()));
        }

        NativeMove::new(matched.as_str())
    }

    /// Resolve `notation` against the legal moves and apply the result.
    pub fn push_ambiguous(&mut self, notation: &str) -> TrackerResult<NativeMove> {
        let mv = self.parse_ambiguous(notation)?;
        self.push(mv.clone());
        Ok(mv)
    }

    // --- Serialization ---

    /// Oracle format flags for `options` applied to this game.
    pub fn fen_format(&self, options: &SerializeOptions) -> FenFormat {
        let descriptor = self.variant.descriptor;
        let dialect = options.dialect.unwrap_or(descriptor.dialect);

        FenFormat {
            sfen: dialect.is_sfen(),
            show_promoted: options.show_promoted.unwrap_or(descriptor.show_promoted),
            count_started: if descriptor.counting {
                self.count_started
            } else {
                DEFAULT_COUNT_STARTED
            },
            shredder: options.shredder,
            en_passant: options.en_passant,
        }
    }

    /// Current position as serialized by the oracle, returned unmodified.
    pub fn fen(&self, options: &SerializeOptions) -> TrackerResult<String> {
        let format = self.fen_format(options);
        self.oracle
            .get_fen(self.variant, &self.initial_fen, &self.move_stack, &format)
    }

    /// Pieces on the board, read from the default serialization.
    ///
    /// Pieces in hand are not counted; see `occupied_with_holdings`.
    pub fn occupied(&self) -> TrackerResult<usize> {
        let fen = self.fen(&SerializeOptions::default())?;
        Ok(count_board_pieces(&fen))
    }

    /// Pieces on the board plus pieces in hand.
    pub fn occupied_with_holdings(&self) -> TrackerResult<usize> {
        let options = SerializeOptions::default();
        let fen = self.fen(&options)?;
        let on_board = count_board_pieces(&fen);
        if !self.variant.descriptor.holdings {
            return Ok(on_board);
        }
        Ok(on_board + count_holdings(&fen, self.fen_format(&options).sfen))
    }

    // --- Derived trackers ---

    /// A tracker for the same game, optionally keeping the move stack.
    pub fn copy(&self, keep_history: bool) -> Self {
        let mut copy = self.clone();
        if !keep_history {
            copy.move_stack.clear();
            copy.side_to_move = copy.initial_side;
        }
        copy
    }

    /// The game as it was before any move.
    pub fn root(&self) -> Self {
        self.copy(false)
    }

    fn oracle_legal_moves(&self) -> TrackerResult<Vec<String>> {
        self.oracle
            .legal_moves(self.variant, &self.initial_fen, &self.move_stack)
    }
}
