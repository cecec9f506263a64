//! Table-driven in-memory oracle.
//!
//! `ScriptedOracle` answers from positions registered up front, keyed by
//! (variant, start position, move list). It knows no rules. It does apply
//! the format flags to its stored positions (promoted marks, Shredder
//! castling, en-passant style, SFEN text) so callers can observe them, and it
//! records every call for inspection.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::oracle::oracle_trait::MoveOracle;
use crate::tracker::tracker_types::{EnPassantStyle, FenFormat};
use crate::utils::fen_fields::{board_field, shredder_castling};

/// One scripted position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedPosition {
    /// Position in FEN dialect, promoted pieces marked with `~`.
    pub fen: String,
    /// Same position in SFEN dialect, when the variant has one.
    pub sfen: Option<String>,
    pub legal_moves: Vec<String>,
    /// Whether the en-passant square in `fen` can actually be captured on.
    pub en_passant_capturable: bool,
}

impl ScriptedPosition {
    pub fn new(fen: impl Into<String>) -> Self {
        Self {
            fen: fen.into(),
            sfen: None,
            legal_moves: Vec::new(),
            en_passant_capturable: true,
        }
    }

    pub fn with_legal_moves(mut self, moves: &[&str]) -> Self {
        self.legal_moves = moves.iter().map(|mv| (*mv).to_owned()).collect();
        self
    }

    pub fn with_sfen(mut self, sfen: impl Into<String>) -> Self {
        self.sfen = Some(sfen.into());
        self
    }

    pub fn with_uncapturable_en_passant(mut self) -> Self {
        self.en_passant_capturable = false;
        self
    }
}

/// A recorded oracle call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleCall {
    StartFen {
        variant: String,
    },
    LegalMoves {
        variant: String,
        fen: String,
        moves: Vec<String>,
        chess960: bool,
    },
    GetFen {
        variant: String,
        fen: String,
        moves: Vec<String>,
        chess960: bool,
        format: FenFormat,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PositionKey {
    variant: String,
    fen: String,
    moves: Vec<String>,
}

impl PositionKey {
    fn new(variant: &str, fen: &str, moves: &[String]) -> Self {
        Self {
            variant: variant.to_owned(),
            fen: fen.to_owned(),
            moves: moves.to_vec(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ScriptedOracle {
    starts: HashMap<String, String>,
    positions: HashMap<PositionKey, ScriptedPosition>,
    shuffle: Option<Mutex<StdRng>>,
    skip_call_log: bool,
    calls: Mutex<Vec<OracleCall>>,
    options: Mutex<HashMap<String, String>>,
}

impl ScriptedOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the default starting position of `variant`.
    ///
    /// The start position itself also becomes a scripted position with no
    /// legal moves, unless one is registered later.
    pub fn with_start(mut self, variant: &str, fen: &str) -> Self {
        self.starts.insert(variant.to_owned(), fen.to_owned());
        self.positions
            .entry(PositionKey::new(variant, fen, &[]))
            .or_insert_with(|| ScriptedPosition::new(fen));
        self
    }

    pub fn with_position(
        mut self,
        variant: &str,
        start_fen: &str,
        moves: &[&str],
        position: ScriptedPosition,
    ) -> Self {
        let moves: Vec<String> = moves.iter().map(|mv| (*mv).to_owned()).collect();
        self.positions
            .insert(PositionKey::new(variant, start_fen, &moves), position);
        self
    }

    /// Return legal moves in a seeded random order on every call.
    pub fn with_shuffled_moves(mut self, seed: u64) -> Self {
        self.shuffle = Some(Mutex::new(StdRng::seed_from_u64(seed)));
        self
    }

    /// Stop recording calls (long-running benchmarks).
    pub fn without_call_log(mut self) -> Self {
        self.skip_call_log = true;
        self
    }

    pub fn calls(&self) -> Vec<OracleCall> {
        lock(&self.calls).clone()
    }

    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    pub fn option(&self, name: &str) -> Option<String> {
        lock(&self.options).get(name).cloned()
    }

    fn record(&self, call: OracleCall) {
        if self.skip_call_log {
            return;
        }
        lock(&self.calls).push(call);
    }

    fn position(
        &self,
        variant: &str,
        fen: &str,
        moves: &[String],
    ) -> Result<ScriptedPosition, String> {
        if let Some(position) = self.positions.get(&PositionKey::new(variant, fen, moves)) {
            return Ok(position.clone());
        }
        if moves.is_empty() {
            return Ok(ScriptedPosition::new(fen));
        }
        Err(format!(
            "no scripted position for {variant} from '{fen}' after [{}]",
            moves.join(" ")
        ))
    }
}

impl MoveOracle for ScriptedOracle {
    fn set_option(&self, name: &str, value: &str) -> Result<(), String> {
        lock(&self.options).insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn start_fen(&self, variant: &str) -> Result<String, String> {
        self.record(OracleCall::StartFen {
            variant: variant.to_owned(),
        });
        self.starts
            .get(variant)
            .cloned()
            .ok_or_else(|| format!("no start position scripted for {variant}"))
    }

    fn legal_moves(
        &self,
        variant: &str,
        fen: &str,
        moves: &[String],
        chess960: bool,
    ) -> Result<Vec<String>, String> {
        self.record(OracleCall::LegalMoves {
            variant: variant.to_owned(),
            fen: fen.to_owned(),
            moves: moves.to_vec(),
            chess960,
        });

        let mut legal = self
            .positions
            .get(&PositionKey::new(variant, fen, moves))
            .map(|position| position.legal_moves.clone())
            .unwrap_or_default();

        if let Some(rng) = &self.shuffle {
            legal.shuffle(&mut *lock(rng));
        }
        Ok(legal)
    }

    fn get_fen(
        &self,
        variant: &str,
        fen: &str,
        moves: &[String],
        chess960: bool,
        format: &FenFormat,
    ) -> Result<String, String> {
        self.record(OracleCall::GetFen {
            variant: variant.to_owned(),
            fen: fen.to_owned(),
            moves: moves.to_vec(),
            chess960,
            format: *format,
        });

        let position = self.position(variant, fen, moves)?;
        if format.sfen {
            if let Some(sfen) = &position.sfen {
                return Ok(sfen.clone());
            }
        }
        Ok(apply_format(&position, format))
    }
}

fn apply_format(position: &ScriptedPosition, format: &FenFormat) -> String {
    let mut fields: Vec<String> = position.fen.split_whitespace().map(str::to_owned).collect();

    if let Some(placement) = fields.first_mut() {
        if !format.show_promoted {
            placement.retain(|ch| ch != '~');
        }
    }

    if format.shredder && fields.len() > 2 {
        let board = board_field(&position.fen).replace('~', "");
        fields[2] = shredder_castling(&board, &fields[2]);
    }

    if format.en_passant == EnPassantStyle::Legal
        && !position.en_passant_capturable
        && fields.len() > 3
    {
        fields[3] = "-".to_owned();
    }

    fields.join(" ")
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
