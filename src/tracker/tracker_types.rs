//! Small value types shared by the tracker and the oracle boundary.

pub use crate::moves::native_move::NativeMove;
pub use crate::variants::descriptor::FenDialect;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// When the en-passant target square is written into a serialized position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnPassantStyle {
    /// Only when an en-passant capture is actually legal.
    #[default]
    Legal,
    /// Whenever the previous move was a double pawn push.
    Permissive,
}

/// Format flags forwarded verbatim to the oracle's serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FenFormat {
    pub sfen: bool,
    pub show_promoted: bool,
    pub count_started: i32,
    pub shredder: bool,
    pub en_passant: EnPassantStyle,
}

impl Default for FenFormat {
    fn default() -> Self {
        Self {
            sfen: false,
            show_promoted: false,
            count_started: 0,
            shredder: false,
            en_passant: EnPassantStyle::Legal,
        }
    }
}

/// Caller-facing serialization options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SerializeOptions {
    pub shredder: bool,
    pub en_passant: EnPassantStyle,
    /// Overrides the descriptor's promoted-piece marking when set.
    pub show_promoted: Option<bool>,
    /// Overrides the descriptor's dialect when set.
    pub dialect: Option<FenDialect>,
}

impl SerializeOptions {
    pub fn shredder() -> Self {
        Self {
            shredder: true,
            ..Self::default()
        }
    }
}

/// Construction parameters for a new game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewGameParams {
    /// Explicit starting position. `None`, `""` and `"startpos"` all mean
    /// "ask the oracle".
    pub start_fen: Option<String>,
    /// Starting value of the variant's move counter, for games resumed
    /// mid-count. Zero is the variant default.
    pub count_started: i32,
}

impl NewGameParams {
    pub fn from_fen(fen: impl Into<String>) -> Self {
        Self {
            start_fen: Some(fen.into()),
            ..Self::default()
        }
    }
}
