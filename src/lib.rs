//! Crate root module declarations for the fairy_tracker project.
//!
//! Tracks games of chess-like variants (chess, crazyhouse, shogi, xiangqi,
//! makruk, seirawan and many more) on top of an external move-generation
//! oracle. The crate owns the game record and the notation layer; the
//! oracle owns the rules.
//!
//! ```
//! use std::sync::Arc;
//!
//! use fairy_tracker::oracle::scripted_oracle::ScriptedOracle;
//! use fairy_tracker::tracker::position_tracker::PositionTracker;
//! use fairy_tracker::tracker::tracker_types::{Color, NewGameParams};
//!
//! let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR[] w KQkq - 0 1";
//! let oracle = Arc::new(ScriptedOracle::new().with_start("crazyhouse", start));
//!
//! let mut game = PositionTracker::for_variant("crazyhouse", oracle, NewGameParams::default())?;
//! game.push_native("e2e4")?;
//! game.push_native("e7e5")?;
//! assert_eq!(game.side_to_move(), Color::White);
//! # Ok::<(), fairy_tracker::errors::TrackerError>(())
//! ```

pub mod errors;

pub mod moves {
    pub mod native_move;
}

pub mod variants {
    pub mod descriptor;
    pub mod registry;
}

pub mod oracle {
    pub mod oracle_adapter;
    pub mod oracle_trait;
    pub mod scripted_oracle;
}

pub mod tracker {
    pub mod position_tracker;
    pub mod tracker_types;
}

pub mod utils {
    pub mod fen_fields;
}
