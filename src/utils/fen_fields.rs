//! Field-level helpers for serialized positions.
//!
//! The tracker treats positions as opaque, so these helpers only ever look at
//! single whitespace-delimited fields: the side-to-move field at construction
//! and the board-placement field for piece counting.

use crate::errors::{TrackerError, TrackerResult};
use crate::tracker::tracker_types::Color;

/// Widest empty-square run accepted while expanding a rank.
const MAX_RANK_WIDTH: usize = 64;

/// Parse the second field (`w` / `b`) of a position string.
pub fn parse_side_to_move(fen: &str) -> TrackerResult<Color> {
    match fen.split_whitespace().nth(1) {
        Some("w") => Ok(Color::White),
        Some("b") => Ok(Color::Black),
        _ => Err(TrackerError::MalformedPosition(fen.to_owned())),
    }
}

/// The board-placement field with any bracketed holdings cut off.
pub fn board_field(fen: &str) -> &str {
    let placement = fen.split_whitespace().next().unwrap_or_default();
    match placement.find('[') {
        Some(idx) => &placement[..idx],
        None => placement,
    }
}

/// Number of pieces on the board: every letter in the placement field.
pub fn count_board_pieces(fen: &str) -> usize {
    board_field(fen).chars().filter(|ch| ch.is_alphabetic()).count()
}

/// Number of pieces in hand.
///
/// Reads the bracketed `[...]` holdings of FEN-style positions, or the third
/// (hand) field of SFEN positions, where a count may prefix a piece letter.
pub fn count_holdings(fen: &str, sfen: bool) -> usize {
    if sfen {
        let hand = fen.split_whitespace().nth(2).unwrap_or("-");
        return count_sfen_hand(hand);
    }

    let placement = fen.split_whitespace().next().unwrap_or_default();
    let Some(open) = placement.find('[') else {
        return 0;
    };
    let close = placement[open..].find(']').map_or(placement.len(), |idx| open + idx);
    placement[open + 1..close]
        .chars()
        .filter(|ch| ch.is_alphabetic())
        .count()
}

fn count_sfen_hand(hand: &str) -> usize {
    if hand == "-" {
        return 0;
    }

    let mut total = 0usize;
    let mut pending = 0usize;
    for ch in hand.chars() {
        if let Some(digit) = ch.to_digit(10) {
            match pending.checked_mul(10).and_then(|p| p.checked_add(digit as usize)) {
                Some(next) => pending = next,
                None => break,
            }
        } else if ch.is_alphabetic() {
            total = total.saturating_add(pending.max(1));
            pending = 0;
        }
    }
    total
}

/// Rewrite a `KQkq`-style castling field in Shredder (rook file) notation.
///
/// `K`/`Q` pick the outermost rook on the king's h-side / a-side of the back
/// rank. Letters already naming a file, and rights whose rook cannot be
/// found, are kept as they are.
pub fn shredder_castling(board: &str, castling: &str) -> String {
    if castling == "-" {
        return castling.to_owned();
    }

    let ranks: Vec<&str> = board.split('/').collect();
    let white_rank = ranks.last().map(|rank| expand_rank(rank)).unwrap_or_default();
    let black_rank = ranks.first().map(|rank| expand_rank(rank)).unwrap_or_default();

    castling
        .chars()
        .map(|right| match right {
            'K' => rook_file(&white_rank, 'K', 'R', true)
                .map_or(right, |f| f.to_ascii_uppercase()),
            'Q' => rook_file(&white_rank, 'K', 'R', false)
                .map_or(right, |f| f.to_ascii_uppercase()),
            'k' => rook_file(&black_rank, 'k', 'r', true).unwrap_or(right),
            'q' => rook_file(&black_rank, 'k', 'r', false).unwrap_or(right),
            other => other,
        })
        .collect()
}

/// One rank as a vector of squares, `None` for empty squares.
///
/// Expansion stops at the first empty-square run wider than
/// `MAX_RANK_WIDTH`; the squares read so far are returned.
fn expand_rank(rank: &str) -> Vec<Option<char>> {
    let mut squares = Vec::new();
    let mut empty_run = 0usize;

    for ch in rank.chars() {
        if let Some(digit) = ch.to_digit(10) {
            match empty_run.checked_mul(10).and_then(|r| r.checked_add(digit as usize)) {
                Some(next) if next <= MAX_RANK_WIDTH => empty_run = next,
                _ => return squares,
            }
            continue;
        }
        squares.extend(std::iter::repeat(None).take(empty_run));
        empty_run = 0;
        if ch.is_alphabetic() {
            squares.push(Some(ch));
        }
    }
    squares.extend(std::iter::repeat(None).take(empty_run));
    squares
}

fn rook_file(rank: &[Option<char>], king: char, rook: char, king_side: bool) -> Option<char> {
    let king_file = rank.iter().position(|sq| *sq == Some(king))?;
    let rook_file = if king_side {
        rank.iter().rposition(|sq| *sq == Some(rook)).filter(|f| *f > king_file)
    } else {
        rank.iter().position(|sq| *sq == Some(rook)).filter(|f| *f < king_file)
    }?;
    u8::try_from(rook_file).ok().map(|file| char::from(b'a' + file))
}
