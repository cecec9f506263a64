use std::sync::Arc;

use fairy_tracker::errors::TrackerError;
use fairy_tracker::oracle::scripted_oracle::{ScriptedOracle, ScriptedPosition};
use fairy_tracker::tracker::position_tracker::PositionTracker;
use fairy_tracker::tracker::tracker_types::{
    Color, EnPassantStyle, FenDialect, NewGameParams, SerializeOptions,
};
use fairy_tracker::variants::descriptor::VariantDescriptor;
use fairy_tracker::variants::registry;

const CHESS_START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const ZH_START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR[] w KQkq - 0 1";
const CHESS960_START: &str = "bqnbrkrn/pppppppp/8/8/8/8/PPPPPPPP/BQNBRKRN w KQkq - 0 1";
const SHOGI_START: &str = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL[-] w 0 1";
const SHOGI_SFEN: &str = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";
const XIANGQI_START: &str =
    "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1";
const MAKRUK_START: &str = "rnsmksnr/8/pppppppp/8/8/PPPPPPPP/8/RNSKMSNR w - - 0 1";

const XIANGQI_FAMILY: &[&str] = &["xiangqi", "minixiangqi", "manchu", "janggi"];

/// A start position shaped like the variant's family: board size, holdings
/// and number of trailing fields all differ.
fn family_start(descriptor: &VariantDescriptor) -> &'static str {
    if descriptor.dialect == FenDialect::Sfen {
        SHOGI_START
    } else if XIANGQI_FAMILY.contains(&descriptor.canonical_key) {
        XIANGQI_START
    } else if descriptor.counting {
        MAKRUK_START
    } else if descriptor.holdings {
        ZH_START
    } else {
        CHESS_START
    }
}

fn with_black_to_move(start: &str) -> String {
    start.replacen(" w ", " b ", 1)
}

/// The family start of every registered variant, all with White to move.
fn every_variant_oracle() -> ScriptedOracle {
    registry::all().fold(ScriptedOracle::new(), |oracle, descriptor| {
        oracle.with_start(descriptor.oracle_id, family_start(descriptor))
    })
}

#[test]
fn every_variant_starts_with_white_to_move() {
    let oracle = Arc::new(every_variant_oracle());
    for descriptor in registry::all() {
        let tracker = PositionTracker::for_variant(
            descriptor.canonical_key,
            oracle.clone(),
            NewGameParams::default(),
        )
        .unwrap_or_else(|err| panic!("{} should build: {err}", descriptor.canonical_key));
        assert_eq!(tracker.side_to_move(), Color::White, "{}", descriptor.canonical_key);
        assert_eq!(tracker.initial_fen(), family_start(descriptor));
        assert!(std::ptr::eq(tracker.descriptor(), descriptor));
    }
}

#[test]
fn every_variant_reads_black_first_starts() {
    let oracle = Arc::new(every_variant_oracle());
    for descriptor in registry::all() {
        let start = with_black_to_move(family_start(descriptor));
        let mut tracker = PositionTracker::for_variant(
            descriptor.canonical_key,
            oracle.clone(),
            NewGameParams::from_fen(start.clone()),
        )
        .unwrap_or_else(|err| panic!("{} should build: {err}", descriptor.canonical_key));
        assert_eq!(tracker.initial_fen(), start);
        assert_eq!(tracker.side_to_move(), Color::Black, "{}", descriptor.canonical_key);

        tracker.push_native("a1a2").expect("a1a2 should push");
        assert_eq!(tracker.side_to_move(), Color::White);
        assert_eq!(tracker.root().side_to_move(), Color::Black);
    }
}

#[test]
fn black_first_oracle_default_is_adopted() {
    let xiangqi_black = with_black_to_move(XIANGQI_START);
    let oracle = Arc::new(ScriptedOracle::new().with_start("xiangqi", &xiangqi_black));
    let tracker = PositionTracker::for_variant("xiangqi", oracle, NewGameParams::default())
        .expect("xiangqi tracker should build");
    assert_eq!(tracker.initial_fen(), xiangqi_black);
    assert_eq!(tracker.initial_side(), Color::Black);
    assert_eq!(tracker.side_to_move(), Color::Black);
}

#[test]
fn crazyhouse_two_half_moves_return_to_white() {
    let oracle = Arc::new(ScriptedOracle::new().with_start("crazyhouse", ZH_START));
    let mut tracker = PositionTracker::for_variant("crazyhouse", oracle, NewGameParams::default())
        .expect("crazyhouse tracker should build");

    tracker.push_native("e2e4").expect("e2e4 should push");
    tracker.push_native("e7e5").expect("e7e5 should push");

    let history: Vec<&str> = tracker.move_history().iter().map(|mv| mv.as_str()).collect();
    assert_eq!(history, ["e2e4", "e7e5"]);
    assert_eq!(tracker.side_to_move(), Color::White);
}

#[test]
fn side_to_move_parity_holds_for_any_push_count() {
    let oracle = Arc::new(ScriptedOracle::new().with_start("chess", CHESS_START));
    let mut tracker = PositionTracker::for_variant("standard", oracle, NewGameParams::default())
        .expect("standard tracker should build");
    let initial = tracker.side_to_move();

    for k in 1..=12usize {
        tracker.push_native("a1a1").expect("native push should succeed");
        let expected = if k % 2 == 1 { initial.opposite() } else { initial };
        assert_eq!(tracker.side_to_move(), expected);
    }
    for _ in 0..12 {
        tracker.pop().expect("pop should succeed");
    }
    assert_eq!(tracker.side_to_move(), initial);
    assert_eq!(tracker.pop(), Err(TrackerError::EmptyHistory));
}

#[test]
fn shredder_castling_differs_in_chess960() {
    let oracle = Arc::new(ScriptedOracle::new().with_start("chess", CHESS960_START));
    let tracker = PositionTracker::for_variant("standard960", oracle, NewGameParams::default())
        .expect("standard960 tracker should build");
    assert!(tracker.chess960());

    let plain = tracker
        .fen(&SerializeOptions::default())
        .expect("start position should serialize");
    let shredder = tracker
        .fen(&SerializeOptions::shredder())
        .expect("start position should serialize");

    assert_eq!(plain, CHESS960_START);
    assert_eq!(shredder, "bqnbrkrn/pppppppp/8/8/8/8/PPPPPPPP/BQNBRKRN w GEge - 0 1");
    assert_ne!(plain, shredder);
}

#[test]
fn en_passant_style_is_forwarded() {
    let after = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
    let oracle = Arc::new(
        ScriptedOracle::new().with_start("chess", CHESS_START).with_position(
            "chess",
            CHESS_START,
            &["e2e4"],
            ScriptedPosition::new(after).with_uncapturable_en_passant(),
        ),
    );
    let mut tracker = PositionTracker::for_variant("standard", oracle, NewGameParams::default())
        .expect("standard tracker should build");
    tracker.push_native("e2e4").expect("e2e4 should push");

    let legal = tracker
        .fen(&SerializeOptions::default())
        .expect("position should serialize");
    assert_eq!(legal.split_whitespace().nth(3), Some("-"));

    let permissive = SerializeOptions {
        en_passant: EnPassantStyle::Permissive,
        ..SerializeOptions::default()
    };
    assert_eq!(tracker.fen(&permissive).as_deref(), Ok(after));
}

#[test]
fn shogi_serializes_in_its_own_dialect() {
    let oracle = Arc::new(ScriptedOracle::new().with_start("shogi", SHOGI_START).with_position(
        "shogi",
        SHOGI_START,
        &[],
        ScriptedPosition::new(SHOGI_START).with_sfen(SHOGI_SFEN),
    ));
    let tracker = PositionTracker::for_variant("shogi", oracle, NewGameParams::default())
        .expect("shogi tracker should build");

    assert_eq!(tracker.fen(&SerializeOptions::default()).as_deref(), Ok(SHOGI_SFEN));

    let as_fen = SerializeOptions {
        dialect: Some(FenDialect::Fen),
        ..SerializeOptions::default()
    };
    assert_eq!(tracker.fen(&as_fen).as_deref(), Ok(SHOGI_START));
    assert_eq!(tracker.occupied(), Ok(40));
}

#[test]
fn resolution_ignores_oracle_move_order() {
    let oracle = Arc::new(
        ScriptedOracle::new()
            .with_start("chess", CHESS_START)
            .with_position(
                "chess",
                CHESS_START,
                &[],
                ScriptedPosition::new(CHESS_START).with_legal_moves(&[
                    "a2a3", "a2a4", "b2b3", "b2b4", "c2c3", "c2c4", "d2d3", "d2d4", "e2e3",
                    "e2e4", "f2f3", "f2f4", "g2g3", "g2g4", "h2h3", "h2h4", "b1a3", "b1c3",
                    "g1f3", "g1h3",
                ]),
            )
            .with_shuffled_moves(2024),
    );
    let tracker = PositionTracker::for_variant("standard", oracle, NewGameParams::default())
        .expect("standard tracker should build");

    for _ in 0..16 {
        assert_eq!(
            tracker.parse_ambiguous("g1f3").map(|mv| mv.to_string()),
            Ok("g1f3".to_owned())
        );
        assert_eq!(
            tracker.parse_ambiguous("e2e5"),
            Err(TrackerError::NoSuchMove("e2e5".to_owned()))
        );
    }
    assert_eq!(tracker.ply(), 0);
}

#[test]
fn duplicate_renderings_are_reported_as_ambiguous() {
    let oracle = Arc::new(
        ScriptedOracle::new().with_start("chess", CHESS_START).with_position(
            "chess",
            CHESS_START,
            &[],
            ScriptedPosition::new(CHESS_START).with_legal_moves(&["e2e4", "e2e4"]),
        ),
    );
    let mut tracker = PositionTracker::for_variant("standard", oracle, NewGameParams::default())
        .expect("standard tracker should build");

    assert_eq!(
        tracker.push_ambiguous("e2e4"),
        Err(TrackerError::AmbiguousMove("e2e4".to_owned()))
    );
    assert!(tracker.move_history().is_empty());
}

#[test]
fn oracle_failures_surface_unchanged() {
    let oracle = Arc::new(ScriptedOracle::new());
    let result = PositionTracker::for_variant("xiangqi", oracle, NewGameParams::default());
    assert!(matches!(result, Err(TrackerError::Oracle(_))));
}
