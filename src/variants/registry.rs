//! Static variant registry.
//!
//! Maps user-facing variant names onto the descriptor table. The table is a
//! `static` slice built at compile time, so every descriptor lives for the
//! whole process and is handed out as `&'static`.

use crate::errors::{TrackerError, TrackerResult};
use crate::variants::descriptor::{ResolvedVariant, VariantDescriptor};

const CHESS960_SUFFIX: &str = "960";

/// Historical or display names rewritten before lookup.
const ALIASES: &[(&str, &str)] = &[
    ("threecheck", "3check"),
    ("fivecheck", "5check"),
    ("chess", "standard"),
    ("normal", "standard"),
    ("koth", "kingofthehill"),
];

static VARIANTS: &[VariantDescriptor] = &[
    // Chess family
    VariantDescriptor::chess_family("standard", "chess"),
    VariantDescriptor::chess_family("crazyhouse", "crazyhouse").with_holdings(),
    VariantDescriptor::chess_family("placement", "placement").with_holdings(),
    VariantDescriptor::chess_family("bughouse", "bughouse").with_holdings(),
    VariantDescriptor::chess_family("loop", "loop").with_holdings(),
    VariantDescriptor::chess_family("pocketknight", "pocketknight").with_holdings(),
    VariantDescriptor::chess_family("atomic", "atomic"),
    VariantDescriptor::chess_family("antichess", "antichess"),
    VariantDescriptor::chess_family("giveaway", "giveaway"),
    VariantDescriptor::chess_family("suicide", "suicide"),
    VariantDescriptor::chess_family("losers", "losers"),
    VariantDescriptor::chess_family("3check", "3check"),
    VariantDescriptor::chess_family("5check", "5check"),
    VariantDescriptor::chess_family("kingofthehill", "kingofthehill"),
    VariantDescriptor::chess_family("racingkings", "racingkings"),
    VariantDescriptor::chess_family("horde", "horde"),
    VariantDescriptor::chess_family("extinction", "extinction"),
    VariantDescriptor::chess_family("twokings", "twokings"),
    VariantDescriptor::chess_family("knightmate", "knightmate"),
    VariantDescriptor::chess_family("duck", "duck"),
    VariantDescriptor::chess_family("spartan", "spartan"),
    VariantDescriptor::chess_family("hoppelpoppel", "hoppelpoppel"),
    // Large boards and fairy pieces
    VariantDescriptor::chess_family("capablanca", "capablanca"),
    VariantDescriptor::chess_family("capahouse", "capahouse").with_holdings(),
    VariantDescriptor::chess_family("gothic", "gothic"),
    VariantDescriptor::chess_family("seirawan", "seirawan").with_holdings(),
    VariantDescriptor::chess_family("shouse", "shouse").with_holdings(),
    VariantDescriptor::chess_family("grand", "grand"),
    VariantDescriptor::chess_family("grandhouse", "grandhouse").with_holdings(),
    VariantDescriptor::chess_family("shako", "shako"),
    VariantDescriptor::chess_family("shogun", "shogun").with_holdings(),
    VariantDescriptor::chess_family("orda", "orda"),
    VariantDescriptor::chess_family("ordamirror", "ordamirror"),
    VariantDescriptor::chess_family("synochess", "synochess"),
    VariantDescriptor::chess_family("shinobi", "shinobi").with_holdings(),
    VariantDescriptor::chess_family("empire", "empire"),
    VariantDescriptor::chess_family("chak", "chak"),
    VariantDescriptor::chess_family("chennis", "chennis").with_holdings(),
    // Southeast Asian
    VariantDescriptor::chess_family("makruk", "makruk")
        .with_counting()
        .with_promoted_marks(),
    VariantDescriptor::chess_family("makpong", "makpong")
        .with_counting()
        .with_promoted_marks(),
    VariantDescriptor::chess_family("cambodian", "cambodian")
        .with_counting()
        .with_promoted_marks(),
    VariantDescriptor::chess_family("asean", "asean").with_counting(),
    VariantDescriptor::chess_family("sittuyin", "sittuyin").with_holdings(),
    VariantDescriptor::chess_family("shatranj", "shatranj"),
    // Xiangqi family
    VariantDescriptor::chess_family("xiangqi", "xiangqi"),
    VariantDescriptor::chess_family("minixiangqi", "minixiangqi"),
    VariantDescriptor::chess_family("manchu", "manchu"),
    VariantDescriptor::chess_family("janggi", "janggi"),
    // Shogi family
    VariantDescriptor::shogi_family("shogi"),
    VariantDescriptor::shogi_family("minishogi"),
    VariantDescriptor::shogi_family("kyotoshogi"),
    VariantDescriptor::shogi_family("dobutsu"),
    VariantDescriptor::shogi_family("euroshogi"),
    VariantDescriptor::shogi_family("judkinshogi"),
    VariantDescriptor::shogi_family("torishogi"),
    VariantDescriptor::shogi_family("gorogoroplus"),
];

/// Normalize a variant name to its canonical key and the 960 flag.
///
/// Lowercases, strips one trailing `960`, then rewrites known aliases. The
/// result must name a registered variant.
pub fn normalize(variant_name: &str) -> TrackerResult<(&'static str, bool)> {
    let lowered = variant_name.trim().to_ascii_lowercase();
    let (stem, is_960) = match lowered.strip_suffix(CHESS960_SUFFIX) {
        Some(stem) => (stem, true),
        None => (lowered.as_str(), false),
    };

    let key = ALIASES
        .iter()
        .find(|(alias, _)| *alias == stem)
        .map_or(stem, |(_, target)| *target);

    let descriptor =
        lookup(key).ok_or_else(|| TrackerError::UnknownVariant(variant_name.to_owned()))?;
    Ok((descriptor.canonical_key, is_960))
}

/// Look up the descriptor for an already-canonical key.
pub fn describe(canonical_key: &str) -> TrackerResult<&'static VariantDescriptor> {
    lookup(canonical_key).ok_or_else(|| TrackerError::UnknownVariant(canonical_key.to_owned()))
}

/// Normalize and describe in one step.
pub fn resolve(variant_name: &str) -> TrackerResult<ResolvedVariant> {
    let (key, suffix_960) = normalize(variant_name)?;
    let descriptor = describe(key)?;
    log::trace!("resolved variant '{variant_name}' to '{key}' (960: {suffix_960})");
    Ok(ResolvedVariant {
        descriptor,
        chess960: descriptor.is_960 || suffix_960,
    })
}

/// Every registered descriptor, in table order.
pub fn all() -> impl Iterator<Item = &'static VariantDescriptor> {
    VARIANTS.iter()
}

fn lookup(key: &str) -> Option<&'static VariantDescriptor> {
    if key.is_empty() {
        return None;
    }
    VARIANTS.iter().find(|descriptor| descriptor.canonical_key == key)
}
