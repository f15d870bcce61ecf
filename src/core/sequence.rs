use crate::{
    constants::{DEFAULT_INSERTION_LENGTH, LARGE_INSERTION_WARN_LENGTH, NUCLEOTIDES},
    core::variant::InfoMap,
};
use rand::Rng;

/// Draws `length` uniform, independent bases from `{A,C,G,T}`.
///
/// A non-positive length yields an empty sequence.
pub fn random_sequence<R: Rng>(length: i64, rng: &mut R) -> String {
    if is_oversized_insertion(length) {
        log::warn!("Synthesizing an insertion sequence of {length} bases");
    }
    let length = usize::try_from(length).unwrap_or(0);
    (0..length)
        .map(|_| NUCLEOTIDES[rng.random_range(0..NUCLEOTIDES.len())] as char)
        .collect()
}

pub fn is_oversized_insertion(length: i64) -> bool {
    length > LARGE_INSERTION_WARN_LENGTH
}

/// Placeholder bases for an insertion.
///
/// Sources are tried in order: an explicit `SEQ`, a random sequence of
/// `|SVLEN|` bases, a random sequence spanning `pos..=END`, and finally a
/// random sequence of the default insertion length. `SVLEN` of `.` or `0` and
/// values that do not parse as integers fall through to the next source.
pub fn synthesize_insertion_sequence<R: Rng>(
    pos: i64,
    info: &InfoMap,
    rng: &mut R,
) -> String {
    if let Some(seq) = info.get_text("SEQ") {
        return seq.to_string();
    }

    if let Some(svlen) = info.get_text("SVLEN").filter(|v| *v != "." && *v != "0") {
        match info.get_integer("SVLEN") {
            Some(length) => return random_sequence(length.saturating_abs(), rng),
            None => log::debug!("Ignoring non-integer SVLEN={svlen} at position {pos}"),
        }
    }

    if let Some(end) = info.get_text("END").filter(|v| *v != ".") {
        match info.get_integer("END") {
            Some(end) => return random_sequence(end.saturating_sub(pos).saturating_add(1), rng),
            None => log::debug!("Ignoring non-integer END={end} at position {pos}"),
        }
    }

    random_sequence(DEFAULT_INSERTION_LENGTH, rng)
}
