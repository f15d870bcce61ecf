use crate::core::chrom::normalize_chromosome;
use once_cell::sync::Lazy;
use regex::Regex;

/// Partner locus of a translocation, as encoded in the ALT breakend notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointTarget {
    pub chrom: String,
    pub pos: i64,
}

impl BreakpointTarget {
    /// A target is usable only with a non-empty contig and a non-zero position.
    pub fn is_resolved(&self) -> bool {
        !self.chrom.is_empty() && self.pos != 0
    }
}

// Tried in order, first match wins:
//   C[12:10767[  /  [Y:10136631[T
//   N[2:500]T
//   ]4:71592079]G
static BREAKEND_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"[ATCG]?\[([^:]+):(\d+)\[").expect("valid breakend pattern"),
        Regex::new(r"\[([^:]+):(\d+)\][ATCG]?").expect("valid breakend pattern"),
        Regex::new(r"\]([^:]+):(\d+)\][ATCG]?").expect("valid breakend pattern"),
    ]
});

/// Extracts the partner locus from a translocation ALT field.
///
/// Returns `None` when no notation matches, or when the matched position does
/// not fit in an `i64`. The partner chromosome is normalized.
pub fn parse_breakpoint(alt: &str) -> Option<BreakpointTarget> {
    let captures = BREAKEND_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(alt))?;
    let pos = match captures[2].parse::<i64>() {
        Ok(pos) => pos,
        Err(e) => {
            log::debug!("Breakend position {:?} in ALT {alt:?}: {e}", &captures[2]);
            return None;
        }
    };
    Some(BreakpointTarget {
        chrom: normalize_chromosome(&captures[1]),
        pos,
    })
}
