use once_cell::sync::Lazy;
use regex::Regex;

static STANDARD_CHROMOSOME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([1-9]|1[0-9]|2[0-2]|X|Y)$").expect("valid chromosome pattern"));

/// Canonicalizes a chromosome label to the `chr`-prefixed convention.
///
/// Every literal `chr` substring is removed first, repeating until none is
/// left. Autosomes 1-22 and X/Y get the `chr` prefix back, while any other contig (unplaced scaffolds, MT,
/// decoys) is returned in its stripped form.
///
/// # Examples
/// * `1` -> `chr1`
/// * `chrX` -> `chrX`
/// * `chrUn_KI270302v1` -> `Un_KI270302v1`
pub fn normalize_chromosome(label: &str) -> String {
    let mut stripped = label.replace("chr", "");
    while stripped.contains("chr") {
        stripped = stripped.replace("chr", "");
    }
    if STANDARD_CHROMOSOME.is_match(&stripped) {
        format!("chr{stripped}")
    } else {
        stripped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_standard_chromosomes_are_prefixed() {
        for value in (1..=22).map(|n| n.to_string()).chain(["X".into(), "Y".into()]) {
            let expected = format!("chr{value}");
            assert_eq!(normalize_chromosome(&value), expected);
            assert_eq!(normalize_chromosome(&expected), expected);
        }
    }

    #[test]
    fn test_non_standard_contigs_are_stripped() {
        assert_eq!(normalize_chromosome("chrM"), "M");
        assert_eq!(normalize_chromosome("MT"), "MT");
        assert_eq!(normalize_chromosome("chr23"), "23");
        assert_eq!(normalize_chromosome("0"), "0");
        assert_eq!(normalize_chromosome("chrUn_KI270302v1"), "Un_KI270302v1");
        assert_eq!(normalize_chromosome("GL000220.1"), "GL000220.1");
    }

    #[test]
    fn test_removal_is_not_anchored() {
        assert_eq!(normalize_chromosome("1chr"), "chr1");
        assert_eq!(normalize_chromosome("chrchr2"), "chr2");
        assert_eq!(normalize_chromosome("Chr1"), "Chr1");
        assert_eq!(normalize_chromosome("chr"), "");
        assert_eq!(normalize_chromosome("cchrhr7"), "chr7");
        assert_eq!(normalize_chromosome("cchrhrM"), "M");
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(label in "[a-zA-Z0-9_.]{0,12}") {
            let once = normalize_chromosome(&label);
            prop_assert_eq!(normalize_chromosome(&once), once);
        }

        #[test]
        fn normalization_is_idempotent_with_prefix(n in 0u32..40, prefix in "(chr)?") {
            let once = normalize_chromosome(&format!("{prefix}{n}"));
            prop_assert_eq!(normalize_chromosome(&once), once);
        }
    }
}
