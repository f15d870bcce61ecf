use crate::{
    constants::{BED_FLAG, DEFAULT_SV_LENGTH, DUPLICATION_COPY_NUMBER},
    core::{
        breakpoint::{parse_breakpoint, BreakpointTarget},
        chrom::normalize_chromosome,
        sequence::synthesize_insertion_sequence,
        svtype::SvType,
        variant::VariantRecord,
        zygosity::Zygosity,
    },
};
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BedCategory {
    Deletion,
    Insertion,
    Inversion,
    TandemDuplication,
    TranslocationCopyPaste,
}

impl fmt::Display for BedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BedCategory::Deletion => "deletion",
            BedCategory::Insertion => "insertion",
            BedCategory::Inversion => "inversion",
            BedCategory::TandemDuplication => "tandem duplication",
            BedCategory::TranslocationCopyPaste => "translocation copy-paste",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaplotypeTag {
    H1,
    H2,
}

impl HaplotypeTag {
    /// Only a variant placed on haplotype 1 alone is tagged `h1`; homozygous
    /// translocations are tagged `h2`.
    pub fn from_zygosity(zygosity: Zygosity) -> Self {
        match zygosity {
            Zygosity::Haplotype1 => HaplotypeTag::H1,
            Zygosity::Haplotype2 | Zygosity::Both => HaplotypeTag::H2,
        }
    }
}

impl fmt::Display for HaplotypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HaplotypeTag::H1 => write!(f, "h1"),
            HaplotypeTag::H2 => write!(f, "h2"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BedPayload {
    None,
    Sequence(String),
    CopyNumber(u32),
    Translocation {
        tag: HaplotypeTag,
        target: BreakpointTarget,
    },
}

impl fmt::Display for BedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BedPayload::None => write!(f, "None"),
            BedPayload::Sequence(seq) => f.write_str(seq),
            BedPayload::CopyNumber(n) => write!(f, "{n}"),
            BedPayload::Translocation { tag, target } => {
                write!(f, "{}:{}:{}:forward", tag, target.chrom, target.pos)
            }
        }
    }
}

/// One six-column BED line for the haplotype simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedEntry {
    pub chrom: String,
    pub start: i64,
    pub end: i64,
    pub category: BedCategory,
    pub payload: BedPayload,
    pub flag: u8,
}

impl fmt::Display for BedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.chrom, self.start, self.end, self.category, self.payload, self.flag
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    UnsupportedSvtype(String),
    UnresolvedBreakpoint(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnsupportedSvtype(svtype) => write!(f, "unsupported SVTYPE {svtype}"),
            SkipReason::UnresolvedBreakpoint(alt) => {
                write!(f, "no translocation target found in ALT {alt}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildResult {
    Entry(BedEntry),
    Skipped(SkipReason),
}

/// Builds the BED entry for `record`, dispatching on its SVTYPE.
///
/// `zygosity` only affects translocations, whose payload carries a haplotype
/// tag. The RNG is consumed for insertions lacking an explicit `SEQ`.
pub fn build_bed_entry<R: Rng>(
    record: &VariantRecord,
    zygosity: Zygosity,
    rng: &mut R,
) -> BuildResult {
    let svtype = match record.svtype().parse::<SvType>() {
        Ok(svtype) => svtype,
        Err(_) => return BuildResult::Skipped(SkipReason::UnsupportedSvtype(record.svtype().into())),
    };

    let chrom = normalize_chromosome(&record.chrom);
    match svtype {
        SvType::DELETION => interval_entry(record, chrom, BedCategory::Deletion, BedPayload::None),
        SvType::INVERSION => interval_entry(record, chrom, BedCategory::Inversion, BedPayload::None),
        SvType::DUPLICATION => interval_entry(
            record,
            chrom,
            BedCategory::TandemDuplication,
            BedPayload::CopyNumber(DUPLICATION_COPY_NUMBER),
        ),
        SvType::INSERTION => insertion_entry(record, chrom, rng),
        SvType::TRANSLOCATION => translocation_entry(record, chrom, zygosity),
    }
}

/// End coordinate of an interval SV: `END` when given, else `pos + |SVLEN|`.
pub fn resolve_interval_end(record: &VariantRecord) -> i64 {
    if let Some(end) = record.info.get_integer("END") {
        return end;
    }
    let svlen = record.info.get_integer("SVLEN").unwrap_or_else(|| {
        log::debug!(
            "No usable END or SVLEN at {}:{}, assuming length {}",
            record.chrom,
            record.pos,
            DEFAULT_SV_LENGTH
        );
        DEFAULT_SV_LENGTH
    });
    record.pos.saturating_add(svlen.saturating_abs())
}

fn interval_entry(
    record: &VariantRecord,
    chrom: String,
    category: BedCategory,
    payload: BedPayload,
) -> BuildResult {
    BuildResult::Entry(BedEntry {
        chrom,
        start: record.pos,
        end: resolve_interval_end(record),
        category,
        payload,
        flag: BED_FLAG,
    })
}

fn insertion_entry<R: Rng>(record: &VariantRecord, chrom: String, rng: &mut R) -> BuildResult {
    let sequence = synthesize_insertion_sequence(record.pos, &record.info, rng);
    BuildResult::Entry(BedEntry {
        chrom,
        start: record.pos,
        end: record.pos.saturating_add(1),
        category: BedCategory::Insertion,
        payload: BedPayload::Sequence(sequence),
        flag: BED_FLAG,
    })
}

fn translocation_entry(record: &VariantRecord, chrom: String, zygosity: Zygosity) -> BuildResult {
    let target = match parse_breakpoint(&record.alt) {
        Some(target) if target.is_resolved() => target,
        _ => return BuildResult::Skipped(SkipReason::UnresolvedBreakpoint(record.alt.clone())),
    };
    BuildResult::Entry(BedEntry {
        chrom,
        start: record.pos,
        end: record.pos,
        category: BedCategory::TranslocationCopyPaste,
        payload: BedPayload::Translocation {
            tag: HaplotypeTag::from_zygosity(zygosity),
            target,
        },
        flag: BED_FLAG,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn build(line: &str, zygosity: Zygosity) -> BuildResult {
        let record = VariantRecord::from_line(line).expect("record should parse");
        build_bed_entry(&record, zygosity, &mut StdRng::seed_from_u64(42))
    }

    fn build_line(line: &str, zygosity: Zygosity) -> String {
        match build(line, zygosity) {
            BuildResult::Entry(entry) => entry.to_string(),
            BuildResult::Skipped(reason) => panic!("unexpected skip: {reason}"),
        }
    }

    #[test]
    fn test_deletion_from_svlen() {
        assert_eq!(
            build_line(
                "chr1\t1000\t.\tN\t<DEL>\t.\t.\tSVTYPE=DEL;SVLEN=500",
                Zygosity::Haplotype1
            ),
            "chr1\t1000\t1500\tdeletion\tNone\t0"
        );
        assert_eq!(
            build_line(
                "1\t1000\t.\tN\t<DEL>\t.\t.\tSVTYPE=DEL;SVLEN=-500",
                Zygosity::Both
            ),
            "chr1\t1000\t1500\tdeletion\tNone\t0"
        );
    }

    #[test]
    fn test_deletion_end_takes_precedence() {
        assert_eq!(
            build_line(
                "chr2\t1000\t.\tN\t<DEL>\t.\t.\tSVTYPE=DEL;SVLEN=500;END=1234",
                Zygosity::Both
            ),
            "chr2\t1000\t1234\tdeletion\tNone\t0"
        );
    }

    #[test]
    fn test_interval_default_length() {
        for info in ["SVTYPE=INV", "SVTYPE=INV;SVLEN=.", "SVTYPE=INV;SVLEN=abc;END=."] {
            let line = format!("chrX\t5000\t.\tN\t<INV>\t.\t.\t{info}");
            assert_eq!(
                build_line(&line, Zygosity::Both),
                "chrX\t5000\t5100\tinversion\tNone\t0"
            );
        }
    }

    #[test]
    fn test_duplication() {
        assert_eq!(
            build_line(
                "chr3\t200\t.\tN\t<DUP>\t.\t.\tSVTYPE=DUP;END=900",
                Zygosity::Haplotype2
            ),
            "chr3\t200\t900\ttandem duplication\t2\t0"
        );
    }

    #[test]
    fn test_insertion() {
        assert_eq!(
            build_line(
                "chr4\t2000\t.\tN\t<INS>\t.\t.\tSVTYPE=INS;SEQ=ACGTACGT",
                Zygosity::Haplotype1
            ),
            "chr4\t2000\t2001\tinsertion\tACGTACGT\t0"
        );
    }

    #[test]
    fn test_insertion_end_saturates_at_max_position() {
        assert_eq!(
            build_line(
                "chr4\t9223372036854775807\t.\tN\t<INS>\t.\t.\tSVTYPE=INS;SEQ=T",
                Zygosity::Haplotype2
            ),
            format!("chr4\t{max}\t{max}\tinsertion\tT\t0", max = i64::MAX)
        );
    }

    #[test]
    fn test_insertion_synthesized_from_end() {
        let result = build(
            "chr4\t2000\t.\tN\t<INS>\t.\t.\tSVTYPE=INS;SVLEN=.;END=2050",
            Zygosity::Haplotype1,
        );
        let BuildResult::Entry(entry) = result else {
            panic!("insertion should build");
        };
        let BedPayload::Sequence(seq) = &entry.payload else {
            panic!("insertion payload should be a sequence");
        };
        assert_eq!(seq.len(), 51);
        assert!(seq.bytes().all(|b| b"ACGT".contains(&b)));
        assert_eq!((entry.start, entry.end), (2000, 2001));
    }

    #[test]
    fn test_translocation_tags() {
        let line = "chr5\t3000\t.\tN\tC[12:10767[\t.\t.\tSVTYPE=TRA";
        assert_eq!(
            build_line(line, Zygosity::Haplotype1),
            "chr5\t3000\t3000\ttranslocation copy-paste\th1:chr12:10767:forward\t0"
        );
        assert_eq!(
            build_line(line, Zygosity::Haplotype2),
            "chr5\t3000\t3000\ttranslocation copy-paste\th2:chr12:10767:forward\t0"
        );
        assert_eq!(
            build_line(line, Zygosity::Both),
            "chr5\t3000\t3000\ttranslocation copy-paste\th2:chr12:10767:forward\t0"
        );
    }

    #[test]
    fn test_translocation_unresolved() {
        for alt in ["<TRA>", "C[12:0[", "N"] {
            let line = format!("chr5\t3000\t.\tN\t{alt}\t.\t.\tSVTYPE=TRA");
            assert_eq!(
                build(&line, Zygosity::Haplotype1),
                BuildResult::Skipped(SkipReason::UnresolvedBreakpoint(alt.to_string()))
            );
        }
    }

    #[test]
    fn test_unsupported_svtype() {
        assert_eq!(
            build("chr1\t1000\t.\tN\t<FOO>\t.\t.\tSVTYPE=FOO", Zygosity::Both),
            BuildResult::Skipped(SkipReason::UnsupportedSvtype("FOO".to_string()))
        );
        assert_eq!(
            build("chr1\t1000\t.\tN\tN]2:5]\t.\t.\tSVTYPE=BND", Zygosity::Both),
            BuildResult::Skipped(SkipReason::UnsupportedSvtype("BND".to_string()))
        );
    }

    #[test]
    fn test_non_standard_contig_is_stripped() {
        assert_eq!(
            build_line(
                "chrUn_KI270302v1\t10\t.\tN\t<DEL>\t.\t.\tSVTYPE=DEL;END=20",
                Zygosity::Both
            ),
            "Un_KI270302v1\t10\t20\tdeletion\tNone\t0"
        );
    }
}
