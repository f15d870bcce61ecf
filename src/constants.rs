pub const DEFAULT_HOMOZYGOUS_RATIO: f64 = 0.3;

// Used for DEL/INV/DUP ends when neither END nor a usable SVLEN is given
pub const DEFAULT_SV_LENGTH: i64 = 100;
pub const DEFAULT_INSERTION_LENGTH: i64 = 100;
pub const DUPLICATION_COPY_NUMBER: u32 = 2;
pub const BED_FLAG: u8 = 0;

pub const NUCLEOTIDES: &[u8; 4] = b"ATCG";
// Synthesized insertions longer than this are still built, with a warning
pub const LARGE_INSERTION_WARN_LENGTH: i64 = 10_000_000;

pub const HAPLOTYPE1_SUFFIX: &str = "_haplotype1.bed";
pub const HAPLOTYPE2_SUFFIX: &str = "_haplotype2.bed";
pub const LOG_SUFFIX: &str = "_conversion.log";

pub const VCF_MIN_FIELDS: usize = 8;
pub const VCF_INFO_INDEX: usize = 7;
