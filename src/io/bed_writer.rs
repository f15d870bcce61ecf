use crate::{
    constants::{HAPLOTYPE1_SUFFIX, HAPLOTYPE2_SUFFIX, LOG_SUFFIX},
    core::{bed_entry::BedEntry, zygosity::Zygosity},
    utils::util::Result,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

/// Paths derived from the user supplied output prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub haplotype1: PathBuf,
    pub haplotype2: PathBuf,
    pub log: PathBuf,
}

impl OutputPaths {
    pub fn from_prefix(prefix: &str) -> Self {
        Self {
            haplotype1: PathBuf::from(format!("{prefix}{HAPLOTYPE1_SUFFIX}")),
            haplotype2: PathBuf::from(format!("{prefix}{HAPLOTYPE2_SUFFIX}")),
            log: PathBuf::from(format!("{prefix}{LOG_SUFFIX}")),
        }
    }
}

/// The pair of haplotype BED streams.
pub struct HaplotypeWriters<W: Write> {
    haplotype1: W,
    haplotype2: W,
}

impl HaplotypeWriters<BufWriter<File>> {
    pub fn create(paths: &OutputPaths) -> Result<Self> {
        let open = |path: &PathBuf| -> Result<BufWriter<File>> {
            let file = File::create(path).map_err(|e| {
                crate::svhap_error!("Failed to create BED file {}: {e}", path.display())
            })?;
            Ok(BufWriter::new(file))
        };
        Ok(Self::new(open(&paths.haplotype1)?, open(&paths.haplotype2)?))
    }
}

impl<W: Write> HaplotypeWriters<W> {
    pub fn new(haplotype1: W, haplotype2: W) -> Self {
        Self {
            haplotype1,
            haplotype2,
        }
    }

    /// Writes `entry` to every haplotype selected by `zygosity`.
    pub fn write_entry(&mut self, entry: &BedEntry, zygosity: Zygosity) -> Result<()> {
        if zygosity.includes_haplotype1() {
            writeln!(self.haplotype1, "{entry}")?;
        }
        if zygosity.includes_haplotype2() {
            writeln!(self.haplotype2, "{entry}")?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.haplotype1.flush()?;
        self.haplotype2.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> (W, W) {
        (self.haplotype1, self.haplotype2)
    }
}
