pub mod cli;
pub mod commands;
pub mod error;

pub mod core {
    pub mod bed_entry;
    pub mod breakpoint;
    pub mod chrom;
    pub mod sequence;
    pub mod stats;
    pub mod svtype;
    pub mod variant;
    pub mod zygosity;
}

pub mod io {
    pub mod bed_writer;
    pub mod conversion_log;
    pub mod vcf_reader;
}

pub mod utils {
    pub mod util;
}

pub mod constants;

pub use constants::*;
