use crate::{
    cli::ConvertArgs,
    core::{
        bed_entry::{build_bed_entry, BuildResult},
        stats::RunStats,
        variant::VariantRecord,
        zygosity::Zygosity,
    },
    error::SvhapError,
    io::{
        bed_writer::{HaplotypeWriters, OutputPaths},
        conversion_log::ConversionLog,
        vcf_reader::{open_vcf_reader, vcf_lines, VcfLine},
    },
    utils::util::Result,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::io::{BufRead, Write};


/// Streams VCF data lines into haplotype BED entries.
pub struct Converter<'a, R: Rng, W: Write, L: Write> {
    rng: &'a mut R,
    homozygous_ratio: f64,
    writers: &'a mut HaplotypeWriters<W>,
    log: &'a mut ConversionLog<L>,
    stats: RunStats,
}

impl<'a, R: Rng, W: Write, L: Write> Converter<'a, R, W, L> {
    pub fn new(
        rng: &'a mut R,
        homozygous_ratio: f64,
        writers: &'a mut HaplotypeWriters<W>,
        log: &'a mut ConversionLog<L>,
    ) -> Self {
        Self {
            rng,
            homozygous_ratio,
            writers,
            log,
            stats: RunStats::new(),
        }
    }

    /// Handles one non-header VCF line. Unusable lines are logged and skipped;
    /// only write failures are returned as errors.
    pub fn process_line(&mut self, line: &str) -> Result<()> {
        self.stats.total += 1;

        let record = match VariantRecord::from_line(line) {
            Ok(record) => record,
            Err(SvhapError::MissingSvtype) => {
                return self.log.warn("No SVTYPE found in line", line);
            }
            Err(e) => {
                log::debug!("Skipping record: {e}");
                return self.log.warn("Could not parse line", line);
            }
        };

        let zygosity = Zygosity::draw(self.rng, self.homozygous_ratio);
        if zygosity.is_homozygous() {
            self.stats.homozygous += 1;
        } else {
            self.stats.heterozygous += 1;
        }

        match build_bed_entry(&record, zygosity, self.rng) {
            BuildResult::Entry(entry) => {
                log::trace!("{}:{} ({zygosity}) -> {entry}", record.chrom, record.pos);
                self.writers.write_entry(&entry, zygosity)?;
                self.stats.record_processed(record.svtype());
            }
            BuildResult::Skipped(reason) => {
                log::debug!("Skipping {}:{}: {reason}", record.chrom, record.pos);
                self.log.warn("Could not process line", line)?;
            }
        }
        Ok(())
    }

    /// Counts and logs a data line that could not be decoded as text.
    pub fn process_invalid_line(&mut self, line: &str) -> Result<()> {
        self.stats.total += 1;
        self.log.warn("Could not parse line", line)
    }

    pub fn finish(self) -> RunStats {
        self.stats
    }
}

/// Converts every data line of `reader`, then appends the statistics summary to `log`.
pub fn convert_stream<B, R, W, L>(
    reader: B,
    rng: &mut R,
    homozygous_ratio: f64,
    writers: &mut HaplotypeWriters<W>,
    log: &mut ConversionLog<L>,
) -> Result<RunStats>
where
    B: BufRead,
    R: Rng,
    W: Write,
    L: Write,
{
    let mut converter = Converter::new(rng, homozygous_ratio, writers, log);
    for line in vcf_lines(reader) {
        match line? {
            VcfLine::Header => {}
            VcfLine::Data(line) => converter.process_line(&line)?,
            VcfLine::Invalid(line) => converter.process_invalid_line(&line)?,
        }
    }
    let stats = converter.finish();

    writers.flush()?;
    log.write_summary(&stats)?;
    Ok(stats)
}

pub fn convert(args: ConvertArgs) -> Result<()> {
    let paths = OutputPaths::from_prefix(&args.output_prefix);
    log::debug!("Output files: {:?}", paths);

    let reader = open_vcf_reader(&args.input_vcf)?;
    let mut writers = HaplotypeWriters::create(&paths)?;
    let mut conversion_log = ConversionLog::create(&paths.log)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    log::info!(
        "Converting {} (homozygous ratio {})",
        args.input_vcf.display(),
        args.homozygous_ratio
    );
    let stats = convert_stream(
        reader,
        &mut rng,
        args.homozygous_ratio,
        &mut writers,
        &mut conversion_log,
    )?;

    log::info!(
        "Processed {} of {} variants ({} homozygous, {} heterozygous)",
        stats.processed,
        stats.total,
        stats.homozygous,
        stats.heterozygous
    );
    if conversion_log.warnings() > 0 {
        log::warn!(
            "{} input lines were skipped, see {}",
            conversion_log.warnings(),
            paths.log.display()
        );
    }
    Ok(())
}
