use crate::constants::*;
use anyhow::{anyhow, Result};
use clap::{ArgAction, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// Full version string including the crate version and git description.
///
/// # Examples
/// * `0.1.0-1ba958a-dirty` - while on a dirty branch
/// * `0.1.0-1ba958a` - with a fresh commit
/// * `0.1.0` - when built outside of a git checkout
pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    let git_describe = option_env!("VERGEN_GIT_DESCRIBE").unwrap_or_default();
    if git_describe.is_empty() || git_describe == "VERGEN_IDEMPOTENT_OUTPUT" {
        env!("CARGO_PKG_VERSION").to_string()
    } else {
        format!("{}-{}", env!("CARGO_PKG_VERSION"), git_describe)
    }
});

#[derive(Parser, Debug)]
#[command(name="svhap",
          version=&**FULL_VERSION,
          about="Structural variant VCF to haplotype BED converter",
          long_about = None,
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true
    )]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Convert(ConvertArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Convert(_) => "convert",
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(arg_required_else_help(true))]
pub struct ConvertArgs {
    /// Input VCF file (plain or gzip-compressed)
    #[arg(
        short = 'i',
        long = "input-vcf",
        value_name = "VCF",
        value_parser = check_file_exists
    )]
    pub input_vcf: PathBuf,

    /// Output prefix for the haplotype BED files and the conversion log
    #[arg(
        short = 'o',
        long = "output-prefix",
        value_name = "PREFIX",
        value_parser = check_prefix_path
    )]
    pub output_prefix: String,

    /// Fraction of variants placed on both haplotypes
    #[arg(
        long = "homozygous-ratio",
        value_name = "RATIO",
        default_value_t = DEFAULT_HOMOZYGOUS_RATIO,
        value_parser = ratio_in_range
    )]
    pub homozygous_ratio: f64,

    /// Seed for zygosity assignment and insertion sequence synthesis [default: random]
    #[arg(long = "seed", value_name = "SEED", help_heading = "Advanced")]
    pub seed: Option<u64>,
}

/// Initializes the verbosity level for logging based on the command-line arguments.
///
/// Sets up the logger with a specific verbosity level that is determined
/// by the number of occurrences of the `-v` or `--verbose` flag in the command-line arguments.
pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.module_path().unwrap_or("unknown_module"),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        return Err(anyhow!("File does not exist: {}", path.display()));
    }
    Ok(path.to_path_buf())
}

fn check_prefix_path(s: &str) -> Result<String> {
    if s.is_empty() {
        return Err(anyhow!("Output prefix must not be empty"));
    }
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(anyhow!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(s.to_string())
}

fn ratio_in_range(s: &str) -> Result<f64> {
    let ratio: f64 = s
        .parse::<f64>()
        .map_err(|_| anyhow!("`{}` is not a valid ratio", s))?;
    if !(0.0..=1.0).contains(&ratio) {
        return Err(anyhow!("Homozygous ratio must be within [0, 1], got {}", ratio));
    }
    Ok(ratio)
}
