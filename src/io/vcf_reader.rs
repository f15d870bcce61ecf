use crate::{error::SvhapError, utils::util::Result};
use flate2::read::MultiGzDecoder;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read as ioRead},
    path::Path,
};

/// A VCF line as seen by the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcfLine {
    Header,
    Data(String),
    /// Data line that is not valid UTF-8, lossily decoded for logging
    Invalid(String),
}

impl VcfLine {
    pub fn classify(line: &[u8]) -> Self {
        if line.starts_with(b"#") {
            return VcfLine::Header;
        }
        match std::str::from_utf8(line) {
            Ok(line) => VcfLine::Data(line.to_string()),
            Err(_) => VcfLine::Invalid(String::from_utf8_lossy(line).into_owned()),
        }
    }
}

/// Opens a plain or gzip-compressed (`.gz`/`.gzip`) VCF for line reading.
pub fn open_vcf_reader(path: &Path) -> Result<BufReader<Box<dyn ioRead>>> {
    fn is_gzipped(path: &Path) -> bool {
        let path_str = path.to_string_lossy().to_lowercase();
        path_str.ends_with(".gz") || path_str.ends_with(".gzip")
    }
    let file = File::open(path)
        .map_err(|error| crate::svhap_error!("Failed to open file {}: {error}", path.display()))?;
    if is_gzipped(path) {
        let gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_some() {
            Ok(BufReader::new(Box::new(gz_decoder)))
        } else {
            Err(SvhapError::InvalidGzipHeader {
                path: path.to_path_buf(),
            })
        }
    } else {
        Ok(BufReader::new(Box::new(file)))
    }
}

/// Iterates the lines of a VCF, tagging header lines. Blank lines are dropped.
///
/// Lines are read as raw bytes so a single undecodable line surfaces as
/// [`VcfLine::Invalid`] instead of ending the stream. Only read failures are errors.
pub fn vcf_lines<R: BufRead>(mut reader: R) -> impl Iterator<Item = Result<VcfLine>> {
    let mut buf = Vec::new();
    let mut line_number = 0usize;
    std::iter::from_fn(move || loop {
        buf.clear();
        line_number += 1;
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(e) => {
                return Some(Err(crate::svhap_error!(
                    "Error at VCF line {}: {}",
                    line_number,
                    e
                )))
            }
        }
        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        if buf.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        return Some(Ok(VcfLine::classify(&buf)));
    })
}
