use crate::error::SvhapResult;
use std::{fmt::Display, sync::Once};

pub type Result<T> = SvhapResult<T>;

#[allow(unused)]
static INIT_LOG: Once = Once::new();

#[allow(unused)]
pub fn init_logger() {
    INIT_LOG.call_once(|| {
        env_logger::builder()
            .filter_level(log::LevelFilter::Trace)
            .is_test(true)
            .init();
    });
}

pub fn handle_error_and_exit(err: impl Display) -> ! {
    log::error!("{err}");
    std::process::exit(1);
}

/// Parses an integer INFO value, taking the first entry of a comma-separated list.
///
/// Surrounding whitespace and a leading `+` are accepted. Returns `None` for
/// missing (`.`) or non-integer values so callers can fall through to their
/// next source.
pub fn parse_info_integer(value: &str) -> Option<i64> {
    let first = value.split(',').next()?.trim();
    if first.is_empty() || first == "." {
        return None;
    }
    first.parse::<i64>().ok()
}
