use crate::{error::SvhapError, utils::util::Result};

#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub enum SvType {
    INSERTION,
    DELETION,
    INVERSION,
    DUPLICATION,
    TRANSLOCATION,
}

impl SvType {
    pub fn from_u8(bytes: &[u8]) -> Result<Self> {
        match bytes {
            b"INS" => Ok(SvType::INSERTION),
            b"DEL" => Ok(SvType::DELETION),
            b"INV" => Ok(SvType::INVERSION),
            b"DUP" => Ok(SvType::DUPLICATION),
            b"TRA" => Ok(SvType::TRANSLOCATION),
            _ => Err(SvhapError::InvalidSvtype {
                value: String::from_utf8_lossy(bytes).into_owned(),
            }),
        }
    }
}

impl std::str::FromStr for SvType {
    type Err = SvhapError;
    fn from_str(s: &str) -> Result<Self> {
        Self::from_u8(s.as_bytes())
    }
}

impl std::fmt::Display for SvType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SvType::INSERTION => write!(f, "INS"),
            SvType::DELETION => write!(f, "DEL"),
            SvType::INVERSION => write!(f, "INV"),
            SvType::DUPLICATION => write!(f, "DUP"),
            SvType::TRANSLOCATION => write!(f, "TRA"),
        }
    }
}
