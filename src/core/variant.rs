use crate::{
    constants::{VCF_INFO_INDEX, VCF_MIN_FIELDS},
    error::SvhapError,
    utils::util::{parse_info_integer, Result},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoValue {
    Text(String),
    Flag,
}

impl InfoValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            InfoValue::Text(value) => Some(value),
            InfoValue::Flag => None,
        }
    }
}

/// INFO column as an insertion-ordered key/value list.
///
/// A key seen twice keeps its first position but takes the later value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoMap {
    entries: Vec<(String, InfoValue)>,
}

impl InfoMap {
    pub fn parse(info_field: &str) -> Self {
        let mut info = InfoMap::default();
        for token in info_field.split(';').filter(|token| !token.is_empty()) {
            match token.split_once('=') {
                Some((key, value)) => info.insert(key, InfoValue::Text(value.to_string())),
                None => info.insert(token, InfoValue::Flag),
            }
        }
        info
    }

    pub fn insert(&mut self, key: &str, value: InfoValue) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&InfoValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Text value of `key`; flags count as absent.
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(InfoValue::as_text)
    }

    /// Integer value of `key`, or `None` when absent, a flag, `.` or not an integer.
    pub fn get_integer(&self, key: &str) -> Option<i64> {
        self.get_text(key).and_then(parse_info_integer)
    }
}

/// One VCF data line. The chromosome is kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRecord {
    pub chrom: String,
    pub pos: i64,
    pub id: String,
    pub ref_allele: String,
    pub alt: String,
    pub info: InfoMap,
}

impl VariantRecord {
    /// Parses a tab-separated VCF data line. Header lines must be filtered by the caller.
    ///
    /// Fails with [`SvhapError::MalformedRecord`] for short lines or a non-integer
    /// POS, and with [`SvhapError::MissingSvtype`] when INFO carries no SVTYPE value.
    pub fn from_line(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\n', '\r']);
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < VCF_MIN_FIELDS {
            return Err(SvhapError::malformed(format!(
                "expected at least {} tab-separated fields, found {}",
                VCF_MIN_FIELDS,
                fields.len()
            )));
        }

        let pos = fields[1]
            .trim()
            .parse::<i64>()
            .map_err(|e| SvhapError::malformed(format!("invalid POS {:?}: {e}", fields[1])))?;

        let info = InfoMap::parse(fields[VCF_INFO_INDEX]);
        if info.get_text("SVTYPE").map_or(true, str::is_empty) {
            return Err(SvhapError::MissingSvtype);
        }

        Ok(VariantRecord {
            chrom: fields[0].to_string(),
            pos,
            id: fields[2].to_string(),
            ref_allele: fields[3].to_string(),
            alt: fields[4].to_string(),
            info,
        })
    }

    pub fn svtype(&self) -> &str {
        self.info.get_text("SVTYPE").unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_parse_flags_and_values() {
        let info = InfoMap::parse("SVTYPE=DEL;IMPRECISE;SVLEN=-500;END=1500");
        assert_eq!(info.entries.len(), 4);
        assert_eq!(info.get_text("SVTYPE"), Some("DEL"));
        assert_eq!(info.get("IMPRECISE"), Some(&InfoValue::Flag));
        assert_eq!(info.get_text("IMPRECISE"), None);
        assert_eq!(info.get_integer("SVLEN"), Some(-500));
        assert_eq!(info.get_integer("END"), Some(1500));
        assert!(info.get("SEQ").is_none());
    }

    #[test]
    fn test_info_parse_splits_on_first_equals() {
        let info = InfoMap::parse("NOTE=a=b;SVTYPE=INS");
        assert_eq!(info.get_text("NOTE"), Some("a=b"));
    }

    #[test]
    fn test_info_parse_duplicate_key_keeps_order_takes_last_value() {
        let info = InfoMap::parse("END=10;SVTYPE=DEL;END=20");
        let keys: Vec<&str> = info.entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["END", "SVTYPE"]);
        assert_eq!(info.get_integer("END"), Some(20));
    }

    #[test]
    fn test_info_parse_ignores_empty_tokens() {
        assert!(InfoMap::parse("").entries.is_empty());
        let info = InfoMap::parse("SVTYPE=DEL;;");
        assert_eq!(info.entries.len(), 1);
    }

    #[test]
    fn test_from_line() -> Result<()> {
        let record = VariantRecord::from_line(
            "chr1\t1000\tsv1\tN\t<DEL>\t.\tPASS\tSVTYPE=DEL;SVLEN=500\tGT\t0/1\n",
        )?;
        assert_eq!(record.chrom, "chr1");
        assert_eq!(record.pos, 1000);
        assert_eq!(record.id, "sv1");
        assert_eq!(record.ref_allele, "N");
        assert_eq!(record.alt, "<DEL>");
        assert_eq!(record.svtype(), "DEL");
        assert_eq!(record.info.get_integer("SVLEN"), Some(500));
        Ok(())
    }

    #[test]
    fn test_from_line_keeps_raw_chromosome() -> Result<()> {
        let record = VariantRecord::from_line("1\t10\t.\tN\t<INV>\t.\t.\tSVTYPE=INV")?;
        assert_eq!(record.chrom, "1");
        Ok(())
    }

    #[test]
    fn test_from_line_missing_svtype() {
        let result = VariantRecord::from_line("chr1\t1000\t.\tN\t<DEL>\t.\t.\tSVLEN=500");
        assert!(matches!(result, Err(SvhapError::MissingSvtype)));
        let result = VariantRecord::from_line("chr1\t1000\t.\tN\t<DEL>\t.\t.\tSVTYPE;SVLEN=5");
        assert!(matches!(result, Err(SvhapError::MissingSvtype)));
        let result = VariantRecord::from_line("chr1\t1000\t.\tN\t<DEL>\t.\t.\tSVTYPE=");
        assert!(matches!(result, Err(SvhapError::MissingSvtype)));
    }

    #[test]
    fn test_from_line_malformed() {
        let result = VariantRecord::from_line("chr1\t1000\t.\tN\t<DEL>");
        assert!(matches!(result, Err(SvhapError::MalformedRecord { .. })));
        let result = VariantRecord::from_line("chr1\tabc\t.\tN\t<DEL>\t.\t.\tSVTYPE=DEL");
        assert!(matches!(result, Err(SvhapError::MalformedRecord { .. })));
    }
}
