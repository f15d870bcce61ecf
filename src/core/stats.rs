use std::fmt;

/// Monotonic counters for a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub total: usize,
    pub processed: usize,
    pub homozygous: usize,
    pub heterozygous: usize,
    // First-seen order, as printed in the summary
    processed_by_type: Vec<(String, usize)>,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_processed(&mut self, svtype: &str) {
        self.processed += 1;
        match self.processed_by_type.iter_mut().find(|(t, _)| t == svtype) {
            Some((_, count)) => *count += 1,
            None => self.processed_by_type.push((svtype.to_string(), 1)),
        }
    }

    /// Looks up a counter by its category name, e.g. `total` or `processed_DEL`.
    pub fn get(&self, category: &str) -> usize {
        match category {
            "total" => self.total,
            "processed" => self.processed,
            "homozygous" => self.homozygous,
            "heterozygous" => self.heterozygous,
            _ => category
                .strip_prefix("processed_")
                .and_then(|svtype| {
                    self.processed_by_type
                        .iter()
                        .find(|(t, _)| t == svtype)
                        .map(|(_, count)| *count)
                })
                .unwrap_or(0),
        }
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nProcessing Statistics:")?;
        writeln!(f, "Total variants: {}", self.total)?;
        writeln!(f, "Processed variants: {}", self.processed)?;
        writeln!(f, "Homozygous variants: {}", self.homozygous)?;
        writeln!(f, "Heterozygous variants: {}", self.heterozygous)?;
        writeln!(f, "\nProcessed by type:")?;
        for (svtype, count) in &self.processed_by_type {
            writeln!(f, "{svtype}: {count}")?;
        }
        Ok(())
    }
}
