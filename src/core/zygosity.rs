use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zygosity {
    Both,
    Haplotype1,
    Haplotype2,
}

impl Zygosity {
    /// Draws the zygosity of a single variant.
    ///
    /// One uniform draw in `[0, 1)` below `homozygous_ratio` makes the variant
    /// homozygous; otherwise a second fair draw picks the haplotype.
    pub fn draw<R: Rng>(rng: &mut R, homozygous_ratio: f64) -> Self {
        if rng.random::<f64>() < homozygous_ratio {
            Zygosity::Both
        } else if rng.random_bool(0.5) {
            Zygosity::Haplotype1
        } else {
            Zygosity::Haplotype2
        }
    }

    pub fn is_homozygous(&self) -> bool {
        matches!(self, Zygosity::Both)
    }

    pub fn includes_haplotype1(&self) -> bool {
        matches!(self, Zygosity::Both | Zygosity::Haplotype1)
    }

    pub fn includes_haplotype2(&self) -> bool {
        matches!(self, Zygosity::Both | Zygosity::Haplotype2)
    }
}

impl fmt::Display for Zygosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zygosity::Both => write!(f, "both"),
            Zygosity::Haplotype1 => write!(f, "hap1"),
            Zygosity::Haplotype2 => write!(f, "hap2"),
        }
    }
}
