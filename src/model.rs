#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allele {
    Index(u8),
    Missing,
}

impl Allele {
    fn parse(token: &str) -> Option<Self> {
        match token.as_bytes() {
            b"." => Some(Allele::Missing),
            &[digit] if digit.is_ascii_digit() => Some(Allele::Index(digit - b'0')),
            _ => None,
        }
    }

    fn index(self) -> Option<u8> {
        match self {
            Allele::Index(value) => Some(value),
            Allele::Missing => None,
        }
    }
}

/// One diploid genotype call: the two allele tokens recorded for one sample
/// at one site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenotypeCall {
    pub left: Allele,
    pub right: Allele,
}

impl GenotypeCall {
    /// Parses a raw table cell of the form `a/b` or `a/b:rest`, where `a` and
    /// `b` are single-digit allele indices or the `.` missing marker.
    /// Everything after the first `:` is ignored. Returns None for any other
    /// shape.
    pub fn parse(cell: &str) -> Option<Self> {
        let genotype = cell.split_once(':').map_or(cell, |(genotype, _)| genotype);
        let (left, right) = genotype.split_once('/')?;
        Some(Self {
            left: Allele::parse(left)?,
            right: Allele::parse(right)?,
        })
    }

    /// Jaccard index of the two calls' allele sets, or None if either call
    /// carries the missing marker. A homozygous call collapses to a single
    /// allele, so the union holds between 1 and 4 alleles.
    pub fn jaccard(self, other: Self) -> Option<f64> {
        let (ours, n_ours) = self.allele_set()?;
        let (theirs, n_theirs) = other.allele_set()?;
        let ours = &ours[..n_ours];
        let theirs = &theirs[..n_theirs];

        let intersection = ours.iter().filter(|allele| theirs.contains(allele)).count();
        let union = n_ours + n_theirs - intersection;
        Some(intersection as f64 / union as f64)
    }

    fn allele_set(self) -> Option<([u8; 2], usize)> {
        let left = self.left.index()?;
        let right = self.right.index()?;
        if left == right {
            Some(([left, left], 1))
        } else {
            Some(([left, right], 2))
        }
    }
}

/// Aggregate of one sample pair: mean Jaccard similarity over the usable
/// sites (None if no site was usable), plus the usable and missing tallies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairwiseResult {
    pub mean: Option<f64>,
    pub usable: u64,
    pub missing: u64,
}
