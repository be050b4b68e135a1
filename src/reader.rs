use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{CustomError, Result};
use crate::model::GenotypeCall;

/// Fixed non-sample columns (CHROM through FORMAT) preceding the sample
/// columns in every row.
pub const META_COLUMNS: usize = 9;

/// A fully loaded genotype table: sample names in input column order plus
/// one call series per sample, all covering the same sites.
#[derive(Debug)]
pub struct GenotypeTable {
    samples: Vec<String>,
    series: Vec<Vec<GenotypeCall>>,
    n_sites: usize,
}

impl GenotypeTable {
    pub fn from_path(path: impl AsRef<Path>, skip_lines: usize) -> Result<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| CustomError::ReadWithPath {
            source: e,
            path: path.to_path_buf(),
        })?;
        Self::from_reader(BufReader::new(f), skip_lines)
    }

    pub fn from_reader(reader: impl BufRead, skip_lines: usize) -> Result<Self> {
        let mut lines = reader.lines();
        let mut line_num = 0;

        // Metadata block preceding the header row
        for _ in 0..skip_lines {
            match lines.next() {
                Some(Ok(_)) => line_num += 1,
                Some(Err(e)) => return Err(CustomError::ReadWithoutPath { source: e }),
                None => return Err(CustomError::TableHeaderMissing { skip_lines }),
            }
        }

        let header = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => return Err(CustomError::ReadWithoutPath { source: e }),
            None => return Err(CustomError::TableHeaderMissing { skip_lines }),
        };
        line_num += 1;

        // A skip count that lands inside the metadata block or past the
        // header surfaces here, before any cell is parsed
        let header = header.trim_end_matches('\r');
        if header.starts_with("##") {
            return Err(CustomError::TableHeaderMetadata { line_num });
        }
        if !header.starts_with('#') {
            return Err(CustomError::TableHeaderPrefix { line_num });
        }

        let columns: Vec<&str> = header.split('\t').collect();
        let n_samples = columns.len().saturating_sub(META_COLUMNS);
        if n_samples < 2 {
            return Err(CustomError::SampleCount { n_samples });
        }
        let samples: Vec<String> = columns[META_COLUMNS..]
            .iter()
            .map(|name| name.to_string())
            .collect();

        let mut series: Vec<Vec<GenotypeCall>> = vec![Vec::new(); n_samples];
        let mut n_sites = 0;
        for line in lines {
            let line = line.map_err(|e| CustomError::ReadWithoutPath { source: e })?;
            line_num += 1;
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != META_COLUMNS + n_samples {
                return Err(CustomError::SiteFields {
                    line_num,
                    n_fields: fields.len(),
                    expected: META_COLUMNS + n_samples,
                });
            }

            n_sites += 1;
            for (sample_idx, cell) in fields[META_COLUMNS..].iter().copied().enumerate() {
                let call =
                    GenotypeCall::parse(cell).ok_or_else(|| CustomError::MalformedGenotype {
                        sample: samples[sample_idx].clone(),
                        site: n_sites,
                        token: cell.to_string(),
                    })?;
                series[sample_idx].push(call);
            }
        }

        Ok(Self {
            samples,
            series,
            n_sites,
        })
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    pub fn n_samples(&self) -> usize {
        self.samples.len()
    }

    pub fn n_sites(&self) -> usize {
        self.n_sites
    }

    /// One sample's calls, one per site in row order.
    pub fn series(&self, sample_idx: usize) -> &[GenotypeCall] {
        &self.series[sample_idx]
    }
}
