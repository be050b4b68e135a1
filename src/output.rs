use std::io;
use std::path::Path;

use crate::error::{CustomError, Result};
use crate::matrix::SimilarityMatrices;

/// Fixed destination of the usable-site tally matrix.
pub const TALLY_FILENAME: &str = "SNP_tally.csv";
/// Fixed destination of the missing-site tally matrix.
pub const MISSING_FILENAME: &str = "missing_SNP.csv";

/// Marker written for a populated pair whose mean is undefined (zero usable
/// sites). Unset cells stay empty, so the two cases are distinguishable.
const UNDEFINED_MEAN: &str = "NA";

pub fn write_mean_matrix(matrices: &SimilarityMatrices, path: impl AsRef<Path>) -> Result<()> {
    write_matrix(matrices, path.as_ref(), |m, row, col| {
        mean_cell(m.mean(row, col))
    })
}

pub fn write_tally_matrix(matrices: &SimilarityMatrices, path: impl AsRef<Path>) -> Result<()> {
    write_matrix(matrices, path.as_ref(), |m, row, col| {
        tally_cell(m.usable(row, col))
    })
}

pub fn write_missing_matrix(matrices: &SimilarityMatrices, path: impl AsRef<Path>) -> Result<()> {
    write_matrix(matrices, path.as_ref(), |m, row, col| {
        tally_cell(m.missing(row, col))
    })
}

fn write_matrix(
    matrices: &SimilarityMatrices,
    path: &Path,
    cell: impl Fn(&SimilarityMatrices, usize, usize) -> String,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    write_cells(&mut wtr, matrices, cell)?;
    wtr.flush().map_err(|e| CustomError::Write {
        source: e,
        path: path.to_path_buf(),
    })?;
    Ok(())
}

// Square layout with an empty corner cell, sample names across the top and
// one labeled row per sample
fn write_cells<W: io::Write>(
    wtr: &mut csv::Writer<W>,
    matrices: &SimilarityMatrices,
    cell: impl Fn(&SimilarityMatrices, usize, usize) -> String,
) -> Result<()> {
    let samples = matrices.samples();
    wtr.write_record(std::iter::once("").chain(samples.iter().map(String::as_str)))?;

    for row in 0..samples.len() {
        let mut record = Vec::with_capacity(samples.len() + 1);
        record.push(samples[row].clone());
        for col in 0..samples.len() {
            record.push(cell(matrices, row, col));
        }
        wtr.write_record(&record)?;
    }
    Ok(())
}

fn mean_cell(value: Option<Option<f64>>) -> String {
    match value {
        None => String::new(),
        Some(None) => UNDEFINED_MEAN.to_string(),
        Some(Some(mean)) => mean.to_string(),
    }
}

fn tally_cell(value: Option<u64>) -> String {
    match value {
        None => String::new(),
        Some(count) => count.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PairwiseResult;

    fn scenario_matrices() -> SimilarityMatrices {
        let mut matrices =
            SimilarityMatrices::new(vec!["S1".into(), "S2".into(), "S3".into()]);
        matrices.insert(
            0,
            1,
            PairwiseResult {
                mean: Some(1.0),
                usable: 1,
                missing: 1,
            },
        );
        matrices.insert(
            0,
            2,
            PairwiseResult {
                mean: Some(0.5),
                usable: 1,
                missing: 1,
            },
        );
        matrices.insert(
            1,
            2,
            PairwiseResult {
                mean: None,
                usable: 0,
                missing: 2,
            },
        );
        matrices
    }

    fn render(
        matrices: &SimilarityMatrices,
        cell: impl Fn(&SimilarityMatrices, usize, usize) -> String,
    ) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        write_cells(&mut wtr, matrices, cell).expect("in-memory write");
        String::from_utf8(wtr.into_inner().expect("flushed")).expect("utf-8")
    }

    #[test]
    fn mean_matrix_fills_exactly_the_upper_triangle() {
        let rendered = render(&scenario_matrices(), |m, row, col| mean_cell(m.mean(row, col)));
        assert_eq!(rendered, ",S1,S2,S3\nS1,,1,0.5\nS2,,,NA\nS3,,,\n");
    }

    #[test]
    fn tally_matrices_leave_mirror_and_diagonal_empty() {
        let matrices = scenario_matrices();
        let usable = render(&matrices, |m, row, col| tally_cell(m.usable(row, col)));
        assert_eq!(usable, ",S1,S2,S3\nS1,,1,1\nS2,,,0\nS3,,,\n");

        let missing = render(&matrices, |m, row, col| tally_cell(m.missing(row, col)));
        assert_eq!(missing, ",S1,S2,S3\nS1,,1,1\nS2,,,2\nS3,,,\n");
    }

    #[test]
    fn mean_cells_distinguish_unset_from_undefined() {
        assert_eq!(mean_cell(None), "");
        assert_eq!(mean_cell(Some(None)), "NA");
        assert_eq!(mean_cell(Some(Some(0.25))), "0.25");
        assert_eq!(mean_cell(Some(Some(1.0))), "1");
        assert_eq!(mean_cell(Some(Some(1.0 / 3.0))), "0.3333333333333333");
    }
}
