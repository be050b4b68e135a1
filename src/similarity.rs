use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;
use rayon::prelude::*;

use crate::matrix::SimilarityMatrices;
use crate::model::{GenotypeCall, PairwiseResult};
use crate::reader::GenotypeTable;

/// Aggregates one sample pair: per-site Jaccard similarities averaged over
/// the usable sites, with usable/missing tallies that sum to the site count.
pub fn aggregate_pair(a: &[GenotypeCall], b: &[GenotypeCall]) -> PairwiseResult {
    assert_eq!(a.len(), b.len(), "sample series must cover the same sites");

    let mut sum = 0.0;
    let mut usable: u64 = 0;
    let mut missing: u64 = 0;
    for (&call_a, &call_b) in a.iter().zip(b) {
        match call_a.jaccard(call_b) {
            Some(similarity) => {
                sum += similarity;
                usable += 1;
            }
            None => missing += 1,
        }
    }

    let mean = if usable == 0 {
        None
    } else {
        Some(sum / usable as f64)
    };
    PairwiseResult {
        mean,
        usable,
        missing,
    }
}

fn pair_progress(n_pairs: usize) -> ProgressBar {
    let pb = ProgressBar::new(n_pairs as u64);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:30} {pos}/{len} pairs").unwrap(),
    );
    pb
}

/// Walks all unordered sample pairs in combinatorial order on one thread.
pub fn similarity_matrices(table: &GenotypeTable) -> SimilarityMatrices {
    let n_samples = table.n_samples();
    let pb = pair_progress(n_samples * (n_samples - 1) / 2);

    let mut matrices = SimilarityMatrices::new(table.samples().to_vec());
    for (i, j) in (0..n_samples).tuple_combinations() {
        matrices.insert(i, j, aggregate_pair(table.series(i), table.series(j)));
        pb.inc(1);
    }
    pb.abandon();
    matrices
}

/// Same walk with one rayon task per pair. Tasks only read their two series
/// and the matrices are assembled from the ordered results afterwards, so
/// the output is identical to the sequential walk.
pub fn similarity_matrices_parallel(table: &GenotypeTable) -> SimilarityMatrices {
    let pairs: Vec<(usize, usize)> = (0..table.n_samples()).tuple_combinations().collect();
    let pb = pair_progress(pairs.len());

    let results: Vec<(usize, usize, PairwiseResult)> = pairs
        .par_iter()
        .map(|&(i, j)| {
            let result = aggregate_pair(table.series(i), table.series(j));
            pb.inc(1);
            (i, j, result)
        })
        .collect();
    pb.abandon();

    let mut matrices = SimilarityMatrices::new(table.samples().to_vec());
    for (i, j, result) in results {
        matrices.insert(i, j, result);
    }
    matrices
}
