use rayon::ThreadPoolBuilder;

use crate::Args;
use crate::error::Result;
use crate::output::{
    MISSING_FILENAME, TALLY_FILENAME, write_mean_matrix, write_missing_matrix, write_tally_matrix,
};
use crate::reader::GenotypeTable;
use crate::similarity::{similarity_matrices, similarity_matrices_parallel};

pub fn run(args: &Args) -> Result<()> {
    const PARALLEL_THRESHOLD: usize = 500;

    let table = GenotypeTable::from_path(&args.input, args.skiplines)?;
    println!(
        "Input table contains {} samples and {} SNPs.",
        table.n_samples(),
        table.n_sites()
    );

    let matrices = if (args.threads.is_none() && table.n_samples() < PARALLEL_THRESHOLD)
        || args.threads == Some(1)
    {
        similarity_matrices(&table)
    } else if let Some(n) = args.threads {
        let pool = ThreadPoolBuilder::new().num_threads(n).build()?;
        pool.install(|| similarity_matrices_parallel(&table))
    } else {
        similarity_matrices_parallel(&table)
    };

    println!(
        "Writing mean similarity matrix to {}...",
        args.outfile.display()
    );
    write_mean_matrix(&matrices, &args.outfile)?;
    println!("Writing usable-SNP tallies to {TALLY_FILENAME}...");
    write_tally_matrix(&matrices, TALLY_FILENAME)?;
    println!("Writing missing-SNP tallies to {MISSING_FILENAME}...");
    write_missing_matrix(&matrices, MISSING_FILENAME)?;

    let n_pairs = table.n_samples() * (table.n_samples() - 1) / 2;
    println!("Mean Jaccard similarities written for {n_pairs} sample pairs.");
    Ok(())
}
