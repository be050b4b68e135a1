use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("could not read {path}")]
    ReadWithPath {
        #[source]
        source: std::io::Error,
        path: std::path::PathBuf,
    },

    #[error("could not read input file")]
    ReadWithoutPath {
        #[source]
        source: std::io::Error,
    },

    #[error("file ended before the header row (skipped {skip_lines} metadata lines)")]
    TableHeaderMissing { skip_lines: usize },

    #[error("line {line_num} is still a metadata line (starts with \"##\")")]
    TableHeaderMetadata { line_num: usize },

    #[error("line {line_num} is not a header row (missing the leading '#')")]
    TableHeaderPrefix { line_num: usize },

    #[error("expected {expected} tab-separated fields (got {n_fields}) in line {line_num}")]
    SiteFields {
        line_num: usize,
        n_fields: usize,
        expected: usize,
    },

    #[error("need at least 2 samples (got {n_samples})")]
    SampleCount { n_samples: usize },

    #[error("malformed genotype {token:?} for sample {sample} at site {site}")]
    MalformedGenotype {
        sample: String,
        site: usize,
        token: String,
    },

    #[error("could not write to {path}")]
    Write {
        #[source]
        source: std::io::Error,
        path: std::path::PathBuf,
    },

    #[error("could not write to CSV")]
    CsvWrite(#[from] csv::Error),

    #[error("could not build thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, CustomError>;
