use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const SKIP_LINES: usize = 10;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

pub struct Dataset {
    pub dir: PathBuf,
    pub input: PathBuf,
}

/// Writes an ipyrad-style genotype table: `skip_lines` metadata lines, the
/// header row, then one row per site with the given sample cells. Each test
/// gets its own directory so the fixed-name tally outputs cannot collide.
pub fn create_dataset(
    label: &str,
    skip_lines: usize,
    samples: &[&str],
    rows: &[&[&str]],
) -> io::Result<Dataset> {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join("vcf2jaccard-tests").join(format!(
        "{}-{}-{}",
        std::process::id(),
        id,
        label
    ));
    fs::create_dir_all(&dir)?;

    let input = dir.join("input.vcf");
    let mut file = File::create(&input)?;
    for idx in 0..skip_lines {
        writeln!(file, "##metadata_line_{}", idx + 1)?;
    }
    writeln!(
        file,
        "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\t{}",
        samples.join("\t")
    )?;
    for (site_idx, cells) in rows.iter().enumerate() {
        write!(
            file,
            "locus_{}\t{}\t.\tG\tA\t13\tPASS\t.\tGT:DP:CATG",
            site_idx + 1,
            (site_idx + 1) * 7
        )?;
        for cell in *cells {
            write!(file, "\t{cell}")?;
        }
        writeln!(file)?;
    }
    Ok(Dataset { dir, input })
}

/// Three samples over two sites: a fully comparable pair, a half-missing
/// pair, and a pair with no usable site at all.
pub fn scenario_dataset(label: &str) -> io::Result<Dataset> {
    create_dataset(
        label,
        SKIP_LINES,
        &["S1", "S2", "S3"],
        &[
            &["0/0:40:38,0,2,0", "0/0:12:12,0,0,0", "./.:0:0,0,0,0"],
            &["1/1:9:0,9,0,0", "./.:0:0,0,0,0", "0/1:7:3,4,0,0"],
        ],
    )
}

pub const SCENARIO_MEANS: &str = ",S1,S2,S3\nS1,,1,0.5\nS2,,,NA\nS3,,,\n";
pub const SCENARIO_TALLY: &str = ",S1,S2,S3\nS1,,1,1\nS2,,,0\nS3,,,\n";
pub const SCENARIO_MISSING: &str = ",S1,S2,S3\nS1,,1,1\nS2,,,2\nS3,,,\n";
