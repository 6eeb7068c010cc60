use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use crate::sorting::bubble_sort;

pub const SAMPLE: [i32; 7] = [64, 34, 25, 12, 22, 11, 90];

/// `label: v1 v2 ... vn ` with a space after every value.
pub fn format_line(label: &str, values: &[i32]) -> String {
    let mut line = format!("{}: ", label);
    for v in values {
        // writing into a String cannot fail
        let _ = write!(line, "{} ", v);
    }
    line
}

/// Prints the sample, sorts it, prints it again.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let mut data = SAMPLE.to_vec();

    writeln!(out, "{}", format_line("Unsorted array", &data))
        .context("failed to write unsorted array")?;

    info!("sorting {} values", data.len());
    bubble_sort(&mut data);

    writeln!(out, "{}", format_line("Sorted array", &data))
        .context("failed to write sorted array")?;

    Ok(())
}
