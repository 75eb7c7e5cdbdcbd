use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use log::{debug, info};

use super::Dataset;
use crate::Result;

impl Dataset {
    /// Reads a delimited text file where the last field of every row is the label and the
    /// preceding fields are the features.
    ///
    /// # Errors
    /// `Io` if the file can't be opened or read, and everything `from_reader` checks.
    pub fn read_from_file<P: AsRef<Path>>(path: P, delimiter: char) -> Result<Self> {
        let path = path.as_ref();
        debug!("reading dataset from {}", path.display());

        let file = File::open(path)?;
        Self::from_reader(file, delimiter)
    }

    /// Reads delimited rows from `reader`.
    ///
    /// Rows that don't parse are skipped instead of aborting the load: fewer than two fields
    /// or non numeric fields. This also drops a header row. Once every row is parsed, the
    /// most common field count wins (ties go to the count seen first) and rows with any
    /// other count are skipped too.
    ///
    /// # Errors
    /// `Io` on read failures, `EmptyDataset` if no row was accepted.
    pub fn from_reader<R: Read>(reader: R, delimiter: char) -> Result<Self> {
        let mut parsed = Vec::new();
        let mut skipped = 0;

        for (i, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match parse_row(&line, delimiter) {
                Some(row) => parsed.push((i + 1, row)),
                None => {
                    debug!("skipping malformed row {}", i + 1);
                    skipped += 1;
                }
            }
        }

        let width = most_common_width(parsed.iter().map(|(_, (x, _))| x.len()));
        let mut rows = Vec::with_capacity(parsed.len());
        let mut labels = Vec::with_capacity(parsed.len());
        for (line, (x, y)) in parsed {
            if width == Some(x.len()) {
                rows.push(x);
                labels.push(y);
            } else {
                debug!("skipping row {line}, it has {} feature(s)", x.len());
                skipped += 1;
            }
        }

        info!(
            accepted = rows.len(), skipped = skipped;
            "read {} example(s), skipped {} malformed row(s)", rows.len(), skipped
        );
        Self::from_rows(&rows, labels)
    }
}

fn most_common_width(widths: impl Iterator<Item = usize>) -> Option<usize> {
    let mut counts: Vec<(usize, usize)> = Vec::new();
    for width in widths {
        match counts.iter_mut().find(|(n, _)| *n == width) {
            Some((_, count)) => *count += 1,
            None => counts.push((width, 1)),
        }
    }

    // max_by_key keeps the last maximum, so reversing keeps the earliest one.
    counts
        .into_iter()
        .rev()
        .max_by_key(|&(_, count)| count)
        .map(|(width, _)| width)
}

fn parse_row(line: &str, delimiter: char) -> Option<(Vec<f64>, f64)> {
    let mut fields = line
        .split(delimiter)
        .map(|f| f.trim().parse::<f64>().ok())
        .collect::<Option<Vec<_>>>()?;

    if fields.len() < 2 {
        return None;
    }

    let y = fields.pop()?;
    Some((fields, y))
}
