//! Writes a [`Dataset`] out as CSV.

use crate::record::Dataset;
use eyre::Context;
use std::io;
use std::path::Path;

/// Column names, in the order [`crate::record::VideoRecord`] serializes its fields.
pub const HEADER: [&str; 8] = [
    "videoId",
    "title",
    "description",
    "publishedAt",
    "viewCount",
    "likeCount",
    "commentCount",
    "duration",
];

/// Writes the header followed by one row per record. Absent fields become empty cells.
///
/// The header is written even when the dataset is empty.
pub fn write_csv<W: io::Write>(dataset: &Dataset, writer: W) -> eyre::Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv.write_record(HEADER).context("write header")?;
    for record in dataset.iter() {
        csv.serialize(record)
            .with_context(|| format!("write row for video {}", record.video_id))?;
    }
    csv.flush().context("flush csv output")?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the dataset to it.
#[tracing::instrument(skip(dataset), fields(rows = dataset.len()))]
pub fn write_csv_file(dataset: &Dataset, path: &Path) -> eyre::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create {}", path.display()))?;
    write_csv(dataset, io::BufWriter::new(file))
        .with_context(|| format!("write {}", path.display()))?;
    tracing::info!("wrote dataset");
    Ok(())
}
