//! File output convenience.

use std::fs;

use crate::error::Result;
use crate::options::SerializeOptions;
use crate::record::Record;
use crate::serializer::generate;

/// Serializes records and writes the result to a file.
///
/// Thin wrapper over [`generate`]: the payload is built in memory first,
/// then written in one call. An empty record slice produces an empty file.
///
/// # Errors
///
/// Returns [`RowpackError::Io`](crate::RowpackError::Io) when the file
/// cannot be created or written.
pub fn write_delimited<R: Record>(
    records: &[R],
    output_path: &str,
    options: &SerializeOptions,
) -> Result<()> {
    let payload = generate(records, options);
    fs::write(output_path, payload)?;
    Ok(())
}
