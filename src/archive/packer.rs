//! Zip packaging.

use std::io::{Cursor, Read, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::archive::bundle::{ArchiveBundle, ArchiveEntry};
use crate::error::{Error, Result};

/// Pack a bundle into a deflate-compressed zip archive held in memory.
///
/// Fails with [`Error::EmptyBundle`] when there is nothing to pack.
pub fn pack(bundle: ArchiveBundle) -> Result<Vec<u8>> {
    if bundle.is_empty() {
        return Err(Error::EmptyBundle);
    }

    let count = bundle.len();
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in bundle.into_entries() {
        zip.start_file(entry.name, options)?;
        zip.write_all(&entry.data)?;
    }

    let data = zip.finish()?.into_inner();
    tracing::debug!("Packed {} entries into {} bytes", count, data.len());

    Ok(data)
}

/// Read every entry of a zip archive back, in archive order.
pub fn unpack(data: &[u8]) -> Result<Vec<ArchiveEntry>> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;
    let mut entries = Vec::with_capacity(archive.len());

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let mut content = Vec::new();
        file.read_to_end(&mut content)?;
        entries.push(ArchiveEntry {
            name: file.name().to_string(),
            data: content,
        });
    }

    Ok(entries)
}
