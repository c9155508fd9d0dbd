//! JSON output: one file per book plus `index.json`

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use hadithline_core::ConvertError;
use serde::Serialize;

use crate::transform::{IndexEntry, Library};

/// Name of the catalog file at the output root
pub const INDEX_FILE: &str = "index.json";

/// Replace `output_dir` with the library's book files and index.
///
/// The old tree is removed before anything is written; a failure part way
/// leaves a partial tree behind. Returns the index that was written.
pub fn write_output(
    library: &Library,
    output_dir: &Path,
) -> Result<Vec<IndexEntry>, ConvertError> {
    if output_dir.exists() {
        log::info!("Removing old data at {}", output_dir.display());
        fs::remove_dir_all(output_dir).map_err(|e| ConvertError::fs(output_dir, e))?;
    }
    fs::create_dir_all(output_dir).map_err(|e| ConvertError::fs(output_dir, e))?;

    let mut created = None::<&str>;
    for book in library.sorted_books() {
        if created != Some(book.collection.as_str()) {
            let dir = output_dir.join(&book.collection);
            fs::create_dir_all(&dir).map_err(|e| ConvertError::fs(&dir, e))?;
            created = Some(book.collection.as_str());
        }
        write_json(&output_dir.join(book.relative_path()), book, false)?;
    }

    let index = library.index();
    write_json(&output_dir.join(INDEX_FILE), &index, true)?;
    log::debug!(
        "Wrote {} book files and {INDEX_FILE} to {}",
        library.books().len(),
        output_dir.display()
    );
    Ok(index)
}

/// Serialize as UTF-8 JSON, non-ASCII kept literal. `pretty` uses 2-space indent.
fn write_json<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    pretty: bool,
) -> Result<(), ConvertError> {
    let file = File::create(path).map_err(|e| ConvertError::fs(path, e))?;
    let mut writer = BufWriter::new(file);
    let result = if pretty {
        serde_json::to_writer_pretty(&mut writer, value)
    } else {
        serde_json::to_writer(&mut writer, value)
    };
    result.map_err(|e| ConvertError::fs(path, e.into()))?;
    writer.flush().map_err(|e| ConvertError::fs(path, e))
}
