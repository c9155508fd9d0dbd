//! Parquet → rows
//!
//! Only the columns the converter uses are projected; the Arabic text and
//! title columns are never decoded.

use std::fs::File;
use std::path::Path;

use arrow::array::{Array, AsArray, Int64Array, RecordBatch, StringArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Int64Type};
use hadithline_core::ConvertError;
use parquet::arrow::ProjectionMask;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::schema::Columns;

/// One flat record of the source dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// Raw collection name (`Book` column), e.g. "Sahih al-Bukhari"
    pub collection: String,
    /// Null decodes as 0
    pub chapter_number: i64,
    /// Null or missing decodes as ""
    pub chapter_title_english: String,
    pub english_text: Option<String>,
    pub grade: Option<String>,
    pub reference: Option<String>,
    pub in_book_reference: Option<String>,
}

/// Read every row of a Parquet file, in file order.
pub fn read_rows(path: &Path) -> Result<Vec<Row>, ConvertError> {
    let file = File::open(path)
        .map_err(|e| ConvertError::Decode(format!("{}: {e}", path.display())))?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;

    let columns = Columns::resolve(builder.schema())?;
    let num_rows = usize::try_from(builder.metadata().file_metadata().num_rows()).unwrap_or(0);
    let mask = ProjectionMask::columns(builder.parquet_schema(), columns.projected());
    let reader = builder.with_projection(mask).build()?;

    let mut rows = Vec::with_capacity(num_rows);
    for batch in reader {
        append_rows(&batch?, &columns, &mut rows)?;
    }
    log::debug!("{}: decoded {} rows", path.display(), rows.len());
    Ok(rows)
}

/// Convert one record batch into rows, appending to `rows`.
fn append_rows(
    batch: &RecordBatch,
    columns: &Columns,
    rows: &mut Vec<Row>,
) -> Result<(), ConvertError> {
    let book = string_column(batch, columns.book)?;
    let chapter = int_column(batch, columns.chapter_number)?;
    let english = string_column(batch, columns.english_text)?;
    let title = optional_string_column(batch, columns.chapter_title_english)?;
    let grade = optional_string_column(batch, columns.grade)?;
    let reference = optional_string_column(batch, columns.reference)?;
    let in_book = columns
        .in_book_reference
        .iter()
        .map(|&name| string_column(batch, name))
        .collect::<Result<Vec<_>, _>>()?;

    rows.reserve(batch.num_rows());
    for i in 0..batch.num_rows() {
        rows.push(Row {
            collection: value(Some(&book), i).unwrap_or_default(),
            chapter_number: if chapter.is_valid(i) { chapter.value(i) } else { 0 },
            chapter_title_english: value(title.as_ref(), i).unwrap_or_default(),
            english_text: value(Some(&english), i),
            grade: value(grade.as_ref(), i),
            reference: value(reference.as_ref(), i),
            in_book_reference: first_non_empty(&in_book, i),
        });
    }
    Ok(())
}

/// Any string encoding (Utf8, LargeUtf8, Utf8View, ...) cast to Utf8
fn string_column(batch: &RecordBatch, name: &str) -> Result<StringArray, ConvertError> {
    let col = batch
        .column_by_name(name)
        .ok_or_else(|| ConvertError::missing_column(name))?;
    let utf8 = cast(col, &DataType::Utf8)?;
    Ok(utf8.as_string::<i32>().clone())
}

fn optional_string_column(
    batch: &RecordBatch,
    name: Option<&str>,
) -> Result<Option<StringArray>, ConvertError> {
    name.map(|n| string_column(batch, n)).transpose()
}

/// Any integer width (or numeric strings) cast to Int64; unparsable values become null
fn int_column(batch: &RecordBatch, name: &str) -> Result<Int64Array, ConvertError> {
    let col = batch
        .column_by_name(name)
        .ok_or_else(|| ConvertError::missing_column(name))?;
    let int64 = cast(col, &DataType::Int64)?;
    Ok(int64.as_primitive::<Int64Type>().clone())
}

fn value(arr: Option<&StringArray>, i: usize) -> Option<String> {
    arr.filter(|a| a.is_valid(i)).map(|a| a.value(i).to_string())
}

/// First spelling with a non-empty value at row `i`
fn first_non_empty(arrays: &[StringArray], i: usize) -> Option<String> {
    arrays
        .iter()
        .filter_map(|a| value(Some(a), i))
        .find(|v| !v.is_empty())
}
