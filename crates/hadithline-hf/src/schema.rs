//! Column layout of the HuggingFace hadith dataset
//!
//! Source columns: `Book`, `Chapter_Number`, `Chapter_Title_Arabic`,
//! `Chapter_Title_English`, `Arabic_Text`, `English_Text`, `Grade`,
//! `Reference`, `In-book reference`. The Arabic columns are never read.

use arrow::datatypes::Schema;
use hadithline_core::ConvertError;

pub const BOOK: &str = "Book";
pub const CHAPTER_NUMBER: &str = "Chapter_Number";
pub const CHAPTER_TITLE_ENGLISH: &str = "Chapter_Title_English";
pub const ENGLISH_TEXT: &str = "English_Text";
pub const GRADE: &str = "Grade";
pub const REFERENCE: &str = "Reference";

/// Both spellings of the in-book reference column seen in exports, in
/// lookup order.
pub const IN_BOOK_REFERENCE: [&str; 2] = ["In-book reference", "In-book_reference"];

/// Columns resolved against a file's schema.
///
/// Required columns are plain names; optional ones are `None` when the
/// file does not carry them. Every in-book reference spelling present is
/// kept, in lookup order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub book: &'static str,
    pub chapter_number: &'static str,
    pub english_text: &'static str,
    pub chapter_title_english: Option<&'static str>,
    pub grade: Option<&'static str>,
    pub reference: Option<&'static str>,
    pub in_book_reference: Vec<&'static str>,
}

impl Columns {
    /// Resolve column names against `schema`.
    pub fn resolve(schema: &Schema) -> Result<Self, ConvertError> {
        let has = |name: &str| schema.field_with_name(name).is_ok();
        let required = |name: &'static str| {
            if has(name) {
                Ok(name)
            } else {
                Err(ConvertError::missing_column(name))
            }
        };
        let optional = |name: &'static str| has(name).then_some(name);

        Ok(Self {
            book: required(BOOK)?,
            chapter_number: required(CHAPTER_NUMBER)?,
            english_text: required(ENGLISH_TEXT)?,
            chapter_title_english: optional(CHAPTER_TITLE_ENGLISH),
            grade: optional(GRADE),
            reference: optional(REFERENCE),
            in_book_reference: IN_BOOK_REFERENCE.into_iter().filter(|&n| has(n)).collect(),
        })
    }

    /// Names of every column to project, in schema-independent order.
    pub fn projected(&self) -> Vec<&'static str> {
        let mut names = vec![self.book, self.chapter_number, self.english_text];
        names.extend(
            [self.chapter_title_english, self.grade, self.reference]
                .into_iter()
                .flatten(),
        );
        names.extend(&self.in_book_reference);
        names
    }
}
