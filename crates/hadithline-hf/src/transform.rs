//! Rows → books grouped by (collection slug, chapter number)
//!
//! Books keep first-encounter order; hadiths inside a book keep row order.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::collection;
use crate::decode::Row;
use crate::fields;

/// One hadith inside a book file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hadith {
    /// 1-based position within the book
    pub id: usize,
    pub hadith_number: String,
    pub text: String,
    pub grade: Option<String>,
    pub narrated_by: Option<String>,
    pub reference: Option<String>,
    pub in_book_reference: Option<String>,
}

/// One chapter of one collection; written as `<slug>/<NNN>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub collection: String,
    pub collection_name: String,
    pub book: i64,
    pub book_name: String,
    pub hadiths: Vec<Hadith>,
}

impl Book {
    /// Sort / grouping key
    pub fn key(&self) -> (&str, i64) {
        (&self.collection, self.book)
    }

    /// Output path relative to the output root, e.g. `bukhari/001.json`.
    ///
    /// An empty slug puts the file directly under the root.
    pub fn relative_path(&self) -> PathBuf {
        Path::new(&self.collection).join(format!("{:03}.json", self.book))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct BookKey {
    slug: String,
    chapter: i64,
}

/// Running per-collection totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionStats {
    pub name: String,
    pub hadith_count: usize,
    pub chapters: BTreeSet<i64>,
}

/// Top-level catalog entry in `index.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub id: String,
    pub name: String,
    pub hadith_count: usize,
    pub chapter_count: usize,
}

/// Accumulator for the whole dataset.
#[derive(Debug, Default)]
pub struct Library {
    books: Vec<Book>,
    positions: FxHashMap<BookKey, usize>,
    stats: BTreeMap<String, CollectionStats>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group every row; none is skipped or merged.
    pub fn from_rows(rows: impl IntoIterator<Item = Row>) -> Self {
        let mut library = Self::new();
        for row in rows {
            library.push(row);
        }
        library
    }

    /// Append one row as a new hadith of its book.
    pub fn push(&mut self, row: Row) {
        let resolved = collection::resolve(&row.collection);
        let key = BookKey {
            slug: resolved.slug.clone(),
            chapter: row.chapter_number,
        };

        let books = &mut self.books;
        let pos = *self.positions.entry(key).or_insert_with(|| {
            books.push(Book {
                collection: String::new(),
                collection_name: String::new(),
                book: row.chapter_number,
                book_name: String::new(),
                hadiths: Vec::new(),
            });
            books.len() - 1
        });
        let book = &mut self.books[pos];

        // Same key → same collection and chapter; the title is last write wins
        book.collection.clone_from(&resolved.slug);
        book.collection_name.clone_from(&resolved.name);
        book.book = row.chapter_number;
        book.book_name = row.chapter_title_english;

        let id = book.hadiths.len() + 1;
        let hadith_number =
            fields::hadith_number(row.reference.as_deref(), row.in_book_reference.as_deref())
                .unwrap_or_else(|| id.to_string());
        book.hadiths.push(Hadith {
            id,
            hadith_number,
            narrated_by: fields::narrator(row.english_text.as_deref()),
            grade: fields::normalize_grade(row.grade.as_deref()),
            text: row.english_text.unwrap_or_default(),
            reference: row.reference.filter(|s| !s.is_empty()),
            in_book_reference: row.in_book_reference.filter(|s| !s.is_empty()),
        });

        let stats = self.stats.entry(resolved.slug).or_default();
        stats.name = resolved.name;
        stats.hadith_count += 1;
        stats.chapters.insert(row.chapter_number);
    }

    /// Books in first-encounter order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Books sorted by (slug, chapter) ascending.
    pub fn sorted_books(&self) -> Vec<&Book> {
        let mut books: Vec<&Book> = self.books.iter().collect();
        books.sort_by(|a, b| a.key().cmp(&b.key()));
        books
    }

    /// Book for (slug, chapter), if any row landed there.
    pub fn book(&self, slug: &str, chapter: i64) -> Option<&Book> {
        let key = BookKey {
            slug: slug.to_string(),
            chapter,
        };
        self.positions.get(&key).map(|&pos| &self.books[pos])
    }

    /// Index entries sorted by slug.
    pub fn index(&self) -> Vec<IndexEntry> {
        self.stats
            .iter()
            .map(|(slug, s)| IndexEntry {
                id: slug.clone(),
                name: s.name.clone(),
                hadith_count: s.hadith_count,
                chapter_count: s.chapters.len(),
            })
            .collect()
    }

    pub fn hadith_count(&self) -> usize {
        self.stats.values().map(|s| s.hadith_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(collection: &str, chapter: i64, text: &str) -> Row {
        Row {
            collection: collection.to_string(),
            chapter_number: chapter,
            chapter_title_english: format!("Chapter {chapter}"),
            english_text: Some(text.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn groups_by_slug_and_chapter_in_row_order() {
        let library = Library::from_rows(vec![
            row("Sahih al-Bukhari", 1, "first"),
            row("Sahih Muslim", 1, "other"),
            row("Sahih al-Bukhari", 1, "second"),
            row("Sahih al-Bukhari", 2, "next chapter"),
            row("Sahih al-Bukhari", 1, "third"),
        ]);

        assert_eq!(library.books().len(), 3);
        let book = library.book("bukhari", 1).unwrap();
        let texts: Vec<_> = book.hadiths.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
        let ids: Vec<_> = book.hadiths.iter().map(|h| h.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn spelling_variants_share_a_book() {
        let library = Library::from_rows(vec![
            row("Jami` at-Tirmidhi", 4, "a"),
            row("Jami' at-Tirmidhi", 4, "b"),
        ]);
        let book = library.book("tirmidhi", 4).unwrap();
        assert_eq!(book.hadiths.len(), 2);
        assert_eq!(book.collection_name, "Jami at-Tirmidhi");
    }

    #[test]
    fn hadith_number_falls_back_to_position() {
        let mut with_ref = row("Sahih al-Bukhari", 1, "x");
        with_ref.reference = Some("https://sunnah.com/bukhari:77".to_string());
        let library = Library::from_rows(vec![
            row("Sahih al-Bukhari", 1, "x"),
            with_ref,
            row("Sahih al-Bukhari", 1, "x"),
        ]);
        let numbers: Vec<_> = library
            .book("bukhari", 1)
            .unwrap()
            .hadiths
            .iter()
            .map(|h| h.hadith_number.as_str())
            .collect();
        assert_eq!(numbers, ["1", "77", "3"]);
    }

    #[test]
    fn empty_strings_become_null() {
        let mut r = row("Sahih Muslim", 1, "");
        r.english_text = None;
        r.reference = Some(String::new());
        r.in_book_reference = Some(String::new());
        r.grade = Some("   ".to_string());
        let library = Library::from_rows(vec![r]);

        let hadith = &library.book("muslim", 1).unwrap().hadiths[0];
        assert_eq!(hadith.text, "");
        assert_eq!(hadith.reference, None);
        assert_eq!(hadith.in_book_reference, None);
        assert_eq!(hadith.grade, None);
        assert_eq!(hadith.narrated_by, None);
    }

    #[test]
    fn title_is_last_write_wins() {
        let mut second = row("Sahih Muslim", 3, "b");
        second.chapter_title_english = "Renamed".to_string();
        let library = Library::from_rows(vec![row("Sahih Muslim", 3, "a"), second]);
        assert_eq!(library.book("muslim", 3).unwrap().book_name, "Renamed");
    }

    #[test]
    fn stats_count_rows_and_distinct_chapters() {
        let library = Library::from_rows(vec![
            row("Sahih al-Bukhari", 1, "a"),
            row("Sahih al-Bukhari", 1, "b"),
            row("Sahih al-Bukhari", 5, "c"),
            row("Sunan Ibn Majah", 2, "d"),
        ]);

        let index = library.index();
        assert_eq!(
            index,
            vec![
                IndexEntry {
                    id: "bukhari".to_string(),
                    name: "Sahih al-Bukhari".to_string(),
                    hadith_count: 3,
                    chapter_count: 2,
                },
                IndexEntry {
                    id: "ibnmajah".to_string(),
                    name: "Sunan Ibn Majah".to_string(),
                    hadith_count: 1,
                    chapter_count: 1,
                },
            ]
        );
        assert_eq!(library.hadith_count(), 4);
    }

    #[test]
    fn sorted_books_by_slug_then_chapter() {
        let library = Library::from_rows(vec![
            row("Sahih Muslim", 2, "a"),
            row("Sahih al-Bukhari", 10, "b"),
            row("Sahih Muslim", 1, "c"),
            row("Sahih al-Bukhari", 9, "d"),
        ]);
        let files: Vec<_> = library.sorted_books().iter().map(|b| b.relative_path()).collect();
        let expected: Vec<_> =
            ["bukhari/009.json", "bukhari/010.json", "muslim/001.json", "muslim/002.json"]
                .into_iter()
                .map(PathBuf::from)
                .collect();
        assert_eq!(files, expected);
    }

    #[test]
    fn empty_slug_path_stays_relative() {
        let library = Library::from_rows(vec![row("صحيح", 987, "a")]);
        let book = library.book("", 987).unwrap();
        assert_eq!(book.relative_path(), PathBuf::from("987.json"));
        assert!(book.relative_path().is_relative());
    }

    #[test]
    fn serializes_camel_case_with_nulls() {
        let library = Library::from_rows(vec![row("Sahih Muslim", 1, "text only")]);
        let json = serde_json::to_string(library.book("muslim", 1).unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"collection":"muslim","collectionName":"Sahih Muslim","book":1,"bookName":"Chapter 1","hadiths":[{"id":1,"hadithNumber":"1","text":"text only","grade":null,"narratedBy":null,"reference":null,"inBookReference":null}]}"#
        );
    }
}
