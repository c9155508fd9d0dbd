use hadithline_hf::decode::Row;
use hadithline_hf::transform::Library;

const COLLECTIONS: [&str; 6] = [
    "Sahih al-Bukhari",
    "Sahih Muslim",
    "Sunan Abu Dawud",
    "Jami` at-Tirmidhi",
    "Sunan an-Nasa'i",
    "Sunan Ibn Majah",
];

/// Roughly the shape of the real dataset: ~34k rows, ~100 chapters per collection
fn synthetic_rows(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| {
            let collection = COLLECTIONS[i % COLLECTIONS.len()];
            let chapter = (i / 60 % 100) as i64 + 1;
            Row {
                collection: collection.to_string(),
                chapter_number: chapter,
                chapter_title_english: format!("Chapter {chapter}"),
                english_text: Some(format!(
                    "Narrated Abu Hurairah: The Prophet said ... ({i})"
                )),
                grade: (i % 3 != 0).then(|| " Sahih (Darussalam) ".to_string()),
                reference: Some(format!("https://sunnah.com/x:{i}")),
                in_book_reference: Some(format!("Book {chapter}, Hadith {i}")),
            }
        })
        .collect()
}

#[divan::bench(args = [1_000, 34_000])]
fn group_rows(bencher: divan::Bencher, n: usize) {
    bencher
        .with_inputs(|| synthetic_rows(n))
        .bench_values(|rows: Vec<Row>| Library::from_rows(rows));
}

fn main() {
    divan::main();
}
