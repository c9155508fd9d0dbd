//! Summary report printed after a conversion
//!
//! Per-collection table, grand total, grade coverage and the most frequent
//! grades. Informational only; it reads what `emit` already wrote.

use anyhow::{Result, ensure};
use comfy_table::{
    Cell, CellAlignment, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
};
use hadithline_core::fmt_num;
use rustc_hash::FxHashMap;

use crate::transform::{IndexEntry, Library};

/// How many grades the distribution table lists
pub const TOP_GRADES: usize = 15;

/// Grade statistics over every hadith in the library.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeReport {
    pub total: usize,
    pub graded: usize,
    pub distinct: usize,
    /// Most frequent first; equal counts keep first-seen order
    pub top: Vec<(String, usize)>,
}

impl GradeReport {
    pub fn compute(library: &Library) -> Self {
        let mut total = 0;
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut slots: FxHashMap<&str, usize> = FxHashMap::default();

        for hadith in library.books().iter().flat_map(|b| &b.hadiths) {
            total += 1;
            let Some(grade) = hadith.grade.as_deref() else {
                continue;
            };
            match slots.get(grade) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    slots.insert(grade, counts.len());
                    counts.push((grade.to_string(), 1));
                }
            }
        }

        let graded = counts.iter().map(|(_, n)| n).sum();
        let distinct = counts.len();
        // sort_by is stable: ties stay in first-seen order
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(TOP_GRADES);

        Self {
            total,
            graded,
            distinct,
            top: counts,
        }
    }

    /// Share of hadiths with a grade, in percent
    pub fn coverage_pct(&self) -> f64 {
        self.graded as f64 / self.total as f64 * 100.0
    }
}

fn styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
    table
}

fn number_cell(n: usize) -> Cell {
    Cell::new(fmt_num(n)).set_alignment(CellAlignment::Right)
}

/// Collection, hadith count and book count, with a TOTAL row.
pub fn collections_table(index: &[IndexEntry]) -> Table {
    let mut table = styled_table(&["Collection", "Hadiths", "Books"]);
    for entry in index {
        table.add_row(vec![
            Cell::new(&entry.name),
            number_cell(entry.hadith_count),
            number_cell(entry.chapter_count),
        ]);
    }
    let total: usize = index.iter().map(|e| e.hadith_count).sum();
    table.add_row(vec![Cell::new("TOTAL"), number_cell(total), Cell::new("")]);
    table
}

pub fn grades_table(report: &GradeReport) -> Table {
    let mut table = styled_table(&["Grade", "Count"]);
    for (grade, count) in &report.top {
        table.add_row(vec![Cell::new(grade), number_cell(*count)]);
    }
    table
}

/// Print the summary to stdout. An empty dataset is an error.
pub fn print_summary(index: &[IndexEntry], library: &Library) -> Result<()> {
    let total: usize = index.iter().map(|e| e.hadith_count).sum();
    ensure!(total > 0, "empty dataset: no hadiths to summarize");

    let grades = GradeReport::compute(library);

    println!("\n=== Hadith Dataset Summary ===");
    println!("{}", collections_table(index));
    println!(
        "\nGrade coverage: {}/{} ({:.1}%)",
        fmt_num(grades.graded),
        fmt_num(total),
        grades.coverage_pct()
    );
    println!("Unique grades: {}", fmt_num(grades.distinct));
    println!("\nTop grades:");
    println!("{}", grades_table(&grades));
    Ok(())
}
