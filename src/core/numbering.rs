use chrono::{Datelike, NaiveDate};

use super::error::BijakError;

/// Gapless invoice number sequence generator.
///
/// Generates invoice numbers in the format `{prefix}{fy}/{sequential}`,
/// e.g. "INV-2025-26/001", "INV-2025-26/002", where `{fy}` is the Indian
/// fiscal-year label (April to March).
///
/// GST rules require consecutive serial numbers unique within a financial
/// year. This struct tracks the last issued number and ensures no gaps.
/// The `/` separator is replaced when the number is used as a file name
/// (see `pdf::artifact_file_name`).
#[derive(Debug, Clone)]
pub struct InvoiceNumberSequence {
    prefix: String,
    fy_start: i32,
    next_number: u64,
    zero_pad: usize,
}

/// Calendar year in which the fiscal year containing `date` begins.
/// April 2025 through March 2026 → 2025.
pub fn fiscal_year_start(date: NaiveDate) -> i32 {
    if date.month() >= 4 {
        date.year()
    } else {
        date.year() - 1
    }
}

/// Fiscal-year label for `date`, e.g. "2025-26".
pub fn fiscal_year_label(date: NaiveDate) -> String {
    let start = fiscal_year_start(date);
    format!("{}-{:02}", start, (start + 1) % 100)
}

impl InvoiceNumberSequence {
    /// Create a new sequence starting at 1 for the fiscal year containing `date`.
    pub fn new(prefix: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            prefix: prefix.into(),
            fy_start: fiscal_year_start(date),
            next_number: 1,
            zero_pad: 3,
        }
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(prefix: impl Into<String>, date: NaiveDate, next_number: u64) -> Self {
        Self {
            prefix: prefix.into(),
            fy_start: fiscal_year_start(date),
            next_number,
            zero_pad: 3,
        }
    }

    /// Set zero-padding width (default: 3, so "001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    fn format(&self, num: u64) -> String {
        format!(
            "{}{}-{:02}/{:0>width$}",
            self.prefix,
            self.fy_start,
            (self.fy_start + 1) % 100,
            num,
            width = self.zero_pad
        )
    }

    /// Generate the next invoice number.
    pub fn next_number(&mut self) -> String {
        let num = self.next_number;
        self.next_number += 1;
        self.format(num)
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        self.format(self.next_number)
    }

    /// Start year of the current fiscal year.
    pub fn fiscal_year(&self) -> i32 {
        self.fy_start
    }

    /// The next number that will be issued (without prefix/formatting).
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }

    /// Advance to a new fiscal year, resetting the counter to 1.
    pub fn advance_fiscal_year(&mut self, new_fy_start: i32) -> Result<(), BijakError> {
        if new_fy_start <= self.fy_start {
            return Err(BijakError::Numbering(format!(
                "new fiscal year {new_fy_start} must be greater than current {}",
                self.fy_start
            )));
        }
        self.fy_start = new_fy_start;
        self.next_number = 1;
        Ok(())
    }

    /// Auto-advance if `date` falls in a later fiscal year.
    /// Returns true if the sequence rolled over.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        let fy = fiscal_year_start(date);
        if fy > self.fy_start {
            self.fy_start = fy;
            self.next_number = 1;
            true
        } else {
            false
        }
    }
}
