//! Page → category assignments.
//!
//! The dataset is owned by the caller and only read by the aggregator. A page
//! belongs to exactly one category; when the input lists a page twice, the
//! first assignment wins.
//!
//! ## File format
//!
//! ```text
//! pages_code,category
//! 1,English cricketers
//! 2	English cricketers
//! 7,Year of birth missing
//! ```
//!
//! One record per line, page id then category, separated by a tab or the
//! first comma. The header line is optional. Categories may contain spaces.

use std::collections::HashMap;
use std::io::BufRead;

use tracing::{debug, instrument};

use crate::error::{ClickError, InputKind, Result};

/// Category assignments for pages, in first-appearance order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    category_of: HashMap<String, usize>,
    /// `(label, pages)` per category, in first-appearance order.
    categories: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl Dataset {
    /// Build a dataset from `(page, category)` pairs.
    pub fn from_pairs<I, P, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<String>,
    {
        let mut ds = Self::default();
        for (page, category) in pairs {
            ds.assign(page.into(), category.into());
        }
        ds
    }

    /// Parse a page/category file (see the module docs for the format).
    ///
    /// # Errors
    ///
    /// Returns [`ClickError::Parse`] for a record without a separator or with
    /// an empty field, and [`ClickError::Io`] if reading fails.
    #[instrument(skip(reader))]
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut ds = Self::default();
        let mut first_record = true;

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let Some((page, category)) = split_record(trimmed) else {
                return Err(ClickError::Parse {
                    source_kind: InputKind::Dataset,
                    line: i + 1,
                    message: format!("expected `<page>,<category>`, got `{trimmed}`"),
                });
            };

            if std::mem::take(&mut first_record) && is_header(page, category) {
                continue;
            }

            if page.is_empty() || category.is_empty() {
                return Err(ClickError::Parse {
                    source_kind: InputKind::Dataset,
                    line: i + 1,
                    message: "page and category must both be non-empty".to_string(),
                });
            }

            ds.assign(page.to_string(), category.to_string());
        }

        debug!(
            pages = ds.page_count(),
            categories = ds.category_count(),
            "loaded dataset"
        );
        Ok(ds)
    }

    fn assign(&mut self, page: String, category: String) {
        if let Some(&existing) = self.category_of.get(&page) {
            debug!(
                page = %page,
                kept = %self.categories[existing].0,
                ignored = %category,
                "page listed twice; keeping first category"
            );
            return;
        }

        let slot = match self.index.get(&category) {
            Some(&slot) => slot,
            None => {
                self.categories.push((category.clone(), Vec::new()));
                let slot = self.categories.len() - 1;
                self.index.insert(category, slot);
                slot
            }
        };

        self.categories[slot].1.push(page.clone());
        self.category_of.insert(page, slot);
    }

    /// Category label of `page`.
    #[must_use]
    pub fn category_of(&self, page: &str) -> Option<&str> {
        self.category_of
            .get(page)
            .map(|&slot| self.categories[slot].0.as_str())
    }

    /// All distinct categories in first-appearance order.
    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.iter().map(|(label, _)| label.as_str())
    }

    /// Pages of `category` in first-appearance order, or `None` if the
    /// category is unknown.
    #[must_use]
    pub fn pages_in(&self, category: &str) -> Option<&[String]> {
        self.index
            .get(category)
            .map(|&slot| self.categories[slot].1.as_slice())
    }

    /// Returns `true` if `category` has at least one page.
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.index.contains_key(category)
    }

    /// Number of pages with a category.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.category_of.len()
    }

    /// Number of distinct categories.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

fn split_record(line: &str) -> Option<(&str, &str)> {
    let (page, category) = line.split_once('\t').or_else(|| line.split_once(','))?;
    Some((page.trim(), category.trim()))
}

fn is_header(page: &str, category: &str) -> bool {
    matches!(page, "pages_code" | "page" | "page_id") && category == "category"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_keep_first_appearance_order() {
        let ds = Dataset::from_pairs([("1", "B"), ("2", "A"), ("3", "B")]);
        assert_eq!(ds.categories().collect::<Vec<_>>(), ["B", "A"]);
        assert_eq!(
            ds.pages_in("B").expect("B known"),
            &["1".to_string(), "3".to_string()]
        );
        assert_eq!(ds.category_of("2"), Some("A"));
        assert_eq!(ds.category_count(), 2);
        assert_eq!(ds.page_count(), 3);
    }

    #[test]
    fn first_category_wins() {
        let ds = Dataset::from_pairs([("1", "A"), ("1", "B")]);
        assert_eq!(ds.category_of("1"), Some("A"));
        assert!(!ds.has_category("B"));
    }

    #[test]
    fn parses_csv_and_tsv_with_header() {
        let input = "pages_code,category\n1,English cricketers\n2\tAmerican films\n\n# skip\n3,English cricketers\n";
        let ds = Dataset::from_reader(input.as_bytes()).expect("parse");
        assert_eq!(
            ds.categories().collect::<Vec<_>>(),
            ["English cricketers", "American films"]
        );
        assert_eq!(ds.page_count(), 3);
        assert_eq!(ds.category_of("2"), Some("American films"));
    }

    #[test]
    fn rejects_record_without_separator() {
        let err = Dataset::from_reader("1,A\nbroken\n".as_bytes()).expect_err("should fail");
        assert!(matches!(
            err,
            ClickError::Parse {
                source_kind: InputKind::Dataset,
                line: 2,
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty_category() {
        let err = Dataset::from_reader("1,\n".as_bytes()).expect_err("should fail");
        assert!(matches!(err, ClickError::Parse { line: 1, .. }));
    }
}
