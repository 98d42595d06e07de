//! Bounded text cells.

/// Maximum number of characters a cell holds.
pub const CELL_CAPACITY: usize = 255;

/// One addressable text slot in the table.
///
/// A cell never holds more than [`CELL_CAPACITY`] characters (Unicode scalar
/// values, not bytes). Longer input is cut at that boundary when stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    text: String,
}

impl Cell {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the cell holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of characters stored.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Replaces the content, truncating to capacity. Returns how many
    /// characters were dropped.
    pub(crate) fn store(&mut self, text: &str) -> usize {
        let (kept, dropped) = truncate_to_capacity(text);
        self.text.clear();
        self.text.push_str(kept);
        dropped
    }
}

/// Splits `text` at [`CELL_CAPACITY`] characters.
///
/// Returns the prefix that fits and the number of characters cut off.
pub fn truncate_to_capacity(text: &str) -> (&str, usize) {
    match text.char_indices().nth(CELL_CAPACITY) {
        Some((byte_idx, _)) => {
            let dropped = text[byte_idx..].chars().count();
            (&text[..byte_idx], dropped)
        }
        None => (text, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_empty() {
        let cell = Cell::new();
        assert!(cell.is_empty());
        assert_eq!(cell.text(), "");
        assert_eq!(cell.char_count(), 0);
    }

    #[test]
    fn test_store_short_text_verbatim() {
        let mut cell = Cell::new();
        assert_eq!(cell.store("  padded  "), 0);
        assert_eq!(cell.text(), "  padded  ");
    }

    #[test]
    fn test_store_truncates_at_capacity() {
        let mut cell = Cell::new();
        let long = "x".repeat(CELL_CAPACITY + 10);
        assert_eq!(cell.store(&long), 10);
        assert_eq!(cell.char_count(), CELL_CAPACITY);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let long: String = std::iter::repeat('é').take(CELL_CAPACITY + 1).collect();
        let (kept, dropped) = truncate_to_capacity(&long);
        assert_eq!(kept.chars().count(), CELL_CAPACITY);
        assert_eq!(dropped, 1);
    }

    #[test]
    fn test_exact_capacity_is_not_truncated() {
        let exact = "a".repeat(CELL_CAPACITY);
        let (kept, dropped) = truncate_to_capacity(&exact);
        assert_eq!(kept, exact);
        assert_eq!(dropped, 0);
    }
}
