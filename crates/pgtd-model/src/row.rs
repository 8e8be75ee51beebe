/// One submission record normalized to the width of its variant.
///
/// Cells are trimmed; cells missing from the source are empty strings, and
/// cells beyond the variant width are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub fn normalize<S: AsRef<str>>(raw: &[S], width: usize) -> Self {
        let cells = (0..width)
            .map(|idx| {
                raw.get(idx)
                    .map(|cell| cell.as_ref().trim().to_string())
                    .unwrap_or_default()
            })
            .collect();
        Self { cells }
    }

    /// Cell value at `index`, or `""` when out of range.
    pub fn get(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(String::is_empty)
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}
