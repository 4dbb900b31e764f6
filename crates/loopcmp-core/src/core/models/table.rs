/// A fully materialized, labeled 2-D table of scores.
///
/// This is the eager form handed to sinks that cannot work with the typed result
/// structures: one row per row label, one column per column label.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    pub title: String,
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl ComparisonTable {
    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        let r = self.row_labels.iter().position(|l| l == row)?;
        let c = self.column_labels.iter().position(|l| l == column)?;
        self.rows.get(r).and_then(|values| values.get(c)).copied()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.row_labels.len(), self.column_labels.len())
    }
}

/// Rounds a score to two decimal places for presentation, so values like 1.7499999999
/// print as 1.75.
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
