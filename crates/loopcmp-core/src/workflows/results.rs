use crate::core::models::table::ComparisonTable;
use crate::engine::aggregate::Frame;
use crate::engine::frameshift::{Shift, ShiftResult, best_shift};

/// Protein-versus-protein scores.
///
/// Rows are the proteins of interest, columns the whole catalogue, both in catalogue order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonMatrix {
    pub title: String,
    pub row_ids: Vec<String>,
    pub column_ids: Vec<String>,
    scores: Vec<Vec<f64>>,
}

impl ComparisonMatrix {
    pub(crate) fn new(
        title: String,
        row_ids: Vec<String>,
        column_ids: Vec<String>,
        scores: Vec<Vec<f64>>,
    ) -> Self {
        debug_assert_eq!(row_ids.len(), scores.len());
        Self {
            title,
            row_ids,
            column_ids,
            scores,
        }
    }

    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        let r = self.row_ids.iter().position(|id| id == row)?;
        let c = self.column_ids.iter().position(|id| id == column)?;
        self.scores.get(r)?.get(c).copied()
    }

    /// Scores of one protein of interest against every catalogue member.
    pub fn row(&self, row: &str) -> Option<&[f64]> {
        let r = self.row_ids.iter().position(|id| id == row)?;
        self.scores.get(r).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.row_ids
            .iter()
            .map(String::as_str)
            .zip(self.scores.iter().map(Vec::as_slice))
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.row_ids.len(), self.column_ids.len())
    }

    pub fn to_table(&self) -> ComparisonTable {
        ComparisonTable {
            title: self.title.clone(),
            row_labels: self.row_ids.clone(),
            column_labels: self.column_ids.clone(),
            rows: self.scores.clone(),
        }
    }
}

/// One protein scored against the catalogue at every shift.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftScan {
    pub title: String,
    pub protein: String,
    pub shifts: Vec<Shift>,
    pub targets: Vec<String>,
    /// One row per catalogue member, one column per entry of `shifts`.
    scores: Vec<Vec<f64>>,
}

impl ShiftScan {
    pub(crate) fn new(
        title: String,
        protein: String,
        shifts: Vec<Shift>,
        targets: Vec<String>,
        scores: Vec<Vec<f64>>,
    ) -> Self {
        Self {
            title,
            protein,
            shifts,
            targets,
            scores,
        }
    }

    pub fn get(&self, target: &str, shift: Shift) -> Option<f64> {
        let r = self.targets.iter().position(|id| id == target)?;
        let c = self.shifts.iter().position(|s| *s == shift)?;
        self.scores.get(r)?.get(c).copied()
    }

    /// The preferred shift for one catalogue member.
    pub fn best(&self, target: &str) -> Option<ShiftResult> {
        let r = self.targets.iter().position(|id| id == target)?;
        best_shift(
            self.shifts
                .iter()
                .zip(&self.scores[r])
                .map(|(&shift, &score)| ShiftResult { shift, score }),
        )
    }

    pub fn to_table(&self) -> ComparisonTable {
        ComparisonTable {
            title: self.title.clone(),
            row_labels: self.targets.clone(),
            column_labels: self.shifts.iter().map(ToString::to_string).collect(),
            rows: self.scores.clone(),
        }
    }
}

/// One protein scored against the catalogue with one loop shifted at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameScan {
    pub title: String,
    pub protein: String,
    pub frames: Vec<Frame>,
    pub targets: Vec<String>,
    scores: Vec<Vec<f64>>,
}

impl FrameScan {
    pub(crate) fn new(
        title: String,
        protein: String,
        frames: Vec<Frame>,
        targets: Vec<String>,
        scores: Vec<Vec<f64>>,
    ) -> Self {
        Self {
            title,
            protein,
            frames,
            targets,
            scores,
        }
    }

    pub fn get(&self, target: &str, frame: Frame) -> Option<f64> {
        let r = self.targets.iter().position(|id| id == target)?;
        let c = self.frames.iter().position(|f| *f == frame)?;
        self.scores.get(r)?.get(c).copied()
    }

    /// The highest-scoring frame for one catalogue member; ties keep the earlier frame.
    pub fn best(&self, target: &str) -> Option<(Frame, f64)> {
        let r = self.targets.iter().position(|id| id == target)?;
        self.frames
            .iter()
            .copied()
            .zip(self.scores[r].iter().copied())
            .fold(None, |best, (frame, score)| match best {
                Some((_, current)) if current >= score => best,
                _ => Some((frame, score)),
            })
    }

    pub fn to_table(&self) -> ComparisonTable {
        ComparisonTable {
            title: self.title.clone(),
            row_labels: self.targets.clone(),
            column_labels: self.frames.iter().map(ToString::to_string).collect(),
            rows: self.scores.clone(),
        }
    }
}
