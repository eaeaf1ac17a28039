/// Who the rally went to: `Win` scores for the own side, `Loss` for the
/// opponent. The display strings are the ones the log and the CSV use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,  // 得分
    Loss, // 失分
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Win => "得分",
            Outcome::Loss => "失分",
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win)
    }

    pub fn is_loss(&self) -> bool {
        matches!(self, Outcome::Loss)
    }
}
