//! Assembly state machine.

use std::fmt;

/// State of one assembly run.
///
/// Runs move `Validating → Deriving → Rendering → Finalizing → Done`, or
/// to `Failed` from any non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Validating,
    Deriving,
    Rendering,
    Finalizing,
    Done,
    Failed,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Validating => "validating",
            Stage::Deriving => "deriving",
            Stage::Rendering => "rendering",
            Stage::Finalizing => "finalizing",
            Stage::Done => "done",
            Stage::Failed => "failed",
        }
    }

    /// The state that follows a successful run of this stage.
    ///
    /// The assembler uses this to refuse phases scheduled out of order.
    pub fn next(&self) -> Stage {
        match self {
            Stage::Validating => Stage::Deriving,
            Stage::Deriving => Stage::Rendering,
            Stage::Rendering => Stage::Finalizing,
            Stage::Finalizing | Stage::Done => Stage::Done,
            Stage::Failed => Stage::Failed,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        let mut stage = Stage::Validating;
        let mut seen = vec![stage];
        while stage != Stage::Done {
            stage = stage.next();
            seen.push(stage);
        }
        assert_eq!(
            seen,
            [
                Stage::Validating,
                Stage::Deriving,
                Stage::Rendering,
                Stage::Finalizing,
                Stage::Done
            ]
        );
        assert_eq!(Stage::Failed.next(), Stage::Failed);
    }
}
