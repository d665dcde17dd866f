//! Step-position state machine.

use crate::{AppError, AppResult};

/// Current position within a fixed, ordered list of steps.
///
/// `current_step` always stays within `0..steps.len()`; the only mutations
/// are the bounded [`advance`](Self::advance) and [`retreat`](Self::retreat).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WizardState {
    current_step: usize,
    steps: Vec<String>,
}

impl WizardState {
    /// Start at step 0. An empty label list has no valid position and is refused.
    pub fn new<I, S>(steps: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let steps: Vec<String> = steps.into_iter().map(Into::into).collect();
        if steps.is_empty() {
            return Err(AppError::Validation("a wizard needs at least one step".into()));
        }
        Ok(Self {
            current_step: 0,
            steps,
        })
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn last_step(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn is_first(&self) -> bool {
        self.current_step == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_step == self.last_step()
    }

    /// Move one step forward. Returns `false` (and changes nothing) on the last step.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current_step += 1;
        true
    }

    /// Move one step back. Returns `false` (and changes nothing) on step 0.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current_step -= 1;
        true
    }
}
