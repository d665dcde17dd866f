//! Progress indicator model.
//!
//! [`step_markers`] is a pure function of the current position; the
//! `Stepper` component renders whatever it returns.

/// One numbered marker in the stepper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepMarker {
    /// Zero-based index
    pub index: usize,
    /// Human-readable label
    pub label: String,
    /// Highlighted when the wizard is on or past this step
    pub reached: bool,
    /// Connector to the next marker (`None` on the last step)
    pub connector: Option<Connector>,
}

impl StepMarker {
    /// One-based number shown inside the marker.
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// The bar between two consecutive markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connector {
    /// The step on its left has been completed
    pub done: bool,
}

/// Build the markers for `steps` with the wizard on `current_step`.
pub fn step_markers<S: AsRef<str>>(current_step: usize, steps: &[S]) -> Vec<StepMarker> {
    let last = steps.len().saturating_sub(1);
    steps
        .iter()
        .enumerate()
        .map(|(index, label)| StepMarker {
            index,
            label: label.as_ref().to_string(),
            reached: index <= current_step,
            connector: (index < last).then(|| Connector {
                done: index < current_step,
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlighting_is_inclusive_of_current_step() {
        let markers = step_markers(1, &["A", "B", "C"]);
        let reached: Vec<bool> = markers.iter().map(|m| m.reached).collect();
        assert_eq!(reached, vec![true, true, false]);
        assert_eq!(markers[2].number(), 3);
    }

    #[test]
    fn connectors_sit_between_steps_only() {
        let markers = step_markers(1, &["A", "B", "C"]);
        assert_eq!(markers[0].connector, Some(Connector { done: true }));
        assert_eq!(markers[1].connector, Some(Connector { done: false }));
        assert_eq!(markers[2].connector, None);
    }

    #[test]
    fn first_step_reaches_only_itself() {
        let markers = step_markers(0, &["A", "B"]);
        assert!(markers[0].reached);
        assert!(!markers[1].reached);
        assert_eq!(markers[0].connector, Some(Connector { done: false }));
    }

    #[test]
    fn last_step_reaches_everything() {
        let markers = step_markers(2, &["A", "B", "C"]);
        assert!(markers.iter().all(|m| m.reached));
        assert!(markers
            .iter()
            .filter_map(|m| m.connector)
            .all(|c| c.done));
    }
}
