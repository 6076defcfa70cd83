//! Step position and the snapshots taken on each transition.

use crate::layers::Classification;

/// Where the stepper is, and where it was before the last transition.
///
/// The completed index is always `current_index - 1` and is never stored.
/// The two snapshots feed the starting fractions of the next track
/// animations; `None` means "start from whatever is on screen".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressState {
    current_index: usize,
    previous_index: Option<usize>,
    previous_completed_index: Option<isize>,
}

impl ProgressState {
    /// The active step.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The last completed step, `-1` while nothing is completed.
    pub fn completed_index(&self) -> isize {
        self.current_index as isize - 1
    }

    /// Active step before the last transition.
    pub fn previous_index(&self) -> Option<usize> {
        self.previous_index
    }

    /// Completed index before the last transition; may be `-1`.
    pub fn previous_completed_index(&self) -> Option<isize> {
        self.previous_completed_index
    }

    /// Classification of node `index` under this state.
    pub fn classify(&self, index: usize) -> Classification {
        use std::cmp::Ordering::*;
        match index.cmp(&self.current_index) {
            Less => Classification::Completed,
            Equal => Classification::Active,
            Greater => Classification::Inactive,
        }
    }

    pub(crate) fn snapshot_completed(&mut self) {
        self.previous_completed_index = Some(self.completed_index());
    }

    pub(crate) fn transition_to(&mut self, index: usize) {
        self.previous_index = Some(self.current_index);
        self.current_index = index;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ProgressState::default();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.completed_index(), -1);
        assert_eq!(state.previous_index(), None);
        assert_eq!(state.previous_completed_index(), None);
        assert_eq!(state.classify(0), Classification::Active);
        assert_eq!(state.classify(1), Classification::Inactive);
    }

    #[test]
    fn test_transition_records_snapshots() {
        let mut state = ProgressState::default();
        state.snapshot_completed();
        state.transition_to(2);

        assert_eq!(state.current_index(), 2);
        assert_eq!(state.completed_index(), 1);
        assert_eq!(state.previous_index(), Some(0));
        assert_eq!(state.previous_completed_index(), Some(-1));
        assert_eq!(state.classify(1), Classification::Completed);

        state.reset();
        assert_eq!(state, ProgressState::default());
    }
}
