use serde::{Deserialize, Serialize};

use crate::models::PollOptionDraft;
use crate::validation::MIN_OPTIONS;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum OptionListError {
    #[error("A poll needs at least {MIN_OPTIONS} options")]
    BelowMinimum,
    #[error("No option at index {0}")]
    IndexOutOfBounds(usize),
}

/// Ordered option drafts for one creation form, with the minimum-cardinality
/// invariant enforced at the mutation boundary. A new list starts with
/// `MIN_OPTIONS` empty drafts, matching the form's default state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct OptionList {
    options: Vec<PollOptionDraft>,
}

impl OptionList {
    pub fn new() -> Self {
        Self {
            options: vec![PollOptionDraft::default(); MIN_OPTIONS],
        }
    }

    /// Appends one empty draft. There is no upper limit.
    pub fn add(&mut self) {
        self.options.push(PollOptionDraft::default());
    }

    /// Removes the option at `index`, preserving the order of the rest.
    /// Refused, leaving the list untouched, when the result would drop below
    /// `MIN_OPTIONS`. The UI disables the delete action in that case, so a
    /// refusal here means a caller bug.
    pub fn remove(&mut self, index: usize) -> Result<(), OptionListError> {
        if index >= self.options.len() {
            return Err(OptionListError::IndexOutOfBounds(index));
        }
        if self.options.len() <= MIN_OPTIONS {
            tracing::warn!(index, len = self.options.len(), "refused option removal below minimum");
            return Err(OptionListError::BelowMinimum);
        }
        self.options.remove(index);
        Ok(())
    }

    /// Replaces the text at `index`. Empty text is fine here; emptiness is a
    /// validation concern, not a structural one.
    pub fn update(&mut self, index: usize, text: impl Into<String>) -> Result<(), OptionListError> {
        match self.options.get_mut(index) {
            Some(option) => {
                option.text = text.into();
                Ok(())
            }
            None => Err(OptionListError::IndexOutOfBounds(index)),
        }
    }

    /// Whether the UI should offer the delete action at all.
    pub fn can_remove(&self) -> bool {
        self.options.len() > MIN_OPTIONS
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PollOptionDraft> {
        self.options.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PollOptionDraft> {
        self.options.iter()
    }

    pub fn as_slice(&self) -> &[PollOptionDraft] {
        &self.options
    }
}

impl Default for OptionList {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<PollOptionDraft>> for OptionList {
    fn from(options: Vec<PollOptionDraft>) -> Self {
        Self { options }
    }
}
