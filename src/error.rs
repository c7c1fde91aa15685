use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Opaque failure reason from an external collaborator (poll creation or
/// vote recording). Passed through to the user unchanged.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("{reason}")]
pub struct HandoffError {
    pub reason: String,
}

impl HandoffError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Poll draft failed validation ({} field errors)", .0.len())]
    InvalidDraft(BTreeMap<String, String>),
    #[error(transparent)]
    OptionList(#[from] crate::option_list::OptionListError),
    #[error(transparent)]
    Vote(#[from] crate::vote_workflow::VoteError),
    #[error(transparent)]
    Handoff(#[from] HandoffError),
}

pub type Result<T> = std::result::Result<T, Error>;
