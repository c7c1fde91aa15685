use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

use crate::error::HandoffError;
use crate::handoff::VoteRecorder;
use crate::models::{Poll, VoteSelection};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VoteError {
    #[error("Option {0:?} does not belong to this poll")]
    InvalidOption(String),
    #[error("Please select an option")]
    NoSelection,
    #[error("A vote was already submitted for this poll")]
    AlreadySubmitted,
    #[error("This poll has expired")]
    PollExpired,
    #[error("Vote submission failed: {0}")]
    Handoff(#[from] HandoffError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState {
    Selecting { selection: Option<String> },
    Submitted { option_id: String, option_text: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoteReceipt {
    pub poll_id: String,
    pub option_id: String,
    pub option_text: String,
}

impl VoteReceipt {
    /// Confirmation line shown after a successful vote.
    pub fn confirmation_message(&self) -> String {
        format!("You voted for: {}", self.option_text)
    }
}

/// Single-choice voting session for one poll view. `Submitted` is terminal:
/// there is no way back to `Selecting` for the same poll short of reloading
/// the page, and nothing here remembers votes across sessions.
#[derive(Debug, Clone)]
pub struct VoteWorkflow {
    poll: Poll,
    state: WorkflowState,
}

impl VoteWorkflow {
    pub fn new(poll: Poll) -> Self {
        Self {
            poll,
            state: WorkflowState::Selecting { selection: None },
        }
    }

    pub fn poll(&self) -> &Poll {
        &self.poll
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn has_voted(&self) -> bool {
        matches!(self.state, WorkflowState::Submitted { .. })
    }

    pub fn selection(&self) -> Option<VoteSelection> {
        match &self.state {
            WorkflowState::Selecting {
                selection: Some(option_id),
            } => Some(VoteSelection {
                poll_id: self.poll.id.clone(),
                option_id: option_id.clone(),
            }),
            _ => None,
        }
    }

    /// Gate for the submit button.
    pub fn can_submit(&self) -> bool {
        matches!(
            self.state,
            WorkflowState::Selecting { selection: Some(_) }
        )
    }

    /// Records the chosen option without leaving `Selecting`. An id outside
    /// the poll's option set is rejected and the prior selection stands.
    pub fn select(&mut self, option_id: impl Into<String>) -> Result<(), VoteError> {
        let option_id = option_id.into();
        let WorkflowState::Selecting { selection } = &mut self.state else {
            return Err(VoteError::AlreadySubmitted);
        };
        if !self.poll.options.iter().any(|option| option.id == option_id) {
            return Err(VoteError::InvalidOption(option_id));
        }
        *selection = Some(option_id);
        Ok(())
    }

    /// Commits the vote. Expiration is re-derived here, at the moment of
    /// commit, never trusted from load time. A recorder failure leaves the
    /// state in `Selecting` so the user can retry.
    pub fn submit(
        &mut self,
        recorder: &mut impl VoteRecorder,
        now: OffsetDateTime,
    ) -> Result<VoteReceipt, VoteError> {
        let WorkflowState::Selecting { selection } = &self.state else {
            return Err(VoteError::AlreadySubmitted);
        };
        let Some(option_id) = selection.clone() else {
            return Err(VoteError::NoSelection);
        };
        if self.poll.is_expired(now) {
            tracing::warn!(poll_id = %self.poll.id, "poll expired between load and submit");
            return Err(VoteError::PollExpired);
        }
        let option_text = self
            .poll
            .option(&option_id)
            .map(|option| option.text.clone())
            .ok_or_else(|| VoteError::InvalidOption(option_id.clone()))?;
        let selection = VoteSelection {
            poll_id: self.poll.id.clone(),
            option_id: option_id.clone(),
        };
        recorder.record_vote(&selection)?;
        tracing::debug!(poll_id = %selection.poll_id, option_id = %selection.option_id, "vote submitted");
        self.state = WorkflowState::Submitted {
            option_id: option_id.clone(),
            option_text: option_text.clone(),
        };
        Ok(VoteReceipt {
            poll_id: selection.poll_id,
            option_id,
            option_text,
        })
    }
}
