use crate::error::HandoffError;
use crate::models::{Poll, PollDraft, VoteSelection};

/// Contract for the external "create poll" collaborator: accepts a draft,
/// returns the new poll id or an opaque failure reason.
pub trait CreatePoll {
    fn create_poll(&mut self, draft: &PollDraft) -> Result<String, HandoffError>;
}

/// Contract for the external vote-counting collaborator. Recording a vote
/// means `options[i].votes += 1` and `total_votes += 1` on the stored poll.
pub trait VoteRecorder {
    fn record_vote(&mut self, selection: &VoteSelection) -> Result<(), HandoffError>;
}

/// Session-scoped poll store implementing both collaborator contracts. Not
/// durable and not shared across sessions, so repeated visits to the same
/// poll can vote again.
#[derive(Debug, Default, Clone)]
pub struct InMemoryPolls {
    polls: Vec<Poll>,
}

impl InMemoryPolls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, poll: Poll) {
        self.polls.push(poll);
    }

    pub fn get(&self, poll_id: &str) -> Option<&Poll> {
        self.polls.iter().find(|poll| poll.id == poll_id)
    }

    pub fn polls(&self) -> &[Poll] {
        &self.polls
    }
}

impl CreatePoll for InMemoryPolls {
    fn create_poll(&mut self, draft: &PollDraft) -> Result<String, HandoffError> {
        let poll = Poll::from_draft(draft).map_err(|e| HandoffError::new(e.to_string()))?;
        let id = poll.id.clone();
        tracing::debug!(poll_id = %id, "poll created");
        self.polls.push(poll);
        Ok(id)
    }
}

impl VoteRecorder for InMemoryPolls {
    fn record_vote(&mut self, selection: &VoteSelection) -> Result<(), HandoffError> {
        let poll = self
            .polls
            .iter_mut()
            .find(|poll| poll.id == selection.poll_id)
            .ok_or_else(|| HandoffError::new(format!("unknown poll: {}", selection.poll_id)))?;
        let option = poll
            .options
            .iter_mut()
            .find(|option| option.id == selection.option_id)
            .ok_or_else(|| HandoffError::new(format!("unknown option: {}", selection.option_id)))?;
        option.votes += 1;
        poll.total_votes += 1;
        Ok(())
    }
}
