pub mod error;
pub mod handoff;
pub mod lifecycle;
pub mod models;
pub mod option_list;
pub mod validation;
pub mod vote_workflow;

pub use error::{Error, HandoffError, Result};
pub use handoff::{CreatePoll, InMemoryPolls, VoteRecorder};
pub use lifecycle::{status, PollStatus};
pub use models::*;
pub use option_list::{OptionList, OptionListError};
pub use validation::{is_submittable, validate_draft, DraftError, ValidationResult, MIN_OPTIONS};
pub use vote_workflow::{VoteError, VoteReceipt, VoteWorkflow, WorkflowState};
