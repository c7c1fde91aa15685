use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;
use uuid::Uuid;

use crate::error::Error;
use crate::option_list::OptionList;
use crate::validation::{parse_expiry, validate_draft, DraftError, ValidationResult};

pub(crate) const EXPIRY_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

time::serde::format_description!(expiry_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PollOptionDraft {
    pub text: String,
}

impl PollOptionDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// In-progress creation form state, owned by one creation session. The
/// option sequence is the guarded [`OptionList`] rather than a bare vec.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PollDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub options: OptionList,
    pub expires_at: String,
}

impl Default for PollDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            options: OptionList::new(),
            expires_at: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PollOption {
    pub id: String,
    pub text: String,
    pub votes: u32,
}

/// Persisted poll. Read-only for the listing and voting flows; only the
/// vote-counting collaborator increments the counts, keeping
/// `total_votes == sum(options[*].votes)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub options: Vec<PollOption>,
    pub total_votes: u32,
    #[serde(with = "expiry_date")]
    pub expires_at: Date,
}

impl Poll {
    /// Builds a poll from a creation draft, minting fresh ids and zeroed
    /// counts. The draft must pass [`validate_draft`]; its field errors come
    /// back otherwise. Parsing the expiration here is what lets
    /// [`crate::lifecycle::status`] stay total.
    pub fn from_draft(draft: &PollDraft) -> crate::Result<Self> {
        if let ValidationResult::Invalid { field_errors } = validate_draft(draft) {
            return Err(Error::InvalidDraft(field_errors));
        }
        let expires_at = parse_expiry(&draft.expires_at).map_err(|_| {
            Error::InvalidDraft(BTreeMap::from([(
                "expiresAt".to_string(),
                DraftError::ExpirationRequired.to_string(),
            )]))
        })?;
        let options = draft
            .options
            .iter()
            .map(|option| PollOption {
                id: Uuid::new_v4().to_string(),
                text: option.text.trim().to_string(),
                votes: 0,
            })
            .collect();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title.trim().to_string(),
            description: draft
                .description
                .as_ref()
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            options,
            total_votes: 0,
            expires_at,
        })
    }

    pub fn option(&self, option_id: &str) -> Option<&PollOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}

/// One user's in-progress choice, handed to the vote-counting collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoteSelection {
    pub poll_id: String,
    pub option_id: String,
}
