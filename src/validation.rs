use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;

use crate::models::{PollDraft, EXPIRY_FORMAT};

pub const MIN_OPTIONS: usize = 2;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Poll title is required")]
    TitleRequired,
    #[error("At least {MIN_OPTIONS} options are required")]
    TooFewOptions,
    #[error("Option text cannot be empty")]
    EmptyOptionText,
    #[error("Expiration date is required")]
    ExpirationRequired,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ValidationResult {
    Valid,
    Invalid {
        #[serde(rename = "fieldErrors")]
        field_errors: BTreeMap<String, String>,
    },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn field_errors(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Valid => None,
            Self::Invalid { field_errors } => Some(field_errors),
        }
    }
}

pub(crate) fn parse_expiry(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value.trim(), EXPIRY_FORMAT)
}

/// Full draft validation. Every rule is evaluated independently so all
/// violations are reported at once, keyed by the wire name of the field
/// (`title`, `options`, `options[i].text`, `expiresAt`). An unparseable
/// expiration date is the same failure as a missing one.
pub fn validate_draft(draft: &PollDraft) -> ValidationResult {
    let mut field_errors = BTreeMap::new();

    if draft.title.trim().is_empty() {
        field_errors.insert("title".to_string(), DraftError::TitleRequired.to_string());
    }
    if draft.options.len() < MIN_OPTIONS {
        field_errors.insert("options".to_string(), DraftError::TooFewOptions.to_string());
    }
    for (index, option) in draft.options.iter().enumerate() {
        if option.text.trim().is_empty() {
            field_errors.insert(
                format!("options[{index}].text"),
                DraftError::EmptyOptionText.to_string(),
            );
        }
    }
    if draft.expires_at.trim().is_empty() || parse_expiry(&draft.expires_at).is_err() {
        field_errors.insert(
            "expiresAt".to_string(),
            DraftError::ExpirationRequired.to_string(),
        );
    }

    if field_errors.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid { field_errors }
    }
}

/// Submit-button gate, recomputed from scratch on every field change. Weaker
/// than [`validate_draft`]: the date is only required to be non-empty, since
/// the date input widget guarantees its shape.
pub fn is_submittable(draft: &PollDraft) -> bool {
    !draft.title.trim().is_empty()
        && draft.options.len() >= MIN_OPTIONS
        && draft.options.iter().all(|option| !option.text.trim().is_empty())
        && !draft.expires_at.is_empty()
}
