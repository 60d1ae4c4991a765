use std::rc::Rc;

use ethers::types::U256;
use thiserror::Error;
use yew::prelude::*;

/// Sentinel displayed until the first read pass lands.
pub const DATA_PLACEHOLDER: &str = "nil";

/// View model of the page. Mutated only through `apply`; the latest completed
/// dispatch to a field wins.
#[derive(Clone, Debug, PartialEq)]
pub struct StorageModel {
    pub data: String,
    pub draft: String,
    pub pending: bool,
    pub status: Option<String>,
}

impl Default for StorageModel {
    fn default() -> Self {
        Self {
            data: DATA_PLACEHOLDER.to_string(),
            draft: String::new(),
            pending: false,
            status: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StorageEvent {
    DataLoaded(String),
    DraftChanged(String),
    SubmitStarted,
    SubmitFailed(String),
}

impl StorageModel {
    pub fn apply(&self, event: StorageEvent) -> Self {
        let mut next = self.clone();
        match event {
            StorageEvent::DataLoaded(data) => {
                next.data = data;
                next.draft.clear();
                next.pending = false;
                next.status = None;
            }
            StorageEvent::DraftChanged(draft) => next.draft = draft,
            StorageEvent::SubmitStarted => {
                next.pending = true;
                next.status = None;
            }
            StorageEvent::SubmitFailed(message) => {
                next.pending = false;
                next.status = Some(message);
            }
        }
        next
    }
}

impl Reducible for StorageModel {
    type Action = StorageEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Enter a value first")]
    MissingValue,

    #[error("Not an unsigned decimal number: {0}")]
    NotANumber(String),
}

/// Checks the draft the way the contract will read it, before touching the
/// network.
pub fn parse_value(raw: &str) -> Result<U256, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingValue);
    }
    U256::from_dec_str(trimmed).map_err(|_| ValidationError::NotANumber(trimmed.to_string()))
}
