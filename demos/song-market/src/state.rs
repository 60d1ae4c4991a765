use std::rc::Rc;

use ethers::types::U256;
use thiserror::Error;
use yew::prelude::*;

use crate::contract::Song;

/// Placeholder shown while the fetched snapshot is empty.
pub const EMPTY_LIST_NOTE: &str = "No songs available yet.";

/// View model of the page: the latest wholesale snapshot of the on-chain
/// collection plus submission progress. Never updated optimistically; a new
/// snapshot arrives only from a read pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarketModel {
    pub songs: Vec<Song>,
    pub pending: bool,
    pub status: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MarketEvent {
    SongsLoaded(Vec<Song>),
    SubmitStarted,
    SubmitFailed(String),
}

impl MarketModel {
    pub fn apply(&self, event: MarketEvent) -> Self {
        let mut next = self.clone();
        match event {
            MarketEvent::SongsLoaded(songs) => {
                next.songs = songs;
                next.pending = false;
                next.status = None;
            }
            MarketEvent::SubmitStarted => {
                next.pending = true;
                next.status = None;
            }
            MarketEvent::SubmitFailed(message) => {
                next.pending = false;
                next.status = Some(message);
            }
        }
        next
    }
}

impl Reducible for MarketModel {
    type Action = MarketEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// What the user typed; validated before anything leaves the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadDraft {
    pub title: String,
    pub ipfs_hash: String,
    pub rent_price: String,
}

/// A draft that passed validation and can be submitted as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadRequest {
    pub title: String,
    pub ipfs_hash: String,
    pub rent_price: U256,
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Title must not be empty")]
    MissingTitle,

    #[error("IPFS hash must not be empty")]
    MissingIpfsHash,

    #[error("Rent price must be a positive number")]
    BadRentPrice,
}

impl UploadDraft {
    pub fn validate(&self) -> Result<UploadRequest, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        let ipfs_hash = self.ipfs_hash.trim();
        if ipfs_hash.is_empty() {
            return Err(ValidationError::MissingIpfsHash);
        }

        let rent_price = U256::from_dec_str(self.rent_price.trim())
            .map_err(|_| ValidationError::BadRentPrice)?;
        if rent_price.is_zero() {
            return Err(ValidationError::BadRentPrice);
        }

        Ok(UploadRequest {
            title: title.to_string(),
            ipfs_hash: ipfs_hash.to_string(),
            rent_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(title: &str, price: u64) -> Song {
        Song {
            title: title.to_string(),
            ipfs_hash: format!("Qm{title}"),
            rent_price: U256::from(price),
        }
    }

    fn draft(title: &str, hash: &str, price: &str) -> UploadDraft {
        UploadDraft {
            title: title.to_string(),
            ipfs_hash: hash.to_string(),
            rent_price: price.to_string(),
        }
    }

    #[test]
    fn fresh_model_has_an_empty_snapshot() {
        let model = MarketModel::default();
        assert!(model.songs.is_empty());
        assert!(!model.pending);
        assert!(model.status.is_none());
    }

    #[test]
    fn snapshots_replace_wholesale() {
        let model = MarketModel::default()
            .apply(MarketEvent::SongsLoaded(vec![song("One", 100)]))
            .apply(MarketEvent::SongsLoaded(vec![song("Two", 200), song("Three", 300)]));

        assert_eq!(model.songs.len(), 2);
        assert_eq!(model.songs[0].title, "Two");
    }

    #[test]
    fn a_snapshot_settles_a_pending_submission() {
        let model = MarketModel::default()
            .apply(MarketEvent::SubmitStarted)
            .apply(MarketEvent::SongsLoaded(vec![song("One", 100)]));

        assert!(!model.pending);
        assert!(model.status.is_none());
    }

    #[test]
    fn failed_submission_is_surfaced_and_keeps_the_snapshot() {
        let model = MarketModel::default()
            .apply(MarketEvent::SongsLoaded(vec![song("One", 100)]))
            .apply(MarketEvent::SubmitStarted)
            .apply(MarketEvent::SubmitFailed("Transaction rejected".to_string()));

        assert_eq!(model.songs.len(), 1);
        assert!(!model.pending);
        assert_eq!(model.status.as_deref(), Some("Transaction rejected"));
    }

    #[test]
    fn complete_drafts_validate() {
        let request = draft("Song A", "Qm123", "100").validate().unwrap();
        assert_eq!(request.title, "Song A");
        assert_eq!(request.ipfs_hash, "Qm123");
        assert_eq!(request.rent_price, U256::from(100));
    }

    #[test]
    fn drafts_are_trimmed_before_submission() {
        let request = draft(" Song A ", " Qm123 ", " 100 ").validate().unwrap();
        assert_eq!(request.title, "Song A");
        assert_eq!(request.ipfs_hash, "Qm123");
    }

    #[test]
    fn incomplete_drafts_are_rejected_locally() {
        assert_eq!(
            draft("", "Qm123", "100").validate(),
            Err(ValidationError::MissingTitle)
        );
        assert_eq!(
            draft("   ", "Qm123", "100").validate(),
            Err(ValidationError::MissingTitle)
        );
        assert_eq!(
            draft("Song A", "", "100").validate(),
            Err(ValidationError::MissingIpfsHash)
        );
        assert_eq!(
            draft("Song A", "Qm123", "0").validate(),
            Err(ValidationError::BadRentPrice)
        );
        assert_eq!(
            draft("Song A", "Qm123", "free").validate(),
            Err(ValidationError::BadRentPrice)
        );
        assert_eq!(
            draft("Song A", "Qm123", "").validate(),
            Err(ValidationError::BadRentPrice)
        );
    }
}
