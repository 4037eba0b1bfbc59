use playback_core::catalog::Catalog;
use playback_core::request::{classify_event, EventClass};
use playback_core::response::{
    SkillResponse, COMPLETION_MESSAGE, IDLE_PROMPT_MESSAGE, NOTHING_TO_PLAY_MESSAGE, START_MESSAGE,
};
use playback_core::transition::{advance_step, start_step, AdvanceStep, StartStep};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::adapters::media_store::{MediaStore, MediaStoreError};

/// Lifetime of every minted retrieval URL.
pub const GRANT_TTL_SECS: u64 = 3600;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlaybackError {
    #[error(transparent)]
    Store(#[from] MediaStoreError),
    #[error("no catalog entry at index {index} (catalog length {catalog_len})")]
    IndexOutOfRange { index: usize, catalog_len: usize },
}

/// Handles one inbound skill event and always yields a well-formed response.
///
/// Storage and minting failures are caught at the boundary of the start and
/// advance paths and converted to the terminal generic error response; they
/// never propagate to the invoking host.
pub fn handle_skill_event(event: &Value, store: &impl MediaStore) -> SkillResponse {
    match classify_event(event) {
        EventClass::SessionStart => start_playback(store).unwrap_or_else(|playback_error| {
            error!(event = "start_failed", error = %playback_error);
            SkillResponse::generic_error()
        }),
        EventClass::AdvancePlayback { reported_index } => advance_playback(reported_index, store)
            .unwrap_or_else(|playback_error| {
                error!(event = "advance_failed", reported_index, error = %playback_error);
                SkillResponse::generic_error()
            }),
        EventClass::UnrelatedUserEvent => {
            warn!(event = "unrelated_user_event_ignored");
            SkillResponse::listening()
        }
        EventClass::Unrecognized => {
            info!(event = "idle_prompt");
            SkillResponse::spoken(IDLE_PROMPT_MESSAGE, false)
        }
    }
}

fn start_playback(store: &impl MediaStore) -> Result<SkillResponse, PlaybackError> {
    let catalog = resolve_catalog(store)?;
    match start_step(catalog.len()) {
        StartStep::NothingToPlay => {
            info!(event = "catalog_empty");
            Ok(SkillResponse::spoken(NOTHING_TO_PLAY_MESSAGE, true))
        }
        StartStep::Play { index } => play_entry(&catalog, index, Some(START_MESSAGE), store),
    }
}

fn advance_playback(
    reported_index: usize,
    store: &impl MediaStore,
) -> Result<SkillResponse, PlaybackError> {
    let catalog = resolve_catalog(store)?;
    match advance_step(reported_index, catalog.len()) {
        AdvanceStep::Completed => {
            info!(event = "playback_completed", catalog_len = catalog.len());
            Ok(SkillResponse::spoken(COMPLETION_MESSAGE, true))
        }
        AdvanceStep::Play { index } => play_entry(&catalog, index, None, store),
    }
}

fn resolve_catalog(store: &impl MediaStore) -> Result<Catalog, PlaybackError> {
    let catalog = Catalog::from_listing(store.list_keys()?);
    info!(event = "catalog_resolved", entries = catalog.len());
    Ok(catalog)
}

fn play_entry(
    catalog: &Catalog,
    index: usize,
    speech: Option<&str>,
    store: &impl MediaStore,
) -> Result<SkillResponse, PlaybackError> {
    let key = catalog.get(index).ok_or(PlaybackError::IndexOutOfRange {
        index,
        catalog_len: catalog.len(),
    })?;
    let video_url = store.mint_retrieval_url(key, GRANT_TTL_SECS)?;
    info!(event = "grant_minted", index, key);
    Ok(SkillResponse::video(&video_url, index, speech))
}
