use anyhow::{Context, Result};
use contact_matching::{match_attendee, ContactIndex, ImportMatchService};
use serde::de::DeserializeOwned;
use shared_types::{
    ExistingContactSummary, ImportCandidatesResponse, ListImportCandidatesRequest,
    MatchCandidate, SuggestedMatch,
};
use std::path::Path;

use crate::config::MatchConfig;

/// Read a JSON document, accepting either a bare array or `{"<key>": [...]}`
fn load_list<T: DeserializeOwned>(path: &Path, key: &str) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;

    if let Some(inner) = value.get_mut(key) {
        value = inner.take();
    }

    serde_json::from_value(value)
        .with_context(|| format!("Unexpected {} format in {}", key, path.display()))
}

pub fn load_contacts(path: &Path) -> Result<ContactIndex> {
    let contacts: Vec<ExistingContactSummary> = load_list(path, "contacts")?;
    tracing::info!("Loaded {} existing contacts from {}", contacts.len(), path.display());
    Ok(ContactIndex::new(contacts))
}

pub fn load_candidates(path: &Path) -> Result<Vec<MatchCandidate>> {
    let candidates: Vec<MatchCandidate> = load_list(path, "candidates")?;
    tracing::info!("Loaded {} import candidates from {}", candidates.len(), path.display());
    Ok(candidates)
}

/// Match, rank and paginate import candidates with the import profile
pub fn rank(
    config: &MatchConfig,
    candidates_path: &Path,
    contacts_path: &Path,
    request: &ListImportCandidatesRequest,
) -> Result<ImportCandidatesResponse> {
    let index = load_contacts(contacts_path)?;
    let candidates = load_candidates(candidates_path)?;

    let service =
        ImportMatchService::new(index, config.import).with_search_limit(config.search.limit);

    Ok(service.list_candidates(candidates, request, &config.listing))
}

/// Match one calendar attendee with the calendar profile
pub fn attendee(
    config: &MatchConfig,
    name: &str,
    email: &str,
    contacts_path: &Path,
) -> Result<Option<SuggestedMatch>> {
    let index = load_contacts(contacts_path)?;
    Ok(match_attendee(
        &index,
        &config.calendar,
        config.search.limit,
        name,
        email,
    ))
}
