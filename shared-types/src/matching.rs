use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::candidate::{CandidateEmail, CandidatePhone, MatchCandidate};
use crate::contact::ExistingContactSummary;

/// An existing contact returned by the fuzzy name search, with its name
/// similarity in `[0, 1]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub contact: ExistingContactSummary,
    pub name_similarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SuggestedMatch {
    pub contact_id: Uuid,
    pub contact_name: String,
    pub confidence: f64,
}

/// A candidate paired with the outcome of its match attempt
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    pub candidate: MatchCandidate,
    pub suggested_match: Option<SuggestedMatch>,
}

impl RankedCandidate {
    pub fn new(candidate: MatchCandidate, suggested_match: Option<SuggestedMatch>) -> Self {
        Self {
            candidate,
            suggested_match,
        }
    }
}

/// Query parameters for the import candidate listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ListImportCandidatesRequest {
    pub source: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImportCandidateResponse {
    pub id: Uuid,
    pub source: String,
    pub display_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub emails: Vec<CandidateEmail>,
    pub phones: Vec<CandidatePhone>,
    pub suggested_match: Option<SuggestedMatch>,
}

impl From<RankedCandidate> for ImportCandidateResponse {
    fn from(ranked: RankedCandidate) -> Self {
        let candidate = ranked.candidate;
        Self {
            id: candidate.id,
            source: candidate.source,
            display_name: candidate.display_name,
            first_name: candidate.first_name,
            last_name: candidate.last_name,
            emails: candidate.emails,
            phones: candidate.phones,
            suggested_match: ranked.suggested_match,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImportCandidatesResponse {
    pub candidates: Vec<ImportCandidateResponse>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub pages: usize,
}
