//! Batch matching for the import candidate listing.
//!
//! Every candidate is matched on its own against its own similarity pool,
//! then the whole batch is ranked, and only then paginated.

use serde::{Deserialize, Serialize};
use shared_types::{
    ImportCandidateResponse, ImportCandidatesResponse, ListImportCandidatesRequest,
    MatchCandidate, RankedCandidate, SuggestedMatch,
};

use crate::config::FuzzyConfig;
use crate::ranking::sort_candidates;
use crate::scoring::find_best_match;
use crate::search::SimilaritySearch;

/// Default number of similar contacts fetched per candidate
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Paging bounds for the candidate listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingLimits {
    pub default_limit: usize,
    pub max_limit: usize,
    /// Cap on how many candidates are scored for one listing
    pub max_candidates: usize,
}

impl Default for ListingLimits {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 100,
            max_candidates: 10_000,
        }
    }
}

pub struct ImportMatchService<S: SimilaritySearch> {
    search: S,
    config: FuzzyConfig,
    search_limit: usize,
}

impl<S: SimilaritySearch> ImportMatchService<S> {
    pub fn new(search: S, config: FuzzyConfig) -> Self {
        Self {
            search,
            config,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn with_search_limit(mut self, search_limit: usize) -> Self {
        self.search_limit = search_limit;
        self
    }

    pub fn config(&self) -> &FuzzyConfig {
        &self.config
    }

    /// Suggest an existing contact for one candidate.
    ///
    /// A failing similarity search is logged and treated as "no similar
    /// contacts", so one bad lookup never fails a whole listing.
    pub fn suggest_match(&self, candidate: &MatchCandidate) -> Option<SuggestedMatch> {
        let name = candidate.effective_name();
        if name.is_empty() {
            return None;
        }

        let similar = match self.search.find_similar(
            &name,
            self.config.min_similarity_threshold,
            self.search_limit,
        ) {
            Ok(similar) => similar,
            Err(e) => {
                tracing::warn!("Failed to find similar contacts for {}: {}", name, e);
                return None;
            }
        };

        find_best_match(candidate, &similar, &self.config)
    }

    /// Score every candidate and return them in display order
    pub fn rank_candidates(&self, candidates: Vec<MatchCandidate>) -> Vec<RankedCandidate> {
        let ranked: Vec<RankedCandidate> = candidates
            .into_iter()
            .map(|candidate| {
                let suggested_match = self.suggest_match(&candidate);
                RankedCandidate::new(candidate, suggested_match)
            })
            .collect();

        let matched = ranked.iter().filter(|r| r.suggested_match.is_some()).count();
        tracing::debug!(
            "Scored {} import candidates, {} with a suggested match",
            ranked.len(),
            matched
        );

        sort_candidates(ranked)
    }

    /// Build one page of the import candidate listing.
    ///
    /// Confidence is only known after scoring, so the full batch is ranked
    /// before the requested page is cut out of it.
    pub fn list_candidates(
        &self,
        candidates: Vec<MatchCandidate>,
        request: &ListImportCandidatesRequest,
        limits: &ListingLimits,
    ) -> ImportCandidatesResponse {
        let page = request.page.filter(|page| *page >= 1).unwrap_or(1);
        let limit = request
            .limit
            .filter(|limit| (1..=limits.max_limit).contains(limit))
            .unwrap_or(limits.default_limit)
            .max(1);

        let candidates: Vec<MatchCandidate> = candidates
            .into_iter()
            .filter(|c| request.source.as_ref().map_or(true, |source| &c.source == source))
            .take(limits.max_candidates)
            .collect();

        let ranked = self.rank_candidates(candidates);
        let total = ranked.len();
        let pages = total.div_ceil(limit);

        let offset = page.saturating_sub(1).saturating_mul(limit).min(total);
        let candidates = ranked
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(ImportCandidateResponse::from)
            .collect();

        ImportCandidatesResponse {
            candidates,
            total,
            page,
            limit,
            pages,
        }
    }
}
