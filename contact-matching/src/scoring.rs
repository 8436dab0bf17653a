//! Fuzzy matching of one external contact against a pool of name-similar CRM
//! contacts.
//!
//! Each call is a fold over the similarity results that carries the best
//! suggestion so far. Nothing is shared between calls.

use std::collections::HashSet;

use shared_types::{
    ContactMethod, ContactMethodType, MatchCandidate, SimilarityResult, SuggestedMatch,
};

use crate::config::FuzzyConfig;
use crate::normalize::{normalize_email, normalize_phone_loose};

/// Matched and counted contact methods for one existing contact
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MethodOverlap {
    pub matches: usize,
    pub total: usize,
}

/// Which contact method types take part in overlap counting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MethodScope {
    EmailsAndPhones,
    EmailsOnly,
}

impl MethodScope {
    fn includes(self, method_type: ContactMethodType) -> bool {
        match self {
            MethodScope::EmailsAndPhones => method_type.is_matchable(),
            MethodScope::EmailsOnly => method_type.is_email(),
        }
    }
}

/// Normalized identifiers of the external contact being matched
struct CandidateIdentifiers {
    emails: HashSet<String>,
    phones: HashSet<String>,
}

impl CandidateIdentifiers {
    fn from_candidate(candidate: &MatchCandidate) -> Self {
        Self {
            emails: candidate
                .emails
                .iter()
                .map(|email| normalize_email(&email.value))
                .collect(),
            phones: candidate
                .phones
                .iter()
                .map(|phone| normalize_phone_loose(&phone.value))
                .collect(),
        }
    }

    fn single_email(email: &str) -> Self {
        Self {
            emails: HashSet::from([normalize_email(email)]),
            phones: HashSet::new(),
        }
    }

    /// Count overlap with a contact's methods. Types outside `scope` are
    /// skipped entirely and never reach the denominator.
    fn overlap(&self, methods: &[ContactMethod], scope: MethodScope) -> MethodOverlap {
        methods
            .iter()
            .filter(|method| scope.includes(method.method_type))
            .fold(MethodOverlap::default(), |mut overlap, method| {
                let matched = if method.method_type.is_email() {
                    self.emails.contains(&normalize_email(&method.value))
                } else {
                    self.phones.contains(&normalize_phone_loose(&method.value))
                };

                overlap.total += 1;
                if matched {
                    overlap.matches += 1;
                }
                overlap
            })
    }
}

/// Whether `score` replaces the current best.
///
/// The comparison is strict, so on equal scores the contact seen first in the
/// similarity list keeps the suggestion. With no best yet the bar is 0.0, so a
/// zero score is never suggested.
pub fn outranks(score: f64, best: Option<f64>) -> bool {
    score > best.unwrap_or(0.0)
}

fn select_best(
    similar: &[SimilarityResult],
    config: &FuzzyConfig,
    identifiers: &CandidateIdentifiers,
    scope: MethodScope,
) -> Option<SuggestedMatch> {
    similar
        .iter()
        .fold(None, |best: Option<SuggestedMatch>, result| {
            let overlap = identifiers.overlap(&result.contact.methods, scope);
            let score = config.score(result.name_similarity, overlap.matches, overlap.total);

            if score >= config.confidence_threshold
                && outranks(score, best.as_ref().map(|b| b.confidence))
            {
                Some(SuggestedMatch {
                    contact_id: result.contact.id,
                    contact_name: result.contact.full_name.clone(),
                    confidence: score,
                })
            } else {
                best
            }
        })
}

/// Find the existing contact that best matches an import candidate.
///
/// `similar` is the pool returned by the name similarity search for the
/// candidate's effective name. Returns `None` when the candidate has no name
/// or no contact reaches `config.confidence_threshold`.
pub fn find_best_match(
    candidate: &MatchCandidate,
    similar: &[SimilarityResult],
    config: &FuzzyConfig,
) -> Option<SuggestedMatch> {
    if candidate.effective_name().is_empty() {
        return None;
    }

    let identifiers = CandidateIdentifiers::from_candidate(candidate);
    select_best(similar, config, &identifiers, MethodScope::EmailsAndPhones)
}

/// Find the existing contact that best matches a calendar attendee.
///
/// Attendees only carry an email, so only email methods are counted.
pub fn find_attendee_match(
    display_name: &str,
    email: &str,
    similar: &[SimilarityResult],
    config: &FuzzyConfig,
) -> Option<SuggestedMatch> {
    if display_name.is_empty() {
        return None;
    }

    let identifiers = CandidateIdentifiers::single_email(email);
    select_best(similar, config, &identifiers, MethodScope::EmailsOnly)
}
