use std::cmp::Ordering;

use shared_types::RankedCandidate;

/// Display order for import candidates.
///
/// Matched candidates come first, highest confidence first. Unmatched ones
/// follow in case-sensitive alphabetical order of their effective name, with
/// nameless candidates last.
pub fn compare_candidates(a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
    match (&a.suggested_match, &b.suggested_match) {
        (Some(a_match), Some(b_match)) => b_match.confidence.total_cmp(&a_match.confidence),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => compare_names(
            &a.candidate.effective_name(),
            &b.candidate.effective_name(),
        ),
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => a.cmp(b),
    }
}

/// Sort a scored batch for display. The sort is stable, so candidates that
/// compare equal keep their input order.
pub fn sort_candidates(mut candidates: Vec<RankedCandidate>) -> Vec<RankedCandidate> {
    candidates.sort_by(compare_candidates);
    candidates
}
