use std::collections::HashSet;

use shared_types::{ExistingContactSummary, SimilarityResult};

use crate::error::MatchingError;

/// Source of name-similar existing contacts.
///
/// In production this is a trigram query against the contacts table.
/// Implementations return results with `name_similarity >= min_similarity`,
/// sorted by similarity descending, at most `limit` of them.
pub trait SimilaritySearch: Send + Sync {
    fn find_similar(
        &self,
        name: &str,
        min_similarity: f64,
        limit: usize,
    ) -> Result<Vec<SimilarityResult>, MatchingError>;
}

/// In-memory contact list searched with trigram similarity
pub struct ContactIndex {
    contacts: Vec<ExistingContactSummary>,
}

impl ContactIndex {
    pub fn new(contacts: Vec<ExistingContactSummary>) -> Self {
        Self { contacts }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl SimilaritySearch for ContactIndex {
    fn find_similar(
        &self,
        name: &str,
        min_similarity: f64,
        limit: usize,
    ) -> Result<Vec<SimilarityResult>, MatchingError> {
        let mut results: Vec<SimilarityResult> = self
            .contacts
            .iter()
            .filter_map(|contact| {
                let name_similarity = trigram_similarity(name, &contact.full_name);
                (name_similarity >= min_similarity).then(|| SimilarityResult {
                    contact: contact.clone(),
                    name_similarity,
                })
            })
            .collect();

        results.sort_by(|a, b| b.name_similarity.total_cmp(&a.name_similarity));
        results.truncate(limit);

        Ok(results)
    }
}

/// Trigram similarity in the style of PostgreSQL's `pg_trgm`.
///
/// Text is lowercased and split into alphanumeric words; each word is padded
/// with two leading blanks and one trailing blank before trigrams are taken.
/// The result is shared trigrams over distinct trigrams of both strings.
pub fn trigram_similarity(a: &str, b: &str) -> f64 {
    let a_trigrams = trigrams(a);
    let b_trigrams = trigrams(b);

    let union = a_trigrams.union(&b_trigrams).count();
    if union == 0 {
        return 0.0;
    }

    let shared = a_trigrams.intersection(&b_trigrams).count();
    shared as f64 / union as f64
}

fn trigrams(text: &str) -> HashSet<[char; 3]> {
    let mut set = HashSet::new();

    for word in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
    {
        let padded: Vec<char> = "  "
            .chars()
            .chain(word.to_lowercase().chars())
            .chain(std::iter::once(' '))
            .collect();

        for window in padded.windows(3) {
            set.insert([window[0], window[1], window[2]]);
        }
    }

    set
}
