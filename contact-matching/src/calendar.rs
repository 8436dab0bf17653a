use shared_types::SuggestedMatch;

use crate::config::FuzzyConfig;
use crate::scoring::find_attendee_match;
use crate::search::SimilaritySearch;

/// Fuzzy-match a calendar attendee against existing contacts.
///
/// Called after exact email lookup failed. Search errors are logged and
/// reported as no match so the attendee ends up as an import candidate.
pub fn match_attendee<S: SimilaritySearch + ?Sized>(
    search: &S,
    config: &FuzzyConfig,
    search_limit: usize,
    display_name: &str,
    email: &str,
) -> Option<SuggestedMatch> {
    if display_name.is_empty() {
        return None;
    }

    let similar = match search.find_similar(
        display_name,
        config.min_similarity_threshold,
        search_limit,
    ) {
        Ok(similar) => similar,
        Err(e) => {
            tracing::debug!("Failed to find similar contacts for {}: {}", display_name, e);
            return None;
        }
    };

    let best = find_attendee_match(display_name, email, &similar, config);
    if let Some(best) = &best {
        tracing::debug!(
            "Found fuzzy match for attendee {}: contact {} (confidence {:.3})",
            display_name,
            best.contact_id,
            best.confidence
        );
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::ContactIndex;
    use shared_types::{ContactMethod, ContactMethodType, ExistingContactSummary};
    use uuid::Uuid;

    fn index() -> ContactIndex {
        ContactIndex::new(vec![
            ExistingContactSummary {
                id: Uuid::new_v4(),
                full_name: "Maria Garcia".to_string(),
                methods: vec![
                    ContactMethod::new(ContactMethodType::EmailWork, "maria@acme.io"),
                    ContactMethod::new(ContactMethodType::Phone, "+34 600 000 000"),
                ],
            },
            ExistingContactSummary {
                id: Uuid::new_v4(),
                full_name: "Mario Rossi".to_string(),
                methods: vec![],
            },
        ])
    }

    #[test]
    fn test_attendee_with_known_email_matches() {
        let result = match_attendee(
            &index(),
            &FuzzyConfig::calendar(),
            5,
            "Maria Garcia",
            "Maria@Acme.io",
        )
        .unwrap();

        assert_eq!(result.contact_name, "Maria Garcia");
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_attendee_name_alone_is_not_enough() {
        assert!(match_attendee(
            &index(),
            &FuzzyConfig::calendar(),
            5,
            "Maria Garcia",
            "someone@else.com",
        )
        .is_none());
    }

    #[test]
    fn test_attendee_without_display_name() {
        assert!(
            match_attendee(&index(), &FuzzyConfig::calendar(), 5, "", "maria@acme.io").is_none()
        );
    }
}
