//! Contact Matching Crate
//!
//! Decides whether an externally sourced contact (Google Contacts entry,
//! calendar attendee, ...) corresponds to an existing CRM contact, and ranks
//! batches of import candidates for review.
//!
//! # Architecture
//!
//! - **Types**: candidate and contact types live in the `shared-types` crate
//! - **Scoring**: a weighted blend of name similarity and contact method overlap,
//!   computed as a pure function of its inputs and an explicit [`FuzzyConfig`]
//! - **Search**: name similarity comes from a [`SimilaritySearch`] provider,
//!   normally a trigram query in the database
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_matching::{find_best_match, FuzzyConfig, SimilaritySearch};
//!
//! let config = FuzzyConfig::import();
//! let similar = index.find_similar(&candidate.effective_name(), config.min_similarity_threshold, 5)?;
//! let suggested = find_best_match(&candidate, &similar, &config);
//! ```

pub mod calendar;
pub mod config;
pub mod error;
pub mod identity;
pub mod import;
pub mod normalize;
pub mod ranking;
pub mod scoring;
pub mod search;

pub use calendar::match_attendee;
pub use config::FuzzyConfig;
pub use error::MatchingError;
pub use identity::{
    contact_method_types_for, detect_identifier_type, normalize_identifier, IdentifierType,
};
pub use import::{ImportMatchService, ListingLimits, DEFAULT_SEARCH_LIMIT};
pub use normalize::{normalize_email, normalize_phone_e164, normalize_phone_loose};
pub use ranking::{compare_candidates, sort_candidates};
pub use scoring::{find_attendee_match, find_best_match, outranks};
pub use search::{trigram_similarity, ContactIndex, SimilaritySearch};
