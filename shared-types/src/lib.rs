pub mod candidate;
pub mod contact;
pub mod matching;

pub use candidate::{CandidateEmail, CandidatePhone, MatchCandidate};
pub use contact::{ContactMethod, ContactMethodType, ExistingContactSummary};
pub use matching::{
    ImportCandidateResponse, ImportCandidatesResponse, ListImportCandidatesRequest,
    RankedCandidate, SimilarityResult, SuggestedMatch,
};

