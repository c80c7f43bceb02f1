//! Domain models and the static tables the API serves.

pub mod candidate;
pub mod execution;
pub mod vacancy;

pub use candidate::{CandidateRecord, RankedCandidate, CANDIDATES};
pub use execution::ExecutionRecord;
pub use vacancy::{VacancyEntry, VACANCIES};
