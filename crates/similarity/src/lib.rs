//! idlink field-similarity layer.
//!
//! One pure scoring function per identity field type, each returning a value
//! in `[0, 1]`. A score of 0 means "no information" or "no similarity" — it
//! is never an error. The only fallible function is vector comparison, where
//! a dimension mismatch is an input-contract violation.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence, no randomness. Same
//! inputs, same score, on any machine. Downstream scoring and correlation
//! rely on this for reproducible search results.

mod email;
mod error;
mod levenshtein;
mod location;
mod name;
mod phone;
mod vector;

pub use crate::email::email_similarity;
pub use crate::error::SimilarityError;
pub use crate::levenshtein::{edit_distance, string_similarity};
pub use crate::location::{location_similarity, LocationWeights};
pub use crate::name::name_similarity;
pub use crate::phone::{phone_digits, phone_similarity};
pub use crate::vector::cosine_similarity;
