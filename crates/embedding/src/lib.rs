//! Face embedding seam (`embedding`).
//!
//! Real facial recognition is an external collaborator: something outside
//! the engine turns raw image bytes into a fixed-length feature vector. This
//! crate pins down that contract — [`EmbeddingProvider`] — together with the
//! error taxonomy the engine relies on, and ships two reference pieces:
//!
//! - [`StubEmbeddingProvider`]: a deterministic hash-derived embedding for
//!   tests and demos. Same bytes, same vector, every time.
//! - [`CosineFaceScorer`]: the reference [`FaceScorer`] comparing two
//!   embeddings with real cosine similarity. Randomized placeholder scorers
//!   have no business here; determinism is part of the scoring contract.

mod config;
mod error;
mod normalize;
mod provider;
mod scorer;
mod stub;

pub use crate::config::EmbeddingConfig;
pub use crate::error::EmbeddingError;
pub use crate::normalize::l2_normalize_in_place;
pub use crate::provider::EmbeddingProvider;
pub use crate::scorer::{CosineFaceScorer, FaceScorer};
pub use crate::stub::StubEmbeddingProvider;
