use embedding::EmbeddingProvider;
use records::{Location, SearchParameters};

/// Search parameters after the one-time face-image exchange.
///
/// The raw image bytes are traded for an embedding exactly once per search,
/// before any fan-out, so every source group scores against the same
/// vector. A provider failure drops the face channel for this search and is
/// logged; it never fails the query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedQuery {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<Location>,
    pub face_embedding: Option<Vec<f32>>,
}

impl ResolvedQuery {
    /// Resolve caller parameters against the embedding provider.
    pub async fn resolve(params: &SearchParameters, provider: &dyn EmbeddingProvider) -> Self {
        let face_embedding = match &params.face_image {
            Some(image) => match provider.embed(image).await {
                Ok(vector) => Some(vector),
                Err(err) => {
                    tracing::warn!(error = %err, "embedding provider failed; searching without the face field");
                    None
                }
            },
            None => None,
        };

        Self {
            name: params.name.clone(),
            email: params.email.clone(),
            phone: params.phone.clone(),
            location: params.location.clone(),
            face_embedding,
        }
    }

    /// Build a resolved query directly from descriptors, bypassing the
    /// provider. Useful when the caller already holds an embedding.
    pub fn from_descriptors(params: &SearchParameters, face_embedding: Option<Vec<f32>>) -> Self {
        Self {
            name: params.name.clone(),
            email: params.email.clone(),
            phone: params.phone.clone(),
            location: params.location.clone(),
            face_embedding,
        }
    }

    /// True when at least one descriptor survived resolution.
    pub fn has_descriptors(&self) -> bool {
        self.name.is_some()
            || self.email.is_some()
            || self.phone.is_some()
            || self.location.as_ref().is_some_and(Location::has_any)
            || self.face_embedding.is_some()
    }
}
