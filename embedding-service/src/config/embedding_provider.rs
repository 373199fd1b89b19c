/// Represents the provider (backend) used to turn text into embeddings.
///
/// Only the OpenAI embeddings API is wired today. Adding another backend means
/// extending this enum and adding a service under `services/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingProvider {
    /// OpenAI REST API (`/v1/embeddings`).
    OpenAI,
}
