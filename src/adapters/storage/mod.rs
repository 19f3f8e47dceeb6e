//! Storage adapters.

mod local_artifact_storage;

pub use local_artifact_storage::{load_file_handle, LocalArtifactStorage};
