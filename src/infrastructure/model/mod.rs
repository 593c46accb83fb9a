//! Model repository implementations

mod filesystem;

pub use filesystem::{FilesystemModelRepository, PREDICTIONS_DIR};
