// Repository module structure
pub mod codec;
pub mod errors;
mod in_memory;
mod profile;
mod storage;

// Re-export commonly used types
pub use codec::{LoadReport, MalformedLine};
pub use errors::RepositoryError;
pub use profile::{ProfileRepository, ProfileRepositoryTrait};
pub use storage::FileStorage;
