// Domain entities and value objects
pub mod conversions;
pub mod profile;

// Re-export common types for easier imports
pub use profile::{CreateProfileRequest, UpdateProfileRequest};
