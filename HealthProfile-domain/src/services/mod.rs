pub mod profile;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use profile::{create_default_profile_service, ProfileService, ProfileServiceError, ProfileServiceTrait};

// Re-export mock service factory functions when the mock feature is enabled
#[cfg(feature = "mock")]
pub use profile::create_mock_profile_service;
