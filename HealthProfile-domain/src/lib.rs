// HealthProfile Domain
// This crate contains the business logic for the HealthProfile application

// Domain entities
pub mod entities;

// Services that implement business logic
pub mod services;

// Testing utilities - only available with mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;

// Re-export the record model from the data layer for convenience
pub use health_profile_data::{
    BmiCategory, HealthRecord, LoadReport, MalformedLine, Measurements, StorageConfig, VitalStatus,
};
