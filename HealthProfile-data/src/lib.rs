// HealthProfile Data
// This crate owns the health record model, the in-memory repository
// and the flat-file storage format

// Storage configuration
pub mod config;

// Record model and derived metrics
pub mod models;

// Repository implementations for data access
pub mod repository;

// Re-export commonly used types
pub use config::{ConfigError, StorageConfig};
pub use models::health_record::{validate_name, BmiCategory, HealthRecord, Measurements, VitalStatus};
pub use repository::{
    FileStorage, LoadReport, MalformedLine, ProfileRepository, ProfileRepositoryTrait, RepositoryError,
};
