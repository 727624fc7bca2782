// Storage models for health profiles
pub mod health_record;
