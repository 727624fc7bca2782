use thiserror::Error;
use tracing::{debug, error, info};
use validator::{Validate, ValidationErrors};

use health_profile_data::{
    FileStorage, HealthRecord, LoadReport, ProfileRepository, ProfileRepositoryTrait, RepositoryError, StorageConfig,
};

use crate::entities::conversions;
use crate::entities::profile::{CreateProfileRequest, UpdateProfileRequest};

/// Profile service errors
#[derive(Debug, Error)]
pub enum ProfileServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Not found error
    #[error("Profile not found: {0}")]
    NotFound(String),

    /// The profiles file could not be opened
    #[error("Error opening file: {0}")]
    FileOpenFailure(String),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Trait for profile service operations
pub trait ProfileServiceTrait {
    /// Validate a create profile request
    fn validate_create_request(&self, request: &CreateProfileRequest) -> Result<(), ProfileServiceError>;

    /// Validate an update profile request
    fn validate_update_request(&self, request: &UpdateProfileRequest) -> Result<(), ProfileServiceError>;

    /// Create a new profile
    fn create_profile(&mut self, request: CreateProfileRequest) -> Result<(), ProfileServiceError>;

    /// Get the first profile with this name
    fn read_profile(&self, name: &str) -> Result<HealthRecord, ProfileServiceError>;

    /// Replace the measurements of the first profile with this name
    fn update_profile(&mut self, name: &str, request: UpdateProfileRequest) -> Result<(), ProfileServiceError>;

    /// Delete the first profile with this name
    fn delete_profile(&mut self, name: &str) -> Result<(), ProfileServiceError>;

    /// Get all profiles in insertion order
    fn list_profiles(&self) -> Vec<HealthRecord>;

    /// Write all profiles to the profiles file
    fn save_profiles(&self) -> Result<usize, ProfileServiceError>;

    /// Replace all profiles with the contents of the profiles file
    fn load_profiles(&mut self) -> Result<LoadReport, ProfileServiceError>;
}

/// Convert validator errors to a single readable message
fn validation_message(validation_errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = validation_errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let error_msgs: Vec<String> = errors
                .iter()
                .map(|err| {
                    if let Some(msg) = &err.message {
                        msg.to_string()
                    } else {
                        format!("Invalid {}", field)
                    }
                })
                .collect();
            format!("{}: {}", field, error_msgs.join(", "))
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

/// Positivity rules the console applies to every measurement it accepts
fn check_measurements(request: &UpdateProfileRequest) -> Result<(), ProfileServiceError> {
    if let Err(validation_errors) = request.validate() {
        return Err(ProfileServiceError::ValidationError(validation_message(&validation_errors)));
    }

    let checks = [
        (request.weight, "Weight must be positive"),
        (request.height, "Height must be positive"),
        (request.body_temperature, "Body temperature must be positive"),
    ];
    for (value, message) in checks {
        if !value.is_finite() || value <= 0.0 {
            return Err(ProfileServiceError::ValidationError(message.to_string()));
        }
    }
    if !request.blood_sugar_level.is_finite() {
        return Err(ProfileServiceError::ValidationError(
            "Blood sugar level must be a number".to_string(),
        ));
    }

    Ok(())
}

/// Profile service for domain logic
pub struct ProfileService<R: ProfileRepositoryTrait> {
    repository: R,
    storage: FileStorage,
}

impl<R: ProfileRepositoryTrait> ProfileService<R> {
    /// Create a new profile service
    pub fn new(repository: R, storage: FileStorage) -> Self {
        Self { repository, storage }
    }

    /// Read-only access to the underlying repository
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Map repository errors to service errors
    fn map_repo_error(&self, err: RepositoryError) -> ProfileServiceError {
        match err {
            RepositoryError::NotFound(name) => ProfileServiceError::NotFound(name),
            RepositoryError::Validation(msg) => ProfileServiceError::ValidationError(msg),
            RepositoryError::FileOpen { path, source } => {
                ProfileServiceError::FileOpenFailure(format!("{}: {}", path.display(), source))
            }
            other => ProfileServiceError::RepositoryError(other.to_string()),
        }
    }
}

impl<R: ProfileRepositoryTrait> ProfileServiceTrait for ProfileService<R> {
    fn validate_create_request(&self, request: &CreateProfileRequest) -> Result<(), ProfileServiceError> {
        if let Err(validation_errors) = request.validate() {
            return Err(ProfileServiceError::ValidationError(validation_message(&validation_errors)));
        }

        // A name is a single column in the profiles file
        if request.name.chars().any(char::is_whitespace) {
            return Err(ProfileServiceError::ValidationError(
                "Name must be a single word".to_string(),
            ));
        }

        check_measurements(&conversions::convert_to_update_request(request))
    }

    fn validate_update_request(&self, request: &UpdateProfileRequest) -> Result<(), ProfileServiceError> {
        check_measurements(request)
    }

    fn create_profile(&mut self, request: CreateProfileRequest) -> Result<(), ProfileServiceError> {
        self.validate_create_request(&request)?;

        let measurements = conversions::convert_to_measurements(&request);
        self.repository
            .create(&request.name, measurements)
            .map_err(|e| self.map_repo_error(e))?;

        info!("Profile for {} created", request.name);
        Ok(())
    }

    fn read_profile(&self, name: &str) -> Result<HealthRecord, ProfileServiceError> {
        debug!("Reading profile: {}", name);
        self.repository
            .find(name)
            .cloned()
            .ok_or_else(|| ProfileServiceError::NotFound(name.to_string()))
    }

    fn update_profile(&mut self, name: &str, request: UpdateProfileRequest) -> Result<(), ProfileServiceError> {
        self.validate_update_request(&request)?;

        let measurements = conversions::convert_update_to_measurements(&request);
        self.repository
            .update(name, measurements)
            .map_err(|e| self.map_repo_error(e))?;

        info!("Profile for {} updated", name);
        Ok(())
    }

    fn delete_profile(&mut self, name: &str) -> Result<(), ProfileServiceError> {
        self.repository
            .delete(name)
            .map_err(|e| self.map_repo_error(e))?;

        info!("Profile for {} deleted", name);
        Ok(())
    }

    fn list_profiles(&self) -> Vec<HealthRecord> {
        self.repository.list_all().to_vec()
    }

    fn save_profiles(&self) -> Result<usize, ProfileServiceError> {
        debug!("Saving profiles to {}", self.storage.path().display());
        self.storage.save(&self.repository).map_err(|e| {
            error!("Saving profiles failed: {}", e);
            self.map_repo_error(e)
        })
    }

    fn load_profiles(&mut self) -> Result<LoadReport, ProfileServiceError> {
        debug!("Loading profiles from {}", self.storage.path().display());
        match self.storage.load(&mut self.repository) {
            Ok(report) => Ok(report),
            Err(e) => {
                error!("Loading profiles failed: {}", e);
                Err(self.map_repo_error(e))
            }
        }
    }
}

/// Create a profile service over an empty in-memory repository, persisting
/// to the configured profiles file
pub fn create_default_profile_service(config: &StorageConfig) -> ProfileService<ProfileRepository> {
    ProfileService::new(ProfileRepository::new(), FileStorage::new(config.profiles_path.clone()))
}

/// Create a mock profile service for testing
/// This function is only available when the mock feature is enabled
#[cfg(feature = "mock")]
pub fn create_mock_profile_service() -> impl ProfileServiceTrait {
    crate::testing::MockProfileService::new()
}
