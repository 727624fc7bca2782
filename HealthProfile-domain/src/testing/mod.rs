// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

use health_profile_data::{HealthRecord, LoadReport, Measurements};

use crate::entities::profile::{CreateProfileRequest, UpdateProfileRequest};
use crate::services::profile::{ProfileServiceError, ProfileServiceTrait};

/// Mock implementation of the ProfileServiceTrait for testing
#[derive(Debug, Default)]
pub struct MockProfileService {
    records: Vec<HealthRecord>,
    should_fail_validation: bool,
    should_fail_file: bool,
}

impl MockProfileService {
    /// Create a new mock profile service
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to fail validation
    pub fn with_validation_failure(mut self) -> Self {
        self.should_fail_validation = true;
        self
    }

    /// Configure the mock to fail every save and load as if the file could not be opened
    pub fn with_file_failure(mut self) -> Self {
        self.should_fail_file = true;
        self
    }

    /// Add a pre-defined record to the mock
    pub fn with_record(mut self, name: &str, measurements: Measurements) -> Self {
        self.records.push(HealthRecord::new(name, measurements));
        self
    }

    fn file_failure() -> ProfileServiceError {
        ProfileServiceError::FileOpenFailure("mock is configured to fail file access".to_string())
    }
}

impl ProfileServiceTrait for MockProfileService {
    fn validate_create_request(&self, _request: &CreateProfileRequest) -> Result<(), ProfileServiceError> {
        if self.should_fail_validation {
            Err(ProfileServiceError::ValidationError(
                "Validation failed - mock is configured to fail validation".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    fn validate_update_request(&self, _request: &UpdateProfileRequest) -> Result<(), ProfileServiceError> {
        if self.should_fail_validation {
            Err(ProfileServiceError::ValidationError(
                "Validation failed - mock is configured to fail validation".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    fn create_profile(&mut self, request: CreateProfileRequest) -> Result<(), ProfileServiceError> {
        self.validate_create_request(&request)?;
        let measurements = Measurements::new(
            request.weight,
            request.height,
            request.body_temperature,
            request.blood_sugar_level,
        );
        self.records.push(HealthRecord::new(request.name, measurements));
        Ok(())
    }

    fn read_profile(&self, name: &str) -> Result<HealthRecord, ProfileServiceError> {
        self.records
            .iter()
            .find(|r| r.name() == name)
            .cloned()
            .ok_or_else(|| ProfileServiceError::NotFound(name.to_string()))
    }

    fn update_profile(&mut self, name: &str, request: UpdateProfileRequest) -> Result<(), ProfileServiceError> {
        self.validate_update_request(&request)?;
        let index = self
            .records
            .iter()
            .position(|r| r.name() == name)
            .ok_or_else(|| ProfileServiceError::NotFound(name.to_string()))?;
        let measurements = Measurements::new(
            request.weight,
            request.height,
            request.body_temperature,
            request.blood_sugar_level,
        );
        self.records[index] = HealthRecord::new(name, measurements);
        Ok(())
    }

    fn delete_profile(&mut self, name: &str) -> Result<(), ProfileServiceError> {
        let index = self
            .records
            .iter()
            .position(|r| r.name() == name)
            .ok_or_else(|| ProfileServiceError::NotFound(name.to_string()))?;
        self.records.remove(index);
        Ok(())
    }

    fn list_profiles(&self) -> Vec<HealthRecord> {
        self.records.clone()
    }

    fn save_profiles(&self) -> Result<usize, ProfileServiceError> {
        if self.should_fail_file {
            return Err(Self::file_failure());
        }
        Ok(self.records.len())
    }

    fn load_profiles(&mut self) -> Result<LoadReport, ProfileServiceError> {
        if self.should_fail_file {
            return Err(Self::file_failure());
        }
        // The mock has no file; its current records stand in for the loaded set
        Ok(LoadReport {
            loaded: self.records.len(),
            malformed: None,
        })
    }
}
