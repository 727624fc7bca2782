use health_profile_data::Measurements;

use crate::entities::profile::{CreateProfileRequest, UpdateProfileRequest};

/// Conversion functions between domain requests and data models.
/// These functions follow the pattern convert_to_[target]

/// Convert a create request into the measurements stored by the repository
pub fn convert_to_measurements(request: &CreateProfileRequest) -> Measurements {
    Measurements::new(
        request.weight,
        request.height,
        request.body_temperature,
        request.blood_sugar_level,
    )
}

/// Convert an update request into the measurements stored by the repository
pub fn convert_update_to_measurements(request: &UpdateProfileRequest) -> Measurements {
    Measurements::new(
        request.weight,
        request.height,
        request.body_temperature,
        request.blood_sugar_level,
    )
}

/// Convert a create request into the equivalent update request
pub fn convert_to_update_request(request: &CreateProfileRequest) -> UpdateProfileRequest {
    UpdateProfileRequest::new(
        request.weight,
        request.height,
        request.body_temperature,
        request.blood_sugar_level,
    )
}
