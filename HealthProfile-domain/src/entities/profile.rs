use validator::Validate;

/// Request payload for creating a new health profile
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct CreateProfileRequest {
    /// Identifying name, a single word
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,

    /// Weight in kilograms
    pub weight: f64,

    /// Height in metres
    pub height: f64,

    /// Body temperature in degrees Celsius
    pub body_temperature: f64,

    /// Blood sugar level in mg/dL
    #[validate(range(min = 0.0, message = "Blood sugar level cannot be negative"))]
    pub blood_sugar_level: f64,
}

impl CreateProfileRequest {
    pub fn new(
        name: impl Into<String>,
        weight: f64,
        height: f64,
        body_temperature: f64,
        blood_sugar_level: f64,
    ) -> Self {
        Self {
            name: name.into(),
            weight,
            height,
            body_temperature,
            blood_sugar_level,
        }
    }
}

/// Request payload for replacing the measurements of a health profile
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct UpdateProfileRequest {
    /// Weight in kilograms
    pub weight: f64,

    /// Height in metres
    pub height: f64,

    /// Body temperature in degrees Celsius
    pub body_temperature: f64,

    /// Blood sugar level in mg/dL
    #[validate(range(min = 0.0, message = "Blood sugar level cannot be negative"))]
    pub blood_sugar_level: f64,
}

impl UpdateProfileRequest {
    pub fn new(weight: f64, height: f64, body_temperature: f64, blood_sugar_level: f64) -> Self {
        Self {
            weight,
            height,
            body_temperature,
            blood_sugar_level,
        }
    }
}
