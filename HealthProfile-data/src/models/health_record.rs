use std::fmt;

use crate::repository::errors::RepositoryError;

/// BMI category derived from weight and height
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,

    /// BMI from 18.5 up to (but excluding) 24.9
    NormalWeight,

    /// BMI from 24.9 up to (but excluding) 29.9
    Overweight,

    /// BMI of 29.9 and above
    Obese,
}

impl BmiCategory {
    /// Categorize a BMI value. Every band is exclusive at its upper edge.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 24.9 {
            BmiCategory::NormalWeight
        } else if bmi < 29.9 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Human readable label, also used as the persisted column value
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Parse a label produced by [`BmiCategory::label`]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Underweight" => Some(BmiCategory::Underweight),
            "Normal weight" => Some(BmiCategory::NormalWeight),
            "Overweight" => Some(BmiCategory::Overweight),
            "Obese" => Some(BmiCategory::Obese),
            _ => None,
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Low / normal / high status shared by body temperature and blood sugar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalStatus {
    Low,
    Normal,
    High,
}

impl VitalStatus {
    /// Body temperature status: normal range is 36.1 to 37.2 °C inclusive
    pub fn from_temperature(celsius: f64) -> Self {
        if celsius < 36.1 {
            VitalStatus::Low
        } else if celsius <= 37.2 {
            VitalStatus::Normal
        } else {
            VitalStatus::High
        }
    }

    /// Blood sugar status: normal range is 70 to 140 mg/dL inclusive
    pub fn from_blood_sugar(mg_dl: f64) -> Self {
        if mg_dl < 70.0 {
            VitalStatus::Low
        } else if mg_dl <= 140.0 {
            VitalStatus::Normal
        } else {
            VitalStatus::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VitalStatus::Low => "Low",
            VitalStatus::Normal => "Normal",
            VitalStatus::High => "High",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Low" => Some(VitalStatus::Low),
            "Normal" => Some(VitalStatus::Normal),
            "High" => Some(VitalStatus::High),
            _ => None,
        }
    }
}

impl fmt::Display for VitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four numeric measurements of a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    /// Weight in kilograms
    pub weight: f64,

    /// Height in metres
    pub height: f64,

    /// Body temperature in degrees Celsius
    pub body_temperature: f64,

    /// Blood sugar level in mg/dL
    pub blood_sugar_level: f64,
}

impl Measurements {
    pub fn new(weight: f64, height: f64, body_temperature: f64, blood_sugar_level: f64) -> Self {
        Self {
            weight,
            height,
            body_temperature,
            blood_sugar_level,
        }
    }

    /// Check the invariants every stored record must hold
    pub fn validate(&self) -> Result<(), RepositoryError> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(RepositoryError::Validation(format!(
                "weight must be a positive number, got {}",
                self.weight
            )));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(RepositoryError::Validation(format!(
                "height must be a positive number, got {}",
                self.height
            )));
        }
        if !self.body_temperature.is_finite() {
            return Err(RepositoryError::Validation(format!(
                "body temperature must be a finite number, got {}",
                self.body_temperature
            )));
        }
        if !self.blood_sugar_level.is_finite() || self.blood_sugar_level < 0.0 {
            return Err(RepositoryError::Validation(format!(
                "blood sugar level cannot be negative, got {}",
                self.blood_sugar_level
            )));
        }
        Ok(())
    }
}

/// Check that a name can identify a record and fit in a single file column
pub fn validate_name(name: &str) -> Result<(), RepositoryError> {
    if name.is_empty() {
        return Err(RepositoryError::Validation("name cannot be empty".to_string()));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(RepositoryError::Validation(format!(
            "name must be a single word, got {:?}",
            name
        )));
    }
    Ok(())
}

/// One person's stored health measurements
#[derive(Debug, Clone, PartialEq)]
pub struct HealthRecord {
    /// Identifying name, fixed once the record exists
    name: String,

    /// Current measurements
    measurements: Measurements,
}

impl HealthRecord {
    /// Build a record without checking invariants; the repository validates
    /// before anything is stored
    pub fn new(name: impl Into<String>, measurements: Measurements) -> Self {
        Self {
            name: name.into(),
            measurements,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn measurements(&self) -> Measurements {
        self.measurements
    }

    pub fn weight(&self) -> f64 {
        self.measurements.weight
    }

    pub fn height(&self) -> f64 {
        self.measurements.height
    }

    pub fn body_temperature(&self) -> f64 {
        self.measurements.body_temperature
    }

    pub fn blood_sugar_level(&self) -> f64 {
        self.measurements.blood_sugar_level
    }

    /// Replace all four measurements, leaving the name untouched
    pub(crate) fn replace_measurements(&mut self, measurements: Measurements) {
        self.measurements = measurements;
    }

    /// Body mass index: weight / height². Callers guarantee height > 0.
    pub fn calculate_bmi(&self) -> f64 {
        self.measurements.weight / self.measurements.height.powi(2)
    }

    pub fn bmi_category(&self) -> BmiCategory {
        BmiCategory::from_bmi(self.calculate_bmi())
    }

    pub fn temperature_status(&self) -> VitalStatus {
        VitalStatus::from_temperature(self.measurements.body_temperature)
    }

    pub fn blood_sugar_status(&self) -> VitalStatus {
        VitalStatus::from_blood_sugar(self.measurements.blood_sugar_level)
    }

    /// Multi-line report of the stored values and their derived statuses
    pub fn render(&self) -> String {
        let m = &self.measurements;
        let mut out = String::new();
        out.push_str(&format!("{:>15}{}\n", "Name: ", self.name));
        out.push_str(&format!("{:>15}{} kg\n", "Weight: ", m.weight));
        out.push_str(&format!("{:>15}{} m\n", "Height: ", m.height));
        out.push_str(&format!(
            "{:>15}{:.2} ({})\n",
            "BMI: ",
            self.calculate_bmi(),
            self.bmi_category()
        ));
        out.push_str(&format!(
            "{:>15}{} °C ({})\n",
            "Temperature: ",
            m.body_temperature,
            self.temperature_status()
        ));
        out.push_str(&format!(
            "{:>15}{} mg/dL ({})\n\n",
            "Blood Sugar: ",
            m.blood_sugar_level,
            self.blood_sugar_status()
        ));
        out
    }
}
