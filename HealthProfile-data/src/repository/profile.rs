use tracing::debug;

use crate::models::health_record::{validate_name, HealthRecord, Measurements};
use super::codec::{self, LoadReport};
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;

/// Repository trait for health profiles
pub trait ProfileRepositoryTrait {
    /// Append a new record. Names are not required to be unique.
    fn create(&mut self, name: &str, measurements: Measurements) -> Result<(), RepositoryError>;

    /// First record with this exact (case-sensitive) name
    fn find(&self, name: &str) -> Option<&HealthRecord>;

    /// Replace the measurements of the first record with this name
    fn update(&mut self, name: &str, measurements: Measurements) -> Result<(), RepositoryError>;

    /// Remove and return the first record with this name
    fn delete(&mut self, name: &str) -> Result<HealthRecord, RepositoryError>;

    /// All records in insertion order
    fn list_all(&self) -> &[HealthRecord];

    /// Encode every record in the flat-file format
    fn serialize(&self) -> String;

    /// Replace every record with the ones decoded from the file contents
    fn deserialize(&mut self, bytes: &[u8]) -> LoadReport;
}

/// Repository for health profiles, backed by ordered in-memory storage
#[derive(Debug, Clone, Default)]
pub struct ProfileRepository {
    storage: InMemoryStorage,
}

impl ProfileRepository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl ProfileRepositoryTrait for ProfileRepository {
    fn create(&mut self, name: &str, measurements: Measurements) -> Result<(), RepositoryError> {
        validate_name(name)?;
        measurements.validate()?;

        debug!("Creating health profile: name={}", name);
        self.storage.push(HealthRecord::new(name, measurements));
        Ok(())
    }

    fn find(&self, name: &str) -> Option<&HealthRecord> {
        self.storage.first_named(name)
    }

    fn update(&mut self, name: &str, measurements: Measurements) -> Result<(), RepositoryError> {
        measurements.validate()?;

        let record = self
            .storage
            .first_named_mut(name)
            .ok_or_else(|| RepositoryError::NotFound(name.to_string()))?;

        debug!("Updating health profile: name={}", name);
        record.replace_measurements(measurements);
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<HealthRecord, RepositoryError> {
        let index = self
            .storage
            .position(name)
            .ok_or_else(|| RepositoryError::NotFound(name.to_string()))?;

        debug!("Deleting health profile: name={}", name);
        Ok(self.storage.remove(index))
    }

    fn list_all(&self) -> &[HealthRecord] {
        self.storage.as_slice()
    }

    fn serialize(&self) -> String {
        codec::encode_records(self.storage.as_slice())
    }

    fn deserialize(&mut self, bytes: &[u8]) -> LoadReport {
        self.storage.clear();

        let (records, malformed) = codec::decode_records(bytes);
        let loaded = records.len();
        for record in records {
            self.storage.push(record);
        }

        debug!("Deserialized {} health profiles", loaded);
        LoadReport { loaded, malformed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::health_record::{BmiCategory, VitalStatus};

    fn measurements(weight: f64) -> Measurements {
        Measurements::new(weight, 1.75, 36.6, 95.0)
    }

    #[test]
    fn test_create_and_find() {
        let mut repo = ProfileRepository::new();
        repo.create("Alice", Measurements::new(60.0, 1.65, 36.8, 90.0)).unwrap();

        let found = repo.find("Alice").unwrap();
        assert_eq!(found.name(), "Alice");
        assert_eq!(found.weight(), 60.0);
        assert!(repo.find("alice").is_none());
        assert!(repo.find("Bob").is_none());
    }

    #[test]
    fn test_create_rejects_invalid_input() {
        let mut repo = ProfileRepository::new();

        let result = repo.create("Alice", Measurements::new(60.0, 0.0, 36.8, 90.0));
        assert!(matches!(result, Err(RepositoryError::Validation(_))));

        let result = repo.create("", measurements(70.0));
        assert!(matches!(result, Err(RepositoryError::Validation(_))));

        let result = repo.create("Two Words", measurements(70.0));
        assert!(matches!(result, Err(RepositoryError::Validation(_))));

        assert!(repo.is_empty());
    }

    #[test]
    fn test_update_replaces_measurements_only() {
        let mut repo = ProfileRepository::new();
        repo.create("Alice", measurements(60.0)).unwrap();

        let updated = Measurements::new(65.0, 1.70, 37.5, 150.0);
        repo.update("Alice", updated).unwrap();

        let found = repo.find("Alice").unwrap();
        assert_eq!(found.name(), "Alice");
        assert_eq!(found.measurements(), updated);
        assert_eq!(found.temperature_status(), VitalStatus::High);
        assert_eq!(found.blood_sugar_status(), VitalStatus::High);
    }

    #[test]
    fn test_update_missing_name_changes_nothing() {
        let mut repo = ProfileRepository::new();
        repo.create("Alice", measurements(60.0)).unwrap();
        let before = repo.list_all().to_vec();

        let result = repo.update("Zed", measurements(90.0));

        assert!(matches!(result, Err(RepositoryError::NotFound(name)) if name == "Zed"));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.list_all(), before.as_slice());
    }

    #[test]
    fn test_update_rejects_invalid_measurements() {
        let mut repo = ProfileRepository::new();
        repo.create("Alice", measurements(60.0)).unwrap();

        let result = repo.update("Alice", Measurements::new(-1.0, 1.7, 36.6, 90.0));

        assert!(matches!(result, Err(RepositoryError::Validation(_))));
        assert_eq!(repo.find("Alice").unwrap().weight(), 60.0);
    }

    #[test]
    fn test_delete_only_record() {
        let mut repo = ProfileRepository::new();
        repo.create("Alice", measurements(60.0)).unwrap();

        let removed = repo.delete("Alice").unwrap();

        assert_eq!(removed.name(), "Alice");
        assert_eq!(repo.len(), 0);
        assert!(repo.find("Alice").is_none());
        assert!(matches!(repo.delete("Alice"), Err(RepositoryError::NotFound(_))));
    }

    #[test]
    fn test_delete_keeps_survivor_order() {
        let mut repo = ProfileRepository::new();
        for (name, weight) in [("A", 50.0), ("B", 60.0), ("C", 70.0), ("D", 80.0)] {
            repo.create(name, measurements(weight)).unwrap();
        }

        repo.delete("B").unwrap();

        let names: Vec<&str> = repo.list_all().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["A", "C", "D"]);
    }

    #[test]
    fn test_duplicate_names_act_on_first_match() {
        let mut repo = ProfileRepository::new();
        repo.create("Sam", measurements(60.0)).unwrap();
        repo.create("Sam", measurements(90.0)).unwrap();
        assert_eq!(repo.len(), 2);

        assert_eq!(repo.find("Sam").unwrap().weight(), 60.0);

        repo.update("Sam", measurements(61.0)).unwrap();
        assert_eq!(repo.list_all()[0].weight(), 61.0);
        assert_eq!(repo.list_all()[1].weight(), 90.0);

        let removed = repo.delete("Sam").unwrap();
        assert_eq!(removed.weight(), 61.0);
        assert_eq!(repo.find("Sam").unwrap().weight(), 90.0);
    }

    #[test]
    fn test_round_trip_through_text() {
        let mut repo = ProfileRepository::new();
        repo.create("Alice", Measurements::new(60.0, 1.65, 36.8, 90.0)).unwrap();
        repo.create("Bob", Measurements::new(80.0, 1.8, 37.0, 100.0)).unwrap();
        let text = repo.serialize();

        let mut fresh = ProfileRepository::new();
        let report = fresh.deserialize(text.as_bytes());

        assert_eq!(report.loaded, 2);
        assert!(report.is_complete());
        let alice = fresh.find("Alice").unwrap();
        assert_eq!(alice.name(), "Alice");
        assert_eq!(alice.weight(), 60.0);
        assert_eq!(alice.height(), 1.65);
        assert_eq!(alice.body_temperature(), 36.8);
        assert_eq!(alice.blood_sugar_level(), 90.0);
        assert_eq!(fresh.list_all(), repo.list_all());
    }

    #[test]
    fn test_deserialize_replaces_existing_records() {
        let mut repo = ProfileRepository::new();
        repo.create("Old", measurements(60.0)).unwrap();

        let report = repo.deserialize(b"New 70 1.75 36.6 95 22.857142857142858 Normal weight Normal Normal\n");

        assert_eq!(report.loaded, 1);
        assert!(repo.find("Old").is_none());
        assert!(repo.find("New").is_some());
    }

    #[test]
    fn test_deserialize_keeps_records_before_malformed_line() {
        let mut repo = ProfileRepository::new();
        let text = "A 50 1.6 36.6 90 19.53 Normal weight Normal Normal\n\
                    B 90 1.6 36.6 90 not-a-number Obese Normal Normal\n\
                    C 70 1.7 36.6 90 24.22 Normal weight Normal Normal\n";

        let report = repo.deserialize(text.as_bytes());

        assert_eq!(report.loaded, 1);
        assert_eq!(report.malformed.as_ref().map(|m| m.line), Some(2));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.find("A").unwrap().bmi_category(), BmiCategory::NormalWeight);
    }

    #[test]
    fn test_list_bob_scenario() {
        let mut repo = ProfileRepository::new();
        assert!(repo.list_all().is_empty());

        repo.create("Bob", Measurements::new(80.0, 1.8, 37.0, 100.0)).unwrap();

        let all = repo.list_all();
        assert_eq!(all.len(), 1);
        let bob = &all[0];
        assert!((bob.calculate_bmi() - 24.69).abs() < 0.005);
        assert_eq!(bob.bmi_category().label(), "Normal weight");
        assert_eq!(bob.temperature_status().label(), "Normal");
        assert_eq!(bob.blood_sugar_status().label(), "Normal");
        assert!(bob.render().contains("24.69 (Normal weight)"));
    }
}
