use crate::models::health_record::HealthRecord;

/// Ordered in-memory storage for health records
///
/// Records keep their insertion order. Names are not unique; every lookup
/// resolves to the first record carrying the name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    records: Vec<HealthRecord>,
}

impl InMemoryStorage {
    /// Create a new, empty in-memory storage
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Append a record after every existing one
    pub fn push(&mut self, record: HealthRecord) {
        self.records.push(record);
    }

    /// Index of the first record with this exact name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|record| record.name() == name)
    }

    /// First record with this exact name
    pub fn first_named(&self, name: &str) -> Option<&HealthRecord> {
        self.records.iter().find(|record| record.name() == name)
    }

    /// Mutable access to the first record with this exact name
    pub fn first_named_mut(&mut self, name: &str) -> Option<&mut HealthRecord> {
        self.records.iter_mut().find(|record| record.name() == name)
    }

    /// Remove the record at `index`, shifting later records down
    pub fn remove(&mut self, index: usize) -> HealthRecord {
        self.records.remove(index)
    }

    /// Drop every record
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn as_slice(&self) -> &[HealthRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
