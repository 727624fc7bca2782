//! Flat-file codec for health records
//!
//! One record per line, columns separated by single spaces:
//!
//! ```text
//! name weight height body_temperature blood_sugar_level bmi bmi_label temperature_label blood_sugar_label
//! ```
//!
//! Only the first five columns are authoritative. BMI and the three labels
//! are written for readability and compatibility with older files; on load
//! they are checked for shape and then dropped, and the derived values are
//! recomputed from the measurements. The BMI label "Normal weight" spans two
//! whitespace tokens, so a line holds either nine or ten tokens.

use tracing::warn;

use crate::models::health_record::{BmiCategory, HealthRecord, Measurements, VitalStatus};

/// Smallest and largest token counts of a well-formed line
const MIN_TOKENS: usize = 9;
const MAX_TOKENS: usize = 10;

/// Outcome of parsing a profiles text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Number of records rebuilt
    pub loaded: usize,

    /// Where parsing stopped early, if it did
    pub malformed: Option<MalformedLine>,
}

impl LoadReport {
    /// Whether every non-blank line was loaded
    pub fn is_complete(&self) -> bool {
        self.malformed.is_none()
    }
}

/// First line that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based line number
    pub line: usize,

    /// What was wrong with it
    pub reason: String,
}

/// Encode one record as a single line, without the trailing newline
pub fn encode_record(record: &HealthRecord) -> String {
    format!(
        "{} {} {} {} {} {} {} {} {}",
        record.name(),
        record.weight(),
        record.height(),
        record.body_temperature(),
        record.blood_sugar_level(),
        record.calculate_bmi(),
        record.bmi_category().label(),
        record.temperature_status().label(),
        record.blood_sugar_status().label(),
    )
}

/// Encode all records, one newline-terminated line each
pub fn encode_records(records: &[HealthRecord]) -> String {
    let mut text = String::new();
    for record in records {
        text.push_str(&encode_record(record));
        text.push('\n');
    }
    text
}

fn malformed(line: usize, reason: impl Into<String>) -> MalformedLine {
    MalformedLine {
        line,
        reason: reason.into(),
    }
}

fn parse_number(token: &str, field: &str, line: usize) -> Result<f64, MalformedLine> {
    token
        .parse::<f64>()
        .map_err(|_| malformed(line, format!("{} is not a number: {:?}", field, token)))
}

/// Decode one non-blank line into a record
pub fn decode_line(line_number: usize, line: &str) -> Result<HealthRecord, MalformedLine> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_TOKENS || tokens.len() > MAX_TOKENS {
        return Err(malformed(
            line_number,
            format!("expected 9 columns, found {} tokens", tokens.len()),
        ));
    }

    let name = tokens[0];
    let measurements = Measurements::new(
        parse_number(tokens[1], "weight", line_number)?,
        parse_number(tokens[2], "height", line_number)?,
        parse_number(tokens[3], "body temperature", line_number)?,
        parse_number(tokens[4], "blood sugar level", line_number)?,
    );

    // Persisted derived columns: read, checked, discarded
    parse_number(tokens[5], "bmi", line_number)?;
    let status_start = tokens.len() - 2;
    let bmi_label = tokens[6..status_start].join(" ");
    if BmiCategory::from_label(&bmi_label).is_none() {
        return Err(malformed(line_number, format!("unknown BMI category {:?}", bmi_label)));
    }
    for label in &tokens[status_start..] {
        if VitalStatus::from_label(label).is_none() {
            return Err(malformed(line_number, format!("unknown status {:?}", label)));
        }
    }

    measurements
        .validate()
        .map_err(|e| malformed(line_number, e.to_string()))?;

    Ok(HealthRecord::new(name, measurements))
}

/// Decode a whole profiles file
///
/// Input is raw bytes so that a line which is not valid UTF-8 is reported
/// like any other malformed line. Blank lines are skipped. Parsing stops at
/// the first malformed line; the records decoded before it are returned
/// along with the reason.
pub fn decode_records(bytes: &[u8]) -> (Vec<HealthRecord>, Option<MalformedLine>) {
    let mut records = Vec::new();

    for (index, raw) in bytes.split(|&b| b == b'\n').enumerate() {
        let line_number = index + 1;
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

        let decoded = match std::str::from_utf8(raw) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => decode_line(line_number, line),
            Err(_) => Err(malformed(line_number, "line is not valid UTF-8")),
        };

        match decoded {
            Ok(record) => records.push(record),
            Err(bad) => {
                warn!("Stopping load at line {}: {}", bad.line, bad.reason);
                return (records, Some(bad));
            }
        }
    }

    (records, None)
}
