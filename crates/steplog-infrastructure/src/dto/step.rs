//! Step entry DTOs (elements of `all_steps`).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use steplog_core::trip::UNKNOWN;
use steplog_core::{Result, StepLogError};

/// Location block of a step entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepLocationDTO {
    /// Place name; null or absent reads as empty.
    #[serde(default)]
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Country name.
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub full_detail: Option<String>,
}

/// One raw step entry.
///
/// `location` is optional at this level only so that its absence can be
/// reported as a malformed step with the step id attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepEntryDTO {
    pub id: u64,
    pub slug: String,
    #[serde(default)]
    pub display_name: String,
    /// Recorded start, epoch seconds.
    pub start_time: f64,
    #[serde(default)]
    pub location: Option<StepLocationDTO>,
    #[serde(default)]
    pub weather_condition: Option<String>,
    #[serde(default)]
    pub weather_temperature: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl StepEntryDTO {
    /// Decodes the entry at `index` of `all_steps`.
    ///
    /// Fields are decoded one by one so a shape error names the field path
    /// (`location.lat`) and the offending value. Text fields that are null
    /// read as empty.
    pub fn from_value(index: usize, value: &Value) -> Result<Self> {
        let decoder = FieldDecoder {
            index,
            step_id: step_id_hint(value),
        };
        let entry = decoder.object("entry", value)?;

        let location = match entry.get("location") {
            None | Some(Value::Null) => None,
            Some(raw) => {
                let block = decoder.object("location", raw)?;
                Some(StepLocationDTO {
                    name: decoder.text(block, "location.name")?,
                    lat: decoder.required(block, "location.lat")?,
                    lon: decoder.required(block, "location.lon")?,
                    detail: decoder.text(block, "location.detail")?,
                    full_detail: decoder.optional(block, "location.full_detail")?,
                })
            }
        };

        Ok(Self {
            id: decoder.required(entry, "id")?,
            slug: decoder.required(entry, "slug")?,
            display_name: decoder.text(entry, "display_name")?,
            start_time: decoder.required(entry, "start_time")?,
            location,
            weather_condition: decoder.optional(entry, "weather_condition")?,
            weather_temperature: decoder.optional(entry, "weather_temperature")?,
            description: decoder.optional(entry, "description")?,
        })
    }
}

/// Decodes fields of one step entry, turning failures into `MalformedStep`.
struct FieldDecoder {
    index: usize,
    step_id: String,
}

impl FieldDecoder {
    fn malformed(&self, path: &str, reason: impl Into<String>) -> StepLogError {
        StepLogError::malformed_step(self.index, self.step_id.as_str(), path, reason)
    }

    fn object<'v>(&self, path: &str, value: &'v Value) -> Result<&'v Map<String, Value>> {
        value
            .as_object()
            .ok_or_else(|| self.malformed(path, format!("expected an object, got {value}")))
    }

    /// Decodes the field at `path` (dotted, last segment is the key).
    /// Absent and null both decode as `None`.
    fn optional<T: DeserializeOwned>(
        &self,
        parent: &Map<String, Value>,
        path: &str,
    ) -> Result<Option<T>> {
        let key = path.rsplit('.').next().unwrap_or(path);
        match parent.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(raw) => serde_json::from_value(raw.clone())
                .map(Some)
                .map_err(|e| self.malformed(path, format!("{e}, got {raw}"))),
        }
    }

    fn required<T: DeserializeOwned>(&self, parent: &Map<String, Value>, path: &str) -> Result<T> {
        self.optional(parent, path)?
            .ok_or_else(|| self.malformed(path, "missing"))
    }

    fn text(&self, parent: &Map<String, Value>, path: &str) -> Result<String> {
        Ok(self.optional(parent, path)?.unwrap_or_default())
    }
}

/// Best-effort id of a raw step entry for error messages.
pub fn step_id_hint(value: &Value) -> String {
    match value.get("id") {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => UNKNOWN.to_string(),
    }
}
