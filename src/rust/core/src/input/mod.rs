// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Phase input records as sent by the form layer (JSON).
//
// Every field is optional on the wire. Numeric fields go through
// `NumericInput`; categorical fields that hold an empty or unknown choice
// read as `None`. Fields the formulas never read are kept so reports can echo
// them back.

pub mod numeric;
pub mod task;

pub use numeric::{DefaultReason, NumericInput};
pub use task::AiTask;

use crate::error::{FootprintError, Result};
use crate::report::GreenCheck;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Empty or unrecognized choice reads as `None` instead of failing the document
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

// ============================================================================
// TRAINING
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingMode {
    /// Published foundation model, looked up by name
    #[default]
    Preloaded,
    Finetuned,
    /// Trained from scratch
    Custom,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainingInput {
    #[serde(deserialize_with = "lenient")]
    pub model_type: Option<TrainingMode>,
    pub selected_model: Option<String>,
    pub gpu_hours: NumericInput,
    /// v100 / a100 / h100. Collected, not used by the GPU-hour estimate.
    pub gpu_type: Option<String>,
}

impl TrainingInput {
    pub fn mode(&self) -> TrainingMode {
        self.model_type.unwrap_or_default()
    }
}

// ============================================================================
// INFERENCE
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InferenceLocation {
    Cloud,
    Local,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InferenceInput {
    #[serde(deserialize_with = "lenient")]
    pub location: Option<InferenceLocation>,
    /// Provider key, e.g. "azure"
    pub provider: Option<String>,
    pub region: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub task: Option<AiTask>,
    /// Measured energy per inference (kWh); overrides the task default
    pub energy_per_inference: NumericInput,
    pub inferences_per_year: NumericInput,
    /// Seconds of accelerator time per inference
    pub inference_duration: NumericInput,
    /// On-premise location. Collected, not used.
    pub local_location: Option<String>,
    /// cpu / gpu for on-premise. Collected, not used.
    pub hardware: Option<String>,
}

impl InferenceInput {
    /// Explicit measurement when given, otherwise the task default, otherwise 0
    pub fn energy_per_inference_kwh(&self) -> f64 {
        match self.energy_per_inference {
            NumericInput::Valid(kwh) => kwh,
            NumericInput::Defaulted(_) => self.task.map(AiTask::energy_kwh).unwrap_or(0.0),
        }
    }
}

// ============================================================================
// END-USER DEVICES
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceUsageInput {
    /// Users per year
    pub count: NumericInput,
    /// Minutes per session
    pub duration: NumericInput,
    /// Sessions per user per year
    pub sessions: NumericInput,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DevicesInput {
    /// Keyed by device type ("smartphone", "laptop", ...)
    pub devices: BTreeMap<String, DeviceUsageInput>,
}

impl DevicesInput {
    pub fn with_device(mut self, device_type: &str, count: f64, duration: f64, sessions: f64) -> Self {
        self.devices.insert(
            device_type.to_string(),
            DeviceUsageInput {
                count: count.into(),
                duration: duration.into(),
                sessions: sessions.into(),
            },
        );
        self
    }
}

// ============================================================================
// NETWORK
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataUnit {
    #[default]
    Kilobyte,
    Megabyte,
    Gigabyte,
}

impl DataUnit {
    /// Empty selects the kB default; any other unrecognized label counts as GB.
    pub fn from_label(label: &str) -> Self {
        match label {
            "" | "kB" => DataUnit::Kilobyte,
            "MB" => DataUnit::Megabyte,
            _ => DataUnit::Gigabyte,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DataUnit::Kilobyte => "kB",
            DataUnit::Megabyte => "MB",
            DataUnit::Gigabyte => "GB",
        }
    }

    /// Decimal units: 1 GB = 1000 MB = 1 000 000 kB
    pub fn to_gigabytes(self, amount: f64) -> f64 {
        match self {
            DataUnit::Kilobyte => amount / 1_000_000.0,
            DataUnit::Megabyte => amount / 1_000.0,
            DataUnit::Gigabyte => amount,
        }
    }
}

impl Serialize for DataUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for DataUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(DataUnit::from_label(label.as_deref().unwrap_or("")))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkInput {
    /// Data transferred per inference, in `data_unit`
    pub data_amount: NumericInput,
    pub data_unit: DataUnit,
}

impl NetworkInput {
    pub fn data_gb(&self) -> f64 {
        self.data_unit.to_gigabytes(self.data_amount.value())
    }
}

// ============================================================================
// HOSTING
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostingType {
    Cloud,
    Local,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostingInput {
    pub is_online: bool,
    pub annual_visits: NumericInput,
    #[serde(deserialize_with = "lenient")]
    pub hosting_type: Option<HostingType>,
    /// Provider key, e.g. "gcp"
    pub cloud_provider: Option<String>,
    pub region: Option<String>,
    /// Local hosting location. Collected, not used.
    pub server_location: Option<String>,
    /// Local server energy (kWh/year). Collected, not used.
    pub server_energy: NumericInput,
    pub url: Option<String>,
    /// Advisory result of an external green-hosting check
    pub green_check: Option<GreenCheck>,
}

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Everything the user entered, one record per phase
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FootprintInput {
    pub training: TrainingInput,
    pub inference: InferenceInput,
    pub devices: DevicesInput,
    pub network: NetworkInput,
    pub hosting: HostingInput,
}

impl FootprintInput {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(FootprintError::InputParse)
    }
}
