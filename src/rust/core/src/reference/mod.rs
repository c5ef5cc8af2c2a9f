// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// ReferenceData: the three read-only tables the engines consult.
//
// Loaded once at startup and passed explicitly into every engine call.
// Lookups return `Option`; a miss is the caller's cue to substitute zero.

pub mod provider;
pub mod rows;

pub use provider::CloudProvider;
pub use rows::{DatacenterRow, DeviceRow, ModelEmissionRow};

use crate::error::{FootprintError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use tracing::warn;

const BUILTIN_MODELS: &str = include_str!("../../data/foundation_models.json");
const BUILTIN_DATACENTERS: &str = include_str!("../../data/datacenters.json");
const BUILTIN_DEVICES: &str = include_str!("../../data/devices.json");

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReferenceData {
    models: Vec<ModelEmissionRow>,
    datacenters: Vec<DatacenterRow>,
    devices: Vec<DeviceRow>,
}

impl ReferenceData {
    /// Tables shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_MODELS, BUILTIN_DATACENTERS, BUILTIN_DEVICES)
    }

    pub fn from_json(models_json: &str, datacenters_json: &str, devices_json: &str) -> Result<Self> {
        let models = parse_table("foundation model", models_json)?;
        let datacenters = parse_table("datacenter", datacenters_json)?;
        let devices = parse_table("device", devices_json)?;
        Ok(Self::from_rows(models, datacenters, devices))
    }

    /// Build from rows already in memory. Duplicate keys are kept (the first
    /// row wins on lookup) and reported through `tracing`.
    pub fn from_rows(
        models: Vec<ModelEmissionRow>,
        datacenters: Vec<DatacenterRow>,
        devices: Vec<DeviceRow>,
    ) -> Self {
        let data = ReferenceData {
            models,
            datacenters,
            devices,
        };
        for key in data.duplicate_keys() {
            warn!(key = %key, "duplicate reference key, first row shadows the rest");
        }
        data
    }

    pub fn models(&self) -> &[ModelEmissionRow] {
        &self.models
    }

    pub fn datacenters(&self) -> &[DatacenterRow] {
        &self.datacenters
    }

    pub fn devices(&self) -> &[DeviceRow] {
        &self.devices
    }

    /// Case-insensitive match on the model name
    pub fn lookup_model(&self, name: &str) -> Option<&ModelEmissionRow> {
        let wanted = name.to_lowercase();
        self.models.iter().find(|m| m.name.to_lowercase() == wanted)
    }

    /// All regions of one provider (company label), in table order
    pub fn lookup_datacenters(&self, provider: &str) -> Vec<&DatacenterRow> {
        self.datacenters
            .iter()
            .filter(|dc| dc.provider == provider)
            .collect()
    }

    pub fn lookup_datacenter(&self, provider: &str, region: &str) -> Option<&DatacenterRow> {
        self.datacenters
            .iter()
            .find(|dc| dc.provider == provider && dc.region_name == region)
    }

    pub fn lookup_device(&self, device_type: &str) -> Option<&DeviceRow> {
        self.devices.iter().find(|d| d.device_type == device_type)
    }

    /// Keys that occur more than once, formatted `table:key`
    pub fn duplicate_keys(&self) -> Vec<String> {
        let mut duplicates = Vec::new();

        let mut seen = HashSet::new();
        for m in &self.models {
            let key = m.name.to_lowercase();
            if !seen.insert(key.clone()) {
                duplicates.push(format!("model:{}", key));
            }
        }

        let mut seen = HashSet::new();
        for dc in &self.datacenters {
            if !seen.insert((dc.provider.as_str(), dc.region_name.as_str())) {
                duplicates.push(format!("datacenter:{}/{}", dc.provider, dc.region_name));
            }
        }

        let mut seen = HashSet::new();
        for d in &self.devices {
            if !seen.insert(d.device_type.as_str()) {
                duplicates.push(format!("device:{}", d.device_type));
            }
        }

        duplicates
    }

    /// SHA-256 over all three tables, hex encoded
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(serde_json::to_vec(&self.models).unwrap_or_default());
        hasher.update(serde_json::to_vec(&self.datacenters).unwrap_or_default());
        hasher.update(serde_json::to_vec(&self.devices).unwrap_or_default());
        hex::encode(hasher.finalize())
    }
}

fn parse_table<T: DeserializeOwned>(table: &'static str, json: &str) -> Result<Vec<T>> {
    serde_json::from_str(json).map_err(|source| FootprintError::ReferenceParse { table, source })
}
