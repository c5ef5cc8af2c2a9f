// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Reference table rows. Field names follow the JSON datasets.

use serde::{Deserialize, Serialize};

/// Foundation model and its published training footprint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelEmissionRow {
    pub name: String,
    #[serde(rename = "parameterCountB")]
    pub parameter_count_b: f64, // billions
    #[serde(rename = "totalTrainingCO2Kg")]
    pub total_training_co2_kg: f64,
}

/// Datacenter region with its efficiency and grid mix
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatacenterRow {
    pub provider: String, // company label, e.g. "Microsoft"
    #[serde(rename = "regionName")]
    pub region_name: String,
    pub country: String,
    pub pue: f64,
    #[serde(rename = "carbonIntensityGPerKWh")]
    pub carbon_intensity_g_per_kwh: f64,
}

/// End-user device profile
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceRow {
    #[serde(rename = "type")]
    pub device_type: String,
    #[serde(rename = "powerWatts")]
    pub power_watts: f64,
    #[serde(rename = "embodiedCO2Kg")]
    pub embodied_co2_kg: f64,
    #[serde(rename = "lifetimeYears")]
    pub lifetime_years: f64,
}
