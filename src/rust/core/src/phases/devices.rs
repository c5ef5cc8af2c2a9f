// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use super::EmissionBreakdown;
use crate::coefficients::Coefficients;
use crate::formulas;
use crate::input::DevicesInput;
use crate::reference::ReferenceData;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceBreakdown {
    pub device_type: String,
    pub breakdown: EmissionBreakdown,
    pub usage_fraction: f64,
    /// Operational kg CO2e of one session
    pub co2_per_session_kg: f64,
    /// Operational kg CO2e of one user over a year
    pub co2_per_user_kg: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicesResult {
    pub breakdown: EmissionBreakdown,
    /// One entry per device type with usage, in reference table order
    pub per_device: Vec<DeviceBreakdown>,
    /// Input keys with no device profile; they contribute nothing
    pub unknown_devices: Vec<String>,
}

pub struct DevicesEngine;

impl DevicesEngine {
    pub fn compute(
        input: &DevicesInput,
        reference: &ReferenceData,
        coefficients: &Coefficients,
    ) -> DevicesResult {
        let mut per_device = Vec::new();
        let mut total = EmissionBreakdown::zero();
        let mut seen = HashSet::new();

        for profile in reference.devices() {
            // A repeated type is shadowed by its first row
            if !seen.insert(profile.device_type.as_str()) {
                continue;
            }
            let Some(usage) = input.devices.get(&profile.device_type) else {
                continue;
            };
            let count = usage.count.value();
            let duration_min = usage.duration.value();
            let sessions = usage.sessions.value();

            let usage_fraction =
                formulas::device_usage_fraction(duration_min, coefficients.device_active_minutes_per_day);
            let embodied_kg = formulas::device_embodied_kg(
                count,
                profile.embodied_co2_kg,
                profile.lifetime_years,
                usage_fraction,
            );

            let session_kwh = formulas::session_energy_kwh(profile.power_watts, duration_min);
            let session_g = formulas::grams_from_kwh(session_kwh, coefficients.grid_intensity_g_per_kwh);
            let operational_kg = formulas::device_operational_kg(
                session_kwh,
                coefficients.grid_intensity_g_per_kwh,
                sessions,
                count,
            );

            let breakdown = EmissionBreakdown::new(operational_kg, embodied_kg);
            total = total + breakdown;
            per_device.push(DeviceBreakdown {
                device_type: profile.device_type.clone(),
                breakdown,
                usage_fraction,
                co2_per_session_kg: session_g / 1000.0,
                co2_per_user_kg: session_g * sessions / 1000.0,
            });
        }

        let unknown_devices: Vec<String> = input
            .devices
            .keys()
            .filter(|key| reference.lookup_device(key).is_none())
            .cloned()
            .collect();
        for key in &unknown_devices {
            debug!(device = %key, "no device profile, skipped");
        }

        DevicesResult {
            breakdown: total,
            per_device,
            unknown_devices,
        }
    }
}
