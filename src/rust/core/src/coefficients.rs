// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Coefficient table: every literature constant the engine relies on.
//
// Formula code never carries a bare number; it reads from here. A partial JSON
// document may override any subset of fields (the rest keep their defaults).

use crate::error::{FootprintError, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Version tag of the default table. Bump when a default changes.
pub const COEFFICIENTS_VERSION: &str = "2025.1";

/// 365 days, no leap correction.
pub const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 3600.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Coefficients {
    pub version: String,

    // --- Training ---
    /// kg CO2e per GPU-hour for custom / fine-tuned training
    pub training_kg_per_gpu_hour: f64,

    // --- Inference hardware amortization ---
    /// GPU manufacturing footprint (g CO2e)
    pub gpu_embodied_g: f64,
    /// Server manufacturing footprint (g CO2e)
    pub server_embodied_g: f64,
    pub hardware_lifetime_years: f64,
    /// Share of a server attributable to the AI workload (0-1)
    pub server_ai_share: f64,

    // --- Grid ---
    /// Dutch average grid intensity (g CO2e / kWh), used for devices and network
    pub grid_intensity_g_per_kwh: f64,

    // --- End-user devices ---
    /// Daily active-use baseline (minutes)
    pub device_active_minutes_per_day: f64,

    // --- Network ---
    pub network_kwh_per_gb: f64,

    // --- Hosting ---
    /// WebsiteCarbon global average (g CO2e per page view)
    pub hosting_g_per_page_view: f64,
    pub hosting_server_embodied_g: f64,
    pub hosting_lifetime_years: f64,
    /// Annual utilization rate of the hosting server (0-1)
    pub hosting_utilization: f64,

    // --- Equivalences ---
    pub car_kg_per_km: f64,
    pub tree_kg_per_year: f64,
    pub household_kg_per_year: f64,

    /// Inclusive upper bounds for labels A..F (kg CO2e / year). Above the
    /// last bound the label is G.
    pub label_thresholds_kg: [f64; 6],
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            version: COEFFICIENTS_VERSION.to_string(),
            training_kg_per_gpu_hour: 0.2,
            gpu_embodied_g: 150_000.0,
            server_embodied_g: 2_500_000.0,
            hardware_lifetime_years: 6.0,
            server_ai_share: 0.4,
            grid_intensity_g_per_kwh: 268.0,
            device_active_minutes_per_day: 480.0,
            network_kwh_per_gb: 0.27,
            hosting_g_per_page_view: 0.8,
            hosting_server_embodied_g: 2_500_000.0,
            hosting_lifetime_years: 6.0,
            hosting_utilization: 0.4,
            car_kg_per_km: 0.12,
            tree_kg_per_year: 25.0,
            household_kg_per_year: 18_500.0,
            // Doubling at every step
            label_thresholds_kg: [
                10_000.0, 20_000.0, 40_000.0, 80_000.0, 160_000.0, 320_000.0,
            ],
        }
    }
}

impl Coefficients {
    /// Parse a (possibly partial) override document and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let coefficients: Coefficients =
            serde_json::from_str(json).map_err(FootprintError::CoefficientsParse)?;
        coefficients.validate()?;
        Ok(coefficients)
    }

    /// Hardware lifetime expressed in seconds, the amortization base for
    /// per-inference embodied emissions.
    pub fn hardware_lifetime_seconds(&self) -> f64 {
        self.hardware_lifetime_years * SECONDS_PER_YEAR
    }

    pub fn validate(&self) -> Result<()> {
        let rates = [
            ("trainingKgPerGpuHour", self.training_kg_per_gpu_hour),
            ("gpuEmbodiedG", self.gpu_embodied_g),
            ("serverEmbodiedG", self.server_embodied_g),
            ("serverAiShare", self.server_ai_share),
            ("gridIntensityGPerKwh", self.grid_intensity_g_per_kwh),
            ("networkKwhPerGb", self.network_kwh_per_gb),
            ("hostingGPerPageView", self.hosting_g_per_page_view),
            ("hostingServerEmbodiedG", self.hosting_server_embodied_g),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(FootprintError::InvalidCoefficients(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }

        // Divisors
        let divisors = [
            ("hardwareLifetimeYears", self.hardware_lifetime_years),
            ("deviceActiveMinutesPerDay", self.device_active_minutes_per_day),
            ("hostingLifetimeYears", self.hosting_lifetime_years),
            ("hostingUtilization", self.hosting_utilization),
            ("carKgPerKm", self.car_kg_per_km),
            ("treeKgPerYear", self.tree_kg_per_year),
            ("householdKgPerYear", self.household_kg_per_year),
        ];
        for (name, value) in divisors {
            if !value.is_finite() || value <= 0.0 {
                return Err(FootprintError::InvalidCoefficients(format!(
                    "{} must be a finite positive number, got {}",
                    name, value
                )));
            }
        }

        let thresholds = &self.label_thresholds_kg;
        if thresholds.iter().any(|t| !t.is_finite()) {
            return Err(FootprintError::InvalidCoefficients(
                "labelThresholdsKg must be finite".to_string(),
            ));
        }
        if thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(FootprintError::InvalidCoefficients(format!(
                "labelThresholdsKg must be strictly increasing, got {:?}",
                thresholds
            )));
        }
        Ok(())
    }

    /// SHA-256 over the serialized table, hex encoded.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        // Serializing a plain struct of numbers and one string cannot fail
        hasher.update(serde_json::to_vec(self).unwrap_or_default());
        hex::encode(hasher.finalize())
    }
}
