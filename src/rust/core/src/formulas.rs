// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Emission Formulas for Generative-AI Lifecycle Phases
//!
//! Pure mathematical functions operating on scalar values. Every constant is
//! passed in explicitly (see `Coefficients`), so the same function serves the
//! default literature values and any audited override.
//!
//! References:
//! - Luccioni et al. (2022): BLOOM training and server embodied emissions
//! - Luccioni, Jernite & Strubell (2024): energy per inference by task
//! - Farfan & Lohrmann (2023): network energy intensity (kWh/GB)
//! - WebsiteCarbon: grams CO2 per page view
//! - Boavizta / Malmodin & Lundén (2018): device power and embodied carbon

use wasm_bindgen::prelude::*;

// ============================================================================
// TRAINING
// ============================================================================

/// Linear GPU-hour estimate for custom or fine-tuned training
///
/// E = hours * k
///
/// # Returns
/// kg CO2e
#[wasm_bindgen]
pub fn training_gpu_hours_kg(gpu_hours: f64, kg_per_gpu_hour: f64) -> f64 {
    gpu_hours * kg_per_gpu_hour
}

// ============================================================================
// INFERENCE
// ============================================================================

/// Operational emissions of serving inferences in a datacenter
///
/// E = (e_inf * PUE * N * CI) / 1000
///
/// # Arguments
/// * `energy_kwh` - Energy per inference (kWh)
/// * `pue` - Power usage effectiveness of the datacenter
/// * `inferences` - Inferences per year
/// * `carbon_intensity` - Grid intensity (g CO2e / kWh)
///
/// # Returns
/// kg CO2e per year
#[wasm_bindgen]
pub fn inference_operational_kg(
    energy_kwh: f64,
    pue: f64,
    inferences: f64,
    carbon_intensity: f64,
) -> f64 {
    (energy_kwh * pue * inferences * carbon_intensity) / 1000.0
}

/// Hardware manufacturing cost allocated to inference time
///
/// E = (M / T_life) * t_inf * N * share
///
/// # Arguments
/// * `embodied_g` - Manufacturing footprint of the hardware (g CO2e)
/// * `lifetime_seconds` - Amortization period (s)
/// * `duration_seconds` - Duration of one inference (s)
/// * `inferences` - Inferences per year
/// * `share` - Fraction attributable to the AI workload (1.0 for a dedicated GPU)
///
/// # Returns
/// g CO2e per year
#[wasm_bindgen]
pub fn amortized_embodied_g(
    embodied_g: f64,
    lifetime_seconds: f64,
    duration_seconds: f64,
    inferences: f64,
    share: f64,
) -> f64 {
    if lifetime_seconds <= 0.0 {
        return 0.0;
    }
    (embodied_g / lifetime_seconds) * duration_seconds * inferences * share
}

// ============================================================================
// END-USER DEVICES
// ============================================================================

/// Share of a device's daily active use spent in one session
#[wasm_bindgen]
pub fn device_usage_fraction(duration_minutes: f64, active_minutes_per_day: f64) -> f64 {
    if active_minutes_per_day <= 0.0 {
        return 0.0;
    }
    duration_minutes / active_minutes_per_day
}

/// Yearly embodied emissions of a device fleet
///
/// E = n * (M / L) * f_use
///
/// # Returns
/// kg CO2e per year
#[wasm_bindgen]
pub fn device_embodied_kg(
    count: f64,
    embodied_kg: f64,
    lifetime_years: f64,
    usage_fraction: f64,
) -> f64 {
    if lifetime_years <= 0.0 {
        return 0.0;
    }
    count * (embodied_kg / lifetime_years) * usage_fraction
}

/// Energy drawn by a device during one session
///
/// E = P * t / 1000 / 60
///
/// # Returns
/// kWh
#[wasm_bindgen]
pub fn session_energy_kwh(power_watts: f64, duration_minutes: f64) -> f64 {
    (power_watts * duration_minutes) / 1000.0 / 60.0
}

/// Yearly operational emissions of a device fleet
///
/// E = e_session * CI * sessions * n / 1000
///
/// # Returns
/// kg CO2e per year
#[wasm_bindgen]
pub fn device_operational_kg(
    session_kwh: f64,
    carbon_intensity: f64,
    sessions_per_year: f64,
    count: f64,
) -> f64 {
    session_kwh * carbon_intensity * sessions_per_year * count / 1000.0
}

// ============================================================================
// NETWORK
// ============================================================================

/// Transmission energy for a data volume
///
/// # Returns
/// kWh
#[wasm_bindgen]
pub fn network_energy_kwh(data_gb: f64, kwh_per_gb: f64) -> f64 {
    data_gb * kwh_per_gb
}

/// Grams CO2e for an amount of electricity
#[wasm_bindgen]
pub fn grams_from_kwh(kwh: f64, carbon_intensity: f64) -> f64 {
    kwh * carbon_intensity
}

// ============================================================================
// HOSTING
// ============================================================================

/// Page-view emissions (already inclusive of server power and grid mix)
///
/// # Returns
/// kg CO2e per year
#[wasm_bindgen]
pub fn hosting_operational_kg(visits: f64, g_per_page_view: f64) -> f64 {
    visits * g_per_page_view / 1000.0
}

/// Hosting server manufacturing cost allocated to this year's visits
///
/// E = (M / (V * L * AUR)) * V / 1000
///
/// The visit count cancels: any `visits > 0` yields M / (L * AUR) / 1000.
/// Zero visits yields zero.
///
/// # Returns
/// kg CO2e per year
#[wasm_bindgen]
pub fn hosting_embodied_kg(
    visits: f64,
    embodied_g: f64,
    lifetime_years: f64,
    utilization: f64,
) -> f64 {
    let lifetime_visits = visits * lifetime_years * utilization;
    if lifetime_visits <= 0.0 {
        return 0.0;
    }
    (embodied_g / lifetime_visits) * visits / 1000.0
}

// ============================================================================
// TESTS
// ============================================================================
