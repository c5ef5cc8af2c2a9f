// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use super::EmissionBreakdown;
use crate::coefficients::Coefficients;
use crate::formulas;
use crate::input::NetworkInput;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkResult {
    pub breakdown: EmissionBreakdown,
    pub data_gb: f64,
    pub energy_per_inference_kwh: f64,
    pub co2_per_inference_g: f64,
    pub annual_energy_kwh: f64,
}

pub struct NetworkEngine;

impl NetworkEngine {
    /// Transmission emissions. Annualized with the inference count from the
    /// inference phase; no embodied term.
    pub fn compute(
        input: &NetworkInput,
        inferences_per_year: f64,
        coefficients: &Coefficients,
    ) -> NetworkResult {
        let data_gb = input.data_gb();
        let energy_per_inference_kwh = formulas::network_energy_kwh(data_gb, coefficients.network_kwh_per_gb);
        let co2_per_inference_g =
            formulas::grams_from_kwh(energy_per_inference_kwh, coefficients.grid_intensity_g_per_kwh);

        let annual_energy_kwh = energy_per_inference_kwh * inferences_per_year;
        let operational_kg =
            formulas::grams_from_kwh(annual_energy_kwh, coefficients.grid_intensity_g_per_kwh) / 1000.0;

        NetworkResult {
            breakdown: EmissionBreakdown::operational(operational_kg),
            data_gb,
            energy_per_inference_kwh,
            co2_per_inference_g,
            annual_energy_kwh,
        }
    }
}
