// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::coefficients::Coefficients;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Total emissions restated in everyday quantities
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equivalences {
    /// Kilometres driven by an average petrol car
    pub car_km: f64,
    /// Years of CO2 uptake by one tree
    pub tree_years: f64,
    /// Years of an average household's emissions
    pub household_years: f64,
}

/// Display form: car distance and tree count as whole numbers, households to
/// two decimals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundedEquivalences {
    pub car_km: u64,
    pub tree_years: u64,
    pub household_years_hundredths: u64,
}

impl Equivalences {
    pub fn rounded(&self) -> RoundedEquivalences {
        RoundedEquivalences {
            car_km: self.car_km.round() as u64,
            tree_years: self.tree_years.round() as u64,
            household_years_hundredths: (self.household_years * 100.0).round() as u64,
        }
    }
}

pub struct EquivalenceTranslator;

impl EquivalenceTranslator {
    /// Quotients that would overflow are held at `f64::MAX`.
    pub fn translate(total_kg: f64, coefficients: &Coefficients) -> Equivalences {
        let per = |factor: f64| (total_kg / factor).min(f64::MAX);
        Equivalences {
            car_km: per(coefficients.car_kg_per_km),
            tree_years: per(coefficients.tree_kg_per_year),
            household_years: per(coefficients.household_kg_per_year),
        }
    }
}

/// Equivalences under the default factors
#[wasm_bindgen]
pub fn translate_equivalences(total_kg: f64) -> Equivalences {
    EquivalenceTranslator::translate(total_kg, &Coefficients::default())
}
