// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Aggregator: phase breakdowns -> total, per-inference intensity, energy label.

use crate::coefficients::Coefficients;
use crate::phases::{EmissionBreakdown, Phase};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use wasm_bindgen::prelude::*;

/// Energy label, A (greenest) to G
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Label {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
}

impl Label {
    pub const ALL: [Label; 7] = [
        Label::A,
        Label::B,
        Label::C,
        Label::D,
        Label::E,
        Label::F,
        Label::G,
    ];

    /// Bounds are inclusive: a total exactly on a bound gets the greener label.
    /// A non-finite total is G.
    pub fn from_total(total_kg: f64, thresholds: &[f64; 6]) -> Label {
        if !total_kg.is_finite() {
            return Label::G;
        }
        thresholds
            .iter()
            .position(|bound| total_kg <= *bound)
            .map(|i| Label::ALL[i])
            .unwrap_or(Label::G)
    }

    pub fn letter(self) -> char {
        match self {
            Label::A => 'A',
            Label::B => 'B',
            Label::C => 'C',
            Label::D => 'D',
            Label::E => 'E',
            Label::F => 'F',
            Label::G => 'G',
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Label under the default thresholds
#[wasm_bindgen]
pub fn energy_label(total_kg: f64) -> Label {
    Label::from_total(total_kg, &Coefficients::default().label_thresholds_kg)
}

/// Grams CO2e per inference, or an explicit marker when there are no
/// inferences to divide by. Never NaN or infinite.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "grams", rename_all = "camelCase")]
pub enum PerInference {
    Defined(f64),
    Undefined,
}

impl PerInference {
    pub fn compute(total_kg: f64, inferences_per_year: f64) -> PerInference {
        if inferences_per_year <= 0.0 {
            return PerInference::Undefined;
        }
        let grams = total_kg * 1000.0 / inferences_per_year;
        if grams.is_finite() {
            PerInference::Defined(grams)
        } else {
            PerInference::Undefined
        }
    }

    pub fn grams(&self) -> Option<f64> {
        match self {
            PerInference::Defined(g) => Some(*g),
            PerInference::Undefined => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub total_kg: f64,
    pub operational_kg: f64,
    pub embodied_kg: f64,
    /// Always holds all five phases
    pub per_phase: BTreeMap<Phase, EmissionBreakdown>,
    pub per_inference_g: PerInference,
    pub label: Label,
}

impl AggregateResult {
    /// Fraction of the total contributed by one phase (0 when the total is 0)
    pub fn share(&self, phase: Phase) -> f64 {
        if self.total_kg <= 0.0 {
            return 0.0;
        }
        self.per_phase
            .get(&phase)
            .map(|b| b.total() / self.total_kg)
            .unwrap_or(0.0)
    }
}

pub struct Aggregator;

impl Aggregator {
    /// Sum phase breakdowns. The summation order is fixed by `Phase` order,
    /// so the caller's ordering never changes the result. A phase given more
    /// than once is accumulated. Non-finite terms count as 0 and sums that
    /// overflow saturate at `f64::MAX`.
    pub fn aggregate<I>(breakdowns: I, inferences_per_year: f64, coefficients: &Coefficients) -> AggregateResult
    where
        I: IntoIterator<Item = (Phase, EmissionBreakdown)>,
    {
        let mut per_phase: BTreeMap<Phase, EmissionBreakdown> =
            Phase::ALL.iter().map(|p| (*p, EmissionBreakdown::zero())).collect();
        for (phase, breakdown) in breakdowns {
            let slot = per_phase.entry(phase).or_default();
            *slot = saturate(*slot + finite_terms(breakdown));
        }

        let combined = per_phase
            .values()
            .fold(EmissionBreakdown::zero(), |acc, b| acc + *b);
        let total_kg = saturating(per_phase.values().map(|b| b.total()).sum::<f64>());

        AggregateResult {
            total_kg,
            operational_kg: saturating(combined.operational_kg),
            embodied_kg: saturating(combined.embodied_kg),
            per_phase,
            per_inference_g: PerInference::compute(total_kg, inferences_per_year),
            label: Label::from_total(total_kg, &coefficients.label_thresholds_kg),
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn finite_terms(b: EmissionBreakdown) -> EmissionBreakdown {
    EmissionBreakdown::new(finite_or_zero(b.operational_kg), finite_or_zero(b.embodied_kg))
}

fn saturating(value: f64) -> f64 {
    value.clamp(-f64::MAX, f64::MAX)
}

fn saturate(b: EmissionBreakdown) -> EmissionBreakdown {
    EmissionBreakdown::new(saturating(b.operational_kg), saturating(b.embodied_kg))
}
