// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// InferenceEngine: datacenter electricity plus GPU and server manufacturing,
// amortized over accelerator time actually spent on inferences.

use super::{resolve_datacenter, EmissionBreakdown};
use crate::coefficients::Coefficients;
use crate::formulas;
use crate::input::{InferenceInput, InferenceLocation};
use crate::reference::{DatacenterRow, ReferenceData};
use serde::{Deserialize, Serialize};

/// PUE assumed when no datacenter is resolved
const UNRESOLVED_PUE: f64 = 1.0;
/// Grid intensity assumed when no datacenter is resolved
const UNRESOLVED_CARBON_INTENSITY: f64 = 0.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceResult {
    pub breakdown: EmissionBreakdown,
    pub embedded_gpu_kg: f64,
    /// Server share of `breakdown.embodied_kg`
    pub embedded_server_kg: f64,
    pub inferences_per_year: f64,
    pub energy_per_inference_kwh: f64,
    pub pue: f64,
    pub carbon_intensity_g_per_kwh: f64,
    pub datacenter: Option<DatacenterRow>,
}

pub struct InferenceEngine;

impl InferenceEngine {
    pub fn compute(
        input: &InferenceInput,
        reference: &ReferenceData,
        coefficients: &Coefficients,
    ) -> InferenceResult {
        let datacenter = match input.location {
            Some(InferenceLocation::Cloud) => resolve_datacenter(
                reference,
                input.provider.as_deref(),
                input.region.as_deref(),
            ),
            // On-premise hardware and location are not modelled
            _ => None,
        };
        let (pue, carbon_intensity) = datacenter
            .map(|dc| (dc.pue, dc.carbon_intensity_g_per_kwh))
            .unwrap_or((UNRESOLVED_PUE, UNRESOLVED_CARBON_INTENSITY));

        let energy_per_inference_kwh = input.energy_per_inference_kwh();
        let inferences = input.inferences_per_year.value();
        let duration_s = input.inference_duration.value();
        let lifetime_s = coefficients.hardware_lifetime_seconds();

        let operational_kg =
            formulas::inference_operational_kg(energy_per_inference_kwh, pue, inferences, carbon_intensity);
        let embedded_gpu_g =
            formulas::amortized_embodied_g(coefficients.gpu_embodied_g, lifetime_s, duration_s, inferences, 1.0);
        let embedded_server_g = formulas::amortized_embodied_g(
            coefficients.server_embodied_g,
            lifetime_s,
            duration_s,
            inferences,
            coefficients.server_ai_share,
        );

        InferenceResult {
            breakdown: EmissionBreakdown::new(
                operational_kg,
                (embedded_gpu_g + embedded_server_g) / 1000.0,
            ),
            embedded_gpu_kg: embedded_gpu_g / 1000.0,
            embedded_server_kg: embedded_server_g / 1000.0,
            inferences_per_year: inferences,
            energy_per_inference_kwh,
            pue,
            carbon_intensity_g_per_kwh: carbon_intensity,
            datacenter: datacenter.cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficients::SECONDS_PER_YEAR;
    use crate::input::{AiTask, NumericInput};

    fn cloud_input() -> InferenceInput {
        InferenceInput {
            location: Some(InferenceLocation::Cloud),
            provider: Some("azure".to_string()),
            region: Some("West Europe".to_string()),
            task: Some(AiTask::TextGeneration),
            inferences_per_year: NumericInput::Valid(1_000_000.0),
            inference_duration: NumericInput::Valid(2.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_cloud_operational_uses_region() {
        let reference = ReferenceData::builtin().unwrap();
        let result = InferenceEngine::compute(&cloud_input(), &reference, &Coefficients::default());

        // West Europe: PUE 1.18, 268 g/kWh
        let expected = 0.047 / 1000.0 * 1.18 * 1_000_000.0 * 268.0 / 1000.0;
        assert!(
            (result.breakdown.operational_kg - expected).abs() < 1e-9,
            "Expected {}, got {}",
            expected,
            result.breakdown.operational_kg
        );
        assert_eq!(result.pue, 1.18);
        assert_eq!(result.carbon_intensity_g_per_kwh, 268.0);
        assert!(result.datacenter.is_some());
    }

    #[test]
    fn test_embodied_amortization() {
        let reference = ReferenceData::builtin().unwrap();
        let result = InferenceEngine::compute(&cloud_input(), &reference, &Coefficients::default());

        let lifetime = 6.0 * SECONDS_PER_YEAR;
        let gpu_g = 150_000.0 / lifetime * 2.0 * 1_000_000.0;
        let server_g = 2_500_000.0 / lifetime * 2.0 * 1_000_000.0 * 0.4;

        assert!((result.embedded_gpu_kg - gpu_g / 1000.0).abs() < 1e-9);
        assert!((result.embedded_server_kg - server_g / 1000.0).abs() < 1e-9);
        assert!(
            (result.breakdown.embodied_kg - (gpu_g + server_g) / 1000.0).abs() < 1e-9,
            "Server embodied must be counted exactly once"
        );
    }

    #[test]
    fn test_unknown_region_zeroes_operational_only() {
        let reference = ReferenceData::builtin().unwrap();
        let mut input = cloud_input();
        input.region = Some("Atlantis".to_string());
        let result = InferenceEngine::compute(&input, &reference, &Coefficients::default());

        assert_eq!(result.breakdown.operational_kg, 0.0);
        assert_eq!(result.pue, 1.0);
        assert!(result.datacenter.is_none());
        assert!(result.breakdown.embodied_kg > 0.0);
    }

    #[test]
    fn test_local_inference_ignores_cloud_selection() {
        let reference = ReferenceData::builtin().unwrap();
        let mut input = cloud_input();
        input.location = Some(InferenceLocation::Local);
        input.hardware = Some("gpu".to_string());
        let result = InferenceEngine::compute(&input, &reference, &Coefficients::default());
        assert_eq!(result.breakdown.operational_kg, 0.0);
        assert!(result.datacenter.is_none());
    }

    #[test]
    fn test_explicit_energy_replaces_task_default() {
        let reference = ReferenceData::builtin().unwrap();
        let mut input = cloud_input();
        input.energy_per_inference = NumericInput::Valid(0.001);
        let result = InferenceEngine::compute(&input, &reference, &Coefficients::default());
        assert_eq!(result.energy_per_inference_kwh, 0.001);
    }

    #[test]
    fn test_zero_inferences_zero_everything() {
        let reference = ReferenceData::builtin().unwrap();
        let mut input = cloud_input();
        input.inferences_per_year = NumericInput::parse("");
        let result = InferenceEngine::compute(&input, &reference, &Coefficients::default());
        assert_eq!(result.breakdown, EmissionBreakdown::zero());
    }
}
