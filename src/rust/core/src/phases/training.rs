// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use super::EmissionBreakdown;
use crate::coefficients::Coefficients;
use crate::formulas;
use crate::input::{TrainingInput, TrainingMode};
use crate::reference::ReferenceData;
use tracing::debug;

pub struct TrainingEngine;

impl TrainingEngine {
    /// Training footprint. All of it is booked as operational; there is no
    /// embodied term for this phase.
    pub fn compute(
        input: &TrainingInput,
        reference: &ReferenceData,
        coefficients: &Coefficients,
    ) -> EmissionBreakdown {
        let operational_kg = match input.mode() {
            TrainingMode::Preloaded => {
                let name = input.selected_model.as_deref().unwrap_or("");
                match reference.lookup_model(name) {
                    Some(row) => row.total_training_co2_kg,
                    None => {
                        debug!(model = name, "foundation model not found, training counts as 0");
                        0.0
                    }
                }
            }
            // gpu_type is deliberately not consulted
            TrainingMode::Finetuned | TrainingMode::Custom => formulas::training_gpu_hours_kg(
                input.gpu_hours.value(),
                coefficients.training_kg_per_gpu_hour,
            ),
        };

        EmissionBreakdown::operational(operational_kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::NumericInput;

    fn reference() -> ReferenceData {
        ReferenceData::builtin().unwrap()
    }

    #[test]
    fn test_preloaded_model_uses_table_value() {
        let input = TrainingInput {
            model_type: Some(TrainingMode::Preloaded),
            selected_model: Some("BLOOM".to_string()),
            ..Default::default()
        };
        let result = TrainingEngine::compute(&input, &reference(), &Coefficients::default());
        assert_eq!(result.operational_kg, 50_500.0);
        assert_eq!(result.embodied_kg, 0.0);
    }

    #[test]
    fn test_preloaded_match_ignores_case() {
        let input = TrainingInput {
            selected_model: Some("llama 2 70b".to_string()),
            ..Default::default()
        };
        let result = TrainingEngine::compute(&input, &reference(), &Coefficients::default());
        assert_eq!(result.operational_kg, 291_420.0);
    }

    #[test]
    fn test_unknown_model_contributes_zero() {
        let input = TrainingInput {
            selected_model: Some("my-private-model".to_string()),
            ..Default::default()
        };
        let result = TrainingEngine::compute(&input, &reference(), &Coefficients::default());
        assert_eq!(result, EmissionBreakdown::zero());
    }

    #[test]
    fn test_custom_mode_uses_gpu_hours() {
        let input = TrainingInput {
            model_type: Some(TrainingMode::Custom),
            gpu_hours: NumericInput::Valid(1000.0),
            // A preloaded selection left over from an earlier choice is ignored
            selected_model: Some("GPT-3".to_string()),
            gpu_type: Some("h100".to_string()),
        };
        let result = TrainingEngine::compute(&input, &reference(), &Coefficients::default());
        assert!((result.operational_kg - 200.0).abs() < 1e-9);
        assert_eq!(result.embodied_kg, 0.0);
    }

    #[test]
    fn test_gpu_type_does_not_change_estimate() {
        let base = TrainingInput {
            model_type: Some(TrainingMode::Finetuned),
            gpu_hours: NumericInput::Valid(40.0),
            ..Default::default()
        };
        let v100 = TrainingInput {
            gpu_type: Some("v100".to_string()),
            ..base.clone()
        };
        let h100 = TrainingInput {
            gpu_type: Some("h100".to_string()),
            ..base
        };
        let c = Coefficients::default();
        assert_eq!(
            TrainingEngine::compute(&v100, &reference(), &c),
            TrainingEngine::compute(&h100, &reference(), &c)
        );
    }

    #[test]
    fn test_missing_gpu_hours_is_zero() {
        let input = TrainingInput {
            model_type: Some(TrainingMode::Finetuned),
            gpu_hours: NumericInput::parse("lots"),
            ..Default::default()
        };
        let result = TrainingEngine::compute(&input, &reference(), &Coefficients::default());
        assert_eq!(result.total(), 0.0);
    }
}
