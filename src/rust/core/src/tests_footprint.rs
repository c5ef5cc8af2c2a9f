// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

//! Footprint Pipeline Tests
//!
//! End-to-end scenarios through `FootprintKernel` plus property tests over the
//! whole pipeline.

use crate::aggregate::{Aggregator, Label, PerInference};
use crate::coefficients::Coefficients;
use crate::footprint_kernel::{FootprintKernel, FootprintReport};
use crate::input::{AiTask, DataUnit, FootprintInput, HostingType, InferenceLocation, NumericInput, TrainingMode};
use crate::phases::{EmissionBreakdown, Phase};
use crate::reference::ReferenceData;
use crate::report::{narrative, GreenCheck};
use proptest::prelude::*;
use serde_json::json;

fn run(input: &FootprintInput) -> FootprintReport {
    let reference = ReferenceData::builtin().unwrap();
    FootprintKernel::compute(input, &reference, &Coefficients::default())
}

fn assert_close(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        (actual - expected).abs() < tolerance,
        "{}: expected {}, got {}",
        what,
        expected,
        actual
    );
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_smartphone_fleet_scenario() {
    let mut input = FootprintInput::default();
    input.devices = input.devices.with_device("smartphone", 1000.0, 5.0, 300.0);
    let report = run(&input);

    let phone = &report.phases.devices.per_device[0];
    assert_close(phone.usage_fraction, 5.0 / 480.0, 1e-12, "usage fraction");
    // 1000 * (86.6 / 3) * (5 / 480)
    assert_close(phone.breakdown.embodied_kg, 300.694_444, 1e-5, "smartphone embodied");
    // (1 W * 5 min) / 1000 / 60 kWh per session, 268 g/kWh, 300 sessions, 1000 users
    assert_close(phone.breakdown.operational_kg, 6.7, 1e-9, "smartphone operational");
}

#[test]
fn test_network_transfer_scenario() {
    let mut input = FootprintInput::default();
    input.inference.inferences_per_year = NumericInput::Valid(1_000_000.0);
    input.network.data_amount = NumericInput::Valid(150.0);
    input.network.data_unit = DataUnit::Kilobyte;
    let report = run(&input);

    assert_close(report.phases.network.data_gb, 1.5e-4, 1e-15, "data per inference");
    assert_close(
        report.phases.network.breakdown.operational_kg,
        10.854,
        1e-9,
        "network operational",
    );
}

#[test]
fn test_hosting_scenario() {
    let mut input = FootprintInput::default();
    input.hosting.is_online = true;
    input.hosting.hosting_type = Some(HostingType::Cloud);
    input.hosting.annual_visits = NumericInput::Valid(100_000.0);
    let report = run(&input);

    assert_close(report.phases.hosting.breakdown.operational_kg, 80.0, 1e-9, "hosting operational");
    assert_close(report.phases.hosting.breakdown.embodied_kg, 1041.666_666, 1e-5, "hosting embodied");
}

#[test]
fn test_hosting_embodied_does_not_scale_with_visits() {
    // Visits cancel out of the embodied term: any positive count gives the same figure.
    let embodied_for = |visits: f64| {
        let mut input = FootprintInput::default();
        input.hosting.is_online = true;
        input.hosting.hosting_type = Some(HostingType::Cloud);
        input.hosting.annual_visits = NumericInput::Valid(visits);
        run(&input).phases.hosting.breakdown.embodied_kg
    };
    let reference = embodied_for(100_000.0);
    for visits in [1.0, 250.0, 7_500_000.0] {
        assert_close(embodied_for(visits), reference, 1e-6, "embodied at other visit count");
    }
    assert_eq!(embodied_for(0.0), 0.0);
}

#[test]
fn test_label_boundary_through_aggregator() {
    let coefficients = Coefficients::default();
    let at = Aggregator::aggregate(
        vec![(Phase::Training, EmissionBreakdown::operational(10_000.0))],
        1.0,
        &coefficients,
    );
    let above = Aggregator::aggregate(
        vec![(Phase::Training, EmissionBreakdown::operational(10_000.01))],
        1.0,
        &coefficients,
    );
    assert_eq!(at.label, Label::A);
    assert_eq!(above.label, Label::B);
}

#[test]
fn test_zero_inferences_never_surface_nan() {
    let mut input = FootprintInput::default();
    input.hosting.annual_visits = NumericInput::Valid(1_000.0);
    let report = run(&input);

    assert!(report.aggregate.total_kg > 0.0);
    assert_eq!(report.aggregate.per_inference_g, PerInference::Undefined);

    let value: serde_json::Value = serde_json::from_str(&report.to_json(false).unwrap()).unwrap();
    assert_eq!(value["aggregate"]["perInferenceG"], json!({"status": "undefined"}));
    assert!(narrative(&report).contains("not applicable"));
}

#[test]
fn test_full_pipeline_from_json() {
    let snapshot = json!({
        "training": { "modelType": "preloaded", "selectedModel": "bloom" },
        "inference": {
            "location": "cloud", "provider": "azure", "region": "West Europe",
            "task": "text-generation", "inferencesPerYear": "1000000", "inferenceDuration": "2"
        },
        "devices": {
            "smartphone": { "count": "1000", "duration": "5", "sessions": "300" },
            "laptop": { "count": "10", "duration": "60", "sessions": "200" }
        },
        "network": { "dataAmount": "150", "dataUnit": "kB" },
        "hosting": {
            "isOnline": true, "annualVisits": "100000", "hostingType": "cloud",
            "cloudProvider": "gcp", "region": "europe-west4 (Eemshaven)",
            "greenCheck": { "green": true, "hostedBy": "Google" }
        }
    });

    let out = FootprintKernel::compute_json(&snapshot.to_string());
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert!(value.get("error").is_none(), "unexpected error: {}", out);

    let input = FootprintInput::from_json(&snapshot.to_string()).unwrap();
    let report = run(&input);

    let phase_sum: f64 = report.phases.breakdowns().iter().map(|(_, b)| b.total()).sum();
    assert_close(report.aggregate.total_kg, phase_sum, 1e-9, "total equals phase sum");
    assert_eq!(report.phases.training.operational_kg, 50_500.0);
    // BLOOM's 50.5 t dominates: D band (40 t < total <= 80 t)
    assert_eq!(report.aggregate.label, Label::D);
    assert!(matches!(report.aggregate.per_inference_g, PerInference::Defined(g) if g > 0.0));
    assert!(report.events.is_empty(), "events: {:?}", report.events);
    assert_eq!(
        report.green_check,
        Some(GreenCheck {
            green: true,
            hosted_by: "Google".to_string()
        })
    );

    let text = narrative(&report);
    println!("{}", text);
    assert!(text.contains("bloom"));
    assert!(text.contains("Hosting provider Google is green."));
    assert!(text.contains("label D"));

    assert_eq!(value["aggregate"]["label"], "D");
    assert_eq!(value["aggregate"]["perInferenceG"]["status"], "defined");
    assert_eq!(value["phases"]["devices"]["perDevice"].as_array().unwrap().len(), 2);
}

#[test]
fn test_recompute_is_bit_identical() {
    let mut input = FootprintInput::default();
    input.training.model_type = Some(TrainingMode::Custom);
    input.training.gpu_hours = NumericInput::Valid(12_345.678);
    input.inference.location = Some(InferenceLocation::Cloud);
    input.inference.provider = Some("aws".to_string());
    input.inference.task = Some(AiTask::ImageGeneration);
    input.inference.inferences_per_year = NumericInput::Valid(3_333_333.0);
    input.inference.inference_duration = NumericInput::Valid(0.7);

    let first = run(&input);
    let second = run(&input);
    assert_eq!(first, second);
    assert_eq!(first.to_json(false).unwrap(), second.to_json(false).unwrap());
}

#[test]
fn test_coefficient_override_changes_result_and_fingerprint() {
    let mut input = FootprintInput::default();
    input.hosting.annual_visits = NumericInput::Valid(10_000.0);
    let reference = ReferenceData::builtin().unwrap();

    let base = FootprintKernel::compute(&input, &reference, &Coefficients::default());
    let doubled = Coefficients::from_json(r#"{"hostingGPerPageView": 1.6}"#).unwrap();
    let overridden = FootprintKernel::compute(&input, &reference, &doubled);

    assert_close(
        overridden.aggregate.total_kg,
        base.aggregate.total_kg * 2.0,
        1e-9,
        "doubled page-view factor",
    );
    assert_ne!(base.coefficients_fingerprint, overridden.coefficients_fingerprint);
    assert_eq!(base.reference_fingerprint, overridden.reference_fingerprint);
}

// ============================================================================
// PROPERTIES
// ============================================================================

const DEVICE_KEYS: [&str; 5] = ["smartphone", "laptop", "desktop", "tablet", "smartwatch"];

fn any_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => 0.0..1e7f64,
        1 => -1e6..0.0f64,
        1 => Just(f64::NAN),
        1 => 1e150..1e300f64,
    ]
}

prop_compose! {
    fn arb_input()(
        mode in 0usize..3,
        model in 0usize..4,
        gpu_hours in any_number(),
        cloud in any::<bool>(),
        task in 0usize..AiTask::ALL.len(),
        inferences in any_number(),
        duration in any_number(),
        device in 0usize..DEVICE_KEYS.len(),
        usage in (any_number(), any_number(), any_number()),
        data in (any_number(), 0usize..3),
        hosting in (any::<bool>(), any::<bool>(), any_number()),
    ) -> FootprintInput {
        let mut input = FootprintInput::default();
        input.training.model_type = Some([TrainingMode::Preloaded, TrainingMode::Finetuned, TrainingMode::Custom][mode]);
        input.training.selected_model = Some(["GPT-3", "BLOOM", "Llama 2 70B", "unknown"][model].to_string());
        input.training.gpu_hours = gpu_hours.into();

        input.inference.location = Some(if cloud { InferenceLocation::Cloud } else { InferenceLocation::Local });
        input.inference.provider = Some("azure".to_string());
        input.inference.region = Some("West Europe".to_string());
        input.inference.task = Some(AiTask::ALL[task]);
        input.inference.inferences_per_year = inferences.into();
        input.inference.inference_duration = duration.into();

        input.devices = input.devices.with_device(DEVICE_KEYS[device], usage.0, usage.1, usage.2);

        input.network.data_amount = data.0.into();
        input.network.data_unit = [DataUnit::Kilobyte, DataUnit::Megabyte, DataUnit::Gigabyte][data.1];

        input.hosting.is_online = hosting.0;
        input.hosting.hosting_type = Some(if hosting.1 { HostingType::Cloud } else { HostingType::Local });
        input.hosting.annual_visits = hosting.2.into();
        input
    }
}

fn arb_breakdown() -> impl Strategy<Value = EmissionBreakdown> {
    (0.0..1e6f64, 0.0..1e6f64).prop_map(|(o, e)| EmissionBreakdown::new(o, e))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every phase term stays non-negative and finite whatever the user typed
    #[test]
    fn prop_breakdowns_non_negative(input in arb_input()) {
        let report = run(&input);
        for (phase, breakdown) in report.phases.breakdowns() {
            prop_assert!(breakdown.operational_kg >= 0.0, "{:?} operational {}", phase, breakdown.operational_kg);
            prop_assert!(breakdown.embodied_kg >= 0.0, "{:?} embodied {}", phase, breakdown.embodied_kg);
        }
        prop_assert!(report.aggregate.total_kg.is_finite());
        if let PerInference::Defined(g) = report.aggregate.per_inference_g {
            prop_assert!(g.is_finite() && g >= 0.0);
        }
    }

    /// Same snapshot, same report
    #[test]
    fn prop_pipeline_idempotent(input in arb_input()) {
        prop_assert_eq!(run(&input), run(&input));
    }

    /// Summation order of the phases does not matter
    #[test]
    fn prop_aggregate_order_independent(
        values in proptest::collection::vec(arb_breakdown(), 5),
        order in Just(Phase::ALL.to_vec()).prop_shuffle(),
        inferences in 0.0..1e7f64,
    ) {
        let coefficients = Coefficients::default();
        let canonical: Vec<(Phase, EmissionBreakdown)> =
            Phase::ALL.iter().copied().zip(values.iter().copied()).collect();
        let shuffled: Vec<(Phase, EmissionBreakdown)> = order
            .iter()
            .map(|p| (*p, values[*p as usize]))
            .collect();

        let a = Aggregator::aggregate(canonical, inferences, &coefficients);
        let b = Aggregator::aggregate(shuffled, inferences, &coefficients);
        prop_assert_eq!(a, b);
    }

    /// A larger total never gets a greener label
    #[test]
    fn prop_label_monotonic(t1 in 0.0..1e6f64, t2 in 0.0..1e6f64) {
        let thresholds = Coefficients::default().label_thresholds_kg;
        let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        prop_assert!(Label::from_total(lo, &thresholds) <= Label::from_total(hi, &thresholds));
    }
}
