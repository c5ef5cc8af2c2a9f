// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

// ============================================================================
// FootprintKernel: single entry point for the emissions pipeline
// ============================================================================
// input snapshot + reference tables + coefficients
//   -> five phase results -> aggregate -> label / equivalences
// The JS side calls only this module.
// ============================================================================

use crate::aggregate::{AggregateResult, Aggregator, PerInference};
use crate::coefficients::Coefficients;
use crate::equivalence::{EquivalenceTranslator, Equivalences};
use crate::error::Result;
use crate::input::{
    DefaultReason, FootprintInput, HostingType, InferenceLocation, NumericInput, TrainingMode,
};
use crate::phases::{
    DevicesEngine, DevicesResult, EmissionBreakdown, HostingEngine, HostingResult, InferenceEngine,
    InferenceResult, NetworkEngine, NetworkResult, Phase, TrainingEngine,
};
use crate::reference::ReferenceData;
use crate::report::GreenCheck;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::{info, info_span};
use wasm_bindgen::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
}

/// Advisory note about the input. Never changes a number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationEvent {
    pub topic: String,
    pub message: String,
    pub severity: Severity,
}

impl ValidationEvent {
    fn info(topic: &str, message: String) -> Self {
        ValidationEvent {
            topic: topic.to_string(),
            message,
            severity: Severity::Info,
        }
    }

    fn warning(topic: &str, message: String) -> Self {
        ValidationEvent {
            topic: topic.to_string(),
            message,
            severity: Severity::Warning,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseDetails {
    pub training: EmissionBreakdown,
    pub inference: InferenceResult,
    pub devices: DevicesResult,
    pub network: NetworkResult,
    pub hosting: HostingResult,
}

impl PhaseDetails {
    pub fn breakdowns(&self) -> [(Phase, EmissionBreakdown); 5] {
        [
            (Phase::Training, self.training),
            (Phase::Inference, self.inference.breakdown),
            (Phase::Devices, self.devices.breakdown),
            (Phase::Network, self.network.breakdown),
            (Phase::Hosting, self.hosting.breakdown),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintReport {
    pub inputs: FootprintInput,
    pub phases: PhaseDetails,
    pub aggregate: AggregateResult,
    pub equivalences: Equivalences,
    pub events: Vec<ValidationEvent>,
    pub coefficients_version: String,
    pub coefficients_fingerprint: String,
    pub reference_fingerprint: String,
    pub green_check: Option<GreenCheck>,
}

/// Built-in tables, parsed on first use
pub fn builtin_reference() -> Result<&'static ReferenceData> {
    static BUILTIN: OnceLock<ReferenceData> = OnceLock::new();
    if let Some(reference) = BUILTIN.get() {
        return Ok(reference);
    }
    let loaded = ReferenceData::builtin()?;
    Ok(BUILTIN.get_or_init(|| loaded))
}

#[wasm_bindgen]
pub struct FootprintKernel;

#[wasm_bindgen]
impl FootprintKernel {
    /// Compute the full report from an input snapshot JSON using the built-in
    /// reference tables and default coefficients.
    ///
    /// Returns the report as JSON, or `{"error": "..."}` when the document
    /// itself cannot be read. Individual malformed fields never error; they
    /// count as 0 and show up in `events`.
    pub fn compute_json(input_json: &str) -> String {
        Self::compute_json_with_coefficients(input_json, "{}")
    }

    /// As `compute_json`, with a partial coefficient override document.
    pub fn compute_json_with_coefficients(input_json: &str, coefficients_json: &str) -> String {
        let run = || -> Result<String> {
            let input = FootprintInput::from_json(input_json)?;
            let coefficients = Coefficients::from_json(coefficients_json)?;
            let reference = builtin_reference()?;
            Self::compute(&input, reference, &coefficients).to_json(false)
        };
        match run() {
            Ok(json) => json,
            Err(e) => serde_json::to_string(&serde_json::json!({ "error": e.to_string() }))
                .unwrap_or_default(),
        }
    }

    /// Object-in, object-out variant for callers that already hold a JS value.
    pub fn compute_value(input: JsValue) -> std::result::Result<JsValue, JsValue> {
        let input: FootprintInput = serde_wasm_bindgen::from_value(input)
            .map_err(|e| JsValue::from_str(&format!("Failed to read input: {}", e)))?;
        let reference = builtin_reference().map_err(|e| JsValue::from_str(&e.to_string()))?;
        let report = Self::compute(&input, reference, &Coefficients::default());
        report
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Pure Rust pipeline (no JSON, no JS)
impl FootprintKernel {
    pub fn compute(
        input: &FootprintInput,
        reference: &ReferenceData,
        coefficients: &Coefficients,
    ) -> FootprintReport {
        let _span = info_span!("footprint_compute").entered();

        let inference = InferenceEngine::compute(&input.inference, reference, coefficients);
        let mut phases = PhaseDetails {
            training: TrainingEngine::compute(&input.training, reference, coefficients),
            devices: DevicesEngine::compute(&input.devices, reference, coefficients),
            network: NetworkEngine::compute(&input.network, inference.inferences_per_year, coefficients),
            hosting: HostingEngine::compute(&input.hosting, reference, coefficients),
            inference,
        };
        let overflowed = discard_overflow(&mut phases);

        let aggregate = Aggregator::aggregate(
            phases.breakdowns(),
            phases.inference.inferences_per_year,
            coefficients,
        );
        let equivalences = EquivalenceTranslator::translate(aggregate.total_kg, coefficients);
        let mut events = collect_events(input, &phases, &aggregate, reference);
        for phase in overflowed {
            events.push(ValidationEvent::warning(
                &format!("{}.OVERFLOW", phase.name().to_uppercase()),
                format!("{} emissions are too large to represent, counted as 0", phase.name()),
            ));
        }

        info!(
            total_kg = aggregate.total_kg,
            label = %aggregate.label,
            events = events.len(),
            "footprint computed"
        );

        FootprintReport {
            inputs: input.clone(),
            green_check: input.hosting.green_check.clone(),
            phases,
            aggregate,
            equivalences,
            events,
            coefficients_version: coefficients.version.clone(),
            coefficients_fingerprint: coefficients.fingerprint(),
            reference_fingerprint: reference.fingerprint(),
        }
    }
}

/// Zero a term that overflowed to infinity or NaN. True when it did.
fn zero_if_non_finite(value: &mut f64) -> bool {
    if value.is_finite() {
        false
    } else {
        *value = 0.0;
        true
    }
}

fn zero_breakdown_terms(breakdown: &mut EmissionBreakdown) -> bool {
    let operational = zero_if_non_finite(&mut breakdown.operational_kg);
    let embodied = zero_if_non_finite(&mut breakdown.embodied_kg);
    operational || embodied
}

/// Extreme but finite inputs can overflow a phase. Such terms are dropped to
/// 0 so no report field is NaN or infinite; returns the phases affected.
fn discard_overflow(phases: &mut PhaseDetails) -> Vec<Phase> {
    let mut affected = Vec::new();

    if zero_breakdown_terms(&mut phases.training) {
        affected.push(Phase::Training);
    }

    let inference = &mut phases.inference;
    let mut hit = zero_if_non_finite(&mut inference.breakdown.operational_kg);
    let parts = zero_if_non_finite(&mut inference.embedded_gpu_kg)
        | zero_if_non_finite(&mut inference.embedded_server_kg);
    if parts {
        inference.breakdown.embodied_kg = inference.embedded_gpu_kg + inference.embedded_server_kg;
    }
    hit |= parts | zero_if_non_finite(&mut inference.breakdown.embodied_kg);
    if hit {
        affected.push(Phase::Inference);
    }

    let devices = &mut phases.devices;
    let mut parts = false;
    for device in devices.per_device.iter_mut() {
        parts |= zero_breakdown_terms(&mut device.breakdown);
        parts |= zero_if_non_finite(&mut device.co2_per_session_kg);
        parts |= zero_if_non_finite(&mut device.co2_per_user_kg);
    }
    if parts {
        devices.breakdown = devices
            .per_device
            .iter()
            .fold(EmissionBreakdown::zero(), |acc, d| acc + d.breakdown);
    }
    if parts | zero_breakdown_terms(&mut devices.breakdown) {
        affected.push(Phase::Devices);
    }

    let network = &mut phases.network;
    let hit = zero_breakdown_terms(&mut network.breakdown)
        | zero_if_non_finite(&mut network.energy_per_inference_kwh)
        | zero_if_non_finite(&mut network.co2_per_inference_g)
        | zero_if_non_finite(&mut network.annual_energy_kwh);
    if hit {
        affected.push(Phase::Network);
    }

    if zero_breakdown_terms(&mut phases.hosting.breakdown) {
        affected.push(Phase::Hosting);
    }

    affected
}

fn reason_text(reason: DefaultReason) -> &'static str {
    match reason {
        DefaultReason::Missing => "missing",
        DefaultReason::NotANumber => "not a number",
        DefaultReason::NonFinite => "not finite",
        DefaultReason::Negative => "negative",
    }
}

/// A supplied value that could not be used. Empty fields are not reported.
fn check_numeric(events: &mut Vec<ValidationEvent>, topic: &str, field: &str, value: &NumericInput) {
    match value.default_reason() {
        None | Some(DefaultReason::Missing) => {}
        Some(reason) => events.push(ValidationEvent::info(
            topic,
            format!("{} is {}, counted as 0", field, reason_text(reason)),
        )),
    }
}

fn collect_events(
    input: &FootprintInput,
    phases: &PhaseDetails,
    aggregate: &AggregateResult,
    reference: &ReferenceData,
) -> Vec<ValidationEvent> {
    let mut events = Vec::new();

    // Training
    match input.training.mode() {
        TrainingMode::Preloaded => {
            if let Some(name) = input.training.selected_model.as_deref() {
                if reference.lookup_model(name).is_none() {
                    events.push(ValidationEvent::warning(
                        "TRAINING.MODEL",
                        format!("Unknown foundation model '{}', training counted as 0", name),
                    ));
                }
            }
        }
        TrainingMode::Finetuned | TrainingMode::Custom => {
            check_numeric(&mut events, "TRAINING.INPUT", "gpuHours", &input.training.gpu_hours);
        }
    }

    // Inference
    let inference = &input.inference;
    check_numeric(&mut events, "INFERENCE.INPUT", "energyPerInference", &inference.energy_per_inference);
    check_numeric(&mut events, "INFERENCE.INPUT", "inferencesPerYear", &inference.inferences_per_year);
    check_numeric(&mut events, "INFERENCE.INPUT", "inferenceDuration", &inference.inference_duration);
    if inference.location == Some(InferenceLocation::Cloud) && phases.inference.datacenter.is_none() {
        events.push(ValidationEvent::warning(
            "INFERENCE.DATACENTER",
            format!(
                "No datacenter for provider {:?} region {:?}, operational inference counted as 0",
                inference.provider.as_deref().unwrap_or(""),
                inference.region.as_deref().unwrap_or("")
            ),
        ));
    }

    // Devices
    for device in &phases.devices.unknown_devices {
        events.push(ValidationEvent::warning(
            "DEVICES.PROFILE",
            format!("Unknown device type '{}', skipped", device),
        ));
    }
    for (device_type, usage) in &input.devices.devices {
        if reference.lookup_device(device_type).is_none() {
            continue;
        }
        let topic = "DEVICES.INPUT";
        check_numeric(&mut events, topic, &format!("{}.count", device_type), &usage.count);
        check_numeric(&mut events, topic, &format!("{}.duration", device_type), &usage.duration);
        check_numeric(&mut events, topic, &format!("{}.sessions", device_type), &usage.sessions);
    }

    // Network
    check_numeric(&mut events, "NETWORK.INPUT", "dataAmount", &input.network.data_amount);

    // Hosting
    let hosting = &input.hosting;
    check_numeric(&mut events, "HOSTING.INPUT", "annualVisits", &hosting.annual_visits);
    if hosting.hosting_type == Some(HostingType::Cloud) && phases.hosting.datacenter.is_none() {
        events.push(ValidationEvent::warning(
            "HOSTING.DATACENTER",
            format!(
                "No datacenter for provider {:?} region {:?}",
                hosting.cloud_provider.as_deref().unwrap_or(""),
                hosting.region.as_deref().unwrap_or("")
            ),
        ));
    }

    if aggregate.per_inference_g == PerInference::Undefined {
        events.push(ValidationEvent::warning(
            "AGGREGATE.PER_INFERENCE",
            "No inferences per year, emissions per inference not applicable".to_string(),
        ));
    }

    events
}
