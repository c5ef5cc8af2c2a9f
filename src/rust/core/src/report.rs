// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Report output: JSON export, plain-language explanation, and the green-hosting
// advisory record echoed alongside the numbers.

use crate::aggregate::PerInference;
use crate::error::{FootprintError, Result};
use crate::footprint_kernel::FootprintReport;
use crate::input::TrainingMode;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Green hosting status of a site, as reported by the Green Web Foundation
/// greencheck service. Informational only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreenCheck {
    pub green: bool,
    pub hosted_by: String,
}

#[derive(Deserialize)]
struct GreencheckApiResponse {
    #[serde(default)]
    green: bool,
    #[serde(default)]
    hosted_by: Option<String>,
}

impl GreenCheck {
    /// Parse a greencheck API response body. A missing host name becomes "unknown".
    pub fn from_api_json(json: &str) -> Result<GreenCheck> {
        let api: GreencheckApiResponse = serde_json::from_str(json).map_err(FootprintError::GreenCheckParse)?;
        Ok(GreenCheck {
            green: api.green,
            hosted_by: api
                .hosted_by
                .filter(|h| !h.trim().is_empty())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }
}

impl FootprintReport {
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let out = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        out.map_err(FootprintError::ReportSerialize)
    }
}

fn kg(value: f64) -> String {
    format!("{:.2} kg", value)
}

fn count(value: f64) -> String {
    format!("{:.0}", value)
}

/// One paragraph per phase plus a closing total. Figures are rounded here only.
pub fn narrative(report: &FootprintReport) -> String {
    let mut out = String::new();
    let phases = &report.phases;
    let inputs = &report.inputs;

    // Training
    match inputs.training.mode() {
        TrainingMode::Preloaded => match inputs.training.selected_model.as_deref() {
            Some(model) => {
                let _ = writeln!(
                    out,
                    "Training: the pre-trained model {} accounts for {} CO2e.",
                    model,
                    kg(phases.training.total())
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "Training: no pre-trained model was selected, counted as {} CO2e.",
                    kg(phases.training.total())
                );
            }
        },
        TrainingMode::Finetuned | TrainingMode::Custom => {
            let _ = writeln!(
                out,
                "Training: {} GPU hours account for {} CO2e.",
                count(inputs.training.gpu_hours.value()),
                kg(phases.training.total())
            );
        }
    }

    // Inference
    let inference = &phases.inference;
    let _ = writeln!(
        out,
        "Inference: {} inferences per year emit {} from electricity and {} from hardware manufacturing ({} of which from servers).",
        count(inference.inferences_per_year),
        kg(inference.breakdown.operational_kg),
        kg(inference.breakdown.embodied_kg),
        kg(inference.embedded_server_kg)
    );

    // Devices
    if phases.devices.per_device.is_empty() {
        let _ = writeln!(out, "Devices: no end-user devices were entered.");
    } else {
        for device in &phases.devices.per_device {
            let _ = writeln!(
                out,
                "Devices: {} use accounts for {} in operation and {} in manufacturing.",
                device.device_type,
                kg(device.breakdown.operational_kg),
                kg(device.breakdown.embodied_kg)
            );
        }
    }

    // Network
    let network = &phases.network;
    let _ = writeln!(
        out,
        "Network: {:.6} GB per inference uses {:.2} kWh per year, emitting {}.",
        network.data_gb,
        network.annual_energy_kwh,
        kg(network.breakdown.operational_kg)
    );

    // Hosting
    let hosting = &phases.hosting;
    let _ = writeln!(
        out,
        "Hosting: {} visits per year emit {} in operation and {} in server manufacturing.",
        count(hosting.visits),
        kg(hosting.breakdown.operational_kg),
        kg(hosting.breakdown.embodied_kg)
    );
    if let Some(check) = &report.green_check {
        let status = if check.green { "green" } else { "not green" };
        let _ = writeln!(out, "Hosting provider {} is {}.", check.hosted_by, status);
    }

    // Total
    let aggregate = &report.aggregate;
    let per_inference = match aggregate.per_inference_g {
        PerInference::Defined(g) => format!("{:.4} g", g),
        PerInference::Undefined => "not applicable".to_string(),
    };
    let _ = write!(
        out,
        "Total: {} CO2e per year (label {}), {} per inference.",
        kg(aggregate.total_kg),
        aggregate.label,
        per_inference
    );
    out
}
