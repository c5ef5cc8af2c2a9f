// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Lifecycle phase engines. Each is a stateless unit struct whose `compute`
// maps a phase input plus the reference tables to an emission breakdown.

pub mod devices;
pub mod hosting;
pub mod inference;
pub mod network;
pub mod training;

pub use devices::{DeviceBreakdown, DevicesEngine, DevicesResult};
pub use hosting::{HostingEngine, HostingResult};
pub use inference::{InferenceEngine, InferenceResult};
pub use network::{NetworkEngine, NetworkResult};
pub use training::TrainingEngine;

use crate::reference::{CloudProvider, DatacenterRow, ReferenceData};
use serde::{Deserialize, Serialize};
use std::ops::Add;
use tracing::debug;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Training = 0,
    Inference = 1,
    Devices = 2,
    Network = 3,
    Hosting = 4,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Training,
        Phase::Inference,
        Phase::Devices,
        Phase::Network,
        Phase::Hosting,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Phase::Training => "training",
            Phase::Inference => "inference",
            Phase::Devices => "devices",
            Phase::Network => "network",
            Phase::Hosting => "hosting",
        }
    }
}

/// Yearly emissions of one phase (kg CO2e)
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionBreakdown {
    pub operational_kg: f64,
    pub embodied_kg: f64,
}

#[wasm_bindgen]
impl EmissionBreakdown {
    #[wasm_bindgen(constructor)]
    pub fn new(operational_kg: f64, embodied_kg: f64) -> EmissionBreakdown {
        EmissionBreakdown {
            operational_kg,
            embodied_kg,
        }
    }

    pub fn total(&self) -> f64 {
        self.operational_kg + self.embodied_kg
    }
}

impl EmissionBreakdown {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn operational(operational_kg: f64) -> Self {
        Self::new(operational_kg, 0.0)
    }
}

impl Add for EmissionBreakdown {
    type Output = EmissionBreakdown;

    fn add(self, rhs: EmissionBreakdown) -> EmissionBreakdown {
        EmissionBreakdown {
            operational_kg: self.operational_kg + rhs.operational_kg,
            embodied_kg: self.embodied_kg + rhs.embodied_kg,
        }
    }
}

/// Provider key + region name -> datacenter row. Any gap is a lookup miss.
pub(crate) fn resolve_datacenter<'a>(
    reference: &'a ReferenceData,
    provider_key: Option<&str>,
    region: Option<&str>,
) -> Option<&'a DatacenterRow> {
    let provider = provider_key.and_then(CloudProvider::from_key);
    let found = match (provider, region) {
        (Some(p), Some(r)) => reference.lookup_datacenter(p.label(), r),
        _ => None,
    };
    if found.is_none() {
        debug!(?provider_key, ?region, "datacenter not resolved");
    }
    found
}
