// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Cloud providers offered by the form layer.
///
/// The form stores a short key ("azure"); the datacenter table stores the
/// company label ("Microsoft").
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CloudProvider {
    Azure = 0,
    Gcp = 1,
    Aws = 2,
    Ibm = 3,
    IronMountain = 4,
    Meta = 5,
    Oracle = 6,
    Sap = 7,
    Equinix = 8,
    DigitalRealty = 9,
}

impl CloudProvider {
    pub const ALL: [CloudProvider; 10] = [
        CloudProvider::Azure,
        CloudProvider::Gcp,
        CloudProvider::Aws,
        CloudProvider::Ibm,
        CloudProvider::IronMountain,
        CloudProvider::Meta,
        CloudProvider::Oracle,
        CloudProvider::Sap,
        CloudProvider::Equinix,
        CloudProvider::DigitalRealty,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "azure" => Some(CloudProvider::Azure),
            "gcp" => Some(CloudProvider::Gcp),
            "aws" => Some(CloudProvider::Aws),
            "ibm" => Some(CloudProvider::Ibm),
            "irm" => Some(CloudProvider::IronMountain),
            "meta" => Some(CloudProvider::Meta),
            "oracle" => Some(CloudProvider::Oracle),
            "sap" => Some(CloudProvider::Sap),
            "equ" => Some(CloudProvider::Equinix),
            "dgr" => Some(CloudProvider::DigitalRealty),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            CloudProvider::Azure => "azure",
            CloudProvider::Gcp => "gcp",
            CloudProvider::Aws => "aws",
            CloudProvider::Ibm => "ibm",
            CloudProvider::IronMountain => "irm",
            CloudProvider::Meta => "meta",
            CloudProvider::Oracle => "oracle",
            CloudProvider::Sap => "sap",
            CloudProvider::Equinix => "equ",
            CloudProvider::DigitalRealty => "dgr",
        }
    }

    /// Company name as it appears in the datacenter table
    pub fn label(self) -> &'static str {
        match self {
            CloudProvider::Azure => "Microsoft",
            CloudProvider::Gcp => "Google",
            CloudProvider::Aws => "AWS",
            CloudProvider::Ibm => "IBM",
            CloudProvider::IronMountain => "Iron Mountain",
            CloudProvider::Meta => "Meta",
            CloudProvider::Oracle => "Oracle",
            CloudProvider::Sap => "SAP",
            CloudProvider::Equinix => "Equinix",
            CloudProvider::DigitalRealty => "Digital Realty",
        }
    }
}
