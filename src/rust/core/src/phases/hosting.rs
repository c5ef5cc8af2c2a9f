// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// HostingEngine: page-view emissions plus the hosting server's manufacturing
// share. The resolved datacenter is reported for display only; the page-view
// factor already includes server power and grid mix.

use super::{resolve_datacenter, EmissionBreakdown};
use crate::coefficients::Coefficients;
use crate::formulas;
use crate::input::{HostingInput, HostingType};
use crate::reference::{DatacenterRow, ReferenceData};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostingResult {
    pub breakdown: EmissionBreakdown,
    pub visits: f64,
    pub datacenter: Option<DatacenterRow>,
}

pub struct HostingEngine;

impl HostingEngine {
    pub fn compute(
        input: &HostingInput,
        reference: &ReferenceData,
        coefficients: &Coefficients,
    ) -> HostingResult {
        let visits = input.annual_visits.value();
        let is_cloud = input.hosting_type == Some(HostingType::Cloud);

        // Counted from the visit figure whether or not the app is marked online
        let operational_kg = formulas::hosting_operational_kg(visits, coefficients.hosting_g_per_page_view);

        let embodied_kg = if input.is_online && is_cloud {
            formulas::hosting_embodied_kg(
                visits,
                coefficients.hosting_server_embodied_g,
                coefficients.hosting_lifetime_years,
                coefficients.hosting_utilization,
            )
        } else {
            0.0
        };

        let datacenter = if is_cloud {
            resolve_datacenter(reference, input.cloud_provider.as_deref(), input.region.as_deref())
        } else {
            None
        };

        HostingResult {
            breakdown: EmissionBreakdown::new(operational_kg, embodied_kg),
            visits,
            datacenter: datacenter.cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::NumericInput;

    fn online_cloud(visits: f64) -> HostingInput {
        HostingInput {
            is_online: true,
            annual_visits: NumericInput::Valid(visits),
            hosting_type: Some(HostingType::Cloud),
            cloud_provider: Some("gcp".to_string()),
            region: Some("europe-west4 (Eemshaven)".to_string()),
            ..Default::default()
        }
    }

    fn compute(input: &HostingInput) -> HostingResult {
        let reference = ReferenceData::builtin().unwrap();
        HostingEngine::compute(input, &reference, &Coefficients::default())
    }

    #[test]
    fn test_datacenter_does_not_scale_operational() {
        let with_region = compute(&online_cloud(100_000.0));
        let mut no_region_input = online_cloud(100_000.0);
        no_region_input.region = None;
        let without_region = compute(&no_region_input);

        assert!(with_region.datacenter.is_some());
        assert!(without_region.datacenter.is_none());
        assert_eq!(with_region.breakdown, without_region.breakdown);
    }

    #[test]
    fn test_local_hosting_has_no_embodied() {
        let input = HostingInput {
            is_online: true,
            annual_visits: NumericInput::Valid(50_000.0),
            hosting_type: Some(HostingType::Local),
            server_location: Some("Den Haag".to_string()),
            server_energy: NumericInput::Valid(8760.0),
            ..Default::default()
        };
        let result = compute(&input);
        assert!((result.breakdown.operational_kg - 40.0).abs() < 1e-9);
        assert_eq!(result.breakdown.embodied_kg, 0.0);
        assert!(result.datacenter.is_none());
    }

    #[test]
    fn test_offline_counts_visits_but_no_embodied() {
        let mut input = online_cloud(10_000.0);
        input.is_online = false;
        let result = compute(&input);
        assert!((result.breakdown.operational_kg - 8.0).abs() < 1e-9);
        assert_eq!(result.breakdown.embodied_kg, 0.0);
    }

    #[test]
    fn test_online_cloud_zero_visits_is_zero() {
        let result = compute(&online_cloud(0.0));
        assert_eq!(result.breakdown, EmissionBreakdown::zero());
    }

    #[test]
    fn test_green_check_is_ignored() {
        use crate::report::GreenCheck;
        let plain = online_cloud(1_000.0);
        let mut green = plain.clone();
        green.green_check = Some(GreenCheck {
            green: true,
            hosted_by: "Example Host".to_string(),
        });
        assert_eq!(compute(&plain).breakdown, compute(&green).breakdown);
    }
}
