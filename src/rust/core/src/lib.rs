// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// AI Footprint: yearly CO2e of a generative-AI application, from model
// training through inference, end-user devices, network transfer, and hosting.
//

pub mod aggregate;
pub mod coefficients;
pub mod equivalence;
pub mod error;
pub mod footprint_kernel;
pub mod formulas;
pub mod input;
pub mod phases;
pub mod reference;
pub mod report;
#[cfg(test)]
pub mod tests_footprint;

// Re-export core types
pub use aggregate::{AggregateResult, Aggregator, Label, PerInference};
pub use coefficients::Coefficients;
pub use equivalence::{EquivalenceTranslator, Equivalences};
pub use error::{FootprintError, Result};
pub use footprint_kernel::{FootprintKernel, FootprintReport, ValidationEvent};
pub use input::{FootprintInput, NumericInput};
pub use phases::{EmissionBreakdown, Phase};
pub use reference::ReferenceData;
