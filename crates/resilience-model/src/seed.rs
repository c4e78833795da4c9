// SPDX-License-Identifier: Apache-2.0

use crate::catalog::CatalogKind;
use crate::record::Record;

/// Precedent id 0 is a UI affordance for the filter builder, not domain data.
pub const PRECEDENT_FILTER_SENTINEL_ID: i64 = 0;

const TASKS: [(i64, &str, &str); 3] = [
    (
        1,
        "Risk Identification",
        "Identify potential risks in the project.",
    ),
    (
        2,
        "Risk Assessment",
        "Evaluate the probability and impact of risks.",
    ),
    (
        3,
        "Strategy Formulation",
        "Develop strategies to mitigate identified risks.",
    ),
];

const RESOURCES: [(i64, &str, &str); 3] = [
    (1, "Flood Risk Data", "Data and analysis on flood risks."),
    (
        2,
        "Earthquake Safety Guidelines",
        "Guidelines for building earthquake resilient structures.",
    ),
    (
        3,
        "Climate Change Impact Report",
        "Report on climate change impacts in coastal areas.",
    ),
];

const PRECEDENTS: [(i64, &str, &str); 5] = [
    (
        PRECEDENT_FILTER_SENTINEL_ID,
        "Build your own search filter",
        "Drag these filter field to your workflow",
    ),
    (1, "By Project Type", "Healthcare"),
    (
        2,
        "By Project Stage",
        "RFP/Pursuit, Conceptual Design, Design Development",
    ),
    (3, "By Project Hazard", "Earthquake, Flood, Wildfire"),
    (
        4,
        "By Project Geolocation",
        "Pacific North West, South East",
    ),
];

/// Hardcoded records for `kind`, in definition order.
#[must_use]
pub fn builtin_records(kind: CatalogKind) -> Vec<Record> {
    let rows: &[(i64, &str, &str)] = match kind {
        CatalogKind::Tasks => &TASKS,
        CatalogKind::Resources => &RESOURCES,
        CatalogKind::Precedents => &PRECEDENTS,
    };
    rows.iter()
        .map(|&(id, title, description)| Record::new(id, title, description))
        .collect()
}
