//! Display names for the radar indicators.

use polars::prelude::*;

use crate::COL;

/// Static mapping from metric column name to the display string shown on the
/// chart axes and legend tooltips.
pub const INDICATOR_LABELS: [(&str, &str); 9] = [
    (COL::MEAN_GHGS, "Greenhouse Gas Emissions"),
    (COL::MEAN_LAND, "Land Use"),
    (COL::MEAN_WATSCAR, "Water Scarcity"),
    (COL::MEAN_EUT, "Eutrophication Potential"),
    (COL::MEAN_GHGS_CH4, "Methane Emissions"),
    (COL::MEAN_GHGS_N2O, "Nitrous Oxide Emissions"),
    (COL::MEAN_BIO, "Biodiversity Impact"),
    (COL::MEAN_WATUSE, "Agricultural Water Use"),
    (COL::MEAN_ACID, "Acidification Potential"),
];

/// Looks up the display name for a metric column.
pub fn display_name(metric: &str) -> Option<&'static str> {
    INDICATOR_LABELS
        .iter()
        .find(|(id, _)| *id == metric)
        .map(|(_, label)| *label)
}

/// Replaces metric identifiers in the indicator column with display names.
/// An identifier without a mapping becomes null rather than an error.
pub fn apply_labels(mut long: DataFrame) -> PolarsResult<DataFrame> {
    let relabelled: StringChunked = long
        .column(COL::INDICATOR)?
        .str()?
        .into_iter()
        .map(|metric| metric.and_then(display_name))
        .collect();
    long.replace(COL::INDICATOR, relabelled.into_series().with_name(COL::INDICATOR))?;
    Ok(long)
}
