//! Per-group aggregation of the radar metric columns.

use polars::prelude::*;

use crate::COL;

/// Computes the arithmetic mean of every radar metric column per diet group.
///
/// Entries that are absent or fail to parse as numeric are excluded from the
/// mean. Output rows are sorted by diet group so that repeated runs over the
/// same input produce identical frames.
pub fn mean_by_group(raw: DataFrame) -> PolarsResult<DataFrame> {
    let means: Vec<Expr> = COL::RADAR_METRICS
        .iter()
        .map(|metric| col(*metric).cast(DataType::Float64).mean())
        .collect();
    raw.lazy()
        .group_by([col(COL::DIET_GROUP)])
        .agg(means)
        .sort([COL::DIET_GROUP], SortMultipleOptions::default())
        .collect()
}
