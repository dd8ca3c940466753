//! Wide-to-long reshaping of the per-group metric table.

use polars::prelude::*;

use crate::COL;

/// Unpivots the wide per-group table into (diet group, indicator, value)
/// triples, suitable for a multi-series polar plot.
///
/// Rows come out indicator-major: all groups for the first metric, then all
/// groups for the second, and so on. Row count is groups x metrics.
pub fn to_long(wide: &DataFrame) -> PolarsResult<DataFrame> {
    let groups = wide.column(COL::DIET_GROUP)?.str()?;
    let capacity = wide.height() * COL::RADAR_METRICS.len();

    let mut group_values: Vec<Option<String>> = Vec::with_capacity(capacity);
    let mut indicator_values: Vec<&str> = Vec::with_capacity(capacity);
    let mut values: Vec<Option<f64>> = Vec::with_capacity(capacity);

    for metric in COL::RADAR_METRICS {
        let column = wide.column(metric)?.f64()?;
        for (group, value) in groups.into_iter().zip(column) {
            group_values.push(group.map(ToString::to_string));
            indicator_values.push(metric);
            values.push(value);
        }
    }

    df!(
        COL::DIET_GROUP => group_values,
        COL::INDICATOR => indicator_values,
        COL::VALUE => values
    )
}

#[cfg(test)]
mod tests {
    use polars::df;

    use super::*;

    fn wide_df() -> DataFrame {
        df!(
            COL::DIET_GROUP => &["meat", "vegan"],
            COL::MEAN_GHGS => &[1.0, 0.0],
            COL::MEAN_LAND => &[1.0, 0.0],
            COL::MEAN_WATSCAR => &[1.0, 0.0],
            COL::MEAN_EUT => &[1.0, 0.0],
            COL::MEAN_GHGS_CH4 => &[1.0, 0.0],
            COL::MEAN_GHGS_N2O => &[1.0, 0.0],
            COL::MEAN_BIO => &[1.0, 0.0],
            COL::MEAN_WATUSE => &[1.0, 0.0],
            COL::MEAN_ACID => &[0.25, 0.75]
        )
        .unwrap()
    }

    #[test]
    fn test_row_count_is_groups_times_metrics() -> PolarsResult<()> {
        let long = to_long(&wide_df())?;
        assert_eq!(long.height(), 2 * COL::RADAR_METRICS.len());
        assert_eq!(
            long.get_column_names(),
            vec![COL::DIET_GROUP, COL::INDICATOR, COL::VALUE]
        );
        Ok(())
    }

    #[test]
    fn test_indicator_major_order() -> PolarsResult<()> {
        let long = to_long(&wide_df())?;
        let indicators = long.column(COL::INDICATOR)?.str()?;
        assert_eq!(indicators.get(0), Some(COL::MEAN_GHGS));
        assert_eq!(indicators.get(1), Some(COL::MEAN_GHGS));
        assert_eq!(indicators.get(2), Some(COL::MEAN_LAND));
        let groups = long.column(COL::DIET_GROUP)?.str()?;
        assert_eq!(groups.get(0), Some("meat"));
        assert_eq!(groups.get(1), Some("vegan"));
        Ok(())
    }

    #[test]
    fn test_values_follow_their_group() -> PolarsResult<()> {
        let long = to_long(&wide_df())?;
        let values = long.column(COL::VALUE)?.f64()?;
        // Last metric (mean_acid) holds the distinctive values
        assert_eq!(values.get(16), Some(0.25));
        assert_eq!(values.get(17), Some(0.75));
        Ok(())
    }

    #[test]
    fn test_empty_wide_frame() -> PolarsResult<()> {
        let long = to_long(&wide_df().head(Some(0)))?;
        assert_eq!(long.height(), 0);
        Ok(())
    }
}
