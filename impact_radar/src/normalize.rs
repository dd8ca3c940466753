//! Min-max normalization of the aggregated metrics.

use polars::prelude::*;

use crate::COL;

/// Rescales each metric column independently so that its minimum across
/// groups maps to 0 and its maximum to 1.
///
/// A column that is constant across all groups has zero range, and the IEEE
/// float division `0.0 / 0.0` comes out as NaN for every group. That NaN is
/// deliberately propagated rather than guarded; it serializes to `null` in
/// the chart data and renders as a gap.
pub fn min_max_scale(aggregated: DataFrame) -> PolarsResult<DataFrame> {
    let scaled: Vec<Expr> = COL::RADAR_METRICS
        .iter()
        .map(|metric| {
            let value = col(*metric);
            ((value.clone() - value.clone().min()) / (value.clone().max() - value.min()))
                .alias(*metric)
        })
        .collect();
    aggregated.lazy().with_columns(scaled).collect()
}

#[cfg(test)]
mod tests {
    use polars::df;

    use super::*;

    fn aggregated_df() -> DataFrame {
        df!(
            COL::DIET_GROUP => &["meat", "vegan"],
            COL::MEAN_GHGS => &[8.0, 2.0],
            COL::MEAN_LAND => &[5.0, 5.0],
            COL::MEAN_WATSCAR => &[410.0, 110.0],
            COL::MEAN_EUT => &[4.2, 1.1],
            COL::MEAN_GHGS_CH4 => &[1.6, 0.3],
            COL::MEAN_GHGS_N2O => &[0.7, 0.1],
            COL::MEAN_BIO => &[2.7, 0.6],
            COL::MEAN_WATUSE => &[190.0, 52.0],
            COL::MEAN_ACID => &[9.3, 3.1]
        )
        .unwrap()
    }

    #[test]
    fn test_two_groups_scale_to_unit_range() -> PolarsResult<()> {
        let scaled = min_max_scale(aggregated_df())?;
        let ghgs = scaled.column(COL::MEAN_GHGS)?.f64()?;
        assert_eq!(ghgs.get(0), Some(1.0));
        assert_eq!(ghgs.get(1), Some(0.0));
        Ok(())
    }

    #[test]
    fn test_column_extrema_after_scaling() -> PolarsResult<()> {
        let scaled = min_max_scale(aggregated_df())?;
        for metric in COL::RADAR_METRICS {
            // mean_land is the constant column, covered separately
            if metric == COL::MEAN_LAND {
                continue;
            }
            let column = scaled.column(metric)?.f64()?;
            assert_eq!(column.min(), Some(0.0), "min of {metric}");
            assert_eq!(column.max(), Some(1.0), "max of {metric}");
        }
        Ok(())
    }

    #[test]
    fn test_zero_range_column_yields_nan() -> PolarsResult<()> {
        let scaled = min_max_scale(aggregated_df())?;
        let land = scaled.column(COL::MEAN_LAND)?.f64()?;
        assert!(land.get(0).unwrap().is_nan());
        assert!(land.get(1).unwrap().is_nan());
        Ok(())
    }

    #[test]
    fn test_empty_frame_stays_empty() -> PolarsResult<()> {
        let scaled = min_max_scale(aggregated_df().head(Some(0)))?;
        assert_eq!(scaled.height(), 0);
        Ok(())
    }
}
