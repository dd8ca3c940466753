//! This module stores the column names used across the pipeline's dataframes.
//! Note that the grouping and metric names must be synchronised with the
//! column headers of the survey results CSV!

pub const DIET_GROUP: &str = "diet_group";

pub const MEAN_GHGS: &str = "mean_ghgs";
pub const MEAN_LAND: &str = "mean_land";
pub const MEAN_WATSCAR: &str = "mean_watscar";
pub const MEAN_EUT: &str = "mean_eut";
pub const MEAN_GHGS_CH4: &str = "mean_ghgs_ch4";
pub const MEAN_GHGS_N2O: &str = "mean_ghgs_n2o";
pub const MEAN_BIO: &str = "mean_bio";
pub const MEAN_WATUSE: &str = "mean_watuse";
pub const MEAN_ACID: &str = "mean_acid";

pub const INDICATOR: &str = "indicator";
pub const VALUE: &str = "value";

/// The metric columns plotted on the radar, in axis order.
pub const RADAR_METRICS: [&str; 9] = [
    MEAN_GHGS,
    MEAN_LAND,
    MEAN_WATSCAR,
    MEAN_EUT,
    MEAN_GHGS_CH4,
    MEAN_GHGS_N2O,
    MEAN_BIO,
    MEAN_WATUSE,
    MEAN_ACID,
];
