use impact_radar::error::ImpactRadarError;
use polars::error::PolarsError;

#[derive(thiserror::Error, Debug)]
pub enum ImpactRadarCliError {
    #[error("Anyhow error")]
    Anyhow(#[from] anyhow::Error),
    #[error("polars error")]
    PolarsError(#[from] PolarsError),
    #[error("impact radar error")]
    ImpactRadarError(#[from] ImpactRadarError),
    #[error("std IO error")]
    IOError(#[from] std::io::Error),
}

pub type ImpactRadarCliResult<T> = Result<T, ImpactRadarCliError>;
