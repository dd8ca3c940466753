use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info};
use polars::frame::DataFrame;

use crate::config::Config;

// Re-exports
pub use column_names as COL;

// Modules
pub mod aggregate;
pub mod chart;
pub mod column_names;
pub mod config;
pub mod csv;
pub mod error;
pub mod labels;
pub mod normalize;
pub mod reshape;

/// Type for the environmental-impact radar pipeline and API
pub struct ImpactRadar {
    pub config: Config,
}

impl ImpactRadar {
    /// Setup the pipeline with default configuration
    pub fn new() -> Self {
        Self::new_with_config(Config::default())
    }

    /// Setup the pipeline with custom configuration
    pub fn new_with_config(config: Config) -> Self {
        debug!("config: {config:?}");
        Self { config }
    }

    /// Per-diet-group means of the radar metrics for the configured input file
    pub fn aggregated(&self) -> Result<DataFrame> {
        let raw = csv::read_results(&self.config.input_path)?;
        Ok(aggregate::mean_by_group(raw)?)
    }

    /// The labelled long-format table backing the chart
    pub fn plot_data(&self) -> Result<DataFrame> {
        let aggregated = self.aggregated()?;
        let normalized = normalize::min_max_scale(aggregated)?;
        let long = reshape::to_long(&normalized)?;
        Ok(labels::apply_labels(long)?)
    }

    /// Runs the whole pipeline and writes the radar chart HTML artifact,
    /// overwriting any existing file at the output path
    pub fn run(&self) -> Result<PathBuf> {
        let plot_data = self.plot_data()?;
        debug!("plot data: {plot_data:?}");
        let html = chart::render_html(&plot_data)?;
        fs::write(&self.config.output_path, html).with_context(|| {
            format!(
                "Failed to write chart to {}",
                self.config.output_path.display()
            )
        })?;
        info!(
            "Wrote radar chart to {}",
            self.config.output_path.display()
        );
        Ok(self.config.output_path.clone())
    }
}

impl Default for ImpactRadar {
    fn default() -> Self {
        Self::new()
    }
}
