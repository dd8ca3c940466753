//! Error types.

#[derive(thiserror::Error, Debug)]
pub enum ImpactRadarError {
    #[error("Wrapped anyhow error: {0}")]
    AnyhowError(#[from] anyhow::Error),
    #[error("Wrapped polars error: {0}")]
    PolarsError(#[from] polars::error::PolarsError),
    // charming's EchartsError does not implement std::error::Error, so the
    // renderer formats it into the message instead of wrapping it
    #[error("Chart rendering failed: {0}")]
    RenderError(String),
    #[error("Wrapped IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn test_anyhow() {
        let anyhow_error = anyhow!("An anyhow error");
        let impact_radar_error: ImpactRadarError = anyhow_error.into();
        println!("{}", impact_radar_error);
    }

    #[test]
    fn test_render_error_message() {
        let render_error = ImpactRadarError::RenderError("template failure".to_string());
        assert_eq!(
            render_error.to_string(),
            "Chart rendering failed: template failure"
        );
    }
}
