//! Radar chart construction and HTML rendering.

use anyhow::Result;
use charming::{
    component::{Legend, RadarCoordinate, RadarIndicator, Title},
    datatype::DataPointItem,
    element::{AreaStyle, TextStyle},
    series::Radar,
    theme::Theme,
    Chart, EchartsError, HtmlRenderer,
};
use itertools::Itertools;
use polars::prelude::DataFrame;

use crate::error::ImpactRadarError;
use crate::COL;

pub const CHART_TITLE: &str = "Environmental Impact by Diet Group";

/// Builds the radar chart from the labelled long-format plot data: one closed
/// polygon per diet group with a translucent fill, one axis per indicator,
/// radial range fixed to [0, 1] to match the normalization.
///
/// The legend background is left at the ECharts default, which is already
/// transparent. Outer spacing also rides on the ECharts defaults: the radar
/// coordinate system has no margin control, only center/radius placement.
pub fn radar_chart(plot_data: &DataFrame) -> Result<Chart> {
    let groups = plot_data.column(COL::DIET_GROUP)?.str()?;
    let indicators = plot_data.column(COL::INDICATOR)?.str()?;
    let values = plot_data.column(COL::VALUE)?.f64()?;

    // Axis order is first-appearance order of the display labels.
    let axes = indicators
        .into_iter()
        .flatten()
        .unique()
        .map(|label| RadarIndicator::new().name(label).min(0.0).max(1.0))
        .collect_vec();

    // One polygon per diet group. The long table is indicator-major, so
    // pushing values in row order collects each group's values in axis order.
    let mut polygons: Vec<(String, Vec<f64>)> = Vec::new();
    for (group, value) in groups.into_iter().zip(values) {
        let group = group.unwrap_or_default();
        let value = value.unwrap_or(f64::NAN);
        match polygons.iter_mut().find(|(name, _)| name == group) {
            Some((_, values)) => values.push(value),
            None => polygons.push((group.to_string(), vec![value])),
        }
    }

    let legend_entries = polygons.iter().map(|(name, _)| name.clone()).collect_vec();
    let data = polygons
        .into_iter()
        .map(|(name, values)| DataPointItem::new(values).name(name))
        .collect_vec();

    Ok(Chart::new()
        .title(Title::new().text(CHART_TITLE).left("center"))
        .legend(
            Legend::new()
                .data(legend_entries)
                .top("10%")
                .right("5%")
                .text_style(TextStyle::new().font_size(18)),
        )
        .radar(RadarCoordinate::new().indicator(axes))
        .series(
            Radar::new()
                .name(CHART_TITLE)
                .area_style(AreaStyle::new().opacity(0.4))
                .data(data),
        ))
}

/// Renders the chart to a self-contained HTML document with the dark theme.
/// Rendering is deterministic for identical plot data.
pub fn render_html(plot_data: &DataFrame) -> Result<String> {
    let chart = radar_chart(plot_data)?;
    let renderer = HtmlRenderer::new(CHART_TITLE, 1000, 800).theme(Theme::Dark);
    let html = renderer.render(&chart).map_err(render_error)?;
    Ok(html)
}

// EchartsError implements neither Display nor std::error::Error, so it is
// formatted into our own error variant here.
fn render_error(e: EchartsError) -> ImpactRadarError {
    ImpactRadarError::RenderError(format!("{e:?}"))
}
