use comfy_table::{presets::NOTHING, *};
use itertools::izip;

use impact_radar::COL;
use polars::frame::DataFrame;

pub fn display_plot_data(plot_data: &DataFrame) -> anyhow::Result<()> {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Diet Group").add_attribute(Attribute::Bold),
            Cell::new("Indicator").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ])
        .set_style(comfy_table::TableComponent::BottomBorder, '─')
        .set_style(comfy_table::TableComponent::MiddleHeaderIntersections, '─')
        .set_style(comfy_table::TableComponent::HeaderLines, '─')
        .set_style(comfy_table::TableComponent::BottomBorderIntersections, '─')
        .set_style(comfy_table::TableComponent::TopBorder, '─')
        .set_style(comfy_table::TableComponent::TopBorderIntersections, '─');
    for (diet_group, indicator, value) in izip!(
        plot_data.column(COL::DIET_GROUP)?.str()?,
        plot_data.column(COL::INDICATOR)?.str()?,
        plot_data.column(COL::VALUE)?.f64()?,
    ) {
        table.add_row(vec![
            diet_group.unwrap_or_default().to_string(),
            indicator.unwrap_or_default().to_string(),
            value.map(|v| format!("{v:.3}")).unwrap_or_default(),
        ]);
    }
    println!("\n{}", table);
    Ok(())
}
