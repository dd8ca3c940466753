use std::fs::File;
use std::path::{Path, PathBuf};

use clap::{command, Args, Parser, Subcommand};
use enum_dispatch::enum_dispatch;
use impact_radar::{config::Config, ImpactRadar};
use log::info;
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use crate::display::display_plot_data;
use crate::error::ImpactRadarCliResult;

/// Defines the output formats the `data` command is able to produce.
#[derive(Clone, Debug, Deserialize, Serialize, EnumString, PartialEq, Eq)]
#[strum(ascii_case_insensitive)]
pub enum OutputFormat {
    Csv,
    Stdout,
}

fn write_csv<U>(mut data: DataFrame, output_file: Option<U>) -> ImpactRadarCliResult<()>
where
    U: AsRef<Path>,
{
    if let Some(output_file) = output_file {
        let mut f = File::create(output_file)?;
        CsvWriter::new(&mut f).finish(&mut data)?;
    } else {
        let mut stdout_lock = std::io::stdout().lock();
        CsvWriter::new(&mut stdout_lock).finish(&mut data)?;
    };
    Ok(())
}

/// Applies the path overrides a subcommand may carry on top of the config.
fn override_paths(
    mut config: Config,
    input_file: Option<&PathBuf>,
    output_file: Option<&PathBuf>,
) -> Config {
    if let Some(input_file) = input_file {
        config.input_path = input_file.clone();
    }
    if let Some(output_file) = output_file {
        config.output_path = output_file.clone();
    }
    config
}

/// Trait that defines what to run when a given subcommand is invoked.
#[enum_dispatch]
pub trait RunCommand {
    fn run(&self, config: Config) -> ImpactRadarCliResult<()>;
}

/// The `render` command runs the full pipeline and writes the radar chart
/// HTML artifact.
#[derive(Args, Debug, Default)]
pub struct RenderCommand {
    #[arg(
        short = 'i',
        long,
        help = "Input results CSV, defaults to the configured path"
    )]
    input_file: Option<PathBuf>,
    #[arg(
        short = 'o',
        long,
        help = "Output HTML file, defaults to the configured path"
    )]
    output_file: Option<PathBuf>,
}

impl RunCommand for RenderCommand {
    fn run(&self, config: Config) -> ImpactRadarCliResult<()> {
        let config = override_paths(config, self.input_file.as_ref(), self.output_file.as_ref());
        let written = ImpactRadar::new_with_config(config).run()?;
        info!("Radar chart written to {}", written.display());
        Ok(())
    }
}

/// The `data` command outputs the labelled, normalized long-format table
/// backing the chart, as a table on stdout or as CSV.
#[derive(Args, Debug)]
pub struct DataCommand {
    #[arg(
        short = 'i',
        long,
        help = "Input results CSV, defaults to the configured path"
    )]
    input_file: Option<PathBuf>,
    #[arg(
        short = 'f',
        long,
        value_name = "csv|stdout",
        default_value = "stdout",
        help = "Output format for the plot data"
    )]
    output_format: OutputFormat,
    #[arg(short = 'o', long, help = "Output file to place the results")]
    output_file: Option<PathBuf>,
}

impl RunCommand for DataCommand {
    fn run(&self, config: Config) -> ImpactRadarCliResult<()> {
        let config = override_paths(config, self.input_file.as_ref(), None);
        let plot_data = ImpactRadar::new_with_config(config).plot_data()?;
        match self.output_format {
            OutputFormat::Csv => write_csv(plot_data, self.output_file.as_deref())?,
            OutputFormat::Stdout => display_plot_data(&plot_data)?,
        }
        Ok(())
    }
}

/// The entrypoint for the CLI.
#[derive(Parser, Debug)]
#[command(version, about="Render an environmental-impact radar chart by diet group", long_about = None, name="impact-radar")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Commands contains the list of subcommands avaliable for use in the CLI.
/// Each command should implmement the RunCommand trait and specify the list
/// of required args for that command.
#[derive(Subcommand, Debug)]
#[enum_dispatch(RunCommand)]
pub enum Commands {
    /// Render the radar chart HTML artifact
    Render(RenderCommand),
    /// Output the normalized plot data backing the chart
    Data(DataCommand),
}
