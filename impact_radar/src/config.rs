use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: "Results_21Mar2022.csv".into(),
            output_path: "environmental_impact_radar_v2_tight_biglegend.html".into(),
        }
    }
}
