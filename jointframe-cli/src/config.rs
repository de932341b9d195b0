use std::path::{Path, PathBuf};

use jointframe_core::JointSpec;
use jointframe_plot::PlotOptions;

/// Load a configuration from a TOML file.
pub(crate) fn from_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    use anyhow::Context;

    let path = path.as_ref();

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("failed to parse configuration {}", path.display()))
}

#[derive(Clone, Debug, serde_derive::Deserialize, PartialEq)]
#[serde(default)]
pub struct PlotConfig {
    /// SVG output file.
    pub output: PathBuf,
    /// Figure title.
    pub title: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// View rotation about the vertical axis in degrees.
    pub yaw: f64,
    /// View elevation in degrees.
    pub pitch: f64,
}

impl PlotConfig {
    pub fn options(&self) -> PlotOptions {
        PlotOptions {
            title: self.title.clone(),
            width: self.width,
            height: self.height,
            yaw: self.yaw.to_radians(),
            pitch: self.pitch.to_radians(),
            ..Default::default()
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        let options = PlotOptions::default();

        Self {
            output: PathBuf::from("orientation.svg"),
            title: options.title,
            width: options.width,
            height: options.height,
            yaw: options.yaw.to_degrees(),
            pitch: options.pitch.to_degrees(),
        }
    }
}

#[derive(Clone, Debug, serde_derive::Deserialize, PartialEq)]
pub struct Config {
    /// Joints from the base outwards.
    #[serde(rename = "joint", default = "default_joints")]
    pub joints: Vec<JointSpec>,
    /// Plot configuration.
    #[serde(default)]
    pub plot: PlotConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            joints: default_joints(),
            plot: PlotConfig::default(),
        }
    }
}

/// Five joint arm used when nothing else is configured.
fn default_joints() -> Vec<JointSpec> {
    vec![
        JointSpec::new("z", Some(10.0)).with_name("R_01"),
        JointSpec::new("y", Some(20.0)).with_name("R_12"),
        JointSpec::new("y", Some(30.0)).with_name("R_23"),
        JointSpec::new("y", Some(40.0)).with_name("R_34"),
        JointSpec::new("z", Some(50.0)).with_name("R_45"),
    ]
}
