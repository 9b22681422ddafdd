//! Command-line arguments.
//!
//! ```text
//! citysim [small | large | <config.json>] [--headless <frames>]
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use cs_core::SimConfig;

/// Where the configuration comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    Small,
    Large,
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Args {
    pub config: ConfigSource,

    /// Run this many frames without a window, then exit.
    pub headless: Option<u64>,
}

impl Args {
    /// Parse everything after the program name.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config   = None;
        let mut headless = None;
        let mut args     = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--headless" => {
                    let n = args.next().context("--headless needs a frame count")?;
                    let frames = n
                        .parse::<u64>()
                        .with_context(|| format!("invalid frame count {n:?}"))?;
                    headless = Some(frames);
                }
                flag if flag.starts_with("--") => bail!("unknown option {flag:?}"),
                _ if config.is_some() => bail!("unexpected argument {arg:?}"),
                "small" => config = Some(ConfigSource::Small),
                "large" => config = Some(ConfigSource::Large),
                _ => config = Some(ConfigSource::File(PathBuf::from(&arg))),
            }
        }

        Ok(Self { config: config.unwrap_or(ConfigSource::Small), headless })
    }
}

impl ConfigSource {
    /// Resolve to a validated [`SimConfig`].
    pub fn load(&self) -> Result<SimConfig> {
        let config = match self {
            ConfigSource::Small => SimConfig::small(),
            ConfigSource::Large => SimConfig::large(),
            ConfigSource::File(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                parse_config(&text).with_context(|| format!("parsing {}", path.display()))?
            }
        };
        config.validate()?;
        Ok(config)
    }
}

/// Parse a JSON config.  Missing fields take the `small` preset's values.
pub fn parse_config(json: &str) -> Result<SimConfig> {
    Ok(serde_json::from_str(json)?)
}
