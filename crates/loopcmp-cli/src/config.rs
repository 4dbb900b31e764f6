use crate::cli::{ComparisonArgs, ScorerArgs};
use crate::error::{CliError, Result};
use loopcmp::core::models::protein::LoopIndex;
use loopcmp::core::properties::scoring::ScoringWeights;
use loopcmp::engine::aggregate::Frame;
use loopcmp::engine::config::{ComparisonConfig, ComparisonConfigBuilder, ShiftTarget};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct PartialWeights {
    misc: Option<f64>,
    hydrophobicity: Option<f64>,
    size: Option<f64>,
}

impl PartialWeights {
    fn over(self, base: ScoringWeights) -> ScoringWeights {
        ScoringWeights {
            misc: self.misc.unwrap_or(base.misc),
            hydrophobicity: self.hydrophobicity.unwrap_or(base.hydrophobicity),
            size: self.size.unwrap_or(base.size),
        }
    }
}

/// The comparison settings as written in a TOML config file. Every key is optional.
///
/// ```toml
/// loops = [1, 2]
/// proteins-of-interest = ["prot_a"]
/// max-shift = 3
/// collapse = true
/// shift-target = "both"
/// # frame = "1:second:3"  (needs max-shift = 0)
///
/// [weights]
/// misc = 1.8
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialComparisonConfig {
    loops: Option<Vec<usize>>,
    proteins_of_interest: Option<Vec<String>>,
    max_shift: Option<isize>,
    collapse: Option<bool>,
    shift_target: Option<String>,
    frame: Option<String>,
    weights: Option<PartialWeights>,
}

/// Fully resolved settings for one comparison command.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub comparison: ComparisonConfig,
    pub weights: ScoringWeights,
}

impl PartialComparisonConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file named by `--config`, or starts empty.
    pub fn for_args(args: &ComparisonArgs) -> Result<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves the final settings. Precedence, highest first: `--set`, dedicated flags,
    /// the config file, built-in defaults.
    pub fn merge_with_cli(mut self, args: &ComparisonArgs) -> Result<AppConfig> {
        if !args.loops.is_empty() {
            self.loops = Some(args.loops.clone());
        }
        if !args.proteins.is_empty() {
            self.proteins_of_interest = Some(args.proteins.clone());
        }
        self.max_shift = args.max_shift.or(self.max_shift);
        self.shift_target = args.shift_target.clone().or(self.shift_target);
        self.frame = args.frame.clone().or(self.frame);
        if args.no_collapse {
            self.collapse = Some(false);
        }
        self.apply_set_values(&args.set_values)?;

        let mut builder = ComparisonConfigBuilder::new();
        if let Some(loops) = self.loops {
            builder = builder.loops(parse_loops(&loops)?);
        }
        if let Some(ids) = self.proteins_of_interest {
            builder = builder.proteins_of_interest(ids);
        }
        if let Some(max_shift) = self.max_shift {
            builder = builder.max_shift(max_shift);
        }
        if let Some(collapse) = self.collapse {
            builder = builder.collapse(collapse);
        }
        if let Some(target) = self.shift_target {
            builder = builder.shift_target(
                ShiftTarget::from_str(&target).map_err(|e| CliError::Config(e.to_string()))?,
            );
        }
        if let Some(frame) = self.frame {
            builder = builder.frame(
                Frame::from_str(&frame).map_err(|e| CliError::Config(e.to_string()))?,
            );
        }
        let comparison = builder.build().map_err(|e| CliError::Config(e.to_string()))?;

        let base = load_weights(&args.scorer)?;
        let weights = self.weights.unwrap_or_default().over(base);
        weights.validate()?;

        Ok(AppConfig {
            comparison,
            weights,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let (key, value_str) = (key.trim(), value_str.trim());

            match key {
                "loops" => {
                    self.loops = Some(
                        value_str
                            .split(',')
                            .map(|v| parse_value(key, v.trim(), "integer"))
                            .collect::<Result<_>>()?,
                    );
                }
                "proteins-of-interest" => {
                    self.proteins_of_interest =
                        Some(value_str.split(',').map(|v| v.trim().to_string()).collect());
                }
                "max-shift" => self.max_shift = Some(parse_value(key, value_str, "integer")?),
                "collapse" => self.collapse = Some(parse_value(key, value_str, "boolean")?),
                "shift-target" => self.shift_target = Some(value_str.to_string()),
                "frame" => self.frame = Some(value_str.to_string()),
                "weights.misc" => {
                    self.weights.get_or_insert_with(Default::default).misc =
                        Some(parse_value(key, value_str, "float")?);
                }
                "weights.hydrophobicity" => {
                    self.weights.get_or_insert_with(Default::default).hydrophobicity =
                        Some(parse_value(key, value_str, "float")?);
                }
                "weights.size" => {
                    self.weights.get_or_insert_with(Default::default).size =
                        Some(parse_value(key, value_str, "float")?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

pub fn parse_loops(loops: &[usize]) -> Result<Vec<LoopIndex>> {
    loops
        .iter()
        .map(|&n| LoopIndex::new(n).map_err(|e| CliError::Argument(e.to_string())))
        .collect()
}

/// Weights from `--weights`, or the built-in defaults.
pub fn load_weights(args: &ScorerArgs) -> Result<ScoringWeights> {
    match &args.weights {
        Some(path) => {
            debug!("Loading scoring weights from file: {:?}", path);
            Ok(ScoringWeights::load(path)?)
        }
        None => Ok(ScoringWeights::default()),
    }
}
