use crate::output::OutputFormat;
use math_lib::matrix::DivisionMode;
use serde::Deserialize;
use std::path::Path;

/// The prefix of the environment variables that override the configuration.
pub const ENV_PREFIX: &str = "SHARE_RECONSTRUCTOR";

/// The main config type.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// The solver configuration.
    #[serde(default)]
    pub solver: SolverConfig,

    /// The output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Loads the config from an optional YAML file.
    ///
    /// Any property can be overridden through environment variables, e.g. `solver.division` is set with
    /// `SHARE_RECONSTRUCTOR__SOLVER__DIVISION=exact`.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).format(config::FileFormat::Yaml));
        }
        builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"));
        builder.build()?.try_deserialize()
    }
}

/// The solver configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SolverConfig {
    /// What to do when back substitution can't divide exactly.
    #[serde(default)]
    pub division: DivisionMode,
}

/// The output configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// How secrets are printed.
    #[serde(default)]
    pub format: OutputFormat,
}
