//! Front-end settings and their command-line form.

use std::fmt;
use std::time::Duration;

/// Settings for a visualizer session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Grid side length.
    pub size: usize,
    /// Pause after each animation frame.
    pub delay: Duration,
    /// Capture mouse clicks.
    pub mouse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 50,
            delay: Duration::from_millis(5),
            mouse: true,
        }
    }
}

impl Config {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse = enabled;
        self
    }

    /// Parse `--size N`, `--delay-ms N` and `--no-mouse`. The program name
    /// must already be stripped.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cfg = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--size" => {
                    let n: usize = parse_value(&arg, args.next())?;
                    if n == 0 {
                        return Err(ConfigError::InvalidValue {
                            flag: arg,
                            value: n.to_string(),
                        });
                    }
                    cfg.size = n;
                }
                "--delay-ms" => {
                    let ms: u64 = parse_value(&arg, args.next())?;
                    cfg.delay = Duration::from_millis(ms);
                }
                "--no-mouse" => cfg.mouse = false,
                _ => return Err(ConfigError::UnknownFlag(arg)),
            }
        }
        Ok(cfg)
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value,
    })
}

/// Errors from [`Config::from_args`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownFlag(String),
    MissingValue(String),
    InvalidValue { flag: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFlag(s) => write!(f, "unknown flag {s}"),
            Self::MissingValue(s) => write!(f, "{s} needs a value"),
            Self::InvalidValue { flag, value } => write!(f, "invalid value {value:?} for {flag}"),
        }
    }
}

impl std::error::Error for ConfigError {}
