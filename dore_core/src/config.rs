use std::fmt;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::DoreError;
use crate::DoreResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["dore.toml", ".dore.toml", ".config/dore.toml"];

/// The line that ends interactive template entry when nothing else is
/// configured.
pub const DEFAULT_END_TOKEN: &str = "EOF";

/// How colored output should behave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
	/// Color when writing to a terminal.
	#[default]
	Auto,
	Always,
	Never,
}

impl ColorMode {
	/// Whether color should be used given the terminal state of the output.
	pub fn enabled(self, is_tty: bool) -> bool {
		match self {
			Self::Always => true,
			Self::Never => false,
			Self::Auto => is_tty,
		}
	}
}

impl FromStr for ColorMode {
	type Err = DoreError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.to_ascii_lowercase().as_str() {
			"auto" => Ok(Self::Auto),
			"always" => Ok(Self::Always),
			"never" => Ok(Self::Never),
			_ => Err(DoreError::InvalidColorMode(value.to_string())),
		}
	}
}

impl fmt::Display for ColorMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Auto => "auto",
			Self::Always => "always",
			Self::Never => "never",
		};
		f.write_str(name)
	}
}

/// Configuration loaded from a `dore.toml` file.
///
/// ```toml
/// color = "never"
///
/// [run]
/// no_empty = true
/// quiet = false
///
/// [new]
/// end_token = "END"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DoreConfig {
	#[serde(default)]
	pub color: Option<ColorMode>,
	#[serde(default)]
	pub run: RunConfig,
	#[serde(default)]
	pub new: NewConfig,
}

/// Defaults for `dore run`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
	/// Require a non-blank answer for every placeholder.
	#[serde(default)]
	pub no_empty: bool,
	/// Do not print the filled template.
	#[serde(default)]
	pub quiet: bool,
}

/// Defaults for `dore new`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewConfig {
	#[serde(default = "default_end_token")]
	pub end_token: String,
}

impl Default for NewConfig {
	fn default() -> Self {
		Self {
			end_token: default_end_token(),
		}
	}
}

fn default_end_token() -> String {
	DEFAULT_END_TOKEN.to_string()
}

impl DoreConfig {
	/// Find the first config file that exists under `root`.
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> DoreResult<Option<DoreConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: DoreConfig =
			toml::from_str(&content).map_err(|e| DoreError::ConfigParse(e.to_string()))?;

		tracing::debug!(path = %config_path.display(), "loaded config");
		Ok(Some(config))
	}
}
