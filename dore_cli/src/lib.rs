use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use dore_core::ColorMode;

pub mod prompt;
pub mod style;


#[derive(Parser)]
#[command(
	author,
	version,
	about = "Fill reply templates by answering one question per placeholder.",
	long_about = "dore loads YAML templates for reply-style questions and guides you through \
	              filling their `{}` placeholders interactively. Write `{{}}` in a template \
	              to keep a literal `{}` in the output.\n\nQuick start:\n  dore new --out \
	              tpl.yaml   Write a template\n  dore run --in tpl.yaml    Fill it in"
)]
pub struct DoreCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Directory to look for `dore.toml` in. Defaults to the current
	/// directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Color output mode (auto, always or never).
	#[arg(long, global = true)]
	pub color: Option<ColorMode>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Fill a YAML template by replacing its placeholders.
	///
	/// Each `{}` in the template is shown in the context of its line and
	/// prompted for in document order. The filled text is printed to stdout.
	Run {
		/// Path to the template YAML.
		#[arg(long = "in", value_name = "FILE")]
		input: PathBuf,

		/// Also write the filled template to this path.
		#[arg(long, value_name = "FILE")]
		out: Option<PathBuf>,

		/// Require non-empty answers for placeholders.
		#[arg(long, default_value_t = false)]
		no_empty: bool,

		/// Do not print the filled template.
		#[arg(long, default_value_t = false)]
		quiet: bool,
	},
	/// Create a new template YAML file.
	///
	/// The body comes from `--template-inline`, `--template-file`, or, when
	/// neither is given, from lines typed at the prompt until the end token.
	New {
		/// Path for the generated YAML template.
		#[arg(long, value_name = "FILE")]
		out: PathBuf,

		/// Overwrite the output file if it exists.
		#[arg(long, default_value_t = false)]
		force: bool,

		/// Template title.
		#[arg(long)]
		title: Option<String>,

		/// Template description.
		#[arg(long)]
		description: Option<String>,

		/// Template body provided inline (supports `\n`, `\t`, `\r` and `\\`).
		#[arg(long, value_name = "TEXT")]
		template_inline: Option<String>,

		/// Read the template body from a file.
		#[arg(long, value_name = "FILE")]
		template_file: Option<PathBuf>,
	},
	/// Show version information.
	Version,
}

/// Decode the escape sequences accepted by `--template-inline`.
///
/// Unknown escapes are kept as typed, as is a trailing backslash.
pub fn decode_inline(value: &str) -> String {
	let mut decoded = String::with_capacity(value.len());
	let mut chars = value.chars();

	while let Some(ch) = chars.next() {
		if ch != '\\' {
			decoded.push(ch);
			continue;
		}

		match chars.next() {
			Some('n') => decoded.push('\n'),
			Some('t') => decoded.push('\t'),
			Some('r') => decoded.push('\r'),
			Some('\\') => decoded.push('\\'),
			Some(other) => {
				decoded.push('\\');
				decoded.push(other);
			}
			None => decoded.push('\\'),
		}
	}

	decoded
}

/// The version string printed by `dore version`.
pub fn version_string() -> String {
	let version = env!("CARGO_PKG_VERSION");
	match option_env!("DORE_COMMIT") {
		Some(commit) if !commit.is_empty() => format!("{version} ({commit})"),
		_ => version.to_string(),
	}
}
