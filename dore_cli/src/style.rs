use dore_core::ColorMode;
use owo_colors::OwoColorize;

/// Color-aware string styling for terminal output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Styler {
	pub enabled: bool,
}

impl Styler {
	pub fn new(enabled: bool) -> Self {
		Self { enabled }
	}

	/// Resolve `mode` against stderr, the stream all highlighted output goes
	/// to. `NO_COLOR` turns `auto` off.
	pub fn for_stderr(mode: ColorMode) -> Self {
		let is_tty = std::env::var_os("NO_COLOR").is_none()
			&& supports_color::on(supports_color::Stream::Stderr).is_some();
		Self::new(mode.enabled(is_tty))
	}

	/// Bold and underline the whole line.
	pub fn highlight_line(&self, line: &str) -> String {
		self.emphasize(line)
	}

	/// Bold and underline a placeholder token.
	pub fn highlight_placeholder(&self, text: &str) -> String {
		self.emphasize(text)
	}

	fn emphasize(&self, text: &str) -> String {
		if self.enabled {
			format!("{}", text.bold().underline())
		} else {
			text.to_string()
		}
	}
}
