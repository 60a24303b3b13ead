use std::io::BufRead;
use std::io::Write;

use dore_core::DoreError;
use dore_core::DoreResult;
use rustyline::Config;
use rustyline::DefaultEditor;
use rustyline::config::Behavior;
use rustyline::error::ReadlineError;

/// Message shown when a required answer was left blank.
pub const INPUT_REQUIRED: &str = "input is required";

/// Asks the user for one answer at a time.
pub trait Prompter {
	/// Ask for a single line of input. When `allow_empty` is false the
	/// question is repeated until the answer has some non-whitespace content.
	fn ask(&mut self, label: &str, allow_empty: bool) -> DoreResult<String>;
}

/// Line editing prompter used when stdin is a terminal.
pub struct ReadlinePrompter {
	editor: DefaultEditor,
}

impl ReadlinePrompter {
	pub fn new() -> DoreResult<Self> {
		let editor = DefaultEditor::with_config(editor_config())
			.map_err(|e| DoreError::Prompt(e.to_string()))?;
		Ok(Self { editor })
	}
}

/// Editor settings for [`ReadlinePrompter`]. The editor talks to the
/// controlling terminal directly, keeping prompts and cursor control out of a
/// redirected stdout.
pub fn editor_config() -> Config {
	Config::builder().behavior(Behavior::PreferTerm).build()
}

impl Prompter for ReadlinePrompter {
	fn ask(&mut self, label: &str, allow_empty: bool) -> DoreResult<String> {
		loop {
			let answer = match self.editor.readline(&format!("{label}: ")) {
				Ok(line) => line,
				Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
					return Err(DoreError::PromptClosed);
				}
				Err(e) => return Err(DoreError::Prompt(e.to_string())),
			};

			if allow_empty || !answer.trim().is_empty() {
				self.editor.add_history_entry(answer.as_str()).ok();
				return Ok(answer);
			}

			eprintln!("{INPUT_REQUIRED}");
		}
	}
}

/// Plain line reader used when stdin is piped. Questions go to `output` so
/// that stdout only ever carries the filled template.
pub struct LinePrompter<R, W> {
	input: R,
	output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
	pub fn new(input: R, output: W) -> Self {
		Self { input, output }
	}

	pub fn into_inner(self) -> (R, W) {
		(self.input, self.output)
	}

	fn read_line(&mut self) -> DoreResult<String> {
		let mut line = String::new();
		if self.input.read_line(&mut line)? == 0 {
			return Err(DoreError::PromptClosed);
		}

		if line.ends_with('\n') {
			line.pop();
			if line.ends_with('\r') {
				line.pop();
			}
		}

		Ok(line)
	}
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
	fn ask(&mut self, label: &str, allow_empty: bool) -> DoreResult<String> {
		loop {
			write!(self.output, "{label}: ")?;
			self.output.flush()?;

			let answer = self.read_line()?;
			if allow_empty || !answer.trim().is_empty() {
				return Ok(answer);
			}

			writeln!(self.output, "{INPUT_REQUIRED}")?;
		}
	}
}
