use std::borrow::Cow;

use crate::DoreError;
use crate::DoreResult;
use crate::literal::LiteralProtector;
use crate::literal::PLACEHOLDER;
use crate::literal::protect_literals;
use crate::placeholder::Placeholder;
use crate::placeholder::extract_placeholders;

/// A template body prepared for a single fill pass.
#[derive(Debug, Clone)]
pub struct Session {
	protected: String,
	placeholders: Vec<Placeholder>,
	protector: LiteralProtector,
}

impl Session {
	/// Protect literal escapes in `raw` and extract its placeholders.
	pub fn new(raw: impl AsRef<str>) -> Self {
		let (protected, protector) = protect_literals(raw.as_ref()).into_parts();
		let placeholders = extract_placeholders(&protected, &protector);

		tracing::debug!(
			placeholders = placeholders.len(),
			literals = protector.len(),
			"prepared template session"
		);

		Self {
			protected,
			placeholders,
			protector,
		}
	}

	/// The placeholders in the order their values must be supplied.
	pub fn placeholders(&self) -> &[Placeholder] {
		&self.placeholders
	}

	pub fn len(&self) -> usize {
		self.placeholders.len()
	}

	pub fn is_empty(&self) -> bool {
		self.placeholders.is_empty()
	}

	/// Substitute `values[n]` for the n-th placeholder and render literal
	/// escapes as `{}`.
	///
	/// Values are spliced in exactly once. A value that itself contains `{}`
	/// stays as typed. Literal escapes are restored only in the template text
	/// around each placeholder, never inside a value, so a value that happens to
	/// contain marker text is also left untouched. Nothing is substituted when
	/// the number of values does not match the number of placeholders.
	pub fn fill<S: AsRef<str>>(self, values: &[S]) -> DoreResult<String> {
		if values.len() != self.placeholders.len() {
			return Err(DoreError::ValueCountMismatch {
				expected: self.placeholders.len(),
				got: values.len(),
			});
		}

		tracing::debug!(values = values.len(), "filling template");
		let output = splice(&self.protected, &self.protector, |index| {
			Cow::Borrowed(values[index].as_ref())
		});

		Ok(output)
	}
}

/// Render `raw` for display with every fillable `{}` passed through
/// `highlight`. Literal escapes show up as a plain `{}`.
///
/// Without a highlighter the raw text is returned untouched.
pub fn highlight_preview(raw: &str, highlight: Option<&dyn Fn(&str) -> String>) -> String {
	let Some(highlight) = highlight else {
		return raw.to_string();
	};

	let protected = protect_literals(raw);
	let decorated = highlight(PLACEHOLDER);
	splice(protected.text(), protected.protector(), |_| {
		Cow::Borrowed(decorated.as_str())
	})
}

/// Rebuild `protected` with the n-th `{}` swapped for `replacement(n)`.
/// Only the template text between tokens is restored, so replacements are
/// never scanned for markers or further tokens.
fn splice<'a>(
	protected: &str,
	protector: &LiteralProtector,
	mut replacement: impl FnMut(usize) -> Cow<'a, str>,
) -> String {
	let mut output = String::with_capacity(protected.len());
	let mut cursor = 0;

	for (index, (token_start, _)) in protected.match_indices(PLACEHOLDER).enumerate() {
		output.push_str(&protector.restore(&protected[cursor..token_start]));
		output.push_str(&replacement(index));
		cursor = token_start + PLACEHOLDER.len();
	}

	output.push_str(&protector.restore(&protected[cursor..]));
	output
}
