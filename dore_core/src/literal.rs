use std::borrow::Cow;

use derive_more::Deref;

/// The fillable placeholder token.
pub const PLACEHOLDER: &str = "{}";

/// A placeholder wrapped in one more pair of braces. Renders as a literal `{}`
/// and is never offered as a fillable slot.
pub const LITERAL_ESCAPE: &str = "{{}}";

/// Private use code points never produced by the escape scanner itself.
const MARKER_SEED: char = '\u{E000}';
const MARKER_END: char = '\u{E001}';

/// Maps the markers inserted by [`protect_literals`] back to the plain `{}`
/// rendering.
///
/// Every marker shares a prefix that is guaranteed not to occur anywhere in
/// the raw text the protector was built from, so restoring can never rewrite
/// content that was present in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralProtector {
	prefix: String,
	markers: Vec<String>,
}

impl LiteralProtector {
	/// Replace every marker in `value` with `{}`. Text without markers is
	/// returned as is.
	pub fn restore<'a>(&self, value: &'a str) -> Cow<'a, str> {
		if self.markers.is_empty() || !value.contains(self.prefix.as_str()) {
			return Cow::Borrowed(value);
		}

		let mut restored = value.to_string();
		for marker in &self.markers {
			restored = restored.replace(marker.as_str(), PLACEHOLDER);
		}

		Cow::Owned(restored)
	}

	/// The markers in the order their escapes were encountered.
	pub fn markers(&self) -> &[String] {
		&self.markers
	}

	pub fn len(&self) -> usize {
		self.markers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.markers.is_empty()
	}
}

/// Raw text with every `{{}}` swapped for a unique marker. Dereferences to the
/// protected text.
#[derive(Debug, Clone, Deref)]
pub struct Protected {
	#[deref]
	text: String,
	protector: LiteralProtector,
}

impl Protected {
	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn protector(&self) -> &LiteralProtector {
		&self.protector
	}

	pub fn into_parts(self) -> (String, LiteralProtector) {
		(self.text, self.protector)
	}
}

/// Scan `raw` left to right and replace each `{{}}` with a fresh marker.
/// Markers are numbered from 0 in encounter order. An escape cut short by the
/// end of the input is copied through untouched.
pub fn protect_literals(raw: &str) -> Protected {
	if !raw.contains(LITERAL_ESCAPE) {
		return Protected {
			text: raw.to_string(),
			protector: LiteralProtector::default(),
		};
	}

	let prefix = marker_prefix(raw);
	let mut text = String::with_capacity(raw.len());
	let mut markers: Vec<String> = Vec::new();
	let mut rest = raw;

	while let Some(ch) = rest.chars().next() {
		if rest.starts_with(LITERAL_ESCAPE) {
			let marker = format!("{prefix}{}{MARKER_END}", markers.len());
			text.push_str(&marker);
			markers.push(marker);
			rest = &rest[LITERAL_ESCAPE.len()..];
			continue;
		}

		text.push(ch);
		rest = &rest[ch.len_utf8()..];
	}

	Protected {
		text,
		protector: LiteralProtector { prefix, markers },
	}
}

/// Build a marker prefix that does not appear in `raw`. Each retry grows the
/// prefix, so the loop ends once it is longer than the input.
fn marker_prefix(raw: &str) -> String {
	let mut prefix = format!("{MARKER_SEED}literal:");
	while raw.contains(prefix.as_str()) {
		prefix.insert(0, MARKER_SEED);
	}

	prefix
}
