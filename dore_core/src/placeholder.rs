use crate::literal::LiteralProtector;
use crate::literal::PLACEHOLDER;

/// A single fillable `{}` slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
	/// Zero-based position among all placeholders in the document.
	pub index: usize,
	/// Prompt text taken from whatever precedes the token on its line, or
	/// `field<N>` when nothing does.
	pub label: String,
	/// The whole line the token sits on, with literal escapes rendered as `{}`.
	pub line: String,
}

/// Walk the protected text line by line and collect every `{}` in document
/// order.
///
/// The `field<N>` counter advances once per token found, whether or not that
/// token ends up using it, so synthetic labels may skip numbers.
pub fn extract_placeholders(protected: &str, protector: &LiteralProtector) -> Vec<Placeholder> {
	let mut placeholders: Vec<Placeholder> = Vec::new();
	let mut field_counter = 0_usize;

	for line in protected.split('\n') {
		let display_line = protector.restore(line);
		let mut segment_start = 0;

		while let Some(found) = line[segment_start..].find(PLACEHOLDER) {
			let token_start = segment_start + found;
			field_counter += 1;

			let segment = protector.restore(&line[segment_start..token_start]);
			let label = match segment.trim() {
				"" => format!("field{field_counter}"),
				text => text.to_string(),
			};

			tracing::trace!(index = placeholders.len(), %label, "found placeholder");
			placeholders.push(Placeholder {
				index: placeholders.len(),
				label,
				line: display_line.to_string(),
			});

			segment_start = token_start + PLACEHOLDER.len();
		}
	}

	placeholders
}
