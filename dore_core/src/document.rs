use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::DoreError;
use crate::DoreResult;
use crate::Session;

/// A persisted reply template.
///
/// ```yaml
/// title: profile
/// description: questions people ask in replies
/// template: |-
///   呼び方: {}
///   好感度: {}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub template: String,
}

impl Document {
	/// Decode a document from YAML text.
	pub fn from_yaml(content: &str) -> DoreResult<Self> {
		serde_yaml_ng::from_str(content).map_err(|e| DoreError::DocumentParse(e.to_string()))
	}

	/// Encode the document as YAML text.
	pub fn to_yaml(&self) -> DoreResult<String> {
		serde_yaml_ng::to_string(self).map_err(|e| DoreError::DocumentSerialize(e.to_string()))
	}

	/// Read and decode the document at `path`.
	pub fn load_file(path: impl AsRef<Path>) -> DoreResult<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path)?;
		tracing::debug!(path = %path.display(), "loading template document");
		Self::from_yaml(&content)
	}

	/// Write the document to `path`, creating parent directories when needed.
	pub fn write_file(&self, path: impl AsRef<Path>) -> DoreResult<()> {
		let path = path.as_ref();
		let content = self.to_yaml()?;

		if let Some(parent) = path.parent() {
			if !parent.as_os_str().is_empty() {
				std::fs::create_dir_all(parent)?;
			}
		}

		std::fs::write(path, content)?;
		tracing::debug!(path = %path.display(), "wrote template document");

		Ok(())
	}

	/// Ensure the template body has some content.
	pub fn validate(&self) -> DoreResult<()> {
		if self.template.trim().is_empty() {
			return Err(DoreError::TemplateMissing);
		}

		Ok(())
	}

	/// Validate the document and prepare its template for filling.
	pub fn session(&self) -> DoreResult<Session> {
		self.validate()?;
		Ok(Session::new(&self.template))
	}
}
