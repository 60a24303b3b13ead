use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum DoreError {
	#[error(transparent)]
	#[diagnostic(code(dore::io_error))]
	Io(#[from] std::io::Error),

	#[error("expected {expected} values but received {got}")]
	#[diagnostic(
		code(dore::value_count_mismatch),
		help("supply exactly one value per `{{}}` placeholder, in document order")
	)]
	ValueCountMismatch { expected: usize, got: usize },

	#[error("template is not defined")]
	#[diagnostic(
		code(dore::template_missing),
		help("add a non-empty `template:` field to the document")
	)]
	TemplateMissing,

	#[error("{path}: template is not defined")]
	#[diagnostic(
		code(dore::template_missing),
		help("add a non-empty `template:` field to the document")
	)]
	DocumentTemplateMissing { path: String },

	#[error("failed to decode template YAML: {0}")]
	#[diagnostic(code(dore::document_parse))]
	DocumentParse(String),

	#[error("failed to encode template YAML: {0}")]
	#[diagnostic(code(dore::document_serialize))]
	DocumentSerialize(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(dore::config_parse),
		help("check that dore.toml is valid TOML with optional [run] and [new] sections")
	)]
	ConfigParse(String),

	#[error("invalid color mode `{0}`")]
	#[diagnostic(
		code(dore::invalid_color_mode),
		help("supported modes: auto, always, never")
	)]
	InvalidColorMode(String),

	#[error("{path} already exists")]
	#[diagnostic(
		code(dore::output_exists),
		help("use --force to overwrite")
	)]
	OutputExists { path: String },

	#[error("only one of --template-inline or --template-file may be set")]
	#[diagnostic(code(dore::conflicting_template_sources))]
	ConflictingTemplateSources,

	#[error("template must contain at least one non-empty line")]
	#[diagnostic(code(dore::empty_template_body))]
	EmptyTemplateBody,

	#[error("input closed before all answers were given")]
	#[diagnostic(code(dore::prompt_closed))]
	PromptClosed,

	#[error("prompt failed: {0}")]
	#[diagnostic(code(dore::prompt))]
	Prompt(String),
}

pub type DoreResult<T> = Result<T, DoreError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
