use std::io::IsTerminal;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use dore_cli::Commands;
use dore_cli::DoreCli;
use dore_cli::decode_inline;
use dore_cli::prompt::LinePrompter;
use dore_cli::prompt::Prompter;
use dore_cli::prompt::ReadlinePrompter;
use dore_cli::style::Styler;
use dore_cli::version_string;
use dore_core::Document;
use dore_core::DoreConfig;
use dore_core::DoreError;
use dore_core::DoreResult;
use dore_core::highlight_preview;
use tracing_subscriber::EnvFilter;

/// Settings resolved from flags, `dore.toml` and defaults, in that order.
struct Settings {
	config: DoreConfig,
	styler: Styler,
}

fn main() {
	let args = DoreCli::parse();
	init_tracing(args.verbose);

	let Some(command) = &args.command else {
		eprintln!("No subcommand specified. Run `dore --help` for usage.");
		process::exit(1);
	};

	let result = load_settings(&args).and_then(|settings| {
		install_report_handler(settings.styler.enabled);

		match command {
			Commands::Run {
				input,
				out,
				no_empty,
				quiet,
			} => run_fill(&settings, input, out.as_deref(), *no_empty, *quiet),
			Commands::New {
				out,
				force,
				title,
				description,
				template_inline,
				template_file,
			} => {
				run_new(
					&settings,
					out,
					*force,
					NewSource {
						title: title.clone(),
						description: description.clone(),
						template_inline: template_inline.clone(),
						template_file: template_file.clone(),
					},
				)
			}
			Commands::Version => {
				println!("{}", version_string());
				Ok(())
			}
		}
	});

	if let Err(e) = result {
		let report: miette::Report = e.into();
		eprintln!("{report:?}");
		process::exit(2);
	}
}

/// Log to stderr. `DORE_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
	let default_directive = if verbose {
		"dore=debug,dore_cli=debug,dore_core=debug"
	} else {
		"warn"
	};
	let filter = EnvFilter::try_from_env("DORE_LOG")
		.unwrap_or_else(|_| EnvFilter::new(default_directive));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.without_time()
		.init();
}

/// Install miette's fancy handler for rich error diagnostics.
fn install_report_handler(use_color: bool) {
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();
}

fn resolve_root(args: &DoreCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn load_settings(args: &DoreCli) -> DoreResult<Settings> {
	let root = resolve_root(args);
	let config = DoreConfig::load(&root)?.unwrap_or_default();
	let mode = args.color.or(config.color).unwrap_or_default();
	tracing::debug!(%mode, root = %root.display(), "resolved settings");

	Ok(Settings {
		config,
		styler: Styler::for_stderr(mode),
	})
}

/// Pick a line editor for interactive terminals and a plain reader for piped
/// input.
fn stdin_prompter() -> DoreResult<Box<dyn Prompter>> {
	let stdin = std::io::stdin();
	if stdin.is_terminal() {
		return Ok(Box::new(ReadlinePrompter::new()?));
	}

	Ok(Box::new(LinePrompter::new(stdin.lock(), std::io::stderr())))
}

fn run_fill(
	settings: &Settings,
	input: &Path,
	out: Option<&Path>,
	no_empty: bool,
	quiet: bool,
) -> DoreResult<()> {
	let document = Document::load_file(input)?;
	let session = document.session().map_err(|e| {
		match e {
			DoreError::TemplateMissing => {
				DoreError::DocumentTemplateMissing {
					path: input.display().to_string(),
				}
			}
			other => other,
		}
	})?;

	let allow_empty = !(no_empty || settings.config.run.no_empty);
	let quiet = quiet || settings.config.run.quiet;
	let mut prompter = stdin_prompter()?;
	let mut values = Vec::with_capacity(session.len());
	let mut stderr = std::io::stderr();

	for placeholder in session.placeholders() {
		writeln!(stderr, "{}", settings.styler.highlight_line(&placeholder.line))?;
		values.push(prompter.ask(&placeholder.label, allow_empty)?);
	}

	let result = session.fill(values.as_slice())?;

	if let Some(out) = out {
		std::fs::write(out, &result)?;
		tracing::info!(path = %out.display(), "wrote filled template");
	}

	if !quiet {
		let mut stdout = std::io::stdout();
		write!(stdout, "{result}")?;
		stdout.flush()?;
	}

	Ok(())
}

struct NewSource {
	title: Option<String>,
	description: Option<String>,
	template_inline: Option<String>,
	template_file: Option<PathBuf>,
}

fn run_new(settings: &Settings, out: &Path, force: bool, source: NewSource) -> DoreResult<()> {
	ensure_writable(out, force)?;

	let body = match (source.template_inline, source.template_file) {
		(Some(_), Some(_)) => return Err(DoreError::ConflictingTemplateSources),
		(Some(inline), None) => decode_inline(&inline),
		(None, Some(file)) => std::fs::read_to_string(file)?,
		(None, None) => {
			return run_interactive_new(settings, out, force, source.title, source.description);
		}
	};

	let document = Document {
		title: source.title.unwrap_or_default(),
		description: source.description.unwrap_or_default(),
		template: body,
	};

	write_template(settings, out, force, &document)
}

fn run_interactive_new(
	settings: &Settings,
	out: &Path,
	force: bool,
	title: Option<String>,
	description: Option<String>,
) -> DoreResult<()> {
	let mut prompter = stdin_prompter()?;

	let title = match title {
		Some(title) => title,
		None => prompter.ask("title", true)?,
	};
	let description = match description {
		Some(description) => description,
		None => prompter.ask("description", true)?,
	};

	let end_token = settings.config.new.end_token.as_str();
	let mut lines: Vec<String> = Vec::new();

	loop {
		let label = format!(
			"template line {} (enter {end_token} to finish)",
			lines.len() + 1
		);
		let line = prompter.ask(&label, true)?;

		if line == end_token {
			if lines.is_empty() {
				eprintln!("The template needs at least one line.");
				continue;
			}
			break;
		}

		lines.push(line);
	}

	let body = lines.join("\n");
	if body.trim().is_empty() {
		return Err(DoreError::EmptyTemplateBody);
	}

	let styler = settings.styler;
	let highlight = |text: &str| styler.highlight_placeholder(text);
	eprintln!("Preview:");
	eprintln!("{}", highlight_preview(&body, Some(&highlight)));

	let document = Document {
		title,
		description,
		template: body,
	};

	write_template(settings, out, force, &document)
}

fn write_template(
	settings: &Settings,
	out: &Path,
	force: bool,
	document: &Document,
) -> DoreResult<()> {
	if document.template.trim().is_empty() {
		return Err(DoreError::EmptyTemplateBody);
	}

	ensure_writable(out, force)?;
	document.write_file(out)?;

	let message = format!("Template saved to {}", out.display());
	eprintln!("{}", settings.styler.highlight_line(&message));

	Ok(())
}

fn ensure_writable(path: &Path, force: bool) -> DoreResult<()> {
	if !force && path.try_exists()? {
		return Err(DoreError::OutputExists {
			path: path.display().to_string(),
		});
	}

	Ok(())
}
