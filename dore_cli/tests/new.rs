mod common;

use dore_core::AnyEmptyResult;
use dore_core::Document;
use predicates::prelude::PredicateBooleanExt;

#[test]
fn new_writes_inline_template() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let out = tmp.path().join("tpl.yaml");

	common::dore_cmd()
		.current_dir(tmp.path())
		.arg("new")
		.arg("--out")
		.arg(&out)
		.arg("--title")
		.arg("t")
		.arg("--description")
		.arg("d")
		.arg("--template-inline")
		.arg(r"A:{}\nB:{}")
		.assert()
		.success()
		.stdout("")
		.stderr(predicates::str::contains("Template saved to"));

	let document = Document::load_file(&out)?;
	assert_eq!(document.title, "t");
	assert_eq!(document.description, "d");
	assert_eq!(document.template, "A:{}\nB:{}");

	Ok(())
}

#[test]
fn new_reads_template_file_and_creates_parent_dirs() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let body = tmp.path().join("body.txt");
	std::fs::write(&body, "literal: {{}}\nvalue: {}")?;
	let out = tmp.path().join("nested").join("dir").join("tpl.yaml");

	common::dore_cmd()
		.current_dir(tmp.path())
		.arg("new")
		.arg("--out")
		.arg(&out)
		.arg("--template-file")
		.arg(&body)
		.assert()
		.success();

	let document = Document::load_file(&out)?;
	assert_eq!(document.title, "");
	assert_eq!(document.template, "literal: {{}}\nvalue: {}");

	Ok(())
}

#[test]
fn new_refuses_to_overwrite_without_force() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let out = tmp.path().join("tpl.yaml");
	std::fs::write(&out, "existing content")?;

	common::dore_cmd()
		.current_dir(tmp.path())
		.arg("new")
		.arg("--out")
		.arg(&out)
		.arg("--template-inline")
		.arg("value: {}")
		.assert()
		.failure()
		.stderr(predicates::str::contains("already exists"));

	assert_eq!(std::fs::read_to_string(&out)?, "existing content");

	common::dore_cmd()
		.current_dir(tmp.path())
		.arg("new")
		.arg("--out")
		.arg(&out)
		.arg("--template-inline")
		.arg("value: {}")
		.arg("--force")
		.assert()
		.success();

	assert_eq!(Document::load_file(&out)?.template, "value: {}");

	Ok(())
}

#[test]
fn new_rejects_conflicting_sources() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let body = tmp.path().join("body.txt");
	std::fs::write(&body, "value: {}")?;
	let out = tmp.path().join("tpl.yaml");

	common::dore_cmd()
		.current_dir(tmp.path())
		.arg("new")
		.arg("--out")
		.arg(&out)
		.arg("--template-inline")
		.arg("value: {}")
		.arg("--template-file")
		.arg(&body)
		.assert()
		.failure()
		.stderr(predicates::str::contains("only one of"));

	assert!(!out.exists());

	Ok(())
}

#[test]
fn new_rejects_blank_template() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let out = tmp.path().join("tpl.yaml");

	common::dore_cmd()
		.current_dir(tmp.path())
		.arg("new")
		.arg("--out")
		.arg(&out)
		.arg("--template-inline")
		.arg(r"  \n ")
		.assert()
		.failure();

	assert!(!out.exists());

	Ok(())
}

#[test]
fn new_interactive_prompts_for_everything() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let out = tmp.path().join("tpl.yaml");

	common::dore_cmd()
		.current_dir(tmp.path())
		.arg("new")
		.arg("--out")
		.arg(&out)
		.arg("--color")
		.arg("always")
		.write_stdin("My title\nMy description\n呼び方: {}\n好感度: {}\nEOF\n")
		.assert()
		.success()
		.stderr(predicates::str::contains("Preview:"))
		.stderr(predicates::str::contains("\u{1b}["));

	let document = Document::load_file(&out)?;
	assert_eq!(document.title, "My title");
	assert_eq!(document.description, "My description");
	assert_eq!(document.template, "呼び方: {}\n好感度: {}");

	Ok(())
}

#[test]
fn new_interactive_preview_renders_literals_plainly() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let out = tmp.path().join("tpl.yaml");

	common::dore_cmd()
		.current_dir(tmp.path())
		.arg("new")
		.arg("--out")
		.arg(&out)
		.arg("--title")
		.arg("t")
		.arg("--description")
		.arg("d")
		.write_stdin("lit: {{}}\nEOF\n")
		.assert()
		.success()
		.stderr(predicates::str::contains("lit: {}\n"))
		.stderr(predicates::str::contains("lit: {{}}").not());

	assert_eq!(Document::load_file(&out)?.template, "lit: {{}}");

	Ok(())
}

#[test]
fn new_interactive_requires_at_least_one_line() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let out = tmp.path().join("tpl.yaml");

	common::dore_cmd()
		.current_dir(tmp.path())
		.arg("new")
		.arg("--out")
		.arg(&out)
		.write_stdin("t\nd\nEOF\nline {}\nEOF\n")
		.assert()
		.success()
		.stderr(predicates::str::contains("at least one line"));

	assert_eq!(Document::load_file(&out)?.template, "line {}");

	Ok(())
}

#[test]
fn new_interactive_uses_configured_end_token() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("dore.toml"), "[new]\nend_token = \"END\"\n")?;
	let out = tmp.path().join("tpl.yaml");

	common::dore_cmd()
		.arg("new")
		.arg("--path")
		.arg(tmp.path())
		.arg("--out")
		.arg(&out)
		.write_stdin("t\nd\nfirst {}\nEOF\nEND\n")
		.assert()
		.success()
		.stderr(predicates::str::contains("enter END to finish"));

	assert_eq!(Document::load_file(&out)?.template, "first {}\nEOF");

	Ok(())
}

#[test]
fn new_interactive_fails_when_input_ends() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let out = tmp.path().join("tpl.yaml");

	common::dore_cmd()
		.current_dir(tmp.path())
		.arg("new")
		.arg("--out")
		.arg(&out)
		.write_stdin("t\nd\nline {}\n")
		.assert()
		.failure()
		.stderr(predicates::str::contains("input closed"));

	assert!(!out.exists());

	Ok(())
}
