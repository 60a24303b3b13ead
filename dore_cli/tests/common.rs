use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn dore_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("dore"));
	cmd.env("NO_COLOR", "1").env_remove("DORE_LOG");
	cmd
}
