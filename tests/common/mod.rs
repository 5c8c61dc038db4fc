use assert_cmd::Command;
use std::path::Path;

pub fn postq_cmd() -> Command {
    Command::cargo_bin("postq").unwrap()
}

/// Write a post file with TOML front matter into `dir`.
pub fn write_post(dir: &Path, name: &str, front: &str, body: &str) {
    let content = format!("+++\n{}\n+++\n\n{}\n", front.trim(), body);
    std::fs::write(dir.join(name), content).unwrap();
}
