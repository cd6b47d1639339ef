use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn vocabgen_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vocabgen").unwrap();
    cmd.env_remove("VOCABGEN_CONFIG");
    cmd
}

/// Write a dictionary source file, creating parent directories
#[allow(dead_code)]
pub fn write_source(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
