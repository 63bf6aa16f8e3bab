//! Shared fixtures for the integration suites.

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A home directory holding `data/` with three files totalling 4096 bytes.
pub struct Fixture {
    pub home: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let home = TempDir::new().unwrap();
        let data = home.path().join("data");
        fs::create_dir_all(data.join("sub")).unwrap();
        fs::write(data.join("a.txt"), vec![b'a'; 1024]).unwrap();
        fs::write(data.join("b.txt"), vec![b'b'; 1024]).unwrap();
        fs::write(data.join("sub").join("c.bin"), vec![0_u8; 2048]).unwrap();
        fs::write(home.path().join("plain.txt"), "not a directory").unwrap();
        Self { home }
    }

    pub fn data(&self) -> PathBuf {
        self.home.path().join("data")
    }

    pub fn data_str(&self) -> String {
        self.data().to_str().unwrap().to_owned()
    }

    /// The binary with `--home` pointed at this fixture.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_remote_index"));
        cmd.env_remove("RUST_LOG").arg("--home").arg(self.home.path());
        cmd
    }
}
