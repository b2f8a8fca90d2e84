//! Home directory isolation for spawned binaries.
//!
//! The binary reads its user config from the platform config directory, so
//! every spawned process gets a private `HOME` and `XDG_CONFIG_HOME`.

use std::path::Path;
use std::process::Command;

/// Extension trait for Command to point the home directory at a temp dir.
pub trait TestHomeExt {
    /// Set `HOME`, `USERPROFILE` and `XDG_CONFIG_HOME` under `home`.
    fn with_test_home(&mut self, home: &Path) -> &mut Self;
}

impl TestHomeExt for Command {
    fn with_test_home(&mut self, home: &Path) -> &mut Self {
        self.env("HOME", home)
            .env("USERPROFILE", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
    }
}
