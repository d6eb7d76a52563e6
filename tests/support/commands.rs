//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Variables the tool reads from the environment; cleared for every run so
/// the developer's or CI runner's own values never leak into a test.
const ENV_VARS: &[&str] = &[
    "STORE_FILE",
    "KEY_ALIAS",
    "KEY_PASSWORD",
    "STORE_PASSWORD",
    "SIGNCFG_PROPERTIES",
    "SIGNCFG_LOG",
    "SIGNCFG_LOG_FORMAT",
];

impl Test {
    /// Create a signcfg command running in the project directory.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("signcfg").expect("failed to find signcfg binary");
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `signcfg resolve <variant>`.
    pub fn resolve(&self, variant: &str) -> Output {
        self.cmd()
            .args(["resolve", variant])
            .output()
            .expect("failed to run signcfg resolve")
    }

    /// Shortcut for `signcfg resolve <variant> --json`.
    pub fn resolve_json(&self, variant: &str) -> Output {
        self.cmd()
            .args(["resolve", variant, "--json"])
            .output()
            .expect("failed to run signcfg resolve --json")
    }

    /// `signcfg resolve <variant> --json` with extra environment variables.
    pub fn resolve_json_with_env(&self, variant: &str, env: &[(&str, &str)]) -> Output {
        let mut cmd = self.cmd();
        cmd.args(["resolve", variant, "--json"]);
        for (k, v) in env {
            cmd.env(k, v);
        }
        cmd.output().expect("failed to run signcfg resolve --json")
    }

    /// Shortcut for `signcfg check <variant>`.
    pub fn check(&self, variant: &str) -> Output {
        self.cmd()
            .args(["check", variant])
            .output()
            .expect("failed to run signcfg check")
    }
}
