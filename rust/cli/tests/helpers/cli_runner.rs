use std::io::Cursor;

use crate::helpers::CONFIG_VARS;

#[derive(Debug, Default)]
pub struct CliRunner {
    stdin: String,
}

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Restores the previous values of every key it touched when dropped.
struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for key in CONFIG_VARS {
            restores.push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
        for (key, value) in pairs {
            if !CONFIG_VARS.contains(key) {
                restores.push((key.to_string(), std::env::var(key).ok()));
            }
            unsafe {
                std::env::set_var(key, value);
            }
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            unsafe {
                match previous {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

impl CliRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines fed to `play`, one move per line.
    pub fn with_stdin(mut self, input: &str) -> Self {
        self.stdin = input.to_string();
        self
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_with_env(args, &[])
    }

    /// Runs with only the given config vars set. Callers must be `#[serial]`.
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        let _guard = EnvGuard::apply(env);
        let argv = std::iter::once("wildcard").chain(args.iter().copied());
        let mut input = Cursor::new(self.stdin.clone().into_bytes());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let exit_code = wildcard_cli::run_with_input(argv, &mut input, &mut out, &mut err);
        CliResult {
            exit_code,
            stdout: String::from_utf8_lossy(&out).into_owned(),
            stderr: String::from_utf8_lossy(&err).into_owned(),
        }
    }
}
