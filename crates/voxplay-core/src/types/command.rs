//! External player command lines.

use std::ffi::{OsStr, OsString};

/// A program plus its arguments, ready to hand to a command runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCommand {
    /// Program name, resolved through `PATH`.
    pub program: String,
    pub args: Vec<OsString>,
}

impl PlayerCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Whether any argument equals `value`.
    pub fn has_arg(&self, value: impl AsRef<OsStr>) -> bool {
        let value = value.as_ref();
        self.args.iter().any(|a| a == value)
    }

    /// The argument following `flag`, if present.
    pub fn value_of(&self, flag: impl AsRef<OsStr>) -> Option<&OsStr> {
        let flag = flag.as_ref();
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(OsString::as_os_str)
    }
}

impl std::fmt::Display for PlayerCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
