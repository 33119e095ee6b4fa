//! External collaborators: where player names and chat answers come from.
//!
//! Both capabilities are expressed as traits so the game core never depends
//! on a particular backend. Failures are typed (`ProviderError`) and are
//! absorbed at the boundary by `wordbank::acquire` and `answer_or_error`.

use crate::error::ProviderError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Prompt handed to a name-list backend when building the word pool.
pub const PLAYER_LIST_PROMPT: &str = "List 40 current English Premier League players. \
Reply with their names only, lowercase, separated by commas, with no numbering or extra text.";

/// Supplies raw, comma-separated player names.
pub trait NameListProvider {
    fn list_names(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Answers a free-form prompt.
pub trait AnswerProvider {
    fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Ask `provider` and always come back with something printable.
pub fn answer_or_error<P: AnswerProvider + ?Sized>(provider: &P, prompt: &str) -> String {
    match provider.generate(prompt) {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            log::warn!("answer provider failed: {e}");
            format!("Error: {e}")
        }
    }
}

/// Used when nothing is configured; always fails so callers fall back.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoNameList;

impl NameListProvider for NoNameList {
    fn list_names(&self, _prompt: &str) -> Result<String, ProviderError> {
        Err(ProviderError::Unavailable)
    }
}

/// A fixed list, mostly useful for tests and embedding.
#[derive(Debug, Clone)]
pub struct StaticNameList(pub String);

impl NameListProvider for StaticNameList {
    fn list_names(&self, _prompt: &str) -> Result<String, ProviderError> {
        Ok(self.0.clone())
    }
}

/// Reads names from a local file, one per line or comma-separated.
#[derive(Debug, Clone)]
pub struct FileNameList {
    path: PathBuf,
}

impl FileNameList {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NameListProvider for FileNameList {
    fn list_names(&self, _prompt: &str) -> Result<String, ProviderError> {
        let data = fs::read_to_string(&self.path)?;
        let joined = data
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        if joined.is_empty() {
            return Err(ProviderError::Empty);
        }
        Ok(joined)
    }
}

/// Runs a shell command, writing the prompt to its stdin and returning stdout.
///
/// This is how an LLM-backed script plugs in: the command receives the
/// prompt and prints its answer.
#[derive(Debug, Clone)]
pub struct CommandProvider {
    command: String,
}

impl CommandProvider {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn run(&self, prompt: &str) -> Result<String, ProviderError> {
        log::debug!("running provider command: {}", self.command);
        let mut child = shell_command(&self.command)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            // A command that ignores its input may close stdin early
            if let Err(e) = stdin.write_all(prompt.as_bytes())
                && e.kind() != std::io::ErrorKind::BrokenPipe
            {
                return Err(e.into());
            }
        }
        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(ProviderError::CommandFailed {
                status: output.status.to_string(),
            });
        }
        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if text.is_empty() {
            return Err(ProviderError::Empty);
        }
        Ok(text)
    }
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command]);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}

impl NameListProvider for CommandProvider {
    fn list_names(&self, prompt: &str) -> Result<String, ProviderError> {
        self.run(prompt)
    }
}

impl AnswerProvider for CommandProvider {
    fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.run(prompt)
    }
}
