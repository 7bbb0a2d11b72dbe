//! Text-generation service used as the primary (optional) classifier.
//!
//! The service is a black box: a prompt goes in, text comes out. The default
//! backend is the `claude` CLI; a custom command can stand in for it.

use log::{debug, warn};
use std::io::{ErrorKind, Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Seconds a single generation may run before it is abandoned.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Claude CLI not found. Install from https://claude.ai/code")]
    NotFound,
    #[error("Generation command failed: {0}")]
    CommandFailed(String),
    #[error("Empty response from text generator")]
    EmptyResponse,
    #[error("Generation timed out after {0:?}")]
    Timeout(Duration),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Anything that can turn a prompt into generated text.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Generator backed by the `claude` CLI, or by a user-configured command that
/// reads the prompt on stdin and prints the response on stdout.
#[derive(Debug, Clone)]
pub struct ClaudeCli {
    pub model: String,
    pub custom_command: Option<String>,
    /// The child is killed once this elapses. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ClaudeCli {
    pub fn new(model: impl Into<String>, custom_command: Option<String>) -> Self {
        Self {
            model: model.into(),
            custom_command,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn build_command(&self) -> Result<Command, GenerationError> {
        if let Some(custom) = &self.custom_command {
            let parts: Vec<&str> = custom.split_whitespace().collect();
            let Some((program, args)) = parts.split_first() else {
                return Err(GenerationError::CommandFailed(
                    "Custom command is empty".to_owned(),
                ));
            };
            let mut c = Command::new(program);
            c.args(args);
            return Ok(c);
        }

        let claude_path = find_claude_executable().ok_or(GenerationError::NotFound)?;
        let mut c = Command::new(claude_path);
        c.args([
            "--print",
            "--model",
            self.model.as_str(),
            "--setting-sources",
            "",
            "--disable-slash-commands",
            "--strict-mcp-config",
            "--allowedTools",
            "none",
        ]);
        Ok(c)
    }
}

impl TextGenerator for ClaudeCli {
    /// The prompt is piped via stdin to stay clear of OS argument length limits.
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let mut child = self
            .build_command()?
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .env_remove("CLAUDECODE")
            .spawn()
            .map_err(|e| GenerationError::CommandFailed(e.to_string()))?;

        // Pipes are serviced on their own threads so a stalled child can't
        // block us past the deadline.
        let writer = child.stdin.take().map(|mut stdin| {
            let prompt = prompt.to_owned();
            thread::spawn(move || stdin.write_all(prompt.as_bytes()))
        });
        let stdout_reader = child.stdout.take().map(spawn_reader);
        let stderr_reader = child.stderr.take().map(spawn_reader);

        let status = match self.timeout {
            Some(timeout) => wait_with_deadline(&mut child, timeout)?,
            None => child.wait()?,
        };

        match writer.map(JoinHandle::join) {
            // The command may exit without reading its input; judge it by its output.
            Some(Ok(Err(e))) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("[ClaudeCli::generate] command closed stdin early");
            }
            Some(Ok(Err(e))) => {
                return Err(GenerationError::CommandFailed(format!(
                    "Failed to write prompt to stdin: {e}"
                )));
            }
            _ => {}
        }

        let stdout = collect(stdout_reader);
        let stderr = collect(stderr_reader);

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr).trim().to_owned();
            let detail = if stderr.is_empty() {
                status
                    .code()
                    .map_or_else(|| "killed by signal".to_owned(), |c| format!("exit code {c}"))
            } else {
                stderr
            };
            return Err(GenerationError::CommandFailed(detail));
        }

        let stderr = String::from_utf8_lossy(&stderr);
        if !stderr.trim().is_empty() {
            warn!("[ClaudeCli::generate] stderr (command succeeded): {}", stderr.trim());
        }

        let stdout = String::from_utf8_lossy(&stdout).to_string();
        if stdout.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        debug!("[ClaudeCli::generate] {} bytes of output", stdout.len());
        Ok(stdout)
    }
}

/// Poll the child until it exits, killing it once `timeout` has elapsed.
fn wait_with_deadline(child: &mut Child, timeout: Duration) -> Result<ExitStatus, GenerationError> {
    let started = Instant::now();
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if started.elapsed() >= timeout {
            warn!(
                "[ClaudeCli::generate] no response after {timeout:?}, killing pid {}",
                child.id()
            );
            let _ = child.kill();
            let _ = child.wait();
            return Err(GenerationError::Timeout(timeout));
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn spawn_reader<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        buf
    })
}

fn collect(reader: Option<JoinHandle<Vec<u8>>>) -> Vec<u8> {
    reader.and_then(|r| r.join().ok()).unwrap_or_default()
}

/// Check if the claude CLI is available
pub fn check_claude_available() -> bool {
    find_claude_executable().is_some()
}

/// Find the claude executable in PATH
pub fn find_claude_executable() -> Option<String> {
    let candidates = if cfg!(target_os = "windows") {
        vec!["claude.exe", "claude.cmd", "claude.bat"]
    } else {
        vec!["claude"]
    };
    let which_cmd = if cfg!(target_os = "windows") {
        "where"
    } else {
        "which"
    };

    for candidate in candidates {
        if let Ok(output) = Command::new(which_cmd).arg(candidate).output() {
            if output.status.success() {
                let path = String::from_utf8_lossy(&output.stdout)
                    .lines()
                    .next()
                    .unwrap_or("")
                    .trim()
                    .to_owned();
                if !path.is_empty() {
                    return Some(path);
                }
            }
        }
    }

    // GUI launches often get a minimal PATH without ~/.local/bin.
    #[cfg(not(target_os = "windows"))]
    if let Some(home) = dirs::home_dir() {
        let fallback = home.join(".local/bin/claude");
        if fallback.is_file() {
            return Some(fallback.to_string_lossy().into_owned());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_custom_command_is_rejected() {
        let generator = ClaudeCli::new("haiku", Some("   ".to_owned()));
        let err = generator.generate("hello").unwrap_err();
        assert!(matches!(err, GenerationError::CommandFailed(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_custom_command_receives_prompt_on_stdin() {
        let generator = ClaudeCli::new("haiku", Some("cat".to_owned()));
        let output = generator.generate("health").unwrap();
        assert_eq!(output, "health");
    }

    #[cfg(unix)]
    #[test]
    fn test_empty_output_is_an_error() {
        let generator = ClaudeCli::new("haiku", Some("true".to_owned()));
        let err = generator.generate("anything").unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command_reports_exit_code() {
        let generator = ClaudeCli::new("haiku", Some("false".to_owned()));
        let err = generator.generate("anything").unwrap_err();
        match err {
            GenerationError::CommandFailed(detail) => assert!(detail.contains("exit code")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_stalled_command_is_killed_at_deadline() {
        let generator = ClaudeCli::new("haiku", Some("sleep 30".to_owned()))
            .with_timeout(Duration::from_millis(200));
        let started = Instant::now();
        let err = generator.generate("anything").unwrap_err();
        assert!(matches!(err, GenerationError::Timeout(_)), "got {err}");
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[cfg(unix)]
    #[test]
    fn test_fast_command_beats_deadline() {
        let generator =
            ClaudeCli::new("haiku", Some("cat".to_owned())).with_timeout(Duration::from_secs(10));
        assert_eq!(generator.generate("job").unwrap(), "job");
    }
}
