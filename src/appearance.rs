use crate::error::PlatformError;
use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use std::io::{ErrorKind, Read};
use std::process::{Command, Output, Stdio};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeState {
    Light,
    Dark,
}

impl ThemeState {
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeState::Dark)
    }
}

/// Read access to the desktop's dark-mode preference.
pub trait SettingsQuery: Send + Sync {
    /// Lines of the dark-mode setting that carry the dark marker. Empty when
    /// the setting is absent or holds some other value.
    fn dark_preference(&self) -> Result<String, PlatformError>;
}

/// Runs a settings command and keeps the output lines containing `marker`.
#[derive(Debug, Clone)]
pub struct CommandQuery {
    program: String,
    args: Vec<String>,
    marker: String,
    timeout: Duration,
}

impl CommandQuery {
    pub fn new(program: &str, args: &[&str], marker: &str, timeout: Duration) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            marker: marker.to_string(),
            timeout,
        }
    }

    pub fn macos_defaults(timeout: Duration) -> Self {
        Self::new("defaults", &["read", "-g", "AppleInterfaceStyle"], "Dark", timeout)
    }

    pub fn gnome_color_scheme(timeout: Duration) -> Self {
        Self::new(
            "gsettings",
            &["get", "org.gnome.desktop.interface", "color-scheme"],
            "dark",
            timeout,
        )
    }

    pub fn for_platform(platform: Platform, timeout: Duration) -> Option<Self> {
        match platform {
            Platform::MacOs => Some(Self::macos_defaults(timeout)),
            Platform::Linux => Some(Self::gnome_color_scheme(timeout)),
            Platform::Windows | Platform::Other => None,
        }
    }

    fn run(&self) -> Result<Output, PlatformError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => PlatformError::unavailable(format!("{} not found", self.program)),
                _ => PlatformError::process(format!("failed to spawn {}: {}", self.program, e)),
            })?;

        // Stdout is read on its own thread while the child is polled for exit.
        let reader = child.stdout.take().map(|mut stdout| {
            std::thread::spawn(move || {
                let mut buf = Vec::new();
                let _ = stdout.read_to_end(&mut buf);
                buf
            })
        });

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(PlatformError::process(format!(
                        "{} timed out after {:?}",
                        self.program, self.timeout
                    )));
                }
                Ok(None) => std::thread::sleep(POLL_INTERVAL),
                Err(e) => return Err(PlatformError::process(format!("{}: {}", self.program, e))),
            }
        };

        let stdout = match reader {
            Some(handle) => handle
                .join()
                .map_err(|_| PlatformError::process(format!("{}: stdout reader panicked", self.program)))?,
            None => Vec::new(),
        };

        Ok(Output {
            status,
            stdout,
            stderr: Vec::new(),
        })
    }
}

impl SettingsQuery for CommandQuery {
    fn dark_preference(&self) -> Result<String, PlatformError> {
        let output = self.run()?;

        // `defaults read` exits non-zero when the key is unset, which is light mode.
        if !output.status.success() {
            log::debug!("{} exited with {}", self.program, output.status);
            return Ok(String::new());
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| PlatformError::type_mismatch(format!("{} printed non-UTF-8 output", self.program)))?;

        let matched: Vec<&str> = stdout.lines().filter(|line| line.contains(&self.marker)).collect();
        Ok(matched.join("\n"))
    }
}

pub struct AppearanceProber {
    query: Option<Box<dyn SettingsQuery>>,
}

impl AppearanceProber {
    pub fn new(query: Box<dyn SettingsQuery>) -> Self {
        Self { query: Some(query) }
    }

    /// A prober with nothing to ask; always reports light.
    pub fn unsupported() -> Self {
        Self { query: None }
    }

    pub fn for_platform(platform: Platform, timeout: Duration) -> Self {
        match CommandQuery::for_platform(platform, timeout) {
            Some(query) => Self::new(Box::new(query)),
            None => Self::unsupported(),
        }
    }

    /// Asks the desktop every time; the preference can flip at runtime.
    pub fn current_theme(&self) -> ThemeState {
        let Some(query) = &self.query else {
            return ThemeState::Light;
        };

        match query.dark_preference() {
            Ok(answer) if !answer.trim().is_empty() => ThemeState::Dark,
            Ok(_) => ThemeState::Light,
            Err(e) if e.is_unavailable() => {
                log::debug!("Theme query unavailable, assuming light: {}", e);
                ThemeState::Light
            }
            Err(e) => {
                log::warn!("Theme query failed, assuming light: {}", e);
                ThemeState::Light
            }
        }
    }
}
