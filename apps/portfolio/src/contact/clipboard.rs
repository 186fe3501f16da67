//! Clipboard writes and the transient "Copied!" indicator.
//!
//! A failed write (no clipboard tool, permission denied, tool exits non-zero)
//! is logged and leaves the indicator hidden. It never propagates further.

use std::process::Stdio;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, warn};

pub const COPIED_INDICATOR_TTL: Duration = Duration::from_millis(1500);

type Backend = (&'static str, &'static [&'static str]);

/// Platform clipboard tools, tried in order.
const PLATFORM_BACKENDS: &[Backend] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip", &[]),
];

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("No clipboard backend available")]
    Unavailable,

    #[error("Clipboard I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard command '{command}' exited with {code:?}")]
    Rejected { command: String, code: Option<i32> },
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Pipes text into the first clipboard tool that can be spawned. A tool that
/// is not installed is skipped; any other failure ends the walk.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    backends: &'static [Backend],
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self {
            backends: PLATFORM_BACKENDS,
        }
    }
}

impl SystemClipboard {
    async fn write_with(program: &str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(ClipboardError::Rejected {
                command: program.to_string(),
                code: status.code(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        for (program, args) in self.backends {
            match Self::write_with(program, args, text).await {
                Ok(()) => {
                    debug!("Copied {} bytes via {program}", text.len());
                    return Ok(());
                }
                Err(ClipboardError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                    debug!("Clipboard tool {program} not installed, trying next");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }
        Err(ClipboardError::Unavailable)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyIndicator {
    Hidden,
    Copied,
}

struct CopyState {
    indicator: CopyIndicator,
    epoch: u64,
    revert: Option<JoinHandle<()>>,
}

/// Copy affordance for one piece of text (e.g. one email row).
#[derive(Clone)]
pub struct CopyButton {
    clipboard: Arc<dyn Clipboard>,
    state: Arc<Mutex<CopyState>>,
}

impl CopyButton {
    pub fn new(clipboard: Arc<dyn Clipboard>) -> Self {
        Self {
            clipboard,
            state: Arc::new(Mutex::new(CopyState {
                indicator: CopyIndicator::Hidden,
                epoch: 0,
                revert: None,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CopyState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn indicator(&self) -> CopyIndicator {
        self.lock().indicator
    }

    /// Writes `text` to the clipboard. Returns whether the write succeeded.
    pub async fn copy(&self, text: &str) -> bool {
        if let Err(e) = self.clipboard.write_text(text).await {
            warn!("Copy to clipboard failed: {e}");
            return false;
        }

        let mut state = self.lock();
        state.epoch += 1;
        state.indicator = CopyIndicator::Copied;
        if let Some(revert) = state.revert.take() {
            revert.abort();
        }

        let epoch = state.epoch;
        let button = self.clone();
        state.revert = Some(tokio::spawn(async move {
            sleep(COPIED_INDICATOR_TTL).await;
            let mut state = button.lock();
            if state.epoch == epoch {
                state.indicator = CopyIndicator::Hidden;
                state.revert = None;
            }
        }));

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubClipboard {
        fail: bool,
        written: Mutex<Vec<String>>,
    }

    impl StubClipboard {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                fail,
                written: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Clipboard for StubClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "clipboard permission denied",
                )));
            }
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_shows_indicator_then_reverts() {
        let clipboard = StubClipboard::new(false);
        let button = CopyButton::new(clipboard.clone());

        assert!(button.copy("me@example.com").await);
        assert_eq!(button.indicator(), CopyIndicator::Copied);
        assert_eq!(*clipboard.written.lock().unwrap(), vec!["me@example.com"]);

        sleep(COPIED_INDICATOR_TTL - Duration::from_millis(1)).await;
        assert_eq!(button.indicator(), CopyIndicator::Copied);

        sleep(Duration::from_millis(2)).await;
        assert_eq!(button.indicator(), CopyIndicator::Hidden);
    }

    #[tokio::test(start_paused = true)]
    async fn test_denied_clipboard_is_silent_noop() {
        let button = CopyButton::new(StubClipboard::new(true));

        assert!(!button.copy("me@example.com").await);
        assert_eq!(button.indicator(), CopyIndicator::Hidden);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_copy_restarts_window() {
        let button = CopyButton::new(StubClipboard::new(false));

        button.copy("a").await;
        sleep(Duration::from_millis(1000)).await;
        button.copy("b").await;

        // The first revert would have fired at 1.5s.
        sleep(Duration::from_millis(1000)).await;
        assert_eq!(button.indicator(), CopyIndicator::Copied);

        sleep(Duration::from_millis(501)).await;
        assert_eq!(button.indicator(), CopyIndicator::Hidden);
    }

    const MISSING: Backend = ("portfolio-no-such-clipboard-tool", &[]);

    #[tokio::test]
    async fn test_no_installed_tool_is_unavailable() {
        let clipboard = SystemClipboard {
            backends: &[MISSING, ("portfolio-also-missing", &["--clipboard"])],
        };
        let err = clipboard.write_text("me@example.com").await.unwrap_err();
        assert!(matches!(err, ClipboardError::Unavailable));

        let button = CopyButton::new(Arc::new(clipboard));
        assert!(!button.copy("me@example.com").await);
        assert_eq!(button.indicator(), CopyIndicator::Hidden);
    }

    #[tokio::test]
    async fn test_missing_tool_falls_through_to_next() {
        let clipboard = SystemClipboard {
            backends: &[MISSING, ("cat", &[])],
        };
        clipboard.write_text("me@example.com").await.unwrap();

        let button = CopyButton::new(Arc::new(clipboard));
        assert!(button.copy("me@example.com").await);
        assert_eq!(button.indicator(), CopyIndicator::Copied);
    }

    #[tokio::test]
    async fn test_failing_tool_stops_the_walk() {
        let clipboard = SystemClipboard {
            backends: &[
                ("sh", &["-c", "cat >/dev/null; exit 3"]),
                ("cat", &[]),
            ],
        };
        let err = clipboard.write_text("me@example.com").await.unwrap_err();
        match err {
            ClipboardError::Rejected { command, code } => {
                assert_eq!(command, "sh");
                assert_eq!(code, Some(3));
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_default_uses_platform_tools() {
        let clipboard = SystemClipboard::default();
        assert_eq!(clipboard.backends[0].0, "pbcopy");
        assert_eq!(clipboard.backends.len(), 5);
    }
}
