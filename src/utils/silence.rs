//! Scoped suppression of process stdout/stderr
//!
//! The report build runs third-party compute (polars) that can print
//! warnings straight to the terminal with no way to route them through a
//! sink we control. `silenced` redirects both standard streams to the null
//! device for the duration of a closure and restores them on scope exit,
//! including on panic.

use gag::Gag;

/// RAII guard holding the stdout and stderr redirections.
///
/// The two streams are acquired independently. If a stream is already
/// redirected by an enclosing guard, the acquisition for that stream is
/// skipped and the enclosing guard remains responsible for restoration,
/// which makes nested scopes safe.
pub struct SilenceGuard {
    stdout: Option<Gag>,
    stderr: Option<Gag>,
}

impl SilenceGuard {
    pub fn new() -> Self {
        Self {
            stdout: Gag::stdout().ok(),
            stderr: Gag::stderr().ok(),
        }
    }

    /// Whether this guard holds the stdout redirection itself.
    #[allow(dead_code)]
    pub fn owns_stdout(&self) -> bool {
        self.stdout.is_some()
    }

    /// Whether this guard holds the stderr redirection itself.
    #[allow(dead_code)]
    pub fn owns_stderr(&self) -> bool {
        self.stderr.is_some()
    }
}

impl Default for SilenceGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `work` with stdout and stderr suppressed.
///
/// The closure's return value passes through unchanged; for a `Result`,
/// errors propagate after the streams are restored. Restoration happens on
/// drop, so an unwinding panic restores the streams as well.
pub fn silenced<T>(work: impl FnOnce() -> T) -> T {
    let _guard = SilenceGuard::new();
    work()
}
