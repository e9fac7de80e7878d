//! Writing styled output.
//!
//! Two ways to apply a registered preset:
//!
//! - [`print`]: one call, writes prefix, text and suffix together.
//! - [`style`]: opens a [`ScopedPrint`] that writes the prefix immediately and
//!   the suffix exactly once when the scope ends, whether by [`finish`],
//!   by going out of scope, or by a panic unwinding through it. [`with_style`]
//!   is the closure form of the same thing.
//!
//! Every function has a `_to` variant that writes to any [`io::Write`]
//! instead of stdout.
//!
//! ```rust
//! use std::io::Write;
//! use termstyle::{add_preset, style_to, Code, PresetConfig, StyleString};
//!
//! add_preset(
//!     "doc-info",
//!     PresetConfig::new().prefix(StyleString::new("[INFO] ").pre(Code::ForegroundCyan)),
//! )
//! .unwrap();
//!
//! let mut buf = Vec::new();
//! {
//!     let mut out = style_to(&mut buf, "doc-info").unwrap();
//!     write!(out, "{} updates available", 3).unwrap();
//! }
//! assert_eq!(
//!     String::from_utf8(buf).unwrap(),
//!     "\x1b[36m[INFO] 3 updates available\x1b[0m\n"
//! );
//! ```
//!
//! # Concurrency
//!
//! Registry access is serialized, but output is not: two scopes open at the
//! same time on the same stream interleave their prefix, body and suffix
//! writes. Callers that style output from several threads must order those
//! scopes themselves, for example by holding one lock for the whole scope.
//!
//! # Exit guard
//!
//! Independently of any preset, [`shutdown`] writes one bare RESTORE so a
//! scope that was never closed (say, the process is being torn down) cannot
//! leave the terminal styled. [`init`] returns an [`ExitGuard`] that does the
//! same on drop; keep it alive for the whole of `main`. Call [`shutdown`]
//! yourself before `std::process::exit`, which skips destructors. Only the
//! first of these writes anything; [`shutdown_to`] is the unguarded form.
//!
//! [`finish`]: ScopedPrint::finish

use std::fmt::Display;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use console::Term;

use crate::error::Result;
use crate::preset::{with_preset, PresetConfig};
use crate::render::{render, RenderMode};
use crate::style::Color;

/// Writes `prefix + text + suffix` for the named preset to stdout.
///
/// # Errors
///
/// Returns [`Error::PresetNotFound`](crate::Error::PresetNotFound) if the
/// preset is not registered, or [`Error::Io`](crate::Error::Io) if writing
/// fails.
pub fn print(name: &str, text: &str) -> Result<()> {
    print_to(&mut Term::stdout(), name, text)
}

/// Writes `prefix + text + suffix` for the named preset to `out`.
///
/// # Errors
///
/// See [`print`].
pub fn print_to<W: Write + ?Sized>(out: &mut W, name: &str, text: &str) -> Result<()> {
    let line = with_preset(name, |preset| styled(preset, text))?;
    out.write_all(line.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Writes `prefix + text + suffix` for a preset that is not in the
/// process-wide registry.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if writing fails.
pub fn write_styled<W: Write + ?Sized>(
    out: &mut W,
    preset: &PresetConfig,
    text: &str,
) -> Result<()> {
    out.write_all(styled(preset, text).as_bytes())?;
    out.flush()?;
    Ok(())
}

fn styled(preset: &PresetConfig, text: &str) -> String {
    let mut line = render(preset, RenderMode::Prefix);
    line.push_str(text);
    line.push_str(&render(preset, RenderMode::Suffix));
    line
}

/// Opens a styled scope on stdout.
///
/// # Errors
///
/// Returns [`Error::PresetNotFound`](crate::Error::PresetNotFound) if the
/// preset is not registered, or [`Error::Io`](crate::Error::Io) if the
/// prefix cannot be written.
pub fn style(name: &str) -> Result<ScopedPrint<Term>> {
    style_to(Term::stdout(), name)
}

/// Opens a styled scope on `out`.
///
/// Pass `&mut writer` to keep ownership of the writer.
///
/// # Errors
///
/// See [`style`].
pub fn style_to<W: Write>(out: W, name: &str) -> Result<ScopedPrint<W>> {
    let (prefix, suffix) = with_preset(name, |preset| {
        (
            render(preset, RenderMode::Prefix),
            render(preset, RenderMode::Suffix),
        )
    })?;
    ScopedPrint::start(out, prefix, suffix)
}

/// Runs `f` inside a styled scope on stdout and closes the scope afterwards.
///
/// The suffix is written even if `f` panics.
///
/// # Errors
///
/// See [`style`]; also returns [`Error::Io`](crate::Error::Io) if the suffix
/// cannot be written.
pub fn with_style<R>(name: &str, f: impl FnOnce(&mut ScopedPrint<Term>) -> R) -> Result<R> {
    with_style_to(Term::stdout(), name, f)
}

/// Runs `f` inside a styled scope on `out` and closes the scope afterwards.
///
/// # Errors
///
/// See [`with_style`].
pub fn with_style_to<W: Write, R>(
    out: W,
    name: &str,
    f: impl FnOnce(&mut ScopedPrint<W>) -> R,
) -> Result<R> {
    let mut scope = style_to(out, name)?;
    let value = f(&mut scope);
    scope.finish()?;
    Ok(value)
}

/// A styled output scope.
///
/// The prefix has already been written when a `ScopedPrint` exists. Content
/// written through it (with [`print`](Self::print) or the [`Write`] impl) goes
/// to the underlying writer unchanged. The suffix is written exactly once:
/// by [`finish`](Self::finish), or on drop if the scope was not finished.
/// Errors on the drop path are ignored; use `finish` to observe them.
#[must_use = "dropping the scope immediately writes the suffix"]
pub struct ScopedPrint<W: Write = Term> {
    out: W,
    suffix: Option<String>,
}

impl<W: Write> ScopedPrint<W> {
    /// Opens a scope for a preset that is not in the process-wide registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the prefix cannot be
    /// written.
    pub fn open(out: W, preset: &PresetConfig) -> Result<Self> {
        Self::start(
            out,
            render(preset, RenderMode::Prefix),
            render(preset, RenderMode::Suffix),
        )
    }

    fn start(mut out: W, prefix: String, suffix: String) -> Result<Self> {
        out.write_all(prefix.as_bytes())?;
        out.flush()?;
        tracing::trace!("opened styled scope");
        Ok(Self {
            out,
            suffix: Some(suffix),
        })
    }

    /// Writes any displayable value, returning `self` for chaining.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if writing fails.
    pub fn print(&mut self, value: impl Display) -> Result<&mut Self> {
        write!(self.out, "{}", value)?;
        Ok(self)
    }

    /// Writes the suffix and closes the scope.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the suffix cannot be
    /// written. It is not retried on drop.
    pub fn finish(mut self) -> Result<()> {
        self.close()?;
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        if let Some(suffix) = self.suffix.take() {
            self.out.write_all(suffix.as_bytes())?;
            self.out.flush()?;
            tracing::trace!("closed styled scope");
        }
        Ok(())
    }
}

impl<W: Write> Write for ScopedPrint<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Drop for ScopedPrint<W> {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

static RESTORED: AtomicBool = AtomicBool::new(false);

/// Writes a final bare RESTORE to stdout.
///
/// Only the first call in the process writes anything. The flag is shared
/// with every [`ExitGuard`], so a guard dropped after this stays silent.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if writing fails.
pub fn shutdown() -> Result<()> {
    restore_once(&mut Term::stdout())
}

/// Writes a bare RESTORE to `out`.
///
/// Unlike [`shutdown`] this writes on every call and leaves the
/// once-per-process flag alone.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if writing fails.
pub fn shutdown_to<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    out.write_all(Color::RESTORE.escape().as_bytes())?;
    out.flush()?;
    Ok(())
}

fn restore_once<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    if RESTORED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    shutdown_to(out)?;
    tracing::debug!("terminal attributes restored");
    Ok(())
}

/// Writes the process-wide RESTORE when dropped, unless [`shutdown`] or
/// another guard already did.
#[must_use = "the guard restores the terminal when it is dropped"]
#[derive(Debug)]
pub struct ExitGuard<W: Write = Term> {
    out: W,
}

impl<W: Write> Drop for ExitGuard<W> {
    fn drop(&mut self) {
        let _ = restore_once(&mut self.out);
    }
}

/// Returns the exit guard for `main`.
///
/// ```rust,no_run
/// fn main() {
///     let _guard = termstyle::init();
///     // register presets, print...
/// }
/// ```
pub fn init() -> ExitGuard {
    init_to(Term::stdout())
}

/// Returns an exit guard that restores `out` instead of stdout.
///
/// `out` should be the stream the terminal is attached to: the guard uses the
/// same once-per-process flag as [`shutdown`].
pub fn init_to<W: Write>(out: W) -> ExitGuard<W> {
    ExitGuard { out }
}
