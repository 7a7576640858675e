//! # State Checks and the Fatal Diagnostic
//!
//! ## Security Invariant
//!
//! A failed check never returns. Continuing after a sequencing bug would
//! operate on inconsistent digest state (finalizing without data,
//! touching a released context), so the only exit is `process::abort`.
//!
//! The diagnostic line has the form
//!
//! ```text
//! Expected states {reset, working}, but got done
//! ```
//!
//! An empty expected set renders as `{none}`. If the buffer for the joined
//! names cannot be reserved, the set renders as `{<out of memory>}` so the
//! violation itself is still reported.

use std::borrow::Cow;
use std::collections::TryReserveError;
use std::io::Write;

use hashgate_core::{state_name_raw, HasherState};

use crate::header::StateView;

const SEPARATOR: &str = ", ";
const EMPTY_SET: &str = "none";
const OOM_FALLBACK: &str = "<out of memory>";

/// Continue silently if the handle is in `expected`, abort otherwise.
#[inline]
pub fn check_state<V: StateView + ?Sized>(view: &V, expected: HasherState) {
    if view.state() != expected {
        unexpected_state(view, &[expected]);
    }
}

/// Continue silently if the handle is in any of `expected`, abort otherwise.
#[inline]
pub fn check_state_one_of<V: StateView + ?Sized>(view: &V, expected: &[HasherState]) {
    if !expected.contains(&view.state()) {
        unexpected_state(view, expected);
    }
}

/// Report a lifecycle violation and terminate the process.
#[cold]
#[inline(never)]
pub fn unexpected_state<V: StateView + ?Sized>(view: &V, expected: &[HasherState]) -> ! {
    let actual = view.state();
    tracing::debug!(
        actual = actual.name(),
        algorithm = %view.algorithm(),
        "lifecycle violation"
    );
    // Written straight to the stream, bypassing any output capture.
    let mut stderr = std::io::stderr().lock();
    let _ = write_violation(&mut stderr, actual, expected);
    let _ = stderr.flush();
    std::process::abort()
}

/// Write the violation line for `actual` against `expected` to `out`.
///
/// Only the joined name list is buffered, and that buffer is reserved
/// fallibly.
pub fn write_violation<W: Write + ?Sized>(
    out: &mut W,
    actual: HasherState,
    expected: &[HasherState],
) -> std::io::Result<()> {
    out.write_all(b"Expected states {")?;
    out.write_all(join_state_names(expected).as_bytes())?;
    out.write_all(b"}, but got ")?;
    out.write_all(state_name_raw(actual.as_raw()).as_bytes())?;
    out.write_all(b"\n")
}

/// Join state labels with `", "`.
pub fn join_state_names(expected: &[HasherState]) -> Cow<'static, str> {
    join_state_names_with(expected, |buf, additional| buf.try_reserve_exact(additional))
}

fn join_state_names_with<F>(expected: &[HasherState], reserve: F) -> Cow<'static, str>
where
    F: FnOnce(&mut String, usize) -> Result<(), TryReserveError>,
{
    match expected {
        [] => Cow::Borrowed(EMPTY_SET),
        [only] => Cow::Borrowed(only.name()),
        [first, rest @ ..] => {
            let total = expected.iter().map(|s| s.name().len()).sum::<usize>()
                + SEPARATOR.len() * rest.len();
            let mut joined = String::new();
            if reserve(&mut joined, total).is_err() {
                return Cow::Borrowed(OOM_FALLBACK);
            }
            joined.push_str(first.name());
            for state in rest {
                joined.push_str(SEPARATOR);
                joined.push_str(state.name());
            }
            debug_assert_eq!(joined.len(), total);
            Cow::Owned(joined)
        }
    }
}
