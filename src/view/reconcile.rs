//! Reconciliation between a source line collection and its native mirror.

use crate::draw::DrawingLine;
use thiserror::Error;

/// Errors raised while synchronizing line collections.
#[derive(Debug, Error)]
pub enum ViewError {
    /// More than one line was provided while multi-line mode is off.
    /// This is a caller bug and must not be silently truncated.
    #[error("multi-line mode is disabled but {count} lines were provided")]
    MultiLineDisabled { count: usize },
}

/// Mirrors `source` into `native`, replacing its contents.
///
/// Called explicitly by the adapter on any structural change to the source
/// collection; clear-then-repopulate keeps the mirror exact without diffing.
/// When multi-line mode is off and `source` holds more than one line, the
/// native collection is left untouched and the error is returned.
pub fn reconcile(
    native: &mut Vec<DrawingLine>,
    source: &[DrawingLine],
    multi_line_mode: bool,
) -> Result<(), ViewError> {
    if !multi_line_mode && source.len() > 1 {
        return Err(ViewError::MultiLineDisabled {
            count: source.len(),
        });
    }

    native.clear();
    native.extend_from_slice(source);
    Ok(())
}
