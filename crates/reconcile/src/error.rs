// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a flow log from being loaded at all.
///
/// Problems with individual entries are not errors; they become
/// [`Diagnostic`](crate::Diagnostic)s and the entry is skipped.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("flow log must be a JSON array, found {found}")]
    InvalidInput { found: &'static str },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
