// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fv-core: Data model for flow logs and the reconstructed flow tree

pub mod macros;

pub mod command;
pub mod describe;
pub mod entry;
pub mod kind;
pub mod metadata;
pub mod path_info;
pub mod structural;
pub mod summary;
pub mod time_fmt;
pub mod tree;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use command::{ActionCommand, Command, RunFlowCommand, ShapeError};
pub use entry::CommandEntry;
pub use kind::{CommandKind, KnownKind};
#[cfg(any(test, feature = "test-support"))]
pub use metadata::MetadataBuilder;
pub use metadata::{ErrorDetail, Metadata, StackFrame, Status};
pub use path_info::TestPathInfo;
pub use structural::{json_type, structural_eq};
pub use summary::{FlowStatus, StatusCounts};
pub use time_fmt::{format_duration_ms, format_offset};
pub use tree::{walk_all, FlowNode, Walk};
