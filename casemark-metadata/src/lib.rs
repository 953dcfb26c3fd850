// Copyright (c) The casemark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured access to casemark test-case metadata and outcomes.
//!
//! This crate holds the data model shared between the runner and any
//! downstream consumer of run output: case names, category tags, key-value
//! properties, work-item identifiers, and the serializable outcome summaries
//! produced once a case has been executed.
//!
//! Metadata is attached to a case as explicit data at construction time, not
//! recovered through reflection: a case carries a [`CaseMetadata`] value built
//! once through [`CaseMetadataBuilder`] and never mutated afterwards.

mod metadata;
mod summaries;

pub use metadata::*;
pub use summaries::*;
