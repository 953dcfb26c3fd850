// Copyright (c) The casemark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Core functionality for casemark: an explicit-registration test-case
//! catalog and an executor that classifies each run as passed, failed or
//! inconclusive.
//!
//! Cases are declared as data, not discovered by reflection: a
//! [`TestCase`](crate::list::TestCase) pairs a name and a
//! [`CaseMetadata`](casemark_metadata::CaseMetadata) value with a
//! zero-argument body. A [`CaseList`](crate::list::CaseList) holds cases in
//! registration order, and an [`Executor`](crate::runner::Executor) runs each
//! body to completion, converting every run-level fault into exactly one
//! outcome.

pub mod errors;
pub mod list;
pub mod reporter;
pub mod runner;

pub use runner::{fail, inconclusive};
