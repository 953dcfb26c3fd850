// Copyright (c) The casemark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The case executor.
//!
//! The main structures in this module are [`Executor`], which runs a single
//! case and classifies the result, and [`CaseRunner`], which drives a whole
//! [`CaseList`](crate::list::CaseList) and reports events.

mod imp;

pub use imp::*;
