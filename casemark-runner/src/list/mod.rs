// Copyright (c) The casemark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Support for building and querying lists of test cases.
//!
//! The main data structures in this module are:
//! * [`TestCase`] for a single named, annotated case
//! * [`CaseList`] for the registration-ordered catalog of cases

mod case_list;

pub use case_list::*;
