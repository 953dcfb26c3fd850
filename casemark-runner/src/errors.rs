// Copyright (c) The casemark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced by casemark.

use casemark_metadata::CaseName;
use thiserror::Error;

/// An error that occurs while registering a case whose name is already taken.
///
/// Returned by [`CaseList::register`](crate::list::CaseList::register). The
/// list is left unchanged: the case that was already registered under this
/// name stays, and the new case is rejected.
#[derive(Clone, Debug, Error)]
#[error("a case named `{name}` is already registered")]
pub struct DuplicateNameError {
    name: CaseName,
}

impl DuplicateNameError {
    pub(crate) fn new(name: impl Into<CaseName>) -> Self {
        Self { name: name.into() }
    }

    /// The name that collided.
    pub fn name(&self) -> &CaseName {
        &self.name
    }
}

/// An error which indicates that a case is malformed and cannot be run.
///
/// Currently the only malformation is a missing body. This error is fatal to
/// the single run that encountered it; the case list and other runs are
/// unaffected.
#[derive(Clone, Debug, Error)]
#[error("case `{name}` is malformed: {reason}")]
pub struct ConfigurationError {
    name: CaseName,
    reason: String,
}

impl ConfigurationError {
    pub(crate) fn new(name: impl Into<CaseName>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// The name of the malformed case.
    pub fn name(&self) -> &CaseName {
        &self.name
    }
}
