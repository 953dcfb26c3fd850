// Copyright (c) The casemark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::DuplicateNameError;
use casemark_metadata::{CaseMetadata, CaseName};
use indexmap::{map::Entry, IndexMap};
use std::{fmt, sync::Arc};
use tracing::debug;

/// The body of a test case: a zero-argument action that signals failure or
/// inconclusiveness by unwinding.
///
/// Stored behind an [`Arc`] so a body can be moved onto a helper thread when
/// the executor enforces a deadline.
pub type CaseBody = Arc<dyn Fn() + Send + Sync + 'static>;

/// A single test case: a unique name, the metadata attached at construction
/// time, and a body.
///
/// A case's name and metadata are immutable once constructed. A case may be
/// declared without a body ([`TestCase::declared`]); running such a case
/// produces a [`ConfigurationError`](crate::errors::ConfigurationError)
/// rather than an outcome.
#[derive(Clone)]
pub struct TestCase {
    name: CaseName,
    metadata: CaseMetadata,
    body: Option<CaseBody>,
}

impl TestCase {
    /// Creates a new case with the given name, metadata and body.
    pub fn new(
        name: impl Into<CaseName>,
        metadata: CaseMetadata,
        body: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            metadata,
            body: Some(Arc::new(body)),
        }
    }

    /// Creates a case declaration without a body.
    ///
    /// Such a case can be registered and queried, but not run.
    pub fn declared(name: impl Into<CaseName>, metadata: CaseMetadata) -> Self {
        Self {
            name: name.into(),
            metadata,
            body: None,
        }
    }

    /// The name of this case.
    pub fn name(&self) -> &CaseName {
        &self.name
    }

    /// The metadata attached to this case.
    pub fn metadata(&self) -> &CaseMetadata {
        &self.metadata
    }

    /// The body of this case, if one was provided.
    pub fn body(&self) -> Option<&CaseBody> {
        self.body.as_ref()
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("metadata", &self.metadata)
            .field("body", &self.body.as_ref().map(|_| "<body>"))
            .finish()
    }
}

/// An ordered catalog of test cases.
///
/// Cases are stored in registration order and keyed by name; registering a
/// second case under an existing name is rejected and leaves the list
/// unchanged. Iteration is restartable and always yields cases in
/// registration order.
#[derive(Clone, Debug, Default)]
pub struct CaseList {
    cases: IndexMap<CaseName, TestCase>,
}

impl CaseList {
    /// Creates a new, empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a case, appending it to the list.
    ///
    /// Returns [`DuplicateNameError`] if a case with the same name is already
    /// registered; the list is unchanged in that situation.
    pub fn register(&mut self, case: TestCase) -> Result<(), DuplicateNameError> {
        match self.cases.entry(case.name().clone()) {
            Entry::Occupied(entry) => Err(DuplicateNameError::new(entry.key().clone())),
            Entry::Vacant(entry) => {
                debug!(name = %case.name(), "registered case");
                entry.insert(case);
                Ok(())
            }
        }
    }

    /// Iterates over the cases in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TestCase> + '_ {
        self.cases.values()
    }

    /// Returns the case registered under `name`, if any.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&TestCase> {
        self.cases.get(&CaseName::new(name.as_ref()))
    }

    /// The number of registered cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns true if no cases are registered.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// The number of cases that will actually run, i.e. those with a body.
    pub fn run_count(&self) -> usize {
        self.cases.values().filter(|case| case.body().is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn case(name: &str) -> TestCase {
        TestCase::new(name, CaseMetadata::empty(), || {})
    }

    #[test]
    fn register_preserves_order() {
        let mut list = CaseList::new();
        for name in ["c", "a", "b"] {
            list.register(case(name)).expect("fresh name");
        }
        let names: Vec<_> = list.iter().map(|case| case.name().as_str()).collect();
        assert_eq!(names, ["c", "a", "b"]);

        // Iteration is restartable with the same order.
        let again: Vec<_> = list.iter().map(|case| case.name().as_str()).collect();
        assert_eq!(names, again);
    }

    #[test]
    fn register_rejects_duplicate_names() {
        let mut list = CaseList::new();
        list.register(case("dup")).expect("fresh name");
        let err = list.register(case("dup")).expect_err("duplicate name");
        assert_eq!(err.name().as_str(), "dup");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn run_count_skips_bodyless_cases() {
        let mut list = CaseList::new();
        list.register(case("runnable")).expect("fresh name");
        list.register(TestCase::declared("declared", CaseMetadata::empty()))
            .expect("fresh name");
        assert_eq!(list.len(), 2);
        assert_eq!(list.run_count(), 1);
    }

    #[test]
    fn get_returns_registered_metadata() {
        let mut list = CaseList::new();
        let metadata = CaseMetadata::builder()
            .category("C1")
            .category("C2")
            .build();
        list.register(TestCase::new("tagged", metadata.clone(), || {}))
            .expect("fresh name");
        let case = list.get("tagged").expect("registered");
        assert_eq!(case.metadata(), &metadata);
        assert!(list.get("missing").is_none());
    }
}
