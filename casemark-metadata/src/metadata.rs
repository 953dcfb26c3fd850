// Copyright (c) The casemark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;

/// The name of a test case, unique within a case list.
///
/// Stored as a [`SmolStr`] since case names are small, immutable and cloned
/// freely between the list, the runner and reports.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseName(SmolStr);

impl CaseName {
    /// Creates a new `CaseName` from a string.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CaseName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for CaseName {
    fn from(name: String) -> Self {
        Self(name.into())
    }
}

/// A category tag attached to a test case.
///
/// Categories carry no structure of their own; duplicates are allowed and
/// preserved in the order they were attached.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryName(SmolStr);

impl CategoryName {
    /// Creates a new `CategoryName` from a string.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().into())
    }

    /// Returns the category as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for CategoryName {
    fn from(name: String) -> Self {
        Self(name.into())
    }
}

/// A key-value property attached to a test case.
///
/// Keys may repeat, with the same or different values; no uniqueness is
/// enforced or assumed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// The name of the property.
    pub name: String,

    /// The value of the property.
    pub value: String,
}

impl Property {
    /// Creates a new `Property` instance.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl<T> From<(T, T)> for Property
where
    T: Into<String>,
{
    fn from((name, value): (T, T)) -> Self {
        Property::new(name, value)
    }
}

/// A work-item identifier attached to a test case.
///
/// Work items reference an external tracker and are opaque to casemark;
/// several cases may share one id, and one case may carry the same id twice.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkItemId(pub u32);

impl fmt::Display for WorkItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for WorkItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Metadata attached to a test case: category tags, key-value properties and
/// work-item identifiers.
///
/// All three sequences preserve attachment order and permit duplicates.
/// Attaching zero instances of a kind is valid and distinct from attaching
/// one. A `CaseMetadata` value is immutable once built; construct it through
/// [`CaseMetadata::builder`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseMetadata {
    categories: Vec<CategoryName>,
    properties: Vec<Property>,
    work_items: Vec<WorkItemId>,
}

impl CaseMetadata {
    /// Returns a new builder with no metadata attached.
    pub fn builder() -> CaseMetadataBuilder {
        CaseMetadataBuilder::default()
    }

    /// Returns metadata with no categories, properties or work items.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The category tags, in attachment order.
    pub fn categories(&self) -> &[CategoryName] {
        &self.categories
    }

    /// The key-value properties, in attachment order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// The work-item identifiers, in attachment order.
    pub fn work_items(&self) -> &[WorkItemId] {
        &self.work_items
    }

    /// Returns true if no metadata of any kind is attached.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.properties.is_empty() && self.work_items.is_empty()
    }
}

/// Builder for [`CaseMetadata`].
///
/// Each method appends; ordering of calls is the ordering of the built
/// sequences.
#[derive(Clone, Debug, Default)]
pub struct CaseMetadataBuilder {
    metadata: CaseMetadata,
}

impl CaseMetadataBuilder {
    /// Attaches a category tag.
    pub fn category(mut self, category: impl Into<CategoryName>) -> Self {
        self.metadata.categories.push(category.into());
        self
    }

    /// Attaches a key-value property.
    pub fn property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.properties.push(Property::new(name, value));
        self
    }

    /// Attaches a work-item identifier.
    pub fn work_item(mut self, id: impl Into<WorkItemId>) -> Self {
        self.metadata.work_items.push(id.into());
        self
    }

    /// Builds the metadata.
    pub fn build(self) -> CaseMetadata {
        self.metadata
    }
}
