// Copyright (c) The casemark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Events and statistics reported while a case list runs.
//!
//! Rendering of these events is up to the consumer; casemark only guarantees
//! that each case's metadata is available alongside its outcome.

mod events;

pub use events::*;
