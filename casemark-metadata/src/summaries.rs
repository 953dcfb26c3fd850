// Copyright (c) The casemark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{CaseMetadata, CaseName};
use serde::{Deserialize, Serialize};

/// The serializable classification of a single case execution.
///
/// Exactly one summary is produced per execution. Failures and inconclusive
/// markers are expected classifications, not errors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum OutcomeSummary {
    /// The case passed.
    Passed,

    /// The case failed, either through an explicit fail call or an assertion
    /// mismatch.
    Failed {
        /// The failure message.
        message: String,
    },

    /// The case signaled that it could not produce a meaningful result.
    Inconclusive,
}

impl OutcomeSummary {
    /// Returns true if the case passed.
    pub fn is_success(&self) -> bool {
        matches!(self, OutcomeSummary::Passed)
    }
}

/// One record of the reporting stream: a case's metadata next to its outcome.
///
/// Downstream consumers receive a sequence of these, one per executed case.
/// The exact report format rendered from them is up to the consumer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseReportEntry {
    /// The name of the case.
    pub name: CaseName,

    /// The metadata attached to the case at construction time.
    pub metadata: CaseMetadata,

    /// The outcome of the execution.
    pub outcome: OutcomeSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(OutcomeSummary::Passed, true; "passed is success")]
    #[test_case(OutcomeSummary::Failed { message: "Fail".to_owned() }, false; "failed is not success")]
    #[test_case(OutcomeSummary::Inconclusive, false; "inconclusive is not success")]
    fn outcome_success(outcome: OutcomeSummary, expected: bool) {
        assert_eq!(outcome.is_success(), expected);
    }

    #[test]
    fn report_entry_serialization() {
        let entry = CaseReportEntry {
            name: CaseName::new("WithOneWorkitem"),
            metadata: CaseMetadata::builder().work_item(1000u32).build(),
            outcome: OutcomeSummary::Failed {
                message: "Fail".to_owned(),
            },
        };
        let json = serde_json::to_value(&entry).expect("entry serializes");
        assert_eq!(
            json,
            serde_json::json!({
                "name": "WithOneWorkitem",
                "metadata": {
                    "categories": [],
                    "properties": [],
                    "work_items": [1000],
                },
                "outcome": {
                    "outcome": "failed",
                    "message": "Fail",
                },
            })
        );
        let roundtrip: CaseReportEntry =
            serde_json::from_value(json).expect("entry deserializes");
        assert_eq!(roundtrip, entry);
    }
}
