// Copyright (c) The casemark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    errors::ConfigurationError,
    list::{CaseList, TestCase},
    runner::{CaseOutcome, ExecuteStatus},
};

/// An event reported by [`CaseRunner::execute`](crate::runner::CaseRunner::execute).
#[derive(Clone, Debug)]
pub enum CaseEvent<'list> {
    /// The run started.
    RunStarted {
        /// The list of cases that will be run.
        case_list: &'list CaseList,
    },

    /// A case finished running with an outcome.
    CaseFinished {
        /// The case that finished.
        test_case: &'list TestCase,

        /// Information about the completed run.
        status: ExecuteStatus,
    },

    /// A case could not be run because it is malformed.
    ///
    /// The rest of the run continues; this case produces no outcome.
    CaseSkipped {
        /// The case that was skipped.
        test_case: &'list TestCase,

        /// The reason the case could not be run.
        error: ConfigurationError,
    },

    /// The run finished.
    RunFinished {
        /// Statistics for the full run.
        run_stats: RunStats,
    },
}

/// Statistics for a full run of a case list.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RunStats {
    /// The total number of cases in the list at the start of the run,
    /// including malformed cases that end up skipped.
    pub initial_run_count: usize,

    /// The total number of cases that finished with an outcome.
    pub finished_count: usize,

    /// The number of cases that passed.
    pub passed: usize,

    /// The number of cases that failed.
    pub failed: usize,

    /// The number of cases that were inconclusive.
    pub inconclusive: usize,

    /// The number of cases skipped because they could not be run.
    pub skipped: usize,
}

impl RunStats {
    /// Creates statistics for a run over `initial_run_count` cases.
    pub fn new(initial_run_count: usize) -> Self {
        Self {
            initial_run_count,
            ..Self::default()
        }
    }

    /// Returns true if this run is considered a success: no failures and no
    /// skipped cases.
    ///
    /// Inconclusive cases do not fail the run; they are reported separately.
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.skipped == 0
    }

    pub(crate) fn on_case_finished(&mut self, outcome: &CaseOutcome) {
        self.finished_count += 1;
        match outcome {
            CaseOutcome::Pass => self.passed += 1,
            CaseOutcome::Fail { .. } => self.failed += 1,
            CaseOutcome::Inconclusive => self.inconclusive += 1,
        }
    }

    pub(crate) fn on_case_skipped(&mut self) {
        self.skipped += 1;
    }
}
