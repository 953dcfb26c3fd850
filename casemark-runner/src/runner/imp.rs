// Copyright (c) The casemark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    errors::ConfigurationError,
    list::{CaseBody, CaseList, TestCase},
    reporter::{CaseEvent, RunStats},
};
use casemark_metadata::{CaseName, CaseReportEntry, OutcomeSummary};
use crossbeam_channel::RecvTimeoutError;
use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    thread,
    time::{Duration, Instant},
};
use tracing::{debug, warn};

/// Signals an explicit failure with a message, ending the current case body.
///
/// The executor classifies the run as [`CaseOutcome::Fail`] carrying
/// `message`. Calling this outside a case body run by an [`Executor`] aborts
/// the surrounding thread like any other panic.
pub fn fail(message: impl Into<String>) -> ! {
    panic::panic_any(FailurePayload(message.into()))
}

/// Signals that the current case body cannot produce a meaningful result.
///
/// The executor classifies the run as [`CaseOutcome::Inconclusive`].
pub fn inconclusive() -> ! {
    panic::panic_any(InconclusivePayload)
}

// Unwind payloads for the two explicit signals. Not part of the public API;
// bodies raise them through `fail` and `inconclusive`.
struct FailurePayload(String);
struct InconclusivePayload;

/// Whether a case passed, failed or was inconclusive.
///
/// Exactly one outcome is produced per run; assertion failures and
/// inconclusive markers are classifications, not errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CaseOutcome {
    /// The case passed.
    Pass,

    /// The case failed, either through [`fail`], an assertion mismatch, a
    /// plain panic, or an expired deadline.
    Fail {
        /// The failure message.
        message: String,
    },

    /// The case signaled inconclusiveness through [`inconclusive`].
    Inconclusive,
}

impl CaseOutcome {
    /// Returns true if the case was successful.
    pub fn is_success(&self) -> bool {
        matches!(self, CaseOutcome::Pass)
    }

    /// Converts this outcome into its serializable summary form.
    pub fn summary(&self) -> OutcomeSummary {
        match self {
            CaseOutcome::Pass => OutcomeSummary::Passed,
            CaseOutcome::Fail { message } => OutcomeSummary::Failed {
                message: message.clone(),
            },
            CaseOutcome::Inconclusive => OutcomeSummary::Inconclusive,
        }
    }
}

/// Information about a single completed run of a case.
#[derive(Clone, Debug)]
pub struct ExecuteStatus {
    /// The classification of the run.
    pub outcome: CaseOutcome,

    /// The time taken by the run.
    pub time_taken: Duration,
}

/// Executor options.
#[derive(Clone, Debug, Default)]
pub struct ExecutorOpts {
    /// Deadline applied to each run. On expiry the run is classified as
    /// `Fail { message: "timeout" }`. [default: none]
    pub timeout: Option<Duration>,
}

impl ExecutorOpts {
    /// Creates a new executor.
    pub fn build(self) -> Executor {
        Executor { opts: self }
    }
}

/// Runs a single case body to completion and classifies the result.
///
/// Every run-level fault is converted into a [`CaseOutcome`] at this
/// boundary; the only error that escapes [`Executor::run`] is a
/// [`ConfigurationError`] for a case that cannot be run at all.
#[derive(Clone, Debug)]
pub struct Executor {
    opts: ExecutorOpts,
}

impl Executor {
    /// Creates an executor with default options.
    pub fn new() -> Self {
        ExecutorOpts::default().build()
    }

    /// Runs a case, classifying the result as exactly one outcome.
    ///
    /// Runs are stateless: each call observes a fresh `NotStarted -> Running
    /// -> terminal` lifecycle, and terminal outcomes are final.
    pub fn run(&self, case: &TestCase) -> Result<ExecuteStatus, ConfigurationError> {
        let body = case
            .body()
            .cloned()
            .ok_or_else(|| ConfigurationError::new(case.name().clone(), "missing body"))?;

        debug!(name = %case.name(), "running case");
        let start = Instant::now();
        let outcome = match self.opts.timeout {
            Some(timeout) => run_with_deadline(case.name(), body, timeout),
            None => classify(panic::catch_unwind(AssertUnwindSafe(|| body()))),
        };
        Ok(ExecuteStatus {
            outcome,
            time_taken: start.elapsed(),
        })
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the body on a helper thread and waits for it with a deadline.
///
/// In-process bodies cannot be killed, so an expired run is abandoned: its
/// thread keeps running detached while the outcome is reported as a timeout.
fn run_with_deadline(name: &CaseName, body: CaseBody, timeout: Duration) -> CaseOutcome {
    let (sender, receiver) = crossbeam_channel::bounded(1);
    let spawned = thread::Builder::new()
        .name(format!("casemark-run-{name}"))
        .spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| body()));
            let _ = sender.send(result);
        });
    let handle = match spawned {
        Ok(handle) => handle,
        Err(error) => {
            return CaseOutcome::Fail {
                message: format!("failed to spawn run thread: {error}"),
            };
        }
    };

    match receiver.recv_timeout(timeout) {
        Ok(result) => {
            let _ = handle.join();
            classify(result)
        }
        Err(RecvTimeoutError::Timeout) => {
            warn!(name = %name, ?timeout, "case timed out, abandoning its run thread");
            CaseOutcome::Fail {
                message: "timeout".to_owned(),
            }
        }
        Err(RecvTimeoutError::Disconnected) => CaseOutcome::Fail {
            message: "run thread exited without reporting a result".to_owned(),
        },
    }
}

/// Converts the result of a caught body into an outcome. Total: every unwind
/// payload maps to some outcome.
fn classify(result: Result<(), Box<dyn Any + Send>>) -> CaseOutcome {
    let payload = match result {
        Ok(()) => return CaseOutcome::Pass,
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<InconclusivePayload>() {
        Ok(_) => return CaseOutcome::Inconclusive,
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<FailurePayload>() {
        Ok(failure) => {
            return CaseOutcome::Fail {
                message: failure.0,
            };
        }
        Err(payload) => payload,
    };
    // Stdlib assert!/assert_eq!/panic! payloads are String or &'static str.
    let payload = match payload.downcast::<String>() {
        Ok(message) => return CaseOutcome::Fail { message: *message },
        Err(payload) => payload,
    };
    match payload.downcast::<&'static str>() {
        Ok(message) => CaseOutcome::Fail {
            message: (*message).to_owned(),
        },
        Err(_) => CaseOutcome::Fail {
            message: "case panicked with a non-string payload".to_owned(),
        },
    }
}

/// Drives every case in a [`CaseList`] through an [`Executor`], reporting
/// events along the way.
///
/// Execution is sequential, in registration order. Runs share no mutable
/// state; the ordering is a reporting convenience, not a dependency between
/// cases.
#[derive(Clone, Debug, Default)]
pub struct CaseRunner {
    executor: Executor,
}

impl CaseRunner {
    /// Creates a runner around the given executor.
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }

    /// Executes the listed cases, one at a time.
    ///
    /// The callback is called with an event for the start of the run, every
    /// finished or skipped case, and the end of the run. Returns the
    /// accumulated statistics.
    pub fn execute<'list, F>(&self, case_list: &'list CaseList, mut callback: F) -> RunStats
    where
        F: FnMut(CaseEvent<'list>),
    {
        let mut run_stats = RunStats::new(case_list.len());
        callback(CaseEvent::RunStarted { case_list });

        for test_case in case_list.iter() {
            match self.executor.run(test_case) {
                Ok(status) => {
                    run_stats.on_case_finished(&status.outcome);
                    callback(CaseEvent::CaseFinished { test_case, status });
                }
                Err(error) => {
                    run_stats.on_case_skipped();
                    callback(CaseEvent::CaseSkipped { test_case, error });
                }
            }
        }

        callback(CaseEvent::RunFinished { run_stats });
        run_stats
    }

    /// Executes the listed cases and collects the reporting stream: one
    /// [`CaseReportEntry`] per finished case, pairing the case's metadata
    /// with its outcome.
    ///
    /// Skipped (malformed) cases produce no entry; they surface through the
    /// statistics and [`CaseEvent::CaseSkipped`] instead.
    pub fn report_entries(&self, case_list: &CaseList) -> (RunStats, Vec<CaseReportEntry>) {
        let mut entries = Vec::with_capacity(case_list.run_count());
        let run_stats = self.execute(case_list, |event| {
            if let CaseEvent::CaseFinished { test_case, status } = event {
                entries.push(CaseReportEntry {
                    name: test_case.name().clone(),
                    metadata: test_case.metadata().clone(),
                    outcome: status.outcome.summary(),
                });
            }
        });
        (run_stats, entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casemark_metadata::CaseMetadata;
    use pretty_assertions::assert_eq;

    fn run_body(body: impl Fn() + Send + Sync + 'static) -> CaseOutcome {
        let case = TestCase::new("body", CaseMetadata::empty(), body);
        Executor::new()
            .run(&case)
            .expect("case has a body")
            .outcome
    }

    #[test]
    fn empty_body_passes() {
        assert_eq!(run_body(|| {}), CaseOutcome::Pass);
    }

    #[test]
    fn explicit_fail_carries_message() {
        assert_eq!(
            run_body(|| fail("Fail")),
            CaseOutcome::Fail {
                message: "Fail".to_owned()
            }
        );
    }

    #[test]
    fn assertion_mismatch_fails_with_panic_message() {
        let outcome = run_body(|| assert_eq!(true, false, "mismatch"));
        match outcome {
            CaseOutcome::Fail { message } => assert!(message.contains("mismatch")),
            other => panic!("expected a failure, got {other:?}"),
        }
    }

    #[test]
    fn inconclusive_marker_is_classified() {
        assert_eq!(run_body(|| inconclusive()), CaseOutcome::Inconclusive);
    }

    #[test]
    fn static_str_panic_fails_with_message() {
        assert_eq!(
            run_body(|| panic!("plain panic")),
            CaseOutcome::Fail {
                message: "plain panic".to_owned()
            }
        );
    }

    #[test]
    fn non_string_payload_still_produces_an_outcome() {
        let outcome = run_body(|| panic::panic_any(42_u32));
        assert_eq!(
            outcome,
            CaseOutcome::Fail {
                message: "case panicked with a non-string payload".to_owned()
            }
        );
    }

    #[test]
    fn missing_body_is_a_configuration_error() {
        let case = TestCase::declared("declared", CaseMetadata::empty());
        let error = Executor::new().run(&case).expect_err("no body");
        assert_eq!(error.name().as_str(), "declared");
    }

    #[test]
    fn deadline_expiry_is_a_timeout_failure() {
        let executor = ExecutorOpts {
            timeout: Some(Duration::from_millis(50)),
        }
        .build();
        let case = TestCase::new("sleepy", CaseMetadata::empty(), || {
            thread::sleep(Duration::from_secs(60));
        });
        let status = executor.run(&case).expect("case has a body");
        assert_eq!(
            status.outcome,
            CaseOutcome::Fail {
                message: "timeout".to_owned()
            }
        );
    }

    #[test]
    fn deadline_leaves_fast_cases_alone() {
        let executor = ExecutorOpts {
            timeout: Some(Duration::from_secs(60)),
        }
        .build();
        let case = TestCase::new("quick", CaseMetadata::empty(), || {});
        let status = executor.run(&case).expect("case has a body");
        assert_eq!(status.outcome, CaseOutcome::Pass);
    }
}
