//! Order progress
//!
//! Models the delivery lifecycle of a placed order as an ordered
//! sequence of named steps. Exactly one step is current until the
//! final step completes; after that the order is terminal and further
//! advances are no-ops.

use jiff::Timestamp;
use smallvec::SmallVec;

/// The standard delivery lifecycle, in order.
pub const STANDARD_STEPS: [&str; 4] = ["Order Placed", "Preparing", "Out for Delivery", "Delivered"];

/// Status of a single progress step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The step has finished.
    Completed,

    /// The step is in progress. At most one step holds this status.
    Current,

    /// The step has not started yet.
    Pending,
}

/// One named stage of the delivery lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressStep {
    /// Display name, e.g. `Out for Delivery`.
    pub name: String,

    /// Where this step is in its lifecycle.
    pub status: StepStatus,

    /// When the step completed; `None` until then.
    pub timestamp: Option<Timestamp>,
}

/// Outcome of an [`OrderProgress::advance_at`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The step at this index completed; the next step (if any) is now
    /// current.
    Advanced {
        /// Index of the step that just completed.
        completed: usize,
    },

    /// Every step was already completed; nothing changed.
    AlreadyDelivered,
}

/// Delivery progress of a single order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderProgress {
    steps: SmallVec<[ProgressStep; 4]>,
}

impl OrderProgress {
    /// Create progress over the given step names: the first step is
    /// current, the rest pending. An empty name list yields an already
    /// terminal progress.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let steps = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| ProgressStep {
                name: name.into(),
                status: if index == 0 {
                    StepStatus::Current
                } else {
                    StepStatus::Pending
                },
                timestamp: None,
            })
            .collect();

        OrderProgress { steps }
    }

    /// Progress over the standard four delivery steps.
    pub fn standard() -> Self {
        OrderProgress::new(STANDARD_STEPS)
    }

    /// The steps in order, for display.
    pub fn steps(&self) -> &[ProgressStep] {
        &self.steps
    }

    /// The current step, if the order is not yet delivered.
    pub fn current(&self) -> Option<&ProgressStep> {
        self.steps
            .iter()
            .find(|step| step.status == StepStatus::Current)
    }

    /// Whether every step has completed.
    pub fn is_delivered(&self) -> bool {
        self.steps
            .iter()
            .all(|step| step.status == StepStatus::Completed)
    }

    /// Complete the current step, stamping it with `at`, and make the
    /// next step current. On a terminal order this is a no-op.
    pub fn advance_at(&mut self, at: Timestamp) -> Advance {
        let Some(index) = self
            .steps
            .iter()
            .position(|step| step.status == StepStatus::Current)
        else {
            return Advance::AlreadyDelivered;
        };

        if let Some(step) = self.steps.get_mut(index) {
            step.status = StepStatus::Completed;
            step.timestamp = Some(at);
        }

        if let Some(next) = self.steps.get_mut(index + 1) {
            next.status = StepStatus::Current;
        }

        Advance::Advanced { completed: index }
    }

    /// Complete the current step as of now.
    pub fn advance(&mut self) -> Advance {
        self.advance_at(Timestamp::now())
    }
}
