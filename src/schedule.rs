//! Periodic refresh scheduling
//!
//! Recurring refresh work is explicit data owned by the host rather than
//! fire-and-forget timers. Each concern is a cancellable task with a period
//! and a next-due instant; the host polls `due` on its own tick and
//! dispatches the returned kinds, and `clear` releases everything on
//! teardown.

use crate::types::Timestamp;
use chrono::Duration;

/// Identifier for a scheduled task.
pub type TaskId = u64;

/// Which refresh a task drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefreshKind {
    /// Exchange open/closed cards
    MarketStatus,
    /// Simulated holding prices
    Prices,
    /// Simulated exchange rates
    Rates,
}

/// One recurring task.
#[derive(Debug, Clone)]
pub struct PeriodicTask {
    pub id: TaskId,
    pub kind: RefreshKind,
    pub every: Duration,
    next_due: Timestamp,
}

impl PeriodicTask {
    /// The next instant at which this task fires.
    pub fn next_due(&self) -> Timestamp {
        self.next_due
    }
}

/// Cancellable schedule of periodic refresh tasks.
#[derive(Debug)]
pub struct RefreshSchedule {
    tasks: Vec<PeriodicTask>,
    next_id: TaskId,
}

impl Default for RefreshSchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshSchedule {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Schedule with the standard cadences: market status every 30 seconds,
    /// simulated prices every minute, exchange rates every 5 minutes.
    pub fn standard(now: Timestamp) -> Self {
        let mut schedule = Self::new();
        schedule.add(RefreshKind::MarketStatus, Duration::seconds(30), now);
        schedule.add(RefreshKind::Prices, Duration::seconds(60), now);
        schedule.add(RefreshKind::Rates, Duration::minutes(5), now);
        schedule
    }

    /// Register a recurring task; it first fires one period after `now`.
    /// Sub-second cadences are clamped to one second.
    pub fn add(&mut self, kind: RefreshKind, every: Duration, now: Timestamp) -> TaskId {
        let every = every.max(Duration::seconds(1));
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(PeriodicTask {
            id,
            kind,
            every,
            next_due: now + every,
        });
        id
    }

    /// Cancel one task. Returns false when the id is unknown.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Kinds due at `now`, in registration order.
    ///
    /// Each fired task is advanced past any missed periods, so a task fires
    /// at most once per poll no matter how late the tick arrives.
    pub fn due(&mut self, now: Timestamp) -> Vec<RefreshKind> {
        let mut fired = Vec::new();
        for task in &mut self.tasks {
            if now >= task.next_due {
                fired.push(task.kind);
                while task.next_due <= now {
                    task.next_due = task.next_due + task.every;
                }
            }
        }
        fired
    }

    /// Teardown: drop every recurring task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Registered tasks, in registration order.
    pub fn tasks(&self) -> &[PeriodicTask] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
