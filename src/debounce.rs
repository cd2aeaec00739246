//! Trailing-edge debouncing over an explicit scheduler.
//!
//! Each call cancels the pending task and schedules a new one; when a task
//! fires, only the most recent arguments are delivered.

/// Default quiet interval (ms) before a scroll burst is acted on.
pub const DEFAULT_DEBOUNCE_MS: u32 = 10;

/// Something that can run a single deferred task and cancel it.
pub trait Scheduler {
    type Handle;

    /// Schedule a task `delay_ms` from now. `None` if the host refused.
    fn schedule(&mut self, delay_ms: u32) -> Option<Self::Handle>;

    /// Cancel a task that has not fired yet.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Holds the latest arguments and the pending task handle.
#[derive(Debug)]
pub struct Debouncer<T, H> {
    interval_ms: u32,
    pending: Option<T>,
    timer: Option<H>,
}

impl<T, H> Debouncer<T, H> {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            pending: None,
            timer: None,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace the pending arguments and restart the quiet interval.
    ///
    /// Returns `false` if the scheduler refused the task; the arguments stay
    /// pending and the caller should run them itself.
    pub fn call<S>(&mut self, scheduler: &mut S, args: T) -> bool
    where
        S: Scheduler<Handle = H> + ?Sized,
    {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
        self.pending = Some(args);
        self.timer = scheduler.schedule(self.interval_ms);
        self.timer.is_some()
    }

    /// The pending task fired: hand over the latest arguments.
    pub fn fire(&mut self) -> Option<T> {
        self.timer = None;
        self.pending.take()
    }

    /// Drop the pending call, cancelling its task. Returns the dropped arguments.
    pub fn cancel<S>(&mut self, scheduler: &mut S) -> Option<T>
    where
        S: Scheduler<Handle = H> + ?Sized,
    {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
        self.pending.take()
    }
}

/// Identifier of a task on a [`VirtualScheduler`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

/// Host-driven scheduler with a virtual millisecond clock.
///
/// Nothing fires on its own; the host calls [`VirtualScheduler::advance`]
/// and dispatches whatever became due.
#[derive(Debug, Default)]
pub struct VirtualScheduler {
    now_ms: u64,
    next_id: u64,
    tasks: Vec<(u64, TaskId)>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of scheduled tasks that have not fired or been cancelled
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Move the clock forward and return the tasks that came due, in due order.
    pub fn advance(&mut self, ms: u64) -> Vec<TaskId> {
        self.now_ms = self.now_ms.saturating_add(ms);
        let now = self.now_ms;
        let mut due: Vec<(u64, TaskId)> = Vec::new();
        self.tasks.retain(|&(at, id)| {
            if at <= now {
                due.push((at, id));
                false
            } else {
                true
            }
        });
        due.sort_unstable();
        due.into_iter().map(|(_, id)| id).collect()
    }
}

impl Scheduler for VirtualScheduler {
    type Handle = TaskId;

    fn schedule(&mut self, delay_ms: u32) -> Option<TaskId> {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks
            .push((self.now_ms.saturating_add(u64::from(delay_ms)), id));
        Some(id)
    }

    fn cancel(&mut self, handle: TaskId) {
        self.tasks.retain(|&(_, id)| id != handle);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Scheduler that refuses every task.
    struct Refusing;

    impl Scheduler for Refusing {
        type Handle = ();

        fn schedule(&mut self, _delay_ms: u32) -> Option<()> {
            None
        }

        fn cancel(&mut self, _handle: ()) {}
    }

    #[test]
    fn test_call_supersedes_pending_task() {
        let mut sched = VirtualScheduler::new();
        let mut deb = Debouncer::new(10);
        assert!(deb.call(&mut sched, 1));
        assert!(deb.call(&mut sched, 2));
        assert_eq!(sched.pending(), 1);
        assert_eq!(deb.fire(), Some(2));
        assert_eq!(deb.fire(), None);
    }

    #[test]
    fn test_tasks_fire_only_when_due() {
        let mut sched = VirtualScheduler::new();
        sched.schedule(10);
        assert!(sched.advance(9).is_empty());
        assert_eq!(sched.advance(1).len(), 1);
        assert_eq!(sched.now_ms(), 10);
    }

    #[test]
    fn test_due_order() {
        let mut sched = VirtualScheduler::new();
        let late = sched.schedule(20);
        let early = sched.schedule(5);
        assert_eq!(sched.advance(30), vec![early.unwrap(), late.unwrap()]);
    }

    #[test]
    fn test_cancel_drops_args_and_task() {
        let mut sched = VirtualScheduler::new();
        let mut deb = Debouncer::new(10);
        deb.call(&mut sched, "a");
        assert_eq!(deb.cancel(&mut sched), Some("a"));
        assert_eq!(sched.pending(), 0);
        assert!(!deb.is_pending());
    }

    #[test]
    fn test_refused_schedule_keeps_args() {
        let mut deb = Debouncer::new(10);
        assert!(!deb.call(&mut Refusing, 7));
        assert!(deb.is_pending());
        assert_eq!(deb.fire(), Some(7));
    }
}
