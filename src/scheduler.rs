// src/scheduler.rs
use std::time::Duration;

/// Handle returned for every scheduled timer; used to cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Timer facility the model schedules its periodic and deferred work on.
pub trait Scheduler {
    /// What a timer delivers when it fires.
    type Msg;
    fn schedule_every(&mut self, period: Duration, msg: Self::Msg) -> TimerHandle;
    fn schedule_after(&mut self, delay: Duration, msg: Self::Msg) -> TimerHandle;
    /// Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
    fn is_pending(&self, handle: TimerHandle) -> bool;
}

struct Timer<M> {
    handle: TimerHandle,
    due: Duration,
    period: Option<Duration>,
    msg: M,
}

/// Deterministic timer queue driven by an explicit clock value.
///
/// Time is a `Duration` since the session started. The GUI feeds it the
/// wall-clock elapsed time every frame; tests feed it whatever they like.
pub struct TimerQueue<M> {
    now: Duration,
    next_id: u64,
    timers: Vec<Timer<M>>,
}

impl<M: Clone> TimerQueue<M> {
    pub fn new() -> Self {
        Self { now: Duration::ZERO, next_id: 0, timers: Vec::new() }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Earliest due time across all live timers.
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.iter().map(|t| t.due).min()
    }

    /// Pops the earliest message due at or before `until`.
    ///
    /// Firing moves the queue clock to the timer's due time, so anything
    /// scheduled while handling the message is relative to that instant.
    /// Periodic timers are re-armed one period later. When nothing is due the
    /// clock moves to `until` and `None` is returned.
    pub fn pop_due(&mut self, until: Duration) -> Option<M> {
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.handle))
            .map(|(i, _)| i);

        let Some(idx) = idx else {
            self.now = self.now.max(until);
            return None;
        };

        let due = self.timers[idx].due;
        self.now = self.now.max(due);
        match self.timers[idx].period {
            Some(period) => {
                let timer = &mut self.timers[idx];
                timer.due = due + period;
                Some(timer.msg.clone())
            }
            None => Some(self.timers.remove(idx).msg),
        }
    }

    fn push(&mut self, delay: Duration, period: Option<Duration>, msg: M) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer { handle, due: self.now + delay, period, msg });
        handle
    }
}

impl<M: Clone> Default for TimerQueue<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Clone> Scheduler for TimerQueue<M> {
    type Msg = M;

    fn schedule_every(&mut self, period: Duration, msg: M) -> TimerHandle {
        // 周期为零会让 pop_due 永远有事件可取
        let period = period.max(Duration::from_millis(1));
        let handle = self.push(period, Some(period), msg);
        log::debug!("timer {:?}: every {:?}", handle, period);
        handle
    }

    fn schedule_after(&mut self, delay: Duration, msg: M) -> TimerHandle {
        let handle = self.push(delay, None, msg);
        log::debug!("timer {:?}: once after {:?}", handle, delay);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }

    fn is_pending(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }
}
