//! Virtual clock and timer queue backing `setTimeout` / `setInterval`.

use std::collections::BTreeMap;
use std::time::Duration;

use super::TimerTask;

/// Identifies a scheduled timer; clearing an expired id is harmless
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// Intervals shorter than this are clamped, otherwise a zero period would never yield
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

struct Timer {
    due: Duration,
    period: Option<Duration>,
    seq: u64,
    task: TimerTask,
}

#[derive(Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    timers: BTreeMap<TimerId, Timer>,
}

impl TimerQueue {
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration, period: Option<Duration>, task: TimerTask) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let period = period.map(|period| period.max(MIN_INTERVAL));
        let due = self.now + period.unwrap_or(delay);
        let seq = self.bump_seq();

        self.timers.insert(id, Timer { due, period, seq, task });
        id
    }

    /// Removes a timer, returning whether it was still pending
    pub fn clear(&mut self, id: TimerId) -> bool {
        self.timers.remove(&id).is_some()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Pops the earliest timer due at or before `until`.
    ///
    /// The clock moves to the timer's due time. Intervals are re-armed
    /// before their task is handed out, so a task may clear itself.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerTask> {
        let id = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.due <= until)
            .min_by_key(|(_, timer)| (timer.due, timer.seq))
            .map(|(id, _)| *id)?;

        let seq = self.bump_seq();
        let timer = self.timers.get_mut(&id)?;
        self.now = self.now.max(timer.due);
        let task = timer.task.clone();
        let period = timer.period;

        match period {
            Some(period) => {
                timer.due += period;
                timer.seq = seq;
            }
            None => {
                self.timers.remove(&id);
            }
        }

        Some(task)
    }

    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}
