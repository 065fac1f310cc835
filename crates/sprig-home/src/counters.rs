//! One-shot counter ramps, keyed by element.
//!
//! # Invariants
//!
//! 1. **One ramp per element**: only the first trigger moves a slot out
//!    of its armed state; later viewport entries are ignored.
//! 2. **Deterministic emission**: sampling walks slots in hook order,
//!    so the resulting op stream is reproducible.
//! 3. **Exact hand-off**: the sample in which a ramp completes reports
//!    the exact target, and the slot leaves the running set with it.

use sprig_core::ElementId;
use sprig_motion::CounterAnimation;
use web_time::Instant;

use crate::hooks::CounterHook;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Armed,
    Running,
    Done,
}

#[derive(Debug, Clone)]
struct Slot {
    el: ElementId,
    animation: CounterAnimation,
    phase: Phase,
}

/// All counter ramps on the page, in hook order.
#[derive(Debug, Clone, Default)]
pub struct CounterBank {
    slots: Vec<Slot>,
}

impl CounterBank {
    /// A bank with one armed slot per hook.
    #[must_use]
    pub fn new(hooks: &[CounterHook]) -> Self {
        let slots = hooks
            .iter()
            .map(|hook| Slot {
                el: hook.el,
                animation: CounterAnimation::new(hook.target),
                phase: Phase::Armed,
            })
            .collect();
        Self { slots }
    }

    /// Move `el`'s slot from armed to running.
    ///
    /// Returns `true` only for that transition; unknown elements and
    /// slots already running or finished report `false`.
    pub fn trigger(&mut self, el: ElementId) -> bool {
        match self.slots.iter_mut().find(|slot| slot.el == el) {
            Some(slot) if slot.phase == Phase::Armed => {
                slot.phase = Phase::Running;
                true
            }
            _ => false,
        }
    }

    /// Sample every running ramp at `now`, in slot order.
    ///
    /// A ramp that reaches its target during this sample reports the
    /// exact target and leaves the running set.
    pub fn sample(&mut self, now: Instant) -> Vec<(ElementId, u64)> {
        let mut sampled = Vec::new();
        for slot in &mut self.slots {
            if slot.phase != Phase::Running {
                continue;
            }
            let value = slot.animation.sample_at(now);
            if slot.animation.is_done() {
                slot.phase = Phase::Done;
            }
            sampled.push((slot.el, value));
        }
        sampled
    }

    /// Whether any ramp still wants animation frames.
    #[must_use]
    pub fn any_running(&self) -> bool {
        self.slots.iter().any(|slot| slot.phase == Phase::Running)
    }

    /// Whether `el` has an armed slot waiting for its trigger.
    #[must_use]
    pub fn is_armed(&self, el: ElementId) -> bool {
        self.slots
            .iter()
            .any(|slot| slot.el == el && slot.phase == Phase::Armed)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use sprig_motion::COUNTER_DURATION;

    use super::*;

    const EL: ElementId = ElementId::new(7);

    fn bank_of(target: u64) -> CounterBank {
        CounterBank::new(&[CounterHook { el: EL, target }])
    }

    #[test]
    fn trigger_fires_only_once() {
        let mut bank = bank_of(100);
        assert!(bank.is_armed(EL));
        assert!(bank.trigger(EL));
        assert!(!bank.trigger(EL));
        assert!(!bank.is_armed(EL));
        assert!(bank.any_running());
    }

    #[test]
    fn unknown_element_never_triggers() {
        let mut bank = bank_of(100);
        assert!(!bank.trigger(ElementId::new(99)));
        assert!(!bank.any_running());
    }

    #[test]
    fn completed_ramp_leaves_the_running_set_with_the_target() {
        let mut bank = bank_of(1000);
        bank.trigger(EL);
        let base = Instant::now();
        assert_eq!(bank.sample(base), vec![(EL, 0)]);
        assert_eq!(bank.sample(base + COUNTER_DURATION), vec![(EL, 1000)]);
        assert!(!bank.any_running());
        assert!(bank.sample(base + COUNTER_DURATION + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn sampling_keeps_hook_order() {
        let first = ElementId::new(1);
        let second = ElementId::new(2);
        let mut bank = CounterBank::new(&[
            CounterHook { el: first, target: 10 },
            CounterHook { el: second, target: 20 },
        ]);
        // Trigger in reverse order; emission order must not change.
        bank.trigger(second);
        bank.trigger(first);
        let order: Vec<_> = bank.sample(Instant::now()).into_iter().map(|(el, _)| el).collect();
        assert_eq!(order, vec![first, second]);
    }

    #[test]
    fn untriggered_slots_never_sample() {
        let mut bank = bank_of(100);
        assert!(bank.sample(Instant::now()).is_empty());
    }
}
