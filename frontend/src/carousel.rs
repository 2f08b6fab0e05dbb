//! Self-driving horizontal strip used by the client brand carousel.
//!
//! [`CarouselEngine`] is the pure offset state machine. [`Marquee`] binds an
//! engine to a [`Scheduler`] so the component only has to start it on mount
//! and stop it on unmount. Tests drive it with a fake scheduler instead of
//! real timers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;

/// One pixel of travel per tick, so 50 px/s.
pub const TICK_INTERVAL_MS: u32 = 20;
pub const DEFAULT_STEP_WIDTH: u32 = 250;
pub const DEFAULT_COPIES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselEngine {
    offset: i32,
    item_count: usize,
    step_width: u32,
}

impl CarouselEngine {
    pub fn new(item_count: usize, step_width: u32) -> Self {
        CarouselEngine {
            offset: 0,
            item_count: item_count.max(1),
            step_width: step_width.max(1),
        }
    }

    /// Distance after which the second copy sits exactly where the first started.
    pub fn cycle_length(&self) -> i32 {
        let items = i32::try_from(self.item_count).unwrap_or(i32::MAX);
        let width = i32::try_from(self.step_width).unwrap_or(i32::MAX);
        items.saturating_mul(width)
    }

    /// Moves one pixel left. Reaching `-(N * W)` snaps back to 0, which is
    /// visually the same frame, so a cycle is exactly `N * W` ticks.
    pub fn tick(&mut self) -> i32 {
        self.offset -= 1;
        if self.offset <= -self.cycle_length() {
            self.offset = 0;
        }
        self.offset
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn translate_style(&self) -> String {
        translate_style(self.offset)
    }
}

pub fn translate_style(offset: i32) -> String {
    format!("transform: translateX({}px)", offset)
}

/// The rendered sequence: `items` back to back `copies` times (never fewer than two).
pub fn repeat_items<T: Clone>(items: &[T], copies: usize) -> Vec<T> {
    let copies = copies.max(DEFAULT_COPIES);
    let mut out = Vec::with_capacity(items.len() * copies);
    for _ in 0..copies {
        out.extend_from_slice(items);
    }
    out
}

/// A source of periodic callbacks. Dropping the returned task cancels it.
pub trait Scheduler {
    type Task;

    fn schedule_every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Task;
}

pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Task = Interval;

    fn schedule_every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, callback)
    }
}

pub struct Marquee<S: Scheduler> {
    engine: Rc<RefCell<CarouselEngine>>,
    // Per-run flag. Callbacks already queued when `stop` runs see it cleared and do nothing.
    alive: Rc<Cell<bool>>,
    task: Option<S::Task>,
}

impl<S: Scheduler> Marquee<S> {
    pub fn new(engine: CarouselEngine) -> Self {
        Marquee {
            engine: Rc::new(RefCell::new(engine)),
            alive: Rc::new(Cell::new(false)),
            task: None,
        }
    }

    /// Starts ticking; `on_tick` receives each new offset. No-op if already running.
    pub fn start<F>(&mut self, scheduler: &S, on_tick: F)
    where
        F: Fn(i32) + 'static,
    {
        if self.task.is_some() {
            return;
        }
        let alive = Rc::new(Cell::new(true));
        self.alive = alive.clone();
        let engine = self.engine.clone();
        let task = scheduler.schedule_every(
            TICK_INTERVAL_MS,
            Box::new(move || {
                if !alive.get() {
                    return;
                }
                let offset = engine.borrow_mut().tick();
                on_tick(offset);
            }),
        );
        self.task = Some(task);
    }

    pub fn stop(&mut self) {
        self.alive.set(false);
        self.task.take();
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    pub fn offset(&self) -> i32 {
        self.engine.borrow().offset()
    }
}

impl<S: Scheduler> Drop for Marquee<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeTimer {
        period: u32,
        elapsed: u32,
        callback: Box<dyn FnMut()>,
        cancelled: Rc<Cell<bool>>,
    }

    #[derive(Clone, Default)]
    struct FakeScheduler {
        timers: Rc<RefCell<Vec<FakeTimer>>>,
    }

    struct FakeTask {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for FakeTask {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl Scheduler for FakeScheduler {
        type Task = FakeTask;

        fn schedule_every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> FakeTask {
            let cancelled = Rc::new(Cell::new(false));
            self.timers.borrow_mut().push(FakeTimer {
                period: period_ms,
                elapsed: 0,
                callback,
                cancelled: cancelled.clone(),
            });
            FakeTask { cancelled }
        }
    }

    impl FakeScheduler {
        fn advance(&self, ms: u32) {
            for _ in 0..ms {
                for timer in self.timers.borrow_mut().iter_mut() {
                    if timer.cancelled.get() {
                        continue;
                    }
                    timer.elapsed += 1;
                    if timer.elapsed == timer.period {
                        timer.elapsed = 0;
                        (timer.callback)();
                    }
                }
            }
        }

        /// Runs every callback once, cancelled or not, like an event already sitting in the queue.
        fn fire_stale(&self) {
            for timer in self.timers.borrow_mut().iter_mut() {
                (timer.callback)();
            }
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<i32>>>, impl Fn(i32) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |offset| sink.borrow_mut().push(offset))
    }

    #[test]
    fn moves_one_pixel_per_tick() {
        let scheduler = FakeScheduler::default();
        let mut marquee = Marquee::new(CarouselEngine::new(6, DEFAULT_STEP_WIDTH));
        let (seen, on_tick) = recorder();
        marquee.start(&scheduler, on_tick);

        scheduler.advance(1_000);

        assert_eq!(marquee.offset(), -50);
        assert_eq!(seen.borrow().len(), 50);
        assert_eq!(seen.borrow().last(), Some(&-50));
    }

    #[test]
    fn offset_equals_minus_elapsed_over_twenty_before_wrap() {
        for t in (0..=2_000).step_by(20) {
            let scheduler = FakeScheduler::default();
            let mut marquee = Marquee::new(CarouselEngine::new(6, DEFAULT_STEP_WIDTH));
            marquee.start(&scheduler, |_| {});
            scheduler.advance(t);
            assert_eq!(marquee.offset(), -(t as i32) / 20);
        }
    }

    #[test]
    fn wraps_within_one_cycle_and_never_passes_the_bound() {
        for (n, w) in [(1usize, 1u32), (1, 7), (3, 5), (6, 250)] {
            let mut engine = CarouselEngine::new(n, w);
            let bound = -engine.cycle_length();
            let mut resets = 0;
            for _ in 0..engine.cycle_length() {
                let offset = engine.tick();
                assert!(offset > bound, "offset {offset} reached bound {bound}");
                if offset == 0 {
                    resets += 1;
                }
            }
            assert_eq!(resets, 1, "n={n} w={w}");
        }
    }

    #[test]
    fn wraps_exactly_once_per_cycle_over_many_cycles() {
        let mut engine = CarouselEngine::new(2, 10);
        let resets = (0..200).filter(|_| engine.tick() == 0).count();
        assert_eq!(resets, 10);
    }

    #[test]
    fn stop_halts_mutation_even_for_queued_callbacks() {
        let scheduler = FakeScheduler::default();
        let mut marquee = Marquee::new(CarouselEngine::new(6, DEFAULT_STEP_WIDTH));
        let (seen, on_tick) = recorder();
        marquee.start(&scheduler, on_tick);
        scheduler.advance(100);
        assert_eq!(marquee.offset(), -5);

        marquee.stop();
        assert!(!marquee.is_running());
        scheduler.advance(100);
        scheduler.fire_stale();

        assert_eq!(marquee.offset(), -5);
        assert_eq!(seen.borrow().len(), 5);
    }

    #[test]
    fn dropping_the_marquee_cancels_its_task() {
        let scheduler = FakeScheduler::default();
        let (seen, on_tick) = recorder();
        {
            let mut marquee = Marquee::new(CarouselEngine::new(3, 100));
            marquee.start(&scheduler, on_tick);
            scheduler.advance(40);
        }
        assert!(scheduler.timers.borrow().iter().all(|t| t.cancelled.get()));
        scheduler.fire_stale();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn starting_twice_does_not_double_speed() {
        let scheduler = FakeScheduler::default();
        let mut marquee = Marquee::new(CarouselEngine::new(6, DEFAULT_STEP_WIDTH));
        marquee.start(&scheduler, |_| {});
        marquee.start(&scheduler, |_| {});
        scheduler.advance(200);
        assert_eq!(marquee.offset(), -10);
        assert_eq!(scheduler.timers.borrow().len(), 1);
    }

    #[test]
    fn restart_after_stop_resumes_from_current_offset() {
        let scheduler = FakeScheduler::default();
        let mut marquee = Marquee::new(CarouselEngine::new(6, DEFAULT_STEP_WIDTH));
        marquee.start(&scheduler, |_| {});
        scheduler.advance(60);
        marquee.stop();
        marquee.start(&scheduler, |_| {});
        scheduler.advance(60);
        assert_eq!(marquee.offset(), -6);
    }

    #[test]
    fn repeat_items_enforces_two_copies() {
        assert_eq!(repeat_items(&["a"], 0), vec!["a", "a"]);
        assert_eq!(repeat_items(&["a", "b"], 3), vec!["a", "b", "a", "b", "a", "b"]);
    }

    #[test]
    fn single_item_and_zero_width_are_clamped() {
        let mut engine = CarouselEngine::new(0, 0);
        assert_eq!(engine.cycle_length(), 1);
        assert_eq!(engine.tick(), 0);
    }

    #[test]
    fn huge_configs_saturate_instead_of_overflowing() {
        let mut engine = CarouselEngine::new(usize::MAX, u32::MAX);
        assert_eq!(engine.cycle_length(), i32::MAX);
        assert_eq!(engine.tick(), -1);

        let engine = CarouselEngine::new(100_000, 100_000);
        assert_eq!(engine.cycle_length(), i32::MAX);
    }

    #[test]
    fn translate_style_uses_offset() {
        let mut engine = CarouselEngine::new(6, DEFAULT_STEP_WIDTH);
        engine.tick();
        engine.tick();
        assert_eq!(engine.translate_style(), "transform: translateX(-2px)");
    }
}
