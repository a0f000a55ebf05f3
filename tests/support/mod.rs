// Host-side stand-ins for the browser: a page that records what was done to it
// and a scheduler driven by a manual clock.

#![allow(dead_code)]

use crate::platform::{DebugReadout, Layout, Page, Scheduler, SensorReading, ViewportMetrics};
use std::cell::RefCell;

pub fn reading(alpha: f64, beta: f64, gamma: f64) -> SensorReading {
    SensorReading {
        alpha: Some(alpha),
        beta: Some(beta),
        gamma: Some(gamma),
    }
}

pub fn portrait_beta(beta: f64) -> SensorReading {
    reading(0.0, beta, 0.0)
}

pub fn metrics(content_height: f64, screen_height: f64) -> ViewportMetrics {
    ViewportMetrics {
        content_height,
        content_width: 400.0,
        screen_height,
    }
}

#[derive(Default)]
pub struct FakePage {
    pub metrics: ViewportMetrics,
    pub layout: Layout,
    pub scroll_tops: Vec<i64>,
    pub sensor_mode_calls: u32,
    pub readouts: Vec<DebugReadout>,
}

impl FakePage {
    pub fn new(metrics: ViewportMetrics, layout: Layout) -> Self {
        Self {
            metrics,
            layout,
            ..Default::default()
        }
    }

    pub fn last_scroll(&self) -> Option<i64> {
        self.scroll_tops.last().copied()
    }
}

impl Page for FakePage {
    fn viewport_metrics(&self) -> ViewportMetrics {
        self.metrics
    }

    fn layout(&self) -> Layout {
        self.layout
    }

    fn set_scroll_top(&mut self, top: i64) {
        self.scroll_tops.push(top);
    }

    fn enable_sensor_mode(&mut self) {
        self.sensor_mode_calls += 1;
    }

    fn show_debug(&mut self, readout: &DebugReadout) {
        self.readouts.push(*readout);
    }
}

struct Timer {
    id: u32,
    due: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now: u64,
    next_id: u32,
    timers: Vec<Timer>,
}

#[derive(Default)]
pub struct ManualScheduler {
    clock: RefCell<Clock>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Move the clock forward, running every timer that comes due in order,
    /// including ones scheduled by the timers themselves.
    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let idx = clock
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.id))
                    .map(|(i, _)| i);
                idx.map(|i| {
                    let timer = clock.timers.remove(i);
                    clock.now = timer.due;
                    timer.task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u32;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Option<u32> {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay_ms as u64;
        clock.timers.push(Timer { id, due, task });
        Some(id)
    }

    fn cancel(&self, handle: u32) {
        self.clock.borrow_mut().timers.retain(|t| t.id != handle);
    }
}
