//! Scroll coordination for the tab strip.
//!
//! Keeps the active tab centered in the horizontally scrollable strip and
//! reports whether the left/right overflow buttons should be shown. The
//! geometry and animation maths are plain functions; [`ScrollCoordinator`]
//! binds them to the DOM.

use leptos::prelude::*;
use std::time::Duration;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub client_width: f64,
    pub scroll_width: f64,
}

impl ScrollMetrics {
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    pub fn overflow(&self) -> OverflowIndicators {
        OverflowIndicators {
            can_scroll_left: self.scroll_left > 0.0,
            can_scroll_right: self.scroll_width - self.client_width - self.scroll_left > 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverflowIndicators {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

/// Position of a tab element inside the strip's scrollable content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TabRect {
    pub offset_left: f64,
    pub width: f64,
}

/// Scroll offset that centers `tab` in the viewport, clamped to the scrollable range.
pub fn centered_target(metrics: ScrollMetrics, tab: TabRect) -> f64 {
    let target = tab.offset_left + tab.width / 2.0 - metrics.client_width / 2.0;
    target.clamp(0.0, metrics.max_scroll())
}

/// One smooth scroll from `from` to `to`, sampled per animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f64,
    to: f64,
    started_at: f64,
    duration_ms: f64,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64, started_at: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            started_at,
            duration_ms,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    fn progress(&self, now: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn position_at(&self, now: f64) -> f64 {
        let t = ease_in_out_cubic(self.progress(now));
        self.from + (self.to - self.from) * t
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Generation counter for superseding in-flight work.
///
/// `begin` hands out a ticket and invalidates every older one, so a running
/// animation loop stops as soon as a newer request starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskSlot {
    current: u64,
}

impl TaskSlot {
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn cancel(&mut self) {
        self.current += 1;
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current == ticket
    }
}

/// Binds the scroll maths to the tab strip element.
#[derive(Clone, Copy)]
pub struct ScrollCoordinator {
    container: NodeRef<leptos::html::Div>,
    indicators: RwSignal<OverflowIndicators>,
    pending: StoredValue<Option<TimeoutHandle>>,
    animation: StoredValue<TaskSlot>,
    debounce: Duration,
    animation_ms: f64,
}

impl ScrollCoordinator {
    pub fn new(container: NodeRef<leptos::html::Div>, debounce_ms: u32, animation_ms: u32) -> Self {
        Self {
            container,
            indicators: RwSignal::new(OverflowIndicators::default()),
            pending: StoredValue::new(None),
            animation: StoredValue::new(TaskSlot::default()),
            debounce: Duration::from_millis(debounce_ms as u64),
            animation_ms: animation_ms as f64,
        }
    }

    pub fn indicators(&self) -> Signal<OverflowIndicators> {
        self.indicators.into()
    }

    fn metrics(&self) -> Option<ScrollMetrics> {
        let el = self.container.get_untracked()?;
        Some(ScrollMetrics {
            scroll_left: el.scroll_left() as f64,
            client_width: el.client_width() as f64,
            scroll_width: el.scroll_width() as f64,
        })
    }

    /// Recomputes the overflow indicators from the current DOM geometry.
    pub fn refresh_indicators(&self) {
        if let Some(metrics) = self.metrics() {
            let next = metrics.overflow();
            if self.indicators.get_untracked() != next {
                self.indicators.set(next);
            }
        }
    }

    /// Schedules bringing `tab_id` into view after the debounce delay.
    ///
    /// A newer request replaces one that has not fired yet.
    pub fn request_scroll(&self, tab_id: String) {
        if let Some(handle) = self.pending.get_value() {
            handle.clear();
        }
        let this = *self;
        let scheduled = set_timeout_with_handle(
            move || {
                this.pending.set_value(None);
                this.scroll_into_view(&tab_id);
            },
            self.debounce,
        );
        match scheduled {
            Ok(handle) => self.pending.set_value(Some(handle)),
            Err(e) => log::warn!("scroll: failed to schedule scroll: {:?}", e),
        }
    }

    /// Scrolls the strip by a fixed step, used by the overflow buttons.
    pub fn scroll_by(&self, delta: f64) {
        if let Some(metrics) = self.metrics() {
            let target = (metrics.scroll_left + delta).clamp(0.0, metrics.max_scroll());
            self.animate_to(metrics.scroll_left, target);
        }
    }

    /// Cancels the pending request and stops any running animation.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.try_update_value(|pending| pending.take()).flatten() {
            handle.clear();
        }
        let _ = self.animation.try_update_value(|slot| slot.cancel());
    }

    fn scroll_into_view(&self, tab_id: &str) {
        let (Some(container), Some(metrics)) = (self.container.get_untracked(), self.metrics())
        else {
            return;
        };
        let selector = format!(r#"[data-tab-id="{}"]"#, tab_id.replace('"', "\\\""));
        let tab_el = container
            .query_selector(&selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        let Some(tab_el) = tab_el else {
            log::debug!("scroll: tab '{}' not in the strip yet", tab_id);
            return;
        };
        let rect = TabRect {
            offset_left: tab_el.offset_left() as f64,
            width: tab_el.offset_width() as f64,
        };
        let target = centered_target(metrics, rect);
        log::debug!("scroll: centering '{}' at {}", tab_id, target);
        self.animate_to(metrics.scroll_left, target);
    }

    fn animate_to(&self, from: f64, to: f64) {
        let mut ticket = 0;
        self.animation.update_value(|slot| ticket = slot.begin());
        let animation = ScrollAnimation::new(from, to, js_sys::Date::now(), self.animation_ms);
        self.run_frame(ticket, animation);
    }

    fn run_frame(self, ticket: u64, animation: ScrollAnimation) {
        request_animation_frame(move || {
            if !self.animation.with_value(|slot| slot.is_current(ticket)) {
                return;
            }
            let Some(el) = self.container.get_untracked() else {
                return;
            };
            let now = js_sys::Date::now();
            el.set_scroll_left(animation.position_at(now).round() as i32);
            self.refresh_indicators();
            if animation.is_finished(now) {
                log::debug!("scroll: settled at {}", animation.target());
            } else {
                self.run_frame(ticket, animation);
            }
        });
    }
}
