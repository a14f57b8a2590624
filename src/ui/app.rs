use crate::carousel::{CarouselIntent, CarouselReducer, CarouselState};
use crate::config::Config;
use crate::mvi::Reducer;
use std::time::{Duration, Instant};

/// Cancellable scheduled task: an armed deadline or nothing. Always
/// cancelled before being re-armed, so at most one pending firing exists.
#[derive(Clone, Copy, Debug, Default)]
struct Deadline(Option<Instant>);

impl Deadline {
    fn arm(&mut self, at: Instant) {
        self.0 = Some(at);
    }

    fn cancel(&mut self) {
        self.0 = None;
    }

    fn due(&self, now: Instant) -> bool {
        self.0.is_some_and(|at| at <= now)
    }

    fn instant(&self) -> Option<Instant> {
        self.0
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Input arbiter: owns the carousel state, serializes every trigger source
/// into reducer dispatches, and keeps the two timers (auto-advance, resize
/// debounce) reconciled with the state's armed flag.
///
/// Timer methods take `now` explicitly so the arbitration logic is testable
/// without sleeping.
pub struct App {
    should_quit: bool,
    size: (u16, u16),
    carousel: CarouselState,
    config: Config,
    auto_advance: Deadline,
    resize_debounce: Deadline,
    pending_width_px: Option<u32>,
    pointer_in_region: bool,
}

impl App {
    pub fn new(config: Config, cols: u16, rows: u16, now: Instant) -> Self {
        let width_px = cols as u32 * config.terminal.cell_width_px;
        // Zero cards: stay inert, the render shows a placeholder instead.
        let carousel = if config.reviews.is_empty() {
            CarouselState::default()
        } else {
            CarouselState::new(
                config.reviews.len(),
                width_px,
                config.carousel.drag_threshold_px,
            )
        };
        let mut app = Self {
            should_quit: false,
            size: (cols, rows),
            carousel,
            config,
            auto_advance: Deadline::default(),
            resize_debounce: Deadline::default(),
            pending_width_px: None,
            pointer_in_region: false,
        };
        app.reconcile_auto_advance(now);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    /// Serialized entry point for every carousel trigger.
    pub fn dispatch(&mut self, intent: CarouselIntent, now: Instant) {
        tracing::debug!(?intent, index = self.carousel.current_index, "dispatch");
        dispatch_mvi!(self, carousel, CarouselReducer, intent);
        self.reconcile_auto_advance(now);
    }

    /// The armed flag in state is authoritative; the deadline follows it.
    /// Any dispatch that leaves the timer armed restarts the full period,
    /// which is what makes manual interaction reset auto-advance.
    fn reconcile_auto_advance(&mut self, now: Instant) {
        if self.carousel.auto_advance_armed {
            self.auto_advance
                .arm(now + Duration::from_millis(self.config.carousel.auto_advance_ms));
        } else {
            self.auto_advance.cancel();
        }
    }

    /// Raw resize notification: record the size and restart the quiescence
    /// window. The carousel only sees the width once the window elapses.
    pub fn on_resize(&mut self, cols: u16, rows: u16, now: Instant) {
        self.size = (cols, rows);
        self.pending_width_px = Some(cols as u32 * self.config.terminal.cell_width_px);
        self.resize_debounce
            .arm(now + Duration::from_millis(self.config.carousel.resize_debounce_ms));
    }

    /// Hover edge detection over the carousel's bounding region.
    pub fn set_pointer_in_region(&mut self, inside: bool, now: Instant) {
        if inside == self.pointer_in_region {
            return;
        }
        self.pointer_in_region = inside;
        let intent = if inside {
            CarouselIntent::HoverEnter
        } else {
            CarouselIntent::HoverLeave
        };
        self.dispatch(intent, now);
    }

    /// Fire every deadline that has elapsed. Called by the event loop after
    /// each wakeup.
    pub fn fire_due_timers(&mut self, now: Instant) {
        if self.resize_debounce.due(now) {
            self.resize_debounce.cancel();
            if let Some(width_px) = self.pending_width_px.take() {
                self.dispatch(CarouselIntent::Resize { width_px }, now);
            }
        }
        if self.auto_advance.due(now) {
            // dispatch() re-arms for the next period while armed stays set.
            self.dispatch(CarouselIntent::AutoTick, now);
        }
    }

    /// Sleep budget for the event loop: the nearest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.auto_advance.instant(), self.resize_debounce.instant()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
