//! Animated in-page anchor navigation.
//!
//! Only one scroll animation is ever live. Starting a new one bumps the
//! navigation generation and replaces the slot, which drops (and cancels)
//! the previous pending frame. A frame that still fires for an older
//! generation returns without touching the window.

use std::cell::{Cell, RefCell};

use gloo_render::{request_animation_frame, AnimationFrame};
use log::debug;
use yew::Callback;

use crate::config::{HEADER_OFFSET, SCROLL_DURATION_MS};
use crate::error::SiteError;

/// Fast at the start, settles smoothly at the end.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// `#studio` -> `studio`. Empty anchors address nothing.
pub fn anchor_id(href: &str) -> Option<&str> {
    let id = href.trim_start_matches('#');
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Absolute document offset to scroll to so the element clears the fixed header.
pub fn target_offset(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    element_top + scroll_y - header_offset
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStep {
    pub position: f64,
    pub finished: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    pub start_position: f64,
    pub target_position: f64,
    pub start_time: Option<f64>,
    pub duration_ms: f64,
}

impl ScrollAnimation {
    pub fn new(start_position: f64, target_position: f64, duration_ms: f64) -> Self {
        Self {
            start_position,
            target_position,
            start_time: None,
            duration_ms,
        }
    }

    pub fn distance(&self) -> f64 {
        self.target_position - self.start_position
    }

    /// Advances to the frame timestamp `now`. The first call pins the start time.
    pub fn step(&mut self, now: f64) -> ScrollStep {
        let start = *self.start_time.get_or_insert(now);
        let elapsed = (now - start).max(0.0);
        let progress = if self.duration_ms > 0.0 {
            (elapsed / self.duration_ms).min(1.0)
        } else {
            1.0
        };
        ScrollStep {
            position: self.start_position + self.distance() * ease_out_cubic(progress),
            finished: elapsed >= self.duration_ms,
        }
    }
}

struct InFlight {
    generation: u64,
    animation: ScrollAnimation,
    frame: Option<AnimationFrame>,
}

thread_local! {
    static GENERATION: Cell<u64> = Cell::new(0);
    static IN_FLIGHT: RefCell<Option<InFlight>> = RefCell::new(None);
}

/// Click handler body for in-page links. Failures are logged and swallowed.
pub fn smooth_scroll_to(href: &str, on_start: Option<&Callback<()>>) {
    if let Some(on_start) = on_start {
        on_start.emit(());
    }
    if let Err(err) = start_scroll(href) {
        debug!("Smooth scroll to {} skipped: {}", href, err);
    }
}

/// Starts animating the window towards the element addressed by `href`.
pub fn start_scroll(href: &str) -> Result<(), SiteError> {
    let id = anchor_id(href).ok_or_else(|| SiteError::NotAnAnchor(href.to_string()))?;
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    let document = window.document().ok_or(SiteError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingTarget(id.to_string()))?;

    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let element_top = element.get_bounding_client_rect().top();
    let animation = ScrollAnimation::new(
        scroll_y,
        target_offset(element_top, scroll_y, HEADER_OFFSET),
        SCROLL_DURATION_MS,
    );
    debug!(
        "Scrolling to #{} from {} to {}",
        id, animation.start_position, animation.target_position
    );

    let generation = GENERATION.with(|g| {
        let next = g.get().wrapping_add(1);
        g.set(next);
        next
    });
    // Replacing the slot drops the previous animation's pending frame.
    IN_FLIGHT.with(|slot| {
        *slot.borrow_mut() = Some(InFlight {
            generation,
            animation,
            frame: None,
        });
    });
    schedule_frame(generation);
    Ok(())
}

/// Whether an animation for `generation` still owns the scroll slot.
pub fn is_current(generation: u64) -> bool {
    GENERATION.with(|g| g.get() == generation)
}

fn schedule_frame(generation: u64) {
    let handle = request_animation_frame(move |timestamp| on_frame(generation, timestamp));
    IN_FLIGHT.with(|slot| {
        if let Some(in_flight) = slot.borrow_mut().as_mut() {
            if in_flight.generation == generation {
                in_flight.frame = Some(handle);
            }
        }
    });
}

fn on_frame(generation: u64, timestamp: f64) {
    if !is_current(generation) {
        return;
    }
    let step = IN_FLIGHT.with(|slot| {
        let mut slot = slot.borrow_mut();
        let in_flight = slot.as_mut().filter(|f| f.generation == generation)?;
        in_flight.frame.take();
        Some(in_flight.animation.step(timestamp))
    });
    let Some(step) = step else {
        return;
    };

    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, step.position);
    }

    if step.finished {
        IN_FLIGHT.with(|slot| {
            let mut slot = slot.borrow_mut();
            if slot.as_ref().map(|f| f.generation) == Some(generation) {
                slot.take();
            }
        });
    } else {
        schedule_frame(generation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints_and_decelerates() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
        // first half covers more ground than the second
        assert!(ease_out_cubic(0.5) > 1.0 - ease_out_cubic(0.5));
    }

    #[test]
    fn anchor_id_strips_hash() {
        assert_eq!(anchor_id("#studio"), Some("studio"));
        assert_eq!(anchor_id("contact"), Some("contact"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id(""), None);
    }

    #[test]
    fn target_clears_the_header() {
        // element 700px below the viewport top while already scrolled 300px
        assert_eq!(target_offset(700.0, 300.0, HEADER_OFFSET), 900.0);
        // element above the viewport
        assert_eq!(target_offset(-400.0, 1000.0, HEADER_OFFSET), 500.0);
    }

    #[test]
    fn animation_moves_monotonically_and_lands_on_target() {
        let mut animation = ScrollAnimation::new(300.0, 900.0, SCROLL_DURATION_MS);
        let first = animation.step(1_000.0);
        assert_eq!(first.position, 300.0);
        assert!(!first.finished);
        assert_eq!(animation.start_time, Some(1_000.0));

        let mut last = first.position;
        let mut now = 1_000.0;
        let mut finished = false;
        while !finished {
            now += 16.0;
            let step = animation.step(now);
            assert!(step.position >= last, "scroll went backwards at {}", now);
            last = step.position;
            finished = step.finished;
        }
        assert!((last - 900.0).abs() < 1e-9);
        assert!(now - 1_000.0 >= SCROLL_DURATION_MS);
    }

    #[test]
    fn upward_animation_decreases() {
        let mut animation = ScrollAnimation::new(2_000.0, 500.0, SCROLL_DURATION_MS);
        animation.step(0.0);
        let mid = animation.step(100.0);
        assert!(mid.position < 2_000.0 && mid.position > 500.0);
        assert_eq!(animation.step(200.0).position, 500.0);
    }

    #[test]
    fn zero_duration_jumps_in_one_frame() {
        let mut animation = ScrollAnimation::new(0.0, 400.0, 0.0);
        let step = animation.step(5.0);
        assert_eq!(step.position, 400.0);
        assert!(step.finished);
    }
}
