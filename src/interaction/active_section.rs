use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;

use crate::config::{SCROLLED_THRESHOLD, SECTION_BAND};
use crate::interaction::scroll_source::{self, ScrollSnapshot};

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_THRESHOLD
}

/// First section, in declared order, whose top edge lies inside `band`.
/// `top_of` yields `None` for sections missing from the page.
pub fn find_active<'a, I, F>(sections: I, band: (f64, f64), top_of: F) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a String>,
    F: Fn(&str) -> Option<f64>,
{
    let (low, high) = band;
    sections
        .into_iter()
        .map(String::as_str)
        .find(|id| matches!(top_of(id), Some(top) if top >= low && top <= high))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSectionTracker {
    sections: Vec<String>,
    active: String,
}

impl ActiveSectionTracker {
    /// Starts on the first section.
    pub fn new(sections: Vec<String>) -> Self {
        let active = sections.first().cloned().unwrap_or_default();
        Self { sections, active }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Recomputes the active section. Returns whether it changed.
    /// When nothing is inside the band the previous section stays active.
    pub fn update<F>(&mut self, top_of: F) -> bool
    where
        F: Fn(&str) -> Option<f64>,
    {
        match find_active(&self.sections, SECTION_BAND, top_of) {
            Some(found) if found != self.active => {
                self.active = found.to_string();
                true
            }
            _ => false,
        }
    }
}

fn element_top(id: &str) -> Option<f64> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(id)?;
    Some(element.get_bounding_client_rect().top())
}

/// Whether the page has scrolled past the navbar threshold.
#[hook]
pub fn use_scrolled() -> bool {
    let scrolled = use_state(|| false);
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let last = Cell::new(false);
                let subscription = scroll_source::subscribe(move |snapshot: &ScrollSnapshot| {
                    let next = is_scrolled(snapshot.offset);
                    if last.replace(next) != next {
                        scrolled.set(next);
                    }
                })
                .map_err(|e| warn!("Navbar scroll tracking disabled: {}", e))
                .ok();
                move || drop(subscription)
            },
            (),
        );
    }
    *scrolled
}

/// Id of the section currently in view, for navigation highlighting.
#[hook]
pub fn use_active_section(sections: Vec<String>) -> String {
    let initial = sections.first().cloned().unwrap_or_default();
    let active = use_state(|| initial);
    {
        let active = active.clone();
        use_effect_with_deps(
            move |sections: &Vec<String>| {
                let tracker = Rc::new(RefCell::new(ActiveSectionTracker::new(sections.clone())));
                let subscription = scroll_source::subscribe(move |_: &ScrollSnapshot| {
                    let mut tracker = tracker.borrow_mut();
                    if tracker.update(element_top) {
                        debug!("Active section: {}", tracker.active());
                        active.set(tracker.active().to_string());
                    }
                })
                .map_err(|e| warn!("Active section tracking disabled: {}", e))
                .ok();
                move || drop(subscription)
            },
            sections,
        );
    }
    (*active).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<String> {
        ["home", "studio", "portfolio", "contact"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Page layout in document coordinates, viewed from `scroll_y`.
    fn layout(scroll_y: f64) -> impl Fn(&str) -> Option<f64> {
        move |id: &str| {
            let top = match id {
                "home" => 0.0,
                "studio" => 1_200.0,
                "portfolio" => 2_400.0,
                "contact" => 3_600.0,
                _ => return None,
            };
            Some(top - scroll_y)
        }
    }

    #[test]
    fn scrolled_flag_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(900.0));
    }

    #[test]
    fn picks_section_inside_band() {
        let ids = sections();
        assert_eq!(find_active(&ids, SECTION_BAND, layout(1_100.0)), Some("studio"));
        assert_eq!(find_active(&ids, SECTION_BAND, layout(0.0)), Some("home"));
    }

    #[test]
    fn declared_order_wins_when_two_match() {
        let ids = sections();
        let tops = |id: &str| match id {
            "studio" => Some(-250.0),
            "portfolio" => Some(200.0),
            _ => None,
        };
        assert_eq!(find_active(&ids, SECTION_BAND, tops), Some("studio"));
    }

    #[test]
    fn band_edges_are_inclusive() {
        let ids = sections();
        assert_eq!(find_active(&ids, SECTION_BAND, |id| (id == "contact").then_some(300.0)), Some("contact"));
        assert_eq!(find_active(&ids, SECTION_BAND, |id| (id == "contact").then_some(-300.0)), Some("contact"));
        assert_eq!(find_active(&ids, SECTION_BAND, |id| (id == "contact").then_some(300.5)), None);
    }

    #[test]
    fn tracker_keeps_previous_when_nothing_matches() {
        let mut tracker = ActiveSectionTracker::new(sections());
        assert_eq!(tracker.active(), "home");

        assert!(tracker.update(layout(1_100.0)));
        assert_eq!(tracker.active(), "studio");

        // halfway between studio and portfolio, nothing inside the band
        assert!(!tracker.update(layout(1_800.0)));
        assert_eq!(tracker.active(), "studio");

        assert!(!tracker.update(|_| None));
        assert_eq!(tracker.active(), "studio");
    }

    #[test]
    fn tracker_reports_no_change_for_same_section() {
        let mut tracker = ActiveSectionTracker::new(sections());
        assert!(tracker.update(layout(3_500.0)));
        assert!(!tracker.update(layout(3_550.0)));
        assert_eq!(tracker.active(), "contact");
    }
}
