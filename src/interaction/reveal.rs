use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// Feeds one intersection notification. `Visible` never goes back.
    pub fn observe(self, is_intersecting: bool, ratio: f64, threshold: f64) -> Self {
        match self {
            RevealState::Visible => RevealState::Visible,
            RevealState::Hidden if is_intersecting && ratio >= threshold => RevealState::Visible,
            RevealState::Hidden => RevealState::Hidden,
        }
    }

    pub fn is_visible(self) -> bool {
        self == RevealState::Visible
    }
}

/// An `IntersectionObserver` watching one element. Disconnects on drop.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    /// `on_change` receives `(is_intersecting, intersection_ratio)` for every entry.
    pub fn observe<F>(element: &Element, threshold: f64, mut on_change: F) -> Result<Self, SiteError>
    where
        F: FnMut(bool, f64) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_change(entry.is_intersecting(), entry.intersection_ratio());
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| SiteError::from_js(SiteError::Observer, e))?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::REVEAL_THRESHOLD;

    #[test]
    fn starts_hidden() {
        assert!(!RevealState::default().is_visible());
    }

    #[test]
    fn small_slivers_do_not_reveal() {
        let state = RevealState::Hidden
            .observe(true, 0.05, REVEAL_THRESHOLD)
            .observe(false, 0.0, REVEAL_THRESHOLD);
        assert_eq!(state, RevealState::Hidden);
    }

    #[test]
    fn reveals_at_threshold() {
        let state = RevealState::Hidden.observe(true, REVEAL_THRESHOLD, REVEAL_THRESHOLD);
        assert_eq!(state, RevealState::Visible);
    }

    #[test]
    fn stays_visible_after_leaving_viewport() {
        let state = RevealState::Hidden
            .observe(true, 0.4, REVEAL_THRESHOLD)
            .observe(false, 0.0, REVEAL_THRESHOLD)
            .observe(true, 0.01, REVEAL_THRESHOLD);
        assert!(state.is_visible());
    }
}
