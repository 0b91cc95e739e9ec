//! One window `scroll` listener shared by every component that cares about
//! the scroll position. Events are folded into at most one publication per
//! animation frame.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnapshot {
    pub offset: f64,
}

impl ScrollSnapshot {
    pub fn read() -> Option<Self> {
        let offset = web_sys::window()?.scroll_y().ok()?;
        Some(Self { offset })
    }
}

/// Ordered list of callbacks keyed by a subscription id.
pub struct Subscribers<T> {
    next_id: u64,
    entries: Vec<(u64, Rc<dyn Fn(&T)>)>,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> Subscribers<T> {
    pub fn add(&mut self, callback: Rc<dyn Fn(&T)>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cloned so callbacks may subscribe or unsubscribe while being notified.
    pub fn snapshot(&self) -> Vec<Rc<dyn Fn(&T)>> {
        self.entries.iter().map(|(_, cb)| Rc::clone(cb)).collect()
    }
}

struct WindowListener {
    callback: Closure<dyn FnMut()>,
}

#[derive(Default)]
struct Hub {
    subscribers: Subscribers<ScrollSnapshot>,
    listener: Option<WindowListener>,
    pending: Option<AnimationFrame>,
}

thread_local! {
    static HUB: RefCell<Hub> = RefCell::new(Hub::default());
}

/// Keeps a subscriber registered. Dropping it unsubscribes.
pub struct ScrollSubscription {
    id: u64,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let detached = HUB.with(|hub| {
            let mut hub = hub.borrow_mut();
            hub.subscribers.remove(self.id);
            if hub.subscribers.is_empty() {
                hub.pending.take();
                hub.listener.take()
            } else {
                None
            }
        });
        if let Some(listener) = detached {
            detach(listener);
        }
    }
}

/// Registers `callback` and immediately hands it the current position.
pub fn subscribe<F>(callback: F) -> Result<ScrollSubscription, SiteError>
where
    F: Fn(&ScrollSnapshot) + 'static,
{
    let callback: Rc<dyn Fn(&ScrollSnapshot)> = Rc::new(callback);
    let needs_listener = HUB.with(|hub| hub.borrow().listener.is_none());
    if needs_listener {
        let listener = attach()?;
        HUB.with(|hub| hub.borrow_mut().listener = Some(listener));
    }
    let id = HUB.with(|hub| hub.borrow_mut().subscribers.add(Rc::clone(&callback)));

    // Initial check
    if let Some(snapshot) = ScrollSnapshot::read() {
        callback(&snapshot);
    }
    Ok(ScrollSubscription { id })
}

pub fn subscriber_count() -> usize {
    HUB.with(|hub| hub.borrow().subscribers.len())
}

pub fn is_listening() -> bool {
    HUB.with(|hub| hub.borrow().listener.is_some())
}

fn attach() -> Result<WindowListener, SiteError> {
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    let callback = Closure::wrap(Box::new(move || {
        schedule_publish();
    }) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        .map_err(|e| SiteError::from_js(SiteError::Listener, e))?;
    debug!("Scroll listener attached");
    Ok(WindowListener { callback })
}

fn detach(listener: WindowListener) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window
            .remove_event_listener_with_callback("scroll", listener.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove scroll listener: {:?}", e);
        }
    }
    debug!("Scroll listener detached");
}

fn schedule_publish() {
    let already_pending = HUB.with(|hub| hub.borrow().pending.is_some());
    if already_pending {
        return;
    }
    let frame = request_animation_frame(|_| publish());
    HUB.with(|hub| hub.borrow_mut().pending = Some(frame));
}

fn publish() {
    let callbacks = HUB.with(|hub| {
        let mut hub = hub.borrow_mut();
        hub.pending.take();
        hub.subscribers.snapshot()
    });
    let Some(snapshot) = ScrollSnapshot::read() else {
        return;
    };
    for callback in callbacks {
        callback(&snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn every_subscriber_sees_each_publication() {
        let mut subs = Subscribers::<ScrollSnapshot>::default();
        let a = Rc::new(Cell::new(0.0));
        let b = Rc::new(Cell::new(0.0));
        {
            let a = Rc::clone(&a);
            subs.add(Rc::new(move |s: &ScrollSnapshot| a.set(s.offset)));
        }
        {
            let b = Rc::clone(&b);
            subs.add(Rc::new(move |s: &ScrollSnapshot| b.set(s.offset * 2.0)));
        }
        for cb in subs.snapshot() {
            cb(&ScrollSnapshot { offset: 120.0 });
        }
        assert_eq!(a.get(), 120.0);
        assert_eq!(b.get(), 240.0);
    }

    #[test]
    fn removed_subscriber_is_not_called() {
        let mut subs = Subscribers::<ScrollSnapshot>::default();
        let hits = Rc::new(Cell::new(0));
        let id = {
            let hits = Rc::clone(&hits);
            subs.add(Rc::new(move |_: &ScrollSnapshot| hits.set(hits.get() + 1)))
        };
        assert!(subs.remove(id));
        assert!(!subs.remove(id));
        assert!(subs.is_empty());
        for cb in subs.snapshot() {
            cb(&ScrollSnapshot { offset: 0.0 });
        }
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut subs = Subscribers::<ScrollSnapshot>::default();
        let first = subs.add(Rc::new(|_: &ScrollSnapshot| {}));
        subs.remove(first);
        let second = subs.add(Rc::new(|_: &ScrollSnapshot| {}));
        assert_ne!(first, second);
        assert_eq!(subs.len(), 1);
    }
}
