use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config::{POPUP_ARM_DELAY_MS, POPUP_REVEAL_DELAY_MS};

/// Lifecycle of the self-promotion notice. `Dismissed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupPhase {
    #[default]
    Unarmed,
    ArmedHidden,
    ArmedVisible,
    Dismissed,
}

pub enum PopupAction {
    Arm,
    Reveal,
    Dismiss,
}

impl PopupPhase {
    pub fn apply(self, action: &PopupAction) -> Self {
        match (self, action) {
            (PopupPhase::Dismissed, _) => PopupPhase::Dismissed,
            (_, PopupAction::Dismiss) => PopupPhase::Dismissed,
            (PopupPhase::Unarmed, PopupAction::Arm) => PopupPhase::ArmedHidden,
            (PopupPhase::ArmedHidden, PopupAction::Reveal) => PopupPhase::ArmedVisible,
            (phase, _) => phase,
        }
    }

    /// Rendered at all.
    pub fn is_open(self) -> bool {
        matches!(self, PopupPhase::ArmedHidden | PopupPhase::ArmedVisible)
    }

    /// Rendered in its settled, fully opaque position.
    pub fn is_visible(self) -> bool {
        self == PopupPhase::ArmedVisible
    }
}

impl Reducible for PopupPhase {
    type Action = PopupAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(&action);
        if next == *self {
            self
        } else {
            debug!("Popup phase {:?} -> {:?}", *self, next);
            Rc::new(next)
        }
    }
}

/// Arms the popup after the configured delay and reveals it one beat later.
/// Both timers are cancelled when the owning component unmounts.
#[hook]
pub fn use_popup_phase() -> UseReducerHandle<PopupPhase> {
    let phase = use_reducer(PopupPhase::default);
    {
        let dispatcher = phase.dispatcher();
        use_effect_with_deps(
            move |_| {
                let reveal_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let arm_timer = {
                    let reveal_timer = Rc::clone(&reveal_timer);
                    Timeout::new(POPUP_ARM_DELAY_MS, move || {
                        dispatcher.dispatch(PopupAction::Arm);
                        let reveal = Timeout::new(POPUP_REVEAL_DELAY_MS, move || {
                            dispatcher.dispatch(PopupAction::Reveal);
                        });
                        *reveal_timer.borrow_mut() = Some(reveal);
                    })
                };
                move || {
                    drop(arm_timer);
                    reveal_timer.borrow_mut().take();
                }
            },
            (),
        );
    }
    phase
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: &[PopupAction]) -> Vec<PopupPhase> {
        let mut phase = PopupPhase::default();
        let mut seen = vec![phase];
        for action in actions {
            phase = phase.apply(action);
            seen.push(phase);
        }
        seen
    }

    #[test]
    fn timers_drive_unarmed_hidden_visible() {
        let seen = run(&[PopupAction::Arm, PopupAction::Reveal]);
        assert_eq!(
            seen,
            vec![
                PopupPhase::Unarmed,
                PopupPhase::ArmedHidden,
                PopupPhase::ArmedVisible
            ]
        );
        assert!(!seen[0].is_open());
        assert!(seen[1].is_open() && !seen[1].is_visible());
        assert!(seen[2].is_open() && seen[2].is_visible());
    }

    #[test]
    fn visible_is_stable_without_interaction() {
        let phase = PopupPhase::ArmedVisible
            .apply(&PopupAction::Arm)
            .apply(&PopupAction::Reveal);
        assert_eq!(phase, PopupPhase::ArmedVisible);
    }

    #[test]
    fn reveal_before_arm_is_ignored() {
        assert_eq!(
            PopupPhase::Unarmed.apply(&PopupAction::Reveal),
            PopupPhase::Unarmed
        );
    }

    #[test]
    fn dismiss_from_either_armed_phase_is_final() {
        for armed in [PopupPhase::ArmedHidden, PopupPhase::ArmedVisible] {
            let dismissed = armed.apply(&PopupAction::Dismiss);
            assert_eq!(dismissed, PopupPhase::Dismissed);
            assert!(!dismissed.is_open());
            // a late reveal timer cannot bring it back
            assert_eq!(dismissed.apply(&PopupAction::Reveal), PopupPhase::Dismissed);
            assert_eq!(dismissed.apply(&PopupAction::Arm), PopupPhase::Dismissed);
        }
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let phase = Rc::new(PopupPhase::Dismissed);
        let next = Rc::clone(&phase).reduce(PopupAction::Arm);
        assert!(Rc::ptr_eq(&phase, &next));
    }
}
