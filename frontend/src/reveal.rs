//! Set-once "has been seen" flags for the detail page sections.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

pub const VISIBLE_CLASS: &str = "reveal-in";
const THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Description,
    Benefits,
    Process,
    RelatedProjects,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Description,
        Section::Benefits,
        Section::Process,
        Section::RelatedProjects,
    ];

    fn index(self) -> usize {
        match self {
            Section::Hero => 0,
            Section::Description => 1,
            Section::Benefits => 2,
            Section::Process => 3,
            Section::RelatedProjects => 4,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: [bool; 5],
}

impl RevealState {
    /// Returns true if this call flipped the flag.
    pub fn on_intersection(&mut self, section: Section, is_intersecting: bool) -> bool {
        let flag = &mut self.revealed[section.index()];
        if is_intersecting && !*flag {
            *flag = true;
            return true;
        }
        false
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed[section.index()]
    }
}

pub enum RevealAction {
    Entered(Section),
}

impl Reducible for RevealState {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RevealAction::Entered(section) => {
                if self.is_revealed(section) {
                    return self;
                }
                let mut next = (*self).clone();
                next.on_intersection(section, true);
                Rc::new(next)
            }
        }
    }
}

pub fn reveal_classes(revealed: bool, hidden: &'static str) -> &'static str {
    if revealed {
        VISIBLE_CLASS
    } else {
        hidden
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// A live `IntersectionObserver` on one node. Dropping it disconnects the observer.
pub struct Observation {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Calls `on_enter` each time the node crosses the 10% visibility threshold.
pub fn observe_entry<F>(node: &NodeRef, on_enter: F) -> Option<Observation>
where
    F: Fn() + 'static,
{
    let element = node.cast::<Element>()?;
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_enter();
                }
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(&element);
    Some(Observation { observer, _callback: callback })
}

/// Watches each section node and reveals it the first time it enters the viewport.
/// Observers are disconnected when the component unmounts.
#[hook]
pub fn use_reveal(sections: Vec<(Section, NodeRef)>) -> UseReducerHandle<RevealState> {
    let state = use_reducer(RevealState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |sections: &Vec<(Section, NodeRef)>| {
                let observations: Vec<Observation> = sections
                    .iter()
                    .filter_map(|(section, node)| {
                        let dispatcher = dispatcher.clone();
                        let section = *section;
                        observe_entry(node, move || dispatcher.dispatch(RevealAction::Entered(section)))
                    })
                    .collect();
                if observations.len() < sections.len() {
                    log::warn!("Reveal: {} section(s) not observed", sections.len() - observations.len());
                }

                move || drop(observations)
            },
            sections,
        );
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sections_start_hidden() {
        let state = RevealState::default();
        assert!(Section::ALL.iter().all(|s| !state.is_revealed(*s)));
    }

    #[test]
    fn intersection_reveals_only_that_section() {
        let mut state = RevealState::default();
        assert!(state.on_intersection(Section::Benefits, true));
        for section in Section::ALL {
            assert_eq!(state.is_revealed(section), section == Section::Benefits);
        }
    }

    #[test]
    fn leaving_the_viewport_never_hides_again() {
        let mut state = RevealState::default();
        state.on_intersection(Section::Hero, true);
        let events = [false, true, false, false, true, false];
        for visible in events {
            state.on_intersection(Section::Hero, visible);
            assert!(state.is_revealed(Section::Hero));
        }
    }

    #[test]
    fn non_intersecting_events_do_nothing() {
        let mut state = RevealState::default();
        for section in Section::ALL {
            assert!(!state.on_intersection(section, false));
        }
        assert_eq!(state, RevealState::default());
    }

    #[test]
    fn second_entry_reports_no_change() {
        let mut state = RevealState::default();
        assert!(state.on_intersection(Section::Process, true));
        assert!(!state.on_intersection(Section::Process, true));
    }

    #[test]
    fn reducer_is_monotonic_and_reuses_unchanged_state() {
        let state = Rc::new(RevealState::default());
        let state = state.reduce(RevealAction::Entered(Section::Description));
        assert!(state.is_revealed(Section::Description));

        let same = state.clone().reduce(RevealAction::Entered(Section::Description));
        assert!(Rc::ptr_eq(&state, &same));

        let state = same.reduce(RevealAction::Entered(Section::RelatedProjects));
        assert!(state.is_revealed(Section::Description));
        assert!(state.is_revealed(Section::RelatedProjects));
    }

    #[test]
    fn classes_follow_the_flag() {
        assert_eq!(reveal_classes(true, "reveal-up"), VISIBLE_CLASS);
        assert_eq!(reveal_classes(false, "reveal-left"), "reveal-left");
    }
}
