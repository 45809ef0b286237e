//! Reveal-on-view via `IntersectionObserver`
//!
//! Elements matching the configured selector are revealed once by adding the
//! configured class. Browsers without `IntersectionObserver` get everything
//! revealed immediately.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Reflect};
use lib_core::error::{PresentationError, Result};
use lib_core::reveal::{
    observer_thresholds, visible_share, RevealSession, RevealSet, RevealState, RevealSurface,
    ViewportWatch,
};
use lib_core::PresentationConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;
type BrowserSession<W> = RevealSession<Element, W, ClassSurface>;

/// [`ViewportWatch`] backed by one `IntersectionObserver`
pub struct IntersectionWatch {
    observer: IntersectionObserver,
}

impl ViewportWatch<Element> for IntersectionWatch {
    fn watch(&mut self, target: &Element, _threshold: f64) -> Result<()> {
        // Thresholds are fixed when the observer is constructed
        self.observer.observe(target);
        Ok(())
    }

    fn unwatch(&mut self, target: &Element) {
        self.observer.unobserve(target);
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

/// Stand-in watcher for runtimes without `IntersectionObserver`
pub struct NoViewport;

impl ViewportWatch<Element> for NoViewport {
    fn watch(&mut self, _target: &Element, _threshold: f64) -> Result<()> {
        Err(PresentationError::Environment(
            "IntersectionObserver unsupported".to_string(),
        ))
    }

    fn unwatch(&mut self, _target: &Element) {}

    fn disconnect(&mut self) {}
}

/// Reveals an element by adding a class
pub struct ClassSurface {
    class: String,
}

impl RevealSurface<Element> for ClassSurface {
    fn show(&mut self, target: &Element) -> Result<()> {
        target
            .class_list()
            .add_1(&self.class)
            .map_err(|err| PresentationError::dom("classList.add failed", err))
    }
}

enum Active {
    Observed {
        session: Rc<RefCell<Option<BrowserSession<IntersectionWatch>>>>,
        _callback: ObserverCallback,
    },
    Immediate,
    Inert,
}

/// Keeps the observer alive; [`RevealHandle::teardown`] stops all watches.
pub struct RevealHandle {
    active: Active,
}

impl RevealHandle {
    pub fn teardown(&self) {
        if let Active::Observed { session, .. } = &self.active {
            if let Some(session) = session.borrow_mut().as_mut() {
                session.teardown();
            }
        }
    }

    pub fn is_observing(&self) -> bool {
        match &self.active {
            Active::Observed { session, .. } => session
                .borrow()
                .as_ref()
                .is_some_and(|session| session.is_active()),
            Active::Immediate | Active::Inert => false,
        }
    }
}

fn supports_intersection_observer() -> bool {
    window()
        .map(|window| {
            Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
        })
        .unwrap_or(false)
}

fn query_targets(selector: &str) -> Vec<Element> {
    let Some(document) = window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(err) => {
            log::warn!("Invalid reveal selector '{}': {:?}", selector, err);
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Start revealing every element matching `config.reveal_selector`.
pub fn observe_reveal_targets(config: &PresentationConfig) -> RevealHandle {
    let targets = query_targets(&config.reveal_selector);
    if targets.is_empty() {
        log::debug!("No reveal targets on the page");
        return RevealHandle {
            active: Active::Inert,
        };
    }

    let set = RevealSet::from_states(
        targets.into_iter().map(|element| {
            let state = if element.class_list().contains(&config.reveal_class) {
                RevealState::Shown
            } else {
                RevealState::Pending
            };
            (element, state)
        }),
        config.reveal_threshold,
    );
    let surface = ClassSurface {
        class: config.reveal_class.clone(),
    };

    if !supports_intersection_observer() {
        log::info!("IntersectionObserver unavailable, revealing all content");
        BrowserSession::<NoViewport>::start_immediate(set, surface);
        return RevealHandle {
            active: Active::Immediate,
        };
    }

    let session: Rc<RefCell<Option<BrowserSession<IntersectionWatch>>>> =
        Rc::new(RefCell::new(None));

    let callback: ObserverCallback = Closure::new({
        let session = Rc::clone(&session);
        move |entries: Array, _observer: IntersectionObserver| {
            let mut session = session.borrow_mut();
            let Some(session) = session.as_mut() else {
                return;
            };
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let share = if entry.is_intersecting() {
                    let viewport_height = entry
                        .root_bounds()
                        .map(|bounds| bounds.height())
                        .unwrap_or(0.0);
                    visible_share(
                        entry.intersection_ratio(),
                        entry.intersection_rect().height(),
                        viewport_height,
                    )
                } else {
                    0.0
                };
                session.on_crossing(&entry.target(), share);
            }
        }
    });

    let options = IntersectionObserverInit::new();
    let thresholds: Array = observer_thresholds(config.reveal_threshold)
        .into_iter()
        .map(JsValue::from_f64)
        .collect();
    options.set_threshold(&thresholds);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            let watch = IntersectionWatch { observer };
            *session.borrow_mut() = Some(RevealSession::start(set, watch, surface));
            RevealHandle {
                active: Active::Observed {
                    session,
                    _callback: callback,
                },
            }
        }
        Err(err) => {
            log::warn!("IntersectionObserver construction failed, revealing all: {:?}", err);
            BrowserSession::<NoViewport>::start_immediate(set, surface);
            RevealHandle {
                active: Active::Immediate,
            }
        }
    }
}
