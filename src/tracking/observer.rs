use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollToOptions, Window,
};
use yew::prelude::*;

use crate::config::TrackerSettings;
use crate::tracking::active_section::{ActiveSection, TieBreakPolicy, VisibilityBatch, VisibilitySample};

/// Keeps an observation alive. Teardown runs once, on `unsubscribe` or drop.
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

/// Anything that can report how much of each section is on screen.
pub trait VisibilitySource {
    /// `None` means nothing could be observed; the tracker then stays on its default.
    fn subscribe(&self, section_ids: &[String], on_batch: Callback<VisibilityBatch>) -> Option<Subscription>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionObserverSource {
    pub root_margin: String,
    pub thresholds: Vec<f64>,
}

impl IntersectionObserverSource {
    pub fn from_settings(settings: &TrackerSettings) -> Self {
        Self {
            root_margin: settings.root_margin.clone(),
            thresholds: settings.thresholds.clone(),
        }
    }
}

fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

impl VisibilitySource for IntersectionObserverSource {
    fn subscribe(&self, section_ids: &[String], on_batch: Callback<VisibilityBatch>) -> Option<Subscription> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let elements: Vec<_> = section_ids
            .iter()
            .filter_map(|id| document.get_element_by_id(id))
            .collect();
        if elements.is_empty() {
            log::debug!("no section elements found, active section stays on default");
            return None;
        }

        let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
            let samples = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| {
                    let rect = entry.bounding_client_rect();
                    VisibilitySample {
                        section_id: entry.target().id(),
                        intersection_ratio: entry.intersection_ratio(),
                        is_intersecting: entry.is_intersecting(),
                        top: rect.top(),
                        bottom: rect.bottom(),
                    }
                })
                .collect();
            on_batch.emit(VisibilityBatch {
                viewport_height: viewport_height(&window),
                samples,
            });
        });

        let thresholds = Array::new();
        for threshold in &self.thresholds {
            thresholds.push(&JsValue::from_f64(*threshold));
        }
        let init = IntersectionObserverInit::new();
        init.set_root_margin(&self.root_margin);
        init.set_threshold(&JsValue::from(thresholds));

        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("could not create intersection observer: {:?}", err);
                return None;
            }
        };
        for element in &elements {
            observer.observe(element);
        }

        Some(Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}

/// Tracks which section is current. Starts on the first id and keeps the
/// last id while nothing is visible.
#[hook]
pub fn use_active_section<S>(
    source: S,
    section_ids: Vec<String>,
    policy: TieBreakPolicy,
    min_ratio: f64,
) -> String
where
    S: VisibilitySource + Clone + PartialEq + 'static,
{
    let state = {
        let section_ids = section_ids.clone();
        use_reducer_eq(move || ActiveSection::new(section_ids, policy, min_ratio))
    };

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |(source, section_ids): &(S, Vec<String>)| {
                let on_batch = Callback::from(move |batch: VisibilityBatch| dispatcher.dispatch(batch));
                let subscription = source.subscribe(section_ids, on_batch);
                move || drop(subscription)
            },
            (source, section_ids),
        );
    }

    state.active().to_string()
}

fn listen_window_scroll(on_scroll: impl Fn(&Window) + 'static) -> Option<Subscription> {
    let window = web_sys::window()?;
    on_scroll(&window);

    let target = window.clone();
    let callback = Closure::<dyn Fn()>::new(move || on_scroll(&target));
    if let Err(err) = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
        log::warn!("could not attach scroll listener: {:?}", err);
        return None;
    }

    Some(Subscription::new(move || {
        let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
    }))
}

/// True once the page is scrolled past `threshold` pixels.
#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold: &f64| {
                let threshold = *threshold;
                let listener = listen_window_scroll(move |window| {
                    scrolled.set(window.scroll_y().unwrap_or(0.0) > threshold);
                });
                move || drop(listener)
            },
            threshold,
        );
    }

    *scrolled
}

/// How far down the page the reader is, between 0 and 1.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[hook]
pub fn use_scroll_progress() -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let listener = listen_window_scroll(move |window| {
                    let scroll_height = window
                        .document()
                        .and_then(|d| d.document_element())
                        .map(|root| root.scroll_height() as f64)
                        .unwrap_or(0.0);
                    progress.set(scroll_progress(
                        window.scroll_y().unwrap_or(0.0),
                        scroll_height,
                        viewport_height(window),
                    ));
                });
                move || drop(listener)
            },
            (),
        );
    }

    *progress
}

/// Document offset that puts an element's top right under the fixed navbar.
pub fn scroll_target(element_top: f64, page_offset: f64, nav_height: f64) -> f64 {
    element_top + page_offset - nav_height
}

pub fn scroll_to_section(id: &str, nav_height: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        log::debug!("scroll target #{} not found", id);
        return;
    };

    let top = scroll_target(
        element.get_bounding_client_rect().top(),
        window.page_y_offset().unwrap_or(0.0),
        nav_height,
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn subscription_tears_down_exactly_once() {
        let calls = Rc::new(Cell::new(0));

        let counter = calls.clone();
        let sub = Subscription::new(move || counter.set(counter.get() + 1));
        sub.unsubscribe();
        assert_eq!(calls.get(), 1);

        let counter = calls.clone();
        drop(Subscription::new(move || counter.set(counter.get() + 1)));
        assert_eq!(calls.get(), 2);
    }

    #[derive(Clone, PartialEq)]
    struct ManualSource;

    impl VisibilitySource for ManualSource {
        fn subscribe(&self, section_ids: &[String], on_batch: Callback<VisibilityBatch>) -> Option<Subscription> {
            let second = section_ids.get(1)?.clone();
            on_batch.emit(VisibilityBatch {
                viewport_height: 800.0,
                samples: vec![VisibilitySample {
                    section_id: second,
                    intersection_ratio: 0.5,
                    is_intersecting: true,
                    top: 30.0,
                    bottom: 700.0,
                }],
            });
            Some(Subscription::new(|| ()))
        }
    }

    #[test]
    fn source_batches_drive_the_tracker() {
        let ids = vec!["home".to_string(), "story".to_string()];
        let tracker = Rc::new(RefCell::new(ActiveSection::new(
            ids.clone(),
            TieBreakPolicy::default(),
            0.0,
        )));

        let sink = tracker.clone();
        let sub = ManualSource.subscribe(&ids, Callback::from(move |batch: VisibilityBatch| {
            sink.borrow_mut().apply(&batch);
        }));
        assert!(sub.is_some());
        assert_eq!(tracker.borrow().active(), "story");

        assert!(ManualSource.subscribe(&ids[..1], Callback::noop()).is_none());
    }

    #[test]
    fn scroll_target_subtracts_nav_height() {
        assert_eq!(scroll_target(500.0, 1200.0, 80.0), 1620.0);
        assert_eq!(scroll_target(-300.0, 300.0, 80.0), -80.0);
    }

    #[test]
    fn scroll_progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(5000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }
}
