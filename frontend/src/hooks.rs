use chrono::{DateTime, Utc};
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::state::{CountUp, EntryLatch};

/// Watches one element and fires `on_enter` the first time enough of it is on screen.
/// Disconnects itself after that, and on drop.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn observe(element: &Element, threshold: f64, on_enter: Callback<()>) -> Result<Self, JsValue> {
        let mut latch = EntryLatch::new(threshold);
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            // Notifications already queued before disconnect() still arrive
            if latch.entered() {
                return;
            }
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                if latch.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                    observer.disconnect();
                    on_enter.emit(());
                    break;
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(VisibilityObserver { observer, _callback: callback })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// True once the element behind `node` has scrolled into view. Never goes back to false.
#[hook]
pub fn use_entered(node: NodeRef, threshold: f64) -> bool {
    let entered = use_state_eq(|| false);

    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |node| {
                let on_enter = Callback::from(move |_| entered.set(true));
                let observer = match node.cast::<Element>() {
                    Some(element) => match VisibilityObserver::observe(&element, threshold, on_enter.clone()) {
                        Ok(observer) => Some(observer),
                        Err(err) => {
                            warn!("Visibility observer unavailable, showing section right away: {:?}", err);
                            on_enter.emit(());
                            None
                        }
                    },
                    None => {
                        warn!("Animated section is not mounted, showing it right away");
                        on_enter.emit(());
                        None
                    }
                };
                move || drop(observer)
            },
            node,
        );
    }

    *entered
}

/// Current value of a count-up animation. Stays 0 until `active`, then climbs to the target
/// and stops its timer.
#[hook]
pub fn use_count_up(count: CountUp, active: bool) -> u64 {
    let value = use_state_eq(|| 0u64);
    let started_at = use_mut_ref(|| None::<DateTime<Utc>>);

    // Clock starts when the section enters, not on the first tick
    {
        let started_at = started_at.clone();
        use_effect_with_deps(
            move |active| {
                if *active {
                    started_at.borrow_mut().get_or_insert_with(Utc::now);
                }
                || ()
            },
            active,
        );
    }

    let running = active && !count.is_done(*value);
    let millis = if running { config::COUNT_UP_TICK_MS } else { 0 };

    {
        let value = value.clone();
        let started_at = started_at.clone();
        use_interval(
            move || {
                let now = Utc::now();
                let start = *started_at.borrow_mut().get_or_insert(now);
                let elapsed = (now - start).num_milliseconds().max(0) as f64;
                let next = count.advance(*value, elapsed);
                if count.is_done(next) {
                    debug!("Count-up reached {}", count.target);
                }
                value.set(next);
            },
            millis,
        );
    }

    if active { *value } else { 0 }
}
