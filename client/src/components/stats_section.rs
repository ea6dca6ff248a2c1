//! Landing-page stat counters with a one-shot count-up animation.
//!
//! The section watches its own root element with an `IntersectionObserver`.
//! The first time it scrolls into view the counters run once from zero to
//! their targets; later intersections are ignored. The observer and the frame
//! timer are owned by effects, so unmounting the section drops both.

use leptos::prelude::*;

use crate::util::count_up::{CountUp, format_stat};

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

/// One counter on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub target: u64,
    pub suffix: &'static str,
}

/// Figures shown on the landing page.
pub const LANDING_STATS: [Stat; 4] = [
    Stat { label: "Sprints planned", target: 12_500, suffix: "+" },
    Stat { label: "Features shipped", target: 48_000, suffix: "+" },
    Stat { label: "Teams onboard", target: 850, suffix: "" },
    Stat { label: "Planning time saved", target: 70, suffix: "%" },
];

/// Row of animated stat counters.
#[component]
pub fn StatsSection(#[prop(default = LANDING_STATS.to_vec())] stats: Vec<Stat>) -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let counter = RwSignal::new(CountUp::new(stats.iter().map(|s| s.target).collect()));

    #[cfg(feature = "hydrate")]
    {
        observe_first_intersection(section_ref, counter);

        let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        Effect::new(move || {
            if !counter.with(CountUp::is_running) {
                ticker.borrow_mut().take();
                return;
            }
            if ticker.borrow().is_some() {
                return;
            }
            let interval = Interval::new(crate::util::count_up::frame_interval_ms(), move || {
                counter.try_update(|c| {
                    c.tick();
                });
            });
            *ticker.borrow_mut() = Some(interval);
        });
    }

    view! {
        <section class="stats" node_ref=section_ref>
            {stats
                .into_iter()
                .enumerate()
                .map(|(index, stat)| {
                    let display = move || format_stat(counter.with(|c| c.value(index)), stat.suffix);
                    view! {
                        <div class="stats__item">
                            <span class="stats__value">{display}</span>
                            <span class="stats__label">{stat.label}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}

/// Observer plus the JS callback it calls; dropping it disconnects both.
#[cfg(feature = "hydrate")]
struct VisibilityWatch {
    observer: web_sys::IntersectionObserver,
    _callback: wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(feature = "hydrate")]
impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Trigger `counter` the first time the section enters the viewport.
///
/// The watch lives inside the effect, so unmounting the section disconnects
/// the observer and frees the callback even if it never fired.
#[cfg(feature = "hydrate")]
fn observe_first_intersection(section_ref: NodeRef<leptos::html::Section>, counter: RwSignal<CountUp>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let watch: Rc<RefCell<Option<VisibilityWatch>>> = Rc::new(RefCell::new(None));
    Effect::new(move || {
        let Some(section) = section_ref.get() else {
            watch.borrow_mut().take();
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let visible = entries
                    .iter()
                    .any(|entry| entry.unchecked_into::<web_sys::IntersectionObserverEntry>().is_intersecting());
                if !visible {
                    return;
                }
                let started = counter.try_update(CountUp::trigger).unwrap_or(false);
                if started {
                    log::debug!("stats section visible, starting count-up");
                }
                observer.disconnect();
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(0.3));
        match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&section);
                *watch.borrow_mut() = Some(VisibilityWatch { observer, _callback: callback });
            }
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {e:?}");
                watch.borrow_mut().take();
            }
        }
    });
}
