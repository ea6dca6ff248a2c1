//! Route guard rendering children only for signed-in users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each mounted gate holds its own subscription to the identity stream. Until
//! the first emission it shows a blocking loader; with no session it issues
//! one client-side redirect to `/` and renders nothing. The subscription is
//! released on unmount.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading::LoadingScreen;
use crate::net::identity::Identity;
use crate::state::auth::{AuthGate as GateMachine, GateView};

/// Protect `children` behind an active session.
#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let identity = expect_context::<Identity>();
    let navigate = use_navigate();

    let gate = RwSignal::new(GateMachine::default());
    let redirect = RwSignal::new(None::<&'static str>);

    let subscription = identity.hub().subscribe(move |session| {
        let target = gate.try_update(|g| g.observe(session.as_ref())).flatten();
        if let Some(target) = target {
            let _ = redirect.try_set(Some(target));
        }
    });
    on_cleanup(move || subscription.unsubscribe());

    Effect::new(move || {
        if let Some(target) = redirect.get() {
            log::debug!("auth gate: no session, redirecting to {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match gate.with(GateMachine::view) {
        GateView::Loading => view! { <LoadingScreen message="Checking your session..."/> }.into_any(),
        GateView::Content => children().into_any(),
        GateView::Empty => ().into_any(),
    }
}
