//! Route guard component for protected pages.

#[cfg(test)]
#[path = "require_auth_test.rs"]
mod require_auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::i18n::I18n;
use crate::state::session::Session;
use crate::util::auth::{GuardView, RouteGuard};

/// Renders `children` only for an authenticated session.
///
/// Shows a neutral placeholder while the session restores and redirects to
/// the sign-in route once per anonymous episode. The effect re-runs on every
/// session change, carrying the guard's one-shot flag between runs.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let i18n = expect_context::<I18n>();
    let navigate = use_navigate();
    let view_state = RwSignal::new(GuardView::Loading);

    Effect::new(move |guard: Option<RouteGuard>| {
        let mut guard = guard.unwrap_or_default();
        let state = session.state();
        let next = guard.evaluate(&state, &|path: &str| navigate(path, NavigateOptions::default()));
        publish_view(view_state, next);
        guard
    });

    view! {
        {move || match view_state.get() {
            GuardView::Loading => {
                view! {
                    <div class="route-guard__loading" aria-busy="true">
                        {i18n.t("guard.loading")}
                    </div>
                }
                    .into_any()
            }
            GuardView::Content => children().into_any(),
            GuardView::Empty => ().into_any(),
        }}
    }
}

/// Store `next` only when it differs from the current view.
///
/// An unchanged decision must not notify the render closure, or `children()`
/// is rebuilt and the protected subtree loses its local state.
fn publish_view(view_state: RwSignal<GuardView>, next: GuardView) -> bool {
    if view_state.get_untracked() == next {
        return false;
    }
    view_state.set(next);
    true
}
