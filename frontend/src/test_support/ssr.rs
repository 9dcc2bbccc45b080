use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Renders inside a server-side router so `<A>` links and navigation hooks
/// resolve outside the browser.
pub fn render_with_router<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    use leptos_router::{Router, RouterIntegrationContext, ServerIntegration};
    render_to_string(move || {
        provide_context(RouterIntegrationContext::new(ServerIntegration {
            path: "http://localhost/".to_string(),
        }));
        view! { <Router>{view().into_view()}</Router> }
    })
}
