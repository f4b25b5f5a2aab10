use leptos::prelude::*;

/// Page title block with the manual refresh affordance. Refreshing is the
/// only retry mechanism; there is no automated retry in the fetch layer.
#[component]
pub fn PageHeader(
    title: &'static str,
    subtitle: &'static str,
    #[prop(into)] loading: Signal<bool>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                <p class="page-header__subtitle">{subtitle}</p>
            </div>
            <button
                class="button button--outline"
                disabled=move || loading.get()
                on:click=move |_| on_refresh.run(())
            >
                {move || if loading.get() { "Refreshing…" } else { "Refresh" }}
            </button>
        </div>
    }
}
