use crate::layout::dashboard_context::DashboardContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One dashboard session: the filter store and its fetch-generation
    // counter live in context for every page.
    provide_context(DashboardContext::new());

    view! {
        <AppRoutes />
    }
}
