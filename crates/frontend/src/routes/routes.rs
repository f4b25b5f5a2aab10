use crate::dashboards::costs::ui::CostsPage;
use crate::dashboards::overview::ui::OverviewPage;
use crate::dashboards::policies::ui::PoliciesPage;
use crate::dashboards::predictions::ui::PredictionsPage;
use crate::dashboards::revenue::ui::RevenuePage;
use crate::dashboards::wages::ui::WagesPage;
use crate::layout::dashboard_context::use_dashboard_context;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_dashboard_context();

    // Pick up filters from the URL once, then mirror changes back into it.
    ctx.init_router_integration();

    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="page-not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=OverviewPage />
                    <Route path=path!("/costs") view=CostsPage />
                    <Route path=path!("/wages") view=WagesPage />
                    <Route path=path!("/revenue") view=RevenuePage />
                    <Route path=path!("/policies") view=PoliciesPage />
                    <Route path=path!("/predictions") view=PredictionsPage />
                </Routes>
            </Shell>
        </Router>
    }
}
