use leptos::prelude::*;
use leptos_router::components::A;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "Overview"),
    ("/costs", "Costs"),
    ("/wages", "Wages"),
    ("/revenue", "Revenue"),
    ("/policies", "Policies"),
    ("/predictions", "Predictions"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Business Insights"</div>
            <ul class="sidebar__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <li class="sidebar__item">
                                <A href=*href>{*label}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
