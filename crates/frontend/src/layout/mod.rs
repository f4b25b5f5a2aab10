pub mod dashboard_context;
pub mod sidebar;

use leptos::prelude::*;
use sidebar::Sidebar;

/// Application shell: navigation sidebar on the left, the active dashboard
/// page in the center.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |        Dashboard page        |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Sidebar />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
