use crate::dashboards::policies::api::{self, PolicyData};
use crate::layout::dashboard_context::use_dashboard_context;
use crate::shared::components::bar_chart::{BarChart, BarPoint};
use crate::shared::components::filter_bar::FilterBar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::format::format_thousands;
use contracts::dashboards::policies::{PolicyImpactCityRow, PolicyStats};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn PoliciesPage() -> impl IntoView {
    let ctx = use_dashboard_context();
    let data = RwSignal::new(None::<PolicyData>);
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        let filters = ctx.filters.get();
        let _ = reload.get();
        let generation = ctx.fetch_generation();
        loading.set(true);
        data.set(None);

        spawn_local(async move {
            let loaded = api::load_policies(&filters).await;
            if !ctx.is_current(generation) {
                return;
            }
            data.set(Some(loaded));
            loading.set(false);
        });
    });

    let stats = Signal::derive(move || {
        data.get()
            .map(|d| PolicyStats::from_rows(&d.distribution, &d.impact_trend))
    });

    let total_policies =
        Signal::derive(move || stats.get().map(|s| format_thousands(s.total_policies)));
    let most_common = Signal::derive(move || {
        stats
            .get()
            .map(|s| s.most_common_type.unwrap_or_else(|| "—".to_string()))
    });
    let average_impact =
        Signal::derive(move || stats.get().map(|s| format!("{:.2}", s.average_impact)));
    let highest_impact = Signal::derive(move || {
        stats.get().map(|s| {
            s.highest_impact
                .map(|v| format!("{:.2}", v))
                .unwrap_or_else(|| "—".to_string())
        })
    });

    let distribution_points = Signal::derive(move || {
        data.get()
            .map(|d| {
                d.distribution
                    .into_iter()
                    .map(|row| {
                        let display = format_thousands(row.count);
                        BarPoint::new(row.policy_type, row.count as f64, display)
                    })
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    });

    view! {
        <div class="page page--policies">
            <PageHeader
                title="Policy Impact"
                subtitle="Government policy distribution and impact on businesses"
                loading=loading
                on_refresh=Callback::new(move |_| reload.update(|n| *n += 1))
            />

            <FilterBar show_policy_type=true />

            <div class="stat-grid">
                <StatCard
                    label="Total Policies"
                    value=total_policies
                    description="Distinct policy types in view"
                />
                <StatCard
                    label="Most Common Type"
                    value=most_common
                    description="By row count"
                />
                <StatCard
                    label="Average Impact"
                    value=average_impact
                    description="Mean score, -2 to 3 scale"
                />
                <StatCard
                    label="Highest Impact"
                    value=highest_impact
                    description="Best yearly average"
                />
            </div>

            <section class="panel">
                <h2 class="panel__title">"Policy Type Distribution"</h2>
                <BarChart
                    points=distribution_points
                    empty_message="No policy data for these filters"
                />
            </section>

            <div class="panel-grid">
                <section class="panel">
                    <h2 class="panel__title">"Cities With Strongest Impact"</h2>
                    {move || {
                        data.get()
                            .map(|d| view! { <ImpactCityTable rows=d.top_cities /> })
                    }}
                </section>
                <section class="panel">
                    <h2 class="panel__title">"Cities With Weakest Impact"</h2>
                    {move || {
                        data.get()
                            .map(|d| view! { <ImpactCityTable rows=d.bottom_cities /> })
                    }}
                </section>
            </div>
        </div>
    }
}

#[component]
fn ImpactCityTable(rows: Vec<PolicyImpactCityRow>) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="panel__empty">"No city impact data."</p> }.into_any();
    }

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"City"</th>
                    <th>"Impact Score"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr>
                                <td>{row.city}</td>
                                <td>{format!("{:.2}", row.impact_score)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
