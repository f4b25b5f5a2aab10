use crate::dashboards::revenue::api::{self, RevenueData};
use crate::layout::dashboard_context::use_dashboard_context;
use crate::shared::components::filter_bar::FilterBar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::format::format_money;
use contracts::dashboards::revenue::RevenueStats;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RevenuePage() -> impl IntoView {
    let ctx = use_dashboard_context();
    let data = RwSignal::new(None::<RevenueData>);
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        let filters = ctx.filters.get();
        let _ = reload.get();
        let generation = ctx.fetch_generation();
        loading.set(true);
        data.set(None);

        spawn_local(async move {
            let loaded = api::load_revenue(&filters).await;
            if !ctx.is_current(generation) {
                return;
            }
            data.set(Some(loaded));
            loading.set(false);
        });
    });

    let stats = Signal::derive(move || data.get().map(|d| RevenueStats::from_rows(&d.kpi)));

    let average_revenue =
        Signal::derive(move || stats.get().map(|s| format_money(s.average_revenue)));
    let highest_revenue = Signal::derive(move || {
        stats
            .get()
            .map(|s| s.highest_revenue.map(format_money).unwrap_or_else(|| "—".to_string()))
    });
    let lowest_revenue = Signal::derive(move || {
        stats
            .get()
            .map(|s| s.lowest_revenue.map(format_money).unwrap_or_else(|| "—".to_string()))
    });
    let years_covered = Signal::derive(move || {
        data.get()
            .map(|d| d.kpi.first().map(|r| r.years.to_string()).unwrap_or_else(|| "0".to_string()))
    });

    view! {
        <div class="page page--revenue">
            <PageHeader
                title="Revenue by Business Type"
                subtitle="Yearly revenue aggregates and per-city extremes"
                loading=loading
                on_refresh=Callback::new(move |_| reload.update(|n| *n += 1))
            />

            <FilterBar />

            <div class="stat-grid">
                <StatCard
                    label="Average Revenue"
                    value=average_revenue
                    description="Mean of yearly averages (CAD)"
                />
                <StatCard
                    label="Highest Revenue"
                    value=highest_revenue
                    description="Best year in range (CAD)"
                />
                <StatCard
                    label="Lowest Revenue"
                    value=lowest_revenue
                    description="Worst year in range (CAD)"
                />
                <StatCard label="Years Covered" value=years_covered description="Distinct years" />
            </div>

            <section class="panel">
                <h2 class="panel__title">"Revenue Extremes by City"</h2>
                {move || {
                    match data.get() {
                        None => view! { <p class="panel__empty">"Loading city revenue…"</p> }
                            .into_any(),
                        Some(d) if d.cities.is_empty() => {
                            view! {
                                <p class="panel__empty">
                                    "No city revenue data for these filters."
                                </p>
                            }
                                .into_any()
                        }
                        Some(d) => {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"City"</th>
                                            <th>"Best Year"</th>
                                            <th>"Max Revenue"</th>
                                            <th>"Worst Year"</th>
                                            <th>"Min Revenue"</th>
                                            <th>"Average"</th>
                                            <th>"Policy Impact (Best)"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {d
                                            .cities
                                            .into_iter()
                                            .map(|row| {
                                                view! {
                                                    <tr>
                                                        <td>{row.city}</td>
                                                        <td>{row.max_year}</td>
                                                        <td>{format_money(row.max_revenue)}</td>
                                                        <td>{row.min_year}</td>
                                                        <td>{format_money(row.min_revenue)}</td>
                                                        <td>{format_money(row.average_revenue)}</td>
                                                        <td>
                                                            {row
                                                                .max_policy_impact
                                                                .unwrap_or_else(|| "—".to_string())}
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        }
                    }
                }}
            </section>
        </div>
    }
}
