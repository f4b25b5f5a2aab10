use crate::dashboards::overview::api;
use crate::layout::dashboard_context::use_dashboard_context;
use crate::shared::components::bar_chart::{BarChart, BarPoint};
use crate::shared::components::filter_bar::FilterBar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::format::{format_count, format_money, format_percent};
use contracts::dashboards::overview::DashboardSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn OverviewPage() -> impl IntoView {
    let ctx = use_dashboard_context();
    let data = RwSignal::new(None::<DashboardSummary>);
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        let filters = ctx.filters.get();
        let _ = reload.get();
        let generation = ctx.fetch_generation();
        loading.set(true);
        data.set(None);

        spawn_local(async move {
            let summary = api::load_summary(&filters).await;
            if !ctx.is_current(generation) {
                // Filters changed while we were in flight; a newer cycle owns
                // the signals now.
                return;
            }
            data.set(Some(summary));
            loading.set(false);
        });
    });

    let business_count =
        Signal::derive(move || data.get().map(|d| format_count(d.business_count)));
    let average_revenue =
        Signal::derive(move || data.get().map(|d| format_money(d.average_revenue)));
    let median_wage = Signal::derive(move || data.get().map(|d| format_money(d.median_wage)));
    let success_rate =
        Signal::derive(move || data.get().map(|d| format_percent(d.success_rate)));

    let trend_points = Signal::derive(move || {
        data.get()
            .map(|d| {
                d.open_close_trends
                    .into_iter()
                    .map(|row| {
                        BarPoint::new(
                            row.year.to_string(),
                            row.opened,
                            format!(
                                "{} opened / {} closed",
                                format_count(row.opened),
                                format_count(row.closed)
                            ),
                        )
                    })
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    });

    view! {
        <div class="page page--overview">
            <PageHeader
                title="Business Overview"
                subtitle="Key indicators for the selected market segment"
                loading=loading
                on_refresh=Callback::new(move |_| reload.update(|n| *n += 1))
            />

            <FilterBar />

            <div class="stat-grid">
                <StatCard
                    label="Businesses"
                    value=business_count
                    description="Average count in the filtered view"
                />
                <StatCard
                    label="Average Revenue"
                    value=average_revenue
                    description="CAD per year"
                />
                <StatCard label="Median Wage" value=median_wage description="CAD per year" />
                <StatCard
                    label="Success Rate"
                    value=success_rate
                    description="Openings that stayed open"
                />
            </div>

            <section class="panel">
                <h2 class="panel__title">"Openings and Closures by Year"</h2>
                <BarChart points=trend_points empty_message="No trend data for these filters" />
            </section>

            <section class="panel">
                <h2 class="panel__title">"Top Cities by Footfall"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"City"</th>
                            <th>"Year"</th>
                            <th>"Average footfall"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            data.get()
                                .map(|d| {
                                    d.footfall_by_city
                                        .into_iter()
                                        .map(|row| {
                                            let year = row
                                                .year
                                                .map(|y| y.to_string())
                                                .unwrap_or_else(|| "—".to_string());
                                            view! {
                                                <tr>
                                                    <td>{row.city}</td>
                                                    <td>{year}</td>
                                                    <td>{format_count(row.footfall)}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                })
                        }}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
