use crate::dashboards::wages::api;
use crate::layout::dashboard_context::use_dashboard_context;
use crate::shared::components::bar_chart::{BarChart, BarPoint};
use crate::shared::components::filter_bar::FilterBar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::fetch::or_default;
use crate::shared::format::{format_money, format_thousands};
use contracts::dashboards::wages::{WageStats, WageTrendRow};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn WagesPage() -> impl IntoView {
    let ctx = use_dashboard_context();
    let rows = RwSignal::new(None::<Vec<WageTrendRow>>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        let filters = ctx.filters.get();
        let _ = reload.get();
        let generation = ctx.fetch_generation();
        loading.set(true);
        error.set(None);
        rows.set(None);

        spawn_local(async move {
            let result = api::load_wage_trends(&filters).await;
            if !ctx.is_current(generation) {
                return;
            }
            if let Err(err) = &result {
                error.set(Some(err.clone()));
            }
            rows.set(Some(or_default(result, "wage-trends")));
            loading.set(false);
        });
    });

    let stats = Signal::derive(move || rows.get().map(|r| WageStats::from_rows(&r)));

    let average_wage = Signal::derive(move || stats.get().map(|s| format_money(s.average_wage)));
    let highest_wage = Signal::derive(move || {
        stats
            .get()
            .map(|s| s.highest_wage.map(format_money).unwrap_or_else(|| "—".to_string()))
    });
    let lowest_wage = Signal::derive(move || {
        stats
            .get()
            .map(|s| s.lowest_wage.map(format_money).unwrap_or_else(|| "—".to_string()))
    });
    let entries =
        Signal::derive(move || stats.get().map(|s| format_thousands(s.entries as i64)));

    let wage_points = Signal::derive(move || {
        rows.get()
            .map(|rows| {
                rows.into_iter()
                    .map(|row| {
                        let display = format_money(row.median_wage);
                        BarPoint::new(row.label(), row.median_wage, display)
                    })
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    });

    view! {
        <div class="page page--wages">
            <PageHeader
                title="Wage Trends"
                subtitle="Median wages across years and cities"
                loading=loading
                on_refresh=Callback::new(move |_| reload.update(|n| *n += 1))
            />

            <FilterBar />

            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div class="alert alert--error">
                                <strong>"Failed to load wage data: "</strong>
                                {err}
                            </div>
                        }
                    })
            }}

            <div class="stat-grid">
                <StatCard label="Average Wage" value=average_wage description="CAD per year" />
                <StatCard label="Highest Wage" value=highest_wage description="CAD per year" />
                <StatCard label="Lowest Wage" value=lowest_wage description="CAD per year" />
                <StatCard label="Entries" value=entries description="Rows in the current view" />
            </div>

            <section class="panel">
                <h2 class="panel__title">"Median Wage by Group"</h2>
                <BarChart points=wage_points empty_message="No wage data for these filters" />
            </section>
        </div>
    }
}
