use crate::dashboards::costs::api;
use crate::layout::dashboard_context::use_dashboard_context;
use crate::shared::components::filter_bar::FilterBar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::fetch::or_default;
use crate::shared::format::{format_money, format_money_precise, format_percent};
use contracts::dashboards::costs::CostBreakdown;
use contracts::shared::stats::classify_variance;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn CostsPage() -> impl IntoView {
    let ctx = use_dashboard_context();
    let data = RwSignal::new(None::<CostBreakdown>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        let filters = ctx.filters.get();
        let _ = reload.get();
        let generation = ctx.fetch_generation();
        loading.set(true);
        error.set(None);
        data.set(None);

        spawn_local(async move {
            let result = api::load_cost_breakdown(&filters).await;
            if !ctx.is_current(generation) {
                return;
            }
            if let Err(err) = &result {
                error.set(Some(err.clone()));
            }
            data.set(Some(or_default(result, "cost-breakdown")));
            loading.set(false);
        });
    });

    let average_rent =
        Signal::derive(move || data.get().map(|d| format_money_precise(d.average_rent)));
    let average_utility =
        Signal::derive(move || data.get().map(|d| format_money(d.average_utility)));
    let rent_span = Signal::derive(move || {
        data.get().map(|d| {
            format!(
                "{} – {}",
                format_money_precise(d.min_rent),
                format_money_precise(d.max_rent)
            )
        })
    });
    let utility_span = Signal::derive(move || {
        data.get()
            .map(|d| format!("{} – {}", format_money(d.min_utility), format_money(d.max_utility)))
    });

    view! {
        <div class="page page--costs">
            <PageHeader
                title="Cost Breakdown Analysis"
                subtitle="Rent and utility cost structure for operational planning"
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
                                <strong>"Failed to load cost data: "</strong>
                                {err}
                            </div>
                        }
                    })
            }}

            <div class="stat-grid">
                <StatCard label="Average Rent" value=average_rent description="CAD per m²" />
                <StatCard
                    label="Average Utility"
                    value=average_utility
                    description="Yearly utility cost (CAD)"
                />
                <StatCard label="Rent Range" value=rent_span description="Min – max per m²" />
                <StatCard
                    label="Utility Range"
                    value=utility_span
                    description="Min – max per year"
                />
            </div>

            <section class="panel">
                <h2 class="panel__title">"Cost Variance"</h2>
                {move || {
                    match data.get() {
                        None => view! { <p class="panel__empty">"Loading cost distribution…"</p> }
                            .into_any(),
                        Some(costs) if costs.is_empty() => {
                            view! {
                                <p class="panel__empty">
                                    "No cost data available. Try adjusting your filters."
                                </p>
                            }
                                .into_any()
                        }
                        Some(costs) => {
                            view! {
                                <div class="variance-grid">
                                    <VariancePanel
                                        title="Rent variance"
                                        variance=costs.rent_variance()
                                        range=format_money_precise(costs.rent_range())
                                    />
                                    <VariancePanel
                                        title="Utility variance"
                                        variance=costs.utility_variance()
                                        range=format_money(costs.utility_range())
                                    />
                                </div>
                            }
                                .into_any()
                        }
                    }
                }}
            </section>
        </div>
    }
}

/// Variance percentage, its volatility band and the absolute spread for one
/// cost dimension. A zero minimum has no defined variance and renders the
/// placeholder dash.
#[component]
fn VariancePanel(title: &'static str, variance: Option<f64>, range: String) -> impl IntoView {
    let band = variance.map(classify_variance);
    let band_class = match band.map(|b| b.label()) {
        Some("high") => "variance-panel__band variance-panel__band--high",
        Some("moderate") => "variance-panel__band variance-panel__band--moderate",
        _ => "variance-panel__band variance-panel__band--low",
    };

    view! {
        <div class="variance-panel">
            <h3 class="variance-panel__title">{title}</h3>
            <p class="variance-panel__value">{format_percent(variance)}</p>
            {band
                .map(|b| {
                    view! {
                        <span class=band_class>{format!("{} volatility", b.label())}</span>
                    }
                })}
            <p class="variance-panel__range">{format!("Spread: {}", range)}</p>
        </div>
    }
}
