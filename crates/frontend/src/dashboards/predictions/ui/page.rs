use crate::dashboards::predictions::api::{self, PredictionData};
use crate::layout::dashboard_context::use_dashboard_context;
use crate::shared::components::bar_chart::{BarChart, BarPoint};
use crate::shared::components::filter_bar::FilterBar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::format::format_money;
use contracts::dashboards::predictions::Recommendation;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn PredictionsPage() -> impl IntoView {
    let ctx = use_dashboard_context();
    let data = RwSignal::new(None::<PredictionData>);
    let loading = RwSignal::new(false);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        let filters = ctx.filters.get();
        let _ = reload.get();
        let generation = ctx.fetch_generation();
        data.set(None);

        if !filters.has_forecast_dimensions() {
            loading.set(false);
            return;
        }
        loading.set(true);

        spawn_local(async move {
            let loaded = api::load_predictions(&filters).await;
            if !ctx.is_current(generation) {
                return;
            }
            data.set(loaded);
            loading.set(false);
        });
    });

    let ready = Signal::derive(move || ctx.filters.with(|f| f.has_forecast_dimensions()));

    let forecast_points = Signal::derive(move || {
        data.get()
            .map(|d| {
                d.forecast
                    .forecast
                    .into_iter()
                    .map(|point| {
                        let display = format!("{:.1}", point.predicted_openings);
                        BarPoint::new(point.year.to_string(), point.predicted_openings, display)
                    })
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    });

    let history_points = Signal::derive(move || {
        data.get()
            .map(|d| {
                d.history
                    .into_iter()
                    .map(|row| {
                        let display =
                            format!("{:.0} opened / {:.0} closed", row.opened, row.closed);
                        BarPoint::new(row.year.to_string(), row.opened, display)
                    })
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    });

    view! {
        <div class="page page--predictions">
            <PageHeader
                title="Predictions & Advice"
                subtitle="Opening forecasts and a should-you-open recommendation"
                loading=loading
                on_refresh=Callback::new(move |_| reload.update(|n| *n += 1))
            />

            <FilterBar year_label="Target year" />

            {move || {
                if !ready.get() {
                    return view! {
                        <section class="panel panel--empty-state">
                            <h2 class="panel__title">"Pick a location and target year"</h2>
                            <p class="panel__empty">
                                "Forecasts need a province, a city and a target year. \
                                 Select all three above to generate predictions."
                            </p>
                        </section>
                    }
                        .into_any();
                }

                match data.get() {
                    None => view! { <p class="panel__empty">"Crunching the numbers…"</p> }
                        .into_any(),
                    Some(d) => {
                        view! {
                            <section class="panel">
                                <h2 class="panel__title">
                                    {format!("Projected Openings in {}", d.forecast.city)}
                                </h2>
                                {d
                                    .forecast
                                    .message
                                    .clone()
                                    .map(|message| {
                                        view! { <p class="panel__note">{message}</p> }
                                    })}
                                <BarChart
                                    points=forecast_points
                                    empty_message="No forecast available for this selection"
                                />
                            </section>

                            <section class="panel">
                                <h2 class="panel__title">"Historical Openings"</h2>
                                <BarChart
                                    points=history_points
                                    empty_message="No historical trend data"
                                />
                            </section>

                            {match d.advice {
                                Some(advice) => {
                                    view! { <RecommendationCard advice=advice /> }.into_any()
                                }
                                None => {
                                    view! {
                                        <section class="panel">
                                            <p class="panel__empty">
                                                "The recommendation service is unavailable \
                                                 right now."
                                            </p>
                                        </section>
                                    }
                                        .into_any()
                                }
                            }}
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}

#[component]
fn RecommendationCard(advice: Recommendation) -> impl IntoView {
    let verdict = if advice.recommended {
        "Recommended"
    } else {
        "Not recommended"
    };
    let verdict_class = if advice.recommended {
        "recommendation__verdict recommendation__verdict--yes"
    } else {
        "recommendation__verdict recommendation__verdict--no"
    };
    let metrics = advice.key_metrics;

    view! {
        <section class="panel recommendation">
            <h2 class="panel__title">"Should You Open Here?"</h2>
            <div class="recommendation__header">
                <span class=verdict_class>{verdict}</span>
                <span class="recommendation__confidence">
                    {format!("{} confidence", advice.confidence)}
                </span>
            </div>
            <p class="recommendation__summary">{advice.summary}</p>

            <div class="recommendation__metrics">
                <div class="metric">
                    <span class="metric__label">"Avg opened / yr"</span>
                    <span class="metric__value">{format!("{:.1}", metrics.avg_opened)}</span>
                </div>
                <div class="metric">
                    <span class="metric__label">"Avg closed / yr"</span>
                    <span class="metric__value">{format!("{:.1}", metrics.avg_closed)}</span>
                </div>
                <div class="metric">
                    <span class="metric__label">"Avg revenue"</span>
                    <span class="metric__value">{format_money(metrics.avg_revenue)}</span>
                </div>
                <div class="metric">
                    <span class="metric__label">"Avg costs"</span>
                    <span class="metric__value">{format_money(metrics.avg_costs)}</span>
                </div>
                <div class="metric">
                    <span class="metric__label">"Policy score"</span>
                    <span class="metric__value">{format!("{:.1}", metrics.policy_score)}</span>
                </div>
            </div>

            {(!advice.reasons.is_empty())
                .then(|| {
                    view! {
                        <ul class="recommendation__reasons">
                            {advice
                                .reasons
                                .into_iter()
                                .map(|reason| view! { <li>{reason}</li> })
                                .collect_view()}
                        </ul>
                    }
                })}
        </section>
    }
}
