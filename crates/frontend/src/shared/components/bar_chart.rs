use leptos::prelude::*;

/// One bar: grouping label, raw value for scaling, pre-formatted display.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPoint {
    pub label: String,
    pub value: f64,
    pub display: String,
}

impl BarPoint {
    pub fn new(label: impl Into<String>, value: f64, display: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            display: display.into(),
        }
    }
}

/// Minimal horizontal bar chart. Bars scale against the largest value in the
/// set; an empty set renders the empty-state message.
#[component]
pub fn BarChart(
    #[prop(into)] points: Signal<Vec<BarPoint>>,
    #[prop(optional)] empty_message: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="bar-chart">
            {move || {
                let points = points.get();
                if points.is_empty() {
                    let message = empty_message.unwrap_or("No data available");
                    return view! { <p class="bar-chart__empty">{message}</p> }.into_any();
                }

                let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
                points
                    .into_iter()
                    .map(|point| {
                        let width = if max > 0.0 {
                            (point.value / max * 100.0).clamp(0.0, 100.0)
                        } else {
                            0.0
                        };
                        view! {
                            <div class="bar-chart__row">
                                <span class="bar-chart__label">{point.label}</span>
                                <div class="bar-chart__track">
                                    <div
                                        class="bar-chart__fill"
                                        style=format!("width: {:.1}%", width)
                                    ></div>
                                </div>
                                <span class="bar-chart__value">{point.display}</span>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
