use leptos::prelude::*;

/// KPI card. A `None` value renders the loading/unavailable placeholder, so
/// failed categories show "…" instead of a fake zero.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Pre-formatted value; None while loading
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Optional caption below the value
    #[prop(optional)]
    description: Option<&'static str>,
) -> impl IntoView {
    let display = move || value.get().unwrap_or_else(|| "…".to_string());

    view! {
        <div class="stat-card">
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{display}</div>
            {description.map(|text| view! { <p class="stat-card__description">{text}</p> })}
        </div>
    }
}
