use crate::layout::dashboard_context::use_dashboard_context;
use crate::shared::fetch::fetch_object;
use contracts::shared::filters::{FilterOptions, FilterPatch, Patch, BUSINESS_TYPES};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Filter dimension selects, backed by the shared [`DashboardContext`].
///
/// Every change funnels through `ctx.update` as a [`FilterPatch`]; the "All
/// …" choice emits `Patch::Clear`, so the dimension disappears from the
/// query string instead of being sent as an empty value. Select choices come
/// from `/api/filters/options` and reload when the business type changes.
///
/// [`DashboardContext`]: crate::layout::dashboard_context::DashboardContext
#[component]
pub fn FilterBar(
    /// Show the policy-type select (policy dashboard only)
    #[prop(optional)]
    show_policy_type: bool,
    /// Label for the year select ("Target year" on the predictions page)
    #[prop(optional)]
    year_label: Option<&'static str>,
) -> impl IntoView {
    let ctx = use_dashboard_context();
    let options = RwSignal::new(FilterOptions::default());

    Effect::new(move |_| {
        let business_type = ctx.filters.with(|f| f.business_type.clone());
        spawn_local(async move {
            let query = format!("type={}", business_type);
            match fetch_object::<FilterOptions>("/api/filters/options", &query).await {
                Ok(fetched) => options.set(fetched),
                Err(err) => log::warn!("filter options fetch failed: {}", err),
            }
        });
    });

    let on_type_change = move |ev| {
        ctx.update(&FilterPatch {
            business_type: Some(event_target_value(&ev)),
            ..Default::default()
        });
    };
    let on_province_change = move |ev| {
        ctx.update(&FilterPatch {
            province: string_patch(event_target_value(&ev)),
            ..Default::default()
        });
    };
    let on_city_change = move |ev| {
        ctx.update(&FilterPatch {
            city: string_patch(event_target_value(&ev)),
            ..Default::default()
        });
    };
    let on_year_change = move |ev| {
        let patch = match event_target_value(&ev).parse::<i32>() {
            Ok(year) => Patch::Set(year),
            Err(_) => Patch::Clear,
        };
        ctx.update(&FilterPatch {
            year: patch,
            ..Default::default()
        });
    };
    let on_policy_change = move |ev| {
        ctx.update(&FilterPatch {
            policy_type: string_patch(event_target_value(&ev)),
            ..Default::default()
        });
    };

    view! {
        <div class="filter-bar">
            <label class="filter-bar__field">
                <span>"Business type"</span>
                <select
                    on:change=on_type_change
                    prop:value=move || ctx.filters.with(|f| f.business_type.clone())
                >
                    {BUSINESS_TYPES
                        .iter()
                        .map(|business_type| {
                            view! { <option value=*business_type>{*business_type}</option> }
                        })
                        .collect_view()}
                </select>
            </label>

            <label class="filter-bar__field">
                <span>"Province"</span>
                <select
                    on:change=on_province_change
                    prop:value=move || ctx.filters.with(|f| f.province.clone().unwrap_or_default())
                >
                    <option value="">"All provinces"</option>
                    {move || {
                        options
                            .get()
                            .provinces
                            .into_iter()
                            .map(|province| {
                                view! { <option value=province.clone()>{province.clone()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </label>

            <label class="filter-bar__field">
                <span>"City"</span>
                <select
                    on:change=on_city_change
                    prop:value=move || ctx.filters.with(|f| f.city.clone().unwrap_or_default())
                >
                    <option value="">"All cities"</option>
                    {move || {
                        options
                            .get()
                            .cities
                            .into_iter()
                            .map(|city| view! { <option value=city.clone()>{city.clone()}</option> })
                            .collect_view()
                    }}
                </select>
            </label>

            <label class="filter-bar__field">
                <span>{year_label.unwrap_or("Year")}</span>
                <select
                    on:change=on_year_change
                    prop:value=move || {
                        ctx.filters
                            .with(|f| f.year.map(|y| y.to_string()).unwrap_or_default())
                    }
                >
                    <option value="">"All years"</option>
                    {move || {
                        options
                            .get()
                            .years
                            .into_iter()
                            .map(|year| {
                                view! { <option value=year.to_string()>{year}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </label>

            {show_policy_type
                .then(|| {
                    view! {
                        <label class="filter-bar__field">
                            <span>"Policy type"</span>
                            <select
                                on:change=on_policy_change
                                prop:value=move || {
                                    ctx.filters.with(|f| f.policy_type.clone().unwrap_or_default())
                                }
                            >
                                <option value="">"All policies"</option>
                                {move || {
                                    options
                                        .get()
                                        .policy_types
                                        .into_iter()
                                        .map(|policy| {
                                            view! {
                                                <option value=policy.clone()>{policy.clone()}</option>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </label>
                    }
                })}

            {move || {
                let count = ctx.filters.with(|f| f.active_filter_count());
                if count > 0 {
                    view! { <span class="badge badge--primary">{count}</span> }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}

fn string_patch(value: String) -> Patch<String> {
    if value.is_empty() {
        Patch::Clear
    } else {
        Patch::Set(value)
    }
}
