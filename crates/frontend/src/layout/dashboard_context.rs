use contracts::shared::filters::{FilterPatch, FilterState};
use leptos::prelude::*;
use web_sys::window;

/// Dashboard-session state shared through Leptos context: the current
/// [`FilterState`] plus a fetch-generation counter.
///
/// Every accepted filter change bumps the generation, which invalidates all
/// previously fetched row sets. Pages tag each fetch cycle with the
/// generation read at spawn time and drop responses that arrive after a
/// newer change. In-flight requests are not cancelled, their results are
/// simply ignored.
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub filters: RwSignal<FilterState>,
    generation: RwSignal<u64>,
}

impl DashboardContext {
    pub fn new() -> Self {
        Self {
            filters: RwSignal::new(FilterState::default()),
            generation: RwSignal::new(0),
        }
    }

    /// The single mutation entry point. Applies the patch immutably and
    /// swaps the whole state; no-op patches don't trigger a re-fetch.
    pub fn update(&self, patch: &FilterPatch) {
        let next = self.filters.with_untracked(|current| current.apply(patch));
        if self.filters.with_untracked(|current| *current != next) {
            self.filters.set(next);
            self.generation.update(|generation| *generation += 1);
        }
    }

    /// Generation tag for a fetch cycle, read untracked at spawn time.
    pub fn fetch_generation(&self) -> u64 {
        self.generation.get_untracked()
    }

    /// A response is authoritative only if no filter change superseded the
    /// cycle that requested it.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.get_untracked() == generation
    }

    /// Parse filters out of the URL query string at mount and mirror filter
    /// changes back via `history.replaceState`, so dashboard views are
    /// shareable links.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let initial = FilterState::from_query_string(search.trim_start_matches('?'));
        if initial != FilterState::default() {
            self.filters.set(initial);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = format!("?{}", this.filters.get().to_query_string());
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for DashboardContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dashboard_context() -> DashboardContext {
    use_context::<DashboardContext>().expect("DashboardContext not provided")
}
