use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;

/// Return type of the fetch hooks.
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render the fetched data, or a loading/error placeholder mentioning
    /// `context` (e.g. "monitors") while there is nothing to show yet.
    ///
    /// Once data is available the render function always runs, so a failed
    /// refetch keeps showing the previous data.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T) -> Html,
    {
        if let Some(data) = self.data.as_ref() {
            return render_fn(data);
        }

        match &self.error {
            Some(error) if !self.is_loading => html! {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border
                            border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {format!("Error loading {context}: {error}")}
                    </p>
                </div>
            },
            _ => html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("Loading {context}...")}
                    </p>
                </div>
            },
        }
    }
}

/// Fetch hook backed by the global yewdux store.
///
/// - `get_cached` reads the data from the store
/// - `should_fetch` decides whether the store is missing the data
/// - `fetch_and_cache` performs the API call and writes the store
///
/// Fetches on mount and whenever `deps` change, if `should_fetch` agrees.
/// `refetch` always fetches.
#[hook]
pub fn use_fetch_with_cache<T, D, GetCached, ShouldFetch, FetchAndCache, Fut>(
    deps: D,
    get_cached: GetCached,
    should_fetch: ShouldFetch,
    fetch_and_cache: FetchAndCache,
) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    GetCached: Fn() -> Option<T> + 'static,
    ShouldFetch: Fn() -> bool + 'static,
    FetchAndCache: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let refetch = {
        let error = error.clone();
        let is_loading = is_loading.clone();
        let fetch_and_cache = Rc::new(fetch_and_cache);

        use_callback(deps.clone(), move |_, _| {
            let error = error.clone();
            let is_loading = is_loading.clone();
            let fetch_and_cache = fetch_and_cache.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                if let Err(e) = fetch_and_cache().await {
                    tracing::error!("Fetch failed: {e}");
                    error.set(Some(e));
                }

                is_loading.set(false);
            });
        })
    };

    {
        let refetch = refetch.clone();
        let is_loading = is_loading.clone();

        use_effect_with(deps, move |_| {
            if should_fetch() && !*is_loading {
                refetch.emit(());
            }
        });
    }

    let data = match get_cached() {
        Some(cached) => FetchState::Fetched(cached),
        None => FetchState::NotFetched,
    };

    // Nothing cached and no error means a fetch is about to start.
    let is_loading = *is_loading || (!data.is_fetched() && error.is_none());

    FetchHookReturn {
        data,
        is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
