use payloads::{Monitor, requests};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State, get_api_client,
    hooks::{FetchHookReturn, use_fetch_with_cache},
};

/// Hook to load the monitors of a workspace that pages can display.
#[hook]
pub fn use_monitors(workspace_slug: String) -> FetchHookReturn<Vec<Monitor>> {
    let (state, dispatch) = use_store::<State>();

    let get_cached_state = state.clone();
    let should_fetch_state = state.clone();
    let fetch_dispatch = dispatch.clone();
    let cached_slug = workspace_slug.clone();
    let loaded_slug = workspace_slug.clone();
    let fetch_slug = workspace_slug.clone();

    use_fetch_with_cache(
        workspace_slug,
        move || get_cached_state.get_monitors(&cached_slug).cloned(),
        move || !should_fetch_state.has_monitors_loaded(&loaded_slug),
        move || {
            let dispatch = fetch_dispatch.clone();
            let workspace_slug = fetch_slug.clone();
            async move {
                let api_client = get_api_client();
                let monitors = api_client
                    .list_monitors(&requests::ListMonitors {
                        workspace_slug: workspace_slug.clone(),
                    })
                    .await
                    .map_err(|e| e.to_string())?;
                dispatch.reduce_mut(|s| {
                    s.set_monitors(workspace_slug, monitors.clone())
                });
                Ok(monitors)
            }
        },
    )
}
