use payloads::{PageId, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State, get_api_client,
    hooks::{FetchHookReturn, use_fetch_with_cache},
};

/// Hook to load a single status page, cached in global state so returning to
/// the editor does not refetch.
#[hook]
pub fn use_page(page_id: PageId) -> FetchHookReturn<responses::Page> {
    let (state, dispatch) = use_store::<State>();

    let get_cached_state = state.clone();
    let should_fetch_state = state.clone();
    let fetch_dispatch = dispatch.clone();

    use_fetch_with_cache(
        page_id,
        move || get_cached_state.get_page(page_id).cloned(),
        move || !should_fetch_state.has_page_loaded(page_id),
        move || {
            let dispatch = fetch_dispatch.clone();
            async move {
                let api_client = get_api_client();
                let page = api_client
                    .get_page(&page_id)
                    .await
                    .map_err(|e| e.to_string())?;
                dispatch.reduce_mut(|s| s.set_page(page.clone()));
                Ok(page)
            }
        },
    )
}
