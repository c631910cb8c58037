use payloads::{Monitor, MonitorId, PageDraft};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::{AnyRoute, prelude::*};
use yewdux::prelude::*;

use crate::{
    State,
    components::{IconUpload, MonitorChecklist},
    contexts::toast::use_toast,
    get_api_client,
    hooks::use_debounced,
    pages::PageQuery,
    status_page::{
        PageForm, PageFormAction, SLUG_CHECK_DEBOUNCE_MS, SubmitOutcome,
        is_slug_available, submit_page,
    },
    status_page_domain,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub workspace_slug: String,
    /// The page being edited. Without it the form creates a new page.
    ///
    /// Must be a persisted draft (`id` set): submitting updates by that id,
    /// and a draft without one would be created again.
    #[prop_or_default]
    pub default_values: Option<PageDraft>,
    #[prop_or_default]
    pub all_monitors: Vec<Monitor>,
    /// Select every monitor when the form opens.
    #[prop_or_default]
    pub check_all_monitors: bool,
    /// Where to go after a successful save.
    #[prop_or_default]
    pub next_url: Option<String>,
    /// Called after a successful save so the caller can reload its data.
    #[prop_or_default]
    pub on_refresh: Callback<()>,
}

#[function_component]
pub fn StatusPageForm(props: &Props) -> Html {
    let form = {
        let default_values = props.default_values.clone();
        let all_monitors = props.all_monitors.clone();
        let check_all_monitors = props.check_all_monitors;
        use_reducer(move || {
            PageForm::new(default_values, &all_monitors, check_all_monitors)
        })
    };
    let is_pending = use_state(|| false);
    let toast = use_toast();
    let navigator = use_navigator();
    let location = use_location();
    let dispatch = use_dispatch::<State>();

    // Check the slug once typing has paused.
    let debounced_slug =
        use_debounced(form.draft().slug.clone(), SLUG_CHECK_DEBOUNCE_MS);
    {
        let form = form.clone();
        let original_slug = form.original_slug().map(str::to_string);
        use_effect_with(
            (debounced_slug, original_slug),
            move |(slug, original_slug)| {
                if !slug.is_empty() {
                    let slug = slug.clone();
                    let original_slug = original_slug.clone();
                    yew::platform::spawn_local(async move {
                        let api_client = get_api_client();
                        match is_slug_available(
                            &api_client,
                            &slug,
                            original_slug.as_deref(),
                        )
                        .await
                        {
                            Ok(available) => form.dispatch(
                                PageFormAction::SlugChecked { slug, available },
                            ),
                            Err(e) => {
                                tracing::warn!("Slug check for {slug:?} failed: {e}")
                            }
                        }
                    });
                }
            },
        );
    }

    let on_title_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(PageFormAction::SetTitle(input.value()));
        })
    };

    let on_description_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(PageFormAction::SetDescription(input.value()));
        })
    };

    let on_slug_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(PageFormAction::SetSlug(input.value()));
        })
    };

    let on_icon_upload = {
        let form = form.clone();
        Callback::from(move |url: String| {
            form.dispatch(PageFormAction::SetIcon(url));
        })
    };

    let on_icon_remove = {
        let form = form.clone();
        Callback::from(move |_| form.dispatch(PageFormAction::RemoveIcon))
    };

    let on_monitor_toggle = {
        let form = form.clone();
        Callback::from(move |(monitor_id, checked): (MonitorId, bool)| {
            form.dispatch(PageFormAction::ToggleMonitor(monitor_id, checked));
        })
    };

    let on_submit = {
        let form = form.clone();
        let is_pending = is_pending.clone();
        let toast = toast.clone();
        let workspace_slug = props.workspace_slug.clone();
        let next_url = props.next_url.clone();
        let on_refresh = props.on_refresh.clone();
        let dispatch = dispatch.clone();
        let current_path = location.map(|l| l.path().to_string());

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_pending {
                return;
            }

            let snapshot = (*form).clone();
            let form = form.clone();
            let is_pending = is_pending.clone();
            let toast = toast.clone();
            let workspace_slug = workspace_slug.clone();
            let next_url = next_url.clone();
            let on_refresh = on_refresh.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            let current_path = current_path.clone();

            yew::platform::spawn_local(async move {
                is_pending.set(true);

                let api_client = get_api_client();
                let outcome =
                    submit_page(&api_client, &snapshot, &workspace_slug).await;
                form.dispatch(PageFormAction::Submitted(outcome.clone()));
                is_pending.set(false);

                // The editor remounts for the new id and must find the page
                // in the cache instead of loading it again.
                let saved = outcome.clone();
                dispatch.reduce_mut(move |s| s.cache_created_page(&saved));

                if let (SubmitOutcome::Created(page), Some(navigator), Some(path)) =
                    (&outcome, &navigator, &current_path)
                {
                    let query = PageQuery { id: Some(page.id.0) };
                    if let Err(e) = navigator
                        .replace_with_query(&AnyRoute::new(path.clone()), &query)
                    {
                        tracing::error!("Failed to update page query: {e}");
                    }
                }

                if let Some(key) = outcome.toast() {
                    toast.show(key);
                }

                if outcome.is_saved() {
                    if let (Some(url), Some(navigator)) = (&next_url, &navigator)
                    {
                        navigator.push(&AnyRoute::new(url.clone()));
                    }
                    on_refresh.emit(());
                }
            });
        })
    };

    let disabled = *is_pending;
    let draft = form.draft();
    let errors = form.errors();

    html! {
        <form onsubmit={on_submit} class="space-y-6">
            <div>
                <label for="page-title" class={LABEL_CLASS}>{"Title"}</label>
                <input
                    id="page-title"
                    type="text"
                    value={draft.title.clone()}
                    oninput={on_title_input}
                    disabled={disabled}
                    placeholder="Acme Status"
                    class={INPUT_CLASS}
                />
                {field_error(errors.title)}
            </div>

            <div>
                <label for="page-description" class={LABEL_CLASS}>
                    {"Description"}
                </label>
                <textarea
                    id="page-description"
                    rows="3"
                    value={draft.description.clone()}
                    oninput={on_description_input}
                    disabled={disabled}
                    placeholder="Live status of our services"
                    class={INPUT_CLASS}
                />
                {field_error(errors.description)}
            </div>

            <div>
                <label for="page-slug" class={LABEL_CLASS}>{"Slug"}</label>
                <div class="flex items-center">
                    <input
                        id="page-slug"
                        type="text"
                        value={draft.slug.clone()}
                        oninput={on_slug_input}
                        disabled={disabled}
                        placeholder="acme"
                        class={INPUT_CLASS}
                    />
                    <span class="ml-2 text-sm text-neutral-500 dark:text-neutral-400 whitespace-nowrap">
                        {format!(".{}", status_page_domain())}
                    </span>
                </div>
                {field_error(form.slug_error())}
            </div>

            <div>
                <label for="page-icon" class={LABEL_CLASS}>{"Favicon"}</label>
                <IconUpload
                    mode={form.icon_mode()}
                    on_upload={on_icon_upload}
                    on_remove={on_icon_remove}
                    disabled={disabled}
                />
                {field_error(errors.icon)}
            </div>

            <div>
                <span class={LABEL_CLASS}>{"Monitors"}</span>
                <MonitorChecklist
                    monitors={props.all_monitors.clone()}
                    selected={draft.monitors.clone()}
                    on_toggle={on_monitor_toggle}
                    disabled={disabled}
                />
            </div>

            <div class="flex justify-end">
                <button
                    type="submit"
                    disabled={disabled}
                    class="inline-flex items-center gap-2 py-2 px-4 border border-transparent
                           rounded-md shadow-sm text-sm font-medium text-white
                           bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                           focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-neutral-500
                           disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors duration-200"
                >
                    if disabled {
                        <>
                            <span class="h-4 w-4 rounded-full border-2 border-current
                                         border-t-transparent animate-spin" />
                            {"Saving..."}
                        </>
                    } else {
                        {"Confirm"}
                    }
                </button>
            </div>
        </form>
    }
}

const LABEL_CLASS: &str = "block text-sm font-medium text-neutral-700 \
                           dark:text-neutral-300 mb-2";

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-neutral-300 \
    dark:border-neutral-600 rounded-md shadow-sm bg-white dark:bg-neutral-700 \
    text-neutral-900 dark:text-neutral-100 focus:outline-none focus:ring-2 \
    focus:ring-neutral-500 focus:border-neutral-500 \
    dark:focus:ring-neutral-400 dark:focus:border-neutral-400";

fn field_error(message: Option<&'static str>) -> Html {
    match message {
        Some(message) => html! {
            <p class="mt-1 text-sm text-red-700 dark:text-red-400">{message}</p>
        },
        None => html! {},
    }
}
