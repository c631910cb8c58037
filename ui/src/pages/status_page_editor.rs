use payloads::PageId;
use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::StatusPageForm,
    hooks::{use_monitors, use_page, use_title},
};

/// Query string of the editor. Without an id the editor creates a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageQuery {
    pub id: Option<i64>,
}

impl PageQuery {
    pub fn page_id(&self) -> Option<PageId> {
        self.id.filter(|id| *id != 0).map(PageId)
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub workspace: String,
}

/// Create or edit a status page, depending on the `?id=` query.
#[function_component]
pub fn StatusPageEditorPage(props: &Props) -> Html {
    let page_id = use_location()
        .and_then(|location| location.query::<PageQuery>().ok())
        .and_then(|query| query.page_id());

    use_title(if page_id.is_some() {
        "Edit status page"
    } else {
        "New status page"
    });

    html! {
        <div class="max-w-2xl mx-auto">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-6">
                {if page_id.is_some() { "Edit Status Page" } else { "New Status Page" }}
            </h1>
            {match page_id {
                Some(page_id) => html! {
                    <EditStatusPage
                        key={page_id.to_string()}
                        workspace={props.workspace.clone()}
                        {page_id}
                    />
                },
                None => html! {
                    <CreateStatusPage workspace={props.workspace.clone()} />
                },
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CreateProps {
    workspace: String,
}

#[function_component]
fn CreateStatusPage(props: &CreateProps) -> Html {
    let monitors_hook = use_monitors(props.workspace.clone());

    monitors_hook.render("monitors", |monitors| {
        html! {
            <StatusPageForm
                workspace_slug={props.workspace.clone()}
                all_monitors={monitors.clone()}
                check_all_monitors={true}
            />
        }
    })
}

#[derive(Properties, PartialEq)]
struct EditProps {
    workspace: String,
    page_id: PageId,
}

#[function_component]
fn EditStatusPage(props: &EditProps) -> Html {
    let page_hook = use_page(props.page_id);
    let monitors_hook = use_monitors(props.workspace.clone());
    let refetch_page = page_hook.refetch.clone();

    page_hook.render("status page", |page| {
        let refetch_page = refetch_page.clone();
        monitors_hook.render("monitors", move |monitors| {
            let updated_at = page.updated_at.strftime("%Y-%m-%d %H:%M UTC");
            html! {
                <>
                    <p class="text-sm text-neutral-500 dark:text-neutral-400 mb-4">
                        {format!("Last updated {updated_at}")}
                    </p>
                    <StatusPageForm
                        workspace_slug={props.workspace.clone()}
                        default_values={Some(page.to_draft())}
                        all_monitors={monitors.clone()}
                        on_refresh={refetch_page.clone()}
                    />
                </>
            }
        })
    })
}
