use payloads::{Monitor, MonitorId};
use std::collections::BTreeSet;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub monitors: Vec<Monitor>,
    pub selected: BTreeSet<MonitorId>,
    /// Called with the monitor and whether it is now checked.
    pub on_toggle: Callback<(MonitorId, bool)>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn MonitorChecklist(props: &Props) -> Html {
    if props.monitors.is_empty() {
        return html! {
            <p class="text-sm text-neutral-500 dark:text-neutral-400">
                {"This workspace has no monitors yet."}
            </p>
        };
    }

    html! {
        <ul class="divide-y divide-neutral-200 dark:divide-neutral-700 border
                   border-neutral-200 dark:border-neutral-700 rounded-md">
            {for props.monitors.iter().map(|monitor| {
                let monitor_id = monitor.id;
                let input_id = format!("monitor-{monitor_id}");
                let on_change = props.on_toggle.reform(move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    (monitor_id, input.checked())
                });

                html! {
                    <li key={monitor_id.to_string()} class="flex items-center gap-3 px-3 py-2">
                        <input
                            id={input_id.clone()}
                            type="checkbox"
                            checked={props.selected.contains(&monitor_id)}
                            onchange={on_change}
                            disabled={props.disabled}
                            class="h-4 w-4 rounded border-neutral-300 dark:border-neutral-600"
                        />
                        <label for={input_id} class="flex-1 min-w-0">
                            <span class="block text-sm font-medium text-neutral-900 dark:text-neutral-100">
                                {&monitor.name}
                            </span>
                            <span class="block text-xs text-neutral-500 dark:text-neutral-400 truncate">
                                {&monitor.url}
                            </span>
                        </label>
                    </li>
                }
            })}
        </ul>
    }
}
