use yew::prelude::*;

const APP_NAME: &str = "Status Pages";

/// Sets the document title to `"{title} · Status Pages"`. No cleanup on
/// unmount since each page sets its own title.
#[hook]
pub fn use_title(title: &str) {
    let title = format!("{title} · {APP_NAME}");
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    });
}
