use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

use crate::status_page::SLUG_TAKEN_MESSAGE;

/// How long a toast stays up before dismissing itself.
pub const TOAST_DURATION_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Error,
    Success,
}

/// The fixed set of notifications the app shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKey {
    Saved,
    Error,
    UniqueSlug,
}

impl ToastKey {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Saved => "saved",
            Self::Error => "error",
            Self::UniqueSlug => "unique-slug",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Saved => "Saved successfully.",
            Self::Error => "Something went wrong. Please try again.",
            Self::UniqueSlug => SLUG_TAKEN_MESSAGE,
        }
    }

    pub fn toast_type(&self) -> ToastType {
        match self {
            Self::Saved => ToastType::Success,
            Self::Error | Self::UniqueSlug => ToastType::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub key: ToastKey,
}

impl Toast {
    pub fn new(key: ToastKey) -> Self {
        Self {
            id: Uuid::new_v4(),
            key,
        }
    }
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();

        match action {
            ToastAction::Add(toast) => {
                // Showing the same notification twice just replaces it.
                toasts.retain(|t| t.key != toast.key);
                toasts.push(toast);
            }
            ToastAction::Remove(id) => {
                toasts.retain(|t| t.id != id);
            }
        }

        Rc::new(ToastState { toasts })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    pub fn new(context: ToastContext) -> Self {
        Self { context }
    }

    /// Show a notification and dismiss it after `TOAST_DURATION_MS`.
    pub fn show(&self, key: ToastKey) {
        let toast = Toast::new(key);
        let toast_id = toast.id;
        tracing::debug!("Showing toast {}", key.key());

        self.context.dispatch(ToastAction::Add(toast));

        let context = self.context.clone();
        yew::platform::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            context.dispatch(ToastAction::Remove(toast_id));
        });
    }

    pub fn remove(&self, id: Uuid) {
        self.context.dispatch(ToastAction::Remove(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be used within a ToastProvider");
    ToastHandle::new(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_keys_are_stable() {
        assert_eq!(ToastKey::Saved.key(), "saved");
        assert_eq!(ToastKey::Error.key(), "error");
        assert_eq!(ToastKey::UniqueSlug.key(), "unique-slug");
        assert_eq!(ToastKey::Saved.toast_type(), ToastType::Success);
    }

    #[test]
    fn repeated_toast_replaces_previous() {
        let state = Rc::new(ToastState::default());
        let state = state.reduce(ToastAction::Add(Toast::new(ToastKey::Error)));
        let state = state.reduce(ToastAction::Add(Toast::new(ToastKey::Saved)));
        let state = state.reduce(ToastAction::Add(Toast::new(ToastKey::Error)));

        let keys: Vec<_> = state.toasts.iter().map(|t| t.key).collect();
        assert_eq!(keys, vec![ToastKey::Saved, ToastKey::Error]);

        let id = state.toasts[0].id;
        let state = state.reduce(ToastAction::Remove(id));
        assert_eq!(state.toasts.len(), 1);
    }
}
