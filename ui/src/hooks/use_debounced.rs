use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Tracks which value is waiting for its timer.
///
/// Every `schedule` supersedes the previous one, so a timer that fires for
/// an older ticket publishes nothing.
#[derive(Debug)]
pub struct Debounce<T> {
    ticket: u64,
    pending: Option<T>,
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self {
            ticket: 0,
            pending: None,
        }
    }
}

impl<T> Debounce<T> {
    /// Queue `value`, returning the ticket its timer must present.
    pub fn schedule(&mut self, value: T) -> u64 {
        self.ticket += 1;
        self.pending = Some(value);
        self.ticket
    }

    /// The value to publish when the timer for `ticket` fires.
    pub fn fire(&mut self, ticket: u64) -> Option<T> {
        if ticket == self.ticket {
            self.pending.take()
        } else {
            None
        }
    }
}

/// Returns `value` once it has stopped changing for `delay_ms`.
///
/// Each change drops the pending timer, so only the latest value is ever
/// published.
#[hook]
pub fn use_debounced<T>(value: T, delay_ms: u32) -> T
where
    T: Clone + PartialEq + 'static,
{
    let debounced = use_state(|| value.clone());
    let debounce = use_mut_ref(Debounce::<T>::default);

    {
        let debounced = debounced.clone();
        use_effect_with(value, move |value| {
            let ticket = debounce.borrow_mut().schedule(value.clone());
            let timeout = Timeout::new(delay_ms, move || {
                let value = debounce.borrow_mut().fire(ticket);
                if let Some(value) = value {
                    debounced.set(value);
                }
            });
            move || drop(timeout)
        });
    }

    (*debounced).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status_page::{
        PageForm, PageFormAction, SLUG_TAKEN_MESSAGE, is_slug_available,
        test_backend::TestBackend,
    };
    use futures::executor::block_on;

    #[test]
    fn only_latest_value_is_published() {
        let mut debounce = Debounce::default();
        let first = debounce.schedule("acme");
        let second = debounce.schedule("acme-status");

        assert_eq!(debounce.fire(first), None);
        assert_eq!(debounce.fire(second), Some("acme-status"));
        // A value is published once.
        assert_eq!(debounce.fire(second), None);
    }

    #[test]
    fn each_value_published_when_typing_pauses() {
        let mut debounce = Debounce::default();
        let ticket = debounce.schedule(1);
        assert_eq!(debounce.fire(ticket), Some(1));
        let ticket = debounce.schedule(2);
        assert_eq!(debounce.fire(ticket), Some(2));
    }

    #[test]
    fn slug_typed_within_window_is_checked_once() -> anyhow::Result<()> {
        let backend = TestBackend::with_taken(&["taken-slug"]);
        let mut form = PageForm::new(None, &[], false);
        let mut debounce = Debounce::default();

        let mut tickets = Vec::new();
        for slug in ["tak", "taken-slug"] {
            form.apply(PageFormAction::SetSlug(slug.into()));
            tickets.push(debounce.schedule(slug.to_string()));
        }

        for ticket in tickets {
            if let Some(slug) = debounce.fire(ticket) {
                let available =
                    block_on(is_slug_available(&backend, &slug, None))?;
                form.apply(PageFormAction::SlugChecked { slug, available });
            }
        }

        assert_eq!(backend.slug_checks(), 1);
        assert_eq!(form.slug_error(), Some(SLUG_TAKEN_MESSAGE));
        Ok(())
    }
}
