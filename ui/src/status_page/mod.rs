//! Form logic for creating and editing status pages.
//!
//! Everything here is independent of the DOM so it can be driven by the
//! `StatusPageForm` component and by unit tests alike.

mod backend;
mod slug_check;
mod state;
mod submit;

#[cfg(test)]
pub(crate) mod test_backend;

pub use backend::PageBackend;
pub use slug_check::{SLUG_TAKEN_MESSAGE, is_slug_available};
pub use state::{IconMode, PageForm, PageFormAction};
pub use submit::{SubmitOutcome, submit_page};

/// Delay between the last slug edit and the uniqueness check.
pub const SLUG_CHECK_DEBOUNCE_MS: u32 = 1000;
