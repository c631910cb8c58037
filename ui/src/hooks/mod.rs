mod use_debounced;
mod use_fetch;
mod use_monitors;
mod use_page;
mod use_title;

pub use use_debounced::use_debounced;
pub use use_fetch::{FetchHookReturn, use_fetch_with_cache};
pub use use_monitors::use_monitors;
pub use use_page::use_page;
pub use use_title::use_title;

/// Distinguishes "not fetched yet" from "fetched, possibly empty".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}
