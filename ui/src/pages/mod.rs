pub mod not_found;
pub mod status_page_editor;

pub use not_found::NotFoundPage;
pub use status_page_editor::{PageQuery, StatusPageEditorPage};
