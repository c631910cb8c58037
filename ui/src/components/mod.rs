pub mod icon_upload;
pub mod monitor_checklist;
pub mod status_page_form;
pub mod toast;

pub use icon_upload::IconUpload;
pub use monitor_checklist::MonitorChecklist;
pub use status_page_form::StatusPageForm;
pub use toast::ToastContainer;
