pub mod dialogs;
pub mod formatting;

pub use dialogs::{set_status, show_error, StatusLevel};
pub use formatting::{
    format_contact, format_report_card, format_report_detail, format_sidebar_filter,
};
