pub mod contact_handlers;
pub mod detail_handlers;
pub mod filter_handlers;
pub mod list_handlers;

pub use contact_handlers::render_contacts;
pub use detail_handlers::render_detail;
pub use filter_handlers::render_filters;
pub use list_handlers::render_list;
