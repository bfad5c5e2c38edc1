mod dashboard;
mod detail;
mod fields;
mod footer;
mod layout;
mod listing;
mod popup;
mod stepstrip;

pub use dashboard::render_dashboard;
pub use detail::render_detail;
pub use fields::render_rows;
pub use footer::render_footer;
pub use listing::render_event_list;
pub use popup::render_popup;
pub use stepstrip::render_step_strip;
