pub mod dashboard;
pub mod detail;

pub use dashboard::render_dashboard;
pub use detail::render_detail;
