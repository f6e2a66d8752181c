//! UI Components
//!
//! One top-level component per page plus the dashboard tables.

mod admin_dashboard;
mod customer_order;
mod order_tables;
mod refund_page;
mod track_order;

pub use admin_dashboard::AdminDashboard;
pub use customer_order::CustomerOrder;
pub use order_tables::{ActiveOrdersTable, CancelledOrdersTable, CompletedOrdersTable};
pub use refund_page::RefundPage;
pub use track_order::TrackOrder;
