//! Shared UI components.

mod address_fields;
mod cart_modal;
mod navbar;
mod notice_modal;
mod order_summary;
mod product_card;

pub use address_fields::AddressFields;
pub use cart_modal::CartModal;
pub use navbar::Navbar;
pub use notice_modal::NoticeModal;
pub use order_summary::{EmptySummary, OrderSummaryPanel};
pub use product_card::ProductCard;
