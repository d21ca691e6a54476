//! Domain records and value objects handled by the quick-search core.

pub mod contract;
pub mod customer;
pub mod dress;
pub mod navigation;
pub mod suggestion;
pub mod types;
