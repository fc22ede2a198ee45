//! HTTP surface over a shared, lock-guarded address book.

pub mod routes;
pub mod server;
pub mod service;
pub mod state;

pub use routes::{address_book_router, with_operational_routes};
pub use service::AddressBookService;
pub use state::AppState;
