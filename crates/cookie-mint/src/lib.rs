pub mod header;
pub mod store;
pub mod types;
pub mod util;

pub use header::set_cookie_header;
pub use store::{CookieStore, MemoryStore, StoreError};
pub use types::{Cookie, CookieError, CookieOptions, DomainPolicy};
pub use util::domain::normalize_domain;
