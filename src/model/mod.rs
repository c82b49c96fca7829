//! Pure data structures: inventory records, their DTOs, the session context and sample fixtures.

pub mod fixture;
pub mod item;
pub mod session;

pub use fixture::*;
pub use item::*;
pub use session::*;
