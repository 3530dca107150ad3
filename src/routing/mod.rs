//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (route lookup, path variable extraction)
//!     → http::handlers (one handler per route)
//!     → No match: JSON 404 / 405 from the fallbacks
//! ```
//!
//! | Route    | Method | Path            |
//! |----------|--------|-----------------|
//! | create   | POST   | `/product`      |
//! | list     | GET    | `/products/`    |
//! | get-one  | GET    | `/product/{id}` |
//! | update   | PUT    | `/product/{id}` |
//! | delete   | DELETE | `/product/{id}` |

pub mod router;

pub use router::product_router;
