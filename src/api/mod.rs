//! RPC API adapter
//!
//! Wraps the remote affiliate-marketing RPC API behind a small typed surface:
//! [`Session::login`] opens an authenticated session, [`GridClient`] fetches
//! one page of a grid at a time, and [`fetch_all`] walks offsets until the
//! reported total is exhausted. The server's object model and wire shapes
//! stay inside this module.

mod grid;
mod session;
mod types;


pub use grid::{fetch_all, GridClient, PageFetcher};
pub use session::Session;
pub use types::{Entity, Filter, FilterOperator, GridQuery, Page, Sort, SortDirection};
