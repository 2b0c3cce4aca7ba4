//! Card piles.
//!
//! ## Key Types
//!
//! - `Pile`: Shared trait for rule-checked piles
//! - `Foundation`: Per-suit pile built Ace to King
//! - `TableauColumn`: Descending, alternating-color column with hidden base
//! - `StockWaste`: Draw-and-recycle queue (not a `Pile`)

pub mod foundation;
pub mod pile;
pub mod stock;
pub mod tableau;

pub use foundation::{Foundation, FOUNDATION_SIZE};
pub use pile::Pile;
pub use stock::{DrawOutcome, StockWaste};
pub use tableau::{TableauColumn, TABLEAU_COLUMNS};
