//! Core domain types for Gamefolio.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod card;
mod gesture;
mod ids;
pub mod ui;

pub use card::Card;
pub use gesture::{DragPayload, DropTarget};
pub use ids::{CardId, EmptyCardIdError};
