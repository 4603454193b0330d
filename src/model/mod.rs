//! Domain types shared across the crate.
//!
//! Index and geometry newtypes plus the reorder instruction sum type. The
//! error taxonomy lives here too, mirroring the shell/core split: the core
//! signals through return values, the shell through `AppError`.

pub mod error;
pub mod geometry;
pub mod index;
pub mod instruction;

pub use error::AppError;
pub use geometry::{EdgeInsets, Point, Rect, Size, Vector};
pub use index::GridIndex;
pub use instruction::ReorderInstruction;
