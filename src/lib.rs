//! A course on growable sequence views: slices that share a backing
//! store, grow by reallocation, and alias each other in the ways that
//! trip people up.
//!
//! The core model lives in [`view`], [`store`] and [`growth`]. The
//! remaining modules back the lessons that print it all out.

pub mod array;
pub mod assoc;
pub mod cat;
pub mod config;
pub mod error;
pub mod growth;
pub mod lessons;
pub mod literal;
pub mod narrate;
pub mod store;
pub mod text;
pub mod view;

pub use array::FixedArray;
pub use assoc::{AssocMap, KeySet};
pub use error::{SliceError, SliceResult};
pub use growth::{next_capacity, GrowthPolicy};
pub use literal::SparseLiteral;
pub use store::BackingStore;
pub use view::SliceView;
