//! Collection, lookup and parsing helpers built on [`optvalue_core`].

pub mod lookup;
pub mod parse;
pub mod reason;
pub mod seq;

pub use crate::lookup::{try_get_pair, TryGet};
pub use crate::parse::*;
pub use crate::reason::{ParseReason, SeqReason};
pub use crate::seq::{FlattenSome, SeqExt};
