//! Layered configuration resolution
//!
//! Leaf resolvers (language, gate, requirements, update URL, interface) are
//! composed by `facade::ConfigResolver`, which is what callers use.

pub mod facade;
pub mod gate;
pub mod interface;
pub mod language;
pub mod precedence;
pub mod requirements;
pub mod update_url;

pub use facade::{ConfigResolver, ResolvedConfig};
pub use precedence::{Precedence, Resolved, Source};
