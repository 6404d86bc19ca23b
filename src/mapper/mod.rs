//! Document to slide sequence mapping.
//!
//! Everything here is pure: no I/O, no shared state, no errors. Callers hand
//! in a snapshot of the document and get plain data back.

pub mod assembly;
pub mod identifier;
pub mod partition;
pub mod slides;

pub use assembly::{assemble, canonicalize, Overrides};
pub use identifier::{assign_identifiers, RandomTokens, TokenProvider};
pub use partition::{flatten, partition};
pub use slides::generate_slide_sequence;
