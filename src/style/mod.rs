//! Font style model: the canonical record, descriptor parsing, and markup
//! serialization.

// Submodule declarations
pub mod flags;
pub mod font;
pub mod markup;
pub mod parser;

// Re-exports
pub use flags::FontFlags;
pub use font::{Font, FontBuilder};
pub use markup::LINE_SEPARATOR;
