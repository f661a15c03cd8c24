//! Color types and lookup tables.
//!
//! Provides the RGB value type shared by the parser and serializers, the
//! named-color resolver used for descriptor color tokens, and the legacy
//! indexed palette consulted during serialization.

// Submodule declarations
pub mod names;
pub mod palette;
pub mod rgb;

// Re-exports
pub use names::{ColorNameResolver, SystemColors};
pub use palette::{LegacyPalette, PaletteLookup};
pub use rgb::Rgb;
