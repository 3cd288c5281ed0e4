mod error;

/// Rendering of layouts and rate reports to their output formats
pub mod export;

/// External (serializable) representations of layouts and rate reports
pub mod ext_repr;

/// Parsing of the line-oriented input formats
pub mod import;

/// Visualization of a packed strip as an SVG document
pub mod svg;

#[doc(inline)]
pub use error::InputError;
