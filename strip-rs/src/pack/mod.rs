mod packer;

/// Named orderings used to sequence items, both for packing and for output
pub mod order;

#[doc(inline)]
pub use packer::StripPacker;

#[doc(inline)]
pub use packer::normalize;
