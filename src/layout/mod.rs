//! Page layout input.
//!
//! A page reaches the scanner as an ordered list of [`TextFragment`]s. Their
//! order is the decoder's order and is preserved by every later stage.

mod text_fragment;

pub use text_fragment::TextFragment;
