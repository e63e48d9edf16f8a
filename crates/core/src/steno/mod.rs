//! The 23-key steno keyboard model: keys, strokes, and stroke sequences.

pub mod key;
pub mod sequence;
pub mod stroke;

pub use key::Key;
pub use sequence::StrokeSequence;
pub use stroke::Stroke;
