// Adapters layer: ready-made contract implementations.

pub mod closure;

pub use closure::{converter_fn, reverter_fn, FnConverter, FnReverter};
