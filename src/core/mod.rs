pub mod conversion;

pub use crate::domain::ports::{Converter, Reverter};
pub use crate::utils::error::Result;
pub use conversion::{ConverterExt, ReverterExt};
