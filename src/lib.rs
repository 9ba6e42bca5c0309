pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{converter_fn, reverter_fn, FnConverter, FnReverter};
pub use config::{LogFormat, LoggingConfig};
pub use crate::core::conversion::{
    convert_many, convert_many_with, convert_one, convert_one_with, revert_many,
    revert_many_with, revert_one, revert_one_with, ConverterExt, ReverterExt,
};
pub use domain::ports::{Converter, Reverter};
pub use utils::cancellation::ensure_not_cancelled;
pub use utils::error::{ConversionError, Result};

pub use tokio_util::sync::CancellationToken;
