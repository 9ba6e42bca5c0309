use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Forward model conversion: fills a target from a source.
///
/// Implementations decide how (and whether) to honor `cancel`. The helpers in
/// [`crate::core::conversion`] only pass it through.
#[async_trait]
pub trait Converter<S, T>: Send + Sync {
    type Error: Send;

    async fn convert(
        &self,
        source: &S,
        target: &mut T,
        cancel: &CancellationToken,
    ) -> Result<(), Self::Error>;
}

/// Reverse model conversion: fills a source back from a target.
#[async_trait]
pub trait Reverter<S, T>: Send + Sync {
    type Error: Send;

    async fn revert(
        &self,
        source: &mut S,
        target: &T,
        cancel: &CancellationToken,
    ) -> Result<(), Self::Error>;
}
