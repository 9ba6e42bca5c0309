use crate::domain::ports::{Converter, Reverter};
use crate::utils::cancellation::ensure_not_cancelled;
use crate::utils::error::ConversionError;
use async_trait::async_trait;
use std::marker::PhantomData;
use tokio_util::sync::CancellationToken;

/// Adapts a synchronous closure into a [`Converter`].
///
/// The token is checked once before the closure runs.
pub struct FnConverter<F, S, T, E> {
    f: F,
    _marker: PhantomData<fn(&S, &mut T) -> E>,
}

pub fn converter_fn<F, S, T, E>(f: F) -> FnConverter<F, S, T, E>
where
    F: Fn(&S, &mut T) -> Result<(), E>,
{
    FnConverter {
        f,
        _marker: PhantomData,
    }
}

#[async_trait]
impl<F, S, T, E> Converter<S, T> for FnConverter<F, S, T, E>
where
    F: Fn(&S, &mut T) -> Result<(), E> + Send + Sync,
    S: Sync,
    T: Send,
    E: From<ConversionError> + Send,
{
    type Error = E;

    async fn convert(
        &self,
        source: &S,
        target: &mut T,
        cancel: &CancellationToken,
    ) -> Result<(), E> {
        ensure_not_cancelled(cancel)?;
        (self.f)(source, target)
    }
}

/// Adapts a synchronous closure into a [`Reverter`].
pub struct FnReverter<F, S, T, E> {
    f: F,
    _marker: PhantomData<fn(&mut S, &T) -> E>,
}

pub fn reverter_fn<F, S, T, E>(f: F) -> FnReverter<F, S, T, E>
where
    F: Fn(&mut S, &T) -> Result<(), E>,
{
    FnReverter {
        f,
        _marker: PhantomData,
    }
}

#[async_trait]
impl<F, S, T, E> Reverter<S, T> for FnReverter<F, S, T, E>
where
    F: Fn(&mut S, &T) -> Result<(), E> + Send + Sync,
    S: Send,
    T: Sync,
    E: From<ConversionError> + Send,
{
    type Error = E;

    async fn revert(
        &self,
        source: &mut S,
        target: &T,
        cancel: &CancellationToken,
    ) -> Result<(), E> {
        ensure_not_cancelled(cancel)?;
        (self.f)(source, target)
    }
}
