use crate::domain::ports::{Converter, Reverter};
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Converts one source into a freshly defaulted target.
pub async fn convert_one<S, T, C>(
    converter: &C,
    source: &S,
    cancel: &CancellationToken,
) -> Result<T, C::Error>
where
    C: Converter<S, T> + ?Sized,
    T: Default,
{
    convert_one_with(converter, source, T::default, cancel).await
}

/// Like [`convert_one`], but the target comes from `make_target`.
pub async fn convert_one_with<S, T, C, F>(
    converter: &C,
    source: &S,
    make_target: F,
    cancel: &CancellationToken,
) -> Result<T, C::Error>
where
    C: Converter<S, T> + ?Sized,
    F: FnOnce() -> T,
{
    let mut target = make_target();
    converter.convert(source, &mut target, cancel).await?;
    Ok(target)
}

/// Converts `sources` in order, one at a time.
///
/// The first failure stops the batch and is returned as-is; targets built
/// before it are dropped.
pub async fn convert_many<'s, S, T, C, I>(
    converter: &C,
    sources: I,
    cancel: &CancellationToken,
) -> Result<Vec<T>, C::Error>
where
    C: Converter<S, T> + ?Sized,
    S: 's,
    T: Default,
    I: IntoIterator<Item = &'s S>,
{
    convert_many_with(converter, sources, T::default, cancel).await
}

/// Like [`convert_many`], but every target comes from `make_target`.
pub async fn convert_many_with<'s, S, T, C, I, F>(
    converter: &C,
    sources: I,
    make_target: F,
    cancel: &CancellationToken,
) -> Result<Vec<T>, C::Error>
where
    C: Converter<S, T> + ?Sized,
    S: 's,
    I: IntoIterator<Item = &'s S>,
    F: Fn() -> T,
{
    let sources = sources.into_iter();
    tracing::debug!(expected = sources.size_hint().0, "Converting batch");

    let mut targets = Vec::with_capacity(sources.size_hint().0);
    for (index, source) in sources.enumerate() {
        match convert_one_with(converter, source, &make_target, cancel).await {
            Ok(target) => targets.push(target),
            Err(e) => {
                tracing::debug!(index, "Conversion failed, aborting batch");
                return Err(e);
            }
        }
    }

    tracing::debug!(count = targets.len(), "Converted batch");
    Ok(targets)
}

/// Reverts one target into a freshly defaulted source.
pub async fn revert_one<S, T, R>(
    reverter: &R,
    target: &T,
    cancel: &CancellationToken,
) -> Result<S, R::Error>
where
    R: Reverter<S, T> + ?Sized,
    S: Default,
{
    revert_one_with(reverter, target, S::default, cancel).await
}

/// Like [`revert_one`], but the source comes from `make_source`.
pub async fn revert_one_with<S, T, R, F>(
    reverter: &R,
    target: &T,
    make_source: F,
    cancel: &CancellationToken,
) -> Result<S, R::Error>
where
    R: Reverter<S, T> + ?Sized,
    F: FnOnce() -> S,
{
    let mut source = make_source();
    reverter.revert(&mut source, target, cancel).await?;
    Ok(source)
}

/// Reverts `targets` in order, stopping at the first failure.
pub async fn revert_many<'t, S, T, R, I>(
    reverter: &R,
    targets: I,
    cancel: &CancellationToken,
) -> Result<Vec<S>, R::Error>
where
    R: Reverter<S, T> + ?Sized,
    S: Default,
    T: 't,
    I: IntoIterator<Item = &'t T>,
{
    revert_many_with(reverter, targets, S::default, cancel).await
}

/// Like [`revert_many`], but every source comes from `make_source`.
pub async fn revert_many_with<'t, S, T, R, I, F>(
    reverter: &R,
    targets: I,
    make_source: F,
    cancel: &CancellationToken,
) -> Result<Vec<S>, R::Error>
where
    R: Reverter<S, T> + ?Sized,
    T: 't,
    I: IntoIterator<Item = &'t T>,
    F: Fn() -> S,
{
    let targets = targets.into_iter();
    tracing::debug!(expected = targets.size_hint().0, "Reverting batch");

    let mut sources = Vec::with_capacity(targets.size_hint().0);
    for (index, target) in targets.enumerate() {
        match revert_one_with(reverter, target, &make_source, cancel).await {
            Ok(source) => sources.push(source),
            Err(e) => {
                tracing::debug!(index, "Reversion failed, aborting batch");
                return Err(e);
            }
        }
    }

    tracing::debug!(count = sources.len(), "Reverted batch");
    Ok(sources)
}

/// Method-call form of the conversion helpers, available on every [`Converter`].
pub trait ConverterExt<S, T>: Converter<S, T> {
    fn convert_one<'a>(
        &'a self,
        source: &'a S,
        cancel: &'a CancellationToken,
    ) -> impl Future<Output = Result<T, Self::Error>> + Send + 'a
    where
        S: Sync + 'a,
        T: Default + Send + 'a;

    fn convert_one_with<'a, F>(
        &'a self,
        source: &'a S,
        make_target: F,
        cancel: &'a CancellationToken,
    ) -> impl Future<Output = Result<T, Self::Error>> + Send + 'a
    where
        S: Sync + 'a,
        T: Send + 'a,
        F: FnOnce() -> T + Send + 'a;

    fn convert_many<'a, I>(
        &'a self,
        sources: I,
        cancel: &'a CancellationToken,
    ) -> impl Future<Output = Result<Vec<T>, Self::Error>> + Send + 'a
    where
        S: Sync + 'a,
        T: Default + Send + 'a,
        I: IntoIterator<Item = &'a S> + Send + 'a,
        I::IntoIter: Send + 'a;

    fn convert_many_with<'a, I, F>(
        &'a self,
        sources: I,
        make_target: F,
        cancel: &'a CancellationToken,
    ) -> impl Future<Output = Result<Vec<T>, Self::Error>> + Send + 'a
    where
        S: Sync + 'a,
        T: Send + 'a,
        F: Fn() -> T + Send + Sync + 'a,
        I: IntoIterator<Item = &'a S> + Send + 'a,
        I::IntoIter: Send + 'a;
}

impl<S, T, C> ConverterExt<S, T> for C
where
    C: Converter<S, T> + ?Sized,
{
    fn convert_one<'a>(
        &'a self,
        source: &'a S,
        cancel: &'a CancellationToken,
    ) -> impl Future<Output = Result<T, Self::Error>> + Send + 'a
    where
        S: Sync + 'a,
        T: Default + Send + 'a,
    {
        convert_one(self, source, cancel)
    }

    fn convert_one_with<'a, F>(
        &'a self,
        source: &'a S,
        make_target: F,
        cancel: &'a CancellationToken,
    ) -> impl Future<Output = Result<T, Self::Error>> + Send + 'a
    where
        S: Sync + 'a,
        T: Send + 'a,
        F: FnOnce() -> T + Send + 'a,
    {
        convert_one_with(self, source, make_target, cancel)
    }

    fn convert_many<'a, I>(
        &'a self,
        sources: I,
        cancel: &'a CancellationToken,
    ) -> impl Future<Output = Result<Vec<T>, Self::Error>> + Send + 'a
    where
        S: Sync + 'a,
        T: Default + Send + 'a,
        I: IntoIterator<Item = &'a S> + Send + 'a,
        I::IntoIter: Send + 'a,
    {
        convert_many(self, sources, cancel)
    }

    fn convert_many_with<'a, I, F>(
        &'a self,
        sources: I,
        make_target: F,
        cancel: &'a CancellationToken,
    ) -> impl Future<Output = Result<Vec<T>, Self::Error>> + Send + 'a
    where
        S: Sync + 'a,
        T: Send + 'a,
        F: Fn() -> T + Send + Sync + 'a,
        I: IntoIterator<Item = &'a S> + Send + 'a,
        I::IntoIter: Send + 'a,
    {
        convert_many_with(self, sources, make_target, cancel)
    }
}

/// Method-call form of the reversion helpers, available on every [`Reverter`].
pub trait ReverterExt<S, T>: Reverter<S, T> {
    fn revert_one<'a>(
        &'a self,
        target: &'a T,
        cancel: &'a CancellationToken,
    ) -> impl Future<Output = Result<S, Self::Error>> + Send + 'a
    where
        S: Default + Send + 'a,
        T: Sync + 'a;

    fn revert_one_with<'a, F>(
        &'a self,
        target: &'a T,
        make_source: F,
        cancel: &'a CancellationToken,
    ) -> impl Future<Output = Result<S, Self::Error>> + Send + 'a
    where
        S: Send + 'a,
        T: Sync + 'a,
        F: FnOnce() -> S + Send + 'a;

    fn revert_many<'a, I>(
        &'a self,
        targets: I,
        cancel: &'a CancellationToken,
    ) -> impl Future<Output = Result<Vec<S>, Self::Error>> + Send + 'a
    where
        S: Default + Send + 'a,
        T: Sync + 'a,
        I: IntoIterator<Item = &'a T> + Send + 'a,
        I::IntoIter: Send + 'a;

    fn revert_many_with<'a, I, F>(
        &'a self,
        targets: I,
        make_source: F,
        cancel: &'a CancellationToken,
    ) -> impl Future<Output = Result<Vec<S>, Self::Error>> + Send + 'a
    where
        S: Send + 'a,
        T: Sync + 'a,
        F: Fn() -> S + Send + Sync + 'a,
        I: IntoIterator<Item = &'a T> + Send + 'a,
        I::IntoIter: Send + 'a;
}

impl<S, T, R> ReverterExt<S, T> for R
where
    R: Reverter<S, T> + ?Sized,
{
    fn revert_one<'a>(
        &'a self,
        target: &'a T,
        cancel: &'a CancellationToken,
    ) -> impl Future<Output = Result<S, Self::Error>> + Send + 'a
    where
        S: Default + Send + 'a,
        T: Sync + 'a,
    {
        revert_one(self, target, cancel)
    }

    fn revert_one_with<'a, F>(
        &'a self,
        target: &'a T,
        make_source: F,
        cancel: &'a CancellationToken,
    ) -> impl Future<Output = Result<S, Self::Error>> + Send + 'a
    where
        S: Send + 'a,
        T: Sync + 'a,
        F: FnOnce() -> S + Send + 'a,
    {
        revert_one_with(self, target, make_source, cancel)
    }

    fn revert_many<'a, I>(
        &'a self,
        targets: I,
        cancel: &'a CancellationToken,
    ) -> impl Future<Output = Result<Vec<S>, Self::Error>> + Send + 'a
    where
        S: Default + Send + 'a,
        T: Sync + 'a,
        I: IntoIterator<Item = &'a T> + Send + 'a,
        I::IntoIter: Send + 'a,
    {
        revert_many(self, targets, cancel)
    }

    fn revert_many_with<'a, I, F>(
        &'a self,
        targets: I,
        make_source: F,
        cancel: &'a CancellationToken,
    ) -> impl Future<Output = Result<Vec<S>, Self::Error>> + Send + 'a
    where
        S: Send + 'a,
        T: Sync + 'a,
        F: Fn() -> S + Send + Sync + 'a,
        I: IntoIterator<Item = &'a T> + Send + 'a,
        I::IntoIter: Send + 'a,
    {
        revert_many_with(self, targets, make_source, cancel)
    }
}
