use crate::utils::error::{ConversionError, Result};
use tokio_util::sync::CancellationToken;

/// Fails with [`ConversionError::Cancelled`] once `cancel` has been triggered.
///
/// Meant for converter implementations; the batch helpers do not call it
/// between items.
pub fn ensure_not_cancelled(cancel: &CancellationToken) -> Result<()> {
    if cancel.is_cancelled() {
        tracing::debug!("Cancellation observed");
        return Err(ConversionError::Cancelled);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_not_cancelled() {
        let token = CancellationToken::new();
        assert!(ensure_not_cancelled(&token).is_ok());

        token.cancel();
        assert!(ensure_not_cancelled(&token).unwrap_err().is_cancelled());
    }

    #[test]
    fn test_child_token_follows_parent() {
        let parent = CancellationToken::new();
        let child = parent.child_token();
        parent.cancel();
        assert!(ensure_not_cancelled(&child).is_err());
    }
}
