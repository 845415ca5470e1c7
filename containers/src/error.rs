use thiserror::Error;

/// A combinator was called in a way its contract forbids.
///
/// Domain failures never show up here; they travel as data inside
/// [`Outcome`](crate::Outcome) and [`Either`](crate::Either).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractError {
  /// A selector or predicate was missing on a branch that needed it.
  #[error("value cannot be null (parameter '{0}')")]
  NullArgument(&'static str),
  #[error("invalid state: {0}")]
  InvalidState(&'static str),
}

/// Unwraps a checked argument, failing with the parameter name.
pub(crate) fn require<F>(
  arg: Option<F>,
  name: &'static str,
) -> Result<F, ContractError> {
  arg.ok_or_else(|| {
    log::debug!("rejecting null argument '{}'", name);
    ContractError::NullArgument(name)
  })
}

pub(crate) fn invalid_state(reason: &'static str) -> ContractError {
  log::debug!("rejecting invalid state: {}", reason);
  ContractError::InvalidState(reason)
}
