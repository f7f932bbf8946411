//! Application use-case trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// A single application operation with typed input and output.
///
/// Use cases receive their collaborators at construction time and are
/// invoked through [`UseCase::execute`].
#[async_trait]
pub trait UseCase: Send + Sync + 'static {
    /// Input parameters.
    type Input: Send + 'static;
    /// Result of a successful run.
    type Output: Send + 'static;

    /// Run the use case.
    async fn execute(&self, input: Self::Input) -> AppResult<Self::Output>;
}
