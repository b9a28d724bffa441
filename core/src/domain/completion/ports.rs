use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    completion::entities::{CompletionRequest, CompletionResponse},
};

/// Completion service boundary. One outbound call per invocation, no retry.
#[cfg_attr(test, mockall::automock)]
pub trait CompletionClient: Send + Sync {
    fn invoke(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse, CoreError>> + Send;
}
