use std::sync::Arc;

use crate::domain::{completion::ports::CompletionClient, reference::ReferenceContext};

#[derive(Clone)]
pub struct Service<C>
where
    C: CompletionClient,
{
    pub(crate) completion_client: C,
    pub(crate) reference: Arc<ReferenceContext>,
}

impl<C> Service<C>
where
    C: CompletionClient,
{
    pub fn new(completion_client: C, reference: Arc<ReferenceContext>) -> Self {
        Self {
            completion_client,
            reference,
        }
    }
}
