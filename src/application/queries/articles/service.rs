use std::sync::Arc;

use crate::application::ports::storage::BlogContextFactory;

pub struct ArticleQueryService {
    pub(super) contexts: Arc<dyn BlogContextFactory>,
}

impl ArticleQueryService {
    pub fn new(contexts: Arc<dyn BlogContextFactory>) -> Self {
        Self { contexts }
    }
}
