use std::sync::Arc;

use crate::application::ports::storage::BlogContextFactory;

pub struct CategoryQueryService {
    pub(super) contexts: Arc<dyn BlogContextFactory>,
}

impl CategoryQueryService {
    pub fn new(contexts: Arc<dyn BlogContextFactory>) -> Self {
        Self { contexts }
    }
}
