// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::application::ports::{storage::BlogContextFactory, time::Clock};

pub struct CategoryCommandService {
    pub(super) contexts: Arc<dyn BlogContextFactory>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(contexts: Arc<dyn BlogContextFactory>, clock: Arc<dyn Clock>) -> Self {
        Self { contexts, clock }
    }
}
