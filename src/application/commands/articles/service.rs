// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::application::ports::{
    storage::BlogContextFactory, time::Clock, util::SlugGenerator,
};

pub struct ArticleCommandService {
    pub(super) contexts: Arc<dyn BlogContextFactory>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        contexts: Arc<dyn BlogContextFactory>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            contexts,
            slugger,
            clock,
        }
    }
}
