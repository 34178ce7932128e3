//! Server state shared by every connection.

use std::sync::Arc;

use crate::{
    domain::MessageRepository, infrastructure::storage::UploadStorage,
    ui::presenter::FeedTemplate,
};

/// Shared application state
pub struct AppState {
    /// Repository（データアクセス層の抽象化）
    pub repository: Arc<dyn MessageRepository>,
    /// Upload directory for attachments
    pub uploads: Arc<UploadStorage>,
    /// Compiled HTML feed fragment
    pub feed_template: FeedTemplate,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn MessageRepository>,
        uploads: UploadStorage,
    ) -> Result<Self, minijinja::Error> {
        Ok(Self {
            repository,
            uploads: Arc::new(uploads),
            feed_template: FeedTemplate::new()?,
        })
    }
}
