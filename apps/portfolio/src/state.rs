use std::sync::Arc;

use crate::contact::clipboard::{Clipboard, CopyButton};
use crate::contact::emailjs::DeliveryClient;
use crate::contact::flow::SubmissionFlow;
use crate::content::ContentRepository;
use crate::models::content::ContentSnapshot;

/// Shared application state injected into every command.
#[derive(Clone)]
pub struct AppState {
    pub content: ContentRepository,
    pub clipboard: Arc<dyn Clipboard>,
}

impl AppState {
    pub fn snapshot(&self) -> Arc<ContentSnapshot> {
        self.content.get()
    }

    /// A fresh contact form bound to the given delivery collaborator.
    pub fn contact_flow(&self, delivery: Arc<dyn DeliveryClient>) -> SubmissionFlow {
        SubmissionFlow::new(delivery)
    }

    pub fn copy_button(&self) -> CopyButton {
        CopyButton::new(Arc::clone(&self.clipboard))
    }
}
