// Drives the contact form through its timed submission lifecycle
use shared::models::ContactField;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{oneshot, watch, RwLock};
use tracing::{info, warn};

use super::publish;
use crate::config::ContactSettings;
use crate::contact::{ContactError, ContactForm, ContactSnapshot, ContactValidator};
use crate::scheduler::{spawn_after, TaskHandle};

/// Simulated network latency and how long the "sent" state stays up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDelays {
    pub submit: Duration,
    pub reset: Duration,
}

impl From<&ContactSettings> for ContactDelays {
    fn from(settings: &ContactSettings) -> Self {
        Self {
            submit: settings.submit_delay(),
            reset: settings.reset_delay(),
        }
    }
}

pub struct ContactService {
    form: Arc<RwLock<ContactForm>>,
    updates: Arc<watch::Sender<ContactSnapshot>>,
    delays: ContactDelays,
    // Send-then-reset task of the latest submission. Dropped with the service.
    lifecycle: Mutex<Option<TaskHandle>>,
}

impl ContactService {
    pub fn new(validator: ContactValidator, delays: ContactDelays) -> Self {
        let form = ContactForm::new(validator);
        let (tx, _rx) = watch::channel(form.snapshot().clone());
        Self {
            form: Arc::new(RwLock::new(form)),
            updates: Arc::new(tx),
            delays,
            lifecycle: Mutex::new(None),
        }
    }

    pub fn from_settings(settings: &ContactSettings) -> Self {
        Self::new(ContactValidator::new(settings.min_message_len), ContactDelays::from(settings))
    }

    pub fn subscribe(&self) -> watch::Receiver<ContactSnapshot> {
        self.updates.subscribe()
    }

    pub async fn snapshot(&self) -> ContactSnapshot {
        self.form.read().await.snapshot().clone()
    }

    pub async fn edit(&self, field: ContactField, value: impl Into<String>) -> Result<(), ContactError> {
        let mut form = self.form.write().await;
        form.edit(field, value)?;
        publish(&self.updates, form.snapshot());
        Ok(())
    }

    /// Validates, then resolves once the simulated send has marked the form submitted.
    /// The send and the later reset run in one task owned by the service, so dropping
    /// this future does not leave the form locked.
    pub async fn submit(&self) -> Result<(), ContactError> {
        {
            let mut form = self.form.write().await;
            let started = form.begin_submit();
            publish(&self.updates, form.snapshot());
            if let Err(e) = started {
                info!("Contact form rejected: {}", e);
                return Err(e);
            }
        }
        info!("Contact form submitting");

        let (sent_tx, sent_rx) = oneshot::channel();
        let form = self.form.clone();
        let updates = self.updates.clone();
        let reset_delay = self.delays.reset;
        let lifecycle = spawn_after(self.delays.submit, async move {
            let marked = {
                let mut form = form.write().await;
                let marked = form.mark_submitted();
                publish(&updates, form.snapshot());
                marked
            };
            let sent = marked.is_ok();
            // The caller may have stopped waiting.
            let _ = sent_tx.send(marked);
            if !sent {
                return;
            }
            info!("Contact form submitted");

            tokio::time::sleep(reset_delay).await;
            let mut form = form.write().await;
            match form.reset() {
                Ok(()) => {
                    publish(&updates, form.snapshot());
                    info!("Contact form reset");
                }
                Err(e) => warn!("Skipping contact form reset: {}", e),
            }
        });
        self.replace_lifecycle(lifecycle);

        match sent_rx.await {
            Ok(result) => result,
            Err(_) => Err(ContactError::Cancelled),
        }
    }

    fn replace_lifecycle(&self, handle: TaskHandle) {
        let mut slot = match self.lifecycle.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        // A new submission starts from Idle, so the previous task has already reset the form.
        *slot = Some(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::SubmissionStatus;

    fn delays() -> ContactDelays {
        ContactDelays {
            submit: Duration::from_millis(2000),
            reset: Duration::from_millis(3000),
        }
    }

    async fn fill(service: &ContactService) {
        service.edit(ContactField::Name, "Ada").await.unwrap();
        service.edit(ContactField::Email, "ada@example.com").await.unwrap();
        service.edit(ContactField::Subject, "Hello").await.unwrap();
        service.edit(ContactField::Message, "A message long enough").await.unwrap();
    }

    async fn filled_service() -> ContactService {
        let service = ContactService::new(ContactValidator::default(), delays());
        fill(&service).await;
        service
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_submit_never_leaves_idle() {
        let service = ContactService::new(ContactValidator::default(), delays());
        let mut rx = service.subscribe();

        let result = service.submit().await;
        assert!(matches!(result, Err(ContactError::Invalid(_))));

        let snap = rx.borrow_and_update().clone();
        assert_eq!(snap.status, SubmissionStatus::Idle);
        assert_eq!(snap.errors.len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_lifecycle_resets_form() {
        let service = filled_service().await;
        let started = tokio::time::Instant::now();

        service.submit().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(2000));
        assert_eq!(service.snapshot().await.status, SubmissionStatus::Submitted);

        tokio::time::sleep(Duration::from_millis(2900)).await;
        assert_eq!(service.snapshot().await.status, SubmissionStatus::Submitted);

        tokio::time::sleep(Duration::from_millis(200)).await;
        let snap = service.snapshot().await;
        assert_eq!(snap.status, SubmissionStatus::Idle);
        assert!(snap.fields.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_form_locked_while_submitting() {
        let service = Arc::new(filled_service().await);
        let in_flight = service.clone();
        let task = tokio::spawn(async move { in_flight.submit().await });

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(service.snapshot().await.status, SubmissionStatus::Submitting);
        assert_eq!(service.submit().await, Err(ContactError::AlreadySubmitting));
        assert_eq!(service.edit(ContactField::Name, "Bob").await, Err(ContactError::FormLocked));

        task.await.unwrap().unwrap();
        assert_eq!(service.snapshot().await.fields.name, "Ada");
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandoned_submit_still_completes() {
        let service = filled_service().await;

        let waited = tokio::time::timeout(Duration::from_millis(500), service.submit()).await;
        assert!(waited.is_err());
        assert_eq!(service.snapshot().await.status, SubmissionStatus::Submitting);

        tokio::time::sleep(Duration::from_millis(1600)).await;
        assert_eq!(service.snapshot().await.status, SubmissionStatus::Submitted);

        tokio::time::sleep(Duration::from_secs(3600)).await;
        let snap = service.snapshot().await;
        assert_eq!(snap.status, SubmissionStatus::Idle);
        assert!(snap.fields.is_empty());

        fill(&service).await;
        service.submit().await.unwrap();
        assert_eq!(service.snapshot().await.status, SubmissionStatus::Submitted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_cancels_pending_reset() {
        let service = filled_service().await;
        let rx = service.subscribe();

        service.submit().await.unwrap();
        drop(service);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(rx.borrow().status, SubmissionStatus::Submitted);
        assert_eq!(rx.borrow().fields.name, "Ada");
    }

    #[tokio::test(start_paused = true)]
    async fn test_edit_clears_error_for_that_field_only() {
        let service = ContactService::new(ContactValidator::default(), delays());
        let _ = service.submit().await;

        service.edit(ContactField::Subject, "Hi").await.unwrap();
        let snap = service.snapshot().await;
        assert_eq!(snap.errors.get(ContactField::Subject), None);
        assert_eq!(snap.errors.len(), 3);
    }
}
