use crate::domain::model::{OutboundEmail, Pairing};
use crate::domain::ports::Mailer;
use crate::utils::error::{Result, SantaError};
use reqwest::Client;

/// Mail transport backed by an HTTP send API: one JSON POST per message,
/// bearer-token auth.
pub struct HttpMailer {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpMailer {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }
}

#[async_trait::async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: &OutboundEmail) -> Result<()> {
        tracing::debug!("POST {} for {}", self.endpoint, message.to);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(message)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SantaError::MailApiError {
                status: response.status().as_u16(),
                recipient: message.to.clone(),
            });
        }
        Ok(())
    }
}

/// Outcome of a dispatch run. Failed sends are collected rather than
/// aborting the run, so one bad address does not strand the rest of the
/// group without their assignments.
#[derive(Debug, Default)]
pub struct DispatchSummary {
    pub sent: usize,
    pub failed: Vec<(String, String)>,
}

impl DispatchSummary {
    pub fn total(&self) -> usize {
        self.sent + self.failed.len()
    }

    pub fn into_result(self) -> Result<DispatchSummary> {
        if self.failed.is_empty() {
            Ok(self)
        } else {
            Err(SantaError::DispatchIncomplete {
                failed: self.failed.len(),
                total: self.total(),
            })
        }
    }
}

/// Sends one assignment email per giver, rendered from a body template.
pub struct Dispatcher<M: Mailer> {
    mailer: M,
    template: String,
    subject: String,
    from: String,
}

impl<M: Mailer> Dispatcher<M> {
    pub fn new(mailer: M, template: String, subject: String, from: String) -> Self {
        Self {
            mailer,
            template,
            subject,
            from,
        }
    }

    pub async fn dispatch(&self, pairing: &Pairing) -> DispatchSummary {
        let mut summary = DispatchSummary::default();

        for assignment in pairing.iter() {
            let message = OutboundEmail {
                from: self.from.clone(),
                to: assignment.giver.email.clone(),
                subject: self.subject.clone(),
                body: render_body(&self.template, &assignment.giver.name, &assignment.recipient.name),
            };

            match self.mailer.send(&message).await {
                Ok(()) => {
                    tracing::info!("Sent email to {}", message.to);
                    summary.sent += 1;
                }
                Err(e) => {
                    tracing::error!("Failed to send email to {}: {}", message.to, e);
                    summary.failed.push((message.to, e.to_string()));
                }
            }
        }

        summary
    }
}

/// Substitute the giver and recipient names into the body template.
/// Placeholder names match the historical template format.
pub fn render_body(template: &str, giver_name: &str, recipient_name: &str) -> String {
    template
        .replace("{user_name}", giver_name)
        .replace("{target_name}", recipient_name)
}
