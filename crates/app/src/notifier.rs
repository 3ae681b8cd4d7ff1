//! Outbound order notifications.
//!
//! Dispatch never blocks the caller: the HTTP notifier hands the request to
//! a spawned task and only reports whether it could be scheduled.

use mockall::automock;
use reqwest::{Client, Response};
use serde::Serialize;
use thiserror::Error;
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

/// Message sent to a customer after an order is placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderNotification {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OrderNotification {
    #[must_use]
    pub fn order_placed(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: "Order Placed".to_string(),
            body: "Your order has been placed successfully.".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("no async runtime available to dispatch the notification")]
    NoRuntime,
}

#[automock]
pub trait Notifier: Send + Sync {
    /// Schedule delivery of `notification`. Delivery itself is not awaited.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification could not be scheduled.
    fn dispatch(&self, notification: OrderNotification) -> Result<(), NotifierError>;
}

#[derive(Debug, Serialize)]
struct MessageBody<'a> {
    to: &'a str,
    from: &'a str,
    subject: &'a str,
    body: &'a str,
}

/// Posts notifications as JSON to a mail relay endpoint.
#[derive(Debug, Clone)]
pub struct HttpNotifier {
    http: Client,
    endpoint: String,
    sender: String,
}

impl HttpNotifier {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, sender: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
            sender: sender.into(),
        }
    }
}

impl Notifier for HttpNotifier {
    fn dispatch(&self, notification: OrderNotification) -> Result<(), NotifierError> {
        let handle = Handle::try_current().map_err(|_no_runtime| NotifierError::NoRuntime)?;

        let request = self.http.post(&self.endpoint).json(&MessageBody {
            to: &notification.to,
            from: &self.sender,
            subject: &notification.subject,
            body: &notification.body,
        });

        handle.spawn(async move {
            match request.send().await.and_then(Response::error_for_status) {
                Ok(response) => {
                    debug!(status = %response.status(), subject = %notification.subject, "notification delivered");
                }
                Err(error) => {
                    warn!(error = %error, subject = %notification.subject, "notification delivery failed");
                }
            }
        });

        Ok(())
    }
}

/// Records notifications in the log instead of delivering them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn dispatch(&self, notification: OrderNotification) -> Result<(), NotifierError> {
        info!(
            to = %notification.to,
            subject = %notification.subject,
            "notification not delivered: no notifier endpoint configured"
        );

        Ok(())
    }
}
