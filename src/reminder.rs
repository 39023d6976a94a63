use crate::database::helpers::email_log_helper::EmailLogHelper;
use crate::database::helpers::invoice_helper::InvoiceHelper;
use crate::database::model::{EmailLogInsertable, EmailStatus, Invoice};
use crate::mailer::Mailer;
use crate::renderer;
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use log::{debug, error, info, warn};

const REMINDER_EMAIL_TYPE: &str = "reminder";

#[derive(Clone, Debug)]
pub struct Reminder<T, L, M> {
    invoice_helper: T,
    email_log_helper: L,
    mailer: M,
    admin_email: Option<String>,
}

impl<T, L, M> Reminder<T, L, M>
where
    T: InvoiceHelper,
    L: EmailLogHelper,
    M: Mailer,
{
    pub fn new(
        invoice_helper: T,
        email_log_helper: L,
        mailer: M,
        admin_email: Option<String>,
    ) -> Self {
        Reminder {
            invoice_helper,
            email_log_helper,
            mailer,
            admin_email,
        }
    }

    /// Runs the whole flow: one reminder per pending invoice, then the
    /// summary of today's invoices for the administrator.
    pub fn run(&self) -> Result<()> {
        self.send_reminders()?;
        self.send_daily_summary(Utc::now().date_naive())
    }

    pub fn send_reminders(&self) -> Result<()> {
        let pending = self.invoice_helper.get_pending()?;
        if pending.is_empty() {
            info!("No pending invoices found");
            return Ok(());
        }

        info!("Sending reminders for {} pending invoices", pending.len());

        for invoice in pending {
            let recipient = match invoice.recipient_email.as_deref() {
                Some(email) if !email.is_empty() => email,
                _ => {
                    warn!("No email address for invoice {}", invoice.invoice_id);
                    continue;
                }
            };

            let subject = format!(
                "Payment Reminder - Invoice #{} - {}",
                invoice.invoice_id,
                renderer::format_amount(invoice.amount)
            );

            let status = match self
                .mailer
                .send(recipient, &subject, &renderer::render_reminder(&invoice))
            {
                Ok(()) => {
                    info!(
                        "Sent reminder for invoice {} to {}",
                        invoice.invoice_id, recipient
                    );
                    EmailStatus::Sent
                }
                Err(err) => {
                    warn!(
                        "Could not send reminder for invoice {}: {}",
                        invoice.invoice_id, err
                    );
                    EmailStatus::Failed
                }
            };

            self.record(&invoice, recipient, status);
        }

        Ok(())
    }

    pub fn send_daily_summary(&self, date: NaiveDate) -> Result<()> {
        let aggregate = self.invoice_helper.daily_aggregate(date)?;
        if aggregate.invoices.is_empty() {
            info!("No invoices created on {}", date);
            return Ok(());
        }

        let admin = match self.admin_email.as_deref() {
            Some(admin) if !admin.is_empty() => admin,
            _ => {
                debug!("No admin email configured; not sending a daily summary");
                return Ok(());
            }
        };

        let subject = format!("Daily Invoice Summary - {}", date);
        let html = renderer::render_summary(date, &aggregate.invoices, &aggregate.totals);

        match self.mailer.send(admin, &subject, &html) {
            Ok(()) => info!("Sent daily summary to {}", admin),
            Err(err) => warn!("Could not send daily summary: {}", err),
        };

        Ok(())
    }

    // A failed audit write should not fail the batch
    fn record(&self, invoice: &Invoice, recipient: &str, status: EmailStatus) {
        if let Err(err) = self.email_log_helper.insert(&EmailLogInsertable {
            invoice_id: invoice.invoice_id.clone(),
            email_sent_to: recipient.to_string(),
            email_type: REMINDER_EMAIL_TYPE.to_string(),
            status: status.to_string(),
        }) {
            error!(
                "Could not log email for invoice {}: {}",
                invoice.invoice_id, err
            );
        }
    }
}
