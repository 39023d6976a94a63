use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::Serialize;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InvoiceState {
    Pending,
    Paid,
}

impl InvoiceState {
    pub fn to_string(self) -> String {
        Into::<String>::into(self)
    }
}

impl From<InvoiceState> for String {
    fn from(value: InvoiceState) -> Self {
        match value {
            InvoiceState::Pending => "pending",
            InvoiceState::Paid => "paid",
        }
        .to_string()
    }
}

impl TryFrom<&str> for InvoiceState {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "pending" => Ok(InvoiceState::Pending),
            "paid" => Ok(InvoiceState::Paid),
            &_ => Err("unknown invoice status"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum EmailStatus {
    Sent,
    Failed,
}

impl EmailStatus {
    pub fn to_string(self) -> String {
        Into::<String>::into(self)
    }
}

impl From<EmailStatus> for String {
    fn from(value: EmailStatus) -> Self {
        match value {
            EmailStatus::Sent => "sent",
            EmailStatus::Failed => "failed",
        }
        .to_string()
    }
}

impl TryFrom<&str> for EmailStatus {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "sent" => Ok(EmailStatus::Sent),
            "failed" => Ok(EmailStatus::Failed),
            &_ => Err("unknown email status"),
        }
    }
}

#[derive(Queryable, Identifiable, Selectable, Serialize, Debug, PartialEq, Clone)]
#[diesel(table_name = crate::database::schema::invoices)]
pub struct Invoice {
    pub id: i64,
    pub invoice_id: String,
    pub recipient_address: String,
    pub recipient_email: Option<String>,
    pub recipient_name: Option<String>,
    pub amount: f64,
    pub status: String,
    pub created_date: chrono::NaiveDateTime,
    pub due_date: Option<chrono::NaiveDateTime>,
    pub description: Option<String>,
    pub blockchain_tx_hash: Option<String>,
}

#[derive(Insertable, Debug, PartialEq, Clone)]
#[diesel(table_name = crate::database::schema::invoices)]
pub struct InvoiceInsertable {
    pub invoice_id: String,
    pub recipient_address: String,
    pub recipient_email: Option<String>,
    pub recipient_name: Option<String>,
    pub amount: f64,
    pub status: String,
    pub due_date: Option<chrono::NaiveDateTime>,
    pub description: Option<String>,
    pub blockchain_tx_hash: Option<String>,
}

#[derive(Queryable, Identifiable, Selectable, Serialize, Debug, PartialEq, Clone)]
#[diesel(table_name = crate::database::schema::email_logs)]
pub struct EmailLog {
    pub id: i64,
    pub invoice_id: String,
    pub email_sent_to: String,
    pub sent_date: chrono::NaiveDateTime,
    pub email_type: String,
    pub status: String,
}

#[derive(Insertable, Debug, PartialEq, Clone)]
#[diesel(table_name = crate::database::schema::email_logs)]
pub struct EmailLogInsertable {
    pub invoice_id: String,
    pub email_sent_to: String,
    pub email_type: String,
    pub status: String,
}

#[derive(Serialize, Debug, PartialEq, Clone, Copy)]
pub struct PendingTotals {
    pub count: i64,
    pub amount: f64,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DailyAggregate {
    pub invoices: Vec<Invoice>,
    pub totals: PendingTotals,
}

impl DailyAggregate {
    pub fn new(invoices: Vec<Invoice>, totals: PendingTotals) -> Self {
        DailyAggregate { invoices, totals }
    }
}
