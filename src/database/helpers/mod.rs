pub mod email_log_helper;
pub mod invoice_helper;
