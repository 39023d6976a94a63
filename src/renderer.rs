use crate::database::model::{Invoice, PendingTotals};
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const REMINDER_STYLE: &str = r#"body {
    font-family: Arial, sans-serif;
    line-height: 1.6;
    color: #333;
    max-width: 600px;
    margin: 0 auto;
    padding: 20px;
}
.header {
    background: linear-gradient(135deg, #10B981, #059669);
    color: white;
    padding: 20px;
    border-radius: 10px 10px 0 0;
    text-align: center;
}
.content {
    background: #f9f9f9;
    padding: 20px;
    border-radius: 0 0 10px 10px;
}
.invoice-details {
    background: white;
    padding: 15px;
    border-radius: 8px;
    margin: 15px 0;
    border-left: 4px solid #10B981;
}
.amount {
    font-size: 24px;
    font-weight: bold;
    color: #10B981;
}
.button {
    display: inline-block;
    background: #10B981;
    color: white;
    padding: 12px 24px;
    text-decoration: none;
    border-radius: 5px;
    margin: 10px 0;
}
.footer {
    text-align: center;
    margin-top: 20px;
    color: #666;
    font-size: 12px;
}"#;

const SUMMARY_STYLE: &str = r#"body { font-family: Arial, sans-serif; }
.summary { background: #f0f9ff; padding: 20px; border-radius: 10px; }
.highlight { color: #10B981; font-weight: bold; }"#;

/// Renders the reminder email for a single invoice. Optional fields are
/// omitted entirely when they are unset or empty.
pub fn render_reminder(invoice: &Invoice) -> String {
    let greeting = match &invoice.recipient_name {
        Some(name) if !name.is_empty() => escape(name),
        _ => "there".to_string(),
    };

    let due_date = match &invoice.due_date {
        Some(date) => format!(
            "<p><strong>Due Date:</strong> {}</p>\n                    ",
            date.format(DATE_FORMAT)
        ),
        None => String::new(),
    };
    let description = optional_line("Description", &invoice.description);
    let tx_hash = optional_line("Transaction Hash", &invoice.blockchain_tx_hash);

    format!(
        r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Invoice Reminder</title>
    <style>
{REMINDER_STYLE}
    </style>
</head>
<body>
    <div class="header">
        <h1>💰 Invoice Reminder</h1>
        <p>Payment Pending</p>
    </div>

    <div class="content">
        <h2>Hello {greeting}!</h2>

        <p>This is a friendly reminder that you have a pending invoice payment.</p>

        <div class="invoice-details">
            <h3>📋 Invoice Details</h3>
            <p><strong>Invoice ID:</strong> {invoice_id}</p>
            <p><strong>Amount Due:</strong> <span class="amount">{amount}</span></p>
            <p><strong>Recipient Address:</strong> {recipient_address}</p>
            <p><strong>Created Date:</strong> {created_date}</p>
                    {due_date}{description}{tx_hash}
        </div>

        <p><strong>Payment Instructions:</strong></p>
        <ul>
            <li>Please ensure you have sufficient BNB in your wallet</li>
            <li>Connect your wallet to the BNB Chain network</li>
            <li>Complete the payment through the invoice portal</li>
        </ul>

        <a href="#" class="button">View Invoice</a>

        <p>If you have any questions, please don't hesitate to contact us.</p>

        <p>Best regards,<br>BNB Invoice Team</p>
    </div>

    <div class="footer">
        <p>This is an automated reminder. Please do not reply to this email.</p>
        <p>© 2024 BNB Invoice. All rights reserved.</p>
    </div>
</body>
</html>"##,
        invoice_id = escape(&invoice.invoice_id),
        amount = format_amount(invoice.amount),
        recipient_address = escape(&invoice.recipient_address),
        created_date = invoice.created_date.format(DATE_FORMAT),
    )
}

/// Renders the daily summary for the administrator. The caller skips the
/// summary entirely when no invoices were created on the given date.
pub fn render_summary(date: NaiveDate, invoices: &[Invoice], totals: &PendingTotals) -> String {
    let listing = invoices
        .iter()
        .map(|invoice| {
            let recipient = match &invoice.recipient_email {
                Some(email) if !email.is_empty() => email,
                _ => &invoice.recipient_address,
            };

            format!(
                "        <li>Invoice #{} - {} to {}</li>\n",
                escape(&invoice.invoice_id),
                format_amount(invoice.amount),
                escape(recipient),
            )
        })
        .collect::<String>();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <style>
{SUMMARY_STYLE}
    </style>
</head>
<body>
    <h2>📊 Daily Invoice Summary</h2>
    <div class="summary">
        <p><strong>Date:</strong> {date}</p>
        <p><strong>New Invoices Today:</strong> <span class="highlight">{new_today}</span></p>
        <p><strong>Total Pending Invoices:</strong> <span class="highlight">{total_count}</span></p>
        <p><strong>Total Pending Amount:</strong> <span class="highlight">{total_amount}</span></p>
    </div>

    <h3>Today's Invoices:</h3>
    <ul>
{listing}    </ul>
</body>
</html>"#,
        new_today = invoices.len(),
        total_count = totals.count,
        total_amount = format_amount(totals.amount),
    )
}

/// Formats an amount as dollars with thousands separators and two decimals.
pub fn format_amount(amount: f64) -> String {
    let rounded = format!("{:.2}", amount.abs());
    let (whole, fraction) = match rounded.split_once('.') {
        Some(parts) => parts,
        None => (rounded.as_str(), "00"),
    };

    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!(
        "${}{grouped}.{fraction}",
        if amount < 0.0 { "-" } else { "" }
    )
}

fn optional_line(label: &str, value: &Option<String>) -> String {
    match value {
        Some(value) if !value.is_empty() => format!(
            "<p><strong>{label}:</strong> {}</p>\n                    ",
            escape(value)
        ),
        _ => String::new(),
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
