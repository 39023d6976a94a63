use anyhow::Result;
use dun::config::Config;
use dun::database;
use dun::database::helpers::email_log_helper::EmailLogHelperDatabase;
use dun::database::helpers::invoice_helper::InvoiceHelperDatabase;
use dun::mailer::SmtpMailer;
use dun::reminder::Reminder;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,dun=debug")),
        )
        .init();

    let config = Config::from_env()?;

    let pool = database::connect(&config.db_path)
        .map_err(|err| anyhow::anyhow!("could not connect to database: {err}"))?;

    let mailer = SmtpMailer::new(&config);
    let reminder = Reminder::new(
        InvoiceHelperDatabase::new(pool.clone()),
        EmailLogHelperDatabase::new(pool),
        mailer,
        config.admin_email,
    );

    reminder.run()
}
