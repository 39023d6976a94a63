use crate::database::Pool;
use crate::database::model::{EmailLog, EmailLogInsertable};
use crate::database::schema::email_logs;
use anyhow::Result;
use diesel::{QueryDsl, RunQueryDsl, SelectableHelper, insert_into};

pub trait EmailLogHelper {
    fn insert(&self, entry: &EmailLogInsertable) -> Result<usize>;
    fn get_all(&self) -> Result<Vec<EmailLog>>;
}

#[derive(Clone, Debug)]
pub struct EmailLogHelperDatabase {
    pool: Pool,
}

impl EmailLogHelperDatabase {
    pub fn new(pool: Pool) -> Self {
        EmailLogHelperDatabase { pool }
    }
}

impl EmailLogHelper for EmailLogHelperDatabase {
    fn insert(&self, entry: &EmailLogInsertable) -> Result<usize> {
        Ok(insert_into(email_logs::dsl::email_logs)
            .values(entry)
            .execute(&mut self.pool.get()?)?)
    }

    fn get_all(&self) -> Result<Vec<EmailLog>> {
        Ok(email_logs::dsl::email_logs
            .select(EmailLog::as_select())
            .order_by(email_logs::dsl::id)
            .load(&mut self.pool.get()?)?)
    }
}
