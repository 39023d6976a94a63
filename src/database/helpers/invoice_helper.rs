use crate::database::Pool;
use crate::database::model::{
    DailyAggregate, Invoice, InvoiceInsertable, InvoiceState, PendingTotals,
};
use crate::database::schema::invoices;
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime, TimeDelta};
use diesel::dsl::{count_star, sum};
use diesel::result::{DatabaseErrorKind, Error};
use diesel::{ExpressionMethods, insert_into};
use diesel::{QueryDsl, RunQueryDsl, SelectableHelper};
use log::{info, warn};

pub trait InvoiceHelper {
    fn insert(&self, invoice: &InvoiceInsertable) -> Result<bool>;
    fn get_pending(&self) -> Result<Vec<Invoice>>;
    fn daily_aggregate(&self, date: NaiveDate) -> Result<DailyAggregate>;
}

#[derive(Clone, Debug)]
pub struct InvoiceHelperDatabase {
    pool: Pool,
}

impl InvoiceHelperDatabase {
    pub fn new(pool: Pool) -> Self {
        InvoiceHelperDatabase { pool }
    }
}

impl InvoiceHelper for InvoiceHelperDatabase {
    fn insert(&self, invoice: &InvoiceInsertable) -> Result<bool> {
        match insert_into(invoices::dsl::invoices)
            .values(invoice)
            .execute(&mut self.pool.get()?)
        {
            Ok(_) => {
                info!("Added invoice {}", invoice.invoice_id);
                Ok(true)
            }
            Err(Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                warn!("Invoice {} exists already", invoice.invoice_id);
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn get_pending(&self) -> Result<Vec<Invoice>> {
        Ok(invoices::dsl::invoices
            .select(Invoice::as_select())
            .filter(invoices::dsl::status.eq(InvoiceState::Pending.to_string()))
            .order_by(invoices::dsl::created_date.desc())
            .load(&mut self.pool.get()?)?)
    }

    fn daily_aggregate(&self, date: NaiveDate) -> Result<DailyAggregate> {
        let mut con = self.pool.get()?;

        let start = date.and_time(NaiveTime::MIN);
        let end = start + TimeDelta::days(1);

        let invoices = invoices::dsl::invoices
            .select(Invoice::as_select())
            .filter(invoices::dsl::status.eq(InvoiceState::Pending.to_string()))
            .filter(invoices::dsl::created_date.ge(start))
            .filter(invoices::dsl::created_date.lt(end))
            .order_by(invoices::dsl::created_date.desc())
            .load(&mut con)?;

        // Totals are over everything still pending, not just the given date
        let (count, amount) = invoices::dsl::invoices
            .filter(invoices::dsl::status.eq(InvoiceState::Pending.to_string()))
            .select((count_star(), sum(invoices::dsl::amount)))
            .first::<(i64, Option<f64>)>(&mut con)?;

        Ok(DailyAggregate::new(
            invoices,
            PendingTotals {
                count,
                amount: amount.unwrap_or(0.0),
            },
        ))
    }
}
