use std::str::FromStr;

use sqlx::PgPool;
use thekedar_core::dates::parse_calendar_date;
use thekedar_core::fields::validate_notes;
use thekedar_core::payment::{validate_payment_amount, PaymentType};
use thekedar_core::types::DbId;
use thekedar_db::models::balance::LabourBalance;
use thekedar_db::models::payment::{CreatePayment, NewPayment, Payment, PaymentWithLabour};
use thekedar_db::repositories::{BalanceRepo, PaymentRepo};

use super::{require_assignment, LabourService};
use crate::error::{AppError, AppResult};

/// Payments and the balances derived from them.
pub struct PaymentService;

impl PaymentService {
    /// Record a payment to an assigned labourer on a project.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreatePayment,
    ) -> AppResult<Payment> {
        validate_payment_amount(input.amount)?;
        let payment_date = parse_calendar_date(&input.payment_date)?;
        let payment_type = PaymentType::from_str(&input.payment_type)?;
        validate_notes(input.notes.as_deref())?;

        require_assignment(pool, project_id, input.labour_id).await?;

        let new = NewPayment {
            project_id,
            labour_id: input.labour_id,
            amount: input.amount,
            payment_date,
            payment_type,
            notes: input.notes.clone(),
        };
        let payment = PaymentRepo::create(pool, &new).await?;
        tracing::info!(
            payment_id = %payment.id,
            project_id = %project_id,
            labour_id = %payment.labour_id,
            amount = %payment.amount,
            "Payment recorded"
        );
        Ok(payment)
    }

    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Payment> {
        PaymentRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::not_found("Payment", id))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        if PaymentRepo::delete(pool, id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Payment", id))
        }
    }

    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> AppResult<Vec<PaymentWithLabour>> {
        Ok(PaymentRepo::list_by_project(pool, project_id).await?)
    }

    /// A labourer's history, limited to the projects `owner_id` owns.
    pub async fn list_by_labour(
        pool: &PgPool,
        labour_id: DbId,
        owner_id: DbId,
    ) -> AppResult<Vec<Payment>> {
        LabourService::get(pool, labour_id).await?;
        Ok(PaymentRepo::list_by_labour(pool, labour_id, owner_id).await?)
    }

    /// Earned, paid and balance for one labourer on one project.
    pub async fn get_balance(
        pool: &PgPool,
        project_id: DbId,
        labour_id: DbId,
    ) -> AppResult<LabourBalance> {
        BalanceRepo::balance_inputs(pool, project_id, labour_id)
            .await?
            .map(LabourBalance::from)
            .ok_or_else(|| AppError::not_found("Labour", labour_id))
    }

    /// Balances of every labourer assigned to a project, by name.
    pub async fn list_balances(pool: &PgPool, project_id: DbId) -> AppResult<Vec<LabourBalance>> {
        let rows = BalanceRepo::list_for_project(pool, project_id).await?;
        Ok(rows.into_iter().map(LabourBalance::from).collect())
    }
}
