//! Balance aggregates over `work_days` and `payments`.
//!
//! PostgreSQL sums the `NUMERIC` columns exactly; the final arithmetic is
//! done by [`thekedar_core::balance::compute_balance`] when the
//! [`BalanceInputs`] are converted into a [`LabourBalance`].
//!
//! [`LabourBalance`]: crate::models::balance::LabourBalance

use sqlx::PgPool;
use thekedar_core::attendance::WorkStatus;
use thekedar_core::types::DbId;

use crate::models::balance::BalanceInputs;

/// Builds the `CASE` expression mapping a status to its wage multiplier.
fn day_units_case(status_column: &str) -> String {
    let arms: String = [WorkStatus::FullDay, WorkStatus::HalfDay, WorkStatus::Absent]
        .iter()
        .map(|s| format!(" WHEN '{}' THEN {}", s.as_str(), s.wage_multiplier()))
        .collect();
    format!("CASE {status_column}{arms} ELSE 0 END")
}

/// Select list producing one [`BalanceInputs`] row per labourer `l`,
/// scoped to the project bound as `$1`.
fn aggregate_columns() -> String {
    format!(
        "l.id AS labour_id,
         l.name AS labour_name,
         l.daily_wage,
         COALESCE((
            SELECT SUM({case})
            FROM work_days w
            WHERE w.project_id = $1 AND w.labour_id = l.id
         ), 0)::NUMERIC AS day_units,
         COALESCE((
            SELECT SUM(p.amount)
            FROM payments p
            WHERE p.project_id = $1 AND p.labour_id = l.id
         ), 0)::NUMERIC AS total_paid",
        case = day_units_case("w.status")
    )
}

/// Reads balance aggregates for labourers on a project.
pub struct BalanceRepo;

impl BalanceRepo {
    /// Aggregates for one labourer on one project.
    ///
    /// Returns `None` if the labourer does not exist. A labourer with no
    /// records on the project yields zero aggregates.
    pub async fn balance_inputs(
        pool: &PgPool,
        project_id: DbId,
        labour_id: DbId,
    ) -> Result<Option<BalanceInputs>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM labours l WHERE l.id = $2",
            aggregate_columns()
        );
        sqlx::query_as::<_, BalanceInputs>(&query)
            .bind(project_id)
            .bind(labour_id)
            .fetch_optional(pool)
            .await
    }

    /// Aggregates for every labourer currently assigned to a project, by name.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<BalanceInputs>, sqlx::Error> {
        let query = format!(
            "SELECT {}
             FROM labours l
             INNER JOIN project_labours pl ON pl.labour_id = l.id
             WHERE pl.project_id = $1
             ORDER BY l.name ASC",
            aggregate_columns()
        );
        sqlx::query_as::<_, BalanceInputs>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_expression_covers_every_status() {
        let case = day_units_case("w.status");
        assert_eq!(
            case,
            "CASE w.status WHEN 'full_day' THEN 1 WHEN 'half_day' THEN 0.5 \
             WHEN 'absent' THEN 0 ELSE 0 END"
        );
    }
}
