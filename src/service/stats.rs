use tracing::debug;

use crate::db::Store;
use crate::error::{AppError, AppResult};
use crate::model::stats::EmployeeStats;

/// Present/total day counts for every employee, including those who have no
/// attendance at all, ordered by full name.
pub async fn employee_stats(store: &Store) -> AppResult<Vec<EmployeeStats>> {
    store
        .with_connection(|conn| {
            Box::pin(async move {
                debug!("Computing employee stats");

                let stats = sqlx::query_as::<_, EmployeeStats>(
                    r#"
                    SELECT
                        e.employee_id,
                        e.full_name,
                        e.email,
                        e.department,
                        COUNT(CASE WHEN a.status = 'Present' THEN 1 END) AS present_days,
                        COUNT(a.id) AS total_days
                    FROM employees e
                    LEFT JOIN attendance a ON e.employee_id = a.employee_id
                    GROUP BY e.employee_id, e.full_name, e.email, e.department
                    ORDER BY e.full_name ASC, e.employee_id ASC
                    "#,
                )
                .fetch_all(&mut *conn)
                .await?;
                Ok::<_, AppError>(stats)
            })
        })
        .await
}
