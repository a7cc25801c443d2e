use futures::future::BoxFuture;
use sqlx::SqliteConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

const CREATE_EMPLOYEES: &str = r#"
    CREATE TABLE IF NOT EXISTS employees (
        employee_id TEXT PRIMARY KEY,
        full_name   TEXT NOT NULL,
        email       TEXT NOT NULL UNIQUE,
        department  TEXT NOT NULL,
        created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
    )
"#;

const CREATE_ATTENDANCE: &str = r#"
    CREATE TABLE IF NOT EXISTS attendance (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        employee_id TEXT NOT NULL,
        date        TEXT NOT NULL,
        status      TEXT NOT NULL CHECK (status IN ('Present', 'Absent')),
        created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now')),
        FOREIGN KEY (employee_id) REFERENCES employees (employee_id) ON DELETE CASCADE,
        UNIQUE (employee_id, date)
    )
"#;

const SAMPLE_EMPLOYEES: [(&str, &str, &str, &str); 3] = [
    ("EMP001", "John Doe", "john.doe@company.com", "Engineering"),
    ("EMP002", "Jane Smith", "jane.smith@company.com", "Marketing"),
    ("EMP003", "Bob Johnson", "bob.johnson@company.com", "Sales"),
];

const SAMPLE_ATTENDANCE: [(&str, &str, &str); 4] = [
    ("EMP001", "2024-02-01", "Present"),
    ("EMP001", "2024-02-02", "Present"),
    ("EMP002", "2024-02-01", "Present"),
    ("EMP002", "2024-02-02", "Absent"),
];

/// Handle to the relational store.
///
/// Cloning is cheap: clones share the same pool. Every operation borrows one
/// connection for its own duration through [`Store::with_connection`].
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Private in-memory database. The pool holds exactly one connection that
    /// never expires, otherwise the data would vanish with it.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Acquires a connection, hands it to `f` and returns it to the pool on
    /// every exit path, including early returns through `?` and cancellation.
    pub async fn with_connection<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: for<'c> FnOnce(&'c mut SqliteConnection) -> BoxFuture<'c, Result<T, E>>,
        E: From<sqlx::Error>,
    {
        let mut conn = self.pool.acquire().await?;
        f(&mut *conn).await
    }

    /// Creates both tables. Running it against an existing schema is a no-op.
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        self.with_connection(|conn| {
            Box::pin(async move {
                sqlx::query(CREATE_EMPLOYEES).execute(&mut *conn).await?;
                sqlx::query(CREATE_ATTENDANCE).execute(&mut *conn).await?;
                Ok::<_, sqlx::Error>(())
            })
        })
        .await?;

        debug!("Schema ready");
        Ok(())
    }

    /// Loads the sample employees and attendance rows. Rows that already
    /// exist are left alone, so repeated startups never duplicate them.
    pub async fn seed_sample_data(&self) -> Result<(), sqlx::Error> {
        let inserted = self
            .with_connection(|conn| {
                Box::pin(async move {
                    let mut inserted = 0;

                    for (employee_id, full_name, email, department) in SAMPLE_EMPLOYEES {
                        inserted += sqlx::query(
                            r#"
                            INSERT OR IGNORE INTO employees (employee_id, full_name, email, department)
                            VALUES (?, ?, ?, ?)
                            "#,
                        )
                        .bind(employee_id)
                        .bind(full_name)
                        .bind(email)
                        .bind(department)
                        .execute(&mut *conn)
                        .await?
                        .rows_affected();
                    }

                    for (employee_id, date, status) in SAMPLE_ATTENDANCE {
                        inserted += sqlx::query(
                            r#"
                            INSERT OR IGNORE INTO attendance (employee_id, date, status)
                            VALUES (?, ?, ?)
                            "#,
                        )
                        .bind(employee_id)
                        .bind(date)
                        .bind(status)
                        .execute(&mut *conn)
                        .await?
                        .rows_affected();
                    }

                    Ok::<_, sqlx::Error>(inserted)
                })
            })
            .await?;

        info!(inserted, "Sample data loaded");
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
