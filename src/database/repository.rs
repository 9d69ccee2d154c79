use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Job, NewJob, UpdateJobFields};
use crate::database::query_builder::bind_all;
use crate::filter::{sql_for_partial_update, ColumnMap, JobFilterWhere, JobFilters, SqlFragment};

const JOB_COLUMNS: &str = "id, title, salary, equity, company_handle";

/// Data access for the `jobs` table
#[derive(Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a job and return it with its generated id
    pub async fn create(&self, job: NewJob) -> Result<Job, DatabaseError> {
        let sql = format!(
            "INSERT INTO jobs (title, salary, equity, company_handle) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {}",
            JOB_COLUMNS
        );
        let created = sqlx::query_as::<_, Job>(&sql)
            .bind(&job.title)
            .bind(job.salary)
            .bind(job.equity)
            .bind(&job.company_handle)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!("Created job {} for company '{}'", created.id, created.company_handle);
        Ok(created)
    }

    /// All jobs, ordered by id
    pub async fn find_all(&self) -> Result<Vec<Job>, DatabaseError> {
        let sql = format!("SELECT {} FROM jobs ORDER BY id", JOB_COLUMNS);
        let jobs = sqlx::query_as::<_, Job>(&sql).fetch_all(&self.pool).await?;
        Ok(jobs)
    }

    /// Jobs matching `filters`, ordered by title.
    ///
    /// Filters that constrain nothing (`{}` or `hasEquity=false` alone) match
    /// every job.
    pub async fn find(&self, filters: &JobFilters) -> Result<Vec<Job>, DatabaseError> {
        let SqlFragment { clause, params } = JobFilterWhere::generate(filters);
        let sql = if clause.is_empty() {
            format!("SELECT {} FROM jobs ORDER BY title", JOB_COLUMNS)
        } else {
            format!("SELECT {} FROM jobs WHERE {} ORDER BY title", JOB_COLUMNS, clause)
        };

        let jobs = bind_all(sqlx::query_as::<_, Job>(&sql), params)
            .fetch_all(&self.pool)
            .await?;
        Ok(jobs)
    }

    pub async fn get(&self, id: i32) -> Result<Job, DatabaseError> {
        let sql = format!("SELECT {} FROM jobs WHERE id = $1", JOB_COLUMNS);
        let job = sqlx::query_as::<_, Job>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        job.ok_or_else(|| Self::not_found(id))
    }

    /// Partial update of title, salary and/or equity.
    ///
    /// An empty update fails with `InvalidInput` before any query runs.
    pub async fn update(&self, id: i32, data: UpdateJobFields) -> Result<Job, DatabaseError> {
        let SqlFragment { clause, params } =
            sql_for_partial_update(data.into_entries(), &ColumnMap::identity())?;
        let id_index = params.len() + 1;

        let sql = format!(
            "UPDATE jobs SET {} WHERE id = ${} RETURNING {}",
            clause, id_index, JOB_COLUMNS
        );

        let job = bind_all(sqlx::query_as::<_, Job>(&sql), params)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        job.ok_or_else(|| Self::not_found(id))
    }

    pub async fn remove(&self, id: i32) -> Result<(), DatabaseError> {
        let removed: Option<(i32,)> = sqlx::query_as("DELETE FROM jobs WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match removed {
            Some(_) => Ok(()),
            None => Err(Self::not_found(id)),
        }
    }

    fn not_found(id: i32) -> DatabaseError {
        DatabaseError::NotFound(format!("No job: {}", id))
    }
}
