use crate::config::{AppConfig, TlsMode};
use crate::db::sql::{id_param, SqlParam};
use crate::errors::ServerError;
use native_tls::TlsConnector;
use postgres::config::SslMode;
use postgres::types::ToSql;
use postgres::{Config, GenericClient, IsolationLevel, Row, Transaction};
use postgres_native_tls::MakeTlsConnector;
use r2d2::{Pool, PooledConnection};
use r2d2_postgres::PostgresConnectionManager;
use tracing::{debug, error, info};

type Manager = PostgresConnectionManager<MakeTlsConnector>;

/// Rows returned by a statement, plus how many there were.
#[derive(Debug)]
pub struct QueryOutput {
    pub rows: Vec<Row>,
    pub row_count: usize,
}

/// Process-wide Postgres pool. Cloning shares the same pool.
#[derive(Clone)]
pub struct Database {
    pool: Pool<Manager>,
}

impl Database {
    /// Builds the pool once at startup. Connections are opened lazily.
    pub fn connect(config: &AppConfig) -> Result<Self, ServerError> {
        let mut pg_config: Config = config
            .database_url
            .parse()
            .map_err(|e| ServerError::Config(format!("DATABASE_URL is invalid: {e}")))?;

        let tls = tls_connector(config.tls_mode)?;
        match config.tls_mode {
            TlsMode::Disable => pg_config.ssl_mode(SslMode::Disable),
            TlsMode::Require | TlsMode::Relaxed => pg_config.ssl_mode(SslMode::Require),
        };

        let manager = PostgresConnectionManager::new(pg_config, tls);
        let pool = Pool::builder()
            .max_size(config.pool_size)
            .build_unchecked(manager);

        info!(
            pool_size = config.pool_size,
            tls = ?config.tls_mode,
            "database pool ready"
        );

        Ok(Self { pool })
    }

    /// Checks out a pooled connection and runs `f` with it.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut PooledConnection<Manager>) -> Result<T, ServerError>,
    {
        let mut conn = self.pool.get().map_err(|e| {
            error!(error = %e, "failed to check out database connection");
            ServerError::from(e)
        })?;
        f(&mut conn)
    }

    /// Runs a single parameterized statement on a fresh pooled connection.
    pub fn query(&self, sql: &str, params: &[SqlParam]) -> Result<QueryOutput, ServerError> {
        self.with_conn(|conn| run_query(&mut **conn, sql, params))
    }

    /// Runs `f` inside a read-only REPEATABLE READ transaction so that
    /// multi-statement reads see one consistent snapshot.
    pub fn with_snapshot<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Transaction<'_>) -> Result<T, ServerError>,
    {
        self.with_conn(|conn| {
            let mut tx = conn
                .build_transaction()
                .isolation_level(IsolationLevel::RepeatableRead)
                .read_only(true)
                .start()
                .map_err(|e| {
                    error!(error = %e, "failed to open read snapshot");
                    ServerError::from(e)
                })?;

            let out = f(&mut tx)?;

            tx.commit().map_err(|e| {
                error!(error = %e, "failed to close read snapshot");
                ServerError::from(e)
            })?;
            Ok(out)
        })
    }
}

/// Executes `sql` with positional `params` on any client or transaction.
/// Failures are logged here and returned as `ServerError::DbError`.
pub fn run_query<C: GenericClient>(
    client: &mut C,
    sql: &str,
    params: &[SqlParam],
) -> Result<QueryOutput, ServerError> {
    let bound: Vec<&(dyn ToSql + Sync)> = params.iter().map(SqlParam::as_sql).collect();

    debug!(sql = %compact(sql), params = ?params, "running query");

    let rows = client.query(sql, &bound).map_err(|e| {
        error!(error = %e, sql = %compact(sql), "database query failed");
        ServerError::from(e)
    })?;

    let out = QueryOutput {
        row_count: rows.len(),
        rows,
    };
    debug!(row_count = out.row_count, "query returned");
    Ok(out)
}

/// Executes `sql`, whose `$1` is compared against a listing id column.
///
/// The statement is prepared first so the id can be bound as whatever type
/// that column has.
pub fn run_id_query<C: GenericClient>(
    client: &mut C,
    sql: &str,
    attom_id: &str,
) -> Result<QueryOutput, ServerError> {
    let stmt = client.prepare(sql).map_err(|e| {
        error!(error = %e, sql = %compact(sql), "failed to prepare query");
        ServerError::from(e)
    })?;

    let column_type = stmt
        .params()
        .first()
        .cloned()
        .ok_or_else(|| ServerError::DbError("id query has no parameter".into()))?;

    let Some(param) = id_param(&column_type, attom_id)? else {
        debug!(attom_id, %column_type, "id cannot match column type");
        return Ok(QueryOutput {
            rows: Vec::new(),
            row_count: 0,
        });
    };

    debug!(sql = %compact(sql), param = ?param, "running id query");

    let rows = client.query(&stmt, &[param.as_sql()]).map_err(|e| {
        error!(error = %e, sql = %compact(sql), "database query failed");
        ServerError::from(e)
    })?;

    Ok(QueryOutput {
        row_count: rows.len(),
        rows,
    })
}

fn tls_connector(mode: TlsMode) -> Result<MakeTlsConnector, ServerError> {
    let mut builder = TlsConnector::builder();
    if mode == TlsMode::Relaxed {
        builder
            .danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true);
    }

    let connector = builder
        .build()
        .map_err(|e| ServerError::Config(format!("TLS setup failed: {e}")))?;
    Ok(MakeTlsConnector::new(connector))
}

/// Collapses whitespace so multi-line SQL logs on one line.
fn compact(sql: &str) -> String {
    sql.split_whitespace().collect::<Vec<_>>().join(" ")
}
