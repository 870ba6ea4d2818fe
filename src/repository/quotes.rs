use crate::model::Quote;
use rusqlite::{params, Connection};
use std::process::exit;
use tracing::{error, info};

/// Persists one quote, opening and closing its own connection. Storage
/// failures here abort the server process, unlike the lenient fetch path.
pub fn persist(db_url: &str, quote: &Quote) {
    let conn = Connection::open(db_url).unwrap_or_else(|e| {
        error!(%e, %db_url, "Unable to open quote database");
        exit(1);
    });

    create_table(&conn).unwrap_or_else(|e| {
        error!(%e, "Unable to create cotacao table");
        exit(1);
    });

    let id = insert(&conn, quote).unwrap_or_else(|e| {
        error!(%e, "Unable to insert cotacao row");
        exit(1);
    });

    info!(id, "Persisted quote");
}

pub fn create_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS cotacao (
            "idCotacao"  INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            "Code"       TEXT,
            "Codein"     TEXT,
            "Name"       TEXT,
            "High"       TEXT,
            "Low"        TEXT,
            "VarBid"     TEXT,
            "PctChange"  TEXT,
            "Bid"        TEXT,
            "Ask"        TEXT,
            "Timestamp"  TEXT,
            "CreateDate" TEXT
        )
        "#,
        [],
    )?;
    Ok(())
}

pub fn insert(conn: &Connection, row: &Quote) -> rusqlite::Result<i64> {
    let query = "INSERT INTO cotacao (Code, Codein, Name, High, Low, VarBid, \
                 PctChange, Bid, Ask, Timestamp, CreateDate) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
    let params = params![
        &row.code,
        &row.codein,
        &row.name,
        &row.high,
        &row.low,
        &row.var_bid,
        &row.pct_change,
        &row.bid,
        &row.ask,
        &row.timestamp,
        &row.create_date,
    ];
    conn.execute(query, params)?;
    Ok(conn.last_insert_rowid())
}

#[allow(dead_code)]
pub fn select_bids(conn: &Connection) -> rusqlite::Result<Vec<(i64, String)>> {
    let mut stmt = conn.prepare("SELECT idCotacao, Bid FROM cotacao ORDER BY idCotacao")?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    rows.collect()
}

#[cfg(test)]
mod test {
    use super::{create_table, insert, select_bids};
    use crate::test::quote;
    use anyhow::Result;
    use rusqlite::Connection;

    #[test]
    fn create_table_is_idempotent() -> Result<()> {
        let conn = Connection::open_in_memory()?;
        for _ in 0..5 {
            create_table(&conn)?;
        }
        insert(&conn, &quote())?;
        Ok(())
    }

    #[test]
    fn insert_assigns_increasing_ids() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let db_url = dir.path().join("cotacao.db");

        // Independent connections, the way concurrent requests open them.
        let first = Connection::open(&db_url)?;
        create_table(&first)?;
        let second = Connection::open(&db_url)?;
        create_table(&second)?;

        assert_eq!(1, insert(&first, &quote())?);
        assert_eq!(2, insert(&second, &quote())?);

        let rows = select_bids(&first)?;
        assert_eq!(2, rows.len());
        assert_eq!(1, rows[0].0);
        assert_eq!(2, rows[1].0);
        Ok(())
    }
}
