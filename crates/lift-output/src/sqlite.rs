//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `riders`, `events` and `summaries`.  Several runs can share
//! one database; rows are told apart by the summary `label`.

use std::path::Path;

use rusqlite::Connection;

use crate::{EventRow, OutputResult, RiderRow, SummaryRow};
use crate::writer::OutputWriter;

/// Writes run output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS riders (
                 rider       INTEGER NOT NULL,
                 source      INTEGER NOT NULL,
                 destination INTEGER NOT NULL,
                 requested   REAL    NOT NULL,
                 picked_up   REAL    NOT NULL,
                 dropped_off REAL    NOT NULL,
                 wait        REAL    NOT NULL,
                 ride        REAL    NOT NULL,
                 total       REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS events (
                 time              REAL    NOT NULL,
                 kind              TEXT    NOT NULL,
                 rider             INTEGER,
                 floor             INTEGER NOT NULL,
                 elevator_location REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS summaries (
                 label            TEXT    NOT NULL,
                 policy           TEXT    NOT NULL,
                 riders           INTEGER NOT NULL,
                 completed_riders INTEGER NOT NULL,
                 wait_mean        REAL    NOT NULL,
                 wait_median      REAL    NOT NULL,
                 ride_mean        REAL    NOT NULL,
                 ride_median      REAL    NOT NULL,
                 total_mean       REAL    NOT NULL,
                 total_median     REAL    NOT NULL,
                 completion_time  REAL    NOT NULL,
                 steps            INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_riders(&mut self, rows: &[RiderRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO riders \
                 (rider, source, destination, requested, picked_up, dropped_off, wait, ride, total) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.rider,
                    row.source,
                    row.destination,
                    row.requested,
                    row.picked_up,
                    row.dropped_off,
                    row.wait,
                    row.ride,
                    row.total,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO events (time, kind, rider, floor, elevator_location) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.time,
                    row.kind,
                    row.rider,
                    row.floor,
                    row.elevator_location,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO summaries \
             (label, policy, riders, completed_riders, wait_mean, wait_median, ride_mean, \
              ride_median, total_mean, total_median, completion_time, steps) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            rusqlite::params![
                row.label,
                row.policy,
                row.riders as i64,
                row.completed_riders as i64,
                row.wait_mean,
                row.wait_median,
                row.ride_mean,
                row.ride_median,
                row.total_mean,
                row.total_median,
                row.completion_time,
                row.steps as i64,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
