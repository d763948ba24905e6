//! SQLite implementation of the repository traits.

use crate::core::filter::DateFilter;
use crate::core::repository::{WorkDayRepository, WorkspaceRepository};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::work_day::{Comment, PunchEvent, WorkDay, WorkDayId};
use crate::models::workspace::{NewWorkspace, Workspace, WorkspaceId};
use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::{ErrorCode, OptionalExtension, Row, ToSql, params, params_from_iter};
use std::collections::HashMap;

const DATE_FMT: &str = "%Y-%m-%d";
const TIME_FMT: &str = "%H:%M:%S";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_db_date(idx: usize, s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FMT)
        .map_err(|_| conversion_error(idx, AppError::InvalidDate(s.to_string())))
}

fn parse_db_time(idx: usize, s: &str) -> rusqlite::Result<NaiveTime> {
    NaiveTime::parse_from_str(s, TIME_FMT)
        .map_err(|_| conversion_error(idx, AppError::InvalidTime(s.to_string())))
}

fn map_workspace(row: &Row) -> rusqlite::Result<Workspace> {
    Ok(Workspace {
        id: WorkspaceId(row.get("id")?),
        name: row.get("name")?,
        hours: row.get("hours")?,
        date_format: row.get("date_format")?,
        is_active: row.get::<_, i32>("is_active")? == 1,
    })
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(e, rusqlite::Error::SqliteFailure(f, _) if f.code == ErrorCode::ConstraintViolation)
}

/// SQL fragment restricting `work_days d` plus its optional bound value.
fn filter_clause(filter: &DateFilter) -> (&'static str, Option<String>) {
    match filter {
        DateFilter::All => ("", None),
        DateFilter::Exact(d) => (" AND d.date = ?2", Some(d.format(DATE_FMT).to_string())),
        DateFilter::Since(d) => (" AND d.date >= ?2", Some(d.format(DATE_FMT).to_string())),
    }
}

fn query_scoped<T, F>(
    pool: &DbPool,
    sql: &str,
    workspace: WorkspaceId,
    bound: &Option<String>,
    f: F,
) -> AppResult<Vec<T>>
where
    F: FnMut(&Row) -> rusqlite::Result<T>,
{
    let ws = workspace.0;
    let mut params: Vec<&dyn ToSql> = vec![&ws];
    if let Some(b) = bound {
        params.push(b);
    }

    let mut stmt = pool.conn.prepare(sql)?;
    let rows = stmt.query_map(params_from_iter(params), f)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

impl WorkspaceRepository for DbPool {
    fn find_workspace(&self, name: &str) -> AppResult<Option<Workspace>> {
        let ws = self
            .conn
            .query_row(
                "SELECT * FROM workspaces WHERE name = ?1",
                [name],
                map_workspace,
            )
            .optional()?;
        Ok(ws)
    }

    fn find_active_workspace(&self) -> AppResult<Option<Workspace>> {
        let ws = self
            .conn
            .query_row(
                "SELECT * FROM workspaces WHERE is_active = 1 LIMIT 1",
                [],
                map_workspace,
            )
            .optional()?;
        Ok(ws)
    }

    fn list_workspaces(&self) -> AppResult<Vec<Workspace>> {
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM workspaces ORDER BY name ASC")?;
        let rows = stmt.query_map([], map_workspace)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn create_workspace(&mut self, p: &NewWorkspace) -> AppResult<Workspace> {
        let tx = self.conn.transaction()?;

        if p.is_active {
            tx.execute("UPDATE workspaces SET is_active = 0 WHERE is_active = 1", [])?;
        }

        let inserted = tx.execute(
            "INSERT INTO workspaces (name, is_active, hours, date_format, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                p.name,
                if p.is_active { 1 } else { 0 },
                p.hours,
                p.date_format,
                Local::now().to_rfc3339(),
            ],
        );

        match inserted {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                return Err(AppError::WorkspaceExists(p.name.clone()));
            }
            Err(e) => return Err(e.into()),
        }

        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(Workspace {
            id: WorkspaceId(id),
            name: p.name.clone(),
            hours: p.hours,
            date_format: p.date_format.clone(),
            is_active: p.is_active,
        })
    }

    fn update_workspace(&mut self, ws: &Workspace) -> AppResult<()> {
        let changed = self.conn.execute(
            "UPDATE workspaces SET hours = ?1, date_format = ?2 WHERE id = ?3",
            params![ws.hours, ws.date_format, ws.id.0],
        )?;

        if changed == 0 {
            return Err(AppError::WorkspaceNotFound(ws.name.clone()));
        }
        Ok(())
    }

    fn activate_workspace(&mut self, id: WorkspaceId) -> AppResult<()> {
        let tx = self.conn.transaction()?;

        tx.execute("UPDATE workspaces SET is_active = 0 WHERE is_active = 1", [])?;
        let changed = tx.execute(
            "UPDATE workspaces SET is_active = 1 WHERE id = ?1",
            [id.0],
        )?;

        if changed == 0 {
            // dropping `tx` rolls the reset back
            return Err(AppError::WorkspaceNotFound(format!("#{}", id.0)));
        }

        tx.commit()?;
        Ok(())
    }
}

impl WorkDayRepository for DbPool {
    fn find_work_day(
        &self,
        workspace: WorkspaceId,
        date: NaiveDate,
    ) -> AppResult<Option<WorkDay>> {
        let filter = DateFilter::Exact(date);
        Ok(self.list_work_days(workspace, &filter)?.into_iter().next())
    }

    fn create_work_day(&mut self, workspace: WorkspaceId, date: NaiveDate) -> AppResult<WorkDay> {
        self.conn.execute(
            "INSERT INTO work_days (workspace_id, date) VALUES (?1, ?2)",
            params![workspace.0, date.format(DATE_FMT).to_string()],
        )?;

        Ok(WorkDay::new(
            WorkDayId(self.conn.last_insert_rowid()),
            workspace,
            date,
        ))
    }

    fn list_work_days(
        &self,
        workspace: WorkspaceId,
        filter: &DateFilter,
    ) -> AppResult<Vec<WorkDay>> {
        let (clause, bound) = filter_clause(filter);

        let mut days = query_scoped(
            self,
            &format!(
                "SELECT d.id, d.date FROM work_days d
                 WHERE d.workspace_id = ?1{clause}
                 ORDER BY d.date ASC"
            ),
            workspace,
            &bound,
            |row| {
                let date: String = row.get(1)?;
                Ok(WorkDay::new(
                    WorkDayId(row.get(0)?),
                    workspace,
                    parse_db_date(1, &date)?,
                ))
            },
        )?;

        let index: HashMap<i64, usize> = days
            .iter()
            .enumerate()
            .map(|(i, d)| (d.id.0, i))
            .collect();

        let punches = query_scoped(
            self,
            &format!(
                "SELECT p.work_day_id, p.id, p.time FROM punches p
                 JOIN work_days d ON d.id = p.work_day_id
                 WHERE d.workspace_id = ?1{clause}
                 ORDER BY p.time ASC, p.id ASC"
            ),
            workspace,
            &bound,
            |row| {
                let time: String = row.get(2)?;
                Ok((
                    row.get::<_, i64>(0)?,
                    PunchEvent {
                        id: row.get(1)?,
                        time: parse_db_time(2, &time)?,
                    },
                ))
            },
        )?;

        for (day_id, punch) in punches {
            if let Some(&i) = index.get(&day_id) {
                days[i].punches.push(punch);
            }
        }

        let comments = query_scoped(
            self,
            &format!(
                "SELECT c.work_day_id, c.id, c.text, c.time_spent FROM comments c
                 JOIN work_days d ON d.id = c.work_day_id
                 WHERE d.workspace_id = ?1{clause}
                 ORDER BY c.id ASC"
            ),
            workspace,
            &bound,
            |row| {
                let spent: Option<String> = row.get(3)?;
                let time_spent = match spent {
                    Some(s) => Some(parse_db_time(3, &s)?),
                    None => None,
                };
                Ok((
                    row.get::<_, i64>(0)?,
                    Comment {
                        id: row.get(1)?,
                        text: row.get(2)?,
                        time_spent,
                    },
                ))
            },
        )?;

        for (day_id, comment) in comments {
            if let Some(&i) = index.get(&day_id) {
                days[i].comments.push(comment);
            }
        }

        Ok(days)
    }

    fn append_punch(&mut self, day: WorkDayId, time: NaiveTime) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO punches (work_day_id, time) VALUES (?1, ?2)",
            params![day.0, time.format(TIME_FMT).to_string()],
        )?;
        Ok(())
    }

    fn append_punches(
        &mut self,
        workspace: WorkspaceId,
        punches: &[(NaiveDate, NaiveTime)],
    ) -> AppResult<()> {
        let tx = self.conn.transaction()?;

        {
            let mut find_day =
                tx.prepare("SELECT id FROM work_days WHERE workspace_id = ?1 AND date = ?2")?;
            let mut insert_day =
                tx.prepare("INSERT INTO work_days (workspace_id, date) VALUES (?1, ?2)")?;
            let mut insert_punch =
                tx.prepare("INSERT INTO punches (work_day_id, time) VALUES (?1, ?2)")?;

            for (date, time) in punches {
                let date = date.format(DATE_FMT).to_string();

                let day_id = match find_day
                    .query_row(params![workspace.0, date], |row| row.get::<_, i64>(0))
                    .optional()?
                {
                    Some(id) => id,
                    None => insert_day.insert(params![workspace.0, date])?,
                };

                insert_punch.execute(params![day_id, time.format(TIME_FMT).to_string()])?;
            }
        }

        // an early return above drops `tx`, rolling every row back
        tx.commit()?;
        Ok(())
    }

    fn append_comment(
        &mut self,
        day: WorkDayId,
        text: &str,
        time_spent: Option<NaiveTime>,
    ) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO comments (work_day_id, text, time_spent) VALUES (?1, ?2, ?3)",
            params![
                day.0,
                text,
                time_spent.map(|t| t.format(TIME_FMT).to_string()),
            ],
        )?;
        Ok(())
    }
}
