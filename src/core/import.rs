//! Bulk import of punches from a `date,time` CSV (the hours export format).

use crate::core::repository::WorkDayRepository;
use crate::errors::{AppError, AppResult};
use crate::models::workspace::Workspace;
use crate::utils::date::parse_user_date;
use crate::utils::time::parse_time;
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use std::io;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct PunchRecord {
    date: String,
    time: String,
}

pub struct ImportLogic;

impl ImportLogic {
    pub fn import_file<R>(repo: &mut R, workspace: &Workspace, path: &Path) -> AppResult<usize>
    where
        R: WorkDayRepository + ?Sized,
    {
        let file = std::fs::File::open(path)?;
        Self::import_reader(repo, workspace, file)
    }

    /// Every row is validated first, then all punches are written as one batch.
    pub fn import_reader<R, Rd>(repo: &mut R, workspace: &Workspace, input: Rd) -> AppResult<usize>
    where
        R: WorkDayRepository + ?Sized,
        Rd: io::Read,
    {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(input);

        let mut punches: Vec<(NaiveDate, NaiveTime)> = Vec::new();

        for record in rdr.deserialize::<PunchRecord>() {
            let record = record?;
            let date = parse_user_date(&record.date, &workspace.date_format)?;
            let time =
                parse_time(&record.time).ok_or_else(|| AppError::InvalidTime(record.time.clone()))?;
            punches.push((date, time));
        }

        repo.append_punches(workspace.id, &punches)?;

        Ok(punches.len())
    }
}
