//! # Project Scheduler
//!
//! Strictly sequential task placement: each task starts the day after the
//! previous one ends. There is no dependency graph, no resource contention,
//! and no calendar exceptions - weekends and holidays are working days.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use civil_core::calculations::schedule::{build_schedule_from, TaskInput};
//!
//! let tasks = vec![
//!     TaskInput::new("Excavation", 5),
//!     TaskInput::new("Foundation", 10),
//! ];
//!
//! let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
//! let schedule = build_schedule_from(start, &tasks).unwrap();
//! assert_eq!(schedule.total_duration_days, 15);
//! ```

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A task to be scheduled.
///
/// ## JSON Example
///
/// ```json
/// { "name": "Excavation", "duration_days": 5 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskInput {
    pub name: String,
    pub duration_days: i64,
}

impl TaskInput {
    pub fn new(name: impl Into<String>, duration_days: i64) -> Self {
        TaskInput {
            name: name.into(),
            duration_days,
        }
    }
}

/// A task with its assigned dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// 1-based position in the schedule
    pub id: usize,
    pub name: String,
    pub duration_days: i64,
    pub start_date: NaiveDate,
    /// Last working day of the task (inclusive)
    pub end_date: NaiveDate,
    /// 1-based day offset from project start, for Gantt-style rendering
    pub start_day: i64,
}

/// A complete project schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub tasks: Vec<ScheduledTask>,
    pub project_start: NaiveDate,
    /// End date of the last task
    pub project_end: NaiveDate,
    /// Sum of all task durations
    pub total_duration_days: i64,
    pub total_tasks: usize,
}

/// Build a schedule starting today (local date).
///
/// See [`build_schedule_from`] for the date-explicit variant used by
/// deterministic callers and tests.
pub fn build_schedule(tasks: &[TaskInput]) -> CalcResult<Schedule> {
    build_schedule_from(Local::now().date_naive(), tasks)
}

/// Build a schedule with an explicit project start date.
///
/// Tasks are placed back to back: task *k* starts the day after task *k-1*
/// ends, and a task's end date is `start + duration - 1` (a 1-day task
/// starts and ends on the same date).
///
/// # Errors
///
/// * [`CalcError::InvalidInput`] if the task list is empty or any duration
///   is not positive
pub fn build_schedule_from(start: NaiveDate, tasks: &[TaskInput]) -> CalcResult<Schedule> {
    if tasks.is_empty() {
        let err = CalcError::invalid_input("tasks", "[]", "At least one task is required");
        log::error!("Scheduling error: {}", err);
        return Err(err);
    }

    let mut scheduled = Vec::with_capacity(tasks.len());
    let mut current = start;

    for (i, task) in tasks.iter().enumerate() {
        if task.duration_days <= 0 {
            let err = CalcError::invalid_input(
                format!("tasks[{}].duration_days", i),
                task.duration_days.to_string(),
                "Duration must be positive",
            );
            log::error!("Scheduling error: {}", err);
            return Err(err);
        }

        let task_start = current;
        let task_end = current + Duration::days(task.duration_days - 1);

        scheduled.push(ScheduledTask {
            id: i + 1,
            name: task.name.clone(),
            duration_days: task.duration_days,
            start_date: task_start,
            end_date: task_end,
            start_day: (task_start - start).num_days() + 1,
        });

        // Next task starts the day after this one ends
        current = task_end + Duration::days(1);
    }

    let total_duration_days = (current - start).num_days();
    let project_end = current - Duration::days(1);

    Ok(Schedule {
        total_tasks: scheduled.len(),
        tasks: scheduled,
        project_start: start,
        project_end,
        total_duration_days,
    })
}
