//! View projections.
//!
//! Pure, side-effect-free derivations over a repository snapshot. Nothing
//! here mutates state or touches storage; the renderer consumes the
//! returned slices and records as-is.

use crate::model::journal::JournalEntry;
use crate::model::task::{Category, Task};

/// How many tasks the dashboard's recent list shows.
pub const RECENT_TASK_LIMIT: usize = 5;

/// Per-category open-task count plus the journal total, for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardCounts {
    /// `(category, open tasks)` in configured category order.
    pub open_tasks: Vec<(Category, usize)>,
    pub journal_entries: usize,
}

/// Tasks for one page context.
///
/// With a category: every task of that category, insertion order. Without:
/// the most recently inserted [`RECENT_TASK_LIMIT`] tasks, still in
/// insertion order — array position is authoritative, not `created_at`.
pub fn project_tasks<'a>(tasks: &'a [Task], category: Option<&Category>) -> Vec<&'a Task> {
    match category {
        Some(category) => tasks
            .iter()
            .filter(|task| &task.category == category)
            .collect(),
        None => {
            let start = tasks.len().saturating_sub(RECENT_TASK_LIMIT);
            tasks[start..].iter().collect()
        }
    }
}

/// Journal entries sorted by `date` descending; stable, so same-date
/// entries keep their relative order. `limit` truncates after sorting.
pub fn project_journal<'a>(
    entries: &'a [JournalEntry],
    limit: Option<usize>,
) -> Vec<&'a JournalEntry> {
    let mut sorted: Vec<&JournalEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = limit {
        sorted.truncate(limit);
    }
    sorted
}

/// Dashboard counts: open tasks per configured category, total entries.
pub fn project_counts(
    tasks: &[Task],
    entries: &[JournalEntry],
    categories: &[Category],
) -> DashboardCounts {
    let open_tasks = categories
        .iter()
        .map(|category| {
            let open = tasks
                .iter()
                .filter(|task| !task.done && &task.category == category)
                .count();
            (category.clone(), open)
        })
        .collect();

    DashboardCounts {
        open_tasks,
        journal_entries: entries.len(),
    }
}

/// Pluralized count label: `count_label(1, "task", "tasks")` is "1 task".
pub fn count_label(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Escapes text for interpolation into markup. Applied at the display
/// boundary so stored user text stays raw.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
