//! Dashboard Statistics
//!
//! Counts shown on the dashboard stat cards.

use std::collections::BTreeMap;

use crate::models::{Priority, Status, Task};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub overdue: usize,
    pub in_progress: usize,
    pub by_priority: BTreeMap<Priority, usize>,
    pub by_status: BTreeMap<&'static str, usize>,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut stats = TaskStats { total: tasks.len(), ..Default::default() };
        for task in tasks {
            match task.status {
                Status::Completed => stats.completed += 1,
                Status::InProgress => stats.in_progress += 1,
                _ => {}
            }
            if task.is_overdue {
                stats.overdue += 1;
            }
            *stats.by_priority.entry(task.priority).or_default() += 1;
            *stats.by_status.entry(task.status.as_str()).or_default() += 1;
        }
        stats
    }

    /// Completed share in whole percent, 0 when there are no tasks
    pub fn completion_rate(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed * 100) as f64 / self.total as f64).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn make_task(id: u32, status: Status, priority: Priority, overdue: bool) -> Task {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Task {}", id),
            "priority": priority.as_str(),
            "status": status.as_str(),
            "is_overdue": overdue,
        }))
        .unwrap()
    }

    #[test]
    fn test_counts() {
        let tasks = vec![
            make_task(1, Status::Completed, Priority::Low, false),
            make_task(2, Status::InProgress, Priority::High, true),
            make_task(3, Status::Todo, Priority::High, true),
        ];
        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.overdue, 2);
        assert_eq!(stats.by_priority.get(&Priority::High), Some(&2));
        assert_eq!(stats.by_status.get("todo"), Some(&1));
        assert_eq!(stats.completion_rate(), 33);
    }

    #[test]
    fn test_empty() {
        let stats = TaskStats::from_tasks(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completion_rate(), 0);
    }
}
