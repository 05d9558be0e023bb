#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use std::collections::BTreeMap;

use crate::net::types::Employee;

/// How many of the most recently created records the dashboard shows.
const RECENT_HIRES: usize = 5;

/// Head-count and mean salary for one department.
#[derive(Clone, Debug, PartialEq)]
pub struct DepartmentStats {
    pub count: usize,
    pub average_salary: f64,
}

/// Aggregate statistics for the dashboard, recomputed in full from every
/// fetched employee list. Never cached across fetches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub average_salary: f64,
    pub departments: BTreeMap<String, DepartmentStats>,
    pub recent_hires: Vec<Employee>,
}

impl DashboardStats {
    /// Pure reduction over the employee list: per-department head-count and
    /// mean salary, overall mean salary (all rounded to the nearest whole
    /// amount), and the five most recently created records with ties kept
    /// in input order.
    pub fn from_employees(employees: &[Employee]) -> Self {
        let mut totals: BTreeMap<String, (usize, f64)> = BTreeMap::new();
        let mut salary_sum = 0.0;
        for employee in employees {
            let entry = totals.entry(employee.department.clone()).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += employee.salary;
            salary_sum += employee.salary;
        }

        let departments = totals
            .into_iter()
            .map(|(department, (count, sum))| {
                #[allow(clippy::cast_precision_loss)]
                let average_salary = (sum / count as f64).round();
                (
                    department,
                    DepartmentStats {
                        count,
                        average_salary,
                    },
                )
            })
            .collect();

        #[allow(clippy::cast_precision_loss)]
        let average_salary = if employees.is_empty() {
            0.0
        } else {
            (salary_sum / employees.len() as f64).round()
        };

        // Stable sort keeps input order for identical timestamps.
        let mut recent_hires = employees.to_vec();
        recent_hires.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent_hires.truncate(RECENT_HIRES);

        Self {
            total_employees: employees.len(),
            average_salary,
            departments,
            recent_hires,
        }
    }
}
