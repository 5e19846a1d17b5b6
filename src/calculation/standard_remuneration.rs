//! Standard monthly remuneration lookup.
//!
//! This module maps a gross monthly salary onto the statutory grade table
//! (標準報酬月額). Premiums and the sickness benefit are both computed from the
//! grade rather than from the salary itself.

/// Resolves a salary to its standard monthly remuneration grade.
///
/// Each grade covers salaries from the midpoint with the grade below up to,
/// but not including, the midpoint with the grade above. A salary exactly on
/// a midpoint therefore moves up to the higher grade. Salaries below the
/// first grade resolve to the first grade and salaries at or above the last
/// grade resolve to the last grade.
///
/// `grades` must be non-empty and strictly ascending, which a validated
/// [`RuleSet`](crate::config::RuleSet) guarantees.
///
/// # Examples
///
/// ```
/// use sickness_benefit_engine::calculation::resolve_standard_remuneration;
///
/// let grades = [280000, 300000, 320000];
/// assert_eq!(resolve_standard_remuneration(309999, &grades), 300000);
/// assert_eq!(resolve_standard_remuneration(310000, &grades), 320000);
/// assert_eq!(resolve_standard_remuneration(10, &grades), 280000);
/// ```
pub fn resolve_standard_remuneration(salary: i64, grades: &[i64]) -> i64 {
    let (Some(&first), Some(&last)) = (grades.first(), grades.last()) else {
        return 0;
    };

    if salary < first {
        return first;
    }
    if salary >= last {
        return last;
    }

    // salary < (current + next) / 2, compared without forming the midpoint
    grades
        .windows(2)
        .find(|pair| salary * 2 < pair[0] + pair[1])
        .map_or(last, |pair| pair[0])
}
