//! Employee creation — the hire path.
//!
//! Not exposed over HTTP; the seeder drives it.  Hiring inserts the employee
//! row and bumps the department's population counter in one transaction.

use tracing::info;

use db::repository::employees as emp_repo;
use db::DbPool;

use crate::ServiceError;

/// Hire an employee into a department.
///
/// Skills are stored as one comma-joined text field — there is no skills
/// table to normalise into.  Returns the new employee id.
pub async fn hire(
    pool: &DbPool,
    name: &str,
    skills: &[&str],
    pay: f32,
    department: &str,
    level: i32,
) -> Result<i64, ServiceError> {
    let skills = join_skills(skills);
    let id = emp_repo::hire_employee(pool, name, &skills, pay, department, level).await?;
    info!(id, name, department, "hired employee");
    Ok(id)
}

/// `["a", "b"]` → `"a, b"`.
fn join_skills(skills: &[&str]) -> String {
    skills.join(", ")
}

#[cfg(test)]
mod tests {
    use super::join_skills;

    #[test]
    fn skills_are_comma_joined() {
        assert_eq!(join_skills(&["Rust", "SQL", "Kubernetes"]), "Rust, SQL, Kubernetes");
        assert_eq!(join_skills(&["Go"]), "Go");
        assert_eq!(join_skills(&[]), "");
    }
}
