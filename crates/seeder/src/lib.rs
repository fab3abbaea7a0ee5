//! `seeder` crate — fake-data population for manual testing.
//!
//! A standalone utility behind the `seed` CLI subcommand; nothing in the
//! serving path reaches it.  Resets the schema, then fills the three tables
//! with plausible-looking departments, employees and history rows.

pub mod data;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

use db::repository::{departments as dept_repo, history as history_repo};
use db::{schema, DbPool};
use service::ServiceError;

use data::{FIRST_NAMES, LAST_NAMES, SKILLS, TECH_DEPARTMENTS};

/// Working days used to derive a daily wage from annual base pay.
const WORK_DAYS_PER_YEAR: f64 = 260.0;

/// One generated employee, before any row is written.
#[derive(Debug)]
pub struct EmployeeProfile {
    pub name: String,
    pub skills: Vec<&'static str>,
    pub pay: f32,
    pub level: i32,
    pub days_employed: i64,
    /// Id written to the history row.  Drawn independently of
    /// `employees.id`, so id-based joins between the two tables stay as
    /// unreliable on seeded data as they are in production.
    pub ledger_emp_id: i64,
}

impl EmployeeProfile {
    pub fn generate(rng: &mut impl Rng, base_pay: f64) -> Self {
        let name = format!(
            "{} {}",
            FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())],
            LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())]
        );
        let skill_count = rng.gen_range(2..=5);
        let skills: Vec<&'static str> = SKILLS
            .choose_multiple(rng, skill_count)
            .copied()
            .collect();

        Self {
            name,
            skills,
            pay: rng.gen_range(base_pay..=180_000.0) as f32,
            level: rng.gen_range(-2..=12),
            days_employed: rng.gen_range(1..=10_000),
            ledger_emp_id: rng.gen_range(0..=9_999),
        }
    }
}

/// Reset the schema, then create every standard department and
/// `num_employees` employees spread randomly across them, each with one
/// history row.
pub async fn seed(pool: &DbPool, num_employees: usize) -> Result<(), ServiceError> {
    let mut rng = StdRng::from_entropy();

    schema::reset(pool).await?;

    info!(departments = TECH_DEPARTMENTS.len(), "seeding departments");
    let mut departments: Vec<(&str, f64)> = Vec::with_capacity(TECH_DEPARTMENTS.len());
    for &dept_name in TECH_DEPARTMENTS {
        let base_pay = rng.gen_range(30_000.0..=150_000.0);
        dept_repo::insert_department(pool, dept_name, base_pay).await?;
        departments.push((dept_name, base_pay));
    }

    info!(num_employees, "seeding employees and history");
    for created in 0..num_employees {
        if created % 100 == 0 {
            info!(created, "seeding progress");
        }

        let (dept_name, base_pay) = departments[rng.gen_range(0..departments.len())];
        let profile = EmployeeProfile::generate(&mut rng, base_pay);

        service::employees::hire(
            pool,
            &profile.name,
            &profile.skills,
            profile.pay,
            dept_name,
            profile.level,
        )
        .await?;

        history_repo::insert_history(
            pool,
            &profile.name,
            profile.days_employed,
            base_pay / WORK_DAYS_PER_YEAR,
            dept_name,
            profile.ledger_emp_id,
        )
        .await?;
    }

    info!(num_employees, "seed complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::EmployeeProfile;

    #[test]
    fn generated_profiles_respect_the_business_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let base_pay = 42_000.0;

        for _ in 0..200 {
            let profile = EmployeeProfile::generate(&mut rng, base_pay);
            assert!(profile.pay >= base_pay as f32);
            assert!(profile.pay <= 180_000.0);
            assert!((2..=5).contains(&profile.skills.len()));
            assert!((-2..=12).contains(&profile.level));
            assert!((1..=10_000).contains(&profile.days_employed));
            assert!((0..=9_999).contains(&profile.ledger_emp_id));
            assert!(profile.name.contains(' '));
        }
    }

    #[test]
    fn generated_skills_are_distinct() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..100 {
            let profile = EmployeeProfile::generate(&mut rng, 50_000.0);
            let mut deduped = profile.skills.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(deduped.len(), profile.skills.len());
        }
    }
}
