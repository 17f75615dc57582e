//! Synthetic user rows for the benchmark table.
//!
//! Generation is deterministic for a fixed seed so runs can be repeated
//! against identical data.

use super::table::TableName;
use crate::error::BenchResult;
use crate::model::NewUser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::time::Instant;

/// Rows per INSERT statement (Postgres caps a statement at 65535 binds)
pub const INSERT_BATCH: usize = 1000;

const FIRST_NAMES: [&str; 24] = [
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas",
    "Sarah", "Christopher", "Karen", "Daniel", "Nancy", "Matthew", "Margaret",
];

const LAST_NAMES: [&str; 24] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Thompson", "White", "Harris",
];

// '#' is replaced by a random digit
const PHONE_FORMATS: [&str; 7] = [
    "###-###-####",
    "(###)###-####",
    "###.###.####",
    "1-###-###-####",
    "+1-###-###-####",
    "###-###-####x###",
    "001-###-###-####x####",
];

/// Generate `count` users with random names and phone numbers
pub fn generate_users<R: Rng>(count: usize, rng: &mut R) -> Vec<NewUser> {
    (0..count).map(|_| random_user(rng)).collect()
}

fn random_user<R: Rng>(rng: &mut R) -> NewUser {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Alex");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Doe");
    let format = PHONE_FORMATS.choose(rng).copied().unwrap_or("###-###-####");

    let phone_no = format
        .chars()
        .map(|c| {
            if c == '#' {
                char::from(b'0' + rng.gen_range(0..10u8))
            } else {
                c
            }
        })
        .collect();

    NewUser {
        name: format!("{} {}", first, last),
        phone_no: Some(phone_no),
    }
}

/// Insert `users` in one transaction; returns the number of rows written
pub async fn insert_users(pool: &PgPool, table: &TableName, users: &[NewUser]) -> BenchResult<u64> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for chunk in users.chunks(INSERT_BATCH) {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("INSERT INTO {} (name, phone_no) ", table));
        builder.push_values(chunk, |mut row, user| {
            row.push_bind(user.name.as_str())
                .push_bind(user.phone_no.as_deref());
        });
        inserted += builder.build().execute(&mut *tx).await?.rows_affected();
    }

    tx.commit().await?;
    Ok(inserted)
}

/// Generate and insert `count` rows. Without `rng_seed` the data differs per run.
pub async fn seed_users(
    pool: &PgPool,
    table: &TableName,
    count: usize,
    rng_seed: Option<u64>,
) -> BenchResult<u64> {
    let mut rng = match rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let start = Instant::now();
    let users = generate_users(count, &mut rng);
    let inserted = insert_users(pool, table, &users).await?;

    tracing::info!(
        table = %table,
        rows = inserted,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Seeded synthetic users"
    );
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NAME_MAX_LEN, PHONE_MAX_LEN};

    #[test]
    fn test_generate_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_users(0, &mut rng).len(), 0);
        assert_eq!(generate_users(250, &mut rng).len(), 250);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate_users(100, &mut StdRng::seed_from_u64(0xDEAD_BEEF));
        let b = generate_users(100, &mut StdRng::seed_from_u64(0xDEAD_BEEF));
        let c = generate_users(100, &mut StdRng::seed_from_u64(0xCAFE));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_generated_values_fit_columns() {
        let longest_name = FIRST_NAMES.iter().map(|n| n.len()).max().unwrap()
            + 1
            + LAST_NAMES.iter().map(|n| n.len()).max().unwrap();
        assert!(longest_name <= NAME_MAX_LEN);

        let mut rng = StdRng::seed_from_u64(42);
        for user in generate_users(1000, &mut rng) {
            assert!(user.name.chars().count() <= NAME_MAX_LEN);
            let phone = user.phone_no.expect("seeded users always have a phone");
            assert!(phone.len() <= PHONE_MAX_LEN);
            assert!(!phone.contains('#'));
            assert!(phone.chars().any(|c| c.is_ascii_digit()));
        }
    }
}
