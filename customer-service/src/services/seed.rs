use crate::models::Customer;
use crate::services::{CustomerFilter, CustomerRepository};
use service_core::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOutcome {
    /// Records written by this call.
    pub inserted: u64,
    /// Collection size afterwards.
    pub total: u64,
}

/// The fixed demo dataset inserted by `POST /api/customers/seed`.
pub fn sample_customers() -> Vec<Customer> {
    vec![
        Customer::new("Alice", "Johnson")
            .with_phone("555-123-4567")
            .with_address("12 Rainbow Rd")
            .with_postcode("AB12 3CD")
            .with_email("alice@example.com"),
        Customer::new("Bob", "Smith")
            .with_phone("555-987-1111")
            .with_address("7 Sunset Blvd")
            .with_postcode("XY98 7ZT")
            .with_email("bob@example.com"),
        Customer::new("Charlie", "Nguyen")
            .with_phone("+44 7700 900123")
            .with_address("99 Market Street")
            .with_postcode("M1 2AB")
            .with_email("charlie@example.com"),
        Customer::new("Diana", "Lopez")
            .with_phone("020 7946 0958")
            .with_address("221B Baker Street")
            .with_postcode("NW1 6XE")
            .with_email("diana@example.com"),
        Customer::new("Ethan", "Patel")
            .with_phone("07911 123456")
            .with_address("5 Kings Way")
            .with_postcode("SW1A 1AA")
            .with_email("ethan@example.com"),
    ]
}

/// Inserts each sample unless a record with the same non-empty email exists.
///
/// Samples without an email are always inserted, so re-running with such
/// samples creates duplicates.
pub async fn seed_customers(
    store: &dyn CustomerRepository,
    samples: &[Customer],
) -> Result<SeedOutcome, AppError> {
    let mut inserted = 0;

    for sample in samples {
        if let Some(email) = sample.dedupe_email() {
            if store.find_one_by_email(email).await?.is_some() {
                tracing::debug!(email = %email, "Customer already present, skipping");
                continue;
            }
        }
        store.insert_customer(sample).await?;
        inserted += 1;
    }

    let total = store.count_customers(&CustomerFilter::All).await?;

    Ok(SeedOutcome { inserted, total })
}
