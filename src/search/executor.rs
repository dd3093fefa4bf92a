use sqlx::PgPool;

use crate::database::{DatabaseError, Person};
use crate::search::SearchCriteria;

/// Apply the name/city filters and the result cap to records already in
/// storage order. Both the field and the filter value are lowercased before
/// the containment check; a record must satisfy every supplied filter.
pub fn filter_people(people: &[Person], criteria: &SearchCriteria) -> Vec<Person> {
    let name = criteria.name.as_deref().map(str::to_lowercase);
    let city = criteria.city.as_deref().map(str::to_lowercase);

    let mut results: Vec<Person> = people
        .iter()
        .filter(|person| {
            let name_match = name
                .as_deref()
                .map_or(true, |n| person.first_name.to_lowercase().contains(n));
            let city_match = city
                .as_deref()
                .map_or(true, |c| person.city.to_lowercase().contains(c));
            name_match && city_match
        })
        .cloned()
        .collect();

    if let Some(limit) = criteria.limit() {
        results.truncate(limit);
    }

    results
}

/// Read-only search against the record store
pub async fn execute(pool: &PgPool, criteria: &SearchCriteria) -> Result<Vec<Person>, DatabaseError> {
    let people = Person::fetch_all(pool).await?;
    Ok(filter_people(&people, criteria))
}
