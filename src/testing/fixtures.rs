//! Pre-built datasets for common collection scenarios.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Product records with a repeated price, for record filtering.
///
/// # Example
///
/// ```
/// use ironcollect::testing::sample_products;
///
/// let products = sample_products();
/// assert_eq!(products.len(), 4);
/// ```
#[must_use]
pub fn sample_products() -> Vec<Value> {
    vec![
        json!({ "product": "Desk", "price": 200 }),
        json!({ "product": "Chair", "price": 100 }),
        json!({ "product": "Bookcase", "price": 150 }),
        json!({ "product": "Door", "price": 100 }),
    ]
}

/// A flat record, for keyed comparisons.
///
/// # Example
///
/// ```
/// use ironcollect::testing::sample_fruit;
///
/// assert_eq!(sample_fruit()["color"], "orange");
/// ```
#[must_use]
pub fn sample_fruit() -> Value {
    json!({ "color": "orange", "type": "fruit", "remain": 6 })
}

/// A typed record for tests that exercise `Serialize` elements rather than
/// raw JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SamplePerson {
    pub id: u32,
    pub name: String,
    pub team: String,
}

impl crate::value::ValueEq for SamplePerson {}

/// People spread unevenly over three teams.
///
/// # Example
///
/// ```
/// use ironcollect::testing::sample_people;
///
/// let people = sample_people();
/// assert!(people.iter().filter(|p| p.team == "red").count() > 1);
/// ```
#[must_use]
pub fn sample_people() -> Vec<SamplePerson> {
    [
        (1, "Ada", "red"),
        (2, "Brian", "blue"),
        (3, "Chen", "red"),
        (4, "Dana", "green"),
        (5, "Eli", "red"),
    ]
    .into_iter()
    .map(|(id, name, team)| SamplePerson {
        id,
        name: name.to_string(),
        team: team.to_string(),
    })
    .collect()
}
