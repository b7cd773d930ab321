use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A seeded article shown on the blog page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    /// Publication date, stored as `YYYY-MM-DD`
    pub date: NaiveDate,
    pub author: String,
}
