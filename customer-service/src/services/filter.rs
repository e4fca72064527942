use crate::models::Customer;
use mongodb::bson::{doc, Bson, Document};

/// Fields covered by free-text customer search.
pub const SEARCHABLE_FIELDS: [&str; 6] = [
    "first_name",
    "last_name",
    "phone",
    "address",
    "postcode",
    "email",
];

/// Declarative selection over the customer collection.
///
/// Each backend interprets the same filter: MongoDB through
/// [`CustomerFilter::to_document`], the in-memory store through
/// [`CustomerFilter::matches`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerFilter {
    All,
    /// Case-insensitive, unanchored substring match on any searchable field.
    Search(String),
    /// Exact email equality.
    Email(String),
}

impl CustomerFilter {
    pub fn search(term: impl Into<String>) -> Self {
        CustomerFilter::Search(term.into())
    }

    pub fn email(email: impl Into<String>) -> Self {
        CustomerFilter::Email(email.into())
    }

    pub fn to_document(&self) -> Document {
        match self {
            CustomerFilter::All => Document::new(),
            CustomerFilter::Search(term) => {
                let regex = doc! { "$regex": escape_regex(term), "$options": "i" };
                let clauses: Vec<Bson> = SEARCHABLE_FIELDS
                    .iter()
                    .map(|field| {
                        let mut clause = Document::new();
                        clause.insert(*field, regex.clone());
                        Bson::Document(clause)
                    })
                    .collect();
                doc! { "$or": clauses }
            }
            CustomerFilter::Email(email) => doc! { "email": email.as_str() },
        }
    }

    pub fn matches(&self, customer: &Customer) -> bool {
        match self {
            CustomerFilter::All => true,
            CustomerFilter::Search(term) => {
                let needle = term.to_lowercase();
                SEARCHABLE_FIELDS.iter().any(|field| {
                    customer
                        .field(field)
                        .is_some_and(|value| value.to_lowercase().contains(&needle))
                })
            }
            CustomerFilter::Email(email) => customer.email.as_deref() == Some(email.as_str()),
        }
    }
}

/// Escapes PCRE metacharacters so user input is matched literally.
pub fn escape_regex(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(
            c,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
                | '#' | '-'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
