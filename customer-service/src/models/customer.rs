use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};

/// A customer document as stored in the `customer` collection.
///
/// Every field is optional on read: records inserted by other tools may lack
/// names or carry explicit nulls, and `_id` is only known once the store
/// assigns it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Bson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Customer {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..Default::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_postcode(mut self, postcode: impl Into<String>) -> Self {
        self.postcode = Some(postcode.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// String form of the store-assigned identifier, empty when unassigned.
    pub fn id_string(&self) -> String {
        match &self.id {
            None | Some(Bson::Null) => String::new(),
            Some(Bson::ObjectId(oid)) => oid.to_hex(),
            Some(Bson::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Value of a searchable field by its document key.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "first_name" => self.first_name.as_deref(),
            "last_name" => self.last_name.as_deref(),
            "phone" => self.phone.as_deref(),
            "address" => self.address.as_deref(),
            "postcode" => self.postcode.as_deref(),
            "email" => self.email.as_deref(),
            _ => None,
        }
    }

    /// The non-empty email used to deduplicate seeded records.
    pub fn dedupe_email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc, oid::ObjectId};

    #[test]
    fn id_string_renders_object_ids_as_hex() {
        let oid = ObjectId::new();
        let customer = Customer {
            id: Some(Bson::ObjectId(oid)),
            ..Customer::new("Alice", "Johnson")
        };
        assert_eq!(customer.id_string(), oid.to_hex());
    }

    #[test]
    fn id_string_handles_missing_and_foreign_ids() {
        assert_eq!(Customer::new("A", "B").id_string(), "");

        let with_string_id = Customer {
            id: Some(Bson::String("legacy-42".to_string())),
            ..Default::default()
        };
        assert_eq!(with_string_id.id_string(), "legacy-42");

        let with_int_id = Customer {
            id: Some(Bson::Int32(7)),
            ..Default::default()
        };
        assert_eq!(with_int_id.id_string(), "7");
    }

    #[test]
    fn new_records_serialize_without_id_so_the_store_assigns_one() {
        let customer = Customer::new("Bob", "Smith").with_email("bob@example.com");
        let document = bson::to_document(&customer).unwrap();

        assert!(!document.contains_key("_id"));
        assert!(!document.contains_key("phone"));
        assert_eq!(document.get_str("email").unwrap(), "bob@example.com");
    }

    #[test]
    fn sparse_documents_deserialize() {
        let customer: Customer =
            bson::from_document(doc! { "last_name": "Lopez", "phone": null }).unwrap();

        assert!(customer.id.is_none());
        assert!(customer.first_name.is_none());
        assert_eq!(customer.last_name.as_deref(), Some("Lopez"));
        assert!(customer.phone.is_none());
    }

    #[test]
    fn empty_email_is_not_a_dedupe_key() {
        assert_eq!(Customer::new("A", "B").with_email("").dedupe_email(), None);
        assert_eq!(
            Customer::new("A", "B").with_email("a@b.c").dedupe_email(),
            Some("a@b.c")
        );
    }
}
