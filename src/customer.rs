use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geo::Point;
use crate::select::Located;

/// One customer record from the input file, e.g.
/// `{"user_id":99,"name":"Jane","latitude":"52.3706233","longitude":"4.9284594"}`
///
/// Coordinates are carried as JSON strings holding decimal degrees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub user_id: i32,
    pub name: String,
    #[serde(with = "f64_as_string")]
    pub latitude: f64,
    #[serde(with = "f64_as_string")]
    pub longitude: f64,
}

impl Customer {
    pub fn from_json(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }

    pub fn location(&self) -> Point {
        Point::new(self.latitude, self.longitude)
    }
}

impl Located for Customer {
    type Id = i32;

    fn id(&self) -> i32 {
        self.user_id
    }

    fn location(&self) -> Point {
        Customer::location(self)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer\tid: {}\tname: {}", self.user_id, self.name)
    }
}

mod f64_as_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let value: f64 = raw.trim().parse().map_err(de::Error::custom)?;
        if !value.is_finite() {
            return Err(de::Error::custom(format!("non-finite coordinate {raw:?}")));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str =
        r#"{"user_id":99,"name":"Baran Kucukguzel","latitude":"52.3706233","longitude":"4.9284594"}"#;

    fn baran() -> Customer {
        Customer {
            user_id: 99,
            name: String::from("Baran Kucukguzel"),
            latitude: 52.3706233,
            longitude: 4.9284594,
        }
    }

    #[test]
    fn parses_valid_json() {
        let customer = Customer::from_json(JSON).unwrap();
        assert_eq!(customer, baran());
    }

    #[test]
    fn field_order_does_not_matter() {
        let line = r#"{"latitude": "52.3706233", "user_id": 99, "longitude": "4.9284594", "name": "Baran Kucukguzel"}"#;
        assert_eq!(Customer::from_json(line).unwrap(), baran());
    }

    #[test]
    fn serializes_coordinates_as_strings() {
        let json = serde_json::to_string(&baran()).unwrap();
        assert_eq!(json, JSON);
    }

    #[test]
    fn rejects_malformed_json() {
        let line = r#"{user_id":99,"name":"Baran Kucukguzel","latitude":"52.3706233","longitude":"4.9284594"}"#;
        assert!(Customer::from_json(line).is_err());
    }

    #[test]
    fn rejects_unquoted_coordinates() {
        let line = r#"{"user_id":99,"name":"Baran Kucukguzel","latitude":52.3706233,"longitude":4.9284594}"#;
        assert!(Customer::from_json(line).is_err());
    }

    #[test]
    fn rejects_missing_and_non_numeric_fields() {
        assert!(Customer::from_json(r#"{"user_id":99,"name":"x","latitude":"1.0"}"#).is_err());
        assert!(Customer::from_json(
            r#"{"user_id":99,"name":"x","latitude":"north","longitude":"1.0"}"#
        )
        .is_err());
        assert!(
            Customer::from_json(r#"{"user_id":99,"name":"x","latitude":"NaN","longitude":"1.0"}"#)
                .is_err()
        );
    }

    #[test]
    fn location_matches_coordinates() {
        let customer = baran();
        let location = customer.location();
        assert_eq!(location.latitude, customer.latitude);
        assert_eq!(location.longitude, customer.longitude);
    }

    #[test]
    fn displays_as_report_line() {
        assert_eq!(baran().to_string(), "Customer\tid: 99\tname: Baran Kucukguzel");
    }
}
