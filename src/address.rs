use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of the values of an address form, as handed to submission.
///
/// The well-known components are broken out; `fields` keeps every value of
/// the form by field name, including country-specific ones.
#[derive(Debug, Deserialize, Serialize, Clone, Eq, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Country code the form was built for.
    pub country: String,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    /// House or building number.
    pub number: Option<String>,
    #[serde(default)]
    /// Floor, door, apartment and anything else past the number.
    pub complement: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    /// City or locality component.
    pub city: Option<String>,
    #[serde(default)]
    /// State, province, district or region component.
    pub state: Option<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl Address {
    /// Builds a snapshot from `(name, value)` pairs; empty values are left out.
    pub fn from_values<'a, I>(country: &str, values: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let fields: BTreeMap<String, String> = values
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        let get = |name: &str| fields.get(name).cloned();
        Self {
            country: country.to_string(),
            postal_code: get("postalCode"),
            street: get("street"),
            number: get("number"),
            complement: get("complement"),
            neighborhood: get("neighborhood"),
            city: get("city"),
            state: get("state"),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_components() {
        let address = Address::from_values(
            "ESP",
            [
                ("postalCode", "28001"),
                ("street", "Calle de Serrano"),
                ("number", "1"),
                ("complement", ""),
                ("city", "Madrid"),
                ("state", "Madrid"),
            ],
        );
        assert_eq!("ESP", address.country);
        assert_eq!(Some("28001".to_string()), address.postal_code);
        assert_eq!(None, address.complement);
        assert_eq!(5, address.fields.len());

        let json = serde_json::to_value(&address).unwrap();
        assert_eq!("28001", json["postalCode"]);
    }
}
