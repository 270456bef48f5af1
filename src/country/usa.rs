//! United States.
use crate::{error::Error, CountrySchema, FieldDefinition, Pattern, Size};

pub const CODE: &str = "USA";

pub const STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM",
    "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];

pub fn schema() -> Result<CountrySchema, Error> {
    CountrySchema::new(vec![
        FieldDefinition::new("postalCode", "zipCode")
            .required()
            .pattern(Pattern::new(r"^\d{5}(-\d{4})?$")?)
            .postal_code_lookup()
            .size(Size::Small),
        FieldDefinition::new("street", "addressLine1")
            .required()
            .size(Size::Xlarge),
        FieldDefinition::new("complement", "addressLine2").size(Size::Xlarge),
        FieldDefinition::new("city", "city")
            .required()
            .filled_by_lookup()
            .size(Size::Large),
        FieldDefinition::new("state", "state")
            .required()
            .options(STATES)
            .case_insensitive()
            .filled_by_lookup()
            .size(Size::Mini),
    ])
}
