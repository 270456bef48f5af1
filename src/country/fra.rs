//! France.
use crate::{error::Error, CountrySchema, FieldDefinition, Pattern, Size};

pub const CODE: &str = "FRA";

pub fn schema() -> Result<CountrySchema, Error> {
    CountrySchema::new(vec![
        FieldDefinition::new("postalCode", "postalCode")
            .required()
            .mask("99999")
            .pattern(Pattern::new(r"^\d{5}$")?)
            .postal_code_lookup()
            .size(Size::Small),
        FieldDefinition::new("number", "number")
            .can_be_omitted()
            .size(Size::Mini),
        FieldDefinition::new("street", "street")
            .required()
            .size(Size::Xlarge),
        FieldDefinition::new("complement", "complement").size(Size::Large),
        FieldDefinition::new("city", "city")
            .required()
            .filled_by_lookup()
            .size(Size::Large),
    ])
}
