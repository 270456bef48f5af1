/*!
Built-in country schemas.

Each submodule describes one country with its ISO 3166-1 alpha-3 `CODE` and a
`schema()` constructor. Adding a country means adding a submodule and listing
it in [`builtin`].
*/
pub mod bra;
pub mod esp;
pub mod fra;
pub mod prt;
pub mod usa;

use crate::{error::Error, CountrySchema, FieldDefinition, Size};

/// Schema used for every country without a registration: street, number,
/// city and postal code, with no list of regional subdivisions.
pub fn default_schema() -> Result<CountrySchema, Error> {
    CountrySchema::new(vec![
        FieldDefinition::new("postalCode", "postalCode")
            .required()
            .size(Size::Small),
        FieldDefinition::new("street", "street")
            .required()
            .size(Size::Xlarge),
        FieldDefinition::new("number", "number")
            .required()
            .can_be_omitted()
            .size(Size::Mini),
        FieldDefinition::new("complement", "complement").size(Size::Large),
        FieldDefinition::new("city", "city")
            .required()
            .size(Size::Large),
        FieldDefinition::new("state", "state").size(Size::Large),
    ])
}

/// Every compiled-in country with its schema.
pub fn builtin() -> Result<Vec<(&'static str, CountrySchema)>, Error> {
    Ok(vec![
        (bra::CODE, bra::schema()?),
        (esp::CODE, esp::schema()?),
        (fra::CODE, fra::schema()?),
        (prt::CODE, prt::schema()?),
        (usa::CODE, usa::schema()?),
    ])
}
