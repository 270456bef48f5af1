//! Portugal.
use crate::{error::Error, CountrySchema, FieldDefinition, Pattern, Size};

pub const CODE: &str = "PRT";

pub const DISTRICTS: [&str; 20] = [
    "Aveiro",
    "Açores",
    "Beja",
    "Braga",
    "Bragança",
    "Castelo Branco",
    "Coimbra",
    "Évora",
    "Faro",
    "Guarda",
    "Leiria",
    "Lisboa",
    "Madeira",
    "Portalegre",
    "Porto",
    "Santarém",
    "Setúbal",
    "Viana do Castelo",
    "Vila Real",
    "Viseu",
];

pub fn schema() -> Result<CountrySchema, Error> {
    CountrySchema::new(vec![
        FieldDefinition::new("postalCode", "postalCode")
            .required()
            .mask("9999-999")
            .pattern(Pattern::new(r"^\d{4}-\d{3}$")?)
            .size(Size::Small),
        FieldDefinition::new("street", "street")
            .required()
            .size(Size::Xlarge),
        FieldDefinition::new("number", "number")
            .required()
            .can_be_omitted()
            .size(Size::Mini),
        FieldDefinition::new("complement", "floorAndLetter").size(Size::Large),
        FieldDefinition::new("city", "city")
            .required()
            .size(Size::Large),
        FieldDefinition::new("state", "district")
            .required()
            .options(DISTRICTS)
            .case_insensitive()
            .size(Size::Large),
    ])
}
