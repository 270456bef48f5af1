//! Brazil.
use crate::{error::Error, CountrySchema, FieldDefinition, Pattern, Size};
use url::Url;

pub const CODE: &str = "BRA";

const FORGOTTEN_POSTAL_CODE_URL: &str =
    "https://buscacepinter.correios.com.br/app/endereco/index.php";

pub const STATES: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB", "PR",
    "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

pub fn schema() -> Result<CountrySchema, Error> {
    CountrySchema::new(vec![
        FieldDefinition::new("postalCode", "postalCode")
            .required()
            .mask("99999-999")
            .pattern(Pattern::new(r"^\d{5}-?\d{3}$")?)
            .postal_code_lookup()
            .forgotten_url(Url::parse(FORGOTTEN_POSTAL_CODE_URL)?)
            .size(Size::Small),
        FieldDefinition::new("street", "street")
            .required()
            .filled_by_lookup()
            .size(Size::Xlarge),
        FieldDefinition::new("number", "number")
            .required()
            .can_be_omitted()
            .size(Size::Mini),
        FieldDefinition::new("complement", "complement").size(Size::Large),
        FieldDefinition::new("neighborhood", "neighborhood")
            .required()
            .filled_by_lookup()
            .size(Size::Large),
        FieldDefinition::new("city", "city")
            .required()
            .filled_by_lookup()
            .size(Size::Large),
        FieldDefinition::new("state", "state")
            .required()
            .options(STATES)
            .uppercase()
            .filled_by_lookup()
            .size(Size::Mini),
    ])
}
