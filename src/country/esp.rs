//! Spain.
use crate::{error::Error, CountrySchema, FieldDefinition, Pattern, Size};
use url::Url;

pub const CODE: &str = "ESP";

const FORGOTTEN_POSTAL_CODE_URL: &str = "http://www.correos.es/ss/Satellite/site/Aplicacion_C-1349167812778-1363184049882/includeTemplate=COR_Aplicacion-sidioma=es_ES";

/// Provinces, in the order the select shows them.
pub const PROVINCES: [&str; 52] = [
    "Álava",
    "Albacete",
    "Alicante",
    "Almería",
    "Avila",
    "Badajoz",
    "Islas Baleares",
    "Barcelona",
    "Burgos",
    "Cáceres",
    "Cádiz",
    "Castellón",
    "Ciudad Real",
    "Córdoba",
    "La Coruña",
    "Cuenca",
    "Gerona",
    "Granada",
    "Guadalajara",
    "Guipúzcoa",
    "Huelva",
    "Huesca",
    "Jaen",
    "León",
    "Lérida",
    "La Rioja",
    "Lugo",
    "Madrid",
    "Málaga",
    "Murcia",
    "Navarra",
    "Orense",
    "Asturias",
    "Palencia",
    "Las Palmas",
    "Pontevedra",
    "Salamanca",
    "S.C.Tenerife",
    "Cantabria",
    "Segovia",
    "Sevilla",
    "Soria",
    "Tarragona",
    "Teruel",
    "Toledo",
    "Valencia",
    "Valladolid",
    "Vizcaya",
    "Zamora",
    "Zaragoza",
    "Ceuta",
    "Melilla",
];

pub fn schema() -> Result<CountrySchema, Error> {
    CountrySchema::new(vec![
        FieldDefinition::new("postalCode", "postalCode")
            .required()
            .mask("99999")
            .pattern(Pattern::new(r"^\d{5}$")?)
            .postal_code_lookup()
            .forgotten_url(Url::parse(FORGOTTEN_POSTAL_CODE_URL)?)
            .size(Size::Small),
        FieldDefinition::new("street", "street")
            .required()
            .size(Size::Xlarge),
        FieldDefinition::new("number", "number")
            .required()
            .size(Size::Mini),
        FieldDefinition::new("complement", "floorAndLetter").size(Size::Large),
        FieldDefinition::new("city", "city")
            .required()
            .filled_by_lookup()
            .size(Size::Large),
        FieldDefinition::new("state", "province")
            .required()
            .options(PROVINCES)
            .options_caption("")
            .filled_by_lookup()
            .size(Size::Large),
    ])
}
