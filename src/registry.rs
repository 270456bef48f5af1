use crate::{country, error::Error, CountrySchema, FieldDefinition};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Version of the compiled-in country table.
pub const BUILTIN_VERSION: u32 = 1;

lazy_static! {
    static ref BUILTIN: CountrySchemaRegistry = CountrySchemaRegistry::load_builtin()
        .expect("compiled-in country schemas must be well-formed");
}

/// Maps country codes to their form schema.
///
/// A registry is assembled once through [`RegistryBuilder`] and is read-only
/// afterwards, so it can be shared freely between form sessions.
#[derive(Debug, Clone)]
pub struct CountrySchemaRegistry {
    version: u32,
    schemas: HashMap<String, CountrySchema>,
    default: CountrySchema,
}

impl CountrySchemaRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Process-wide registry of the compiled-in countries.
    pub fn builtin() -> &'static CountrySchemaRegistry {
        &BUILTIN
    }

    fn load_builtin() -> Result<Self, Error> {
        let mut builder = Self::builder().version(BUILTIN_VERSION);
        for (code, schema) in country::builtin()? {
            builder = builder.register(code, schema)?;
        }
        builder.build()
    }

    /// Loads a versioned schema table:
    ///
    /// ```json
    /// { "version": 3, "countries": { "ESP": [ { "name": "postalCode", "label": "postalCode" } ] } }
    /// ```
    ///
    /// Every field record is checked before any schema is registered. Codes
    /// missing from the table fall back to the built-in default schema.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let table: SchemaTable = serde_json::from_str(json)?;
        let mut builder = Self::builder().version(table.version);
        for (code, fields) in table.countries {
            builder = builder.register(&code, CountrySchema::new(fields)?)?;
        }
        builder.build()
    }

    /// Schema of the given country, or the default schema when the code is
    /// not registered.
    pub fn resolve(&self, country_code: &str) -> &CountrySchema {
        self.schemas
            .get(&normalize_code(country_code))
            .unwrap_or(&self.default)
    }

    pub fn is_registered(&self, country_code: &str) -> bool {
        self.schemas.contains_key(&normalize_code(country_code))
    }

    /// Registered country codes, sorted.
    pub fn countries(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn default_schema(&self) -> &CountrySchema {
        &self.default
    }

    pub fn version(&self) -> u32 {
        self.version
    }
}

/// Collects country schemas before they become a read-only
/// [`CountrySchemaRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    version: u32,
    schemas: HashMap<String, CountrySchema>,
    default: Option<CountrySchema>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn register(mut self, country_code: &str, schema: CountrySchema) -> Result<Self, Error> {
        let code = normalize_code(country_code);
        if self.schemas.contains_key(&code) {
            return Err(Error::DuplicateCountry(code));
        }
        self.schemas.insert(code, schema);
        Ok(self)
    }

    /// Replaces the fallback schema of unregistered countries.
    pub fn default_schema(mut self, schema: CountrySchema) -> Self {
        self.default = Some(schema);
        self
    }

    pub fn build(self) -> Result<CountrySchemaRegistry, Error> {
        let default = match self.default {
            Some(schema) => schema,
            None => country::default_schema()?,
        };
        debug!(
            "country schema registry v{} with {} countries",
            self.version,
            self.schemas.len()
        );
        Ok(CountrySchemaRegistry {
            version: self.version,
            schemas: self.schemas,
            default,
        })
    }
}

#[derive(Deserialize)]
struct SchemaTable {
    version: u32,
    countries: BTreeMap<String, Vec<FieldDefinition>>,
}

fn normalize_code(country_code: &str) -> String {
    country_code.trim().to_ascii_uppercase()
}
