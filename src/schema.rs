use crate::{error::Error, FieldDefinition};
use serde::Serialize;
use std::collections::HashSet;
use validator::Validate;

/// Ordered field definitions of one country.
///
/// A schema can only be built through [`CountrySchema::new`], which rejects
/// malformed data, so every schema handed to a form is well-formed.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CountrySchema {
    fields: Vec<FieldDefinition>,
}

impl CountrySchema {
    /// Checks the schema invariants:
    ///
    /// - every definition passes its own field rules
    /// - field names are unique
    /// - at most one field triggers the postal code lookup
    /// - the lookup field is not also filled by the lookup
    pub fn new(fields: Vec<FieldDefinition>) -> Result<Self, Error> {
        let mut names = HashSet::new();
        let mut lookup_field: Option<&str> = None;

        for field in &fields {
            field.validate()?;

            if !names.insert(field.name.as_str()) {
                return Err(Error::DuplicateField(field.name.clone()));
            }

            if field.postal_code_lookup {
                if field.filled_by_lookup {
                    return Err(Error::LookupFieldFilledByLookup(field.name.clone()));
                }
                if let Some(first) = lookup_field {
                    return Err(Error::MultipleLookupFields(
                        first.to_string(),
                        field.name.clone(),
                    ));
                }
                lookup_field = Some(field.name.as_str());
            }
        }

        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// The field whose edits trigger the postal code lookup, if any.
    pub fn lookup_field(&self) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.postal_code_lookup)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
