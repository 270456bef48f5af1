use crate::{
    error::{Error, Reason},
    lookup::{LookupOutcome, LookupRequest, LookupResponse},
    Address, AddressFieldState, CountrySchema, CountrySchemaRegistry, FieldDefinition, Validity,
};

/// One address being edited.
///
/// Holds a slot per field of the selected country's schema, in schema order,
/// and the postal code lookup the form is waiting for. Every mutation takes
/// `&mut self`; lookups run outside the form and come back through
/// [`apply_lookup`](Self::apply_lookup).
#[derive(Debug, Clone)]
pub struct AddressFormState<'r> {
    registry: &'r CountrySchemaRegistry,
    country: String,
    schema: &'r CountrySchema,
    slots: Vec<AddressFieldState>,
    pending: Option<LookupRequest>,
    // Never reset, so a response issued under an earlier country cannot match.
    generation: u64,
}

impl AddressFormState<'static> {
    /// Form over the compiled-in countries.
    pub fn builtin(country_code: &str) -> Self {
        Self::new(CountrySchemaRegistry::builtin(), country_code)
    }
}

impl<'r> AddressFormState<'r> {
    pub fn new(registry: &'r CountrySchemaRegistry, country_code: &str) -> Self {
        let schema = registry.resolve(country_code);
        Self {
            registry,
            country: normalize_code(country_code),
            schema,
            slots: vec![AddressFieldState::default(); schema.len()],
            pending: None,
            generation: 0,
        }
    }

    /// Rebuilds the form for another country. Every slot is reset and the
    /// pending lookup, if any, is abandoned.
    pub fn set_country(&mut self, country_code: &str) {
        if let Some(request) = self.pending.take() {
            debug!(
                "abandoning postal code lookup {} {} (generation {})",
                request.country, request.postal_code, request.generation
            );
        }
        self.country = normalize_code(country_code);
        self.schema = self.registry.resolve(country_code);
        self.slots = vec![AddressFieldState::default(); self.schema.len()];
        debug!(
            "address form rebuilt for {} with {} fields",
            self.country,
            self.schema.len()
        );
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn schema(&self) -> &'r CountrySchema {
        self.schema
    }

    pub fn field(&self, name: &str) -> Option<&AddressFieldState> {
        self.position(name).map(|index| &self.slots[index])
    }

    /// Definitions with their slots, in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (&'r FieldDefinition, &AddressFieldState)> + '_ {
        let schema: &'r CountrySchema = self.schema;
        schema.fields().iter().zip(self.slots.iter())
    }

    pub fn pending_lookup(&self) -> Option<&LookupRequest> {
        self.pending.as_ref()
    }

    /// Stores a user edit and validates it.
    ///
    /// Input goes through the field's mask and upper-casing first. When the
    /// field triggers the postal code lookup, any pending lookup is superseded;
    /// if the new postal code is valid a [`LookupRequest`] is returned and the
    /// affected fields are marked loading until its response is applied.
    pub fn set_field_value(
        &mut self,
        name: &str,
        value: &str,
    ) -> Result<Option<LookupRequest>, Error> {
        let index = self.index_of(name)?;
        let schema = self.schema;
        let field = &schema.fields()[index];
        let value = field.normalize(value);

        if field.postal_code_lookup {
            if let Some(ref pending) = self.pending {
                if pending.postal_code == value && self.slots[index].value == value {
                    return Ok(None);
                }
            }
        }

        let slot = &mut self.slots[index];
        slot.value = value;
        slot.revalidate(field);

        if !field.postal_code_lookup {
            return Ok(None);
        }

        self.cancel_pending();
        let slot = &self.slots[index];
        if !slot.is_valid() || slot.value.is_empty() || slot.is_omitted(field) {
            return Ok(None);
        }
        Ok(Some(self.issue_lookup(index)))
    }

    /// Flips the "not applicable" mark of a field and revalidates it.
    pub fn toggle_omitted(&mut self, name: &str) -> Result<(), Error> {
        let index = self.index_of(name)?;
        let schema = self.schema;
        let field = &schema.fields()[index];
        if !field.can_be_omitted {
            return Err(Error::NotOmittable(name.to_string()));
        }

        let slot = &mut self.slots[index];
        slot.not_applicable = !slot.not_applicable;
        slot.revalidate(field);

        if field.postal_code_lookup && slot.not_applicable {
            self.cancel_pending();
        }
        Ok(())
    }

    /// Applies the outcome of a lookup.
    ///
    /// Only the response to the latest request is applied; responses to
    /// superseded requests are dropped and `false` is returned. Resolved values
    /// only land in fields filled by the lookup and are validated like edits.
    pub fn apply_lookup(&mut self, response: LookupResponse) -> bool {
        match self.pending {
            Some(ref pending) if pending.generation == response.generation => {}
            _ => {
                debug!(
                    "dropping stale postal code lookup response (generation {})",
                    response.generation
                );
                return false;
            }
        }
        self.pending = None;
        self.clear_loading();

        let schema = self.schema;
        let lookup_index = match schema.fields().iter().position(|f| f.postal_code_lookup) {
            Some(index) => index,
            None => return false,
        };

        match response.outcome {
            LookupOutcome::Found(fields) => {
                for (name, value) in fields {
                    let index = match self.position(&name) {
                        Some(index) if schema.fields()[index].filled_by_lookup => index,
                        _ => {
                            debug!("ignoring resolved field {}", name);
                            continue;
                        }
                    };
                    let field = &schema.fields()[index];
                    let slot = &mut self.slots[index];
                    slot.value = if field.uppercase {
                        value.to_uppercase()
                    } else {
                        value
                    };
                    slot.revalidate(field);
                }
                self.slots[lookup_index].set_valid();
            }
            LookupOutcome::NotFound => {
                self.slots[lookup_index].set_invalid(Reason::PostalCodeNotFound);
            }
            LookupOutcome::TimedOut => {
                self.slots[lookup_index].set_invalid(Reason::PostalCodeLookupTimeout);
            }
        }
        true
    }

    /// Every field is valid or validly omitted, and no lookup is pending.
    pub fn is_submittable(&self) -> bool {
        self.pending.is_none()
            && self
                .fields()
                .all(|(field, slot)| slot.is_valid() || slot.is_omitted(field))
    }

    /// Submit attempt: validates the fields nobody touched yet, so their
    /// errors surface, then reports [`is_submittable`](Self::is_submittable).
    pub fn validate_all(&mut self) -> bool {
        for (field, slot) in self.schema.fields().iter().zip(self.slots.iter_mut()) {
            if slot.valid == Validity::Unknown && !slot.loading {
                slot.revalidate(field);
            }
        }
        self.is_submittable()
    }

    /// Current values, leaving out fields marked not applicable.
    pub fn address(&self) -> Address {
        Address::from_values(
            &self.country,
            self.fields()
                .filter(|(field, slot)| !slot.is_omitted(field))
                .map(|(field, slot)| (field.name.as_str(), slot.value.as_str())),
        )
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.schema.fields().iter().position(|field| field.name == name)
    }

    fn index_of(&self, name: &str) -> Result<usize, Error> {
        self.position(name)
            .ok_or_else(|| Error::UnknownField(name.to_string()))
    }

    fn issue_lookup(&mut self, lookup_index: usize) -> LookupRequest {
        self.generation += 1;
        let request = LookupRequest {
            country: self.country.clone(),
            postal_code: self.slots[lookup_index].value.clone(),
            generation: self.generation,
        };
        for (index, (field, slot)) in self
            .schema
            .fields()
            .iter()
            .zip(self.slots.iter_mut())
            .enumerate()
        {
            if index == lookup_index || field.filled_by_lookup {
                slot.loading = true;
            }
        }
        debug!(
            "postal code lookup {} {} issued (generation {})",
            request.country, request.postal_code, request.generation
        );
        self.pending = Some(request.clone());
        request
    }

    fn cancel_pending(&mut self) {
        if let Some(request) = self.pending.take() {
            debug!(
                "postal code lookup {} {} superseded (generation {})",
                request.country, request.postal_code, request.generation
            );
            self.clear_loading();
        }
    }

    fn clear_loading(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.loading = false;
        }
    }
}

fn normalize_code(country_code: &str) -> String {
    country_code.trim().to_ascii_uppercase()
}
