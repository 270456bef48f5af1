/*!
# Country-driven postal address forms

## Legal

Dual-licensed under `MIT` or the [UNLICENSE](http://unlicense.org/).

## Features

For a country code the crate resolves which address fields a form shows, in
which order, with which validation rule and which input widget: free text, a
select over fixed options, or the postal code field that triggers a lookup of
the dependent fields (city, state, ...).

- [`CountrySchemaRegistry`] maps ISO 3166-1 alpha-3 codes to a
  [`CountrySchema`]. Unknown codes get a generic default schema, never an
  error. Schemas are compiled in (see [`country`]) or loaded from a versioned
  JSON table.
- [`validate`] decides the validity of one value and names the [`Reason`] of
  a failure.
- [`AddressFormState`] holds one address being edited and applies the
  validator on every edit.
- [`lookup`] defines the postal code lookup contract. Responses are tagged
  with the generation of their request, so a slow answer to an old postal
  code can never overwrite the answer to a newer one.

Labels and reasons are stable keys; turning them into display text is up to
the caller, as is painting the form.

Using [reqwest](https://crates.io/crates/reqwest) for the HTTP lookup service
and [log](https://crates.io/crates/log) for diagnostics.

## Usage

Add dependency to Cargo.toml:

```toml
[dependencies]
address-form = "0.1"
```

### Use case: editing a Spanish address

```rust
use address_form::{AddressFormState, LookupOutcome, Reason, Validity};

let mut form = AddressFormState::builtin("ESP");

form.set_field_value("postalCode", "2800").unwrap();
let postal_code = form.field("postalCode").unwrap();
assert_eq!(Validity::Invalid, postal_code.valid);
assert_eq!(Some(Reason::PatternMismatch), postal_code.reason);

// A valid postal code hands back the lookup to run.
let request = form.set_field_value("postalCode", "28001").unwrap().unwrap();
assert!(form.field("city").unwrap().loading);

// Normally produced by `address_form::lookup::resolve` with a resolver.
let fields = [("city", "Madrid"), ("state", "Madrid")]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect();
assert!(form.apply_lookup(request.respond(LookupOutcome::Found(fields))));

form.set_field_value("street", "Calle de Serrano").unwrap();
form.set_field_value("number", "1").unwrap();
assert!(form.validate_all());
assert_eq!(Some("Madrid".to_string()), form.address().city);
```

### Use case: asking a postal code service

```rust,no_run
use address_form::{lookup, AddressFormState, HttpResolver, LookupOptions};
use url::Url;

# async fn run() -> Result<(), address_form::error::Error> {
let resolver = HttpResolver::new(Url::parse("https://postal-codes.example.com/v1")?)?;
let options = LookupOptions::default();

let mut form = AddressFormState::builtin("BRA");
if let Some(request) = form.set_field_value("postalCode", "01310100")? {
    let response = lookup::resolve(&resolver, &request, &options).await;
    form.apply_lookup(response);
}
# Ok(())
# }
```
*/
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod address;
pub mod country;
mod deserializers;
pub mod error;
mod field;
mod form;
pub mod lookup;
mod mask;
mod options;
mod pattern;
mod registry;
mod schema;
mod state;
mod validation;

pub use address::Address;
pub use error::{Error, Reason};
pub use field::{FieldDefinition, InputKind, Size};
pub use form::AddressFormState;
pub use lookup::{
    HttpResolver, LookupOutcome, LookupRequest, LookupResponse, PostalCodeResolver,
    StaticResolver,
};
pub use mask::Mask;
pub use options::LookupOptions;
pub use pattern::Pattern;
pub use registry::{CountrySchemaRegistry, RegistryBuilder, BUILTIN_VERSION};
pub use schema::CountrySchema;
pub use state::{AddressFieldState, Validity};
pub use validation::validate;
