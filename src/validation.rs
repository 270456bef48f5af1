use crate::{error::Reason, FieldDefinition};

/// Decides whether `value` is acceptable for `field`.
///
/// Rules, first match wins:
///
/// - omitted, and the field can be omitted: valid
/// - empty and optional: valid
/// - empty and required: [`Reason::MissingRequired`]
/// - not one of the field options: [`Reason::InvalidOption`]
/// - does not match the field pattern: [`Reason::PatternMismatch`]
/// - otherwise valid
pub fn validate(field: &FieldDefinition, value: &str, omitted: bool) -> Result<(), Reason> {
    if omitted && field.can_be_omitted {
        return Ok(());
    }

    if value.is_empty() {
        if field.required {
            return Err(Reason::MissingRequired);
        }
        return Ok(());
    }

    if let Some(ref options) = field.options {
        if !options
            .iter()
            .any(|option| option_matches(option, value, field.case_insensitive))
        {
            return Err(Reason::InvalidOption);
        }
    }

    if let Some(ref pattern) = field.pattern {
        if !pattern.is_full_match(value) {
            return Err(Reason::PatternMismatch);
        }
    }

    Ok(())
}

fn option_matches(option: &str, value: &str, case_insensitive: bool) -> bool {
    if case_insensitive {
        option.to_lowercase() == value.to_lowercase()
    } else {
        option == value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{country, Pattern};

    fn postal_code() -> FieldDefinition {
        FieldDefinition::new("postalCode", "postalCode")
            .required()
            .pattern(Pattern::new(r"^\d{5}$").unwrap())
    }

    #[test]
    fn required_and_empty() {
        assert_eq!(Err(Reason::MissingRequired), validate(&postal_code(), "", false));
    }

    #[test]
    fn optional_and_empty() {
        let field = FieldDefinition::new("complement", "complement")
            .pattern(Pattern::new(r"\d+").unwrap());
        assert_eq!(Ok(()), validate(&field, "", false));
    }

    #[test]
    fn omission_overrides_everything() {
        let field = postal_code().can_be_omitted();
        assert_eq!(Ok(()), validate(&field, "", true));
        assert_eq!(Ok(()), validate(&field, "not a postal code", true));
    }

    #[test]
    fn omission_ignored_when_not_permitted() {
        assert_eq!(Err(Reason::MissingRequired), validate(&postal_code(), "", true));
        assert_eq!(
            Err(Reason::PatternMismatch),
            validate(&postal_code(), "2800", true)
        );
    }

    #[test]
    fn spain_postal_code_pattern() {
        let schema = country::esp::schema().unwrap();
        let field = schema.field("postalCode").unwrap();
        assert_eq!(Ok(()), validate(field, "28001", false));
        assert_eq!(Err(Reason::PatternMismatch), validate(field, "2800", false));
    }

    #[test]
    fn options_match_exactly() {
        let schema = country::esp::schema().unwrap();
        let state = schema.field("state").unwrap();
        for option in state.options.as_ref().unwrap() {
            assert_eq!(Ok(()), validate(state, option, false));
        }
        assert_eq!(Err(Reason::InvalidOption), validate(state, "madrid", false));
        assert_eq!(Err(Reason::InvalidOption), validate(state, "Madrid ", false));
        assert_eq!(Err(Reason::InvalidOption), validate(state, "Lisboa", false));
    }

    #[test]
    fn case_insensitive_options() {
        let field = FieldDefinition::new("state", "state")
            .options(["Lisboa", "Évora"])
            .case_insensitive();
        assert_eq!(Ok(()), validate(&field, "lisboa", false));
        assert_eq!(Ok(()), validate(&field, "ÉVORA", false));
        assert_eq!(Err(Reason::InvalidOption), validate(&field, "Porto", false));
    }

    #[test]
    fn options_checked_before_pattern() {
        let field = FieldDefinition::new("state", "state")
            .options(["AB"])
            .pattern(Pattern::new("[a-z]+").unwrap());
        assert_eq!(Err(Reason::InvalidOption), validate(&field, "XY", false));
        assert_eq!(Err(Reason::PatternMismatch), validate(&field, "AB", false));
    }

    fn every_builtin_field() -> Vec<FieldDefinition> {
        let mut schemas: Vec<_> = country::builtin()
            .unwrap()
            .into_iter()
            .map(|(_, schema)| schema)
            .collect();
        schemas.push(country::default_schema().unwrap());
        schemas
            .iter()
            .flat_map(|schema| schema.fields().iter().cloned())
            .collect()
    }

    #[test]
    fn empty_value_across_builtin_schemas() {
        for field in every_builtin_field() {
            let expected = if field.required {
                Err(Reason::MissingRequired)
            } else {
                Ok(())
            };
            assert_eq!(expected, validate(&field, "", false), "{}", field.name);
        }
    }

    #[test]
    fn omission_across_builtin_schemas() {
        for field in every_builtin_field().iter().filter(|f| f.can_be_omitted) {
            assert_eq!(Ok(()), validate(field, "", true), "{}", field.name);
            assert_eq!(Ok(()), validate(field, "?!", true), "{}", field.name);
        }
    }

    #[test]
    fn plain_text_field() {
        let field = FieldDefinition::new("street", "street").required();
        assert_eq!(Ok(()), validate(&field, "Gran Vía", false));
    }
}
