use crate::{error::Reason, validation, FieldDefinition};
use serde::Serialize;

/// Outcome of the last validation of a field slot.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Validity {
    /// Not validated yet. The renderer shows no error.
    #[default]
    Unknown,
    Valid,
    Invalid,
}

/// Mutable state of one field of the address being edited.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AddressFieldState {
    pub value: String,
    pub valid: Validity,
    /// Present only while `valid` is [`Validity::Invalid`].
    pub reason: Option<Reason>,
    /// A postal code lookup affecting this field is outstanding.
    pub loading: bool,
    /// The user marked the field as intentionally blank.
    pub not_applicable: bool,
}

impl AddressFieldState {
    pub fn is_valid(&self) -> bool {
        self.valid == Validity::Valid
    }

    pub(crate) fn set_result(&mut self, result: Result<(), Reason>) {
        match result {
            Ok(()) => self.set_valid(),
            Err(reason) => self.set_invalid(reason),
        }
    }

    pub(crate) fn set_valid(&mut self) {
        self.valid = Validity::Valid;
        self.reason = None;
    }

    pub(crate) fn set_invalid(&mut self, reason: Reason) {
        self.valid = Validity::Invalid;
        self.reason = Some(reason);
    }

    /// Runs the validator on the current value.
    pub(crate) fn revalidate(&mut self, field: &FieldDefinition) {
        let result = validation::validate(field, &self.value, self.not_applicable);
        self.set_result(result);
    }

    /// Validly omitted: marked not applicable on a field that allows it.
    pub fn is_omitted(&self, field: &FieldDefinition) -> bool {
        self.not_applicable && field.can_be_omitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_slot_is_untouched() {
        let slot = AddressFieldState::default();
        assert_eq!("", slot.value);
        assert_eq!(Validity::Unknown, slot.valid);
        assert_eq!(None, slot.reason);
        assert!(!slot.loading);
        assert!(!slot.not_applicable);
    }

    #[test]
    fn reason_follows_validity() {
        let field = FieldDefinition::new("street", "street").required();
        let mut slot = AddressFieldState::default();
        slot.revalidate(&field);
        assert_eq!(Validity::Invalid, slot.valid);
        assert_eq!(Some(Reason::MissingRequired), slot.reason);

        slot.value = "Gran Vía".to_string();
        slot.revalidate(&field);
        assert!(slot.is_valid());
        assert_eq!(None, slot.reason);
    }

    #[test]
    fn serializes_for_the_renderer() {
        let mut slot = AddressFieldState::default();
        slot.set_invalid(Reason::PostalCodeNotFound);
        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!("invalid", json["valid"]);
        assert_eq!("POSTAL_CODE_NOT_FOUND", json["reason"]);
        assert_eq!(false, json["notApplicable"]);
    }
}
