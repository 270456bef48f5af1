use crate::{Mask, Pattern};
use de::Visitor;
use serde::de;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(PatternVisitor)
    }
}

struct PatternVisitor;

impl<'de> Visitor<'de> for PatternVisitor {
    type Value = Pattern;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a regular expression")
    }

    fn visit_str<E>(self, value: &str) -> Result<Pattern, E>
    where
        E: de::Error,
    {
        Pattern::new(value).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Mask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(MaskVisitor)
    }
}

struct MaskVisitor;

impl<'de> Visitor<'de> for MaskVisitor {
    type Value = Mask;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an input mask such as \"99999-999\"")
    }

    fn visit_str<E>(self, value: &str) -> Result<Mask, E>
    where
        E: de::Error,
    {
        if value.is_empty() {
            return Err(E::custom("mask must not be empty"));
        }
        Ok(Mask::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_from_string() {
        let pattern: Pattern = serde_json::from_str(r#""^\\d{5}$""#).unwrap();
        assert!(pattern.is_full_match("28001"));
    }

    #[test]
    fn broken_pattern_fails_to_deserialize() {
        assert!(serde_json::from_str::<Pattern>(r#""[0-9""#).is_err());
    }

    #[test]
    fn mask_from_string() {
        let mask: Mask = serde_json::from_str(r#""9999-999""#).unwrap();
        assert_eq!("9999-999", mask.as_str());
        assert!(serde_json::from_str::<Mask>(r#""""#).is_err());
    }
}
