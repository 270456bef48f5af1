use crate::{Mask, Pattern};
use serde::{Deserialize, Serialize};
use url::Url;
use validator::Validate;

/// Layout hint carried through to the renderer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Mini,
    Small,
    #[default]
    Medium,
    Large,
    Xlarge,
}

/// Which input widget a field needs.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Free text.
    Text,
    /// Choice among a fixed list of options.
    Select,
    /// Text whose edits trigger a postal code lookup.
    PostalLookup,
}

/// One field of a country's address form.
///
/// Definitions are plain data: construct them with [`FieldDefinition::new`]
/// and the builder methods, or deserialize them from a schema table.
#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Unique identifier within the country's schema.
    #[validate(length(min = 1))]
    pub name: String,
    /// Label key, resolved by the internationalization layer.
    #[validate(length(min = 1))]
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub mask: Option<Mask>,
    #[serde(default)]
    pub pattern: Option<Pattern>,
    /// Presence makes the field a select.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub options: Option<Vec<String>>,
    /// Option matching ignores case.
    #[serde(default)]
    pub case_insensitive: bool,
    /// Edits of this field trigger the postal code lookup.
    #[serde(default)]
    pub postal_code_lookup: bool,
    /// This field is derived from the postal code lookup and waits for it.
    #[serde(default)]
    pub filled_by_lookup: bool,
    /// The user may mark this field as not applicable.
    #[serde(default)]
    pub can_be_omitted: bool,
    #[serde(default)]
    pub uppercase: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub options_caption: Option<String>,
    /// Where a user can find a postal code they do not remember.
    #[serde(default)]
    pub forgotten_url: Option<Url>,
    #[serde(default)]
    pub size: Size,
}

impl FieldDefinition {
    /// Optional free text field.
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            required: false,
            mask: None,
            pattern: None,
            options: None,
            case_insensitive: false,
            postal_code_lookup: false,
            filled_by_lookup: false,
            can_be_omitted: false,
            uppercase: false,
            hidden: false,
            options_caption: None,
            forgotten_url: None,
            size: Size::default(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn mask(mut self, mask: &str) -> Self {
        self.mask = Some(Mask::new(mask));
        self
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    pub fn postal_code_lookup(mut self) -> Self {
        self.postal_code_lookup = true;
        self
    }

    pub fn filled_by_lookup(mut self) -> Self {
        self.filled_by_lookup = true;
        self
    }

    pub fn can_be_omitted(mut self) -> Self {
        self.can_be_omitted = true;
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn options_caption(mut self, caption: &str) -> Self {
        self.options_caption = Some(caption.to_string());
        self
    }

    pub fn forgotten_url(mut self, url: Url) -> Self {
        self.forgotten_url = Some(url);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn input_kind(&self) -> InputKind {
        if self.postal_code_lookup {
            InputKind::PostalLookup
        } else if self.options.is_some() {
            InputKind::Select
        } else {
            InputKind::Text
        }
    }

    /// Turns raw user input into the value stored in the form: the mask is
    /// applied, then upper-casing if the field asks for it.
    pub fn normalize(&self, input: &str) -> String {
        let value = match self.mask {
            Some(ref mask) => mask.apply(input),
            None => input.to_string(),
        };
        if self.uppercase {
            value.to_uppercase()
        } else {
            value
        }
    }
}
