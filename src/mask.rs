use serde::{Serialize, Serializer};

/// Input formatting pattern of a field.
///
/// Placeholders: `9` takes a digit, `a` a letter, `*` a letter or a digit.
/// Every other character of the mask is a literal inserted as the user types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask(String);

impl Mask {
    pub fn new(mask: &str) -> Self {
        Mask(mask.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formats raw input through the mask.
    ///
    /// Characters that fit no placeholder are dropped, as are literals typed by
    /// the user (they are re-inserted from the mask). Output stops when the
    /// mask is exhausted or the input runs out.
    pub fn apply(&self, input: &str) -> String {
        let mut output = String::with_capacity(self.0.len());
        let mut chars = input.chars().peekable();
        let mut pending_literals = String::new();

        for slot in self.0.chars() {
            match placeholder(slot) {
                Some(accepts) => {
                    let next = loop {
                        match chars.next() {
                            Some(c) if accepts(c) => break Some(c),
                            Some(_) => continue,
                            None => break None,
                        }
                    };
                    match next {
                        Some(c) => {
                            output.push_str(&pending_literals);
                            pending_literals.clear();
                            output.push(c);
                        }
                        None => break,
                    }
                }
                None => {
                    if chars.peek() == Some(&slot) {
                        chars.next();
                    }
                    pending_literals.push(slot);
                }
            }
        }
        output
    }
}

fn placeholder(slot: char) -> Option<fn(char) -> bool> {
    match slot {
        '9' => Some(is_digit),
        'a' => Some(char::is_alphabetic),
        '*' => Some(char::is_alphanumeric),
        _ => None,
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

impl Serialize for Mask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
