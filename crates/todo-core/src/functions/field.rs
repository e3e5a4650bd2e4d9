//! Event field decoding shared by the task functions.
//!
//! Each event is an object carrying one string field. The decoder is lenient
//! in the same places an untagged struct decoder is:
//!
//! - the key matches without regard to ASCII case (`note`, `Note`, `NOTE`),
//!   and the last matching key wins
//! - a missing key, a `null` value or a `null` event leave the field empty
//! - other keys are ignored
//! - an unpaired UTF-16 surrogate escape decodes as U+FFFD
//!
//! A non-object event, or a field value that is not a string, is a decode
//! error and therefore `BAD_INPUT`.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};

/// Decode an event object and return the value of `field`.
pub(crate) fn string_field<'de, D>(deserializer: D, field: &'static str) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(EventVisitor { field })
}

struct EventVisitor {
    field: &'static str,
}

impl<'de> Visitor<'de> for EventVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an object with a string `{}` field", self.field)
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<String, D::Error> {
        deserializer.deserialize_map(self)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<String, A::Error> {
        let mut value = String::new();
        while let Some(key) = map.next_key::<String>()? {
            if !key.eq_ignore_ascii_case(self.field) {
                map.next_value::<IgnoredAny>()?;
                continue;
            }
            // null keeps whatever an earlier key set
            if let Some(LossyString(v)) = map.next_value::<Option<LossyString>>()? {
                value = v;
            }
        }
        Ok(value)
    }
}

/// String read as raw bytes so unpaired surrogates survive decoding.
struct LossyString(String);

impl<'de> Deserialize<'de> for LossyString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_bytes(LossyVisitor).map(LossyString)
    }
}

struct LossyVisitor;

impl<'de> Visitor<'de> for LossyVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_owned())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<String, E> {
        Ok(from_wtf8_lossy(v.to_vec()))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<String, E> {
        Ok(from_wtf8_lossy(v))
    }
}

/// Surrogates arrive as the 3-byte sequences `ED A0..BF 80..BF`. Each becomes
/// one U+FFFD (`EF BF BD`, same width); any other invalid byte is replaced too.
fn from_wtf8_lossy(mut bytes: Vec<u8>) -> String {
    let mut i = 0;
    while i + 2 < bytes.len() {
        if bytes[i] == 0xED
            && (0xA0..=0xBF).contains(&bytes[i + 1])
            && (0x80..=0xBF).contains(&bytes[i + 2])
        {
            bytes[i..i + 3].copy_from_slice("\u{FFFD}".as_bytes());
            i += 3;
        } else {
            i += 1;
        }
    }

    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
