//! Structured encodings for fields stored as a single text column.

use crate::Result;

use serde::{de::DeserializeOwned, Serialize};

/// Serialization format declared by a field directive (`:YAML`, `:XML`, `:JSON`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Yaml,
    Xml,
    Json,
}

impl Encoding {
    /// Matches the directive keyword. Keywords are case-sensitive.
    pub fn from_keyword(keyword: &str) -> Option<Encoding> {
        match keyword {
            "YAML" => Some(Encoding::Yaml),
            "XML" => Some(Encoding::Xml),
            "JSON" => Some(Encoding::Json),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Encoding::Yaml => "YAML",
            Encoding::Xml => "XML",
            Encoding::Json => "JSON",
        }
    }

    pub fn encode<T: Serialize + ?Sized>(self, value: &T) -> Result<String> {
        Ok(match self {
            Encoding::Yaml => serde_yaml::to_string(value)?,
            Encoding::Xml => quick_xml::se::to_string(value)?,
            Encoding::Json => serde_json::to_string(value)?,
        })
    }

    pub fn decode<T: DeserializeOwned>(self, src: &str) -> Result<T> {
        Ok(match self {
            Encoding::Yaml => serde_yaml::from_str(src)?,
            Encoding::Xml => quick_xml::de::from_str(src)?,
            Encoding::Json => serde_json::from_str(src)?,
        })
    }
}

impl core::fmt::Display for Encoding {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Object-safe access to a field stored with an [`Encoding`].
///
/// Implemented for every serde type.
pub trait Encodable {
    fn encode(&self, encoding: Encoding) -> Result<String>;

    /// Replaces `self` with the value decoded from `src`.
    fn decode(&mut self, encoding: Encoding, src: &str) -> Result<()>;
}

impl<T: Serialize + DeserializeOwned> Encodable for T {
    fn encode(&self, encoding: Encoding) -> Result<String> {
        encoding.encode(self)
    }

    fn decode(&mut self, encoding: Encoding, src: &str) -> Result<()> {
        *self = encoding.decode(src)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Permission {
        #[serde(rename = "@name")]
        name: String,
        #[serde(rename = "@read")]
        read: String,
    }

    fn sample() -> Permission {
        Permission {
            name: "admin".to_string(),
            read: "all".to_string(),
        }
    }

    #[test]
    fn keywords() {
        assert_eq!(Encoding::from_keyword("YAML"), Some(Encoding::Yaml));
        assert_eq!(Encoding::from_keyword("XML"), Some(Encoding::Xml));
        assert_eq!(Encoding::from_keyword("JSON"), Some(Encoding::Json));
        assert_eq!(Encoding::from_keyword("json"), None);
    }

    #[test]
    fn json_encoding() {
        let text = Encoding::Json.encode(&sample()).unwrap();
        assert_eq!(text, r#"{"@name":"admin","@read":"all"}"#);

        let mut decoded = Permission::default();
        decoded.decode(Encoding::Json, &text).unwrap();
        assert_eq!(decoded, sample());
    }

    #[test]
    fn yaml_encoding() {
        let text = Encoding::Yaml.encode(&sample()).unwrap();
        assert!(text.contains("admin"));

        let mut decoded = Permission::default();
        decoded.decode(Encoding::Yaml, &text).unwrap();
        assert_eq!(decoded, sample());
    }

    #[test]
    fn xml_encoding() {
        let text = Encoding::Xml.encode(&sample()).unwrap();
        assert!(text.starts_with("<Permission"));
        assert!(text.contains(r#"name="admin""#));

        let mut decoded = Permission::default();
        decoded.decode(Encoding::Xml, &text).unwrap();
        assert_eq!(decoded, sample());
    }

    #[test]
    fn decode_failure_is_reported() {
        let mut decoded = Permission::default();
        assert!(decoded.decode(Encoding::Json, "{not json").is_err());
    }
}
