use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One documentation package: where to fetch it from and where to store it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PackageDescriptor {
    /// Label used for progress reporting
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub name: String,
    /// Source URL, possibly already carrying a query string
    #[serde(default, alias = "url", deserialize_with = "deserialize_source")]
    pub source: String,
    /// Budget parameter passed to the content API as the `tokens` query parameter
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub tokens: String,
    /// Output path, relative to the base directory
    #[serde(default, alias = "path", deserialize_with = "deserialize_scalar")]
    pub output: String,
}

impl PackageDescriptor {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        tokens: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            tokens: tokens.into(),
            output: output.into(),
        }
    }

    /// Returns the name of the first required field that is empty, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("source", &self.source),
            ("tokens", &self.tokens),
            ("output", &self.output),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct PackageList {
    #[serde(default)]
    pub packages: Vec<PackageDescriptor>,
}

/// Accepts either `source: <url>` or a nested table `source: { source|url: <url> }`.
fn deserialize_source<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct SourceVisitor;

    impl<'de> Visitor<'de> for SourceVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a URL string or a table with a `source` or `url` key")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_owned())
        }

        fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut source = None;
            while let Some(key) = map.next_key::<String>()? {
                match key.as_str() {
                    "source" | "url" if source.is_none() => {
                        source = Some(map.next_value::<String>()?);
                    }
                    _ => {
                        map.next_value::<de::IgnoredAny>()?;
                    }
                }
            }
            source.ok_or_else(|| de::Error::missing_field("source"))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(SourceVisitor)
}

/// Accepts a string or an integer; an empty value (`key:` with nothing after it) becomes `""`.
fn deserialize_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScalarVisitor;

    impl Visitor<'_> for ScalarVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or an integer")
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_owned())
        }

        fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(ScalarVisitor)
}
