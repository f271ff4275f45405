//! YAML provider support backed by `serde-saphyr`.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use figment::{
    Metadata, Profile, Provider,
    error::Kind,
    value::{Dict, Empty, Num, Tag, Value as FigmentValue},
};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_saphyr::Options;

/// Figment provider that parses YAML text read from a settings file.
///
/// The loader reads the file itself so that I/O failures and parse failures
/// stay distinguishable; the provider only keeps the path for diagnostics.
///
/// # Examples
///
/// ```rust
/// use figment::Figment;
/// use strict_settings::SaphyrYaml;
///
/// let figment = Figment::from(SaphyrYaml::string("settings.yaml", "host: db.local"));
/// let host: String = figment.extract_inner("host").expect("host is a string");
/// assert_eq!(host, "db.local");
/// ```
#[derive(Debug, Clone)]
pub struct SaphyrYaml {
    path: PathBuf,
    contents: String,
}

impl SaphyrYaml {
    /// Construct a provider from YAML `contents` that were read from `path`.
    #[must_use]
    pub fn string<P, S>(path: P, contents: S) -> Self
    where
        P: Into<PathBuf>,
        S: Into<String>,
    {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// Parse YAML contents using strict boolean semantics.
    ///
    /// `None` means the document itself is null or empty.
    fn parse_node(contents: &str) -> Result<Option<Node>, serde_saphyr::Error> {
        serde_saphyr::from_str_with_options(
            contents,
            Options {
                strict_booleans: true,
                ..Options::default()
            },
        )
    }
}

impl Provider for SaphyrYaml {
    fn metadata(&self) -> Metadata {
        Metadata::from("Saphyr YAML", self.path.as_path())
    }

    fn data(&self) -> Result<BTreeMap<Profile, Dict>, figment::Error> {
        let node = Self::parse_node(&self.contents).map_err(|err| {
            figment::Error::from(Kind::Message(format!(
                "failed to parse {}: {err}",
                self.path.display()
            )))
        })?;
        let dict = match node {
            None | Some(Node::Null) => Dict::new(),
            Some(Node::Map(entries)) => into_dict(entries),
            Some(other) => {
                let actual = other.into_value().to_actual();
                return Err(Kind::InvalidType(actual, "map".into()).into());
            }
        };
        Ok(Profile::Default.collect(dict))
    }
}

/// YAML node that keeps nulls apart from the scalar text `~` or `null`.
///
/// Mapping values and sequence items go through `Option`, so the
/// deserializer reports `movies:`, `movies: ~` and `movies: null` as
/// `None` while a quoted `"~"` stays a string.
#[derive(Debug)]
enum Node {
    Null,
    Bool(bool),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
    Seq(Vec<Option<Node>>),
    Map(Vec<(String, Option<Node>)>),
}

impl Node {
    fn into_value(self) -> FigmentValue {
        match self {
            Self::Null => FigmentValue::Empty(Tag::Default, Empty::None),
            Self::Bool(flag) => FigmentValue::Bool(Tag::Default, flag),
            Self::Signed(number) => FigmentValue::Num(Tag::Default, Num::I64(number)),
            Self::Unsigned(number) => FigmentValue::Num(Tag::Default, Num::U64(number)),
            Self::Float(number) => FigmentValue::Num(Tag::Default, Num::F64(number)),
            Self::Text(text) => FigmentValue::String(Tag::Default, text),
            Self::Seq(items) => FigmentValue::Array(
                Tag::Default,
                items
                    .into_iter()
                    .map(|item| item.unwrap_or(Self::Null).into_value())
                    .collect(),
            ),
            Self::Map(entries) => FigmentValue::Dict(Tag::Default, into_dict(entries)),
        }
    }
}

/// Null entries are dropped so the key counts as absent and the layer
/// beneath keeps its value.
fn into_dict(entries: Vec<(String, Option<Node>)>) -> Dict {
    entries
        .into_iter()
        .filter_map(|(key, node)| match node {
            None | Some(Node::Null) => None,
            Some(node) => Some((key, node.into_value())),
        })
        .collect()
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a YAML scalar, sequence or mapping")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Node, E> {
        Ok(Node::Bool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Node, E> {
        Ok(Node::Signed(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Node, E> {
        Ok(Node::Unsigned(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Node, E> {
        Ok(Node::Float(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Node, E> {
        Ok(Node::Text(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Node, E> {
        Ok(Node::Text(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Node, D::Error>
    where
        D: Deserializer<'de>,
    {
        Node::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Node, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Option<Node>>()? {
            items.push(item);
        }
        Ok(Node::Seq(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Node, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(key) = map.next_key::<String>()? {
            let value = map.next_value::<Option<Node>>()?;
            entries.push((key, value));
        }
        Ok(Node::Map(entries))
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{Result, anyhow, ensure};
    use figment::Figment;
    use rstest::rstest;

    use super::*;

    fn provider_keys(contents: &str) -> Result<Vec<String>> {
        let data = SaphyrYaml::string("settings.yaml", contents)
            .data()
            .map_err(|err| anyhow!(err.to_string()))?;
        Ok(data
            .get(&Profile::Default)
            .map(|dict| dict.keys().cloned().collect())
            .unwrap_or_default())
    }

    #[rstest]
    #[case::blank("movies:\nshows: /media/shows\n")]
    #[case::tilde("movies: ~\nshows: /media/shows\n")]
    #[case::word("movies: null\nshows: /media/shows\n")]
    fn null_values_are_absent(#[case] contents: &str) -> Result<()> {
        let found = provider_keys(contents)?;
        ensure!(found == ["shows"], "unexpected keys: {found:?}");
        Ok(())
    }

    #[rstest]
    fn quoted_tilde_stays_text() -> Result<()> {
        let figment = Figment::from(SaphyrYaml::string("settings.yaml", "movies: \"~\"\n"));
        let movies: String = figment
            .extract_inner("movies")
            .map_err(|err| anyhow!(err.to_string()))?;
        ensure!(movies == "~", "expected the literal text, got {movies:?}");
        Ok(())
    }

    #[rstest]
    fn nested_nulls_are_absent() -> Result<()> {
        let figment = Figment::from(SaphyrYaml::string(
            "settings.yaml",
            "remote:\n  host: db.local\n  port:\n",
        ));
        ensure!(
            figment.find_value("remote.port").is_err(),
            "null port should be absent"
        );
        let host: String = figment
            .extract_inner("remote.host")
            .map_err(|err| anyhow!(err.to_string()))?;
        ensure!(host == "db.local", "sibling value lost");
        Ok(())
    }
}
