//! URL generation options.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::url::directive::SubdomainDirective;
use crate::url::error::RewriteError;

pub const HOST: &str = "host";
pub const SUBDOMAIN: &str = "subdomain";

/// Ordered option map passed to a URL generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlOptions(Map<String, Value>);

impl UrlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn with_subdomain(self, directive: SubdomainDirective) -> Self {
        self.with(SUBDOMAIN, directive.into_value())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value of an option, if it holds one.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn host(&self) -> Option<&str> {
        self.get_str(HOST)
    }

    /// The parsed `subdomain` directive; `Ok(None)` when the option is absent.
    pub fn subdomain(&self) -> Result<Option<SubdomainDirective>, RewriteError> {
        self.0.get(SUBDOMAIN).map(SubdomainDirective::from_value).transpose()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for UrlOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for UrlOptions
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
