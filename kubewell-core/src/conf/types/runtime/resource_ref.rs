use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A `namespace/name` reference to a namespaced object (Secret, GlobalConfiguration).
///
/// Only the shape is checked here. Whether the object exists is for the reconciler
/// to find out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResourceRef {
    pub namespace: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceRefError {
    #[error("expected exactly one '/' separating namespace and name")]
    WrongSegmentCount,
    #[error("namespace must not be empty")]
    EmptyNamespace,
    #[error("name must not be empty")]
    EmptyName,
}

impl FromStr for ResourceRef {
    type Err = ResourceRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.split('/');
        let (Some(namespace), Some(name), None) = (segments.next(), segments.next(), segments.next())
        else {
            return Err(ResourceRefError::WrongSegmentCount);
        };

        if namespace.is_empty() {
            return Err(ResourceRefError::EmptyNamespace);
        }
        if name.is_empty() {
            return Err(ResourceRefError::EmptyName);
        }

        Ok(Self {
            namespace: namespace.to_owned(),
            name: name.to_owned(),
        })
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}
