use std::fmt;

/// Resource collections known to the engine. Each collection owns the
/// prefix of every resource name stored in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Collection {
    Transceivers,
    Targets,
    ContactWindows,
    Bearers,
    AttachmentCircuits,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Transceivers,
        Collection::Targets,
        Collection::ContactWindows,
        Collection::Bearers,
        Collection::AttachmentCircuits,
    ];

    /// Name prefix used on the wire. The singular forms for targets and
    /// contact windows are part of the published naming scheme.
    pub const fn prefix(self) -> &'static str {
        match self {
            Collection::Transceivers => "transceivers",
            Collection::Targets => "target",
            Collection::ContactWindows => "contactWindow",
            Collection::Bearers => "bearers",
            Collection::AttachmentCircuits => "attachmentCircuits",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.prefix() == prefix)
    }

    /// Qualify a raw id without validating it. Used for lookups, where an
    /// id that could never have been assigned simply resolves to nothing.
    pub fn qualify(self, raw_id: &str) -> String {
        format!("{}/{}", self.prefix(), raw_id)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Caller-supplied resource id with validation
///
/// Ids are the only caller input that reaches a resource name:
/// - non-empty, at most 128 characters
/// - no `/` (it separates collection and id)
/// - no whitespace or control characters
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct ResourceId(String);

pub const MAX_RESOURCE_ID_LEN: usize = 128;

impl ResourceId {
    pub fn new(id: impl AsRef<str>) -> Result<Self, ResourceIdError> {
        let id = id.as_ref();

        if id.is_empty() {
            return Err(ResourceIdError::Empty);
        }

        if id.chars().count() > MAX_RESOURCE_ID_LEN {
            return Err(ResourceIdError::TooLong);
        }

        if let Some(c) = id
            .chars()
            .find(|c| *c == '/' || c.is_whitespace() || c.is_control())
        {
            return Err(ResourceIdError::InvalidCharacter(c));
        }

        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ResourceId {
    type Error = ResourceIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResourceId> for String {
    fn from(value: ResourceId) -> Self {
        value.0
    }
}

/// Errors that can occur when validating a resource id
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResourceIdError {
    #[error("resource id must not be empty")]
    Empty,

    #[error("resource id too long: maximum {MAX_RESOURCE_ID_LEN} characters allowed")]
    TooLong,

    #[error("resource id contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// Server-side name assignment. Applied to every created resource; whatever
/// name the payload carried is discarded.
pub fn assign_name(collection: Collection, id: &ResourceId) -> String {
    collection.qualify(id.as_str())
}

/// Split a resource name into its collection and id parts.
pub fn split_name(name: &str) -> Option<(Collection, &str)> {
    let (prefix, id) = name.split_once('/')?;
    if id.is_empty() {
        return None;
    }
    Collection::from_prefix(prefix).map(|collection| (collection, id))
}
