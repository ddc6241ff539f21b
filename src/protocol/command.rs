//! Command table mapping symbolic command ids to HTTP endpoints.
//!
//! Every wire operation is described by a [`CommandSpec`]: an HTTP method
//! plus a URL path template with `{placeholder}` segments. The table is
//! seeded with the standard WebDriver commands and the Appium mobile
//! extensions; drivers can register additional endpoints at runtime.
//!
//! # Command Groups
//!
//! | Group | Commands |
//! |-------|----------|
//! | Session | `newSession`, `quit`, `status` |
//! | Element | `findElement`, `findElements`, `findChildElement`, `clickElement`, `getElementText`, `getElementAttribute`, `getElementRect`, `isElementDisplayed`, `sendKeysToElement` |
//! | Screen | `screenshot` |
//! | Touch | `touchAction`, `multiAction` |
//! | Device | `setClipboard`, `getClipboard` |
//!
//! # Path Templates
//!
//! Placeholders are resolved from the invocation parameters at call time;
//! a consumed parameter is removed from the request body. `{sessionId}` is
//! injected by the driver, so callers never pass it themselves:
//!
//! ```ignore
//! let table = CommandTable::builtin();
//! let spec = table.lookup(&CommandId::SET_CLIPBOARD).unwrap();
//! assert_eq!(spec.path().as_str(), "/session/{sessionId}/appium/device/set_clipboard");
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Placeholder pattern inside path templates, e.g. `{sessionId}`.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z][A-Za-z0-9_]*)\}").expect("valid placeholder regex"));

// ============================================================================
// CommandId
// ============================================================================

/// Symbolic identifier of a wire command.
///
/// Built-in commands are associated constants; anything else (vendor
/// endpoints, plugin commands) goes through [`CommandId::custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandId(Cow<'static, str>);

impl CommandId {
    /// Creates a new session.
    pub const NEW_SESSION: Self = Self(Cow::Borrowed("newSession"));
    /// Ends the session.
    pub const QUIT: Self = Self(Cow::Borrowed("quit"));
    /// Queries server readiness.
    pub const STATUS: Self = Self(Cow::Borrowed("status"));

    /// Finds the first element matching a locator.
    pub const FIND_ELEMENT: Self = Self(Cow::Borrowed("findElement"));
    /// Finds all elements matching a locator.
    pub const FIND_ELEMENTS: Self = Self(Cow::Borrowed("findElements"));
    /// Finds the first matching descendant of an element.
    pub const FIND_CHILD_ELEMENT: Self = Self(Cow::Borrowed("findChildElement"));
    /// Clicks an element.
    pub const CLICK_ELEMENT: Self = Self(Cow::Borrowed("clickElement"));
    /// Reads an element's visible text.
    pub const GET_ELEMENT_TEXT: Self = Self(Cow::Borrowed("getElementText"));
    /// Reads an element attribute.
    pub const GET_ELEMENT_ATTRIBUTE: Self = Self(Cow::Borrowed("getElementAttribute"));
    /// Reads an element's position and size.
    pub const GET_ELEMENT_RECT: Self = Self(Cow::Borrowed("getElementRect"));
    /// Checks element visibility.
    pub const IS_ELEMENT_DISPLAYED: Self = Self(Cow::Borrowed("isElementDisplayed"));
    /// Types text into an element.
    pub const SEND_KEYS_TO_ELEMENT: Self = Self(Cow::Borrowed("sendKeysToElement"));

    /// Captures a screenshot of the current screen.
    pub const SCREENSHOT: Self = Self(Cow::Borrowed("screenshot"));

    /// Performs a single touch action sequence.
    pub const TOUCH_ACTION: Self = Self(Cow::Borrowed("touchAction"));
    /// Performs a multi-touch action batch.
    pub const MULTI_ACTION: Self = Self(Cow::Borrowed("multiAction"));

    /// Writes the device clipboard.
    pub const SET_CLIPBOARD: Self = Self(Cow::Borrowed("setClipboard"));
    /// Reads the device clipboard.
    pub const GET_CLIPBOARD: Self = Self(Cow::Borrowed("getClipboard"));

    /// Creates a command id for a non-built-in endpoint.
    #[inline]
    pub fn custom(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    /// Returns the id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// HttpMethod
// ============================================================================

/// HTTP method of a command endpoint.
///
/// The WebDriver wire protocol only ever uses these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Retrieval without a body.
    Get,
    /// Invocation with a JSON body.
    Post,
    /// Resource teardown.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as used on the wire.
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` if requests with this method carry a JSON body.
    #[inline]
    #[must_use]
    pub fn has_body(self) -> bool {
        matches!(self, Self::Post)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PathTemplate
// ============================================================================

/// URL path template with `{placeholder}` segments.
///
/// Rendering substitutes each placeholder from the invocation parameters
/// and removes the consumed entries, so a parameter is either part of the
/// path or part of the body, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathTemplate(Cow<'static, str>);

impl PathTemplate {
    /// Creates a template from a path string.
    #[inline]
    pub fn new(template: impl Into<String>) -> Self {
        Self(Cow::Owned(template.into()))
    }

    /// Creates a template from a static path string.
    #[inline]
    #[must_use]
    pub const fn from_static(template: &'static str) -> Self {
        Self(Cow::Borrowed(template))
    }

    /// Returns the raw template string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the placeholder names in order of appearance.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&str> {
        PLACEHOLDER
            .captures_iter(&self.0)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    /// Renders the template against invocation parameters.
    ///
    /// Each placeholder is looked up by name in `params`, percent-encoded
    /// into the path, and removed from the map. A placeholder with no
    /// matching parameter is an [`Error::InvalidArgument`].
    pub fn render(&self, params: &mut Map<String, Value>) -> Result<String> {
        let mut path = String::with_capacity(self.0.len());
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(&self.0) {
            let whole = caps.get(0).ok_or_else(|| Error::protocol("empty capture"))?;
            let name = &caps[1];

            path.push_str(&self.0[last..whole.start()]);
            path.push_str(&encode_path_value(name, params)?);
            last = whole.end();
        }
        path.push_str(&self.0[last..]);

        Ok(path)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Takes `name` out of `params` and encodes it as a path segment value.
fn encode_path_value(name: &str, params: &mut Map<String, Value>) -> Result<String> {
    let value = params
        .remove(name)
        .ok_or_else(|| Error::invalid_argument(format!("missing path parameter: {name}")))?;

    match value {
        Value::String(s) => Ok(urlencoding::encode(&s).into_owned()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(Error::invalid_argument(format!(
            "path parameter {name} must be a string or number, got: {other}"
        ))),
    }
}

// ============================================================================
// CommandSpec
// ============================================================================

/// HTTP method and path template of a registered command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    method: HttpMethod,
    path: PathTemplate,
}

impl CommandSpec {
    /// Creates a spec from a method and path template.
    #[inline]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: PathTemplate::new(path),
        }
    }

    /// Creates a spec from a method and static path template.
    #[inline]
    #[must_use]
    pub const fn from_static(method: HttpMethod, path: &'static str) -> Self {
        Self {
            method,
            path: PathTemplate::from_static(path),
        }
    }

    /// Returns the HTTP method.
    #[inline]
    #[must_use]
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the path template.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &PathTemplate {
        &self.path
    }
}

// ============================================================================
// CommandTable
// ============================================================================

/// Registry of command ids to endpoint specs.
///
/// Registration is last-write-wins: registering an id that already exists
/// replaces its spec and returns the previous one. Lookup of an id that
/// was never registered is how [`Error::UnknownCommand`] arises upstream.
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    entries: FxHashMap<CommandId, CommandSpec>,
}

impl CommandTable {
    /// Creates an empty table.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table seeded with the built-in WebDriver and Appium
    /// commands.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (id, spec) in BUILTIN_COMMANDS {
            table.entries.insert(id.clone(), spec.clone());
        }
        table
    }

    /// Registers an endpoint under a command id.
    ///
    /// Returns the spec the id previously mapped to, if any.
    pub fn register(
        &mut self,
        id: CommandId,
        method: HttpMethod,
        path: impl Into<String>,
    ) -> Option<CommandSpec> {
        self.entries.insert(id, CommandSpec::new(method, path))
    }

    /// Looks up the spec registered under an id.
    #[inline]
    #[must_use]
    pub fn lookup(&self, id: &CommandId) -> Option<&CommandSpec> {
        self.entries.get(id)
    }

    /// Returns `true` if an id is registered.
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &CommandId) -> bool {
        self.entries.contains_key(id)
    }

    /// Returns the number of registered commands.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no commands are registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Built-in Command Roster
// ============================================================================

/// Endpoints registered in every [`CommandTable::builtin`] table.
const BUILTIN_COMMANDS: &[(CommandId, CommandSpec)] = &[
    (
        CommandId::NEW_SESSION,
        CommandSpec::from_static(HttpMethod::Post, "/session"),
    ),
    (
        CommandId::QUIT,
        CommandSpec::from_static(HttpMethod::Delete, "/session/{sessionId}"),
    ),
    (
        CommandId::STATUS,
        CommandSpec::from_static(HttpMethod::Get, "/status"),
    ),
    (
        CommandId::FIND_ELEMENT,
        CommandSpec::from_static(HttpMethod::Post, "/session/{sessionId}/element"),
    ),
    (
        CommandId::FIND_ELEMENTS,
        CommandSpec::from_static(HttpMethod::Post, "/session/{sessionId}/elements"),
    ),
    (
        CommandId::FIND_CHILD_ELEMENT,
        CommandSpec::from_static(
            HttpMethod::Post,
            "/session/{sessionId}/element/{elementId}/element",
        ),
    ),
    (
        CommandId::CLICK_ELEMENT,
        CommandSpec::from_static(
            HttpMethod::Post,
            "/session/{sessionId}/element/{elementId}/click",
        ),
    ),
    (
        CommandId::GET_ELEMENT_TEXT,
        CommandSpec::from_static(
            HttpMethod::Get,
            "/session/{sessionId}/element/{elementId}/text",
        ),
    ),
    (
        CommandId::GET_ELEMENT_ATTRIBUTE,
        CommandSpec::from_static(
            HttpMethod::Get,
            "/session/{sessionId}/element/{elementId}/attribute/{name}",
        ),
    ),
    (
        CommandId::GET_ELEMENT_RECT,
        CommandSpec::from_static(
            HttpMethod::Get,
            "/session/{sessionId}/element/{elementId}/rect",
        ),
    ),
    (
        CommandId::IS_ELEMENT_DISPLAYED,
        CommandSpec::from_static(
            HttpMethod::Get,
            "/session/{sessionId}/element/{elementId}/displayed",
        ),
    ),
    (
        CommandId::SEND_KEYS_TO_ELEMENT,
        CommandSpec::from_static(
            HttpMethod::Post,
            "/session/{sessionId}/element/{elementId}/value",
        ),
    ),
    (
        CommandId::SCREENSHOT,
        CommandSpec::from_static(HttpMethod::Get, "/session/{sessionId}/screenshot"),
    ),
    (
        CommandId::TOUCH_ACTION,
        CommandSpec::from_static(HttpMethod::Post, "/session/{sessionId}/touch/perform"),
    ),
    (
        CommandId::MULTI_ACTION,
        CommandSpec::from_static(HttpMethod::Post, "/session/{sessionId}/touch/multi/perform"),
    ),
    (
        CommandId::SET_CLIPBOARD,
        CommandSpec::from_static(
            HttpMethod::Post,
            "/session/{sessionId}/appium/device/set_clipboard",
        ),
    ),
    (
        CommandId::GET_CLIPBOARD,
        CommandSpec::from_static(
            HttpMethod::Post,
            "/session/{sessionId}/appium/device/get_clipboard",
        ),
    ),
];

// ============================================================================
// Tests
// ============================================================================
