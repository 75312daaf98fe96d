//! Command table
//!
//! The fixed catalog of wire commands. `Command` is a closed enumeration, so
//! any statically written call site names a command that exists; the string
//! index is only consulted by callers that hold a wire identifier.

use super::template::UrlTemplate;
use super::types::{CommandSpec, Method};
use crate::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

// Compile-time identifier index using PHF
use phf::phf_map;

macro_rules! command_table {
    ($($variant:ident => $name:tt, $method:ident, $template:tt;)+) => {
        /// Every command of the wire protocol supported by this client
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Command {
            $($variant,)+
        }

        impl Command {
            /// Every command, in catalog order
            pub const ALL: &'static [Command] = &[$(Command::$variant,)+];

            /// Wire identifier of the command
            pub const fn name(self) -> &'static str {
                match self {
                    $(Command::$variant => $name,)+
                }
            }

            /// HTTP method and url template of the command
            pub const fn spec(self) -> CommandSpec {
                match self {
                    $(Command::$variant => CommandSpec::new(Method::$method, $template),)+
                }
            }
        }

        /// Static identifier index from wire name to command
        static COMMANDS_BY_NAME: phf::Map<&'static str, Command> = phf_map! {
            $($name => Command::$variant,)+
        };
    };
}

command_table! {
    Status => "status", Get, "status";
    NewSession => "newSession", Post, "session";
    GetSessions => "getSessions", Get, "sessions";
    GetCapabilities => "getCapabilities", Get, "session/:sessionId";
    Quit => "quit", Delete, "session/:sessionId";
    SetTimeouts => "setTimeouts", Post, "session/:sessionId/timeouts";
    SetAsyncScriptTimeout => "setAsyncScriptTimeout", Post, "session/:sessionId/timeouts/async_script";
    SetImplicitWaitTimeout => "setImplicitWaitTimeout", Post, "session/:sessionId/timeouts/implicit_wait";
    GetCurrentWindowHandle => "getCurrentWindowHandle", Get, "session/:sessionId/window_handle";
    GetWindowHandles => "getWindowHandles", Get, "session/:sessionId/window_handles";
    GetCurrentUrl => "getCurrentUrl", Get, "session/:sessionId/url";
    Get => "get", Post, "session/:sessionId/url";
    GoForward => "goForward", Post, "session/:sessionId/forward";
    GoBack => "goBack", Post, "session/:sessionId/back";
    Refresh => "refresh", Post, "session/:sessionId/refresh";
    ExecuteScript => "executeScript", Post, "session/:sessionId/execute";
    ExecuteAsyncScript => "executeAsyncScript", Post, "session/:sessionId/execute_async";
    Screenshot => "screenshot", Get, "session/:sessionId/screenshot";
    SwitchToFrame => "switchToFrame", Post, "session/:sessionId/frame";
    SwitchToParentFrame => "switchToParentFrame", Post, "session/:sessionId/frame/parent";
    SwitchToWindow => "switchToWindow", Post, "session/:sessionId/window";
    CloseWindow => "closeWindow", Delete, "session/:sessionId/window";
    GetWindowSize => "getWindowSize", Get, "session/:sessionId/window/current/size";
    SetWindowSize => "setWindowSize", Post, "session/:sessionId/window/current/size";
    GetWindowPosition => "getWindowPosition", Get, "session/:sessionId/window/current/position";
    SetWindowPosition => "setWindowPosition", Post, "session/:sessionId/window/current/position";
    MaximizeWindow => "maximizeWindow", Post, "session/:sessionId/window/current/maximize";
    GetAllCookies => "getAllCookies", Get, "session/:sessionId/cookie";
    AddCookie => "addCookie", Post, "session/:sessionId/cookie";
    DeleteAllCookies => "deleteAllCookies", Delete, "session/:sessionId/cookie";
    DeleteCookieNamed => "deleteCookieNamed", Delete, "session/:sessionId/cookie/:name";
    GetPageSource => "getPageSource", Get, "session/:sessionId/source";
    GetTitle => "getTitle", Get, "session/:sessionId/title";
    FindElement => "findElement", Post, "session/:sessionId/element";
    FindElements => "findElements", Post, "session/:sessionId/elements";
    GetActiveElement => "getActiveElement", Post, "session/:sessionId/element/active";
    FindChildElement => "findChildElement", Post, "session/:sessionId/element/:id/element";
    FindChildElements => "findChildElements", Post, "session/:sessionId/element/:id/elements";
    ClickElement => "clickElement", Post, "session/:sessionId/element/:id/click";
    SubmitElement => "submitElement", Post, "session/:sessionId/element/:id/submit";
    GetElementText => "getElementText", Get, "session/:sessionId/element/:id/text";
    SendKeysToElement => "sendKeysToElement", Post, "session/:sessionId/element/:id/value";
    SendKeysToActiveElement => "sendKeysToActiveElement", Post, "session/:sessionId/keys";
    GetElementTagName => "getElementTagName", Get, "session/:sessionId/element/:id/name";
    ClearElement => "clearElement", Post, "session/:sessionId/element/:id/clear";
    IsElementSelected => "isElementSelected", Get, "session/:sessionId/element/:id/selected";
    IsElementEnabled => "isElementEnabled", Get, "session/:sessionId/element/:id/enabled";
    GetElementAttribute => "getElementAttribute", Get, "session/:sessionId/element/:id/attribute/:name";
    ElementEquals => "elementEquals", Get, "session/:sessionId/element/:id/equals/:other";
    IsElementDisplayed => "isElementDisplayed", Get, "session/:sessionId/element/:id/displayed";
    GetElementLocation => "getElementLocation", Get, "session/:sessionId/element/:id/location";
    GetElementLocationInView => "getElementLocationInView", Get, "session/:sessionId/element/:id/location_in_view";
    GetElementSize => "getElementSize", Get, "session/:sessionId/element/:id/size";
    GetElementValueOfCssProperty => "getElementValueOfCssProperty", Get, "session/:sessionId/element/:id/css/:propertyName";
    GetAlertText => "getAlertText", Get, "session/:sessionId/alert_text";
    SetAlertValue => "setAlertValue", Post, "session/:sessionId/alert_text";
    AcceptAlert => "acceptAlert", Post, "session/:sessionId/accept_alert";
    DismissAlert => "dismissAlert", Post, "session/:sessionId/dismiss_alert";
    MouseMoveTo => "mouseMoveTo", Post, "session/:sessionId/moveto";
    MouseClick => "mouseClick", Post, "session/:sessionId/click";
    MouseDoubleClick => "mouseDoubleClick", Post, "session/:sessionId/doubleclick";
    MouseButtonDown => "mouseButtonDown", Post, "session/:sessionId/buttondown";
    MouseButtonUp => "mouseButtonUp", Post, "session/:sessionId/buttonup";
    GetScreenOrientation => "getScreenOrientation", Get, "session/:sessionId/orientation";
    SetScreenOrientation => "setScreenOrientation", Post, "session/:sessionId/orientation";
    GetLog => "getLog", Post, "session/:sessionId/log";
    GetAvailableLogTypes => "getAvailableLogTypes", Get, "session/:sessionId/log/types";
}

impl Command {
    /// Look up a command by its wire identifier
    pub fn from_name(name: &str) -> Option<Command> {
        COMMANDS_BY_NAME.get(name).copied()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Command::from_name(name).ok_or_else(|| Error::unknown_command(name))
    }
}

/// Spec for a wire identifier; unknown identifiers are a caller bug
pub fn lookup(name: &str) -> Result<CommandSpec> {
    name.parse::<Command>().map(Command::spec)
}

/// Check the catalog's structural invariants
///
/// Every template is non-empty and only uses the fixed placeholder tokens,
/// no two commands share a route, and the identifier index agrees with the
/// enumeration.
pub fn validate_catalog() -> Result<()> {
    let entries: Vec<(&str, CommandSpec)> = Command::ALL
        .iter()
        .map(|command| (command.name(), command.spec()))
        .collect();
    check_entries(&entries)?;

    for &command in Command::ALL {
        if Command::from_name(command.name()) != Some(command) {
            return Err(Error::catalog(format!("{} is missing from the name index", command)));
        }
    }

    if COMMANDS_BY_NAME.len() != Command::ALL.len() {
        return Err(Error::catalog("name index and command list differ in size"));
    }

    Ok(())
}

/// Template and route checks over `(identifier, spec)` pairs
pub(crate) fn check_entries(entries: &[(&str, CommandSpec)]) -> Result<()> {
    let mut routes: HashMap<CommandSpec, &str> = HashMap::with_capacity(entries.len());
    let mut names: HashSet<&str> = HashSet::with_capacity(entries.len());

    for &(name, spec) in entries {
        if !names.insert(name) {
            return Err(Error::catalog(format!("{} is listed twice", name)));
        }

        if spec.template.is_empty() {
            return Err(Error::catalog(format!("{} has an empty url template", name)));
        }

        if let Some(token) = UrlTemplate::parse(spec.template).stray_tokens().next() {
            return Err(Error::catalog(format!(
                "{} uses unknown placeholder {}",
                name, token
            )));
        }

        if let Some(existing) = routes.insert(spec, name) {
            return Err(Error::catalog(format!(
                "{} and {} share route {} {}",
                existing, name, spec.method, spec.template
            )));
        }
    }

    Ok(())
}
