//! Power action codes and the `PowerAction` wire payload.
//!
//! The proxy selects behavior by a small integer. Callers normally use the
//! closed [`PowerAction`] set; [`ActionCode`] is the raw value that actually
//! goes on the wire and may carry any integer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Method name the proxy dispatches power commands on.
pub const POWER_ACTION_METHOD: &str = "PowerAction";

/// Power commands understood by the proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerAction {
    PowerOn,
    PowerOff,
    /// Also requested as "restart"; the proxy defines a single code for both.
    Reboot,
}

impl PowerAction {
    pub const ALL: [PowerAction; 3] = [
        PowerAction::PowerOn,
        PowerAction::PowerOff,
        PowerAction::Reboot,
    ];

    /// Integer code sent in `payload.action`.
    pub const fn code(self) -> i32 {
        match self {
            PowerAction::PowerOn => 2,
            PowerAction::PowerOff => 8,
            PowerAction::Reboot => 10,
        }
    }
}

impl fmt::Display for PowerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerAction::PowerOn => write!(f, "power-on"),
            PowerAction::PowerOff => write!(f, "power-off"),
            PowerAction::Reboot => write!(f, "reboot"),
        }
    }
}

/// Error returned when text does not name a power action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPowerAction(pub String);

impl fmt::Display for UnknownPowerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown power action '{}' (expected power-on, power-off or reboot)",
            self.0
        )
    }
}

impl std::error::Error for UnknownPowerAction {}

impl FromStr for PowerAction {
    type Err = UnknownPowerAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" | "power-on" | "poweron" => Ok(PowerAction::PowerOn),
            "off" | "power-off" | "poweroff" => Ok(PowerAction::PowerOff),
            "reboot" | "restart" => Ok(PowerAction::Reboot),
            _ => Err(UnknownPowerAction(s.to_string())),
        }
    }
}

/// Raw action code as carried on the wire. No range validation is applied;
/// the proxy decides what an unknown code means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionCode(pub i32);

impl ActionCode {
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<PowerAction> for ActionCode {
    fn from(action: PowerAction) -> Self {
        ActionCode(action.code())
    }
}

impl From<i32> for ActionCode {
    fn from(code: i32) -> Self {
        ActionCode(code)
    }
}

impl TryFrom<ActionCode> for PowerAction {
    type Error = ActionCode;

    fn try_from(code: ActionCode) -> Result<Self, Self::Error> {
        PowerAction::ALL
            .into_iter()
            .find(|a| a.code() == code.0)
            .ok_or(code)
    }
}

impl fmt::Display for ActionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match PowerAction::try_from(*self) {
            Ok(action) => write!(f, "{} ({})", self.0, action),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

/// Body of the service's inbound AMT endpoint: `{"Action": <int>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmtActionBody {
    #[serde(rename = "Action")]
    pub action: i32,
}

impl From<AmtActionBody> for ActionCode {
    fn from(body: AmtActionBody) -> Self {
        ActionCode(body.action)
    }
}

/// `payload` object of a power action request. Field order is part of the
/// wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerActionPayload {
    pub guid: String,
    pub action: ActionCode,
}

/// Full request body posted to `<base>/amt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerActionRequest {
    pub method: String,
    pub payload: PowerActionPayload,
}

impl PowerActionRequest {
    pub fn new(guid: impl Into<String>, action: impl Into<ActionCode>) -> Self {
        Self {
            method: POWER_ACTION_METHOD.to_string(),
            payload: PowerActionPayload {
                guid: guid.into(),
                action: action.into(),
            },
        }
    }

    /// Compact JSON text, no whitespace.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
