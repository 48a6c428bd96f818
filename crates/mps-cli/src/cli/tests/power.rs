//! Tests for power-on, power-off, reboot and action.

use super::parse;
use crate::cli::CliCommand;
use clap::Parser;
use mps_core::ActionCode;

const GUID: &str = "038d0240-045c-05f4-7706-980700080009";

#[test]
fn cli_parse_power_on() {
    match parse(&["mpsctl", "power-on", GUID]) {
        CliCommand::PowerOn { guid } => assert_eq!(guid, GUID),
        _ => panic!("expected PowerOn"),
    }
}

#[test]
fn cli_parse_power_off() {
    match parse(&["mpsctl", "power-off", GUID]) {
        CliCommand::PowerOff { guid } => assert_eq!(guid, GUID),
        _ => panic!("expected PowerOff"),
    }
}

#[test]
fn cli_parse_reboot() {
    match parse(&["mpsctl", "reboot", GUID]) {
        CliCommand::Reboot { guid } => assert_eq!(guid, GUID),
        _ => panic!("expected Reboot"),
    }
}

#[test]
fn cli_parse_action_numeric() {
    match parse(&["mpsctl", "action", GUID, "8"]) {
        CliCommand::Action { guid, action } => {
            assert_eq!(guid, GUID);
            assert_eq!(action, ActionCode(8));
        }
        _ => panic!("expected Action"),
    }
}

#[test]
fn cli_parse_action_unlisted_code() {
    match parse(&["mpsctl", "action", GUID, "-1"]) {
        CliCommand::Action { action, .. } => assert_eq!(action, ActionCode(-1)),
        _ => panic!("expected Action"),
    }
}

#[test]
fn cli_parse_action_by_name() {
    match parse(&["mpsctl", "action", GUID, "restart"]) {
        CliCommand::Action { action, .. } => assert_eq!(action, ActionCode(10)),
        _ => panic!("expected Action"),
    }
}

#[test]
fn cli_parse_action_amt_body() {
    match parse(&["mpsctl", "action", GUID, r#"{"Action": 8}"#]) {
        CliCommand::Action { guid, action } => {
            assert_eq!(guid, GUID);
            assert_eq!(action, ActionCode(8));
        }
        _ => panic!("expected Action"),
    }
}

#[test]
fn cli_rejects_malformed_amt_body() {
    let lowercase_key = ["mpsctl", "action", GUID, r#"{"action":8}"#];
    assert!(crate::cli::Cli::try_parse_from(lowercase_key).is_err());
    assert!(crate::cli::Cli::try_parse_from(["mpsctl", "action", GUID, "{"]).is_err());
}

#[test]
fn cli_rejects_unknown_action_name() {
    assert!(crate::cli::Cli::try_parse_from(["mpsctl", "action", GUID, "hibernate"]).is_err());
}

#[test]
fn cli_requires_guid() {
    assert!(crate::cli::Cli::try_parse_from(["mpsctl", "power-on"]).is_err());
}
