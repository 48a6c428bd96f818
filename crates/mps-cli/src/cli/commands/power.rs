//! `mpsctl power-on|power-off|reboot <guid>` and `mpsctl action <guid> <code>`.

use anyhow::Result;
use mps_core::config::MpsConfig;
use mps_core::{ActionCode, CurlTransport, MpsClient, PowerAction, ProxyReply};

fn client_for(cfg: &MpsConfig) -> MpsClient<CurlTransport> {
    let transport = CurlTransport::from_config(&cfg.transport());
    MpsClient::new(&cfg.server_name_with_port, transport)
        .with_status_policy(cfg.status_policy())
}

fn print_reply(reply: &ProxyReply) {
    println!("HTTP {}", reply.status);
    if !reply.body.is_empty() {
        println!("{}", reply.body);
    }
}

pub async fn run_power(cfg: &MpsConfig, guid: &str, action: PowerAction) -> Result<()> {
    let client = client_for(cfg);
    tracing::info!(guid, %action, base_url = client.endpoint().base_url(), "sending power action");
    let reply = match action {
        PowerAction::PowerOn => client.power_on(guid).await?,
        PowerAction::PowerOff => client.power_off(guid).await?,
        PowerAction::Reboot => client.reboot(guid).await?,
    };
    print_reply(&reply);
    Ok(())
}

pub async fn run_action(cfg: &MpsConfig, guid: &str, action: ActionCode) -> Result<()> {
    let client = client_for(cfg);
    if PowerAction::try_from(action).is_err() {
        tracing::warn!(
            guid,
            code = action.value(),
            "sending action code the proxy may not understand"
        );
    }
    let reply = client.power_action(guid, action).await?;
    print_reply(&reply);
    Ok(())
}
