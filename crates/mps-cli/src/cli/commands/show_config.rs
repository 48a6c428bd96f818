//! `mpsctl show-config` – effective settings after overrides.

use anyhow::Result;
use mps_core::config::MpsConfig;
use mps_core::MpsEndpoint;

pub fn run_show_config(cfg: &MpsConfig) -> Result<()> {
    let endpoint = MpsEndpoint::new(&cfg.server_name_with_port);
    let transport = cfg.transport();
    println!("server_name_with_port = {}", cfg.server_name_with_port);
    println!("base_url              = {}", endpoint.base_url());
    println!(
        "insecure_tls          = {}",
        endpoint.request_options().allow_insecure_tls
    );
    println!("status_policy         = {}", cfg.status_policy());
    println!("connect_timeout_secs  = {}", transport.connect_timeout_secs);
    println!("timeout_secs          = {}", transport.timeout_secs);
    Ok(())
}
