//! Walks the cluster inventory and prints a human-readable summary:
//! API version, every node with its uptime, and the QEMU VMs on each.
//!
//! Configuration comes from `PROXMOX_*` environment variables (a `.env`
//! file works too).

use comal_proxmox::{ProxmoxClient, ProxmoxResult};
use std::env;

fn format_uptime(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}

#[tokio::main]
async fn main() -> ProxmoxResult<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let host = env::var("PROXMOX_HOST").expect("PROXMOX_HOST not set");
    let port: u16 = env::var("PROXMOX_PORT")
        .unwrap_or_else(|_| "8006".to_string())
        .parse()
        .expect("invalid port");
    let username = env::var("PROXMOX_USERNAME").expect("PROXMOX_USERNAME not set");
    let realm = env::var("PROXMOX_REALM").expect("PROXMOX_REALM not set");
    let password = env::var("PROXMOX_PASSWORD").expect("PROXMOX_PASSWORD not set");

    let client = ProxmoxClient::builder()
        .host(host)
        .port(port)
        .password_auth(username, realm, password)?
        .connect()
        .await?;

    let version = client.version().await?;
    println!("Proxmox VE API {} v{}\n", version.release, version.version);

    for node in client.nodes().await? {
        println!(
            "Node \"{}\" - {}, {}",
            node.node,
            node.status,
            format_uptime(node.uptime)
        );
        for vm in client.node_vms(&node.node).await? {
            println!("   VM \"{}\" - {}, {}", vm.name, vm.vmid, vm.status);
        }
    }
    Ok(())
}
