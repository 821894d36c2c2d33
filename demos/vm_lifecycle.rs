//! Drives a VM lifecycle transition and prints the acceptance result.
//!
//! Usage: `cargo run --example vm_lifecycle -- <start|reboot|shutdown> <node> <vmid>`
//! with `PROXMOX_*` environment variables for the connection.

use comal_proxmox::{ProxmoxClient, ProxmoxResult, TaskHandle};
use std::env;

#[tokio::main]
async fn main() -> ProxmoxResult<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let action = args.next().expect("usage: vm_lifecycle <start|reboot|shutdown> <node> <vmid>");
    let node = args.next().expect("missing node name");
    let vmid: u32 = args
        .next()
        .expect("missing vmid")
        .parse()
        .expect("vmid must be an integer");

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

    let task: TaskHandle = match action.as_str() {
        "start" => client.start_vm(&node, vmid).await?,
        "reboot" => client.reboot_vm(&node, vmid).await?,
        "shutdown" => client.shutdown_vm(&node, vmid).await?,
        other => panic!("unknown action '{}'", other),
    };

    println!("{} VM {} result: {}", action, vmid, task.status);
    if let Some(upid) = task.upid {
        println!("task: {}", upid);
    }
    Ok(())
}
