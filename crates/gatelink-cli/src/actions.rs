//! Subcommand handlers.
//!
//! Device-facing handlers all follow the same sequence: load the
//! profile, compose the command text, print it with a composer link,
//! and only then mirror the change into the profile. Composing before
//! persisting keeps the printed text signed with the password that was
//! current when the user ran the command, which matters most for
//! password changes.

use std::path::Path;

use anyhow::Context;
use gatelink_core::{AccessMode, AuthorizedUser, DeviceConfig, NotificationFlags};
use gatelink_dispatch::{Platform, composer_uri_for};
use gatelink_protocol::{Command, CommandKind, CommandRequest, ConfigSnapshot};
use gatelink_store::{ConfigStore, read_backup, write_backup};
use tracing::debug;

/// Compose a command that leaves the profile untouched.
pub fn compose(
    store: &ConfigStore,
    platform: Platform,
    request: CommandRequest,
) -> anyhow::Result<()> {
    let config = load_profile(store)?;
    compose_against(&config, platform, &request)?;
    Ok(())
}

/// Change the device password.
///
/// The command text is signed with the old password; the profile only
/// starts signing with the new one once that text exists.
pub fn set_password(
    store: &ConfigStore,
    platform: Platform,
    new_password: String,
) -> anyhow::Result<()> {
    let mut config = load_profile(store)?;
    let request = CommandRequest::new(CommandKind::ChangePassword).new_password(new_password);
    let command = compose_against(&config, platform, &request)?;

    if let Command::ChangePassword { new_password } = command {
        config.password = new_password;
        save_profile(store, &config)?;
        println!("Profile now signs commands with the new password");
    }
    Ok(())
}

/// Record the device's own phone number.
///
/// Stored as typed, minus surrounding whitespace. The number reaches
/// the platform SMS composer untouched, so whatever format the user's
/// contact list carries keeps working.
pub fn set_unit(store: &ConfigStore, number: String) -> anyhow::Result<()> {
    let number = number.trim().to_string();
    if number.is_empty() {
        anyhow::bail!("unit number cannot be empty");
    }
    let mut config = load_profile(store)?;
    config.unit_number = Some(number.clone());
    save_profile(store, &config)?;
    println!("Unit number set to {number}");
    Ok(())
}

/// Program the admin number on the device.
///
/// On success the normalized number is remembered in the profile,
/// since the device addresses its alerts there from now on.
pub fn set_admin(store: &ConfigStore, platform: Platform, phone: String) -> anyhow::Result<()> {
    let mut config = load_profile(store)?;
    let request = CommandRequest::new(CommandKind::SetAdminNumber).phone(phone);
    let command = compose_against(&config, platform, &request)?;

    if let Command::SetAdminNumber { phone } = command {
        println!("Profile admin number set to {phone}");
        config.admin_number = Some(phone);
        save_profile(store, &config)?;
    }
    Ok(())
}

/// Switch between authorized-callers-only and open access.
pub fn set_mode(store: &ConfigStore, platform: Platform, mode: AccessMode) -> anyhow::Result<()> {
    let mut config = load_profile(store)?;
    let request = CommandRequest::new(CommandKind::SetAccessMode).mode(mode);
    compose_against(&config, platform, &request)?;

    config.relay.mode = mode;
    save_profile(store, &config)?;
    println!("Profile access mode set to {mode}");
    Ok(())
}

/// Set the relay hold time.
pub fn set_latch(store: &ConfigStore, platform: Platform, seconds: String) -> anyhow::Result<()> {
    let mut config = load_profile(store)?;
    let request = CommandRequest::new(CommandKind::SetLatchTime).latch(seconds);
    let command = compose_against(&config, platform, &request)?;

    if let Command::SetLatchTime { latch } = command {
        config.relay.latch_time = latch;
        save_profile(store, &config)?;
        println!("Profile latch time set to {} seconds", latch.as_secs());
    }
    Ok(())
}

/// Store a caller in a numbered slot, on the device and in the profile.
pub fn add_user(
    store: &ConfigStore,
    platform: Platform,
    serial: String,
    phone: String,
    name: Option<String>,
    start: Option<String>,
    end: Option<String>,
) -> anyhow::Result<()> {
    let mut config = load_profile(store)?;
    let mut request = CommandRequest::new(CommandKind::AddUser)
        .serial(serial)
        .phone(phone);
    if let Some(start) = start {
        request = request.window_start(start);
    }
    if let Some(end) = end {
        request = request.window_end(end);
    }
    let command = compose_against(&config, platform, &request)?;

    if let Command::AddUser {
        serial,
        phone,
        window,
        ..
    } = command
    {
        config.upsert_user(AuthorizedUser {
            serial,
            phone,
            name,
            window,
        });
        save_profile(store, &config)?;
        println!("Slot {serial} saved to profile");
    }
    Ok(())
}

/// Clear a numbered slot, on the device and in the profile.
pub fn delete_user(store: &ConfigStore, platform: Platform, serial: String) -> anyhow::Result<()> {
    let mut config = load_profile(store)?;
    let request = CommandRequest::new(CommandKind::DeleteUser).serial(serial);
    let command = compose_against(&config, platform, &request)?;

    if let Command::DeleteUser { serial } = command
        && config.remove_user(serial).is_some()
    {
        save_profile(store, &config)?;
        println!("Slot {serial} cleared from profile");
    }
    Ok(())
}

/// Choose the recipients texted when the relay switches.
pub fn notify(
    store: &ConfigStore,
    platform: Platform,
    kind: CommandKind,
    flags: NotificationFlags,
) -> anyhow::Result<()> {
    let mut config = load_profile(store)?;
    let request = CommandRequest::new(kind).flags(flags);
    let command = compose_against(&config, platform, &request)?;

    match command {
        Command::NotifyRelayOn { flags } => config.notifications.relay_on = flags,
        Command::NotifyRelayOff { flags } => config.notifications.relay_off = flags,
        _ => return Ok(()),
    }
    save_profile(store, &config)?;
    println!("Profile notification recipients updated");
    Ok(())
}

/// Write a fresh profile with factory defaults.
pub fn init(store: &ConfigStore, force: bool) -> anyhow::Result<()> {
    if store.path().exists() && !force {
        anyhow::bail!(
            "profile already exists at {} (pass --force to replace it)",
            store.path().display()
        );
    }
    save_profile(store, &DeviceConfig::default())?;
    println!("Wrote factory defaults to {}", store.path().display());
    Ok(())
}

/// Print the stored profile as pretty JSON.
pub fn show(store: &ConfigStore) -> anyhow::Result<()> {
    let config = load_profile(store)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Export the profile as a portable backup document.
pub fn backup(store: &ConfigStore, path: &Path) -> anyhow::Result<()> {
    let config = load_profile(store)?;
    write_backup(path, &config)
        .with_context(|| format!("failed to write backup to {}", path.display()))?;
    println!("Backup written to {}", path.display());
    Ok(())
}

/// Replace the profile from a backup document.
pub fn restore(store: &ConfigStore, path: &Path) -> anyhow::Result<()> {
    let envelope = read_backup(path)
        .with_context(|| format!("failed to read backup from {}", path.display()))?;
    save_profile(store, &envelope.data)?;
    println!("Profile restored from backup taken {}", envelope.timestamp);
    Ok(())
}

/// Validate, resolve, and print one command against the profile.
///
/// Returns the resolved command so callers can mirror its effect.
fn compose_against(
    config: &DeviceConfig,
    platform: Platform,
    request: &CommandRequest,
) -> anyhow::Result<Command> {
    let snapshot = ConfigSnapshot::of(config);
    request.validate(&snapshot)?;

    let command = request.resolve()?;
    let body = command.encode(&config.password);
    debug!("Composed {} ({} bytes)", request.kind(), body.len());

    println!("Command:  {body}");
    println!("Composer: {}", composer_uri_for(platform, config, &body)?);
    Ok(command)
}

fn load_profile(store: &ConfigStore) -> anyhow::Result<DeviceConfig> {
    store
        .load()
        .with_context(|| format!("failed to load profile at {}", store.path().display()))
}

fn save_profile(store: &ConfigStore, config: &DeviceConfig) -> anyhow::Result<()> {
    store
        .save(config)
        .with_context(|| format!("failed to save profile at {}", store.path().display()))
}
