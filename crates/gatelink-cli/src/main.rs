//! Command line front end for composing GSM relay commands.
//!
//! Every device-facing subcommand loads the stored profile, composes
//! the SMS command text, and prints it together with a platform
//! composer link. Subcommands that change device settings also mirror
//! the change into the profile, so the local copy tracks what the
//! device was last told.

mod actions;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use gatelink_core::{AccessMode, NotificationFlags};
use gatelink_dispatch::Platform;
use gatelink_protocol::{CommandKind, CommandRequest};
use gatelink_store::ConfigStore;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Compose SMS commands for GSM relay boards
#[derive(Parser)]
#[command(name = "gatelink", version, about)]
struct Cli {
    /// Path to the device profile
    #[arg(short, long, global = true, default_value = "gatelink.json")]
    config: PathBuf,

    /// Which platform's SMS composer link to print
    #[arg(long, global = true, value_enum, default_value = "android")]
    platform: PlatformArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Switch or query the relay
    Relay {
        #[command(subcommand)]
        action: RelayAction,
    },
    /// Change the device password
    SetPassword {
        /// Replacement password, exactly 4 digits
        new_password: String,
    },
    /// Record the device's own phone number, the destination for every command
    SetUnit {
        /// Number of the SIM inside the device
        number: String,
    },
    /// Program the number the device sends alerts and replies to
    SetAdmin {
        /// Admin phone number, local or international form
        phone: String,
    },
    /// Choose which callers may trigger the relay
    SetMode {
        #[arg(value_enum)]
        mode: ModeArg,
    },
    /// Set how many seconds the relay holds after a trigger
    SetLatch {
        /// Seconds, 0 to 999; 0 pulses, 999 latches until the next call
        seconds: String,
    },
    /// Store a caller in a numbered slot on the device
    AddUser {
        /// Slot serial, 1 to 200
        serial: String,
        /// Caller phone number
        phone: String,
        /// Label kept in the local profile only
        #[arg(long)]
        name: Option<String>,
        /// Access window start, YYYYMMDDHHMM
        #[arg(long)]
        start: Option<String>,
        /// Access window end, YYYYMMDDHHMM
        #[arg(long)]
        end: Option<String>,
    },
    /// Clear a numbered slot on the device
    DeleteUser {
        /// Slot serial, 1 to 200
        serial: String,
    },
    /// Ask the device to text back the contents of one slot
    QueryUser {
        /// Slot serial, 1 to 200
        serial: String,
    },
    /// Ask the device to text back a span of slots
    QueryRange {
        /// First slot of the span
        start: String,
        /// Last slot of the span
        end: String,
    },
    /// Pick who gets a text when the relay switches
    Notify {
        #[command(subcommand)]
        action: NotifyAction,
    },
    /// Tell the device to stop forwarding carrier promotional texts
    StopPromo,
    /// Manage the device-side caller whitelist
    Whitelist {
        #[command(subcommand)]
        action: WhitelistAction,
    },
    /// Write a fresh profile with factory defaults
    Init {
        /// Replace an existing profile
        #[arg(long)]
        force: bool,
    },
    /// Print the stored profile
    Show,
    /// Export the profile as a portable backup document
    Backup {
        /// Where to write the backup
        path: PathBuf,
    },
    /// Replace the profile from a backup document
    Restore {
        /// Backup document to read
        path: PathBuf,
    },
}

#[derive(Subcommand)]
enum RelayAction {
    /// Switch the relay on
    On,
    /// Switch the relay off
    Off,
    /// Ask the device to text back its current state
    Status,
}

#[derive(Subcommand)]
enum NotifyAction {
    /// Recipients for relay-on events
    On(NotifyRecipients),
    /// Recipients for relay-off events
    Off(NotifyRecipients),
}

#[derive(Args)]
struct NotifyRecipients {
    /// Text the admin number
    #[arg(long)]
    admin: bool,
    /// Text the caller who triggered the relay
    #[arg(long)]
    caller: bool,
}

#[derive(Subcommand)]
enum WhitelistAction {
    /// Add a number to the whitelist
    Add {
        /// Phone number to admit
        phone: String,
    },
    /// Remove a number from the whitelist
    Remove {
        /// Phone number to drop
        phone: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Only stored slots and the whitelist trigger the relay
    Aut,
    /// Any caller triggers the relay
    All,
}

impl From<ModeArg> for AccessMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Aut => AccessMode::Authorized,
            ModeArg::All => AccessMode::AllCallers,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlatformArg {
    /// sms: link with a ? before the body
    Android,
    /// sms: link with a & before the body, leading + stripped
    Ios,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Android => Platform::Android,
            PlatformArg::Ios => Platform::Ios,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let store = ConfigStore::new(cli.config);
    let platform = Platform::from(cli.platform);

    match cli.command {
        Commands::Relay { action } => {
            let kind = match action {
                RelayAction::On => CommandKind::RelayOn,
                RelayAction::Off => CommandKind::RelayOff,
                RelayAction::Status => CommandKind::QueryStatus,
            };
            actions::compose(&store, platform, CommandRequest::new(kind))
        }
        Commands::SetPassword { new_password } => {
            actions::set_password(&store, platform, new_password)
        }
        Commands::SetUnit { number } => actions::set_unit(&store, number),
        Commands::SetAdmin { phone } => actions::set_admin(&store, platform, phone),
        Commands::SetMode { mode } => actions::set_mode(&store, platform, mode.into()),
        Commands::SetLatch { seconds } => actions::set_latch(&store, platform, seconds),
        Commands::AddUser {
            serial,
            phone,
            name,
            start,
            end,
        } => actions::add_user(&store, platform, serial, phone, name, start, end),
        Commands::DeleteUser { serial } => actions::delete_user(&store, platform, serial),
        Commands::QueryUser { serial } => actions::compose(
            &store,
            platform,
            CommandRequest::new(CommandKind::QueryUser).serial(serial),
        ),
        Commands::QueryRange { start, end } => actions::compose(
            &store,
            platform,
            CommandRequest::new(CommandKind::QueryUserRange)
                .serial(start)
                .serial_end(end),
        ),
        Commands::Notify { action } => {
            let (kind, recipients) = match action {
                NotifyAction::On(recipients) => (CommandKind::NotifyRelayOn, recipients),
                NotifyAction::Off(recipients) => (CommandKind::NotifyRelayOff, recipients),
            };
            let flags = NotificationFlags {
                admin: recipients.admin,
                caller: recipients.caller,
            };
            actions::notify(&store, platform, kind, flags)
        }
        Commands::StopPromo => actions::compose(
            &store,
            platform,
            CommandRequest::new(CommandKind::StopPromo),
        ),
        Commands::Whitelist { action } => match action {
            WhitelistAction::Add { phone } => actions::compose(
                &store,
                platform,
                CommandRequest::new(CommandKind::WhitelistAdd).phone(phone),
            ),
            WhitelistAction::Remove { phone } => actions::compose(
                &store,
                platform,
                CommandRequest::new(CommandKind::WhitelistRemove).phone(phone),
            ),
        },
        Commands::Init { force } => actions::init(&store, force),
        Commands::Show => actions::show(&store),
        Commands::Backup { path } => actions::backup(&store, &path),
        Commands::Restore { path } => actions::restore(&store, &path),
    }
}
