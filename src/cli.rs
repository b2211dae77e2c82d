use clap::{ArgAction, Parser, Subcommand};

use crate::heartbeat::DEFAULT_INTERVAL;
use crate::resource::ResourceState;

#[derive(Parser)]
#[command(name = "boskosctl", version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the pool manager
    #[arg(long, env = "BOSKOS_HOST")]
    pub host: String,

    /// Identity recorded as the owner of leased resources
    #[arg(long, env = "BOSKOS_OWNER")]
    pub owner: String,

    /// Verbose mode (-v, -vv)
    #[arg(short, action = ArgAction::Count)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Leases one resource of the given type and prints it as JSON
    /// Polls the pool for a while when nothing is free
    #[command(alias = "get")]
    Acquire {
        /// Resource type to lease
        #[arg(long = "type", env = "BOSKOS_RESOURCE_TYPE")]
        resource_type: String,
        /// Pool state to take the resource from
        #[arg(long, value_enum, default_value_t = ResourceState::Free)]
        state: ResourceState,
    },
    /// Returns a held resource to the pool
    Release {
        /// Name of the held resource
        #[arg(long, env = "BOSKOS_RESOURCE_NAME")]
        name: String,
        /// Pool state the resource is returned into
        #[arg(long, value_enum, default_value_t = ResourceState::Dirty)]
        dest: ResourceState,
    },
    /// Keeps a held resource marked busy until stopped
    Heartbeat {
        /// Name of the held resource
        #[arg(long, env = "BOSKOS_RESOURCE_NAME")]
        name: String,
        /// Seconds between liveness updates
        #[arg(long, default_value_t = DEFAULT_INTERVAL.as_secs())]
        interval_secs: u64,
        /// Stop after this many updates instead of running forever
        #[arg(long)]
        max_beats: Option<u64>,
    },
}
