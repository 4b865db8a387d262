//! Command-line definitions.

use bindctl_core::{NewRule, OutputFormat, RoleBindType, RuleOverrides, UpdateMode};
use clap::{Args, Parser, Subcommand};

/// bindctl - manage ACL binding rules on a coordination service
#[derive(Parser, Debug)]
#[command(name = "bindctl", version)]
#[command(about = "Manage ACL binding rules on a coordination service", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "BINDCTL_CONFIG")]
    pub config: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub http: HttpArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Connection flags shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct HttpArgs {
    /// Address of the agent's HTTP API
    #[arg(long = "http-addr", global = true, env = "BINDCTL_HTTP_ADDR")]
    pub http_addr: Option<String>,

    /// ACL token to send with every request
    #[arg(long, global = true, env = "BINDCTL_HTTP_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new binding rule
    Create(CreateArgs),
    /// Update an existing binding rule
    Update(UpdateArgs),
    /// Show a single binding rule
    Read(ReadArgs),
    /// List binding rules
    List(ListArgs),
    /// Delete a binding rule
    Delete(DeleteArgs),
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Output flags shared by commands that print rules.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Show metadata such as the content hash and store indexes
    #[arg(long)]
    pub meta: bool,

    /// Output format: "pretty" or "json"
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,
}

/// Arguments for `create`.
#[derive(Args, Debug, Clone, Default)]
pub struct CreateArgs {
    /// Identity provider the rule applies to (required)
    #[arg(long)]
    pub idp_name: Option<String>,

    /// A description of the binding rule
    #[arg(long)]
    pub description: Option<String>,

    /// Expression matched against verified identity attributes returned by the provider
    #[arg(long)]
    pub selector: Option<String>,

    /// Type of role binding to perform: "service" or "existing"
    #[arg(long, default_value = "service")]
    pub role_bind_type: RoleBindType,

    /// Name of the role to bind on match; supports {{var}} interpolation (required)
    #[arg(long)]
    pub role_name: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl CreateArgs {
    /// Collects the flags into a rule to create.
    pub fn new_rule(&self) -> NewRule {
        NewRule {
            provider_name: self.idp_name.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            role_bind_type: self.role_bind_type,
            role_name: self.role_name.clone().unwrap_or_default(),
            selector: self.selector.clone().unwrap_or_default(),
        }
    }
}

/// Arguments for `update`.
#[derive(Args, Debug, Clone, Default)]
pub struct UpdateArgs {
    /// ID of the binding rule to update; any unique prefix is accepted
    #[arg(long)]
    pub id: Option<String>,

    /// A description of the binding rule
    #[arg(long)]
    pub description: Option<String>,

    /// Expression matched against verified identity attributes; pass an empty value to clear it
    #[arg(long)]
    pub selector: Option<String>,

    /// Type of role binding to perform: "service" or "existing"
    #[arg(long)]
    pub role_bind_type: Option<RoleBindType>,

    /// Name of the role to bind on match; supports {{var}} interpolation
    #[arg(long)]
    pub role_name: Option<String>,

    /// Replace the stored rule instead of merging into it. Omitted fields
    /// revert to their defaults and --role-name becomes required
    #[arg(long)]
    pub no_merge: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl UpdateArgs {
    /// Update strategy selected by `--no-merge`.
    pub fn mode(&self) -> UpdateMode {
        if self.no_merge {
            UpdateMode::Replace
        } else {
            UpdateMode::Merge
        }
    }

    /// Fields supplied on the command line.
    pub fn overrides(&self) -> RuleOverrides {
        RuleOverrides {
            description: self.description.clone(),
            role_bind_type: self.role_bind_type,
            role_name: self.role_name.clone(),
            selector: self.selector.clone(),
        }
    }
}

/// Arguments for `read`.
#[derive(Args, Debug, Clone, Default)]
pub struct ReadArgs {
    /// ID of the binding rule to show; any unique prefix is accepted
    #[arg(long)]
    pub id: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for `list`.
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Only list rules for this identity provider
    #[arg(long)]
    pub idp_name: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for `delete`.
#[derive(Args, Debug, Clone, Default)]
pub struct DeleteArgs {
    /// ID of the binding rule to delete; any unique prefix is accepted
    #[arg(long)]
    pub id: Option<String>,
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Get a configuration value by dotted key (e.g. http.address)
    Get {
        /// Dotted key
        key: String,
    },
    /// Create a default configuration file
    Init {
        /// Write to this path instead of the default location
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
