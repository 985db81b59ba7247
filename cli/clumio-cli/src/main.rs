// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Clumio CLI - Command-line interface for the Clumio REST API
//!
//! A thin wrapper over `clumio-client`: every subcommand maps to one
//! controller method and prints the result as pretty JSON.
//!
//! # Environment Variables
//!
//! - `CLUMIO_API_BASE_PATH` - API base URL (defaults to the us-west-2 region)
//! - `CLUMIO_API_TOKEN` - bearer token
//! - `CLUMIO_ORGANIZATIONAL_UNIT_CONTEXT` - OU to act within
//! - `CLUMIO_TIMEOUT_SECS` - per-request timeout
//! - `CLUMIO_RAW_RESPONSE` - print response bodies untouched
//!
//! Command-line flags take precedence over the environment.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use clumio_api::{
    AddBucketToProtectionGroupV1Request, CreateBackupVmwareVmV1Request,
    CreateOrganizationalUnitV2Request, Filter, OnDemandSetting, SlaParam, UpdateTaskV1Request,
    VmwareVmBackupDetails,
};
use clumio_client::{ClumioClient, Configuration, ListParams, ResponseValue};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "clumio", version, about = "CLI for the Clumio REST API")]
struct Cli {
    /// API base URL
    #[arg(long, global = true, env = "CLUMIO_API_BASE_PATH")]
    base_path: Option<String>,

    /// Bearer token used to authenticate
    #[arg(long, global = true, env = "CLUMIO_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Organizational unit to act within
    #[arg(long, global = true, env = "CLUMIO_ORGANIZATIONAL_UNIT_CONTEXT")]
    ou_context: Option<String>,

    /// Extra request header, overriding defaults of the same name (repeatable)
    #[arg(
        long = "header",
        global = true,
        value_name = "NAME=VALUE",
        value_parser = parse_header
    )]
    headers: Vec<(String, String)>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "CLUMIO_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Print the response body exactly as received
    #[arg(long, global = true, env = "CLUMIO_RAW_RESPONSE")]
    raw: bool,

    /// Log requests and responses to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// VMware VM backups
    Backups {
        #[command(subcommand)]
        action: BackupAction,
    },
    /// Organizational units
    Ous {
        #[command(subcommand)]
        action: OuAction,
    },
    /// S3 protection groups
    ProtectionGroups {
        #[command(subcommand)]
        action: ProtectionGroupAction,
    },
    /// Background tasks
    Tasks {
        #[command(subcommand)]
        action: TaskAction,
    },
    /// Policy definitions
    Policies {
        #[command(subcommand)]
        action: PolicyAction,
    },
}

/// Paging and filtering shared by list commands
#[derive(Args, Debug)]
struct ListArgs {
    /// Maximum number of items per page
    #[arg(long)]
    limit: Option<i64>,
    /// Page to start from
    #[arg(long)]
    start: Option<String>,
    /// Filter as a JSON object, e.g. '{"status":{"$eq":"queued"}}'
    #[arg(long)]
    filter: Option<Filter>,
}

impl ListArgs {
    fn params(&self) -> ListParams {
        ListParams {
            limit: self.limit,
            start: self.start.clone(),
            filter: self.filter.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
enum BackupAction {
    /// List VMware VM backups
    List(ListArgs),
    /// Get a backup
    Get { backup_id: String },
    /// Start an on-demand backup of a VM
    Create {
        #[arg(long)]
        vcenter_id: String,
        #[arg(long)]
        vm_id: String,
        /// Keep the backup for this many days
        #[arg(long)]
        retention_days: Option<i64>,
    },
}

#[derive(Subcommand, Debug)]
enum OuAction {
    /// List organizational units
    List(ListArgs),
    /// Get an organizational unit
    Get { id: String },
    /// Create an organizational unit
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        parent_id: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an organizational unit
    Delete { id: String },
    /// List the users of an organizational unit
    Users {
        id: String,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand, Debug)]
enum ProtectionGroupAction {
    /// List protection groups
    List {
        #[command(flatten)]
        list: ListArgs,
        /// Days of history used for compliance statistics
        #[arg(long)]
        lookback_days: Option<i64>,
    },
    /// Get a protection group
    Get {
        group_id: String,
        #[arg(long)]
        lookback_days: Option<i64>,
    },
    /// Delete a protection group
    Delete { group_id: String },
    /// Add a bucket to a protection group
    AddBucket {
        group_id: String,
        #[arg(long)]
        bucket_id: String,
    },
}

#[derive(Subcommand, Debug)]
enum TaskAction {
    /// List tasks
    List(ListArgs),
    /// Get a task
    Get { task_id: String },
    /// Abort a queued or running task
    Abort { task_id: String },
}

#[derive(Subcommand, Debug)]
enum PolicyAction {
    /// List policy definitions
    List {
        #[command(flatten)]
        list: ListArgs,
        #[arg(long)]
        embed: Option<String>,
    },
    /// Get a policy definition
    Get {
        policy_id: String,
        #[arg(long)]
        embed: Option<String>,
    },
    /// Delete a policy definition
    Delete { policy_id: String },
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty header name in '{s}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

fn build_config(cli: &Cli) -> Result<Configuration> {
    let mut builder = Configuration::builder().raw_response(cli.raw);
    if let Some(base_path) = &cli.base_path {
        builder = builder.base_path(base_path);
    }
    if let Some(token) = &cli.token {
        builder = builder.api_token(token);
    }
    if let Some(context) = &cli.ou_context {
        builder = builder.organizational_unit_context(context);
    }
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    for (name, value) in &cli.headers {
        builder = builder.custom_header(name, value);
    }
    builder.build().context("invalid client configuration")
}

/// Print the untouched body in raw mode, pretty JSON otherwise
fn print_response<T: Serialize>(response: ResponseValue<T>) -> Result<()> {
    let (raw, inner) = response.into_raw_pair();
    match raw {
        Some(raw) => println!("{}", raw.text()),
        None => println!("{}", serde_json::to_string_pretty(&inner)?),
    }
    Ok(())
}

async fn run_backups(client: &ClumioClient, action: BackupAction) -> Result<()> {
    let backups = client.backup_vmware_vms();
    match action {
        BackupAction::List(list) => {
            let response = backups.list_backup_vmware_vms(&list.params()).await?;
            print_response(response)
        }
        BackupAction::Get { backup_id } => {
            print_response(backups.read_backup_vmware_vm(&backup_id).await?)
        }
        BackupAction::Create {
            vcenter_id,
            vm_id,
            retention_days,
        } => {
            let body = CreateBackupVmwareVmV1Request {
                details: Some(VmwareVmBackupDetails {
                    vcenter_id: Some(vcenter_id),
                    vm_id: Some(vm_id),
                }),
                settings: retention_days.map(|days| OnDemandSetting {
                    retention_duration: Some(SlaParam {
                        unit: Some("days".to_string()),
                        value: Some(days),
                        ..Default::default()
                    }),
                }),
                kind: None,
            };
            print_response(backups.create_backup_vmware_vm(Some(&body)).await?)
        }
    }
}

async fn run_ous(client: &ClumioClient, action: OuAction) -> Result<()> {
    let ous = client.organizational_units();
    match action {
        OuAction::List(list) => {
            let response = ous.list_organizational_units(&list.params()).await?;
            print_response(response)
        }
        OuAction::Get { id } => print_response(ous.read_organizational_unit(&id).await?),
        OuAction::Create {
            name,
            parent_id,
            description,
        } => {
            let body = CreateOrganizationalUnitV2Request {
                name: Some(name),
                parent_id,
                description,
                ..Default::default()
            };
            print_response(ous.create_organizational_unit(None, Some(&body)).await?)
        }
        OuAction::Delete { id } => print_response(ous.delete_organizational_unit(&id).await?),
        OuAction::Users { id, list } => {
            let response = ous
                .list_organizational_unit_users(&id, &list.params())
                .await?;
            print_response(response)
        }
    }
}

async fn run_protection_groups(client: &ClumioClient, action: ProtectionGroupAction) -> Result<()> {
    let groups = client.protection_groups();
    match action {
        ProtectionGroupAction::List {
            list,
            lookback_days,
        } => {
            let response = groups
                .list_protection_groups(&list.params(), lookback_days)
                .await?;
            print_response(response)
        }
        ProtectionGroupAction::Get {
            group_id,
            lookback_days,
        } => {
            let response = groups
                .read_protection_group(&group_id, lookback_days)
                .await?;
            print_response(response)
        }
        ProtectionGroupAction::Delete { group_id } => {
            print_response(groups.delete_protection_group(&group_id).await?)
        }
        ProtectionGroupAction::AddBucket {
            group_id,
            bucket_id,
        } => {
            let body = AddBucketToProtectionGroupV1Request {
                bucket_id: Some(bucket_id),
            };
            let response = groups
                .add_bucket_protection_group(&group_id, Some(&body))
                .await?;
            print_response(response)
        }
    }
}

async fn run_tasks(client: &ClumioClient, action: TaskAction) -> Result<()> {
    let tasks = client.tasks();
    match action {
        TaskAction::List(list) => print_response(tasks.list_tasks(&list.params()).await?),
        TaskAction::Get { task_id } => print_response(tasks.read_task(&task_id).await?),
        TaskAction::Abort { task_id } => {
            let body = UpdateTaskV1Request::abort();
            print_response(tasks.update_task(&task_id, Some(&body)).await?)
        }
    }
}

async fn run_policies(client: &ClumioClient, action: PolicyAction) -> Result<()> {
    let policies = client.policy_definitions();
    match action {
        PolicyAction::List { list, embed } => {
            let response = policies
                .list_policy_definitions(&list.params(), embed.as_deref())
                .await?;
            print_response(response)
        }
        PolicyAction::Get { policy_id, embed } => {
            let response = policies
                .read_policy_definition(&policy_id, embed.as_deref())
                .await?;
            print_response(response)
        }
        PolicyAction::Delete { policy_id } => {
            print_response(policies.delete_policy_definition(&policy_id).await?)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "clumio_client=debug,clumio=debug"
    } else {
        "clumio_client=warn"
    };
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let config = build_config(&cli)?;
    tracing::debug!(base_path = %config.base_path(), "using Clumio API");
    let client = ClumioClient::new(config)?;

    match cli.command {
        Commands::Backups { action } => run_backups(&client, action).await,
        Commands::Ous { action } => run_ous(&client, action).await,
        Commands::ProtectionGroups { action } => run_protection_groups(&client, action).await,
        Commands::Tasks { action } => run_tasks(&client, action).await,
        Commands::Policies { action } => run_policies(&client, action).await,
    }
}
