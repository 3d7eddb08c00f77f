use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::path::PathBuf;
use std::time::Duration;

use crate::api::ApiClient;
use crate::auth::Token;
use crate::cancel::CancelToken;
use crate::config::Config;
use crate::error::MlboardError;
use crate::joblog::{self, JobLogState, LogOutcome};
use crate::notify;
use crate::output::{self, FetchSpinner};
use crate::repo::{BranchDraft, BranchSwitcher};
use crate::routes;

#[derive(Parser)]
#[command(name = "mlboard")]
#[command(author, version, about = "ML Pipeline Dashboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Bearer token for the platform gateway
    #[arg(short, long, global = true, env = "MLBOARD_TOKEN")]
    token: Option<String>,

    /// Path to a configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a job's details and its log transcript
    JobLog {
        #[arg(short, long)]
        project_id: u64,

        #[arg(short, long)]
        job_id: u64,

        /// Namespace of the project, used for output links
        #[arg(long)]
        namespace: String,

        /// URL slug of the project, used for output links
        #[arg(long)]
        slug: String,

        /// Keep polling until the log has been generated
        #[arg(short, long, default_value_t = false)]
        wait: bool,
    },

    /// List switchable branches and repository actions
    Branches {
        #[arg(short, long)]
        project_id: u64,

        /// Currently selected branch (URL-encoded values accepted)
        #[arg(short, long, default_value = "master")]
        branch: String,

        /// Current directory within the repository
        #[arg(long, default_value = "")]
        path: String,
    },

    /// Validate and create a new branch
    NewBranch {
        #[arg(short, long)]
        project_id: u64,

        /// Source branch the new branch starts from
        #[arg(short, long)]
        source: String,

        /// Name of the new branch
        #[arg(short, long)]
        name: String,
    },
}

impl Cli {
    pub async fn execute(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;
        let token = self.token.as_ref().map(|t| Token::from(t.as_str()));
        let client = ApiClient::new(
            &config.gateway.api_gateway,
            token,
            Duration::from_millis(config.gateway.build_timeout_ms),
        )?;

        match &self.command {
            Commands::JobLog {
                project_id,
                job_id,
                namespace,
                slug,
                wait,
            } => {
                self.execute_job_log(
                    &client, &config, *project_id, *job_id, namespace, slug, *wait,
                )
                .await
            }
            Commands::Branches {
                project_id,
                branch,
                path,
            } => self.execute_branches(&client, *project_id, branch, path).await,
            Commands::NewBranch {
                project_id,
                source,
                name,
            } => {
                self.execute_new_branch(&client, *project_id, source, name)
                    .await
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    async fn execute_job_log(
        &self,
        client: &ApiClient,
        config: &Config,
        project_id: u64,
        job_id: u64,
        namespace: &str,
        slug: &str,
        wait: bool,
    ) -> Result<()> {
        info!("Loading log for job {job_id} in project {project_id}");

        // The view owns the token: Ctrl-C is its teardown, after which any
        // result still in flight is discarded rather than committed.
        let token = CancelToken::new();
        {
            let token = token.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    token.cancel();
                }
            });
        }

        let spinner = FetchSpinner::start("Fetching job log");

        let job = match client.fetch_job(project_id, job_id).await {
            Ok(job) => job,
            Err(err) => {
                spinner.finish_and_clear();
                warn!("Job lookup failed: {err}");
                notify::error_notice("Error", "The job was not found or could not be parsed");
                return Ok(());
            }
        };

        let mut state = JobLogState::new();
        let chain = joblog::load_job_log(client, project_id, &job, &token, &mut state).await;
        spinner.finish_and_clear();

        let mut outcome = match chain {
            Ok(outcome) => outcome,
            Err(MlboardError::Cancelled) => return Ok(()),
            Err(err) => {
                warn!("Job log chain failed: {err}");
                notify::error_notice("Error", "The job was not found or could not be parsed");
                return Ok(());
            }
        };

        while wait && outcome == LogOutcome::NotYetGenerated && !token.is_cancelled() {
            notify::info_notice("Info", "No log has been generated yet");
            tokio::time::sleep(Duration::from_millis(config.gateway.poll_timeout_ms)).await;

            outcome = match joblog::fetch_and_commit_trace(
                client, project_id, job.id, &token, &mut state,
            )
            .await
            {
                Ok(outcome) => outcome,
                Err(MlboardError::Cancelled) => return Ok(()),
                Err(err) => {
                    warn!("Log poll failed: {err}");
                    notify::error_notice("Error", "The job was not found or could not be parsed");
                    return Ok(());
                }
            };
        }

        if token.is_cancelled() {
            return Ok(());
        }

        let link = joblog::derive_output_link(&job, state.all_jobs(), namespace, slug);
        output::print_job_summary(&job, &state, &link);

        match outcome {
            LogOutcome::Loaded => {
                if let Some(doc) = state.log() {
                    output::print_transcript(doc);
                }
            }
            LogOutcome::NotYetGenerated => {
                notify::info_notice("Info", "No log has been generated yet");
            }
            LogOutcome::DecodeFailed => {
                notify::error_notice("Error", "Something went wrong reading the log");
            }
        }

        Ok(())
    }

    async fn execute_branches(
        &self,
        client: &ApiClient,
        project_id: u64,
        branch: &str,
        path: &str,
    ) -> Result<()> {
        info!("Listing branches for project {project_id}");

        let spinner = FetchSpinner::start("Fetching branches");
        let branches = match client.fetch_branches(project_id).await {
            Ok(branches) => branches,
            Err(err) => {
                spinner.finish_and_clear();
                warn!("Branch listing failed: {err}");
                notify::error_notice("Error", "Branches could not be fetched");
                return Ok(());
            }
        };
        spinner.finish_and_clear();

        let mut switcher = BranchSwitcher::new(branch);
        let selected = switcher.selected().to_string();
        switcher.refresh(branches, &selected);

        println!("Switch branches (current: {})", switcher.selected());
        println!(
            "{}",
            output::branches_table(&switcher.switchable(), project_id)
        );
        println!();
        println!(
            "{}",
            output::actions_table(project_id, switcher.selected(), path)
        );

        Ok(())
    }

    async fn execute_new_branch(
        &self,
        client: &ApiClient,
        project_id: u64,
        source: &str,
        name: &str,
    ) -> Result<()> {
        info!("Creating branch {name} from {source} in project {project_id}");

        let spinner = FetchSpinner::start("Fetching branches");
        let existing = match client.fetch_branches(project_id).await {
            Ok(branches) => branches,
            Err(err) => {
                spinner.finish_and_clear();
                warn!("Branch listing failed: {err}");
                notify::error_notice("Error", "Branches could not be fetched");
                return Ok(());
            }
        };
        spinner.finish_and_clear();

        let draft = BranchDraft::new(Some(source.to_string()), name);
        if let Err(err) = draft.validate(&existing) {
            notify::error_notice("Invalid branch", &err.to_string());
            return Ok(());
        }

        match client.create_branch(project_id, name, source).await {
            Ok(created) => {
                notify::info_notice("Success", &format!("Branch '{}' created", created.name));
                println!("{}", routes::branch_files(project_id, &created.name));
            }
            Err(err) => {
                warn!("Branch creation failed: {err}");
                notify::error_notice("Error", "The branch could not be created");
            }
        }

        Ok(())
    }
}
