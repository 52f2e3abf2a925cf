//! Pull service - resolves an application and pulls its working tree.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::PullerError;
use crate::inventory::{find_app, parse_inventory};
use crate::locks::DirectoryLocks;
use crate::ports::{CommandRunner, CommandSpec, ProcessError};
use crate::settings::{InventoryExecutable, PullerSettings};

/// Service running the resolve → pull pipeline for one application.
///
/// Holds no per-request state. The inventory is fetched fresh on every
/// call, so results always reflect the inventory tool's current view.
pub struct PullService {
    runner: Arc<dyn CommandRunner>,
    inventory: InventoryExecutable,
    git_command: String,
    locks: DirectoryLocks,
}

impl PullService {
    /// Create a new pull service.
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        inventory: InventoryExecutable,
        git_command: impl Into<String>,
    ) -> Self {
        Self {
            runner,
            inventory,
            git_command: git_command.into(),
            locks: DirectoryLocks::new(),
        }
    }

    /// Create a pull service from resolved settings.
    pub fn from_settings(runner: Arc<dyn CommandRunner>, settings: &PullerSettings) -> Self {
        Self::new(
            runner,
            settings.inventory.clone(),
            settings.git_command.clone(),
        )
    }

    /// Look up `name` in the inventory and return its directory.
    pub async fn resolve_app_dir(&self, name: &str) -> Result<PathBuf, PullerError> {
        let spec = CommandSpec::new(self.inventory.program())
            .arg("list")
            .arg("--json");

        let output = self
            .runner
            .run(spec)
            .await
            .map_err(PullerError::InventoryUnavailable)?;

        if !output.success {
            warn!(
                target: "puller.pull",
                app = %name,
                code = ?output.code,
                "Inventory command failed"
            );
            return Err(PullerError::InventoryCommandFailed {
                code: output.code,
                stderr: output.stderr_text(),
            });
        }

        let apps = parse_inventory(&output.stdout_text())?;
        debug!(target: "puller.pull", count = apps.len(), "Parsed inventory");

        find_app(&apps, name)
            .map(Path::to_path_buf)
            .ok_or_else(|| PullerError::AppNotFound(name.to_string()))
    }

    /// Run the version-control pull in `dir`.
    ///
    /// Pulls into the same directory are serialised.
    pub async fn execute_pull(&self, dir: &Path) -> Result<(), PullerError> {
        let _guard = self.locks.acquire(dir).await;

        let spec = CommandSpec::new(&self.git_command)
            .arg("pull")
            .current_dir(dir)
            .env("GIT_TERMINAL_PROMPT", "0");

        let output = self
            .runner
            .run(spec)
            .await
            .map_err(PullerError::PullUnavailable)?;

        if !output.success {
            warn!(
                target: "puller.pull",
                dir = %dir.display(),
                code = ?output.code,
                "Pull command failed"
            );
            return Err(PullerError::PullCommandFailed {
                code: output.code,
                stderr: output.stderr_text(),
            });
        }

        Ok(())
    }

    /// Resolve `name` and pull its directory, returning the directory.
    ///
    /// The pull runs on its own task. Dropping the returned future (request
    /// timeout, client disconnect) leaves it running to completion, bounded
    /// only by the runner's command timeout.
    pub async fn pull_app(self: &Arc<Self>, name: &str) -> Result<PathBuf, PullerError> {
        let dir = self.resolve_app_dir(name).await?;

        let service = Arc::clone(self);
        let pull_dir = dir.clone();
        let app = name.to_string();
        let pull = tokio::spawn(async move {
            let result = service.execute_pull(&pull_dir).await;
            if result.is_ok() {
                info!(target: "puller.pull", app = %app, dir = %pull_dir.display(), "Pulled app");
            }
            result
        });

        pull.await.map_err(|e| {
            PullerError::PullUnavailable(ProcessError::Aborted {
                program: self.git_command.clone(),
                message: e.to_string(),
            })
        })??;

        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{CommandOutput, MockCommandRunner};
    use mockall::Sequence;
    use std::time::Duration;

    const INVENTORY: &str = r#"[{"name":"blog","dir":"/srv/blog"}]"#;

    fn service(runner: MockCommandRunner) -> Arc<PullService> {
        Arc::new(PullService::new(
            Arc::new(runner),
            InventoryExecutable::default(),
            "git",
        ))
    }

    fn is_inventory(spec: &CommandSpec) -> bool {
        spec.program == "smallweb" && spec.args == ["list", "--json"]
    }

    fn is_pull_in(spec: &CommandSpec, dir: &str) -> bool {
        spec.program == "git"
            && spec.args == ["pull"]
            && spec.current_dir.as_deref() == Some(Path::new(dir))
    }

    #[tokio::test]
    async fn test_pull_app_runs_inventory_then_git() {
        let mut runner = MockCommandRunner::new();
        let mut seq = Sequence::new();
        runner
            .expect_run()
            .withf(is_inventory)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(CommandOutput::ok(INVENTORY)));
        runner
            .expect_run()
            .withf(|spec| is_pull_in(spec, "/srv/blog"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(CommandOutput::ok("Already up to date.\n")));

        let dir = service(runner).pull_app("blog").await.unwrap();
        assert_eq!(dir, PathBuf::from("/srv/blog"));
    }

    #[tokio::test]
    async fn test_explicit_inventory_path_is_used() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|spec| spec.program == "/opt/bin/smallweb")
            .times(1)
            .returning(|_| Ok(CommandOutput::ok(INVENTORY)));

        let service = PullService::new(
            Arc::new(runner),
            InventoryExecutable::Path(PathBuf::from("/opt/bin/smallweb")),
            "git",
        );
        assert_eq!(
            service.resolve_app_dir("blog").await.unwrap(),
            PathBuf::from("/srv/blog")
        );
    }

    #[tokio::test]
    async fn test_inventory_failure_carries_stderr_and_code() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .times(1)
            .returning(|_| Ok(CommandOutput::failed(3, "config not found\n")));

        let err = service(runner).pull_app("blog").await.unwrap_err();
        match err {
            PullerError::InventoryCommandFailed { code, ref stderr } => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "config not found\n");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_app_never_pulls() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(is_inventory)
            .times(1)
            .returning(|_| Ok(CommandOutput::ok(INVENTORY)));

        let err = service(runner).pull_app("missing").await.unwrap_err();
        assert!(matches!(err, PullerError::AppNotFound(ref name) if name == "missing"));
    }

    #[tokio::test]
    async fn test_unparseable_inventory() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .times(1)
            .returning(|_| Ok(CommandOutput::ok("Error: not json")));

        let err = service(runner).resolve_app_dir("blog").await.unwrap_err();
        assert!(matches!(err, PullerError::InventoryParse(_)));
    }

    #[tokio::test]
    async fn test_inventory_spawn_failure() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(1).returning(|_| {
            Err(ProcessError::SpawnFailed {
                program: "smallweb".to_string(),
                message: "No such file or directory".to_string(),
            })
        });

        let err = service(runner).pull_app("blog").await.unwrap_err();
        assert!(matches!(err, PullerError::InventoryUnavailable(_)));
        assert!(err.is_resolution_failure());
    }

    #[tokio::test]
    async fn test_git_failure_carries_stderr() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(is_inventory)
            .returning(|_| Ok(CommandOutput::ok(INVENTORY)));
        runner
            .expect_run()
            .withf(|spec| spec.program == "git")
            .returning(|_| Ok(CommandOutput::failed(1, "fatal: not a git repository")));

        let err = service(runner).pull_app("blog").await.unwrap_err();
        assert!(!err.is_resolution_failure());
        assert_eq!(err.to_string(), "fatal: not a git repository");
    }

    #[tokio::test]
    async fn test_git_timeout() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(1).returning(|_| {
            Err(ProcessError::TimedOut {
                program: "git".to_string(),
                timeout: Duration::from_secs(60),
            })
        });

        let err = service(runner)
            .execute_pull(Path::new("/srv/blog"))
            .await
            .unwrap_err();
        assert!(matches!(err, PullerError::PullUnavailable(_)));
    }

    #[tokio::test]
    async fn test_git_runs_non_interactively() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|spec| {
                spec.env
                    .iter()
                    .any(|(k, v)| k == "GIT_TERMINAL_PROMPT" && v == "0")
            })
            .times(1)
            .returning(|_| Ok(CommandOutput::ok("")));

        service(runner)
            .execute_pull(Path::new("/srv/blog"))
            .await
            .unwrap();
    }
}
