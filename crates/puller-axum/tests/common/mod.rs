//! Shared fixtures for puller-axum integration tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use puller_axum::{AxumContext, create_router};
use puller_core::ports::{CommandOutput, CommandRunner, CommandSpec, ProcessError};
use puller_core::{InventoryExecutable, PullService};

/// Inventory output used by most tests.
pub const BLOG_INVENTORY: &str = r#"[{"name":"blog","dir":"/srv/blog"}]"#;

/// How the fake answers one program.
#[derive(Clone)]
pub enum Reply {
    Output(CommandOutput),
    Delayed(Duration, CommandOutput),
    SpawnFails,
}

/// Command runner that answers by program name and records every call.
pub struct FakeRunner {
    inventory: Reply,
    git: Reply,
    calls: Mutex<Vec<CommandSpec>>,
    finished: Mutex<Vec<String>>,
}

impl FakeRunner {
    pub fn new(inventory: Reply, git: Reply) -> Arc<Self> {
        Arc::new(Self {
            inventory,
            git,
            calls: Mutex::new(Vec::new()),
            finished: Mutex::new(Vec::new()),
        })
    }

    /// Inventory lists `blog`, git succeeds.
    pub fn happy() -> Arc<Self> {
        Self::new(
            Reply::Output(CommandOutput::ok(BLOG_INVENTORY)),
            Reply::Output(CommandOutput::ok("Already up to date.\n")),
        )
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }

    /// Programs whose reply was fully delivered, in completion order.
    pub fn finished(&self) -> Vec<String> {
        self.finished.lock().unwrap().clone()
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(CommandSpec::display_program)
            .collect()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, spec: CommandSpec) -> Result<CommandOutput, ProcessError> {
        let reply = if spec.program == "git" {
            self.git.clone()
        } else {
            self.inventory.clone()
        };
        let program = spec.display_program();
        self.calls.lock().unwrap().push(spec);

        let result = match reply {
            Reply::Output(output) => Ok(output),
            Reply::Delayed(delay, output) => {
                tokio::time::sleep(delay).await;
                Ok(output)
            }
            Reply::SpawnFails => Err(ProcessError::SpawnFailed {
                program: program.clone(),
                message: "No such file or directory (os error 2)".to_string(),
            }),
        };
        self.finished.lock().unwrap().push(program);
        result
    }
}

/// Router wired to `runner` with the given request timeout.
pub fn router_with_timeout(runner: Arc<FakeRunner>, request_timeout: Duration) -> Router {
    let service = PullService::new(runner, InventoryExecutable::default(), "git");
    create_router(AxumContext::new(Arc::new(service), request_timeout))
}

/// Router wired to `runner` with a generous request timeout.
pub fn router(runner: Arc<FakeRunner>) -> Router {
    router_with_timeout(runner, Duration::from_secs(10))
}
