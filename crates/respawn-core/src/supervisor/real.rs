use super::Executor;
use crate::command::CommandSpec;
use crate::error::{Error, ProcessAction, Result};
use async_trait::async_trait;
use console::Term;
use std::process::Stdio;
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

/// A running instance of the supervised command.
#[derive(Debug)]
pub struct ChildProcess {
    child: Child,
    program: String,
}

impl ChildProcess {
    /// OS process id, if the process has not been reaped yet.
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Program name this process was started from.
    pub fn program(&self) -> &str {
        &self.program
    }
}

/// Executor that spawns real OS processes.
///
/// Children are spawned with `kill_on_drop`, so one still owned by the loop
/// when it shuts down is killed rather than orphaned.
#[derive(Debug)]
pub struct RealExecutor {
    term: Term,
    clear_screen: bool,
}

impl RealExecutor {
    /// Create an executor; `clear_screen` controls whether the terminal is
    /// wiped before each restart.
    pub fn new(clear_screen: bool) -> Self {
        Self {
            term: Term::stdout(),
            clear_screen,
        }
    }
}

impl Default for RealExecutor {
    fn default() -> Self {
        Self::new(true)
    }
}

#[async_trait]
impl Executor for RealExecutor {
    type Child = ChildProcess;

    fn start(&mut self, spec: &CommandSpec) -> Result<ChildProcess> {
        let child = Command::new(spec.program())
            .args(spec.args())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| Error::Process {
                action: ProcessAction::Start,
                program: spec.program().to_string(),
                source,
            })?;

        info!(pid = ?child.id(), command = %spec, "Started command");
        Ok(ChildProcess {
            child,
            program: spec.program().to_string(),
        })
    }

    async fn kill(&mut self, mut child: ChildProcess) -> Result<()> {
        let kill_error = |program: &str, source| Error::Process {
            action: ProcessAction::Kill,
            program: program.to_string(),
            source,
        };

        match child.child.try_wait() {
            Ok(Some(status)) => {
                debug!(program = %child.program, %status, "Command already exited");
                return Ok(());
            }
            Ok(None) => {}
            Err(source) => return Err(kill_error(&child.program, source)),
        }

        let pid = child.id();
        child
            .child
            .kill()
            .await
            .map_err(|source| kill_error(&child.program, source))?;
        debug!(?pid, program = %child.program, "Killed command");
        Ok(())
    }

    fn clear_screen(&mut self) {
        if !self.clear_screen {
            return;
        }
        if let Err(err) = self.term.clear_screen() {
            warn!(error = %err, "Could not clear the screen");
        }
    }
}
