use crate::{Dashboard, DashboardCommand, DashboardHandle, ShutdownCoordinator};

use nids_channel::{ApplyOutcome, ChannelHub};

use log::{debug, info, warn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Sole owner of the dashboard feeds.
///
/// Feeds are only touched from the actor task: it applies channel messages
/// as they arrive and answers handle requests in between.
pub struct DashboardActor {
    dashboard: Dashboard,
    hub: ChannelHub,
    commands: mpsc::Receiver<DashboardCommand>,
    shutdown: ShutdownCoordinator,
}

impl DashboardActor {
    pub fn new(
        dashboard: Dashboard,
        hub: ChannelHub,
        shutdown: ShutdownCoordinator,
        command_buffer: usize,
    ) -> (Self, DashboardHandle) {
        let (sender, commands) = mpsc::channel(command_buffer);

        let actor = Self {
            dashboard,
            hub,
            commands,
            shutdown,
        };

        (actor, DashboardHandle::new(sender))
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Run until shutdown or until every handle is dropped.
    /// All feeds are deactivated on exit.
    pub async fn run(self) {
        let Self {
            mut dashboard,
            hub,
            mut commands,
            shutdown,
        } = self;

        let mut shutdown_guard = shutdown.subscribe_guard();
        info!("Dashboard actor started ({} feeds)", dashboard.names().len());

        loop {
            tokio::select! {
                biased;

                _ = shutdown_guard.wait() => {
                    info!("Dashboard actor received shutdown signal");
                    break;
                }
                command = commands.recv() => match command {
                    Some(command) => handle_command(&mut dashboard, &hub, command),
                    None => {
                        info!("All dashboard handles dropped");
                        break;
                    }
                },
                (feed, outcome) = dashboard.next_message() => log_outcome(&feed, outcome),
            }
        }

        dashboard.deactivate_all();
        info!("Dashboard actor stopped");
    }
}

fn handle_command(dashboard: &mut Dashboard, hub: &ChannelHub, command: DashboardCommand) {
    let kind = command.kind();
    debug!("Dashboard command: {}", kind);

    let delivered = match command {
        DashboardCommand::Snapshot { feed, reply } => reply.send(dashboard.snapshot(&feed)).is_ok(),
        DashboardCommand::Feeds { reply } => reply.send(dashboard.statuses()).is_ok(),
        DashboardCommand::Activate { feed, reply } => {
            reply.send(dashboard.activate(&feed, hub)).is_ok()
        }
        DashboardCommand::Deactivate { feed, reply } => {
            reply.send(dashboard.deactivate(&feed)).is_ok()
        }
    };

    if !delivered {
        debug!("Requester gone before {} reply", kind);
    }
}

fn log_outcome(feed: &str, outcome: Option<ApplyOutcome>) {
    match outcome {
        Some(ApplyOutcome::Rejected(_)) => {}
        Some(outcome) => debug!("Feed {} applied record: {:?}", feed, outcome),
        None => warn!("Feed {} lost its subscription", feed),
    }
}
