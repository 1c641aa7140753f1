use std::future::Future;
use std::path::PathBuf;

use anyhow::Result;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, BufReader};
use tokio::sync::mpsc;
use tracing::info;

use lootlog_application::handlers::{on_npc_loot_received, run_host_action};
use lootlog_application::ops::EventBus;
use lootlog_application::AppState;
use lootlog_domain::{HostAction, NpcLootReceived};

use crate::context::AppContext;
use crate::replay::replay_events;

pub async fn run_standalone(events: Option<PathBuf>) -> Result<()> {
    let context = AppContext::new().await?;
    let published = match events {
        Some(path) => {
            let file = File::open(&path).await?;
            run_replay(context, BufReader::new(file)).await?
        }
        None => run_replay(context, BufReader::new(tokio::io::stdin())).await?,
    };
    info!("replayed {} loot events", published);
    Ok(())
}

/// Publishes every event from `reader`, then waits for the client thread to
/// finish handling them and for in-flight submissions to complete. Ctrl-C
/// stops reading early.
pub async fn run_replay<R>(context: AppContext, reader: R) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    run_replay_until(context, reader, shutdown_signal()).await
}

/// Like [`run_replay`], but stops reading once `shutdown` completes. Events
/// already published are still handled. The client thread is drained even
/// when reading fails.
pub async fn run_replay_until<R, S>(context: AppContext, reader: R, shutdown: S) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    S: Future<Output = ()>,
{
    let bus = EventBus::default();
    let subscription = bus.subscribe().await;
    let client_thread = tokio::spawn(run_client_thread(
        context.state.clone(),
        subscription,
        context.actions,
    ));

    let mut published = 0;
    let (read, interrupted) = tokio::select! {
        result = replay_events(&bus, reader, &mut published) => (result, false),
        _ = shutdown => (Ok(()), true),
    };
    if interrupted {
        info!("interrupted, finishing {} queued loot events", published);
    }

    bus.close().await;
    client_thread.await?;
    read?;
    Ok(published)
}

/// The host's single-threaded context: handles loot events and runs every
/// action queued by submission tasks.
async fn run_client_thread(
    state: AppState,
    mut events: mpsc::UnboundedReceiver<NpcLootReceived>,
    mut actions: mpsc::UnboundedReceiver<HostAction>,
) {
    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(event) => on_npc_loot_received(&state, &event),
                None => break,
            },
            Some(action) = actions.recv() => run_host_action(&state, action).await,
        }
    }

    state.sender.flush().await;
    while let Ok(action) = actions.try_recv() {
        run_host_action(&state, action).await;
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
