use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use autocare::config::AssistantConfig;
use autocare::fleet::{find_vehicle, load_fleet};
use autocare::kernel::event::{Event, SideEffect};
use autocare::kernel::session::Speaker;
use autocare::outputs::notification::generate_notification;
use autocare::outputs::text::{render_suggestions, render_turn};
use autocare::{Reactor, VehicleContext};

/// Talk to the AutoCare maintenance assistant about one fleet vehicle.
#[derive(Parser)]
#[command(name = "autocare", version, about, long_about = None)]
struct Cli {
    /// Fleet listing (JSON). Defaults to the bundled demo fleet.
    #[arg(long, env = "AUTOCARE_FLEET")]
    fleet: Option<PathBuf>,

    /// Assistant config (JSON).
    #[arg(long, env = "AUTOCARE_CONFIG")]
    config: Option<PathBuf>,

    /// Vehicle id to converse about.
    #[arg(long, default_value = "VH001")]
    vehicle: String,

    /// List the fleet and exit.
    #[arg(long)]
    list: bool,

    /// Skip the simulated typing delay.
    #[arg(long)]
    no_delay: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let fleet = load_fleet(cli.fleet.as_deref())?;

    if cli.list {
        for record in &fleet {
            let vehicle = VehicleContext::from(record);
            println!(
                "{:<6} {:<10} {:<14} {:<10} {:>3}%  {:?}",
                vehicle.id,
                vehicle.make,
                vehicle.model,
                vehicle.city,
                vehicle.health_score,
                vehicle.severity().priority()
            );
        }
        return Ok(());
    }

    let mut config = AssistantConfig::load(cli.config.as_deref())?;
    if cli.no_delay {
        config = AssistantConfig { telemetry_capacity: config.telemetry_capacity, ..AssistantConfig::instant() };
    }

    let vehicle = Arc::new(find_vehicle(&fleet, &cli.vehicle)?);
    vehicle.validate().context("selected vehicle cannot be triaged")?;

    let notification = generate_notification(&vehicle);
    println!("{}\n{}\n", notification.title, notification.body);

    let (event_tx, event_rx) = mpsc::channel(16);
    let (effect_tx, mut effect_rx) = mpsc::channel(64);

    let mut reactor = Reactor::new(vehicle, config);
    let driver = tokio::spawn(async move {
        reactor.run(event_rx, effect_tx).await;
        reactor
    });

    let printer = tokio::spawn(async move {
        while let Some(effect) = effect_rx.recv().await {
            match effect {
                SideEffect::Typing => println!("..."),
                // The owner already sees what they typed.
                SideEffect::Render(turn) if turn.speaker == Speaker::User => {}
                SideEffect::Render(turn) => print!("{}", render_turn(&turn)),
                SideEffect::Suggestions(s) if !s.is_empty() => println!("{}\n", render_suggestions(&s)),
                SideEffect::Suggestions(_) => {}
                SideEffect::Classified(intent) => tracing::debug!(?intent, "Intent"),
                SideEffect::Cleared => println!("(conversation cleared)"),
                SideEffect::Rejected(e) => println!("(ignored: {})", e),
            }
        }
    });

    event_tx.send(Event::Start).await.context("reactor stopped")?;

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let event = match line {
            "/quit" | "/exit" => break,
            "/reset" => {
                event_tx.send(Event::Reset).await.context("reactor stopped")?;
                Event::Start
            }
            // `#2` picks the second quick reply.
            _ => match line.strip_prefix('#').and_then(|n| n.parse::<usize>().ok()) {
                Some(n) if n > 0 => Event::Suggestion(n - 1),
                _ => Event::Utterance(line.to_string()),
            },
        };
        event_tx.send(event).await.context("reactor stopped")?;
    }

    drop(event_tx);
    let reactor = driver.await.context("reactor task panicked")?;
    printer.await.context("printer task panicked")?;

    let snapshot = reactor.session.telemetry().snapshot();
    tracing::info!(
        utterances = snapshot.intents.total,
        unclear_ratio = snapshot.intents.unclear_ratio,
        resets = snapshot.resets,
        "Session summary"
    );
    Ok(())
}
