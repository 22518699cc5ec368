mod backend;
mod command;
mod config;
mod errors;
mod models;
mod orchestrator;
mod view;

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::HttpBackend;
use crate::command::{Command, HELP};
use crate::config::Config;
use crate::orchestrator::{Coach, CoachEvent, Feature, SubmitStatus};
use crate::view::labels::Trigger;
use crate::view::{button_label, render_chat, render_interview, render_latest_chat};
use crate::view::{render_profile, render_resume, render_roadmap};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so they never interleave with rendered panels on stdout.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting career coach client v{}", env!("CARGO_PKG_VERSION"));

    let backend = Arc::new(HttpBackend::new(&config)?);
    info!("Backend base URL: {}", backend.base_url());

    let coach = Arc::new(Coach::new(&config, backend));
    info!(
        "Chat system brief: {}",
        coach.chat_panel().transcript.system_brief()
    );
    coach.spawn_warm_up();

    let renderer = tokio::spawn(render_events(coach.clone(), coach.subscribe()));

    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match command::parse(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(cmd)) => dispatch(&coach, cmd),
            Err(e) => println!("{e}"),
        }
    }

    renderer.abort();
    info!("Console closed");
    Ok(())
}

/// Applies edits in place; submits run as their own tasks so different features
/// can be in flight together.
fn dispatch(coach: &Arc<Coach>, cmd: Command) {
    match cmd {
        Command::SetField(field, value) => coach.edit_profile(|p| field.apply(p, value)),
        Command::AddTag(field, tag) => {
            if !coach.edit_profile(|p| field.tags_mut(p).add(&tag)) {
                println!("'{tag}' not added (blank or already present)");
            }
        }
        Command::RemoveTag(field, tag) => {
            coach.edit_profile(|p| field.tags_mut(p).remove(&tag));
        }
        Command::Level(level) => coach.set_interview_level(level),
        Command::ResumeLine(line) => coach.append_resume_line(&line),
        Command::ResumeClear => coach.set_resume_text(String::new()),
        Command::Answer(text) => coach.set_interview_answer(text),
        Command::Ask(text) => {
            coach.set_chat_draft(text);
            spawn_submit(coach, Feature::Chat, |c| async move { c.send_chat().await });
        }
        Command::SaveProfile => {
            spawn_submit(coach, Feature::Profile, |c| async move { c.save_profile().await })
        }
        Command::Analyze => {
            spawn_submit(coach, Feature::Resume, |c| async move { c.analyze_resume().await })
        }
        Command::StartInterview => {
            spawn_submit(coach, Feature::Interview, |c| async move { c.start_interview().await })
        }
        Command::Feedback => {
            spawn_submit(coach, Feature::Interview, |c| async move { c.request_feedback().await })
        }
        Command::Roadmap => {
            spawn_submit(coach, Feature::Roadmap, |c| async move { c.generate_roadmap().await })
        }
        Command::Show => show_all(coach),
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
}

fn spawn_submit<F, Fut>(coach: &Arc<Coach>, feature: Feature, submit: F)
where
    F: FnOnce(Arc<Coach>) -> Fut,
    Fut: Future<Output = SubmitStatus> + Send + 'static,
{
    let fut = submit(coach.clone());
    tokio::spawn(async move {
        match fut.await {
            SubmitStatus::Skipped => println!("[{feature}] nothing to send"),
            SubmitStatus::Busy => println!("[{feature}] a request is already in flight"),
            SubmitStatus::Succeeded | SubmitStatus::Failed => {}
        }
    });
}

fn show_all(coach: &Coach) {
    print!("{}", render_profile(&coach.profile_panel()));
    print!("{}", render_chat(&coach.chat_panel()));
    print!("{}", render_resume(&coach.resume_panel()));
    print!("{}", render_interview(&coach.interview_panel()));
    print!("{}", render_roadmap(&coach.roadmap_panel()));

    let interview_busy = coach.is_busy(Feature::Interview);
    let triggers = [
        button_label(Feature::Profile, Trigger::Primary, coach.is_busy(Feature::Profile)),
        button_label(Feature::Chat, Trigger::Primary, coach.is_busy(Feature::Chat)),
        button_label(Feature::Resume, Trigger::Primary, coach.is_busy(Feature::Resume)),
        button_label(Feature::Interview, Trigger::Primary, interview_busy),
        button_label(Feature::Interview, Trigger::Secondary, interview_busy),
        button_label(Feature::Roadmap, Trigger::Primary, coach.is_busy(Feature::Roadmap)),
    ];
    println!("[{}]", triggers.join("] ["));
}

async fn render_events(coach: Arc<Coach>, mut events: broadcast::Receiver<CoachEvent>) {
    loop {
        match events.recv().await {
            Ok(CoachEvent::Started(feature, trigger)) => {
                println!("[{feature}] {}", button_label(feature, trigger, true));
            }
            // Chat output waits for the scroll notification.
            Ok(CoachEvent::Finished(Feature::Chat, _)) => {}
            Ok(CoachEvent::Finished(feature, _)) => {
                let text = match feature {
                    Feature::Profile => render_profile(&coach.profile_panel()),
                    Feature::Resume => render_resume(&coach.resume_panel()),
                    Feature::Interview => render_interview(&coach.interview_panel()),
                    Feature::Roadmap => render_roadmap(&coach.roadmap_panel()),
                    Feature::Chat => continue,
                };
                print!("{text}");
            }
            Ok(CoachEvent::ScrollToLatest) => {
                if let Some(line) = render_latest_chat(&coach.chat_panel()) {
                    println!("{line}");
                }
            }
            Err(RecvError::Lagged(skipped)) => warn!("Renderer skipped {skipped} event(s)"),
            Err(RecvError::Closed) => break,
        }
    }
}
