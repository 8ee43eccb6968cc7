use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use showcase::constants::*;
use showcase::content::Content;
use showcase::counter::{AnimatedCounter, StatRing};
use showcase::driver::{self, DriverHandle};
use showcase::engine::{Card, Control, Render, Showcase};
use showcase::{service, testimonial};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Section {
    Services,
    Testimonials,
    All,
}

impl Section {
    fn services(self) -> bool {
        matches!(self, Section::Services | Section::All)
    }

    fn testimonials(self) -> bool {
        matches!(self, Section::Testimonials | Section::All)
    }
}

/// Runs the service slider, testimonial carousel and stat counters of the site.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Which carousel(s) to run
    #[arg(long, value_enum, default_value_t = Section::All)]
    section: Section,

    /// How long to run before exiting (ignored in window mode)
    #[arg(long, default_value_t = 20.0)]
    seconds: f32,

    /// Drive the carousels with wall-clock timers instead of a simulated frame clock
    #[arg(long)]
    realtime: bool,

    /// TOML file replacing the built-in services, testimonials or stats
    #[arg(long)]
    content: Option<PathBuf>,

    /// Start with auto-advance switched off
    #[arg(long)]
    paused: bool,

    /// Open a window instead of logging to the terminal
    #[cfg(feature = "window")]
    #[arg(long)]
    window: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    anyhow::ensure!(
        cli.seconds.is_finite() && cli.seconds >= 0.0,
        "--seconds must be a non-negative number"
    );

    let content = match &cli.content {
        Some(path) => Content::load(path)
            .with_context(|| format!("Error loading content from '{}'", path.display()))?,
        None => Content::default(),
    };

    #[cfg(feature = "window")]
    if cli.window {
        showcase::window::run(build_showcases(&cli, &content)?, build_stats(&content));
        return Ok(());
    }

    if cli.realtime {
        run_realtime(&cli, &content)
    } else {
        run_simulated(&cli, &content)
    }
}

fn build_showcases(cli: &Cli, content: &Content) -> Result<Vec<Box<dyn Showcase>>> {
    let mut showcases: Vec<Box<dyn Showcase>> = Vec::new();
    if cli.section.services() {
        let showcase = service::showcase(content.services.clone()).context("Error creating service slider")?;
        showcases.push(Box::new(showcase));
    }
    if cli.section.testimonials() {
        let showcase = testimonial::showcase(content.testimonials.clone())
            .context("Error creating testimonial carousel")?;
        showcases.push(Box::new(showcase));
    }
    if cli.paused {
        for showcase in showcases.iter_mut() {
            showcase.control(Control::TogglePlay)?;
        }
    }
    Ok(showcases)
}

fn build_stats(content: &Content) -> Vec<(AnimatedCounter, StatRing, String)> {
    content
        .stats
        .iter()
        .enumerate()
        .map(|(i, stat)| (AnimatedCounter::new(&stat.number), StatRing::new(i), stat.label.clone()))
        .collect()
}

fn titles(cards: &[Card]) -> String {
    cards.iter().filter_map(Card::title).collect::<Vec<_>>().join(" | ")
}

// Fixed-step loop, same frame clock every run
fn run_simulated(cli: &Cli, content: &Content) -> Result<()> {
    let mut showcases = build_showcases(cli, content)?;
    let mut stats = build_stats(content);

    for showcase in showcases.iter() {
        let view = showcase.view();
        info!(showcase = showcase.name(), pages = view.indicators.len(), "showing {}", titles(&view.cards));
    }

    // The stats row is on screen from the first frame
    for (counter, ring, _) in stats.iter_mut() {
        counter.observe(1.0);
        ring.observe(1.0);
    }

    let frames = (cli.seconds / FRAME_TIME).round() as u64;
    let frame_duration = Duration::from_secs_f32(FRAME_TIME);
    let mut clock = 0.0f32;

    for _ in 0..frames {
        let dt = FRAME_TIME;
        clock += dt;

        for showcase in showcases.iter_mut() {
            if showcase.update(dt) {
                let view = showcase.view();
                info!(
                    at = %format!("{clock:.2}s"),
                    showcase = showcase.name(),
                    page = showcase.current_page(),
                    "showing {}",
                    titles(&view.cards)
                );
            }
        }

        for (counter, ring, label) in stats.iter_mut() {
            let was_finished = counter.is_finished();
            counter.update(frame_duration);
            ring.update(dt);
            if counter.is_finished() && !was_finished {
                info!(at = %format!("{clock:.2}s"), stat = %label, "counted to {}", counter.display());
            }
        }
    }

    for (counter, ring, label) in &stats {
        info!(stat = %label, ring = %format!("{:.2}", ring.fill()), "{}", counter.display());
    }
    Ok(())
}

fn watch_pages<T>(name: &'static str, handle: &DriverHandle, items: Vec<T>, page_size: usize)
where
    T: Render + Send + 'static,
{
    let mut pages = handle.subscribe();
    tokio::spawn(async move {
        while pages.changed().await.is_ok() {
            let state = *pages.borrow_and_update();
            let cards: Vec<Card> = items
                .chunks(page_size)
                .nth(state.current_page)
                .unwrap_or(&[])
                .iter()
                .map(Render::card)
                .collect();
            info!(
                showcase = name,
                page = state.current_page,
                auto = state.auto_advancing,
                "showing {}",
                titles(&cards)
            );
        }
    });
}

fn run_realtime(cli: &Cli, content: &Content) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Error starting async runtime")?;

    runtime.block_on(async {
        let mut handles = Vec::new();

        if cli.section.services() {
            let selector = service::engine::selector(content.services.clone())?;
            let handle = driver::spawn(service::engine::NAME, selector);
            watch_pages(service::engine::NAME, &handle, content.services.clone(), SERVICE_PAGE_SIZE);
            handles.push(handle);
        }
        if cli.section.testimonials() {
            let selector = testimonial::engine::selector(content.testimonials.clone())?;
            let handle = driver::spawn(testimonial::engine::NAME, selector);
            watch_pages(
                testimonial::engine::NAME,
                &handle,
                content.testimonials.clone(),
                TESTIMONIAL_PAGE_SIZE,
            );
            handles.push(handle);
        }

        if cli.paused {
            for handle in &handles {
                handle.pause().await?;
            }
        }

        tokio::time::sleep(Duration::from_secs_f32(cli.seconds)).await;

        for handle in handles {
            handle.unmount().await;
        }
        info!("all showcases unmounted");
        Ok::<_, anyhow::Error>(())
    })
}
