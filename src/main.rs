use std::sync::mpsc::{self, TryRecvError};
use std::thread;

use clap::Parser;
use raylib::prelude::*;
use tracing::{error, info, trace, warn};
use tracing_subscriber::EnvFilter;

mod animator;
mod constants;
mod loader;
mod slide;
mod spinner;
mod store;
mod texture_loader;

use crate::animator::SequenceAnimator;
use crate::constants::*;
use crate::loader::ImageListLoader;
use crate::slide::Slide;
use crate::store::HttpStore;
use crate::texture_loader::FetchedImage;

/// Looping image sequence viewer driven by a remote document store.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Base URL of the document store
    store_url: String,

    /// Collection holding the image documents
    #[arg(long, default_value = "images")]
    collection: String,

    /// Time each image stays on screen, in milliseconds
    #[arg(long, default_value_t = DEFAULT_ITEM_DURATION_MS)]
    duration: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    anyhow::ensure!(args.duration > 0, "duration must be positive");
    let item_duration = args.duration as f32 / 1000.0;

    // The store client is built here and owns the only outbound connection;
    // it lives exactly as long as the one-shot fetch below.
    let loader = ImageListLoader::new(HttpStore::new(&args.store_url), &args.collection);

    // Fetch off the render thread so the window can show the loading
    // indicator while the store round-trip is in flight. The result arrives
    // over a channel polled once per frame.
    let (tx, rx) = mpsc::channel::<Vec<FetchedImage>>();
    thread::spawn(move || {
        let _ = tx.send(fetch_images(loader));
    });

    let (mut rl, rl_thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Image Sequence")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut slides: Vec<Slide> = Vec::new();
    let mut animator = SequenceAnimator::new();
    let mut pending = Some(rx);
    let mut spinner_angle = 0.0_f32;
    let mut last_frame: Option<usize> = None;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        // 1. Hand over the fetch result once it lands
        if let Some(receiver) = &pending {
            match receiver.try_recv() {
                Ok(fetched) => {
                    for image in &fetched {
                        match texture_loader::texture_from_bytes(&mut rl, &rl_thread, image) {
                            Ok(texture) => slides.push(Slide::new(texture, image.source.clone())),
                            Err(e) => warn!("skipping undisplayable image: {e:#}"),
                        }
                    }
                    if slides.is_empty() {
                        warn!("no images available, staying in loading state");
                    } else {
                        info!(count = slides.len(), "image sequence ready");
                    }
                    animator.configure(slides.len(), item_duration);
                    pending = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => pending = None,
            }
        }

        // 2. Advance the driver
        animator.update(dt);
        spinner_angle = (spinner_angle + dt * SPINNER_SPEED) % 360.0;

        let current = animator.current_frame();
        if current != last_frame {
            if let Some(index) = current {
                trace!(index, image = %slides[index].source, "frame advanced");
            }
            last_frame = current;
        }

        // 3. Draw the selected slide, or the loading indicator
        let mut d = rl.begin_drawing(&rl_thread);
        d.clear_background(Color::BLACK);

        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;

        match current {
            Some(index) => {
                let area = Rectangle::new(
                    screen_width * (1.0 - DISPLAY_FACTOR) * 0.5,
                    screen_height * (1.0 - DISPLAY_FACTOR) * 0.5,
                    screen_width * DISPLAY_FACTOR,
                    screen_height * DISPLAY_FACTOR,
                );
                slides[index].draw(&mut d, area);
            }
            None => {
                spinner::draw_loading_indicator(
                    &mut d,
                    Vector2::new(screen_width * 0.5, screen_height * 0.5),
                    spinner_angle,
                );
            }
        }
    } // End main loop

    animator.stop();
    Ok(())
}

/// Runs the one-shot load on a current-thread runtime: the image list first,
/// then the bytes of every referenced image. Any failure along the way has
/// already been absorbed and logged by the time this returns.
fn fetch_images(loader: ImageListLoader<HttpStore>) -> Vec<FetchedImage> {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("failed to start fetch runtime: {e}");
            return Vec::new();
        }
    };
    runtime.block_on(async {
        let refs = loader.load_images().await;
        let client = reqwest::Client::new();
        texture_loader::download_images(&client, &refs).await
    })
}
