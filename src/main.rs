//! Angler Raid entry point
//!
//! In the browser this wires the canvas, keyboard and animation loop to the
//! simulation. Natively it runs a scripted headless session and prints a
//! summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use angler_raid::{Settings, Tuning};
    use angler_raid::audio::AudioManager;
    use angler_raid::platform::web::CanvasSurface;
    use angler_raid::platform::{FrameClock, Keyboard};
    use angler_raid::renderer;
    use angler_raid::sim::World;

    /// Everything the browser callbacks share
    struct Host {
        world: World,
        surface: Option<CanvasSurface>,
        audio: AudioManager,
        keyboard: Keyboard,
        clock: FrameClock,
        settings: Settings,
    }

    impl Host {
        fn new(seed: u64, surface: Option<CanvasSurface>, width: f32, height: f32) -> Self {
            let settings = Settings::load();
            Self {
                world: session(&settings, seed, width, height),
                surface,
                audio: AudioManager::new(&settings),
                keyboard: Keyboard::default(),
                clock: FrameClock::default(),
                settings,
            }
        }

        /// Replace the world with a fresh session
        fn start_session(&mut self, seed: u64, width: f32, height: f32) {
            self.world = session(&self.settings, seed, width, height);
        }

        /// One animation frame: update, draw, then play cues
        fn frame(&mut self, time: f64) {
            let dt = self.clock.delta(time);
            let input = self.keyboard.take_input();
            self.world.update(&input, dt);

            if let Some(surface) = self.surface.as_mut() {
                renderer::draw(&self.world, surface);
            }

            for cue in self.world.drain_cues() {
                self.audio.play(cue);
            }
        }

        fn toggle_mute(&mut self) {
            self.settings.muted = !self.settings.muted;
            self.audio.apply_settings(&self.settings);
            self.settings.save();
            log::info!("Muted: {}", self.settings.muted);
        }
    }

    /// New world sized to the canvas, with the player's preferences applied
    fn session(settings: &Settings, seed: u64, width: f32, height: f32) -> World {
        let tuning = Tuning {
            width,
            height,
            ..Default::default()
        };
        let mut world = World::with_tuning(&tuning, seed);
        settings.apply_to(&mut world);
        world
    }

    /// Match the canvas backing store to its CSS size
    fn fit_canvas(canvas: &HtmlCanvasElement) -> (f32, f32) {
        let width = canvas.client_width().max(1) as u32;
        let height = canvas.client_height().max(1) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        (width as f32, height as f32)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Angler Raid starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let Some(canvas) = document
            .get_element_by_id("canvas1")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas1 element");
            return;
        };

        let (width, height) = fit_canvas(&canvas);
        let surface = CanvasSurface::new(&canvas, document.clone());
        if surface.is_none() {
            log::error!("Canvas 2D context unavailable - drawing disabled");
        }

        let seed = js_sys::Date::now() as u64;
        let host = Rc::new(RefCell::new(Host::new(seed, surface, width, height)));
        log::info!("Session started with seed: {}", host.borrow().world.seed);

        setup_input_handlers(&window, host.clone(), canvas.clone());
        setup_resize(&window, host.clone(), canvas);

        request_animation_frame(host);
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        host: Rc<RefCell<Host>>,
        canvas: HtmlCanvasElement,
    ) {
        // Key down
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut h = host.borrow_mut();
                h.audio.resume();
                let key = event.key();
                if h.keyboard.key_down(&key) {
                    event.prevent_default();
                    return;
                }
                match key.as_str() {
                    "m" | "M" => h.toggle_mute(),
                    "r" | "R" | "Enter" if h.world.game_over => {
                        let seed = js_sys::Date::now() as u64;
                        let (width, height) = (canvas.width() as f32, canvas.height() as f32);
                        h.start_session(seed, width, height);
                        log::info!("Session restarted with seed: {}", h.world.seed);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                host.borrow_mut().keyboard.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur (click outside)
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let h = &mut *host.borrow_mut();
                h.keyboard.release_all();
                h.clock.reset();
                if h.settings.mute_on_blur {
                    h.audio.set_muted(true, &h.settings);
                }
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Focus regained: restore the configured volume
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let h = &mut *host.borrow_mut();
                h.audio.apply_settings(&h.settings);
            });
            let _ = window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(window: &web_sys::Window, host: Rc<RefCell<Host>>, canvas: HtmlCanvasElement) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = fit_canvas(&canvas);
            host.borrow_mut().world.resize(width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(host, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>, time: f64) {
        host.borrow_mut().frame(time);

        request_animation_frame(host);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use anyhow::{Context, Result, anyhow};
    use clap::Parser;

    use angler_raid::Tuning;
    use angler_raid::consts::FRAME_MS;
    use angler_raid::platform::Keyboard;
    use angler_raid::renderer::{self, CommandList};
    use angler_raid::sim::{Cue, World};

    #[derive(Parser)]
    #[command(name = "angler-raid")]
    #[command(about = "Run a scripted headless Angler Raid session and print a summary")]
    struct Args {
        /// Session seed
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Simulated seconds to run (the session may end earlier)
        #[arg(long, default_value_t = 35.0)]
        seconds: f32,
        /// JSON tuning file overriding world defaults
        #[arg(long)]
        tuning: Option<PathBuf>,
        /// Fire only on presses, never while held
        #[arg(long)]
        no_autofire: bool,
    }

    /// Scripted pilot: fire held throughout, sweeping up and down every second
    fn script(keys: &mut Keyboard, elapsed_ms: f32) {
        let phase = (elapsed_ms / 1000.0) as u32 % 2;
        if phase == 0 {
            keys.key_up("ArrowUp");
            keys.key_down("ArrowDown");
        } else {
            keys.key_up("ArrowDown");
            keys.key_down("ArrowUp");
        }
        keys.key_down(" ");
    }

    pub fn run() -> Result<()> {
        let args = Args::parse();
        if !(args.seconds > 0.0) {
            return Err(anyhow!("--seconds must be positive, got {}", args.seconds));
        }

        let tuning = match &args.tuning {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading tuning file {}", path.display()))?;
                Tuning::from_json(&json)
                    .with_context(|| format!("loading tuning file {}", path.display()))?
            }
            None => Tuning::default(),
        };

        let mut world = World::with_tuning(&tuning, args.seed);
        world.auto_fire_enabled = !args.no_autofire;

        let mut keys = Keyboard::default();
        let mut surface = CommandList::default();
        let mut cue_counts = [0usize; Cue::ALL.len()];
        let mut frames = 0u32;
        let mut elapsed = 0.0f32;
        let limit_ms = args.seconds * 1000.0;

        while elapsed < limit_ms {
            script(&mut keys, elapsed);
            let input = keys.take_input();
            world.update(&input, FRAME_MS);
            surface.clear_commands();
            renderer::draw(&world, &mut surface);
            for cue in world.drain_cues() {
                if let Some(slot) = Cue::ALL.iter().position(|c| *c == cue) {
                    cue_counts[slot] += 1;
                }
            }
            elapsed += FRAME_MS;
            frames += 1;
        }

        println!("=== SESSION SUMMARY ===");
        println!("  Seed:        {}", world.seed);
        println!("  Frames:      {frames} ({:.1}s simulated)", elapsed / 1000.0);
        println!("  Score:       {}", world.score);
        match world.outcome() {
            Some(outcome) => println!("  Outcome:     {outcome:?}"),
            None => println!("  Outcome:     still running"),
        }
        println!("  Ammo:        {}/{}", world.ammo.rounds(), world.ammo.max());
        println!(
            "  On screen:   {} enemies, {} particles, {} explosions",
            world.enemies.len(),
            world.particles.len(),
            world.explosions.len()
        );
        println!("  Last frame:  {} sprite blits", surface.sprite_count());
        println!("  Cues:");
        for (cue, count) in Cue::ALL.iter().zip(cue_counts) {
            println!("    {:<10} {count}", cue.as_str());
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
