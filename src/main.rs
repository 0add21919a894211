//! Flappy Box entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use flappy_box::config::Config;
    use flappy_box::renderer::{DrawCommand, draw_list};
    use flappy_box::sim::{GameOverCause, InputEvent, Simulation};

    /// Game instance holding all state
    struct Game {
        sim: Simulation,
        ctx: CanvasRenderingContext2d,
        /// Canvas pixels per world unit
        scale: f64,
        accumulator: f32,
        last_time: f64,
        /// Flaps received since the last tick
        pending: Vec<InputEvent>,
        /// Last game-over state pushed to the DOM
        shown_over: Option<bool>,
    }

    impl Game {
        fn new(sim: Simulation, ctx: CanvasRenderingContext2d, scale: f64) -> Self {
            Self {
                sim,
                ctx,
                scale,
                accumulator: 0.0,
                last_time: 0.0,
                pending: Vec::new(),
                shown_over: None,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let step = self.sim.config().tick_dt();
            let max_substeps = self.sim.config().max_substeps;
            self.accumulator += dt.min(0.1);

            let mut substeps = 0;
            while self.accumulator >= step && substeps < max_substeps {
                for event in self.pending.drain(..) {
                    self.sim.handle(event);
                }
                self.sim.tick();
                self.accumulator -= step;
                substeps += 1;
            }
        }

        /// Render the current frame
        fn render(&self) {
            let snapshot = self.sim.snapshot();
            for command in draw_list(&snapshot, self.sim.config()) {
                match command {
                    DrawCommand::FillRect { rect, color } => {
                        self.ctx.set_fill_style_str(&color.to_css());
                        self.ctx.fill_rect(
                            rect.pos.x as f64 * self.scale,
                            rect.pos.y as f64 * self.scale,
                            rect.size.x as f64 * self.scale,
                            rect.size.y as f64 * self.scale,
                        );
                    }
                }
            }
        }

        /// Update heading and restart button in DOM
        fn update_hud(&mut self) {
            let snapshot = self.sim.snapshot();
            let over = snapshot.is_over();
            if self.shown_over == Some(over) {
                return;
            }
            self.shown_over = Some(over);

            // The cause is kept until reset, so substeps after the game-over
            // tick do not hide it
            match snapshot.game_over_cause() {
                Some(GameOverCause::Floor) => log::info!("Hit the ground"),
                Some(GameOverCause::Obstacle) => log::info!("Hit a pipe"),
                None => {}
            }

            let document = web_sys::window().unwrap().document().unwrap();
            if let Some(el) = document.query_selector("h1").ok().flatten() {
                el.set_text_content(Some(if over { "Game Over!" } else { "Flappy Box" }));
            }
            if let Some(el) = document.get_element_by_id("restart") {
                let _ = el.set_attribute("class", if over { "" } else { "hidden" });
            }
        }

        /// Queue an input for the next tick
        fn push(&mut self, event: InputEvent) {
            self.pending.push(event);
        }

        /// Start a new run right away
        fn restart(&mut self) {
            self.pending.clear();
            self.sim.handle(InputEvent::Restart);
            self.accumulator = 0.0;
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Box starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        // The playfield is as large as the canvas; config only scales it
        let config = Config::load();
        let scale = canvas.width() as f64 / config.world_width as f64;

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(Simulation::new(config, seed), ctx, scale)));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(game.clone());

        request_animation_frame(game);

        log::info!("Press SPACE to flap!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "Space" {
                    event.prevent_default();
                    game.borrow_mut().push(InputEvent::Flap);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().push(InputEvent::Flap);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
                event.prevent_default();
                game.borrow_mut().push(InputEvent::Flap);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                g.sim.config().tick_dt()
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().restart();
                log::info!("Game restarted");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;

    use flappy_box::config::Config;
    use flappy_box::sim::{Autopilot, InputEvent, SimEvent, Simulation};

    /// Headless Flappy Box runner: plays a run and prints the final state as JSON
    #[derive(Debug, Parser)]
    #[command(name = "flappy-box", version, about)]
    pub struct Options {
        /// JSON file overriding the default tuning
        #[arg(long, value_name = "PATH")]
        pub config: Option<PathBuf>,
        /// Seed for obstacle generation
        #[arg(long, value_name = "N", default_value_t = 0)]
        pub seed: u64,
        /// Maximum ticks to simulate (60 per second)
        #[arg(long, value_name = "N", default_value_t = 3600)]
        pub ticks: u64,
        /// Never flap; just fall
        #[arg(long)]
        pub idle: bool,
    }

    pub fn run(options: Options) -> anyhow::Result<()> {
        let config = match &options.config {
            Some(path) => Config::load_file(path)?,
            None => Config::default(),
        };

        let mut sim = Simulation::new(config, options.seed);
        let mut flaps = 0u64;
        let mut passed = 0u64;

        for _ in 0..options.ticks {
            if !options.idle && Autopilot::should_flap(&sim.snapshot(), sim.config()) {
                sim.handle(InputEvent::Flap);
                flaps += 1;
            }
            sim.tick();
            passed += sim
                .state()
                .events
                .iter()
                .filter(|e| matches!(e, SimEvent::Retired))
                .count() as u64;
            if sim.is_over() {
                break;
            }
        }

        let state = sim.state();
        log::info!(
            "Finished after {} ticks ({:.1}s): {:?} ({:?}), {} flaps, {} obstacles cleared",
            state.ticks,
            state.ticks as f32 * sim.config().tick_dt(),
            state.phase,
            state.game_over_cause,
            flaps,
            passed
        );

        println!("{}", serde_json::to_string_pretty(state)?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Flappy Box (native, headless) starting...");

    let options = <native::Options as clap::Parser>::parse();
    native::run(options)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use clap::Parser;

    use super::native::Options;

    #[test]
    fn test_parse_defaults() {
        let options = Options::try_parse_from(["flappy-box"]).unwrap();
        assert_eq!(options.seed, 0);
        assert_eq!(options.ticks, 3600);
        assert!(!options.idle);
        assert!(options.config.is_none());
    }

    #[test]
    fn test_parse_all_flags() {
        let options = Options::try_parse_from([
            "flappy-box",
            "--seed",
            "42",
            "--ticks",
            "10",
            "--idle",
            "--config",
            "tuning.json",
        ])
        .unwrap();
        assert_eq!(options.seed, 42);
        assert_eq!(options.ticks, 10);
        assert!(options.idle);
        assert_eq!(options.config.unwrap().to_str(), Some("tuning.json"));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Options::try_parse_from(["flappy-box", "--seed", "abc"]).is_err());
        assert!(Options::try_parse_from(["flappy-box", "--ticks"]).is_err());
        assert!(Options::try_parse_from(["flappy-box", "--fast"]).is_err());
    }

    #[test]
    fn test_idle_run_ends_on_floor() {
        let options = Options::try_parse_from(["flappy-box", "--idle", "--ticks", "500"]).unwrap();
        assert!(super::native::run(options).is_ok());
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
