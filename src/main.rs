//! Death Ray entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, WheelEvent};

    use death_ray::Settings;
    use death_ray::consts::*;
    use death_ray::renderer::{RenderState, build_scene};
    use death_ray::sim::{CameraMode, GameEvent, GameState, TickInput, tick};
    use death_ray::ui;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        render_state: Option<RenderState>,
        canvas: HtmlCanvasElement,
        input: TickInput,
        last_time: f64,
        /// Wall clock at startup (ms)
        started_at: f64,
        /// Escape pressed; treated like closing the window
        quit: bool,
    }

    impl Game {
        fn new(canvas: HtmlCanvasElement, settings: Settings) -> Self {
            let viewport = Vec2::new(canvas.width() as f32, canvas.height() as f32);
            Self {
                state: GameState::new(viewport, CameraMode::default()),
                settings,
                render_state: None,
                canvas,
                input: TickInput::default(),
                last_time: 0.0,
                started_at: js_sys::Date::now(),
                quit: false,
            }
        }

        /// Match the canvas backing size to its on-page size
        fn sync_size(&mut self) -> Vec2 {
            let w = self.canvas.client_width().max(1) as u32;
            let h = self.canvas.client_height().max(1) as u32;
            if w != self.canvas.width() || h != self.canvas.height() {
                self.canvas.set_width(w);
                self.canvas.set_height(h);
                if let Some(ref mut render_state) = self.render_state {
                    render_state.resize(w, h);
                }
                log::info!("Canvas resized to {}x{}", w, h);
            }
            Vec2::new(w as f32, h as f32)
        }

        /// Run one simulation frame
        fn update(&mut self, dt: f32) {
            let viewport = self.sync_size();
            tick(&mut self.state, &self.input, dt.min(MAX_FRAME_DT), viewport);
            self.input.clear_one_shots();

            for event in self.state.drain_events() {
                match event {
                    GameEvent::CameraModeChanged(mode) => {
                        log::info!("Camera mode: {}", mode.description());
                    }
                    GameEvent::DeathRayHit => log::info!("The Death Ray got you"),
                    GameEvent::Landed { .. } | GameEvent::Reset => {}
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = build_scene(&self.state, &self.settings);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD element in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("hud") {
                if self.settings.show_hud {
                    let _ = el.set_attribute("class", "");
                    el.set_inner_html(&ui::hud_html(&ui::hud_lines(&self.state)));
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }

        fn should_close(&self) -> bool {
            self.quit || self.state.is_over()
        }

        /// Tear down like a closed window: drop the GPU surface, hide everything
        fn close(&mut self) {
            self.render_state = None;
            let _ = self.canvas.set_attribute("class", "hidden");
            if let Some(hud) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("hud"))
            {
                let _ = hud.set_attribute("class", "hidden");
            }
            let wall = (js_sys::Date::now() - self.started_at) / 1000.0;
            log::info!(
                "Session closed after {} frames ({:.1}s game time, {:.1}s wall)",
                self.state.frame,
                self.state.elapsed,
                wall
            );
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("logger init failed: {}", e).into());
        }

        log::info!("Death Ray starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let canvas: HtmlCanvasElement = match document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into().ok())
        {
            Some(canvas) => canvas,
            None => {
                log::error!("No <canvas id=\"canvas\"> on the page");
                return;
            }
        };

        let width = (canvas.client_width().max(1) as u32).max(SCREEN_WIDTH as u32 / 4);
        let height = (canvas.client_height().max(1) as u32).max(SCREEN_HEIGHT as u32 / 4);
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game::new(canvas.clone(), settings)));

        // Initialize WebGPU (WebGL fallback)
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("Failed to create device: {}", e);
                return;
            }
        }

        setup_input_handlers(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Death Ray running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down: held movement keys plus one-shot actions
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let repeat = event.repeat();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.movement.left = true,
                    "ArrowRight" => g.input.movement.right = true,
                    " " => {
                        event.prevent_default();
                        g.input.movement.jump = true;
                    }
                    "r" | "R" if !repeat => g.input.reset = true,
                    "c" | "C" if !repeat => g.input.cycle_camera = true,
                    "h" | "H" if !repeat => {
                        g.settings.show_hud = !g.settings.show_hud;
                        g.settings.save();
                    }
                    "Escape" => g.quit = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up: release held keys
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.movement.left = false,
                    "ArrowRight" => g.input.movement.right = false,
                    " " => g.input.movement.jump = false,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Tab hidden: held keys never see their keyup
        if let Some(document) = window.document() {
            let game = game.clone();
            let doc = document.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                if doc.hidden() {
                    game.borrow_mut().input.release_held();
                    log::info!("Released held keys (tab hidden)");
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().input.release_held();
                log::info!("Released held keys (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse wheel: one zoom notch per event, up zooms in
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: WheelEvent| {
                event.prevent_default();
                let dy = event.delta_y();
                if dy != 0.0 {
                    game.borrow_mut().input.wheel -= dy.signum() as f32;
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time (rAF time is in ms)
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            g.last_time = time;

            g.update(dt);
            if g.should_close() {
                g.close();
                return;
            }
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use death_ray::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use death_ray::headless;
    use death_ray::sim::{CameraMode, GameState, Level};
    use glam::Vec2;

    env_logger::init();
    log::info!("Death Ray (native) starting...");
    log::info!("Native mode has no window - playing a scripted session. Run with `trunk serve` for the web version");

    let tuning = load_tuning();
    let viewport = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut state = GameState::with_tuning(tuning, Level::demo(), viewport, CameraMode::default());

    let summary = headless::run(
        &mut state,
        &headless::demo_script(),
        1.0 / 60.0,
        120.0,
        viewport,
    );

    log::info!(
        "Session over after {} frames ({:.2}s): {} landings, {} camera switches, hit={}",
        summary.frames,
        summary.elapsed,
        summary.landings,
        summary.camera_changes,
        summary.hit
    );
}

/// Tuning from the JSON file named by `DEATH_RAY_TUNING`, defaults otherwise
#[cfg(not(target_arch = "wasm32"))]
fn load_tuning() -> death_ray::Tuning {
    use death_ray::Tuning;

    let Ok(path) = std::env::var("DEATH_RAY_TUNING") else {
        return Tuning::default();
    };

    let loaded = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()));

    match loaded {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::error!("Could not load tuning from {}: {} - using defaults", path, e);
            Tuning::default()
        }
    }
}
