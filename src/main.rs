//! Arcade Shell entry point
//!
//! Handles platform-specific initialization and runs the update loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_shell {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use arcade_shell::audio::MusicPlayer;
    use arcade_shell::consts::MUSIC_ASSET;
    use arcade_shell::runner::GameRunner;
    use arcade_shell::{Settings, Shell, TickOutcome};

    // The precompiled engine bundle is loaded by the page before this module
    // starts; it exposes an async initializer and the runner class on the
    // global scope.
    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_name = initEngine)]
        async fn init_engine();

        /// Opaque handle to the engine's game runner.
        #[wasm_bindgen(js_name = GameRunner)]
        pub type EngineHandle;

        #[wasm_bindgen(constructor, js_class = "GameRunner")]
        fn new() -> EngineHandle;

        #[wasm_bindgen(method, js_class = "GameRunner")]
        fn is_expecting_text(this: &EngineHandle) -> bool;

        #[wasm_bindgen(method, js_class = "GameRunner")]
        fn handle_key(this: &EngineHandle, key: char);

        #[wasm_bindgen(method, js_class = "GameRunner")]
        fn update(this: &EngineHandle);

        #[wasm_bindgen(method, js_class = "GameRunner")]
        fn has_stopped(this: &EngineHandle) -> bool;
    }

    impl GameRunner for EngineHandle {
        fn is_expecting_text(&self) -> bool {
            EngineHandle::is_expecting_text(self)
        }

        fn handle_key(&mut self, key: char) {
            EngineHandle::handle_key(self, key);
        }

        fn update(&mut self) {
            EngineHandle::update(self);
        }

        fn has_stopped(&self) -> bool {
            EngineHandle::has_stopped(self)
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Arcade shell starting...");

        let settings = Settings::load();
        // Write back so the first visit persists the defaults.
        settings.save();

        // One-time engine init, then the single runner for the session. No
        // retry: a failed load leaves the page dead, same as before.
        let load_start = js_sys::Date::now();
        init_engine().await;
        let shell = Rc::new(RefCell::new(Shell::new(EngineHandle::new())));

        log::info!(
            "Engine module loaded in {:.0}ms",
            js_sys::Date::now() - load_start
        );

        let music = Rc::new(MusicPlayer::start(MUSIC_ASSET, &settings));

        setup_key_handlers(shell.clone());
        if settings.mute_on_blur {
            setup_blur_mute(music.clone());
        }

        start_ticker(shell, settings.effective_tick_interval_ms());

        log::info!("Arcade shell running!");
    }

    fn setup_key_handlers(shell: Rc<RefCell<Shell<EngineHandle>>>) {
        let window = web_sys::window().expect("no window");

        {
            let shell = shell.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                shell.borrow_mut().key_down(&event.code());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                shell.borrow_mut().key_up(&event.code());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Start the fixed-interval update loop. The interval handle lives in a
    /// shared cell so the tick callback can clear it when the engine stops;
    /// there is never more than one interval, and stopping twice is a no-op.
    fn start_ticker(shell: Rc<RefCell<Shell<EngineHandle>>>, interval_ms: u32) {
        let window = web_sys::window().expect("no window");
        let handle: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));

        let closure = {
            let handle = handle.clone();
            Closure::<dyn FnMut()>::new(move || {
                if shell.borrow_mut().tick() == TickOutcome::Stopped {
                    if let Some(id) = handle.borrow_mut().take() {
                        if let Some(window) = web_sys::window() {
                            window.clear_interval_with_handle(id);
                        }
                        log::info!("Engine stopped, update loop halted");
                    }
                }
            })
        };

        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                interval_ms as i32,
            )
            .expect("failed to start update loop");
        *handle.borrow_mut() = Some(id);
        closure.forget();

        log::info!("Update loop running every {interval_ms}ms");
    }

    /// Mute music while the window is blurred or the tab is hidden.
    fn setup_blur_mute(music: Rc<MusicPlayer>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        {
            let music = music.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let hidden = document_clone.visibility_state() == web_sys::VisibilityState::Hidden;
                music.set_muted(hidden);
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        {
            let music = music.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                music.set_muted(true);
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                music.set_muted(false);
            });
            let _ =
                window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_shell::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Arcade shell (native) starting...");
    log::info!("The shell targets the browser - build for wasm32 to drive a real engine");

    // Drive the pump against a scripted engine as a quick self-check.
    println!("\nRunning shell self-check...");
    self_check();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn self_check() {
    use arcade_shell::runner::GameRunner;
    use arcade_shell::{Shell, TickOutcome};

    struct ScriptedEngine {
        commands: Vec<char>,
        frames: u32,
        max_frames: u32,
    }

    impl GameRunner for ScriptedEngine {
        fn is_expecting_text(&self) -> bool {
            false
        }
        fn handle_key(&mut self, key: char) {
            self.commands.push(key);
        }
        fn update(&mut self) {
            self.frames += 1;
        }
        fn has_stopped(&self) -> bool {
            self.frames >= self.max_frames
        }
    }

    let mut shell = Shell::new(ScriptedEngine {
        commands: Vec::new(),
        frames: 0,
        max_frames: 3,
    });
    shell.key_down("ArrowRight");

    let mut ticks = 0;
    while shell.tick() == TickOutcome::Running {
        ticks += 1;
        assert!(ticks < 10, "engine never stopped");
    }

    assert_eq!(shell.runner().commands, vec!['d', 'd', 'd']);
    println!("✓ Shell self-check passed!");
}
