//! Magnets entry point
//!
//! Handles platform-specific initialization and runs the render loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, PointerEvent};

    use magnets::renderer::{Letterbox, RenderState};
    use magnets::view::Action;
    use magnets::{MagnetsScreen, Settings, Strings};

    /// App instance holding all state
    struct App {
        screen: MagnetsScreen,
        render_state: Option<RenderState>,
        /// Maps CSS-pixel pointer coordinates to view coordinates
        pointer_letterbox: Letterbox,
    }

    impl App {
        fn pointer_to_view(&self, event: &PointerEvent) -> Vec2 {
            self.pointer_letterbox
                .surface_to_view(Vec2::new(event.offset_x() as f32, event.offset_y() as f32))
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = self.screen.vertices();
            if let Some(ref mut render_state) = self.render_state {
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
    }

    /// Describe the canvas controls for assistive technology
    fn describe_controls(canvas: &HtmlCanvasElement, screen: &MagnetsScreen) {
        let panel = screen.view().control_panel();
        let buttons: Vec<&str> = [Action::FlipPolarity, Action::MoveMagnet, Action::AddMagnet]
            .iter()
            .filter_map(|&action| panel.label(action))
            .collect();
        let description = format!(
            "{}: {}; {}",
            panel.title(),
            buttons.join(", "),
            screen.view().reset_all_label()
        );
        let _ = canvas.set_attribute("aria-label", &description);
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Magnets starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        settings.save();
        let seed = settings.effective_seed(js_sys::Date::now() as u64);
        let screen = MagnetsScreen::new(&settings, &Strings::english(), seed);
        describe_controls(&canvas, &screen);

        let layout = settings.layout_bounds();
        let app = Rc::new(RefCell::new(App {
            screen,
            render_state: None,
            pointer_letterbox: Letterbox::new(layout, client_w as f32, client_h as f32),
        }));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height, layout).await {
            Ok(render_state) => app.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Failed to create device: {}", e),
        }

        setup_pointer_handlers(&canvas, app.clone());

        // Start render loop
        request_animation_frame(app);

        log::info!("Magnets running!");
    }

    fn setup_pointer_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Press: buttons fire, magnets start dragging
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let mut a = app.borrow_mut();
                let point = a.pointer_to_view(&event);
                if let Some(action) = a.screen.pointer_down(point) {
                    log::info!("{:?} pressed", action);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Drag
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let mut a = app.borrow_mut();
                let point = a.pointer_to_view(&event);
                a.screen.pointer_move(point);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Release (or the browser cancelled the gesture)
        for event_name in ["pointerup", "pointercancel", "pointerleave"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                app.borrow_mut().screen.pointer_up();
            });
            let _ = canvas
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            render_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn render_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().render();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Magnets (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the interactive version");

    run_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the screen through every control headlessly and log what happens
#[cfg(not(target_arch = "wasm32"))]
fn run_demo() {
    use magnets::view::Action;
    use magnets::{MagnetsScreen, Settings, Strings};

    let settings = Settings::load();
    let seed = settings.effective_seed(
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default(),
    );
    let mut screen = MagnetsScreen::new(&settings, &Strings::english(), seed);

    let script = [
        Action::FlipPolarity,
        Action::MoveMagnet,
        Action::AddMagnet,
        Action::AddMagnet,
        Action::AddMagnet,
        Action::FlipPolarity,
    ];
    for action in script {
        screen.apply(action);
        let magnet = screen.model().bar_magnet();
        log::info!(
            "{:?}: magnet at ({:.1}, {:.1}) facing {:.4} rad, {} added, {} vertices",
            action,
            magnet.position().x,
            magnet.position().y,
            magnet.orientation(),
            screen.model().added_bar_magnets().len(),
            screen.vertices().len()
        );
    }

    screen.apply(Action::ResetAll);
    println!(
        "After reset: {} added magnets, {} added nodes, orientation {}",
        screen.model().added_bar_magnets().len(),
        screen.view().added_bar_magnet_nodes().len(),
        screen.model().bar_magnet().orientation()
    );
}
