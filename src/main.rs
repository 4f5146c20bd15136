use ingame_menu::backend::sdl::SdlBackend;
use ingame_menu::input_system::{HostEvent, InputSystem};
use ingame_menu::{IngameMenu, MenuAction, MenuConfig};
use sdl2::pixels::Color;
use std::time::{Duration, Instant};

// Game resolution constants
const GAME_WIDTH: u32 = 640;
const GAME_HEIGHT: u32 = 360;
const WINDOW_SCALE: u32 = 2;

/// What the host loop does after a menu action
enum HostResponse {
    Continue,
    Exit,
}

fn handle_menu_action<'a>(menu: &mut IngameMenu<'a, SdlBackend<'a>>, action: MenuAction) -> HostResponse {
    match action {
        MenuAction::SaveAndExit => {
            log::info!("Save requested, exiting");
            HostResponse::Exit
        }
        MenuAction::ReturnToGame => {
            menu.toggle();
            HostResponse::Continue
        }
        MenuAction::PreviousMenu => {
            // Reopening always lands on the root screen
            menu.toggle();
            menu.toggle();
            HostResponse::Continue
        }
        MenuAction::SoundOptions
        | MenuAction::VideoOptions
        | MenuAction::AutomapOptions
        | MenuAction::ConfigureOptions => {
            log::info!("Selected {}", action);
            HostResponse::Continue
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = MenuConfig::default_path();
    let config = MenuConfig::load_or_default(&config_path)
        .map_err(|e| format!("Failed to load menu config: {}", e))?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("In-game Menu", GAME_WIDTH * WINDOW_SCALE, GAME_HEIGHT * WINDOW_SCALE)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas.set_logical_size(GAME_WIDTH, GAME_HEIGHT).map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let mut backend = SdlBackend::new(&texture_creator, config);
    let mut menu = IngameMenu::standard();
    menu.load(&mut backend)
        .map_err(|e| format!("Failed to load menu: {}", e))?;

    let mut input = InputSystem::new();

    log::info!("Controls: ESC - toggle menu, UP/DOWN - select, RETURN - confirm");

    let mut last_frame = Instant::now();

    'running: loop {
        for event in event_pump.poll_iter() {
            match input.dispatch(&event, &mut menu) {
                Some(HostEvent::Quit) => break 'running,
                Some(HostEvent::Action(action)) => {
                    if let HostResponse::Exit = handle_menu_action(&mut menu, action) {
                        break 'running;
                    }
                }
                None => {}
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;

        menu.advance(elapsed).map_err(|e| e.to_string())?;

        canvas.set_draw_color(Color::RGB(20, 40, 30));
        canvas.clear();
        menu.render(&mut canvas)?;
        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
