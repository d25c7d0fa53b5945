use dmg_core::cartridge::Cartridge;
use dmg_core::prelude::Machine;
use dmg_core::system::Console;

mod audio;
mod emulator;
mod input;
mod overlay;
mod settings;
mod video;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let rom_path = args.get(1).unwrap_or_else(|| {
        eprintln!("Usage: dmg <rom-path> [--scale N] [--fps]");
        std::process::exit(1);
    });

    let mut settings = settings::Settings::load();
    if let Some(scale) = parse_scale_arg(&args) {
        settings.scale = scale;
    }
    let show_fps = args.iter().any(|a| a == "--fps");

    let cartridge = Cartridge::from_path(rom_path).unwrap_or_else(|e| {
        eprintln!("Failed to load {rom_path}: {e}");
        std::process::exit(1);
    });
    log::info!("loaded {}", cartridge.title());

    let save_path = std::path::Path::new(rom_path).with_extension("sav");
    let mut console = Console::new(cartridge);
    if let Ok(data) = std::fs::read(&save_path) {
        console.load_ram(&data);
    }

    let key_map = input::build_key_map(console.input_map(), &settings);
    console.reset();
    emulator::run(&mut console, &key_map, settings.scale, show_fps);

    if let Some(data) = console.save_ram() {
        if let Err(e) = std::fs::write(&save_path, data) {
            eprintln!("Warning: failed to save battery RAM: {e}");
        }
    }

    settings.save();
}

fn parse_scale_arg(args: &[String]) -> Option<u32> {
    args.windows(2).find_map(|w| if w[0] == "--scale" { w[1].parse().ok() } else { None })
}
