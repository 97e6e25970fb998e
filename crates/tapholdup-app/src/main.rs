//! Demo entry point: replays a gesture script, or the built-in tap and hold.

use tapholdup_app::{App, GestureScript, ScriptError};

fn main() {
    env_logger::init();
    log::info!("Starting TapHoldUp demo");

    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ScriptError> {
    let scripts = match std::env::args().nth(1) {
        Some(path) => vec![(path.clone(), GestureScript::load(&path)?)],
        None => vec![
            ("tap".to_string(), GestureScript::tap()),
            ("long hold".to_string(), GestureScript::long_hold()),
        ],
    };

    let app = App::new();
    for (name, script) in scripts {
        let report = app.replay(&script);
        println!("{}: {}", name, report.status);
        log::info!(
            "{}: events {:?}, {} redraws, smallest scale {:.3}",
            name,
            report.events,
            report.redraws,
            report.min_scale
        );
    }
    Ok(())
}
