#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process, str::FromStr};

#[cfg(target_os = "linux")]
use iced::window::settings::PlatformSpecific;
use iced::{Settings, Size};
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

use bancro_ui::{component::text, font, theme};

use bancro_gui::{
    auth::Route,
    config::{Config, ConfigError, DEFAULT_FILE_NAME},
    dir::BancroDirectory,
    gui::GUI,
    logger, VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(BancroDirectory),
    Route(Route),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: bancro [OPTIONS]

Options:
    --datadir <PATH>    Path of bancro datadir
    --route <ROUTE>     Screen to open at startup, e.g. /auth/sign-up
    -v, --version       Display bancro version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    for (i, arg) in args.iter().enumerate() {
        if arg == "--datadir" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::DatadirPath(BancroDirectory::new(PathBuf::from(a))));
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else if arg == "--route" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::Route(Route::parse(a)?));
            } else {
                return Err("missing arg to --route".into());
            }
        } else if arg.contains("--") {
            return Err(format!("unknown arg: {}", arg).into());
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let mut datadir = None;
    let mut route = Route::SignIn;
    for arg in args {
        match arg {
            Arg::DatadirPath(d) => datadir = Some(d),
            Arg::Route(r) => route = r,
        }
    }
    let datadir = match datadir {
        Some(datadir) => datadir,
        None => BancroDirectory::new_default()?,
    };
    if !datadir.exists() {
        datadir.init()?;
    }

    let config = match Config::from_file(&datadir.path().join(DEFAULT_FILE_NAME)) {
        Ok(config) => config,
        Err(ConfigError::NotFound) => Config::default(),
        Err(e) => return Err(e.into()),
    };

    let log_level = if let Ok(l) = std::env::var("LOG_LEVEL") {
        LevelFilter::from_str(&l)?
    } else {
        config.log_level()?
    };
    logger::setup_logger(log_level, &datadir)?;

    setup_panic_hook();

    let settings = Settings {
        id: Some("Bancro".to_string()),
        antialiasing: false,

        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        // Fonts are resolved from the system.
        fonts: Vec::new(),
    };

    #[allow(unused_mut)]
    let mut window_settings = iced::window::Settings {
        position: iced::window::Position::Default,
        min_size: Some(Size {
            width: 500.0,
            height: 650.0,
        }),
        ..Default::default()
    };

    #[cfg(target_os = "linux")]
    {
        window_settings.platform_specific = PlatformSpecific {
            application_id: "Bancro".to_string(),
            ..Default::default()
        };
    }

    if let Err(e) = iced::application(GUI::title, GUI::update, GUI::view)
        .theme(|_| theme::Theme::default())
        .subscription(GUI::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || GUI::new(route))
    {
        error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use bancro_gui::auth::route::Mode;

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["--meth".into()]).is_err());
        assert!(parse_args(vec!["--datadir".into()]).is_err());
        assert!(parse_args(vec!["--route".into()]).is_err());
        assert!(parse_args(vec!["--route".into(), "/auth/unknown".into()]).is_err());
        assert_eq!(
            Some(vec![Arg::Route(Route::Verification(Some(Mode::Reset)))]),
            parse_args(vec!["--route".into(), "/auth/verification?mode=reset".into()]).ok()
        );
        assert_eq!(
            Some(vec![
                Arg::DatadirPath(BancroDirectory::new(PathBuf::from("hello"))),
                Arg::Route(Route::SignUp)
            ]),
            parse_args(
                "--datadir hello --route /auth/sign-up"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect()
            )
            .ok()
        );
        assert_eq!(
            Some(vec![
                Arg::Route(Route::SignUp),
                Arg::DatadirPath(BancroDirectory::new(PathBuf::from("hello"))),
            ]),
            parse_args(
                "--route /auth/sign-up --datadir hello"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect()
            )
            .ok()
        );
    }
}
