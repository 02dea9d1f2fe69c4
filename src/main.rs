use copter::build_info;
use copter::core::{FrameClock, GameConfig};
use copter::input::{self, LiftLatch, ReleaseMode};
use copter::logging;
use copter::session::{process_input, tick, GameSession};
use copter::sprite::Sprite;
use copter::ui::{self, viewport::Viewport};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    config_path: Option<PathBuf>,
    seed: Option<u64>,
}

#[derive(Debug, PartialEq)]
enum CliAction {
    Run(CliArgs),
    Version,
    Help,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let cli = match parse_args(&args) {
        Ok(CliAction::Run(cli)) => cli,
        Ok(CliAction::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Ok(CliAction::Help) => {
            print_help();
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'copter --help' for usage.");
            std::process::exit(1);
        }
    };

    let log_path = logging::init();

    let config = match GameConfig::load(cli.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Could not load config: {}", e);
            std::process::exit(1);
        }
    };

    let sprite = Sprite::load_or_fallback(config.sprite_path.as_deref());
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    log::info!(
        "{} starting, seed {:?}, log {:?}",
        build_info::version_line(),
        cli.seed,
        log_path
    );

    enable_raw_mode()?;
    let reports_release = matches!(supports_keyboard_enhancement(), Ok(true));
    let result = run_terminal(config, sprite.as_ref(), reports_release, &mut rng);
    let restored = restore_terminal(reports_release);

    if let Err(e) = &result {
        log::error!("Game loop failed: {}", e);
    }
    log::info!("Exiting");
    result.and(restored)
}

fn parse_args(args: &[String]) -> Result<CliAction, String> {
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => return Ok(CliAction::Version),
            "--help" | "-h" => return Ok(CliAction::Help),
            "--config" | "-c" => {
                let path = args.get(i + 1).ok_or("--config needs a path")?;
                cli.config_path = Some(PathBuf::from(path));
                i += 1;
            }
            "--seed" | "-s" => {
                let value = args.get(i + 1).ok_or("--seed needs a number")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                cli.seed = Some(seed);
                i += 1;
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(CliAction::Run(cli))
}

fn print_help() {
    println!("Copter - fly the helicopter through the cave\n");
    println!("Usage: copter [options]\n");
    println!("Options:");
    println!("  -c, --config <path>  Load settings from a JSON config file");
    println!("  -s, --seed <n>       Seed the terrain generator for a repeatable run");
    println!("  -v, --version        Show version information");
    println!("  -h, --help           Show this help message");
}

/// Enter the alternate screen and run until the player quits. Raw mode is
/// already on; the caller restores the terminal whatever this returns.
fn run_terminal(
    config: GameConfig,
    sprite: Option<&Sprite>,
    reports_release: bool,
    rng: &mut StdRng,
) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    if reports_release {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;

    let mode = if reports_release {
        ReleaseMode::KeyRelease
    } else {
        ReleaseMode::Timed
    };
    log::info!("Lift release detection: {:?}", mode);
    let mut latch = LiftLatch::new(mode, &config);
    let mut session = GameSession::new(config, rng);

    game_loop(&mut terminal, &mut session, sprite, &mut latch, rng)
}

fn game_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut GameSession,
    sprite: Option<&Sprite>,
    latch: &mut LiftLatch,
    rng: &mut StdRng,
) -> io::Result<()> {
    let mut clock = FrameClock::new(session.config.tick_interval());
    let mut viewport = Viewport::new(
        Rect::default(),
        session.config.window_width,
        session.config.window_height,
    );

    while session.running {
        // Drain everything that arrived since the last tick
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            if let Some(input) = input::translate(&event, &viewport) {
                let input = latch.filter(input, Instant::now());
                process_input(session, input, rng);
            }
        }
        if let Some(release) = latch.poll_release(Instant::now()) {
            process_input(session, release, rng);
        }

        tick(session, rng);

        terminal.draw(|frame| {
            viewport = ui::draw(frame, session, sprite);
        })?;

        clock.wait();
    }

    Ok(())
}

/// Undo every terminal mode change, attempting all of them even if one fails.
fn restore_terminal(reports_release: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    let popped = if reports_release {
        execute!(stdout, PopKeyboardEnhancementFlags)
    } else {
        Ok(())
    };
    let left = execute!(
        stdout,
        DisableMouseCapture,
        LeaveAlternateScreen,
        crossterm::cursor::Show
    );
    let raw = disable_raw_mode();
    popped.and(left).and(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("copter")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_args_runs_with_defaults() {
        assert_eq!(
            parse_args(&args(&[])),
            Ok(CliAction::Run(CliArgs::default()))
        );
    }

    #[test]
    fn test_config_and_seed() {
        let parsed = parse_args(&args(&["--config", "my.json", "--seed", "42"]));
        assert_eq!(
            parsed,
            Ok(CliAction::Run(CliArgs {
                config_path: Some(PathBuf::from("my.json")),
                seed: Some(42),
            }))
        );
    }

    #[test]
    fn test_version_and_help() {
        assert_eq!(parse_args(&args(&["--version"])), Ok(CliAction::Version));
        assert_eq!(parse_args(&args(&["-h"])), Ok(CliAction::Help));
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse_args(&args(&["--seed", "abc"])).is_err());
        assert!(parse_args(&args(&["--seed"])).is_err());
        assert!(parse_args(&args(&["--config"])).is_err());
        assert!(parse_args(&args(&["--fly"])).is_err());
    }
}
