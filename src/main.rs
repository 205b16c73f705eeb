use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use dotenv::dotenv;
use log::LevelFilter;
use compose::config::App;
use compose::render::Renderer;
use compose::{editor, install, Session};

const SUMMARY: &str = "Helps you write better Git commit messages.

To use, configure Git to use git-compose as the default editor:

  git-compose --install";

const READ_ERROR_SUMMARY: &str = "\n\nError: Could not read the Git commit message file.\n\n";

#[derive(Parser, Debug)]
#[command(name = "git-compose", about = SUMMARY, disable_version_flag = true)]
struct Cli {
  #[arg(short = 'v', long, help = "Show version number and exit")]
  version: bool,

  #[arg(short, long, help = "Install git-compose as your default Git editor")]
  install: bool,

  #[arg(long, help = "Enables verbose logging")]
  verbose: bool,

  #[arg(value_name = "COMMIT_MESSAGE_FILE")]
  files: Vec<PathBuf>
}

fn main() {
  dotenv().ok();

  let cli = Cli::parse();

  if cli.verbose {
    env_logger::builder()
      .filter_level(LevelFilter::Debug)
      .format_target(false)
      .format_timestamp(None)
      .init();
    log::debug!("Verbose logging enabled");
  } else {
    env_logger::init();
  }

  let app = App::new().unwrap_or_else(|err| {
    log::warn!("Failed to load config, using defaults: {err:#}");
    App::default()
  });

  process::exit(run(cli, &app));
}

fn run(cli: Cli, app: &App) -> i32 {
  if cli.install {
    return match install::run(app) {
      Ok(()) => 0,
      Err(err) => {
        eprint!("{}", err.diagnostic());
        1
      }
    };
  }

  if cli.version {
    println!("git-compose {}", env!("CARGO_PKG_VERSION"));
    return 0;
  }

  let file = match cli.files.as_slice() {
    [] => {
      // Git always passes the file, so someone ran us by hand
      return match Cli::command().print_help() {
        Ok(()) => 0,
        Err(_) => 1
      };
    },
    [file] => file.clone(),
    _ => Cli::command()
      .error(ErrorKind::TooManyValues, "expected exactly one commit message file")
      .exit()
  };

  let mut session = match Session::open(file) {
    Ok(session) => session,
    Err(err) => {
      eprintln!("{READ_ERROR_SUMMARY}{err:#}");
      return 1;
    }
  };

  match editor::run(&mut session, &Renderer::new(app)) {
    Ok(()) => 0,
    Err(err) => {
      eprintln!("Error: {err:#}");
      1
    }
  }
}
