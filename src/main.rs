use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rationals::config::Config;
use rationals::math::base::NumberBase;
use rationals::session::State;

// checked when no expression is given
const DEMO: &[&str] = &[
    "1/2 == 2000000000/4000000000",
    "2/1",
    "-2/4",
    "117/1098",
    "1/2 - 1/3",
    "1/2 + 1/3",
    "1/-2 == -1/2",
    "1/2 * 1/3",
    "1/2 / 1/4",
    "1/2 < 2/3",
    "3/9 < 1/2",
    "1/2 in 1/3..2/3",
    "912016490186296920119201192141970416029/1824032980372593840238402384283940832058 == 1/2",
];

#[derive(Parser)]
#[command(version, about = "Exact rational arithmetic")]
pub struct Args {
    /// `1/2 + 1/3`, `1/2 in 1/3..2/3`, `x = 5/6`, ... Runs the demonstration when left out.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    expression: Vec<String>,
    #[arg(short, long)]
    base: Option<NumberBase>,
    /// Also print a decimal approximation with this many fractional digits
    #[arg(short, long)]
    decimal_places: Option<u32>,
    #[arg(long, default_value = "rationals-vars")]
    vars: PathBuf,
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    // use WARN log level by default, RUST_LOG overrides it
    let log_env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(log_env)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    if let Some(base) = args.base {
        config.base = base;
    }
    if let Some(places) = args.decimal_places {
        config.decimal_places = places;
        config.show_decimal = true;
    }

    let mut state = State::new(config, args.vars);
    if let Err(err) = state.read_vars() {
        log::warn!("Failed to read {}: {}", state.vars_path.display(), err);
    }

    if args.expression.is_empty() {
        return demo(&mut state);
    }

    let line = args.expression.join(" ");
    let code = match state.evaluate(&line) {
        Ok(outcome) => {
            println!("{}", state.display(&outcome));
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    };

    if state.dirty {
        if let Err(err) = state.write_vars() {
            log::error!("Failed to write {}: {}", state.vars_path.display(), err);
            return ExitCode::FAILURE;
        }
    }
    code
}

fn demo(state: &mut State) -> ExitCode {
    let mut code = ExitCode::SUCCESS;
    for line in DEMO {
        match state.evaluate(line) {
            Ok(outcome) => println!("{} => {}", line, state.display(&outcome)),
            Err(err) => {
                println!("{} => error: {}", line, err);
                code = ExitCode::FAILURE;
            },
        }
    }
    code
}
