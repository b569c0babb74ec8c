//! `avl-demo`: exercise an `AvlSet<i64>` from the command line.
//!
//! Usage:
//!   avl-demo [--order in|pre|post] [--json]
//!   avl-demo [--order in|pre|post] [--json] [--remove <v>]... <v>...
//!
//! Without values a fixed scenario is replayed: eleven values are added,
//! the tree and its traversal are printed, then 7 and 10 are removed and
//! both are printed again. Otherwise the given values are added, the
//! `--remove` values removed, and the traversal is printed. `--order`
//! picks the traversal in both modes; `--json` appends the root snapshot.
//!
//! Log verbosity comes from the `AVL_LOG` environment variable
//! (`off`, `error`, `warn`, `info`, `debug`, `trace`; default `warn`).

use avl_forest::demo::{parse_args, run};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn init_logging() {
    let level = std::env::var("AVL_LOG")
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn main() {
    init_logging();

    let opts = match parse_args(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match run(&opts) {
        Ok(transcript) => {
            for e in &transcript.errors {
                eprintln!("{e}");
            }
            print!("{}", transcript.out);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
