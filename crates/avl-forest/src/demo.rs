//! Logic behind the `avl-demo` binary.
//!
//! Argument parsing and the runs themselves live here; the binary only
//! writes a [`Transcript`] to stdout/stderr and turns a [`DemoError`] into
//! exit status 1.

use std::num::ParseIntError;

use thiserror::Error;

use crate::avl::{AvlSet, ParseOrderError, TraversalOrder};

/// Values added by the built-in scenario, in insertion order.
pub const SCENARIO_VALUES: [i64; 11] = [10, 20, 25, 30, 40, 50, 2, -19, 7, -30, 0];
/// Values removed once the scenario tree has been printed.
pub const SCENARIO_REMOVALS: [i64; 2] = [7, 10];

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("{0} needs a value")]
    MissingValue(&'static str),
    #[error("Invalid value {arg:?}: {source}")]
    InvalidValue {
        arg: String,
        #[source]
        source: ParseIntError,
    },
    #[error(transparent)]
    Order(#[from] ParseOrderError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

// ── Arguments ─────────────────────────────────────────────────────────────

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Options {
    pub order: TraversalOrder,
    pub json: bool,
    pub values: Vec<i64>,
    pub removals: Vec<i64>,
}

impl Options {
    /// No values to add or remove: replay the built-in scenario.
    pub fn is_scenario(&self) -> bool {
        self.values.is_empty() && self.removals.is_empty()
    }
}

fn parse_value(arg: &str) -> Result<i64, DemoError> {
    arg.parse::<i64>().map_err(|source| DemoError::InvalidValue {
        arg: arg.to_string(),
        source,
    })
}

/// Parses the arguments following the program name.
pub fn parse_args<I>(args: I) -> Result<Options, DemoError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut opts = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--order" => {
                let order = args.next().ok_or(DemoError::MissingValue("--order"))?;
                opts.order = order.parse::<TraversalOrder>()?;
            }
            "--json" => opts.json = true,
            "--remove" => {
                let value = args.next().ok_or(DemoError::MissingValue("--remove"))?;
                opts.removals.push(parse_value(&value)?);
            }
            _ => opts.values.push(parse_value(&arg)?),
        }
    }
    Ok(opts)
}

// ── Runs ──────────────────────────────────────────────────────────────────

/// What a run printed: `out` goes to stdout, each of `errors` to stderr.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub out: String,
    pub errors: Vec<String>,
}

impl Transcript {
    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn report(&mut self, set: &AvlSet<i64>, order: TraversalOrder) {
        let values: Vec<String> = set.traverse(order).map(|v| v.to_string()).collect();
        self.line(&format!("{order}: {}", values.join(" ")));
        if set.is_balanced() {
            self.line(&format!(
                "tree is balanced (size={}, height={})",
                set.size(),
                set.height()
            ));
        } else {
            self.line("tree is NOT balanced");
        }
    }

    fn add_all(&mut self, set: &mut AvlSet<i64>, values: &[i64]) {
        for &v in values {
            if let Err(e) = set.add(v) {
                self.errors.push(format!("add {v}: {e}"));
            }
        }
    }

    fn remove_all(&mut self, set: &mut AvlSet<i64>, values: &[i64]) {
        for v in values {
            if let Err(e) = set.remove(v) {
                self.errors.push(format!("remove {v}: {e}"));
            }
        }
    }

    fn snapshot_json(&mut self, set: &AvlSet<i64>) -> Result<(), DemoError> {
        let json = serde_json::to_string_pretty(&set.snapshot())?;
        self.line(&json);
        Ok(())
    }
}

/// Adds the scenario values, prints the tree and the traversal in `order`,
/// removes 7 and 10, then prints both again.
pub fn run_scenario(order: TraversalOrder, json: bool) -> Result<Transcript, DemoError> {
    let mut t = Transcript::default();
    let mut set = AvlSet::new();

    t.add_all(&mut set, &SCENARIO_VALUES);
    t.line(&set.print());
    t.report(&set, order);

    t.remove_all(&mut set, &SCENARIO_REMOVALS);
    t.line(&set.print());
    t.report(&set, order);

    if json {
        t.snapshot_json(&set)?;
    }
    Ok(t)
}

pub fn run(opts: &Options) -> Result<Transcript, DemoError> {
    if opts.is_scenario() {
        return run_scenario(opts.order, opts.json);
    }

    let mut t = Transcript::default();
    let mut set = AvlSet::new();
    t.add_all(&mut set, &opts.values);
    t.remove_all(&mut set, &opts.removals);
    t.report(&set, opts.order);

    if opts.json {
        t.snapshot_json(&set)?;
    }
    Ok(t)
}

// ── Tests ─────────────────────────────────────────────────────────────────
