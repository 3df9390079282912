#[macro_use]
extern crate log;

mod config;
mod console;
mod logging;

use anyhow::{bail, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use ord_collections::{
    binary_search, heap_sort, natural_order, quick_sort, reverse_order,
    BinaryHeap, HeapOrder, MaxHeap, MaxOrder, MinOrder, NaturalOrder,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;
use std::str::FromStr;
use config::{DEFAULT_COUNT, DEFAULT_KEEP, DEFAULT_SEED, LOG_ENV, VALUE_MAX, VALUE_MIN};

fn input_args<'a, 'b>() -> Vec<Arg<'a, 'b>> {
    vec![
        Arg::with_name("items")
            .help("Signed integers to work on")
            .multiple(true),
        Arg::with_name("count")
            .short("n")
            .long("count")
            .takes_value(true)
            .conflicts_with("items")
            .help("Number of random items when none are given"),
        Arg::with_name("seed")
            .short("s")
            .long("seed")
            .takes_value(true)
            .conflicts_with("items")
            .help("Seed for the random items"),
    ]
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("ord-collections-cli")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sorts, ranks and searches integers with comparator-driven collections")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(Arg::with_name("log")
            .long("log")
            .takes_value(true)
            .help("Log level: ERROR, WARN, INFO, DEBUG or TRACE"))
        .subcommand(SubCommand::with_name("sort")
            .about("Sorts the items")
            .setting(AppSettings::AllowNegativeNumbers)
            .arg(Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .takes_value(true)
                .possible_values(&["heap", "quick"])
                .default_value("heap"))
            .arg(Arg::with_name("descending")
                .short("d")
                .long("descending"))
            .args(&input_args()))
        .subcommand(SubCommand::with_name("top")
            .about("Keeps the smallest (or largest) items with a bounded heap")
            .setting(AppSettings::AllowNegativeNumbers)
            .arg(Arg::with_name("keep")
                .short("k")
                .long("keep")
                .takes_value(true)
                .help("How many items to keep"))
            .arg(Arg::with_name("max")
                .long("max")
                .help("Keep the largest items instead of the smallest"))
            .args(&input_args()))
        .subcommand(SubCommand::with_name("search")
            .about("Sorts the items and binary searches for a target")
            .setting(AppSettings::AllowNegativeNumbers)
            .arg(Arg::with_name("target")
                .short("t")
                .long("target")
                .takes_value(true)
                .allow_hyphen_values(true)
                .required(true))
            .args(&input_args()))
}

fn main() -> Result<()> {
    let matches = app().get_matches();
    let level = matches
        .value_of("log")
        .map(String::from)
        .or_else(|| env::var(LOG_ENV).ok());
    logging::init(level.as_deref())?;

    let output = match matches.subcommand() {
        ("sort", Some(m)) => run_sort(m)?,
        ("top", Some(m)) => run_top(m)?,
        ("search", Some(m)) => run_search(m)?,
        (name, _) => bail!("unknown subcommand `{}`", name),
    };
    println!("{}", output);
    Ok(())
}


fn parse_or<T>(m: &ArgMatches, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match m.value_of(name) {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid --{} `{}`", name, raw)),
    }
}

fn read_items(m: &ArgMatches) -> Result<Vec<i64>> {
    if let Some(values) = m.values_of("items") {
        return values
            .map(|raw| raw.parse::<i64>().with_context(|| format!("invalid item `{}`", raw)))
            .collect();
    }

    let count = parse_or(m, "count", DEFAULT_COUNT)?;
    let seed = parse_or(m, "seed", DEFAULT_SEED)?;
    debug!("generating {} items with seed {}", count, seed);
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..count).map(|_| rng.gen_range(VALUE_MIN..=VALUE_MAX)).collect())
}

fn render(items: &[i64]) -> String {
    items
        .iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(",")
}


fn run_sort(m: &ArgMatches) -> Result<String> {
    let mut items = read_items(m)?;
    let descending = m.is_present("descending");
    let algorithm = m.value_of("algorithm").unwrap_or("heap");
    info!("sorting {} items with {} sort", items.len(), algorithm);

    let sorted = match (algorithm, descending) {
        ("heap", false) => heap_sort(items, natural_order()),
        ("heap", true) => MaxHeap::heapify(items, natural_order()).into_sorted_vec(),
        ("quick", false) => {
            quick_sort(&mut items, &natural_order());
            items
        }
        ("quick", true) => {
            quick_sort(&mut items, &reverse_order());
            items
        }
        (other, _) => bail!("unknown algorithm `{}`", other),
    };
    Ok(render(&sorted))
}

/// Streams `items` through a heap that never grows past `keep`.
///
/// With `MaxOrder` the root is the largest kept item, so evicting it keeps the
/// smallest ones; `MinOrder` keeps the largest. The result is best first.
fn keep_extremes<P: HeapOrder>(items: Vec<i64>, keep: usize) -> Vec<i64> {
    let mut heap = BinaryHeap::<i64, NaturalOrder, P>::with_comparator(natural_order());
    for item in items {
        heap.insert(item);
        if heap.len() > keep {
            if let Some(evicted) = heap.extract_root() {
                trace!("evicted {}", evicted);
            }
        }
    }
    let mut kept = heap.into_sorted_vec();
    kept.reverse();
    kept
}

fn run_top(m: &ArgMatches) -> Result<String> {
    let items = read_items(m)?;
    let keep = parse_or(m, "keep", DEFAULT_KEEP)?;
    let largest = m.is_present("max");
    info!(
        "keeping the {} {} of {} items",
        keep,
        if largest { "largest" } else { "smallest" },
        items.len()
    );

    let kept = if largest {
        keep_extremes::<MinOrder>(items, keep)
    } else {
        keep_extremes::<MaxOrder>(items, keep)
    };
    Ok(render(&kept))
}

fn run_search(m: &ArgMatches) -> Result<String> {
    let mut items = read_items(m)?;
    let target: i64 = match m.value_of("target") {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid --target `{}`", raw))?,
        None => bail!("--target is required"),
    };

    quick_sort(&mut items, &natural_order());
    let result = match binary_search(&items, &target, &natural_order()) {
        Some(idx) => format!("{} found at index {}", target, idx),
        None => format!("{} not found", target),
    };
    Ok(format!("{}\n{}", render(&items), result))
}
