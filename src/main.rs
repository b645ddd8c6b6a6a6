//! Command-line entry point: merge the CSV logs in a directory into
//! `<prefix>_avg.csv` and `<prefix>_median.csv`.

extern crate chrono;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mergestats;

use std::env;
use std::io::Write;
use std::path::Path;
use std::process;

fn init_logger() {
    let mut builder = env_logger::Builder::new();
    builder.format(|buf, record| {
        let t = chrono::Utc::now();
        writeln!(
            buf,
            "{} {}: {}",
            t.format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.args()
        )
    });
    builder.filter(None, log::LevelFilter::Info);
    if let Ok(filter) = env::var("RUST_LOG") {
        builder.parse(&filter);
    }
    builder.init();
}

pub fn main() {
    init_logger();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <input_directory> <output_prefix>", args[0]);
        process::exit(1);
    }

    if let Err(ref e) = mergestats::merge_directory(Path::new(&args[1]), &args[2]) {
        error!("{}", e);
        for cause in e.iter().skip(1) {
            error!("caused by: {}", cause);
        }
        process::exit(1);
    }
}
