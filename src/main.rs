use std::io::BufRead;

use static_hash_index::{parse_parameter, util::init_log, HashDb, PagingMode};

fn main() {
    init_log();
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let mode: PagingMode = args
        .next()
        .ok_or("usage: static-hash-index <count|size> <parameter> [query...] < words")?
        .parse()?;
    let parameter = parse_parameter(args.next().as_deref())?;
    let queries: Vec<String> = args.collect();

    // blank lines are dropped here, the index only ever sees clean keys
    let mut keys = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let key = line.trim();
        if !key.is_empty() {
            keys.push(key.to_string());
        }
    }

    let db = HashDb::default();
    let snapshot = db.build(&keys, mode, parameter)?;
    println!("{}", snapshot.describe());

    for query in queries {
        let lookup = db.lookup(&query)?;
        let scan = db.scan(&query)?;
        println!(
            "{}",
            serde_json::json!({ "key": query, "lookup": lookup, "scan": scan })
        );
    }
    Ok(())
}
