use std::fs;
use std::io;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use env_logger::{Builder, Env, Target};
use log::info;

use rxfind::action::ActionDispatcher;
use rxfind::cli::Cli;
use rxfind::config::{Capabilities, SearchConfig};
use rxfind::error::{FindError, Result};
use rxfind::filter::StdinFilter;
use rxfind::matcher::Matcher;
use rxfind::walker::TreeTraverser;

/// Exit code when the maximum depth is not an integer.
const EXIT_DEPTH_NOT_INTEGER: i32 = -1;
/// Exit code when the maximum depth is negative.
const EXIT_DEPTH_NEGATIVE: i32 = -2;

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli)?;

    let max_depth = match cli.maxdepth.parse::<i64>() {
        Ok(depth) => depth,
        Err(_) => {
            eprintln!("maxdepth should be an integer.\nExiting...");
            process::exit(EXIT_DEPTH_NOT_INTEGER);
        }
    };
    if max_depth < 0 {
        eprintln!("Illegal maxdepth: range should be >= 0.\nExiting...");
        process::exit(EXIT_DEPTH_NEGATIVE);
    }

    let capabilities = Capabilities::detect();
    let config = SearchConfig::resolve(&cli, max_depth);
    info!(
        "raw pattern {:?} compiled as {:?}",
        cli.regex,
        config.pattern.as_str()
    );

    let matcher = Matcher::new(&config.pattern, config.render_options(&capabilities));
    let action = config
        .action
        .as_deref()
        .map(|template| ActionDispatcher::new(template, capabilities.platform));

    match &cli.path {
        Some(root) => {
            let traverser = TreeTraverser::new(&matcher, action.as_ref());
            let stats = traverser.run(root, config.max_depth);
            info!("visited {} paths, {} matched", stats.visited, stats.matched);
        }
        None => {
            let interrupted = Arc::new(AtomicBool::new(false));
            let flag = Arc::clone(&interrupted);
            ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;

            let filter = StdinFilter::new(&matcher, action.as_ref(), interrupted);
            let stdin = io::stdin();
            let matched = filter.run(stdin.lock());
            info!("{matched} input lines matched");
        }
    }

    Ok(())
}

fn setup_logging(cli: &Cli) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));

    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(
            buf,
            "{} [{}] [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    });

    if let Some(log_path) = &cli.log {
        if let Some(parent) = log_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let log_file = fs::File::create(log_path)?;
        builder.target(Target::Pipe(Box::new(log_file)));
    } else {
        builder.target(Target::Stderr);
    }

    builder
        .try_init()
        .map_err(|e| FindError::Logger(e.to_string()))?;
    Ok(())
}
