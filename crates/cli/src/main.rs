use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use newsroll_core::{
    HttpFetcher, MAX_URLS, build_newsletter, placeholder, read_text_file, read_url_list,
    unresolved_placeholders, validate_urls,
};
use owo_colors::OwoColorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod args;
mod echo;

use args::Args;
use echo::{format_size, print_banner, print_error, print_info, print_ranking, print_step, print_success, print_warning};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const STEPS: usize = 4;

fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,newsroll=debug,newsroll_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Positional URLs win; otherwise the URL file is read if it exists.
fn load_urls(args: &Args) -> anyhow::Result<Vec<String>> {
    if !args.urls.is_empty() {
        return Ok(args.urls.clone());
    }
    if !args.urls_file.exists() {
        return Ok(Vec::new());
    }

    read_url_list(&args.urls_file).with_context(|| format!("Failed to read URL list: {}", args.urls_file.display()))
}

async fn run(args: &Args) -> anyhow::Result<()> {
    let started = Instant::now();
    let config = args.newsletter_config();
    debug!(?args, "Parsed CLI arguments");

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let urls = load_urls(args)?;
    let hostname = validate_urls(&urls)?;
    if urls.len() > MAX_URLS {
        print_warning(&format!(
            "{} URLs given; the layout is designed for at most {}",
            urls.len(),
            MAX_URLS
        ));
    }

    print_step(
        1,
        STEPS,
        &format!("Reading template {}", args.template.display().bright_white()),
    );
    let template = read_text_file(&args.template)
        .with_context(|| format!("Failed to read template: {}", args.template.display()))?;
    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), format_size(template.len()).bright_white());
        eprintln!();
    }

    print_step(
        2,
        STEPS,
        &format!("Fetching {} articles from {}", urls.len(), hostname.bright_white().underline()),
    );
    let fetcher = HttpFetcher::new(config.fetch.clone()).context("Failed to build HTTP client")?;
    let newsletter = build_newsletter(&fetcher, &urls, &template, &config).await?;

    if !newsletter.skipped.is_empty() {
        print_warning(&format!(
            "Skipped {} of {} URLs (see warnings above)",
            newsletter.skipped.len(),
            urls.len()
        ));
    }

    print_step(3, STEPS, "Selecting stories");
    if args.verbose {
        print_ranking(&newsletter.articles);
    }
    for key in unresolved_placeholders(&template, &newsletter.context) {
        print_warning(&format!("Template placeholder {} has no value", placeholder(&key)));
    }

    print_step(4, STEPS, "Writing output");
    fs::write(&args.out, &newsletter.html)
        .with_context(|| format!("Failed to write to file: {}", args.out.display()))?;

    if args.dump_context {
        println!("{}", newsletter.context.to_json_pretty()?);
    }

    print_success(&format!(
        "Wrote {} ({}, {} of {} articles)",
        args.out.display().bright_white(),
        format_size(newsletter.html.len()),
        newsletter.articles.len(),
        urls.len()
    ));
    print_info("Open it in a browser, then paste the HTML into your mail tool.");

    if args.verbose {
        eprintln!(
            "  {} {:.2}s",
            "Elapsed:".dimmed(),
            started.elapsed().as_secs_f64()
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
