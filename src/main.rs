use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod cache;
pub mod catalog;
pub mod cli;
pub mod client;
pub mod data_dir;
pub mod error;
pub mod fuzzy;
pub mod links;
pub mod resolve;
pub mod search;
pub mod version;
pub mod viewer;

use cache::CacheStore;
use cli::{Cli, Command};
use client::RemoteClient;
use data_dir::DataDir;

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("DOCDEX_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> error::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Command::Completions(args) = &cli.command {
        args.generate();
        return Ok(());
    }

    let data_dir = DataDir::resolve(cli.data_dir.as_deref())?;
    let cache = CacheStore::new(data_dir);

    match cli.command {
        Command::Available(args) => cmd_available(&cache, &args),
        Command::Download(args) => cmd_download(&cache, &args),
        Command::List(args) => cmd_list(&cache, args.json),
        Command::Entries(args) => cmd_entries(&cache, &args),
        Command::Search(args) => cmd_search(&cache, &args),
        Command::Open(args) => viewer::open_entry(&cache, &args.slug, &args.path),
        Command::Remove(args) => cmd_remove(&cache, &args.slug),
        Command::Completions(_) => unreachable!("handled above"),
    }
}

fn installed_mark(cache: &CacheStore, slug: &str) -> &'static str {
    if cache.exists(slug) { "[✓]" } else { "[ ]" }
}

fn cmd_available(
    cache: &CacheStore,
    args: &cli::AvailableArgs,
) -> error::Result<()> {
    let client = RemoteClient::new();
    let docsets = client.list_docsets()?;
    let groups = version::resolve_groups(&docsets);

    if args.json {
        let out: Vec<serde_json::Value> = groups
            .iter()
            .map(|group| {
                let versions: Vec<serde_json::Value> = group
                    .versions
                    .iter()
                    .map(|&idx| {
                        let docset = &docsets[idx];
                        serde_json::json!({
                            "slug": docset.slug,
                            "name": docset.name,
                            "version": docset.version,
                            "release": docset.release,
                            "mtime": docset.mtime,
                            "installed": cache.exists(&docset.slug),
                        })
                    })
                    .collect();
                serde_json::json!({
                    "kind": group.kind,
                    "name": docsets[group.primary()].name,
                    "versions": versions,
                })
            })
            .collect();
        println!("{}", serde_json::Value::Array(out));
        return Ok(());
    }

    for group in &groups {
        let primary = &docsets[group.primary()];
        println!(
            "{} {:<32} {}",
            installed_mark(cache, &primary.slug),
            primary.display_name(),
            primary.slug
        );
        if args.versions {
            for &idx in &group.versions[1..] {
                let docset = &docsets[idx];
                println!(
                    "    {} {:<28} {}",
                    installed_mark(cache, &docset.slug),
                    docset.display_name(),
                    docset.slug
                );
            }
        }
    }
    Ok(())
}

fn cmd_download(
    cache: &CacheStore,
    args: &cli::DownloadArgs,
) -> error::Result<()> {
    let client = RemoteClient::new();
    let docsets = client.list_docsets()?;
    let docset = docsets
        .iter()
        .find(|d| d.slug == args.slug)
        .ok_or_else(|| error::Error::NotFound {
            kind: "docset",
            name: args.slug.clone(),
        })?;

    if !args.force && !cache.is_stale(&docset.slug, docset.mtime) {
        eprintln!("'{}' is already up to date.", docset.slug);
        return Ok(());
    }

    eprintln!("Downloading '{}'...", docset.slug);
    let count = client.install(cache, docset)?;
    eprintln!(
        "Materialized {count} files into {}",
        cache.dirs().html_dir(&docset.slug).display()
    );
    Ok(())
}

fn cmd_list(cache: &CacheStore, json: bool) -> error::Result<()> {
    let slugs = cache.installed_slugs()?;

    if json {
        let out: Vec<serde_json::Value> = slugs
            .iter()
            .map(|slug| match cache.load_meta(slug) {
                Ok(meta) => serde_json::json!({
                    "slug": slug,
                    "version": meta.version,
                    "release": meta.release,
                    "mtime": meta.mtime,
                }),
                Err(_) => serde_json::json!({ "slug": slug }),
            })
            .collect();
        println!("{}", serde_json::Value::Array(out));
    } else if slugs.is_empty() {
        println!("No documentation sets installed.");
    } else {
        for slug in &slugs {
            match cache.load_meta(slug) {
                Ok(meta) => println!(
                    "{slug:<24} {:<12} {}",
                    meta.version, meta.release
                ),
                Err(_) => println!("{slug}"),
            }
        }
    }
    Ok(())
}

fn cmd_entries(
    cache: &CacheStore,
    args: &cli::EntriesArgs,
) -> error::Result<()> {
    let index = cache.load_index(&args.slug)?;

    if args.json {
        println!("{}", serde_json::to_string(&index.entries)?);
    } else if index.entries.is_empty() {
        println!("No entries in '{}'.", args.slug);
    } else {
        for entry in &index.entries {
            println!("{:<48} {}", entry.display(), entry.path);
        }
        println!("\n{} entry(ies)", index.entries.len());
    }
    Ok(())
}

fn cmd_search(
    cache: &CacheStore,
    args: &cli::SearchArgs,
) -> error::Result<()> {
    let hits = match args.docset.as_deref() {
        Some(slug) => search::search_docset(cache, slug, &args.query)?,
        None => search::search_all(cache, &args.query)?,
    };

    let limit = if args.all { hits.len() } else { args.count };
    let hits = &hits[..limit.min(hits.len())];

    if args.json {
        search::format_json(hits, &args.query)?;
    } else {
        search::format_human(hits);
    }
    Ok(())
}

fn cmd_remove(cache: &CacheStore, slug: &str) -> error::Result<()> {
    cache.remove(slug)?;
    println!("Removed '{slug}'");
    Ok(())
}
