//! CLI for hrefkit - builds a link from a URL pattern and token bindings

use clap::Parser;
use hrefkit::{LinkBuilder, TokenResolver};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL pattern with {name} placeholders, e.g. /users/{userId}
    pattern: String,

    /// Prefix prepended to the pattern, e.g. http://api.example.com
    #[arg(long)]
    base_url: Option<String>,

    /// Optional query-string segment, included only if all its tokens are bound
    #[arg(long = "query", value_name = "SEGMENT")]
    queries: Vec<String>,

    /// Token binding
    #[arg(long = "bind", value_name = "NAME=VALUE", value_parser = parse_pair)]
    bindings: Vec<(String, String)>,

    /// Relation type of the link
    #[arg(long)]
    rel: Option<String>,

    /// Link title
    #[arg(long)]
    title: Option<String>,

    /// Media type of the link target
    #[arg(long = "type")]
    media_type: Option<String>,

    /// Additional link attribute
    #[arg(long = "attr", value_name = "NAME=VALUE", value_parser = parse_pair)]
    attributes: Vec<(String, String)>,

    /// Log resolution details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_pair(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", arg)),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut builder = LinkBuilder::new(args.pattern);
    if let Some(base_url) = args.base_url {
        builder.set_base_url(base_url);
    }
    for query in args.queries {
        builder.with_query(query);
    }
    builder
        .set_optional("rel", args.rel)
        .set_optional("title", args.title)
        .set_optional("type", args.media_type);
    for (name, value) in &args.attributes {
        builder.set(name, value.as_str());
    }

    let mut resolver = TokenResolver::new();
    resolver.bind_all(args.bindings);
    tracing::debug!(bindings = %resolver, "resolving");

    match builder.build_with(&resolver) {
        Ok(link) => {
            println!("{}", link.href());
            if let Some(rel) = link.rel() {
                println!("rel={}", rel);
            }
            for (name, value) in link.attributes() {
                println!("{}={}", name, value);
            }
        }
        Err(e) => {
            eprintln!("Error building link: {}", e);
            std::process::exit(1);
        }
    }
}
