use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hostlist::ExpressionTree;

#[derive(Parser, Debug)]
#[command(name = "hostlist", about = "Expand or compress hostlist expressions")]
struct Cli {
    /// Expand a hostlist expression into hostnames (default mode).
    #[arg(short, long, conflicts_with = "compress")]
    expand: bool,

    /// Compress a list of hostnames into a hostlist expression.
    #[arg(short, long)]
    compress: bool,

    /// Print the compression tree structure to stderr before the expression.
    #[arg(long, requires = "compress")]
    tree: bool,

    /// The expression to expand, or the hostnames to compress.
    #[arg(required = true)]
    args: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Expand is the default when neither mode flag is given.
    let expand_mode = cli.expand || !cli.compress;

    if expand_mode {
        if cli.args.len() != 1 {
            bail!("expand mode takes exactly one hostlist expression");
        }
        let hosts = hostlist::expand(&cli.args[0])
            .with_context(|| format!("failed to expand '{}'", cli.args[0]))?;
        println!("{}", hosts.join(" "));
    } else {
        if cli.tree {
            print_tree(&cli.args);
        }
        let expression =
            hostlist::compress(&cli.args).context("failed to compress hostnames")?;
        println!("{expression}");
    }

    Ok(())
}

fn print_tree(hosts: &[String]) {
    let mut sorted: Vec<&str> = hosts.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let mut tree = ExpressionTree::new();
    for host in sorted {
        tree.add_host(host);
    }
    eprintln!("{tree}");
}
