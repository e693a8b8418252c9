use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use sympath_core::{
    Loader, NamespaceMap, PrefixMatching, Resolver, ResolverConfig, Strategy, SympathManifest,
};

#[derive(Parser)]
#[command(name = "sympath")]
#[command(version = "0.2.0")]
#[command(about = "Namespace-to-path symbol resolver", long_about = None)]
struct Cli {
    /// Manifest file with namespace mappings
    #[arg(short, long, value_name = "PATH", default_value = "sympath.json")]
    manifest: PathBuf,

    /// Extra namespace mapping (PREFIX=ROOT), appended after manifest entries
    #[arg(short = 'n', long = "namespace", value_name = "PREFIX=ROOT")]
    namespaces: Vec<String>,

    /// File extension for resolved paths (overrides the manifest)
    #[arg(long, value_name = "EXT")]
    ext: Option<String>,

    /// Namespace separator character (overrides the manifest)
    #[arg(long, value_name = "CHAR")]
    separator: Option<char>,

    /// Use the legacy first-segment translation strategy
    #[arg(long)]
    legacy_segment: bool,

    /// Match prefixes as plain leading substrings (compatibility mode)
    #[arg(long)]
    substring_match: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a symbol name into its file path
    Resolve {
        /// Fully-qualified symbol name
        #[arg(value_name = "SYMBOL")]
        symbol: String,
    },

    /// Check whether a file exists for a symbol name
    Check {
        /// Fully-qualified symbol name
        #[arg(value_name = "SYMBOL")]
        symbol: String,
    },

    /// Load the files for one or more symbols and report what was read
    Load {
        /// Fully-qualified symbol names
        #[arg(value_name = "SYMBOL", required = true)]
        symbols: Vec<String>,
    },

    /// List registered namespaces in registration order
    List,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let resolver = build_resolver(&cli)?;

    match cli.command {
        Commands::Resolve { symbol } => {
            let path = resolver
                .resolve_path(&symbol)
                .with_context(|| format!("Cannot resolve '{}'", symbol))?;
            println!("{}", path.display());
        }

        Commands::Check { symbol } => match resolver.locate(&symbol) {
            Ok(path) => println!("✅ {} -> {}", symbol, path.display()),
            Err(err) => {
                println!("❌ {}: {}", symbol, err);
                std::process::exit(1);
            }
        },

        Commands::Load { symbols } => {
            let mut loader = Loader::new(resolver);
            for symbol in &symbols {
                match loader.try_load(symbol) {
                    Ok(source) => {
                        println!("✅ Loaded {} ({} bytes)", symbol, source.len());
                    }
                    Err(err) => println!("❌ {}", err),
                }
            }
            println!("{} file(s) loaded", loader.loaded_count());
        }

        Commands::List => {
            if resolver.namespaces().is_empty() {
                println!("No namespaces registered");
            }
            for (prefix, root) in resolver.namespaces().iter() {
                println!("{} -> {}", prefix, root.display());
            }
        }
    }

    Ok(())
}

/// Build the resolver from the manifest (if present) plus command line
/// overrides and extra --namespace mappings.
fn build_resolver(cli: &Cli) -> Result<Resolver> {
    let mut resolver = if cli.manifest.exists() {
        let manifest = SympathManifest::from_file(&cli.manifest)?;
        let mut config = manifest.resolver_config();
        apply_overrides(&mut config, cli);
        let map = NamespaceMap::from_entries(
            manifest
                .namespaces
                .into_iter()
                .map(|entry| (entry.prefix, entry.root)),
        );
        Resolver::new(map, config)
    } else {
        let ext = cli.ext.as_deref().with_context(|| {
            format!(
                "No manifest at {} and no --ext given",
                cli.manifest.display()
            )
        })?;
        let mut config = ResolverConfig::new(ext);
        apply_overrides(&mut config, cli);
        Resolver::empty(config)
    };

    for mapping in &cli.namespaces {
        let (prefix, root) = mapping
            .split_once('=')
            .with_context(|| format!("Invalid --namespace mapping (want PREFIX=ROOT): {}", mapping))?;
        resolver.add_namespace(prefix, root);
    }

    log::debug!(
        "resolver ready: {} namespace(s), extension '{}'",
        resolver.namespaces().len(),
        resolver.config().extension
    );

    Ok(resolver)
}

fn apply_overrides(config: &mut ResolverConfig, cli: &Cli) {
    if let Some(ext) = &cli.ext {
        config.extension = ext.clone();
    }
    if let Some(separator) = cli.separator {
        config.separator = separator;
    }
    if cli.legacy_segment {
        config.strategy = Strategy::LegacySegment;
    }
    if cli.substring_match {
        config.matching = PrefixMatching::Substring;
    }
}
