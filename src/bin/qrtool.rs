use clap::{Parser, Subcommand, ValueEnum};
use rust_qr_gen::render::render_text;
use rust_qr_gen::tools::{classification_grid, module_stats, save_png, traversal_order};
use rust_qr_gen::{EncodingMode, PlacementStatus, Version, encode, encode_with_mode};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "RustQR Gen CLI tools")]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a symbol and print it
    Encode {
        text: String,
        #[arg(long, value_enum, default_value_t = ModeArg::Auto)]
        mode: ModeArg,
        /// Also write the rendered symbol as an image
        #[arg(long)]
        png: Option<PathBuf>,
    },
    /// Print the visit index of every fillable module
    Trace {
        #[arg(long, default_value_t = 1)]
        version: u8,
    },
    /// Print the boundary classification grid
    Classify {
        #[arg(long, default_value_t = 1)]
        version: u8,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Auto,
    Numeric,
    Alphanumeric,
    Binary,
    Kanji,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Encode { text, mode, png } => encode_cmd(&text, mode, png.as_deref()),
        Command::Trace { version } => trace_cmd(version),
        Command::Classify { version } => classify_cmd(version),
    }
}

fn parse_version(number: u8) -> Option<Version> {
    let version = Version::new(number);
    if version.is_none() {
        eprintln!("Version must be between 1 and 40, got {}", number);
    }
    version
}

fn encode_cmd(text: &str, mode: ModeArg, png: Option<&Path>) {
    let result = match mode {
        ModeArg::Auto => encode(text),
        ModeArg::Numeric => encode_with_mode(text, EncodingMode::Numeric),
        ModeArg::Alphanumeric => encode_with_mode(text, EncodingMode::Alphanumeric),
        ModeArg::Binary => encode_with_mode(text, EncodingMode::Binary),
        ModeArg::Kanji => encode_with_mode(text, EncodingMode::Kanji),
    };
    let symbol = match result {
        Ok(symbol) => symbol,
        Err(err) => {
            eprintln!("Failed to encode {:?}: {}", text, err);
            return;
        }
    };

    let stats = module_stats(symbol.matrix());
    println!(
        "Version {} ({}x{}), mode={:?}, payload={} bytes",
        symbol.version().number(),
        symbol.matrix().width(),
        symbol.matrix().width(),
        symbol.mode(),
        symbol.payload_len()
    );
    println!(
        "Dark modules: {} / {} ({:.2}%)",
        stats.dark_modules,
        stats.total_modules,
        stats.dark_ratio * 100.0
    );
    if let PlacementStatus::Truncated {
        bits_written,
        bits_required,
    } = symbol.status()
    {
        println!("TRUNCATED: placed {} of {} bits", bits_written, bits_required);
    }
    print!("{}", render_text(symbol.matrix()));

    if let Some(path) = png {
        match save_png(&symbol, path) {
            Ok(()) => println!("Wrote {}", path.display()),
            Err(err) => eprintln!("Failed to write image {}: {}", path.display(), err),
        }
    }
}

fn trace_cmd(version: u8) {
    let Some(version) = parse_version(version) else {
        return;
    };
    let width = version.width();
    let order = traversal_order(width);
    let cell_width = order.iter().flatten().max().map_or(1, |n| n.to_string().len());

    println!(
        "Version {} ({}x{}), {} fillable modules",
        version.number(),
        width,
        width,
        order.iter().flatten().count()
    );
    for row in order.chunks(width) {
        let line: Vec<String> = row
            .iter()
            .map(|visit| match visit {
                Some(n) => format!("{:>w$}", n, w = cell_width),
                None => format!("{:>w$}", "-", w = cell_width),
            })
            .collect();
        println!("{}", line.join(" "));
    }
}

fn classify_cmd(version: u8) {
    let Some(version) = parse_version(version) else {
        return;
    };
    let grid = classification_grid(version.width());
    println!(
        "Version {}: unskippable={} skippable={} fillable={}",
        version.number(),
        grid.matches('#').count(),
        grid.matches('+').count(),
        grid.matches('.').count()
    );
    print!("{}", grid);
}
