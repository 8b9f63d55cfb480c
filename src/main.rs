use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "setpack", about = "9-bit set packing for numbers 1-300")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a file of comma-separated numbers
    Pack {
        /// Input file
        file: PathBuf,
        /// Output file (default: <file>.spk)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Unpack a .spk file back into comma-separated numbers
    Unpack {
        /// Input file
        file: PathBuf,
        /// Output file (default: strip .spk extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compare packed size against the plain comma-joined form
    Ratio {
        /// Input file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pack { file, output } => {
            let text = fs::read_to_string(&file).unwrap_or_else(|e| {
                eprintln!("Error reading {}: {e}", file.display());
                std::process::exit(1);
            });
            let numbers = parse_numbers(&text);
            let enc = setpack::encode(&numbers);
            for num in &enc.rejected {
                eprintln!("  Number {num} outside valid range (1-300), dropped");
            }
            let out_path = output.unwrap_or_else(|| {
                let mut p = file.clone();
                let name = format!("{}.spk", p.file_name().unwrap().to_string_lossy());
                p.set_file_name(name);
                p
            });
            fs::write(&out_path, &enc.bytes).unwrap_or_else(|e| {
                eprintln!("Error writing {}: {e}", out_path.display());
                std::process::exit(1);
            });
            eprintln!("  {} numbers \u{2192} {} bytes", numbers.len(), enc.bytes.len());
            eprintln!("  Written to {}", out_path.display());
        }
        Commands::Unpack { file, output } => {
            let data = fs::read(&file).unwrap_or_else(|e| {
                eprintln!("Error reading {}: {e}", file.display());
                std::process::exit(1);
            });
            let numbers = setpack::decode(&data);
            let out_path = output.unwrap_or_else(|| {
                let s = file.to_string_lossy();
                if let Some(stripped) = s.strip_suffix(".spk") {
                    PathBuf::from(stripped)
                } else {
                    let mut p = file.clone();
                    let name = format!("{}.txt", p.file_name().unwrap().to_string_lossy());
                    p.set_file_name(name);
                    p
                }
            });
            fs::write(&out_path, join_numbers(&numbers)).unwrap_or_else(|e| {
                eprintln!("Error writing {}: {e}", out_path.display());
                std::process::exit(1);
            });
            eprintln!("  {} bytes \u{2192} {} numbers", data.len(), numbers.len());
            eprintln!("  Written to {}", out_path.display());
        }
        Commands::Ratio { file } => {
            let text = fs::read_to_string(&file).unwrap_or_else(|e| {
                eprintln!("Error reading {}: {e}", file.display());
                std::process::exit(1);
            });
            let numbers = parse_numbers(&text);
            if numbers.is_empty() {
                eprintln!("No numbers found in {}", file.display());
                std::process::exit(1);
            }

            // Plain form keeps duplicates; only encode deduplicates.
            let mut sorted = numbers.clone();
            sorted.sort_unstable();
            let plain = join_numbers(&sorted);

            let enc = setpack::encode(&numbers);
            for num in &enc.rejected {
                eprintln!("  Number {num} outside valid range (1-300), dropped");
            }

            println!("Plain:  {} ({} bytes)", plain, plain.len());
            println!(
                "Packed: {} ({} bytes)",
                escape_bytes(&enc.bytes),
                enc.bytes.len()
            );
            if !enc.bytes.is_empty() {
                println!(
                    "Ratio:  {:.2}",
                    plain.len() as f64 / enc.bytes.len() as f64
                );
            }
        }
    }
}

/// Split comma-separated text into integers, skipping anything that
/// does not parse.
fn parse_numbers(text: &str) -> Vec<i32> {
    text.split(',')
        .filter_map(|tok| tok.trim().parse().ok())
        .collect()
}

fn join_numbers(numbers: &[i32]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Render packed bytes for display: printable ASCII as-is, everything
/// else as \xNN.
fn escape_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if (32..=126).contains(&b) {
                (b as char).to_string()
            } else {
                format!("\\x{b:02x}")
            }
        })
        .collect()
}
