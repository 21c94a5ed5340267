use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use vig_analysis::{estimate_key_length, guess_key, index_of_coincidence, Histogram};
use vig_core::{Key, Vigenere};

// ── CLI definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "vig",
    about = "Vigenère-style byte cipher — encipher, decipher, and analyze byte streams",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct KeyArgs {
    /// Textual key; one shift per byte of its UTF-8 encoding
    #[arg(short, long, required_unless_present = "shifts", conflicts_with = "shifts")]
    key: Option<String>,
    /// Explicit shift list "N/M/O/..." with each shift in 0-255
    #[arg(short, long)]
    shifts: Option<String>,
}

impl KeyArgs {
    fn resolve(&self) -> anyhow::Result<Key> {
        let key = match (&self.key, &self.shifts) {
            (Some(text), None) => Key::from_text(text)?,
            (None, Some(spec)) => Key::from_shifts(spec)?,
            // clap enforces exactly one of the two
            _ => anyhow::bail!("provide exactly one of --key or --shifts"),
        };
        Ok(key)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encipher a file and write the ciphertext verbatim to stdout
    Encode {
        #[command(flatten)]
        key: KeyArgs,
        /// Input file ("-" reads stdin)
        input: PathBuf,
        /// Write the ciphertext to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decipher a file (inverse shifts) and write the cleartext to stdout
    Decode {
        #[command(flatten)]
        key: KeyArgs,
        /// Input file ("-" reads stdin)
        input: PathBuf,
        /// Write the cleartext to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a byte-value histogram suitable for gnuplot
    Histogram {
        /// File to examine ("-" reads stdin)
        input: PathBuf,
    },
    /// Byte-wise index of coincidence of the whole file
    Ic {
        /// File to examine ("-" reads stdin)
        input: PathBuf,
    },
    /// Sweep assumed key lengths and report average column IC per length
    ///
    /// The length with the highest average is the most likely key length of
    /// a repeating-key ciphertext.
    Keylength {
        /// Ciphertext file ("-" reads stdin)
        input: PathBuf,
        /// Lowest key length to try
        #[arg(long, default_value_t = 1)]
        min: usize,
        /// Highest key length to try
        #[arg(long, default_value_t = 20)]
        max: usize,
    },
    /// Recover the most likely key for an assumed key length
    Keyguess {
        /// Ciphertext file ("-" reads stdin)
        input: PathBuf,
        /// Assumed key length
        #[arg(short, long)]
        length: usize,
        /// Alphabet size of the cipher being attacked (modulus, up to 256)
        #[arg(long, default_value_t = 256)]
        alphabet: u16,
    },
}

// ── Helpers ────────────────────────────────────────────────────────────────

/// Read the whole input: a named file, or stdin when the path is "-".
fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    if path.to_str() == Some("-") {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("reading stdin")?;
        Ok(buf)
    } else {
        std::fs::read(path).with_context(|| format!("reading input file {:?}", path))
    }
}

/// Write transformed bytes verbatim: no framing, no trailing newline.
fn write_output(bytes: &[u8], output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, bytes)
            .with_context(|| format!("writing output file {:?}", path)),
        None => {
            let mut out = io::stdout().lock();
            out.write_all(bytes)?;
            out.flush()?;
            Ok(())
        }
    }
}

// ── Subcommand implementations ─────────────────────────────────────────────

fn run_transform(
    key: &KeyArgs,
    input: PathBuf,
    output: Option<PathBuf>,
    decode: bool,
) -> anyhow::Result<()> {
    // Key problems surface here, before the input is read or any byte of
    // output is produced.
    let key = key.resolve()?;
    let cipher = Vigenere::new(key);

    let data = read_input(&input)?;
    let transformed = if decode {
        cipher.decode(&data)
    } else {
        cipher.encode(&data)
    };
    write_output(&transformed, output.as_deref())?;

    eprintln!(
        "read and wrote {} bytes ({} key bytes)",
        transformed.len(),
        cipher.key().keylength()
    );
    Ok(())
}

fn run_histogram(input: PathBuf) -> anyhow::Result<()> {
    let data = read_input(&input)?;
    let hist = Histogram::from_bytes(&data);

    println!("# total bytes: {}", hist.total());
    println!("# value\tcount\tproportion");
    for value in 0..=255u8 {
        println!(
            "{}\t{}\t{:.4}",
            value,
            hist.count(value),
            hist.proportion(value)
        );
    }
    Ok(())
}

fn run_ic(input: PathBuf) -> anyhow::Result<()> {
    let data = read_input(&input)?;
    let ic = index_of_coincidence(&data)?;
    let hist = Histogram::from_bytes(&data);

    eprintln!("read {} bytes", data.len());
    println!("alphabet of {} distinct byte values", hist.distinct());
    println!("index of coincidence {:.6}", ic);
    Ok(())
}

fn run_keylength(input: PathBuf, min: usize, max: usize) -> anyhow::Result<()> {
    let data = read_input(&input)?;
    eprintln!("read {} bytes", data.len());

    for (len, ic) in estimate_key_length(&data, min, max)? {
        println!("{}\t{:.6}", len, ic);
    }
    Ok(())
}

fn run_keyguess(input: PathBuf, length: usize, alphabet: u16) -> anyhow::Result<()> {
    let data = read_input(&input)?;
    eprintln!("read {} bytes, assumed key length {}", data.len(), length);

    let guess = guess_key(&data, length, alphabet)?;

    for (i, col) in guess.columns.iter().enumerate() {
        print!("column {}\t{}\t{}\t{}", i, col.len, col.plausible, col.offset);
        if col.offset.is_ascii_graphic() || col.offset == b' ' {
            print!("\t{}", col.offset as char);
        }
        println!();
    }

    // the shift list feeds straight back into `vig decode --shifts`
    println!("{}", guess.as_shift_list());
    if let Some(text) = guess.as_text() {
        println!("{:?}", text);
    }
    Ok(())
}

// ── Entry point ────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Encode { key, input, output } => run_transform(&key, input, output, false),
        Commands::Decode { key, input, output } => run_transform(&key, input, output, true),
        Commands::Histogram { input } => run_histogram(input),
        Commands::Ic { input } => run_ic(input),
        Commands::Keylength { input, min, max } => run_keylength(input, min, max),
        Commands::Keyguess {
            input,
            length,
            alphabet,
        } => run_keyguess(input, length, alphabet),
    }
}
