//! prismcat
//!
//! Concatenate FILE(s), or standard input, to standard output, coloring
//! every character along a pride-flag gradient.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal, Read, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use prismcat::config::Settings;
use prismcat::flag::FLAGS;
use prismcat::input::CharReader;
use prismcat::phase::PhaseParams;
use prismcat::stream::{ColorMode, Colorizer};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Period of the wall-clock gradient drift, in seconds. Runs started within
/// the same second look identical; runs started apart do not.
const TIME_OFFSET_PERIOD: u64 = 300;

static HELP: &str = "\
Usage: prismcat [OPTIONS] [--] [FILES...]

Concatenate FILE(s), or standard input, to standard output, coloring
every character along a pride-flag gradient.
With no FILE, or when FILE is -, read standard input.

Options:
  -f, --flag <INDEX|NAME>         Flag to use: rainbow (0), transgender (1),
                                  nonbinary (2), lesbian (3), gay (4),
                                  pansexual (5), bisexual (6), genderfluid (7).
                                  Default: rainbow.
  -h, --horizontal-frequency <F>  Gradient change per column (default: 0.23)
  -v, --vertical-frequency <F>    Gradient change per line (default: 0.1)
  -F, --force-color               Color even when stdout is not a terminal
  -r, --random                    Start at a random point in the gradient
  -b, --24bit                     24-bit \"true color\" output (not supported
                                  by all terminals)
      --version                   Print version and exit
      --help                      Show this message

Examples:
  prismcat f - g      Output f's contents, then stdin, then g's contents.
  prismcat            Copy standard input to standard output.
  fortune | prismcat  Display a rainbow cookie.
";

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut settings = Settings::load_or_default();
    let mut first_input = args.len();

    // Parse command line arguments. The first argument that is not an
    // option (or anything after --) starts the input file list; --help is
    // deliberately left in that list and streamed through the colorizer.
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-f" | "--flag" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    return usage();
                };
                match parse_flag(value) {
                    Some(index) => settings.flag = index,
                    None => {
                        eprintln!("No flag with index or name \"{}\"", value);
                        return usage();
                    },
                }
            },
            "-h" | "--horizontal-frequency" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse::<f64>().ok()) {
                    Some(value) => settings.horizontal_frequency = value,
                    None => return usage(),
                }
            },
            "-v" | "--vertical-frequency" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse::<f64>().ok()) {
                    Some(value) => settings.vertical_frequency = value,
                    None => return usage(),
                }
            },
            "-F" | "--force-color" => {
                settings.force_color = true;
            },
            "-r" | "--random" => {
                settings.random = true;
            },
            "-b" | "--24bit" | "--truecolor" => {
                settings.truecolor = true;
            },
            "--version" => {
                println!("prismcat {}", env!("CARGO_PKG_VERSION"));
                return ExitCode::SUCCESS;
            },
            other => {
                if other == "--" {
                    i += 1;
                }
                first_input = i;
                break;
            },
        }
        i += 1;
        first_input = i;
    }

    if let Err(e) = settings.validate() {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let mut inputs: Vec<&str> = args[first_input.min(args.len())..]
        .iter()
        .map(String::as_str)
        .collect();
    if inputs.is_empty() {
        inputs.push("-");
    }

    let colors = settings.force_color || io::stdout().is_terminal();
    let mode = if settings.truecolor {
        ColorMode::TrueColor
    } else {
        ColorMode::Indexed
    };
    let random_offset: u32 = if settings.random { rand::random() } else { 0 };
    let phase = PhaseParams::new(
        settings.horizontal_frequency,
        settings.vertical_frequency,
        time_offset(),
        random_offset,
    );

    tracing::debug!(
        "flag={} mode={:?} freq_h={} freq_v={} colors={}",
        FLAGS[settings.flag].name,
        mode,
        settings.horizontal_frequency,
        settings.vertical_frequency,
        colors
    );

    // One colorizer for the whole run: line numbering and the phase offset
    // span sources, so concatenated files continue the gradient.
    let mut colorizer = if colors {
        Some(Colorizer::new(&FLAGS[settings.flag], mode, phase))
    } else {
        None
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for name in inputs {
        let reader: Box<dyn Read> = if name == "-" {
            Box::new(io::stdin().lock())
        } else if name == "--help" {
            Box::new(io::Cursor::new(HELP.as_bytes()))
        } else {
            match File::open(name) {
                Ok(file) => Box::new(BufReader::new(file)),
                Err(e) => {
                    eprintln!("Cannot open input file \"{}\": {}", name, e);
                    return ExitCode::from(2);
                },
            }
        };

        let mut chars = CharReader::new(reader);
        loop {
            let c = match chars.next_char() {
                Ok(Some(c)) => c,
                Ok(None) => break,
                Err(e) => {
                    eprintln!("Error reading input file \"{}\": {}", name, e);
                    return ExitCode::from(2);
                },
            };

            let written = match &mut colorizer {
                Some(colorizer) => colorizer.feed(c, &mut out),
                None => {
                    let mut buf = [0u8; 4];
                    out.write_all(c.encode_utf8(&mut buf).as_bytes())
                },
            };
            if let Err(e) = written {
                return write_failure(e);
            }
        }

        if let Some(colorizer) = &mut colorizer {
            if let Err(e) = colorizer.finish_source(&mut out) {
                return write_failure(e);
            }
        }
    }

    if let Err(e) = out.flush() {
        return write_failure(e);
    }

    ExitCode::SUCCESS
}

/// Resolve a flag argument: an ordinal or a name
fn parse_flag(value: &str) -> Option<usize> {
    if let Ok(index) = value.parse::<usize>() {
        return Some(index);
    }
    FLAGS.iter().position(|flag| flag.name == value)
}

/// Wall-clock phase offset as a fraction of a full turn
fn time_offset() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| (elapsed.as_secs() % TIME_OFFSET_PERIOD) as f64 / TIME_OFFSET_PERIOD as f64)
        .unwrap_or(0.0)
}

fn usage() -> ExitCode {
    eprintln!(
        "Usage: prismcat [-f flag] [-h horizontal_frequency] [-v vertical_frequency] \
         [-F] [-r] [-b] [--] [FILES...]"
    );
    eprintln!("Try 'prismcat --help' for more information.");
    ExitCode::FAILURE
}

/// A closed pipe downstream (e.g. `prismcat file | head`) is a normal way
/// for a run to end; anything else is a real error.
fn write_failure(e: io::Error) -> ExitCode {
    if e.kind() == io::ErrorKind::BrokenPipe {
        return ExitCode::SUCCESS;
    }
    eprintln!("Error writing output: {}", e);
    ExitCode::from(2)
}
