use clap::Parser;
use dotdash::{MORSE_TABLE, Mode, ReverseIndex, Settings, WORD_GAP, decode, encode, encode_strict};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dotdash")]
#[command(version)]
#[command(about = "Encode ASCII text to Morse code and decode it back", long_about = None)]
struct Cli {
    /// Encode text to Morse code (the default)
    #[arg(short, long, conflicts_with = "decode")]
    encode: bool,

    /// Decode Morse code to text
    #[arg(short, long)]
    decode: bool,

    /// Inline message to transcode
    #[arg(short = 's', long = "message", value_name = "TEXT", conflicts_with = "file")]
    message: Option<String>,

    /// File to transcode (if neither this nor --message is given, reads from stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Fail on characters outside the Morse table instead of skipping them
    #[arg(long)]
    strict: bool,

    /// List the symbol table
    #[arg(short, long)]
    list: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load defaults, then user and local overrides
    let settings = Settings::load_with_overrides()?;

    // Handle list command
    if cli.list {
        println!("Morse symbol table:\n");
        for (code, pattern) in MORSE_TABLE.iter().enumerate() {
            if pattern.is_empty() || *pattern == WORD_GAP {
                continue;
            }
            println!("  {}  {}", code as u8 as char, pattern);
        }
        println!("\nSpace and newline mark word gaps.");
        return Ok(());
    }

    let mode = if cli.encode {
        Mode::Encode
    } else if cli.decode {
        Mode::Decode
    } else {
        settings.mode()
    };

    // Resolve the message text; the codec itself never touches files
    let message = if let Some(message) = cli.message {
        message
    } else if let Some(file_path) = &cli.file {
        fs::read_to_string(file_path)?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    match mode {
        Mode::Encode => {
            let encoded = if cli.strict || settings.strict() {
                encode_strict(&message)?
            } else {
                encode(&message)
            };
            println!("{}", encoded);
        }
        Mode::Decode => {
            let index = ReverseIndex::build();
            println!("{}", decode(message.trim(), &index));
        }
    }

    Ok(())
}
