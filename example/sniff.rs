use clap::Parser;
use plain_types::{filetype, octets};
use std::fs::File;
use std::path::PathBuf;
use std::process;

/// Print content type, image validity and checksum of files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Files to inspect
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Also print the SHA-256 of each file
    #[arg(short, long)]
    sha256: bool,
}

fn human_size(len: u64) -> String {
    let units = [
        (octets::EB, "EiB"),
        (octets::PB, "PiB"),
        (octets::TB, "TiB"),
        (octets::GB, "GiB"),
        (octets::MB, "MiB"),
        (octets::KB, "KiB"),
    ];
    for (unit, suffix) in units {
        if len >= unit {
            return format!("{:.1} {suffix}", len as f64 / unit as f64);
        }
    }
    format!("{len} B")
}

fn main() {
    let args = Args::parse();
    let mut failed = false;

    for path in &args.files {
        let mut file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                eprintln!("Error opening '{}': {}", path.display(), err);
                failed = true;
                continue;
            }
        };
        let len = file.metadata().map(|m| m.len()).unwrap_or(0);

        println!("{}", path.display());
        println!("  Size:  {}", human_size(len));

        match filetype::mime_type(&mut file) {
            Ok(mime) => println!("  Type:  {mime}"),
            Err(err) => {
                eprintln!("  Error sniffing: {err}");
                failed = true;
                continue;
            }
        }

        match filetype::is_image(&mut file) {
            Ok(Some(kind)) => println!("  Image: valid {kind}"),
            Ok(None) => println!("  Image: no"),
            Err(err) => println!("  Image: broken ({err})"),
        }

        if args.sha256 {
            match filetype::sha256_sum(&mut file) {
                Ok(sum) => println!("  SHA-256: {sum}"),
                Err(err) => {
                    eprintln!("  Error hashing: {err}");
                    failed = true;
                }
            }
        }
    }

    if failed {
        process::exit(1);
    }
}
