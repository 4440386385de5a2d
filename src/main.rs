use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use env_logger::Env;
use indicatif::ProgressBar;
use log::{debug, info};

use rolling_adler32::checksum::{self, to_be_bytes};
use rolling_adler32::parallel::sum_parallel;
use rolling_adler32::registry::{install_adler32, Registry};
use rolling_adler32::rolling_checksum::rolling_adler32::windows;
use rolling_adler32::streaming::{hash_reader, to_hex};

#[derive(Parser, Debug)]
#[clap(version, about)]
/// Computes Adler-32 checksums of files, whole or as a rolling window
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Prints the digest of every FILE as "<hex digest>  <path>"
    Sum {
        #[clap(long, default_value = "adler32")]
        /// Name of a registered algorithm, see the "algorithms" command
        algorithm: String,
        #[clap(long, default_value_t = 64 * 1024)]
        /// How many bytes are read and fed to the hasher at a time
        chunk_size: usize,
        #[clap(long)]
        /// Read each file whole and checksum chunks of this size in parallel (adler32 only)
        parallel_chunk_size: Option<usize>,
        #[clap(required = true)]
        /// The files to checksum
        files: Vec<PathBuf>,
    },
    /// Prints "<offset> <hex checksum>" for every --window-size=<WINDOW_SIZE> window of --file=<FILE>
    Roll {
        #[clap(long)]
        /// The file to scan
        file: PathBuf,
        #[clap(long)]
        /// Length of the sliding window in bytes
        window_size: usize,
        #[clap(long)]
        /// Recompute every window from scratch and fail on the first mismatch
        verify: bool,
    },
    /// Lists the algorithms the "sum" command accepts
    Algorithms,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli: Cli = Cli::parse();

    let mut registry = Registry::with_host_algorithms();
    install_adler32(&mut registry);

    return match cli.command {
        Commands::Sum {
            algorithm,
            chunk_size,
            parallel_chunk_size,
            files,
        } => {
            if parallel_chunk_size.is_some() && algorithm != "adler32" {
                bail!("--parallel-chunk-size only works with adler32, not {}", algorithm);
            }

            let stdout = std::io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            for file in files {
                debug!("hashing {} with {}", file.display(), algorithm);

                let digest = match parallel_chunk_size {
                    Some(parallel_chunk_size) => {
                        let mut content = Vec::<u8>::new();
                        File::open(&file)?.read_to_end(&mut content)?;
                        to_be_bytes(sum_parallel(&content, parallel_chunk_size)).to_vec()
                    }
                    None => {
                        let mut hasher = registry.create(&algorithm)?;
                        let mut reader = BufReader::new(File::open(&file)?);
                        hash_reader(hasher.as_mut(), &mut reader, chunk_size)?
                    }
                };
                writeln!(out, "{}  {}", to_hex(&digest), file.display())?;
            }
            out.flush()?;
            Ok(())
        }
        Commands::Roll {
            file,
            window_size,
            verify,
        } => {
            info!(
                "Rolling a {} byte window over {}",
                window_size,
                file.display()
            );

            let mut content = Vec::<u8>::new();
            File::open(&file)?.read_to_end(&mut content)?;

            let rolled = windows(&content, window_size);
            let progress = ProgressBar::new(rolled.len() as u64);

            let stdout = std::io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            for (offset, rolled_checksum) in rolled {
                if verify {
                    let expected = checksum::sum(&content[offset..offset + window_size]);
                    if expected != rolled_checksum {
                        progress.abandon();
                        bail!(
                            "window at {}: rolled {:08x} but recomputed {:08x}",
                            offset,
                            rolled_checksum,
                            expected
                        );
                    }
                }
                writeln!(out, "{} {:08x}", offset, rolled_checksum)?;
                progress.inc(1);
            }
            progress.finish_and_clear();
            out.flush()?;
            Ok(())
        }
        Commands::Algorithms => {
            for name in registry.names() {
                println!("{}", name);
            }
            Ok(())
        }
    };
}
