use anyhow::{Context, Result};
use clap::{App, Arg};
use std::io::{self, BufWriter, Write};

use sammask::emitter::SamRecordEmitter;
use sammask::streamer::modify_sam;

fn main() -> Result<()> {
    let mut app = App::new("sammask")
        .version("0.1.0")
        .about("Streams SAM alignments, including/excluding fields and tags")
        .subcommand(
            App::new("modify-sam")
                .about("Include/exclude fields and tags from a SAM stdin stream")
                .arg(
                    Arg::with_name("fields")
                        .long("fields")
                        .value_name("FIELDS")
                        .help("Comma-delimited list of fields to include in output SAM")
                        .takes_value(true)
                        .default_value(""),
                )
                .arg(
                    Arg::with_name("tags")
                        .long("tags")
                        .value_name("TAGS")
                        .help("Comma-delimited list of tags to include in output SAM")
                        .takes_value(true)
                        .default_value(""),
                )
                .arg(
                    Arg::with_name("notags")
                        .long("notags")
                        .value_name("NOTAGS")
                        .help("Comma-delimited list of tags to exclude from output SAM")
                        .takes_value(true)
                        .default_value(""),
                ),
        );
    let matches = app.clone().get_matches();

    match matches.subcommand() {
        Some(("modify-sam", sub_matches)) => {
            let fields = sub_matches.value_of("fields").unwrap_or("");
            let tags = sub_matches.value_of("tags").unwrap_or("");
            let notags = sub_matches.value_of("notags").unwrap_or("");

            let emitter = SamRecordEmitter::new(fields, tags, notags)
                .context("invalid modify-sam configuration")?;

            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            modify_sam(&emitter, stdin.lock(), &mut writer)
                .context("failed to stream SAM file")?;
            writer.flush().context("failed to flush output")?;
            Ok(())
        }
        _ => {
            app.print_help().context("failed to print help")?;
            println!();
            std::process::exit(1);
        }
    }
}
