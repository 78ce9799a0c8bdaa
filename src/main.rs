use clap::{Parser, Subcommand};
use mapstyle::{ConvertError, Direction, OutputOptions, convert_file, load_options};
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert cartographic styles between the neutral JSON model and Mapnik XML
#[derive(Parser, Debug)]
#[command(name = "mapstyle", version)]
struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// style JSON -> Mapnik XML
    Write(WriteArgs),
    /// Mapnik XML -> style JSON
    Read(ReadArgs),
}

#[derive(clap::Args, Debug)]
struct WriteArgs {
    /// input style JSON
    input: PathBuf,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file with output options
    #[arg(long)]
    config: Option<PathBuf>,

    /// emit a bare <Style> without the <Map> container
    #[arg(long)]
    no_map: bool,

    /// directory prefixed to well-known mark glyph files
    #[arg(long)]
    glyph_base_path: Option<String>,
}

#[derive(clap::Args, Debug)]
struct ReadArgs {
    /// input Mapnik XML
    input: PathBuf,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl WriteArgs {
    fn options(&self) -> Result<OutputOptions, ConvertError> {
        let mut options = match &self.config {
            Some(path) => load_options(path)?,
            None => OutputOptions::default(),
        };
        if self.no_map {
            options.include_map_container = false;
        }
        if let Some(base) = &self.glyph_base_path {
            options.glyph_base_path = Some(base.clone());
        }
        Ok(options)
    }
}

fn run(cli: CommandLineInterface) -> Result<(), ConvertError> {
    let (converted, output) = match cli.cmd {
        Command::Write(args) => {
            let options = args.options()?;
            let converted = convert_file(Direction::Write, &args.input, args.output.as_deref(), &options)?;
            (converted, args.output)
        }
        Command::Read(args) => {
            let converted = convert_file(
                Direction::Read,
                &args.input,
                args.output.as_deref(),
                &OutputOptions::default(),
            )?;
            (converted, args.output)
        }
    };

    match output {
        Some(path) => log::info!("wrote {}", path.display()),
        None if converted.ends_with('\n') => print!("{converted}"),
        None => println!("{converted}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(CommandLineInterface::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
