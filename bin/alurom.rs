use alurom::{
    assembler::Assembler,
    error::AssemblyError,
    memory::MemoryTable,
    operator::OperatorTable,
    rom::{self, DisassembleError, RomImage},
};

use clap::{App, Arg, ArgMatches};
use slog::{o, Discard, Drain, Level, Logger};
use slog_term::{FullFormat, TermDecorator};

enum Error {
    Assembly(AssemblyError),
    Parse(String),
    Disassembly(DisassembleError),
    IO(std::io::Error),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::IO(e)
    }
}

impl From<AssemblyError> for Error {
    fn from(e: AssemblyError) -> Error {
        Error::Assembly(e)
    }
}

impl From<DisassembleError> for Error {
    fn from(e: DisassembleError) -> Error {
        Error::Disassembly(e)
    }
}

fn parse_arguments() -> ArgMatches<'static> {
    App::new("alurom")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Mitja Karhusaari <mitja@karhusaari.me>")
        .about("Assembles ALU assignment programs into ROM initializer tables")
        .arg(Arg::with_name("source")
             .help("File containing the assembly source, or a ROM image with --disassemble")
             .value_name("SOURCE")
             .required(true)
             .index(1))
        .arg(Arg::with_name("disassemble")
             .help("Read SOURCE as a ROM image and print it as assembly source")
             .short("d")
             .long("disassemble"))
        .arg(Arg::with_name("verbose")
             .help("Log every assembled line to the standard error")
             .short("v")
             .long("verbose"))
        .get_matches()
}

fn create_logger(verbose: bool) -> Logger {
    if !verbose {
        return Logger::root(Discard, o!());
    }

    let decorator = TermDecorator::new().stderr().build();
    let drain = FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let drain = drain.filter_level(Level::Trace).fuse();

    Logger::root(drain, o!())
}

fn main() {
    let args = parse_arguments();

    let file_path = args.value_of("source").unwrap();
    let logger = create_logger(args.is_present("verbose"));

    let result = if args.is_present("disassemble") {
        disassemble(file_path)
    } else {
        assemble(file_path, logger)
    };

    let message = match result {
        Ok(()) => return,
        Err(Error::IO(io)) => format!("IO error: {}", io),
        Err(Error::Assembly(err)) => format!("Assembly error: {}", err),
        Err(Error::Parse(err)) => format!("Parse error: {}", err),
        Err(Error::Disassembly(err)) => format!("Disassembly error: {}", err),
    };

    eprintln!("{}", message);
    std::process::exit(1);
}

fn assemble(file_path: &str, logger: Logger) -> Result<(), Error> {
    let file = std::fs::read_to_string(file_path)?;

    let image = Assembler::standard()
        .assemble_with_logger(&file, logger.new(o!("file" => file_path.to_string())))?;

    println!("{}", image);

    Ok(())
}

fn disassemble(file_path: &str) -> Result<(), Error> {
    let file = std::fs::read_to_string(file_path)?;

    let image = RomImage::parse(&file)
        .map_err(|err: rom::ParseError| Error::Parse(err.verbose(&file).to_string()))?;

    for line in image.disassemble(OperatorTable::standard(), MemoryTable::standard())? {
        println!("{}", line);
    }

    Ok(())
}
