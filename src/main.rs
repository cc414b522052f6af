//! CLI for daisy2rdf - DAISY XCRI to RDF converter

use clap::{Parser, ValueEnum};
use daisy2rdf::{ConvertOptions, Daisy2Rdf, OutputFormat, Profile};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input XCRI file path ("-" reads stdin)
    input: PathBuf,

    /// Output RDF file path (optional, prints to stdout if not specified)
    output: Option<PathBuf>,

    /// Subject URI rules to apply
    #[arg(long, value_enum, default_value_t = ProfileArg::Daisy)]
    profile: ProfileArg,

    /// Output serialization
    #[arg(long, value_enum, default_value_t = FormatArg::Rdfxml)]
    format: FormatArg,

    /// Base URI for elements without a URI identifier
    #[arg(long, default_value = daisy2rdf::ns::DEFAULT_BASE_URI)]
    base_uri: String,

    /// Fail when a course has no assessmentUnitCode identifier (daisy profile only)
    #[arg(long)]
    strict: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ProfileArg {
    Daisy,
    Base,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Rdfxml,
    Ntriples,
}

fn read_input(input: &Path) -> std::io::Result<String> {
    if input.as_os_str() == "-" {
        let mut xml = String::new();
        std::io::stdin().read_to_string(&mut xml)?;
        Ok(xml)
    } else {
        std::fs::read_to_string(input)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if args.strict && matches!(args.profile, ProfileArg::Base) {
        eprintln!("Error: --strict only applies to --profile daisy");
        std::process::exit(2);
    }

    let options = ConvertOptions {
        profile: match args.profile {
            ProfileArg::Daisy => Profile::Daisy,
            ProfileArg::Base => Profile::Base,
        },
        output_format: match args.format {
            FormatArg::Rdfxml => OutputFormat::RdfXml,
            FormatArg::Ntriples => OutputFormat::NTriples,
        },
        base_uri: args.base_uri,
        strict_identifiers: args.strict,
    };

    let xml = match read_input(&args.input) {
        Ok(xml) => xml,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            std::process::exit(1);
        }
    };

    let converter = Daisy2Rdf::new(options);

    match converter.convert_str(&xml) {
        Ok(rdf) => {
            if let Some(output) = args.output {
                if let Err(e) = std::fs::write(&output, &rdf) {
                    eprintln!("Error writing output: {}", e);
                    std::process::exit(1);
                }
                println!("Successfully converted to {:?}", output);
            } else {
                print!("{}", rdf);
            }
        }
        Err(e) => {
            eprintln!("Error converting XCRI: {}", e);
            std::process::exit(1);
        }
    }
}
