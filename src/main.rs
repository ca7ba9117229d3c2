use clap::{Parser, Subcommand};
use convdate::{
    request::date_from_request, BadRequestParamError, DateFormat, DateParseError, DateParser,
};
use env_logger::{Builder, Env};
use std::error::Error;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Unparseable(#[from] DateParseError),

    #[error("{}", .0.client_message())]
    BadRequest(#[from] BadRequestParamError),
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parses a date and prints it as `YYYY-MM-DD`, along with the format it matched
    Parse {
        /// The date text to parse
        value: String,

        /// Name of the date for error messages, e.g. "start date"
        #[arg(short, long)]
        name: Option<String>,

        /// Show the rejected value as is instead of masking its digits
        #[arg(long)]
        no_mask: bool,
    },

    /// Parses a date the way a request handler would
    ///
    /// On failure, the detailed error is logged and only a generic message is printed
    Request {
        /// The date text to parse
        value: String,

        /// Name of the date for error messages, e.g. "start date"
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Lists the accepted date formats, in the order they are tried
    Formats,
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match do_work(cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            if let CliError::BadRequest(bad_request) = &e {
                log_with_sources(bad_request);
            }
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn log_with_sources(err: &dyn Error) {
    log::error!("bad request parameter: {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        log::error!("  caused by: {}", cause);
        source = cause.source();
    }
}

fn do_work(cli: Cli) -> Result<String, CliError> {
    match cli.command {
        Commands::Parse {
            value,
            name,
            no_mask,
        } => {
            let (date, format) = DateParser::new()
                .maybe_field_name(name.as_deref())
                .mask(!no_mask)
                .parse_with_format(&value)?;
            Ok(match format {
                Some(format) => format!("{date} ({format})"),
                None => date.to_string(),
            })
        }
        Commands::Request { value, name } => {
            Ok(date_from_request(&value, name.as_deref())?.to_string())
        }
        Commands::Formats => Ok(DateFormat::ALL
            .iter()
            .map(|format| format.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
