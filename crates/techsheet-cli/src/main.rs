use serde::Serialize;
use std::path::Path;
use std::str::FromStr;
use techsheet::{DimensionSpec, SheetLocale, TechSheetGenerator, VerifyOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Techsheet(techsheet::Error),
    Json(serde_json::Error),
    Mismatches(usize),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Techsheet(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Mismatches(n) => write!(f, "{n} dimension mismatch(es) found"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<techsheet::Error> for CliError {
    fn from(value: techsheet::Error) -> Self {
        Self::Techsheet(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    Extract,
    Verify,
    #[default]
    Sheets,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Audience {
    Client,
    Workshop,
    #[default]
    Both,
}

impl FromStr for Audience {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "client" => Ok(Self::Client),
            "workshop" => Ok(Self::Workshop),
            "both" => Ok(Self::Both),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    spec: Option<String>,
    tolerance: Option<f64>,
    audience: Audience,
    locale: SheetLocale,
    pretty: bool,
    out: Option<String>,
}

fn usage() -> &'static str {
    "techsheet-cli\n\
\n\
USAGE:\n\
  techsheet-cli extract [--pretty] <path>\n\
  techsheet-cli verify --spec <spec.json> [--tolerance <n>] [--pretty] <path>\n\
  techsheet-cli [sheets] [--spec <spec.json>] [--tolerance <n>] [--audience client|workshop|both] [--locale en|ru] [--out <path>] <path>\n\
\n\
NOTES:\n\
  - <path> must end in .svg; .cdr files are recognized but not supported.\n\
  - The spec is JSON: {\"<id>\": {\"width\": <n>, \"height\": <n>}}; missing fields are not checked.\n\
  - verify prints mismatches as JSON and exits with status 4 when any are found.\n\
  - sheets reports mismatches on stderr (see RUST_LOG) and still prints the sheets.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "extract" => args.command = Command::Extract,
            "verify" => args.command = Command::Verify,
            "sheets" => args.command = Command::Sheets,
            "--pretty" => args.pretty = true,
            "--spec" => {
                let Some(spec) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.spec = Some(spec.clone());
            }
            "--tolerance" => {
                let Some(tol) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                let tol = tol.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
                if !(tol.is_finite() && tol >= 0.0) {
                    return Err(CliError::Usage(usage()));
                }
                args.tolerance = Some(tol);
            }
            "--audience" => {
                let Some(audience) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.audience = audience
                    .parse::<Audience>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--locale" => {
                let Some(locale) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.locale = locale
                    .parse::<SheetLocale>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if args.input.is_none() {
        return Err(CliError::Usage(usage()));
    }
    if matches!(args.command, Command::Verify) && args.spec.is_none() {
        return Err(CliError::Usage(usage()));
    }

    Ok(args)
}

fn read_spec(path: Option<&str>) -> Result<DimensionSpec, CliError> {
    match path {
        None => Ok(DimensionSpec::new()),
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(DimensionSpec::from_json_str(&text)?)
        }
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            println!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let Some(input) = args.input.as_deref() else {
        return Err(CliError::Usage(usage()));
    };
    let input = Path::new(input);
    let verify = args
        .tolerance
        .map(VerifyOptions::with_tolerance)
        .unwrap_or_default();

    match args.command {
        Command::Extract => {
            let objects = techsheet::extract_dimensions(input)?;
            write_json(&objects, args.pretty)
        }
        Command::Verify => {
            let spec = read_spec(args.spec.as_deref())?;
            let objects = techsheet::extract_dimensions(input)?;
            let mismatches = techsheet::verify_with(&objects, &spec, &verify);
            write_json(&mismatches, args.pretty)?;
            if mismatches.is_empty() {
                Ok(())
            } else {
                Err(CliError::Mismatches(mismatches.len()))
            }
        }
        Command::Sheets => {
            let spec = read_spec(args.spec.as_deref())?;
            let generator = TechSheetGenerator {
                verify,
                ..TechSheetGenerator::new()
            }
            .with_locale(args.locale);
            let sheets = generator.generate(input, &spec)?;

            let text = match args.audience {
                Audience::Client => sheets.client_sheet,
                Audience::Workshop => sheets.workshop_sheet,
                Audience::Both => format!("{}\n\n{}", sheets.client_sheet, sheets.workshop_sheet),
            };
            write_text(&text, args.out.as_deref())
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err @ CliError::Mismatches(_)) => {
            eprintln!("{err}");
            std::process::exit(4);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
