use std::env;
use std::process::ExitCode;

use knapsack_dp::scenarios::{run_battery, standard_battery, ScenarioReport};
use knapsack_dp::ConsistencyChecker;

fn main() -> ExitCode {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("knapsack_demo: {err}");
            Options::print_help();
            return ExitCode::from(2);
        }
    };

    #[cfg(feature = "tracing")]
    init_tracing();

    let mut builder = ConsistencyChecker::builder();
    if options.rolling {
        builder = builder.with_rolling_row();
    }
    let checker = builder.build();

    let reports = match run_battery(&checker, &standard_battery()) {
        Ok(reports) => reports,
        Err(err) => {
            eprintln!("knapsack_demo: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = options.format.write(&reports) {
        eprintln!("knapsack_demo output error: {err}");
        return ExitCode::FAILURE;
    }

    let failed = reports.iter().filter(|r| !r.passed()).count();
    eprintln!(
        "\n{} scenario(s), {} passed, {} failed",
        reports.len(),
        reports.len() - failed,
        failed
    );

    if options.strict && failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when embedded; keep going.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

struct Options {
    format: OutputFormat,
    strict: bool,
    rolling: bool,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Table;
        let mut strict = false;
        let mut rolling = false;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if arg == "--strict" {
                strict = true;
            } else if arg == "--rolling" {
                rolling = true;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            strict,
            rolling,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin knapsack_demo [-- <options>]

Runs the reference knapsack scenarios through every solving method and
reports per-method PASS/FAIL plus a consistency verdict.

Options:
  --format <table|csv|json>     Output format (default: table)
  --rolling                     Also run the single-row prefix solver
  --strict                      Exit with status 1 if any scenario fails
  -h, --help                    Print this help message

Examples:
  cargo run --bin knapsack_demo
  cargo run --bin knapsack_demo -- --format csv --strict
"
        );
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, reports: &[ScenarioReport]) -> Result<(), String> {
        match self {
            OutputFormat::Table => write_table(reports),
            OutputFormat::Csv => write_csv(reports),
            OutputFormat::Json => write_json(reports),
        }
    }
}

fn verdict(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "FAIL"
    }
}

fn consistency_label(report: &ScenarioReport) -> &'static str {
    if report.consistent {
        "ALL MATCH"
    } else {
        "ERROR"
    }
}

fn write_table(reports: &[ScenarioReport]) -> Result<(), String> {
    for (idx, report) in reports.iter().enumerate() {
        let s = &report.scenario;
        let items: Vec<String> = s
            .weights
            .iter()
            .zip(&s.values)
            .map(|(w, v)| format!("({w}, {v})"))
            .collect();
        println!("\nTest Case #{} ({}):", idx + 1, s.name);
        println!("Items: [{}]", items.join(", "));
        println!("Capacity: {} | Expected: {}", s.capacity, s.expected);
        for o in &report.outcomes {
            println!("{}: {} | {}", o.method, o.value, verdict(o.passed));
        }
        println!("Consistency: {}", consistency_label(report));
    }
    Ok(())
}

fn write_csv(reports: &[ScenarioReport]) -> Result<(), String> {
    println!("scenario,capacity,expected,method,value,status,consistency");
    for report in reports {
        let s = &report.scenario;
        for o in &report.outcomes {
            println!(
                "{},{},{},{},{},{},{}",
                csv_field(s.name),
                s.capacity,
                s.expected,
                o.method,
                o.value,
                verdict(o.passed),
                consistency_label(report)
            );
        }
    }
    Ok(())
}

fn write_json(reports: &[ScenarioReport]) -> Result<(), String> {
    println!("[");
    for (idx, report) in reports.iter().enumerate() {
        let s = &report.scenario;
        let methods: Vec<String> = report
            .outcomes
            .iter()
            .map(|o| {
                format!(
                    "{{\"method\":\"{}\",\"value\":{},\"status\":\"{}\"}}",
                    o.method,
                    o.value,
                    verdict(o.passed)
                )
            })
            .collect();
        let comma = if idx + 1 == reports.len() { "" } else { "," };
        println!(
            "  {{\"scenario\":{},\"weights\":{:?},\"values\":{:?},\"capacity\":{},\"expected\":{},\"consistent\":{},\"methods\":[{}]}}{}",
            json_string(s.name),
            s.weights,
            s.values,
            s.capacity,
            s.expected,
            report.consistent,
            methods.join(","),
            comma
        );
    }
    println!("]");
    Ok(())
}

/// Quote a CSV field, doubling embedded quotes.
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Encode `value` as a JSON string literal.
fn json_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
