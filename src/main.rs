mod image;
mod process;
#[cfg(test)]
mod test_util;

use std::path::Path;
use std::process::ExitCode;

const INPUT_PATH: &str = "public/logo.png";
const OUTPUT_PATH: &str = "public/logo-transparent.png";

/// Single status line plus the exit code it goes with.
struct Report {
    code: u8,
    line: String,
}

fn run(input: &Path, output: &Path) -> Report {
    match process::process_file(input, output) {
        Ok(_) => Report {
            code: 0,
            line: format!("Transparent logo saved to: {}", output.display()),
        },
        Err(err) => Report {
            code: 1,
            line: format!("Error: {err:#}"),
        },
    }
}

fn main() -> ExitCode {
    let report = run(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH));
    if report.code == 0 {
        println!("{}", report.line);
    } else {
        eprintln!("{}", report.line);
    }
    ExitCode::from(report.code)
}
