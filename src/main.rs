//! markdown2html CLI - convert one Markdown file into an HTML file

use std::process::ExitCode;

use markdown2html::ConvertError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(std::env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(args: Vec<String>) -> Result<(), ConvertError> {
    let [input, output] = args.as_slice() else {
        return Err(ConvertError::InvalidArgumentCount { found: args.len() });
    };
    log::debug!("converting {input} to {output}");
    markdown2html::convert(input, output)
}
