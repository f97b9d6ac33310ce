//! File-to-file conversion.

use std::fs;
use std::path::Path;

use crate::range::MAX_INPUT_LEN;
use crate::{ConvertError, Options, to_html_with_options};

/// Convert the Markdown file at `input` into HTML at `output`.
///
/// The input must be an existing regular file; otherwise
/// [`ConvertError::MissingInputFile`] is returned and `output` is not
/// touched. Inputs over [`MAX_INPUT_LEN`] bytes fail with
/// [`ConvertError::InputTooLarge`] before they are read. An existing
/// `output` is overwritten.
pub fn convert<P, Q>(input: P, output: Q) -> Result<(), ConvertError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    convert_with_options(input, output, &Options::default())
}

/// Convert a file with explicit options.
pub fn convert_with_options<P, Q>(
    input: P,
    output: Q,
    options: &Options,
) -> Result<(), ConvertError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();

    let metadata = match fs::metadata(input) {
        Ok(metadata) if metadata.is_file() => metadata,
        _ => {
            return Err(ConvertError::MissingInputFile {
                path: input.to_path_buf(),
            });
        }
    };
    check_input_len(input, metadata.len())?;

    let markdown = fs::read_to_string(input).map_err(|source| ConvertError::InputReadFailure {
        path: input.to_path_buf(),
        source,
    })?;
    // The file may have grown since it was checked
    check_input_len(input, markdown.len() as u64)?;
    log::debug!("read {} bytes from {}", markdown.len(), input.display());

    let html = to_html_with_options(&markdown, options);

    fs::write(output, &html).map_err(|source| ConvertError::OutputWriteFailure {
        path: output.to_path_buf(),
        source,
    })?;
    log::info!(
        "converted {} -> {} ({} bytes)",
        input.display(),
        output.display(),
        html.len()
    );

    Ok(())
}

/// Offsets into the input are `u32`, so longer inputs are refused.
fn check_input_len(path: &Path, len: u64) -> Result<(), ConvertError> {
    let limit = MAX_INPUT_LEN as u64;
    if len > limit {
        return Err(ConvertError::InputTooLarge {
            path: path.to_path_buf(),
            len,
            limit,
        });
    }
    Ok(())
}
