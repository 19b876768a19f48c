use std::path::Path;

use crate::error::RecolorError;

pub fn verify_existence_of_files(image: &Path, output: &Path) -> Result<(), RecolorError> {
    if !image.is_file() {
        return Err(RecolorError::ImageDoesNotExist(image.to_path_buf()));
    }
    if output.exists() {
        return Err(RecolorError::OutputFileAlreadyExists(output.to_path_buf()));
    }
    Ok(())
}

pub fn check_file_format(
    image: &Path,
    output: &Path,
    allowed_formats: &[String],
) -> Result<(), RecolorError> {
    for path in [image, output] {
        let ext = extension_of(path);
        if !allowed_formats.iter().any(|f| *f == ext) {
            return Err(RecolorError::InvalidFileFormat(path.to_path_buf()));
        }
    }
    Ok(())
}

/// Everything after the last '.', or the whole path when there is none.
fn extension_of(path: &Path) -> String {
    let s = path.to_string_lossy();
    match s.rsplit_once('.') {
        Some((_, ext)) => ext.to_string(),
        None => s.into_owned(),
    }
}
