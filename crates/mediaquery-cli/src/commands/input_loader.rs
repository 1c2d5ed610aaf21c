use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Media query text plus the name diagnostics show for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub text: String,
    pub name: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("input is required: use a positional path, '-' for stdin, or -q/--query")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn load_input(input_path: Option<&Path>, query_text: Option<&str>) -> Result<Input, LoadError> {
    if let Some(text) = query_text {
        return Ok(Input {
            text: text.to_string(),
            name: None,
        });
    }

    let Some(path) = input_path else {
        return Err(LoadError::Missing);
    };

    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(LoadError::Stdin)?;
        return Ok(Input {
            text,
            name: Some("<stdin>".to_string()),
        });
    }

    let text = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Input {
        text,
        name: Some(path.to_string_lossy().into_owned()),
    })
}
