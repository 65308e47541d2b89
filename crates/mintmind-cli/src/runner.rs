//! Saving the document and the compile-and-run step.

use mintmind_config::EditorConfig;
use mintmind_core::TextBuffer;
use mintmind_types::{BuildError, MintmindError};
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use tokio::process::Command;

/// Write the document to `path`, every line newline-terminated.
pub fn save(buffer: &TextBuffer, path: &Path) -> Result<(), MintmindError> {
    let mut file = BufWriter::new(File::create(path)?);
    buffer.write_to(&mut file)?;
    file.flush()?;
    tracing::debug!(path = %path.display(), lines = buffer.line_count(), "document saved");
    Ok(())
}

/// Compile the saved document and run the result with inherited stdio.
/// Returns the program's exit status.
pub async fn compile_and_run(config: &EditorConfig) -> Result<ExitStatus, MintmindError> {
    let status = Command::new(&config.compiler)
        .arg(&config.output)
        .arg("-o")
        .arg(&config.binary)
        .status()
        .await
        .map_err(|source| BuildError::Spawn {
            program: config.compiler.clone(),
            source,
        })?;
    if !status.success() {
        return Err(BuildError::CompileFailed {
            status: status.to_string(),
        }
        .into());
    }

    let program = runnable_path(&config.binary);
    let status = Command::new(&program)
        .status()
        .await
        .map_err(|source| BuildError::Spawn {
            program: program.display().to_string(),
            source,
        })?;
    Ok(status)
}

/// A bare file name would be looked up on `PATH`; run it from the current
/// directory instead.
fn runnable_path(binary: &Path) -> PathBuf {
    if binary.is_relative() && binary.parent() == Some(Path::new("")) {
        Path::new(".").join(binary)
    } else {
        binary.to_path_buf()
    }
}

/// Wait for the user to press Enter before returning to the editor.
pub async fn wait_for_enter() -> io::Result<()> {
    tokio::task::spawn_blocking(|| {
        let mut err = io::stderr();
        let _ = write!(err, "\nPress Enter to continue editing...");
        let _ = err.flush();
        let mut input = String::new();
        io::stdin().lock().read_line(&mut input).map(|_| ())
    })
    .await
    .map_err(io::Error::other)?
}

#[cfg(test)]
mod tests {
    use super::*;
    use mintmind_config::CliOverrides;
    use mintmind_config::SettingsFile;
    use mintmind_core::Limits;

    fn config_in(dir: &Path, compiler: &str) -> EditorConfig {
        let mut config = EditorConfig::resolve(
            SettingsFile::default(),
            dir.to_path_buf(),
            None,
            CliOverrides {
                compiler: Some(compiler.into()),
                ..CliOverrides::default()
            },
        )
        .unwrap();
        config.output = dir.join("program.c");
        config.binary = dir.join("program");
        config
    }

    #[test]
    fn save_writes_every_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("program.c");
        let buffer = TextBuffer::from_source(b"int main()\n{\n}", Limits::default());
        save(&buffer, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "int main()\n{\n}\n");
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("program.c");
        let err = save(&TextBuffer::default(), &path).unwrap_err();
        assert!(matches!(err, MintmindError::Io(_)));
    }

    #[test]
    fn bare_binary_names_run_from_current_dir() {
        assert_eq!(runnable_path(Path::new("program")), PathBuf::from("./program"));
        assert_eq!(runnable_path(Path::new("bin/program")), PathBuf::from("bin/program"));
        assert_eq!(runnable_path(Path::new("/tmp/program")), PathBuf::from("/tmp/program"));
    }

    #[tokio::test]
    async fn missing_compiler_is_a_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "mintmind-no-such-compiler");
        let err = compile_and_run(&config).await.unwrap_err();
        assert!(matches!(err, MintmindError::Build(BuildError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_compiler_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "false");
        let err = compile_and_run(&config).await.unwrap_err();
        assert!(matches!(
            err,
            MintmindError::Build(BuildError::CompileFailed { .. })
        ));
    }
}
