//! Renderer subprocess: hand the DOT text to graphviz.

use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Instant;

use tracing::{debug, info};

use typegraph_core::{Error, Result};

/// Result of one renderer invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl RenderOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// The external program that turns DOT text into an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    pub program: String,
    pub format: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            program: "dot".to_string(),
            format: "png:cairo".to_string(),
        }
    }
}

impl Renderer {
    pub fn new(program: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            format: format.into(),
        }
    }

    /// Run `<program> -T<format> -o <output>` with `dot` on stdin.
    ///
    /// Only a failure to start the program is an error. A non-zero exit is
    /// reported in the returned outcome.
    pub fn render(&self, dot: &str, output: &Path) -> Result<RenderOutcome> {
        let render_start = Instant::now();
        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", self.format))
            .arg("-o")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                Error::from(e)
                    .with_operation("render::spawn")
                    .with_context("program", self.program.clone())
            })?;

        // The renderer may fill its stdout pipe before draining stdin.
        let writer = child.stdin.take().map(|mut stdin| {
            let input = dot.to_string();
            thread::spawn(move || match stdin.write_all(input.as_bytes()) {
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
                other => other,
            })
        });

        let output_data = child.wait_with_output().map_err(|e| {
            Error::from(e)
                .with_operation("render::wait")
                .with_context("program", self.program.clone())
        })?;

        if let Some(writer) = writer {
            match writer.join() {
                Ok(Ok(())) => {}
                Ok(Err(e)) => debug!(error = %e, "renderer did not consume its input"),
                Err(_) => {
                    return Err(Error::render_failed("stdin writer panicked")
                        .with_operation("render::write_stdin"));
                }
            }
        }

        let outcome = RenderOutcome {
            exit_code: output_data.status.code(),
            stdout: String::from_utf8_lossy(&output_data.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output_data.stderr).into_owned(),
        };
        info!(
            program = %self.program,
            exit_code = ?outcome.exit_code,
            "Rendering: {:.2}s",
            render_start.elapsed().as_secs_f64()
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_success_requires_zero_exit() {
        let mut outcome = RenderOutcome {
            exit_code: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(outcome.success());
        outcome.exit_code = Some(1);
        assert!(!outcome.success());
        outcome.exit_code = None;
        assert!(!outcome.success());
    }

    #[test]
    fn default_renderer_is_graphviz_png() {
        let renderer = Renderer::default();
        assert_eq!(renderer.program, "dot");
        assert_eq!(renderer.format, "png:cairo");
    }
}
