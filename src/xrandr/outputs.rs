//! Output discovery.
//!
//! Running xrandr without arguments prints one status line per output:
//!
//! ```text
//! Screen 0: minimum 320 x 200, current 1920 x 1080, maximum 16384 x 16384
//! eDP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 344mm x 193mm
//!    1920x1080     60.01*+
//! HDMI-1 disconnected (normal left inverted right x axis y axis)
//! ```
//!
//! Both `connected` and `disconnected` outputs are reported, so that an
//! output which was unplugged while still enabled is switched off too.

use crate::command::Invocation;
use crate::config::XrandrConfig;
use crate::traits::CommandRunner;
use log::debug;

/// The xrandr query could not be run.
#[derive(Debug, thiserror::Error)]
#[error("failed to query outputs with {program}: {message}")]
pub struct DiscoveryError {
    program: String,
    message: String,
}

/// Query the display tool and return every output it reports, in the
/// order reported.
pub fn list_connected_outputs<R: CommandRunner>(
    runner: &R,
    xrandr: &XrandrConfig,
) -> Result<Vec<String>, DiscoveryError> {
    let query = Invocation::new(&xrandr.program);
    let stdout = runner.run(&query).map_err(|e| DiscoveryError {
        program: xrandr.program.clone(),
        message: e.to_string(),
    })?;
    let outputs = parse_outputs(&stdout);
    debug!("discovered outputs: {:?}", outputs);
    Ok(outputs)
}

/// Extract output names from xrandr's query output.
///
/// A status line is one whose second token is `connected` or
/// `disconnected`; its first token is the output name.  Duplicates keep
/// their first position.
pub fn parse_outputs(stdout: &str) -> Vec<String> {
    let mut outputs: Vec<String> = Vec::new();
    for line in stdout.lines() {
        let mut tokens = line.split_whitespace();
        let (Some(name), Some(status)) = (tokens.next(), tokens.next()) else {
            continue;
        };
        if !matches!(status, "connected" | "disconnected") {
            continue;
        }
        if !outputs.iter().any(|o| o == name) {
            outputs.push(name.to_string());
        }
    }
    outputs
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::fake::{xrandr_query, FakeRunner};

    const QUERY: &str = "\
Screen 0: minimum 320 x 200, current 3840 x 1080, maximum 16384 x 16384
eDP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 344mm x 193mm
   1920x1080     60.01*+  59.97    59.96    59.93
   1680x1050     59.95    59.88
HDMI-1 connected 1920x1080+1920+0 (normal left inverted right x axis y axis) 531mm x 299mm
   1920x1080     60.00*+  50.00    59.94
DP-1 disconnected (normal left inverted right x axis y axis)
DP-2 disconnected (normal left inverted right x axis y axis)
";

    #[test]
    fn parses_status_lines_in_order() {
        assert_eq!(parse_outputs(QUERY), vec!["eDP-1", "HDMI-1", "DP-1", "DP-2"]);
    }

    #[test]
    fn ignores_mode_and_screen_lines() {
        let out = parse_outputs("Screen 0: minimum 8 x 8\n   1920x1080  60.00*+\n\n");
        assert!(out.is_empty());
    }

    #[test]
    fn word_connected_elsewhere_is_not_a_status_line() {
        let out = parse_outputs("note: nothing connected yet\neDP-1 connected\n");
        assert_eq!(out, vec!["eDP-1"]);
    }

    #[test]
    fn duplicates_collapse() {
        let out = parse_outputs("DP-1 connected\nDP-1 connected\nDP-2 disconnected\n");
        assert_eq!(out, vec!["DP-1", "DP-2"]);
    }

    #[test]
    fn runs_query_without_arguments() {
        let runner = FakeRunner::new().with_output("xrandr", &xrandr_query(&["eDP-1", "HDMI-1"]));
        let outputs = list_connected_outputs(&runner, &XrandrConfig::default()).unwrap();
        assert_eq!(outputs, vec!["eDP-1", "HDMI-1"]);
        assert_eq!(runner.lines(), vec!["xrandr"]);
    }

    #[test]
    fn uses_configured_program() {
        let xrandr = XrandrConfig {
            program: "/usr/bin/xrandr".into(),
            ..Default::default()
        };
        let runner = FakeRunner::new().with_output("/usr/bin/xrandr", "DP-3 connected\n");
        let outputs = list_connected_outputs(&runner, &xrandr).unwrap();
        assert_eq!(outputs, vec!["DP-3"]);
    }

    #[test]
    fn query_failure_is_error() {
        let runner = FakeRunner::new().failing("xrandr");
        let err = list_connected_outputs(&runner, &XrandrConfig::default()).unwrap_err();
        assert!(err.to_string().contains("xrandr"));
    }
}
