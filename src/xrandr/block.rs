//! Per-display flag blocks.

use crate::alias::Aliases;
use crate::config::{Display, XrandrConfig};

/// Build the xrandr flags for one display.
///
/// The block always has this shape, with optional parts omitted:
///
/// ```text
/// --output <name> [--primary] [--rotate <r>] [--<position> <other>]... [--pos <x>x<y>] [--auto | --mode <res>]
/// ```
///
/// Both `logical_name` and every placement target go through `aliases`.
/// Position strings are not validated; xrandr rejects bad ones.
pub fn build_block(
    logical_name: &str,
    display: &Display,
    aliases: &Aliases,
    xrandr: &XrandrConfig,
) -> Vec<String> {
    let mut flags = vec!["--output".to_string(), aliases.resolve(logical_name).to_string()];

    if display.primary {
        flags.push("--primary".into());
    }

    if !display.rotate.is_empty() {
        flags.push("--rotate".into());
        flags.push(display.rotate.clone());
    }

    for placement in &display.order {
        flags.push(format!("--{}", placement.position));
        flags.push(aliases.resolve(&placement.display).to_string());
    }

    if display.position.enable {
        flags.push("--pos".into());
        flags.push(format!("{}x{}", display.position.x, display.position.y));
    }

    if display.resolution.is_empty() {
        flags.push("--auto".into());
    } else if xrandr.apply_resolution {
        flags.push("--mode".into());
        flags.push(display.resolution.clone());
    }

    flags
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AbsolutePosition, Placement};

    fn placement(display: &str, position: &str) -> Placement {
        Placement {
            display: display.into(),
            position: position.into(),
        }
    }

    fn block(name: &str, display: &Display) -> Vec<String> {
        build_block(name, display, &Aliases::default(), &XrandrConfig::default())
    }

    #[test]
    fn default_display_is_auto() {
        assert_eq!(block("eDP-1", &Display::default()), vec!["--output", "eDP-1", "--auto"]);
    }

    #[test]
    fn primary_flag() {
        let d = Display {
            primary: true,
            ..Default::default()
        };
        assert_eq!(block("eDP-1", &d), vec!["--output", "eDP-1", "--primary", "--auto"]);
    }

    #[test]
    fn explicit_resolution_emits_nothing_by_default() {
        let d = Display {
            resolution: "1920x1080".into(),
            ..Default::default()
        };
        assert_eq!(block("HDMI-1", &d), vec!["--output", "HDMI-1"]);
    }

    #[test]
    fn explicit_resolution_with_apply_resolution_emits_mode() {
        let d = Display {
            resolution: "2560x1440".into(),
            ..Default::default()
        };
        let xrandr = XrandrConfig {
            apply_resolution: true,
            ..Default::default()
        };
        let flags = build_block("DP-1", &d, &Aliases::default(), &xrandr);
        assert_eq!(flags, vec!["--output", "DP-1", "--mode", "2560x1440"]);
        assert!(!flags.contains(&"--auto".to_string()));
    }

    #[test]
    fn full_block_ordering() {
        let d = Display {
            resolution: String::new(),
            primary: true,
            rotate: "left".into(),
            order: vec![placement("eDP-1", "right-of"), placement("DP-1", "below")],
            position: AbsolutePosition {
                enable: true,
                x: 1920,
                y: 0,
            },
        };
        assert_eq!(
            block("HDMI-1", &d),
            vec![
                "--output", "HDMI-1", "--primary", "--rotate", "left", "--right-of", "eDP-1",
                "--below", "DP-1", "--pos", "1920x0", "--auto",
            ]
        );
    }

    #[test]
    fn disabled_position_is_ignored() {
        let d = Display {
            position: AbsolutePosition {
                enable: false,
                x: 5,
                y: 5,
            },
            ..Default::default()
        };
        assert!(!block("DP-1", &d).contains(&"--pos".to_string()));
    }

    #[test]
    fn aliases_resolved_for_output_and_targets() {
        let aliases: Aliases = [("laptop", "eDP-1"), ("tv", "HDMI-1")].into_iter().collect();
        let d = Display {
            order: vec![placement("laptop", "left-of")],
            ..Default::default()
        };
        let flags = build_block("tv", &d, &aliases, &XrandrConfig::default());
        assert_eq!(flags, vec!["--output", "HDMI-1", "--left-of", "eDP-1", "--auto"]);
    }

    #[test]
    fn position_string_passed_through() {
        let d = Display {
            order: vec![placement("eDP-1", "diagonal-of")],
            ..Default::default()
        };
        assert!(block("DP-1", &d).contains(&"--diagonal-of".to_string()));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let d = Display {
            primary: true,
            rotate: "inverted".into(),
            order: vec![placement("a", "above"), placement("b", "same-as")],
            ..Default::default()
        };
        let first = block("x", &d);
        for _ in 0..10 {
            assert_eq!(block("x", &d), first);
        }
    }
}
