#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::process::{Command, Stdio};

    use drills::matrix::Storage;
    use figdemo::config::DemoConfig;
    use figdemo::demo::{run_matrix, run_shapes, run_vowels};
    use figdemo::io::output::ShapesOutput;
    use figdemo::io::{TokenReader, read_config, read_line, write_json};
    use figures_rs::io::ext_repr::{ExtFigure, ExtFrame};
    use float_cmp::approx_eq;
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("figdemo_{}_{name}", std::process::id()))
    }

    fn shapes(input: &str) -> (anyhow::Result<ShapesOutput>, String) {
        init_logger();
        let mut out = Vec::new();
        let result = run_shapes(&DemoConfig::default(), input.as_bytes(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn default_scene_is_reported_and_scaled() {
        let (result, text) = shapes("0 0\n2\n");
        let output = result.unwrap();

        assert_eq!(output.before.figures.len(), 3);
        assert_eq!(output.before.figures[0].index, 1);
        assert_eq!(output.before.figures[2].kind, "offset circle");
        assert_eq!(
            output.before.overall_frame,
            ExtFrame {
                center: (11.0, 11.0),
                width: 16.0,
                height: 16.0
            }
        );
        assert!(approx_eq!(
            f64,
            output.after.total_area,
            4.0 * output.before.total_area,
            epsilon = 1e-9
        ));
        assert_eq!(
            output.after.overall_frame,
            ExtFrame {
                center: (22.5, 22.5),
                width: 33.0,
                height: 33.0
            }
        );

        assert!(text.contains("=== Before scaling ==="));
        assert!(text.contains("Total area: 77.8319"));
        assert!(text.contains(
            "Overall frame rectangle: center (11.0000, 11.0000), width: 16.0000, height: 16.0000"
        ));
        assert!(text.contains("=== After scaling ==="));
        assert!(text.contains("Total area: 311.3274"));
        assert!(text.contains(
            "Overall frame rectangle: center (22.5000, 22.5000), width: 33.0000, height: 33.0000"
        ));
    }

    #[test]
    fn input_may_span_several_lines() {
        let (result, _) = shapes("  1\n\n2 \n 0.5");
        let output = result.unwrap();
        assert_eq!(output.pivot, (1.0, 2.0));
        assert_eq!(output.factor, 0.5);
    }

    #[test_case("abc", "invalid point input"; "non numeric point")]
    #[test_case("1", "invalid point input"; "incomplete point")]
    #[test_case("", "invalid point input"; "no input")]
    #[test_case("1 2 x", "invalid scale factor input"; "non numeric factor")]
    #[test_case("1 2", "invalid scale factor input"; "missing factor")]
    #[test_case("1 2 inf", "invalid scale factor input"; "infinite factor")]
    fn malformed_input_aborts(input: &str, expected: &str) {
        let (result, text) = shapes(input);
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), expected);
        assert!(!text.contains("=== After scaling ==="));
    }

    #[test_case("1 2 -3"; "negative")]
    #[test_case("1 2 0"; "zero")]
    fn invalid_factor_leaves_scene_unchanged(input: &str) {
        let (result, text) = shapes(input);
        let output = result.unwrap();
        assert_eq!(output.before, output.after);
        assert!(text.contains("=== After scaling ==="));
    }

    #[test]
    fn config_file_describes_the_scene() -> anyhow::Result<()> {
        let path = temp_path("config.json");
        fs::write(
            &path,
            r#"{
                "figures": [
                    { "type": "circle", "data": { "center": [0.0, 0.0], "radius": 1.0 } }
                ],
                "decimals": 1
            }"#,
        )?;
        let config = read_config(&path)?;
        fs::remove_file(&path)?;

        assert_eq!(config.decimals, 1);
        assert_eq!(
            config.figures,
            vec![ExtFigure::Circle {
                center: (0.0, 0.0),
                radius: 1.0
            }]
        );

        let mut out = Vec::new();
        run_shapes(&config, "0 0 3".as_bytes(), &mut out)?;
        let text = String::from_utf8(out)?;
        assert!(text.contains("Area: 3.1"));
        assert!(text.contains("Area: 28.3"));
        Ok(())
    }

    #[test]
    fn decimals_default_when_absent() -> anyhow::Result<()> {
        let config: DemoConfig = serde_json::from_str(r#"{ "figures": [] }"#)?;
        assert_eq!(config.decimals, DemoConfig::default().decimals);
        Ok(())
    }

    #[test]
    fn malformed_config_is_rejected() -> anyhow::Result<()> {
        let path = temp_path("bad_config.json");
        fs::write(&path, r#"{ "figures": 3 }"#)?;
        let result = read_config(&path);
        fs::remove_file(&path)?;
        assert!(result.is_err());
        assert!(read_config(&temp_path("missing.json")).is_err());
        Ok(())
    }

    #[test]
    fn report_is_written_as_json() -> anyhow::Result<()> {
        let (result, _) = shapes("0 0 2");
        let output = result?;

        let path = temp_path("report.json");
        write_json(&output, &path)?;
        let read_back: ShapesOutput = serde_json::from_str(&fs::read_to_string(&path)?)?;
        fs::remove_file(&path)?;

        assert_eq!(read_back, output);
        Ok(())
    }

    #[test_case(Storage::Bounded; "bounded")]
    #[test_case(Storage::Unbounded; "unbounded")]
    fn matrix_results_are_written(storage: Storage) -> anyhow::Result<()> {
        init_logger();
        let input = temp_path(&format!("matrix_in_{storage:?}.txt"));
        let output = temp_path(&format!("matrix_out_{storage:?}.txt"));
        fs::write(&input, "3 3\n3 1 2\n9 5 8\n4 0 7\n")?;

        run_matrix(storage, &input, &output)?;
        let written = fs::read_to_string(&output)?;
        fs::remove_file(&input)?;
        fs::remove_file(&output)?;

        // every column has runs of length 1, the first one wins
        assert_eq!(written, "1\n1\n");
        Ok(())
    }

    #[test]
    fn empty_matrix_writes_zeros() -> anyhow::Result<()> {
        let input = temp_path("empty_in.txt");
        let output = temp_path("empty_out.txt");
        fs::write(&input, "0 0")?;

        run_matrix(Storage::Bounded, &input, &output)?;
        let written = fs::read_to_string(&output)?;
        fs::remove_file(&input)?;
        fs::remove_file(&output)?;

        assert_eq!(written, "0\n0\n");
        Ok(())
    }

    #[test]
    fn missing_matrix_file_fails() {
        let result = run_matrix(
            Storage::Bounded,
            &temp_path("does_not_exist.txt"),
            &temp_path("unused_out.txt"),
        );
        assert!(result.is_err());
    }

    /// Runs the `figdemo` binary with an empty stdin and returns its exit status
    fn figdemo_status(args: &[&str]) -> Option<i32> {
        Command::new(env!("CARGO_BIN_EXE_figdemo"))
            .args(args)
            .stdin(Stdio::null())
            .output()
            .unwrap()
            .status
            .code()
    }

    #[test_case("3"; "unknown mode")]
    #[test_case("0"; "mode zero")]
    fn matrix_exit_code_for_bad_mode(mode: &str) {
        let input = temp_path("unused_mode_in.txt");
        let output = temp_path("unused_mode_out.txt");
        let status = figdemo_status(&[
            "matrix",
            mode,
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ]);
        assert_eq!(status, Some(1));
    }

    #[test]
    fn matrix_exit_code_for_missing_argument() {
        assert_eq!(figdemo_status(&["matrix", "1", "input.txt"]), Some(1));
    }

    #[test_case(None, "1"; "missing input file")]
    #[test_case(Some("2 2\n1 2\n3"), "2"; "too few numbers")]
    #[test_case(Some("x 2\n"), "2"; "unreadable size")]
    #[test_case(Some("101 100\n"), "1"; "too large for mode 1")]
    fn matrix_exit_code_for_bad_input(content: Option<&str>, mode: &str) -> anyhow::Result<()> {
        let case = format!("{mode}_{}", content.map_or(0, str::len));
        let input = temp_path(&format!("bad_matrix_in_{case}.txt"));
        let output = temp_path(&format!("bad_matrix_out_{case}.txt"));
        if let Some(content) = content {
            fs::write(&input, content)?;
        }

        let status = figdemo_status(&[
            "matrix",
            mode,
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ]);
        if content.is_some() {
            fs::remove_file(&input)?;
        }
        let _ = fs::remove_file(&output);

        assert_eq!(status, Some(2));
        Ok(())
    }

    #[test]
    fn matrix_exit_code_on_success() -> anyhow::Result<()> {
        let input = temp_path("ok_matrix_in.txt");
        let output = temp_path("ok_matrix_out.txt");
        fs::write(&input, "2 2\n1 1\n1 1\n")?;

        let status = figdemo_status(&[
            "matrix",
            "2",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ]);
        let written = fs::read_to_string(&output)?;
        fs::remove_file(&input)?;
        fs::remove_file(&output)?;

        assert_eq!(status, Some(0));
        assert_eq!(written, "1\n4\n");
        Ok(())
    }

    #[test]
    fn vowels_exit_code_without_input() {
        assert_eq!(figdemo_status(&["vowels"]), Some(1));
    }

    #[test_case("Hello world\n", "Hll wrld\n1\n"; "with repeat")]
    #[test_case("abc", "bc\n0\n"; "without newline")]
    #[test_case("yes\r\nno\n", "s\n0\n"; "only the first line")]
    fn vowels_are_stripped(input: &str, expected: &str) -> anyhow::Result<()> {
        let mut out = Vec::new();
        run_vowels(input.as_bytes(), &mut out)?;
        assert_eq!(String::from_utf8(out)?, expected);
        Ok(())
    }

    #[test_case("", "no input provided"; "no input")]
    #[test_case("\n", "empty line"; "empty line")]
    fn vowels_need_a_line(input: &str, expected: &str) {
        let mut out = Vec::new();
        let err = run_vowels(input.as_bytes(), &mut out).unwrap_err();
        assert_eq!(err.to_string(), expected);
        assert!(out.is_empty());
        assert!(read_line(input.as_bytes()).is_err());
    }

    #[test]
    fn tokens_are_read_across_lines() -> anyhow::Result<()> {
        let mut tokens = TokenReader::new("1.5 -2\n\n  3e2\nNaN".as_bytes());
        assert_eq!(tokens.next_f64()?, 1.5);
        assert_eq!(tokens.next_f64()?, -2.0);
        assert_eq!(tokens.next_f64()?, 300.0);
        assert!(tokens.next_f64().is_err());
        assert_eq!(tokens.next_token()?, None);
        Ok(())
    }
}
