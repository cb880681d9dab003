//! Tests for command-line parsing, validation and output path derivation

#[cfg(test)]
mod tests {
    use atsumaru::AssemblyError;
    use atsumaru::io::cli::{Cli, FileProcessor, MatcherKind};
    use atsumaru::io::configuration::{
        DEFAULT_BAND_WIDTH, DEFAULT_SEED, DEFAULT_SEED_PLACEMENTS, DEFAULT_TILE_SIZE,
    };
    use atsumaru::matching::Matcher;
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use std::path::{Path, PathBuf};

    // Tests CLI parsing with only the required target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "test.png"]);

        assert_eq!(cli.target, PathBuf::from("test.png"));
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.tile_size, DEFAULT_TILE_SIZE);
        assert_eq!(cli.band_width, DEFAULT_BAND_WIDTH);
        assert_eq!(cli.seeds, DEFAULT_SEED_PLACEMENTS);
        assert_eq!(cli.matcher, MatcherKind::Edge);
        assert_eq!(cli.width, None);
        assert_eq!(cli.height, None);
        assert!(!cli.orientations);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "input.png",
            "--seed",
            "123",
            "-t",
            "16",
            "-w",
            "7",
            "-H",
            "5",
            "--matcher",
            "mean",
            "--band-width",
            "3",
            "--seeds",
            "4",
            "--orientations",
            "--no-rotate",
            "--no-shuffle",
            "--visualize",
            "--layout",
            "--quiet",
            "--no-skip",
        ]);

        assert_eq!(cli.seed, 123);
        assert_eq!(cli.tile_size, 16);
        assert_eq!(cli.width, Some(7));
        assert_eq!(cli.height, Some(5));
        assert_eq!(cli.matcher, MatcherKind::Mean);
        assert_eq!(cli.band_width, 3);
        assert_eq!(cli.seeds, 4);
        assert!(cli.orientations && cli.no_rotate && cli.no_shuffle);
        assert!(cli.visualize && cli.layout);
        assert!(!cli.should_show_progress());
        assert!(!cli.skip_existing());
    }

    // Verified by inverting boolean logic in skip_existing
    #[test]
    fn test_skip_existing_logic() {
        assert!(Cli::parse_from(["program", "test.png"]).skip_existing());
        assert!(!Cli::parse_from(["program", "test.png", "--no-skip"]).skip_existing());
    }

    #[test]
    fn test_matcher_selection_carries_band_width() {
        let edge = Cli::parse_from(["program", "a.png", "-b", "6"]);
        let mean = Cli::parse_from(["program", "a.png", "-m", "mean"]);

        assert_eq!(edge.matcher(), Matcher::EdgeBand { band_width: 6 });
        assert_eq!(mean.matcher(), Matcher::MeanColor);
    }

    // Missing dimensions fall back to the source grid, bad ones are rejected
    #[test]
    fn test_canvas_size() {
        let cli = Cli::parse_from(["program", "a.png", "-w", "9"]);
        assert_eq!(cli.canvas_size((4, 3)).ok(), Some((9, 3)));

        let zero = Cli::parse_from(["program", "a.png", "-H", "0"]);
        assert!(matches!(
            zero.canvas_size((4, 3)),
            Err(AssemblyError::InvalidParameter {
                parameter: "height",
                ..
            })
        ));

        let huge = Cli::parse_from(["program", "a.png", "-w", "10001"]);
        assert!(huge.canvas_size((4, 3)).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        assert!(Cli::parse_from(["program", "a.png"]).validate().is_ok());

        for (flag, parameter) in [
            ("--tile-size", "tile-size"),
            ("--band-width", "band-width"),
            ("--seeds", "seeds"),
        ] {
            let cli = Cli::parse_from(["program", "a.png", flag, "0"]);
            assert!(
                matches!(
                    cli.validate(),
                    Err(AssemblyError::InvalidParameter { parameter: p, .. }) if p == parameter
                ),
                "{flag} 0 should be rejected"
            );
        }
    }

    #[test]
    fn test_output_paths() {
        let input = Path::new("dir/photo.jpg");

        assert_eq!(
            FileProcessor::get_output_path(input),
            PathBuf::from("dir/photo_assembled.png")
        );
        assert_eq!(
            FileProcessor::get_visualization_path(input),
            PathBuf::from("dir/photo_assembly.gif")
        );
        assert_eq!(
            FileProcessor::get_layout_path(input),
            PathBuf::from("dir/photo_layout.txt")
        );
    }

    // Assembled outputs are never picked up as new inputs
    // Verified by removing the suffix check
    #[test]
    fn test_is_source_image() {
        assert!(FileProcessor::is_source_image(Path::new("a.png")));
        assert!(FileProcessor::is_source_image(Path::new("b.JPEG")));
        assert!(!FileProcessor::is_source_image(Path::new("a_assembled.png")));
        assert!(!FileProcessor::is_source_image(Path::new("notes.txt")));
        assert!(!FileProcessor::is_source_image(Path::new("no_extension")));
    }

    fn write_quadrant_image(path: &Path) {
        let img = RgbImage::from_fn(8, 8, |x, y| match (x < 4, y < 4) {
            (true, true) => Rgb([250, 10, 10]),
            (false, true) => Rgb([10, 250, 10]),
            (true, false) => Rgb([10, 10, 250]),
            (false, false) => Rgb([200, 200, 30]),
        });
        img.save(path).expect("write source image");
    }

    // Runs the full pipeline on a small image and checks every requested output
    #[test]
    fn test_process_single_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("quad.png");
        write_quadrant_image(&input);

        let cli = Cli::parse_from([
            "program",
            input.to_str().expect("utf-8 path"),
            "-t",
            "4",
            "--visualize",
            "--layout",
            "--quiet",
        ]);
        FileProcessor::new(cli).process().expect("process");

        let output = image::open(FileProcessor::get_output_path(&input))
            .expect("assembled image")
            .to_rgb8();
        assert_eq!(output.dimensions(), (8, 8));
        assert!(FileProcessor::get_visualization_path(&input).exists());

        let layout = std::fs::read_to_string(FileProcessor::get_layout_path(&input))
            .expect("layout dump");
        assert_eq!(layout, "##\n##\n");
    }

    #[test]
    fn test_process_directory_skips_existing_output() {
        let dir = tempfile::tempdir().expect("temp dir");
        let first = dir.path().join("a.png");
        let second = dir.path().join("b.png");
        write_quadrant_image(&first);
        write_quadrant_image(&second);
        std::fs::write(FileProcessor::get_output_path(&first), b"placeholder")
            .expect("existing output");

        let cli = Cli::parse_from([
            "program",
            dir.path().to_str().expect("utf-8 path"),
            "-t",
            "4",
            "--quiet",
        ]);
        FileProcessor::new(cli).process().expect("process");

        let untouched =
            std::fs::read(FileProcessor::get_output_path(&first)).expect("existing output");
        assert_eq!(untouched, b"placeholder");
        assert!(FileProcessor::get_output_path(&second).exists());
    }

    #[test]
    fn test_process_too_many_tiles_for_canvas() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("quad.png");
        write_quadrant_image(&input);

        let cli = Cli::parse_from([
            "program",
            input.to_str().expect("utf-8 path"),
            "-t",
            "4",
            "-w",
            "1",
            "-H",
            "2",
            "--quiet",
        ]);
        let result = FileProcessor::new(cli).process();

        assert!(matches!(
            result,
            Err(AssemblyError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn test_process_rejects_non_image_target() {
        let dir = tempfile::tempdir().expect("temp dir");
        let text = dir.path().join("notes.txt");
        std::fs::write(&text, "hello").expect("write");

        let cli = Cli::parse_from(["program", text.to_str().expect("utf-8 path"), "--quiet"]);

        assert!(matches!(
            FileProcessor::new(cli).process(),
            Err(AssemblyError::InvalidParameter {
                parameter: "target",
                ..
            })
        ));
    }
}
