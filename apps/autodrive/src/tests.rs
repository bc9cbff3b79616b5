//! Tests for input parsing, report formatting and the interactive session.

#[cfg(test)]
mod input_tests {
    use ad_core::{Bounds, Direction, Position};
    use ad_sim::CarSpec;

    use crate::input::*;

    #[test]
    fn field_parses_two_integers() {
        assert_eq!(parse_field("10 10"), Ok(Bounds::new(10, 10)));
        assert_eq!(parse_field("  3   7 "), Ok(Bounds::new(3, 7)));
    }

    #[test]
    fn field_rejects_negative() {
        let err = parse_field("-1 5").unwrap_err();
        assert_eq!(err, InputError::NegativeField);
        assert_eq!(err.to_string(), "Width and height must be positive integers.");
    }

    #[test]
    fn field_rejects_bad_format() {
        for line in ["", "10", "10 10 10", "a b", "1.5 2"] {
            assert_eq!(parse_field(line), Err(InputError::FieldFormat), "line {line:?}");
        }
    }

    #[test]
    fn position_parses() {
        let b = Bounds::new(10, 10);
        assert_eq!(parse_position("1 2 N", b), Ok((Position::new(1, 2), Direction::North)));
        assert_eq!(parse_position("9 0 W", b), Ok((Position::new(9, 0), Direction::West)));
    }

    #[test]
    fn position_out_of_bounds_names_limits() {
        let err = parse_position("10 0 N", Bounds::new(10, 5)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Position out of bounds, x should be between 0 and 9 and y should be between 0 and 4"
        );
        assert!(parse_position("0 -1 N", Bounds::new(10, 5)).is_err());
    }

    #[test]
    fn position_direction_is_case_sensitive() {
        assert_eq!(parse_position("1 1 n", Bounds::new(5, 5)), Err(InputError::Direction));
        assert_eq!(parse_position("1 1 X", Bounds::new(5, 5)), Err(InputError::Direction));
    }

    #[test]
    fn position_bad_format() {
        for line in ["1 2", "1 N 2", "x y N", "1 2 N extra"] {
            assert_eq!(parse_position(line, Bounds::new(5, 5)), Err(InputError::PositionFormat));
        }
    }

    #[test]
    fn commands_upper_cased() {
        assert_eq!(parse_commands("ffrl\n"), Ok("FFRL".to_owned()));
    }

    #[test]
    fn commands_rejected() {
        assert_eq!(parse_commands(""), Err(InputError::Commands));
        assert_eq!(parse_commands("FFX"), Err(InputError::Commands));
        assert_eq!(parse_commands("F F"), Err(InputError::Commands));
    }

    #[test]
    fn names_trimmed_and_unique() {
        let taken = vec![CarSpec {
            name:      "A".into(),
            position:  Position::new(0, 0),
            direction: Direction::North,
            commands:  "F".into(),
        }];
        assert_eq!(parse_name("  B ", &taken), Ok("B".to_owned()));
        assert_eq!(parse_name("A", &taken), Err(InputError::DuplicateName("A".into())));
        assert_eq!(parse_name("   ", &taken), Err(InputError::EmptyName));
    }
}

#[cfg(test)]
mod report_tests {
    use ad_car::{CarOutcome, CollisionRecord};
    use ad_core::{Direction, Position};
    use ad_sim::CarSpec;

    use crate::report::*;

    #[test]
    fn car_line_format() {
        let spec = CarSpec {
            name:      "A".into(),
            position:  Position::new(1, 2),
            direction: Direction::North,
            commands:  "FFRFFFFRRL".into(),
        };
        assert_eq!(car_line(&spec), "- A, (1, 2) N, FFRFFFFRRL");
    }

    #[test]
    fn active_outcome_line() {
        let outcome = CarOutcome::Active { position: Position::new(5, 4), direction: Direction::South };
        assert_eq!(outcome_line("A", &outcome), "- A, (5, 4) S");
    }

    #[test]
    fn collided_outcome_joins_partners() {
        let outcome = CarOutcome::Collided(CollisionRecord {
            position: Position::new(2, 2),
            step:     1,
            partners: vec!["K".into(), "L".into(), "M".into()],
        });
        assert_eq!(outcome_line("J", &outcome), "- J, collides with K and L and M at (2, 2) at step 1");
    }

    #[test]
    fn json_lists_every_car() {
        let outcomes = vec![
            ("A".to_owned(), CarOutcome::Active { position: Position::new(0, 2), direction: Direction::North }),
            (
                "B".to_owned(),
                CarOutcome::Collided(CollisionRecord {
                    position: Position::new(1, 1),
                    step:     3,
                    partners: vec!["C".into()],
                }),
            ),
        ];
        let json = outcomes_json(&outcomes).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["name"], "A");
        assert_eq!(arr[0]["outcome"]["Active"]["position"]["y"], 2);
        assert_eq!(arr[1]["outcome"]["Collided"]["step"], 3);
        assert_eq!(arr[1]["outcome"]["Collided"]["partners"][0], "C");
    }
}

#[cfg(test)]
mod session_tests {
    use std::io::Cursor;

    use crate::session::{Session, SessionOptions};

    fn drive_with(input: &str, options: SessionOptions) -> String {
        let mut session = Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), options);
        session.run().unwrap();
        String::from_utf8(session.into_output()).unwrap()
    }

    fn drive(input: &str) -> String {
        drive_with(input, SessionOptions::default())
    }

    #[test]
    fn single_car_run() {
        let out = drive("10 10\n1\nA\n1 2 N\nFFRFFFFRRL\n2\n2\n");
        assert!(out.starts_with("Welcome to Auto Driving Car Simulation!"));
        assert!(out.contains("You have created a field of 10 x 10."));
        assert!(out.contains("- A, (1, 2) N, FFRFFFFRRL"));
        assert!(out.contains("After simulation, the result is:\n- A, (5, 4) S\n"));
        assert!(out.ends_with("Thank you for running the simulation. Goodbye!\n"));
    }

    #[test]
    fn two_cars_collide() {
        let out = drive("10 10\n1\nA\n1 2 N\nFFRFFFFRRL\n1\nB\n7 8 W\nFFLFFFFFFF\n2\n2\n");
        assert!(out.contains("- A, collides with B at (5, 4) at step 7"));
        assert!(out.contains("- B, collides with A at (5, 4) at step 7"));
    }

    #[test]
    fn invalid_entries_are_reprompted() {
        let out = drive("-1 5\nten ten\n5 5\n3\n1\nA\n9 9 N\n1 1 Q\n1 1 E\nfx\nff\n2\n2\n");
        assert!(out.contains("Width and height must be positive integers."));
        assert!(out.contains("Invalid input. Please enter two integers separated by a space."));
        assert!(out.contains("Invalid option. Please choose 1 or 2."));
        assert!(out.contains("Position out of bounds"));
        assert!(out.contains("Invalid direction. Only N,S,E,W values are allowed."));
        assert!(out.contains("Invalid commands, only L, R, F allowed."));
        assert!(out.contains("- A, (1, 1) E, FF"));
        assert!(out.contains("- A, (3, 1) E"));
    }

    #[test]
    fn duplicate_name_is_reprompted() {
        let out = drive("5 5\n1\nA\n0 0 N\nF\n1\nA\nB\n4 4 S\nF\n2\n2\n");
        assert!(out.contains("Car named A already exists. Please choose a different name."));
        assert!(out.contains("- A, (0, 1) N"));
        assert!(out.contains("- B, (4, 3) S"));
    }

    #[test]
    fn run_without_cars_returns_to_menu() {
        let out = drive("5 5\n2\n1\nA\n0 0 E\nF\n2\n2\n");
        assert!(out.contains("No cars to simulate. Please add at least one car."));
        assert!(out.contains("- A, (1, 0) E"));
    }

    #[test]
    fn start_over_builds_a_fresh_field() {
        let out = drive("5 5\n1\nA\n0 0 N\nF\n2\n1\n3 3\n1\nA\n2 2 S\nFF\n2\n2\n");
        assert_eq!(out.matches("Welcome to Auto Driving Car Simulation!").count(), 2);
        assert!(out.contains("You have created a field of 3 x 3."));
        // Same name is free again on the new field.
        assert!(out.contains("- A, (2, 0) S"));
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        assert!(drive("").contains("Welcome"));
        let out = drive("5 5\n1\nA\n");
        assert!(!out.contains("After simulation"));
        let out = drive("5 5\n1\nA\n0 0 N\nF\n2\n");
        assert!(out.contains("- A, (0, 1) N"));
        assert!(!out.contains("Goodbye"));
    }

    #[test]
    fn json_output_follows_report() {
        let out = drive_with(
            "10 10\n1\nG\n0 0 N\nFF\n2\n2\n",
            SessionOptions { csv_dir: None, json: true },
        );
        assert!(out.contains("- G, (0, 2) N"));
        assert!(out.contains("\"name\": \"G\""));
        assert!(out.contains("\"Active\""));
    }

    #[test]
    fn csv_dir_receives_output() {
        let dir = tempfile::tempdir().unwrap();
        let csv_dir = dir.path().join("out");
        drive_with(
            "10 10\n1\nE\n1 1 N\nF\n1\nF\n1 3 S\nF\n2\n2\n",
            SessionOptions { csv_dir: Some(csv_dir.clone()), json: false },
        );
        let collisions = std::fs::read_to_string(csv_dir.join("collisions.csv")).unwrap();
        assert_eq!(collisions, "step,x,y,cars\n1,1,2,E;F\n");
        assert!(csv_dir.join("car_snapshots.csv").exists());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn failed_csv_write_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink("/dev/full", dir.path().join("collisions.csv")).unwrap();

        let out = drive_with(
            "10 10\n1\nE\n1 1 N\nF\n1\nF\n1 3 S\nF\n2\n2\n",
            SessionOptions { csv_dir: Some(dir.path().to_path_buf()), json: false },
        );
        assert!(out.contains("- E, collides with F at (1, 2) at step 1"));
        assert!(out.contains("output error:"), "write failure not shown:\n{out}");
        assert!(out.ends_with("Thank you for running the simulation. Goodbye!\n"));
    }
}
