#[cfg(test)]
mod test {
    use std::io::{self, Write};

    use logic_sim::{
        run_str, GateKind, InterpretError, Interpreter, StrTokens, WhitespaceTokens, WriteSink,
    };
    use pretty_assertions::assert_eq;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn run_reader(input: &str) -> (Result<(), InterpretError>, String) {
        let mut interpreter = Interpreter::new(
            WhitespaceTokens::new(input.as_bytes()),
            WriteSink(Vec::<u8>::new()),
        );
        let result = interpreter.run();
        let (_, WriteSink(out)) = interpreter.into_parts();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn or_gate_prints_single_line() {
        let (result, out) = run_reader("SET A 1\nSET B 0\nOR A B C\nSIM\nOUT C\nEND\n");
        assert_eq!(result, Ok(()));
        assert_eq!(out, "C: 1\n");
    }

    #[test]
    fn unset_input_reports_all_in_first_seen_order() {
        let (result, out) = run_reader("NOT A B\nSIM\nOUT ALL\nEND\n");
        assert_eq!(result, Ok(()));
        assert_eq!(out, "A: 0\nB: 1\n");
    }

    #[test]
    fn truth_tables() {
        let expected = [
            (GateKind::And, [0, 0, 0, 1]),
            (GateKind::Nand, [1, 1, 1, 0]),
            (GateKind::Or, [0, 1, 1, 1]),
            (GateKind::Nor, [1, 0, 0, 0]),
            (GateKind::Xor, [0, 1, 1, 0]),
            (GateKind::Xnor, [1, 0, 0, 1]),
        ];
        for (kind, outputs) in expected {
            for ((a, b), out) in [(0, 0), (0, 1), (1, 0), (1, 1)].into_iter().zip(outputs) {
                let lines =
                    run_str(&format!("SET a {a} SET b {b} {kind} a b y SIM OUT y END")).unwrap();
                assert_eq!(lines, vec![format!("y: {out}")], "{a} {kind} {b}");
            }
        }
        assert_eq!(run_str("NOT a y SIM OUT y").unwrap(), vec!["y: 1"]);
        assert_eq!(
            run_str("SET a 1 NOT a y SIM OUT y").unwrap(),
            vec!["y: 0"]
        );
    }

    #[test]
    fn declaration_order_is_evaluation_order() {
        let lines = run_str("SET A 1 SET B 0 NOT A X AND X B Y SIM OUT X OUT Y").unwrap();
        assert_eq!(lines, vec!["X: 0", "Y: 0"]);
    }

    #[test]
    fn later_gate_output_is_read_stale() {
        let lines = run_str("SET B 1 AND A B C NOT Z A SIM OUT C OUT A SIM OUT C").unwrap();
        assert_eq!(lines, vec!["C: 0", "A: 1", "C: 1"]);
    }

    #[test]
    fn unknown_command_is_reported() {
        let (result, out) = run_reader("SET A 1\nOUT A\nFOO A B C\nOUT A\n");
        assert_eq!(
            result,
            Err(InterpretError::UnknownCommand("FOO".to_string()))
        );
        assert_eq!(out, "A: 1\n");
    }

    #[test]
    fn truncated_command_is_reported() {
        let (result, out) = run_reader("OUT A\nXOR A B");
        assert_eq!(
            result,
            Err(InterpretError::MalformedCommand {
                command: "XOR".to_string(),
                expected: "two input signals and an output signal",
            })
        );
        assert_eq!(out, "A: 0\n");
    }

    #[test]
    fn failing_sink_aborts() {
        let mut interpreter = Interpreter::new(
            StrTokens::new("SET A 1 OUT A SET B 1".split_whitespace()),
            WriteSink(ClosedPipe),
        );
        assert_eq!(
            interpreter.run(),
            Err(InterpretError::Io("closed".to_string()))
        );
        let (circuit, _) = interpreter.into_parts();
        assert_eq!(circuit.peek_value("A"), Some(1));
        assert_eq!(circuit.peek_value("B"), None);
    }

    #[test]
    fn unreadable_input_keeps_earlier_output() {
        let input: &[u8] = b"SET A 1\nOUT A\nSET \xff 1\nOUT A\n";
        let mut interpreter =
            Interpreter::new(WhitespaceTokens::new(input), WriteSink(Vec::<u8>::new()));
        let result = interpreter.run();
        let (_, WriteSink(out)) = interpreter.into_parts();
        assert!(matches!(result, Err(InterpretError::Io(_))), "{result:?}");
        assert_eq!(String::from_utf8(out).unwrap(), "A: 1\n");
    }
}
