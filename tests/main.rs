//End-to-end scenarios, driven through the library with in-memory canvases and
//injected stdin/stdout.
//
//Small linear programs whose last block touches another colour block never
//halt (the pointer ping-pongs between the blocks, and every advance resets
//the attempt counter), which is faithful Piet behavior. Those scenarios are
//therefore driven step by step; only genuinely walled-in programs go through
//`run`.

mod integration_tests {
    use piet_interpreter::block::BlockIndex;
    use piet_interpreter::canvas::Canvas;
    use piet_interpreter::cc::CC;
    use piet_interpreter::command::Command;
    use piet_interpreter::dp::DP;
    use piet_interpreter::interpreter::{Interpreter, OutputBuffer, Step};

    const LR: (u8, u8, u8) = (0xFF, 0xC0, 0xC0); //light red
    const RD: (u8, u8, u8) = (0xFF, 0x00, 0x00); //red
    const DR: (u8, u8, u8) = (0xC0, 0x00, 0x00); //dark red
    const DY: (u8, u8, u8) = (0xC0, 0xC0, 0x00); //dark yellow
    const GR: (u8, u8, u8) = (0x00, 0xFF, 0x00); //green
    const LM: (u8, u8, u8) = (0xFF, 0xC0, 0xFF); //light magenta
    const DM: (u8, u8, u8) = (0xC0, 0x00, 0xC0); //dark magenta
    const DB: (u8, u8, u8) = (0x00, 0x00, 0xC0); //dark blue
    const WH: (u8, u8, u8) = (0xFF, 0xFF, 0xFF); //white
    const BK: (u8, u8, u8) = (0x00, 0x00, 0x00); //black

    fn load(
        pixels: &[(u8, u8, u8)],
        width: usize,
        height: usize,
        stdin: &str,
    ) -> (Canvas, BlockIndex, Interpreter, OutputBuffer) {
        let canvas = Canvas::new(pixels, width, height).unwrap();
        let blocks = BlockIndex::build(&canvas);
        let (ip, out) = Interpreter::new_with_io(stdin);
        (canvas, blocks, ip, out)
    }

    //steps until `n` advances have happened, with a hard cap as a safety net
    fn advance_times(
        ip: &mut Interpreter,
        canvas: &Canvas,
        blocks: &BlockIndex,
        n: usize,
    ) -> Vec<Command> {
        let mut commands = vec![];
        for _ in 0..1000 {
            match ip.step(canvas, blocks).unwrap() {
                Step::Advance(command) => {
                    commands.push(command);
                    if commands.len() == n {
                        return commands;
                    }
                }
                Step::Blocked => (),
                Step::Halt => panic!("halted after {:?}", commands),
            }
        }
        panic!("no advance within the step budget (got {:?})", commands);
    }

    //scenario: a single colored codel fails in every direction and halts with
    //nothing on the stack and nothing written
    #[test]
    fn test_single_pixel_program() {
        let (canvas, blocks, mut ip, out) = load(&[RD], 1, 1, "");
        ip.run(&canvas, &blocks).unwrap();
        assert!(ip.halted);
        assert_eq!(8, ip.attempts);
        assert!(ip.stack.is_empty());
        assert!(out.as_string().is_empty());
    }

    //scenario: a colored codel walled in by black behaves the same as one
    //walled in by the canvas edge, and no command ever runs
    #[test]
    fn test_walled_in_codel_halts_after_eight_attempts() {
        let (canvas, blocks, mut ip, out) = load(&[RD, BK, BK, BK], 2, 2, "");

        let mut blocked = 0;
        loop {
            match ip.step(&canvas, &blocks).unwrap() {
                Step::Blocked => blocked += 1,
                Step::Halt => break,
                step => panic!("unexpected {:?}", step),
            }
        }
        assert_eq!(7, blocked);
        assert_eq!(8, ip.attempts);
        assert!(ip.halted);
        assert!(ip.stack.is_empty());
        assert!(out.as_string().is_empty());
    }

    //scenario: light red (size 1) -> red is `push`, red -> dark magenta is
    //`out_number`; the program prints "1" with no trailing newline
    #[test]
    fn test_push_and_print_one() {
        let (canvas, blocks, mut ip, out) = load(&[LR, RD, DM], 3, 1, "");

        let commands = advance_times(&mut ip, &canvas, &blocks, 2);
        assert_eq!(vec![Command::Push, Command::OutNumber], commands);
        assert_eq!("1", out.as_string());
        assert!(ip.stack.is_empty());
    }

    //scenario: push 2, push 3, add, print
    #[test]
    fn test_add_two_and_three() {
        let row = [LR, LR, RD, RD, RD, DR, DY, LR];
        let (canvas, blocks, mut ip, out) = load(&row, 8, 1, "");

        let commands = advance_times(&mut ip, &canvas, &blocks, 3);
        assert_eq!(
            vec![Command::Push, Command::Push, Command::Add],
            commands
        );
        assert_eq!(vec![5], ip.stack);

        let commands = advance_times(&mut ip, &canvas, &blocks, 1);
        assert_eq!(vec![Command::OutNumber], commands);
        assert_eq!("5", out.as_string());
        assert!(ip.stack.is_empty());
    }

    //scenario: a slide across a white run enters the far block with a no-op
    //and a fresh attempt counter
    #[test]
    fn test_white_slide() {
        let (canvas, blocks, mut ip, out) = load(&[RD, WH, WH, GR], 4, 1, "");

        assert_eq!(Step::Advance(Command::Noop), ip.step(&canvas, &blocks).unwrap());
        assert_eq!((3, 0), ip.pos);
        assert_eq!(0, ip.attempts);
        assert!(ip.stack.is_empty());
        assert!(out.as_string().is_empty());
    }

    //a blocked slide parks the pointer inside the white region and advances
    //both the CC and the DP
    #[test]
    fn test_blocked_white_slide() {
        let (canvas, blocks, mut ip, _) = load(&[RD, WH, WH, BK], 4, 1, "");

        assert_eq!(Step::Blocked, ip.step(&canvas, &blocks).unwrap());
        assert_eq!((2, 0), ip.pos);
        assert_eq!(CC::Right, ip.cc);
        assert_eq!(DP::Down, ip.dp);
        assert_eq!(1, ip.attempts);
    }

    //scenario: push; pop leaves the stack as it was
    #[test]
    fn test_push_pop_restores_the_stack() {
        let (canvas, blocks, mut ip, _) = load(&[LR, RD, LR], 3, 1, "");

        let commands = advance_times(&mut ip, &canvas, &blocks, 2);
        assert_eq!(vec![Command::Push, Command::Pop], commands);
        assert!(ip.stack.is_empty());
    }

    //scenario: the roll law; with [..., a, b, c, d, 3, 1] the top three
    //rotate by one and the former top ends up one place deeper
    #[test]
    fn test_roll_law() {
        let (mut ip, _) = Interpreter::new_with_io("");
        ip.stack = vec![9, 1, 2, 3, 4, 3, 1];
        Command::Roll.execute(&mut ip, 1).unwrap();
        assert_eq!(vec![9, 1, 4, 2, 3], ip.stack);
    }

    //in_char followed by out_char echoes one character
    #[test]
    fn test_echo_one_char() {
        let (canvas, blocks, mut ip, out) = load(&[LR, LM, DB], 3, 1, "A");

        let commands = advance_times(&mut ip, &canvas, &blocks, 2);
        assert_eq!(vec![Command::InChar, Command::OutChar], commands);
        assert_eq!("A", out.as_string());
        assert!(ip.stack.is_empty());
    }

    //in_number pushes the parsed value
    #[test]
    fn test_in_number() {
        let (canvas, blocks, mut ip, _) = load(&[LR, DB], 2, 1, " 42 ");

        let commands = advance_times(&mut ip, &canvas, &blocks, 1);
        assert_eq!(vec![Command::InNumber], commands);
        assert_eq!(vec![42], ip.stack);
    }

    //exhausted stdin on a read command aborts the program with an error
    #[test]
    fn test_input_exhaustion_is_fatal() {
        let (canvas, blocks, mut ip, _) = load(&[LR, DB], 2, 1, "");
        assert!(ip.run(&canvas, &blocks).is_err());
    }

    //a word that is not an integer aborts in_number as well
    #[test]
    fn test_malformed_number_is_fatal() {
        let (canvas, blocks, mut ip, _) = load(&[LR, DB], 2, 1, "forty-two");
        assert!(ip.run(&canvas, &blocks).is_err());
    }

    //a program whose first codel is black halts immediately instead of
    //erroring out
    #[test]
    fn test_black_start_is_a_normal_halt() {
        let (canvas, blocks, mut ip, out) = load(&[BK, RD, RD, RD], 2, 2, "");
        ip.run(&canvas, &blocks).unwrap();
        assert!(ip.halted);
        assert!(out.as_string().is_empty());
    }
}
