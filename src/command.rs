use num::Integer;

use super::codel::Codel;
use super::interpreter::Interpreter;

/// Piet commands, one per cell of the 6x3 (hue steps, lightness steps) table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Noop,
    Push,
    Pop,
    Add,
    Subtract,
    Multiply,
    Divide,
    Mod,
    Not,
    Greater,
    Pointer,
    Switch,
    Duplicate,
    Roll,
    InNumber,
    InChar,
    OutNumber,
    OutChar,
}

impl Command {
    /**
    Decodes the command carried by a transition between two colour blocks.

    [The spec](https://www.dangermouse.net/esoteric/piet.html) says

    > Commands are defined by the transition of colour from one colour block to the next as the interpreter travels through the program.
    > The number of steps along the Hue Cycle and Lightness Cycle in each transition determine the command executed, as shown in the table at right.
    > If the transition between colour blocks occurs via a slide across a white block, no command is executed.

    A transition involving white carries no colour deltas and decodes to
    [`Command::Noop`], which covers the quoted white-slide rule.
    */
    pub fn new(from: &Codel, to: &Codel) -> Self {
        let Some((dh, dl)) = Codel::cycle_steps(from, to) else {
            return Command::Noop;
        };
        match (dh, dl) {
            (0, 0) => Command::Noop,
            (0, 1) => Command::Push,
            (0, 2) => Command::Pop,

            (1, 0) => Command::Add,
            (1, 1) => Command::Subtract,
            (1, 2) => Command::Multiply,

            (2, 0) => Command::Divide,
            (2, 1) => Command::Mod,
            (2, 2) => Command::Not,

            (3, 0) => Command::Greater,
            (3, 1) => Command::Pointer,
            (3, 2) => Command::Switch,

            (4, 0) => Command::Duplicate,
            (4, 1) => Command::Roll,
            (4, 2) => Command::InNumber,

            (5, 0) => Command::InChar,
            (5, 1) => Command::OutNumber,
            (5, 2) => Command::OutChar,

            _ => unreachable!(),
        }
    }

    /**
    Executes the command represented by `self`.

    `block_size` shall be the size of the colour block just exited; it is only
    used by `Push`. See also [`Block::size`](super::block::Block::size).

    As [the spec](https://www.dangermouse.net/esoteric/piet.html) says,

    > Any operations which cannot be performed (such as popping values when not enough are on the stack) are simply ignored, and processing continues with the next command.

    The one departure: a failed read on `InNumber`/`InChar` (EOF or a word
    that is not an integer) is returned as an error rather than ignored, and
    the driver reports it.

    Arithmetic wraps at the `i64` boundaries.
    */
    pub fn execute(
        &self,
        ip: &mut Interpreter,
        block_size: i64,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let stack = &mut ip.stack;
        match self {
            Command::Noop => {}

            //spec: Pushes the value of the colour block just exited on to the stack.
            Command::Push => {
                stack.push(block_size);
            }

            //spec: Pops the top value off the stack and discards it.
            Command::Pop => {
                stack.pop();
            }

            //spec: Pops the top two values off the stack, adds them, and pushes the result back on the stack.
            Command::Add => {
                if stack.len() >= 2 {
                    let x = stack.pop().unwrap();
                    let y = stack.pop().unwrap();
                    stack.push(y.wrapping_add(x));
                }
            }

            //spec: Pops the top two values off the stack, calculates the second top value minus the top value, and pushes the result back on the stack.
            Command::Subtract => {
                if stack.len() >= 2 {
                    let x = stack.pop().unwrap();
                    let y = stack.pop().unwrap();
                    stack.push(y.wrapping_sub(x));
                }
            }

            //spec: Pops the top two values off the stack, multiplies them, and pushes the result back on the stack.
            Command::Multiply => {
                if stack.len() >= 2 {
                    let x = stack.pop().unwrap();
                    let y = stack.pop().unwrap();
                    stack.push(y.wrapping_mul(x));
                }
            }

            //[spec]
            //Pops the top two values off the stack, calculates the integer division of the second top value by the top value,
            //and pushes the result back on the stack.
            //If a divide by zero occurs, it is handled as an implementation-dependent error,
            //though simply ignoring the command is recommended.
            //
            //The divisor is inspected before anything is popped, so an ignored
            //command leaves the stack untouched. The quotient is floored.
            Command::Divide => {
                if stack.len() >= 2 {
                    if *stack.last().unwrap() == 0 {
                        return Ok(()); //zero-division
                    }
                    let x = stack.pop().unwrap();
                    let y = stack.pop().unwrap();
                    //i64::MIN / -1 does not fit; wrap like the other arithmetic commands
                    let q = if x == -1 {
                        y.wrapping_neg()
                    } else {
                        Integer::div_floor(&y, &x)
                    };
                    stack.push(q);
                }
            }

            //[spec]
            //Pops the top two values off the stack, calculates the second top value modulo the top value, and pushes the result back on the stack.
            //The result has the same sign as the divisor (the top value).
            //If the top value is zero, this is a divide by zero error, which is handled as an implementation-dependent error,
            //though simply ignoring the command is recommended.
            Command::Mod => {
                if stack.len() >= 2 {
                    if *stack.last().unwrap() == 0 {
                        return Ok(()); //zero-division
                    }
                    let x = stack.pop().unwrap();
                    let y = stack.pop().unwrap();
                    let r = if x == -1 {
                        0
                    } else {
                        Integer::mod_floor(&y, &x)
                    };
                    stack.push(r);
                }
            }

            //spec: Replaces the top value of the stack with 0 if it is non-zero, and 1 if it is zero.
            Command::Not => {
                if let Some(x) = stack.pop() {
                    stack.push(if x == 0 { 1 } else { 0 });
                }
            }

            //spec: Pops the top two values off the stack, and pushes 1 on to the stack if the second top value is greater than the top value, and pushes 0 if it is not greater.
            Command::Greater => {
                if stack.len() >= 2 {
                    let x = stack.pop().unwrap();
                    let y = stack.pop().unwrap();
                    stack.push(if y > x { 1 } else { 0 });
                }
            }

            //spec: Pops the top value off the stack and rotates the DP clockwise that many steps (anticlockwise if negative).
            Command::Pointer => {
                if let Some(x) = stack.pop() {
                    ip.dp = ip.dp.rotate_clockwise_by(x);
                }
            }

            //spec: Pops the top value off the stack and toggles the CC that many times (the absolute value of that many times if negative).
            Command::Switch => {
                if let Some(x) = stack.pop() {
                    if x % 2 != 0 {
                        ip.cc = ip.cc.flip();
                    }
                }
            }

            //spec: Pushes a copy of the top value on the stack on to the stack.
            Command::Duplicate => {
                if let Some(&x) = stack.last() {
                    stack.push(x);
                }
            }

            //[spec]
            //Pops the top two values off the stack and "rolls" the remaining stack entries to a depth equal to the second value popped,
            //by a number of rolls equal to the first value popped.
            //A single roll to depth n is defined as burying the top value on the stack n deep and bringing all values above it up by 1 place.
            //A negative number of rolls rolls in the opposite direction.
            //A negative depth is an error and the command is ignored.
            //If a roll is greater than an implementation-dependent maximum stack depth,
            //it is handled as an implementation-dependent error, though simply ignoring the command is recommended.
            Command::Roll => {
                if stack.len() < 2 {
                    return Ok(());
                }
                let num_roll = stack[stack.len() - 1];
                let depth = stack[stack.len() - 2];
                //an invalid depth ignores the whole command, operands included
                if depth < 0 || ((stack.len() - 2) as i64) < depth {
                    return Ok(());
                }
                for _ in 0..2 {
                    stack.pop().unwrap();
                }
                //if the operation can be done but virtually nothing happens
                if depth <= 1 || num_roll == 0 {
                    return Ok(());
                }
                let depth = depth as usize;
                let start = stack.len() - depth;
                //a negative roll count becomes its positive equivalent modulo the depth
                let roll = num_roll.rem_euclid(depth as i64) as usize;
                stack[start..].rotate_right(roll);
            }

            //[spec]
            //Reads a value from STDIN as either a number or character,
            //depending on the particular incarnation of this command and pushes it on to the stack.
            Command::InNumber => {
                let n = ip
                    .stdin
                    .read_integer()
                    .ok_or("failed to read an integer from stdin")?;
                ip.stack.push(n);
            }

            Command::InChar => {
                let c = ip
                    .stdin
                    .read_char()
                    .ok_or("failed to read a character from stdin")?;
                ip.stack.push(c as i64);
            }

            //[spec]
            //Pops the top value off the stack and prints it to STDOUT as either a number or character,
            //depending on the particular incarnation of this command.
            Command::OutNumber => {
                if let Some(x) = ip.stack.pop() {
                    ip.output(&x.to_string())?;
                }
            }

            //The command is ignored (and the operand kept) unless the value is
            //a valid Unicode scalar.
            Command::OutChar => {
                if let Some(&x) = ip.stack.last() {
                    if let Some(c) = u32::try_from(x).ok().and_then(char::from_u32) {
                        ip.stack.pop().unwrap();
                        ip.output(&c.to_string())?;
                    }
                }
            }
        }
        Ok(())
    }
}
