use std::{
    collections::VecDeque,
    io::{self, Read},
};

use itertools::Itertools;

/// Stdin reader which can read a single Unicode character.
///
/// `None` signals EOF or undecodable input; whether that is fatal is the
/// command layer's decision.
pub struct Stdin {
    is_eof: bool,
    stdin: Box<dyn Read>, //`Box` is for dependency injection.
}

impl Stdin {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            is_eof: false,
            stdin: Box::new(io::stdin()),
        }
    }

    //for dependency injection
    pub fn new_with_string(s: &str) -> Self {
        Self {
            is_eof: false,
            stdin: Box::new(VecDeque::from(s.to_string().into_bytes())),
        }
    }

    fn next_byte(&mut self) -> Option<u8> {
        if self.is_eof {
            return None;
        }
        match self.stdin.as_mut().bytes().next() {
            Some(Ok(b)) => Some(b),
            _ => {
                self.is_eof = true;
                None
            }
        }
    }

    /// Reads the next Unicode scalar, whitespace included.
    /// `None` on EOF or a byte sequence that is not valid UTF-8.
    fn next(&mut self) -> Option<char> {
        let c = self.next_byte()?;

        //if ASCII
        if (c >> 7) == 0b0 {
            return Some(c as char);
        }

        //leading byte determines the sequence length
        let num_bytes = if (c >> 5) == 0b110 {
            2
        } else if (c >> 4) == 0b1110 {
            3
        } else if (c >> 3) == 0b11110 {
            4
        } else {
            return None;
        };
        let mut l = vec![c];
        for _ in 0..(num_bytes - 1) {
            l.push(self.next_byte()?);
        }
        String::from_utf8(l).ok()?.chars().next()
    }

    /// Reads the next non-whitespace character.
    /// `None` is returned if EOF.
    pub fn read_char(&mut self) -> Option<char> {
        loop {
            let next = self.next()?;
            if !next.is_ascii_whitespace() {
                return Some(next);
            }
        }
    }

    /// Reads the next word, where words are separated by one or more
    /// whitespace characters.
    fn read_word(&mut self) -> Option<String> {
        let mut l = vec![];

        //eats the preceding whitespace (if any) and reads the first character of a word
        loop {
            let next = self.next()?;
            if !next.is_ascii_whitespace() {
                l.push(next);
                break;
            }
        }

        //reads the remaining characters of a word
        while let Some(next) = self.next() {
            if next.is_ascii_whitespace() {
                break;
            }
            l.push(next);
        }

        Some(l.into_iter().join(""))
    }

    /// Reads the next signed integer. Accepts an optional leading minus.
    /// `None` is returned on EOF or if the next word is not an integer.
    pub fn read_integer(&mut self) -> Option<i64> {
        self.read_word()?.parse().ok()
    }
}
