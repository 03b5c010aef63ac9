//! The execution engine: fetch, dispatch and post-process until halted.

use std::io::{self, BufRead, Write};

use log::{debug, trace};

use crate::error::{BracketKind, Error};
use crate::input::CharReader;
use crate::program::Program;
use crate::tape::Tape;

/// The closed instruction set. Every other byte is a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `+`
    Increment,
    /// `-`
    Decrement,
    /// `>`
    MoveRight,
    /// `<`
    MoveLeft,
    /// `.`
    Output,
    /// `,`
    Input,
    /// `[`
    LoopStart,
    /// `]`
    LoopEnd,
}

impl Instruction {
    pub fn from_byte(b: u8) -> Option<Self> {
        Some(match b {
            b'+' => Instruction::Increment,
            b'-' => Instruction::Decrement,
            b'>' => Instruction::MoveRight,
            b'<' => Instruction::MoveLeft,
            b'.' => Instruction::Output,
            b',' => Instruction::Input,
            b'[' => Instruction::LoopStart,
            b']' => Instruction::LoopEnd,
            _ => return None,
        })
    }
}

/// Behaviour switches for a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Stop cleanly when `,` hits end of input. When false the cell is set
    /// to 0 and execution carries on.
    pub halt_on_input_eof: bool,
}

/// The mutable state of one program run.
///
/// A process owns the tape, the counters and both streams. It borrows the
/// program, which stays untouched for the whole run.
pub struct Process<'p, R, W> {
    program: &'p Program,
    config: Config,
    program_counter: usize,
    tape: Tape,
    halted: bool,
    error: Option<Error>,
    last_char_output: char,
    input: CharReader<R>,
    output: W,
}

impl<'p, R: BufRead, W: Write> Process<'p, R, W> {
    pub fn new(program: &'p Program, config: Config, input: R, output: W) -> Self {
        Self {
            program,
            config,
            program_counter: 0,
            tape: Tape::new(),
            // Nothing to fetch from an empty program.
            halted: program.is_empty(),
            error: None,
            // Treated as already on a fresh line, so silent programs print nothing.
            last_char_output: '\n',
            input: CharReader::new(input),
            output,
        }
    }

    pub fn program_counter(&self) -> usize {
        self.program_counter
    }

    /// Index of the active cell.
    pub fn memory_counter(&self) -> usize {
        self.tape.pointer()
    }

    pub fn cell(&self, index: usize) -> u8 {
        self.tape.get(index)
    }

    pub fn current_cell(&self) -> u8 {
        self.tape.current()
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Execute a single cycle. Does nothing once the process has halted.
    pub fn step(&mut self) {
        if self.halted {
            return;
        }

        let ip = self.program_counter;
        let Some(byte) = self.program.byte_at(ip) else {
            self.halted = true;
            return;
        };

        if let Some(instr) = Instruction::from_byte(byte) {
            trace!(
                "ip={ip} ptr={} cell={} instr={}",
                self.tape.pointer(),
                self.tape.current(),
                byte as char
            );
            if let Err(err) = self.dispatch(ip, instr) {
                debug!("halting on error: {err}");
                self.error = Some(err);
                self.halted = true;
                return;
            }
        }

        // Cell and pointer wraparound is applied by the tape itself, so both
        // are already back in range here.
        self.program_counter += 1;
        if self.program_counter >= self.program.len() {
            self.halted = true;
        }
    }

    /// Run until halted, then make sure the output ends on a fresh line.
    ///
    /// Output written before a failure is left in place.
    pub fn run(&mut self) -> Result<(), Error> {
        debug!("run started: {} bytes, {:?}", self.program.len(), self.config);
        while !self.halted {
            self.step();
        }
        self.finish()
    }

    fn dispatch(&mut self, ip: usize, instr: Instruction) -> Result<(), Error> {
        match instr {
            Instruction::Increment => self.tape.increment(),
            Instruction::Decrement => self.tape.decrement(),
            Instruction::MoveRight => self.tape.move_right(),
            Instruction::MoveLeft => self.tape.move_left(),
            Instruction::Output => {
                let ch = char::from(self.tape.current());
                self.write_char(ch)
                    .map_err(|source| Error::Output { ip, source })?;
                self.last_char_output = ch;
            }
            Instruction::Input => match self.input.read_char() {
                Ok(Some(ch)) => self.tape.set_current((u32::from(ch) % 256) as u8),
                Ok(None) if self.config.halt_on_input_eof => {
                    debug!("end of input at ip={ip}; halting");
                    self.halted = true;
                }
                Ok(None) => self.tape.set_current(0),
                Err(source) => return Err(Error::Input { ip, source }),
            },
            Instruction::LoopStart => {
                if self.tape.current() == 0 {
                    self.program_counter = self.jump_target(ip, BracketKind::Open)?;
                }
            }
            Instruction::LoopEnd => {
                if self.tape.current() != 0 {
                    self.program_counter = self.jump_target(ip, BracketKind::Close)?;
                }
            }
        }
        Ok(())
    }

    fn jump_target(&self, ip: usize, kind: BracketKind) -> Result<usize, Error> {
        self.program
            .other_end(ip)
            .ok_or(Error::UnmatchedBracket { ip, kind })
    }

    fn write_char(&mut self, ch: char) -> io::Result<()> {
        let mut buf = [0u8; 4];
        self.output.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
        self.output.flush()
    }

    fn finish(&mut self) -> Result<(), Error> {
        let mut newline = Ok(());
        if self.last_char_output != '\n' {
            newline = self.write_char('\n');
            self.last_char_output = '\n';
        }

        if let Some(err) = self.error.take() {
            return Err(err);
        }
        debug!("run finished at ip={}", self.program_counter);
        newline.map_err(|source| Error::Output {
            ip: self.program_counter,
            source,
        })
    }
}

/// Run `program` against the process's standard input and output.
pub fn run(program: &Program, config: Config) -> Result<(), Error> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with_io(program, config, stdin.lock(), stdout.lock())
}

/// Run `program` against arbitrary streams.
pub fn run_with_io<R: BufRead, W: Write>(
    program: &Program,
    config: Config,
    input: R,
    output: W,
) -> Result<(), Error> {
    Process::new(program, config, input, output).run()
}
