use std::io::{self, BufRead, Write};

use crate::{
    common::{Direction, GameError},
    config::BarConfig,
    game::GameEngine,
    player::Player,
    ui::color,
};

const MOVE_PROMPT: &str = "Enter your move (u/d/l/r): ";
const DIMENSIONS_PROMPT: &str = "Enter dimensions of chocolate bar (m n): ";
const SPOILED_PROMPT: &str = "Enter spoiled piece location (row col): ";
const INVALID_MOVE: &str = "Invalid move. Try again.";
const INVALID_CONFIG: &str = "--Please Invalid dimensions!--";

/// Parse two whitespace separated positive integers, e.g. `"4 5"`.
pub fn parse_pair(input: &str) -> Option<(usize, usize)> {
    let mut parts = input.split_whitespace();
    let a = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;
    Some((a, b))
}

/// Human player reading commands from a line-based input.
pub struct CliPlayer<R: BufRead, W: Write> {
    input: R,
    output: W,
    color: bool,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player bound to the process stdin and stdout.
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), color)
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Consume the player, returning the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn write_colored(&mut self, code: &str, text: &str, newline: bool) -> Result<(), GameError> {
        let (start, end) = if self.color {
            (code, color::RESET)
        } else {
            ("", "")
        };
        write!(self.output, "{}{}{}", start, text, end)?;
        if newline {
            writeln!(self.output)?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Show `prompt` and read one line. Fails with `InputClosed` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<String, GameError> {
        self.write_colored(color::BLUE, prompt, false)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line)
    }

    /// Prompt until a valid pair of bar dimensions is entered.
    pub fn prompt_dimensions(&mut self) -> Result<(usize, usize), GameError> {
        loop {
            let line = self.ask(DIMENSIONS_PROMPT)?;
            match parse_pair(&line) {
                Some((rows, cols)) if BarConfig::validate_dimensions(rows, cols).is_ok() => {
                    return Ok((rows, cols));
                }
                _ => {
                    log::debug!("rejected dimensions {:?}", line.trim());
                    self.write_colored(color::RED, INVALID_CONFIG, true)?;
                }
            }
        }
    }

    /// Prompt until a spoiled location inside a `rows` x `cols` bar is entered.
    pub fn prompt_spoiled(&mut self, rows: usize, cols: usize) -> Result<BarConfig, GameError> {
        loop {
            let line = self.ask(SPOILED_PROMPT)?;
            if let Some((row, col)) = parse_pair(&line) {
                let config = BarConfig::new(rows, cols, row, col);
                if config.validate().is_ok() {
                    return Ok(config);
                }
            }
            log::debug!("rejected spoiled location {:?}", line.trim());
            self.write_colored(color::RED, INVALID_CONFIG, true)?;
        }
    }

    /// Collect a full configuration, skipping whatever is already known.
    pub fn prompt_config(
        &mut self,
        dimensions: Option<(usize, usize)>,
        spoiled: Option<(usize, usize)>,
    ) -> Result<BarConfig, GameError> {
        let (rows, cols) = match dimensions {
            Some((rows, cols)) => {
                BarConfig::validate_dimensions(rows, cols)?;
                (rows, cols)
            }
            None => self.prompt_dimensions()?,
        };
        match spoiled {
            Some((row, col)) => {
                let config = BarConfig::new(rows, cols, row, col);
                config.validate()?;
                Ok(config)
            }
            None => self.prompt_spoiled(rows, cols),
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_direction(&mut self, _engine: &GameEngine) -> Result<Option<Direction>, GameError> {
        loop {
            let line = self.ask(MOVE_PROMPT)?;
            match line.parse::<Direction>() {
                Ok(direction) => return Ok(Some(direction)),
                Err(e) => {
                    log::debug!("{}", e);
                    self.write_colored(color::RED, INVALID_MOVE, true)?;
                }
            }
        }
    }
}
