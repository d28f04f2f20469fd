// Type an equation and watch its tree diagram and postfix form update with each key.
//
// Press Enter to clear the equation, and Esc or Ctrl+C to quit.

use std::error::Error;
use std::io::{stdin, stdout, Write};

use termion::event::Key;
use termion::input::TermRead;
use termion::raw::IntoRawMode;

use eqreps::render::{Area, RenderSettings, Renderer};
use eqreps::renderers::AsciiRenderer;
use eqreps::Equation;

/// Rows used by the prompt and postfix output above the diagram.
const HEADER_ROWS: u16 = 4;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let stdin = stdin();
    let mut stdout = stdout().into_raw_mode()?;
    let mut input = String::new();

    redraw(&mut stdout, &input)?;
    for k in stdin.keys() {
        match k? {
            Key::Esc | Key::Ctrl('c') => break,
            Key::Char('\n') => input.clear(),
            Key::Char(c) => input.push(c),
            Key::Backspace => { input.pop(); },
            _ => continue,
        }

        redraw(&mut stdout, &input)?;
    }

    Ok(())
}

fn redraw(stdout: &mut impl Write, input: &str) -> Result<(), Box<dyn Error>> {
    let (width, height) = termion::terminal_size()?;

    write!(stdout, "{}{}", termion::cursor::Goto(1, 1), termion::clear::All)?;
    write!(stdout, "> {}\r\n\r\n", input)?;

    match Equation::parse(input) {
        Ok(equation) => {
            write!(stdout, "Postfix: {}\r\n\r\n", equation.postfix())?;

            match equation.tree() {
                Ok(tree) => {
                    let mut renderer = AsciiRenderer::new(Area::new(
                        width as u64,
                        height.saturating_sub(HEADER_ROWS) as u64,
                    ));
                    renderer.draw_tree(&tree, equation.as_str(), &RenderSettings::ascii());

                    for line in renderer.lines() {
                        write!(stdout, "{}\r\n", line)?;
                    }
                }
                Err(err) => write!(stdout, "Tree error: {}", err)?,
            }
        }
        Err(err) => write!(stdout, "Error: {}", err)?,
    }

    stdout.flush()?;
    Ok(())
}
