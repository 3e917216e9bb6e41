//! Shell
//!
//! A line-oriented front end for a [`Session`]. Each input line is one user action,
//! parsed with clap. Failures are written as status lines and never end the shell.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::{ColorChoice, Parser, Subcommand};
use thiserror::Error;
use tracing::debug;

use crate::{
    items::{AddIn, AddOn, Bread, CupSize, DonutKind, Protein},
    order::OrderNumber,
    receipt::{self, ReceiptError},
    selection::{CoffeeSelection, DonutSelection, SandwichSelection, Selection},
    session::{Session, SessionError},
};

/// Errors that stop the shell. Command failures are reported inline instead.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading input or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Rendering a view failed.
    #[error(transparent)]
    Receipt(#[from] ReceiptError),
}

#[derive(Debug, Parser)]
#[command(
    no_binary_name = true,
    color = ColorChoice::Never,
    disable_version_flag = true
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    /// Add donuts to the current order
    Donut {
        /// Donut type
        #[arg(value_enum)]
        kind: Option<DonutKind>,

        /// Flavor, e.g. glazed, boston-cream or "boston cream"
        flavor: Option<String>,

        /// Quantity (1-100)
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },

    /// Add a coffee to the current order
    Coffee {
        /// Cup size
        #[arg(value_enum)]
        size: Option<CupSize>,

        /// Add-ins
        #[arg(value_enum)]
        add_ins: Vec<AddIn>,

        /// Quantity (1-100)
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },

    /// Add a sandwich to the current order
    Sandwich {
        /// Bread
        #[arg(short, long, value_enum)]
        bread: Option<Bread>,

        /// Protein
        #[arg(short, long, value_enum)]
        protein: Option<Protein>,

        /// Add-ons
        #[arg(value_enum)]
        add_ons: Vec<AddOn>,

        /// Quantity (1-100)
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },

    /// Show the current order
    #[command(alias = "current")]
    Show,

    /// Remove an item from the current order by its position
    Remove {
        /// Position as shown by `show`, starting at 1
        item: usize,
    },

    /// Remove every item from the current order
    Clear,

    /// Place the current order
    Place,

    /// List placed orders
    Orders,

    /// Show a placed order
    View {
        /// Order number
        order: u64,
    },

    /// Cancel a placed order
    Cancel {
        /// Order number
        order: u64,
    },

    /// Export all placed orders to a text file
    Export {
        /// Output file; replaced if it exists. Quote paths that contain spaces
        path: PathBuf,
    },

    /// Show the menu
    Menu,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

enum Flow {
    Continue,
    Quit,
}

/// Line-oriented order counter.
#[derive(Debug)]
pub struct Shell {
    session: Session,
    prompt: bool,
}

impl Shell {
    /// Creates a shell over a session.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            prompt: false,
        }
    }

    /// Prints a `> ` prompt before each line; meant for interactive terminals.
    #[must_use]
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// The session driven by this shell.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the shell, returning its session.
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Reads commands from `input` until `quit` or end of input.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    ///
    /// Returns a [`ShellError`] only if reading input or writing output fails.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<(), ShellError> {
        let mut lines = input.lines();

        loop {
            if self.prompt {
                write!(out, "> ")?;
                out.flush()?;
            }

            let Some(line) = lines.next().transpose()? else {
                break;
            };

            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Flow::Quit = self.execute_line(line, &mut out)? {
                break;
            }
        }

        Ok(())
    }

    /// Executes a single command line.
    fn execute_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow, ShellError> {
        debug!(line, "shell command");

        let Some(words) = split_words(line) else {
            writeln!(out, "error: unterminated quote")?;
            return Ok(Flow::Continue);
        };

        match ShellLine::try_parse_from(words) {
            Ok(parsed) => self.execute(parsed.command, out),
            Err(error) => {
                write!(out, "{error}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn execute(&mut self, command: ShellCommand, out: &mut impl Write) -> Result<Flow, ShellError> {
        let session = &mut self.session;

        let status = match command {
            ShellCommand::Donut {
                kind,
                flavor,
                quantity,
            } => session.add_selection(&Selection::Donut(DonutSelection {
                kind,
                flavor,
                quantity,
            })),
            ShellCommand::Coffee {
                size,
                add_ins,
                quantity,
            } => session.add_selection(&Selection::Coffee(CoffeeSelection {
                size,
                add_ins,
                quantity,
            })),
            ShellCommand::Sandwich {
                bread,
                protein,
                add_ons,
                quantity,
            } => session.add_selection(&Selection::Sandwich(SandwichSelection {
                bread,
                protein,
                add_ons,
                quantity,
            })),
            ShellCommand::Show => {
                receipt::write_current_order(&mut *out, session.current_order())?;
                return Ok(Flow::Continue);
            }
            ShellCommand::Remove { item } => match item.checked_sub(1) {
                Some(index) => session.remove_item_at(index),
                None => Err(SessionError::NoSuchItem(item)),
            },
            ShellCommand::Clear => Ok(session.clear_current_order()),
            ShellCommand::Place => session.place_current_order(),
            ShellCommand::Orders => {
                receipt::write_order_history(&mut *out, session.manager().all_orders())?;
                return Ok(Flow::Continue);
            }
            ShellCommand::View { order } => match session.order(OrderNumber::new(order)) {
                Ok(order) => {
                    receipt::write_order_details(&mut *out, order)?;
                    return Ok(Flow::Continue);
                }
                Err(error) => Err(error),
            },
            ShellCommand::Cancel { order } => session.cancel_order(OrderNumber::new(order)),
            ShellCommand::Export { path } => session.export_orders(&path),
            ShellCommand::Menu => {
                receipt::write_menu(&mut *out, session.catalog())?;
                return Ok(Flow::Continue);
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
        };

        match status {
            Ok(message) => writeln!(out, "{message}")?,
            Err(error) => writeln!(out, "error: {error}")?,
        }

        Ok(Flow::Continue)
    }
}

/// Splits a command line into words. Single or double quotes group text containing spaces.
///
/// Returns `None` if a quote is left open.
fn split_words(line: &str) -> Option<Vec<String>> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut quote = None;

    for c in line.chars() {
        match quote {
            Some(open) if c == open => quote = None,
            Some(_) => word.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            None => {
                word.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return None;
    }

    if in_word {
        words.push(word);
    }

    Some(words)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::catalog::Catalog;

    use super::*;

    fn run(script: &str) -> Result<(Shell, String), ShellError> {
        let mut shell = Shell::new(Session::new(Catalog::default()));
        let mut out = Vec::new();

        shell.run(script.as_bytes(), &mut out)?;

        Ok((shell, String::from_utf8_lossy(&out).into_owned()))
    }

    #[test]
    fn adds_items_from_each_screen() -> TestResult {
        let (shell, out) = run(
            "donut yeast glazed -q 2\ncoffee tall whipped-cream vanilla\nsandwich -b bagel -p chicken lettuce tomatoes\n",
        )?;

        assert_eq!(
            out,
            "Added to order: Yeast Donut (Glazed) x2 $3.98\n\
             Added to order: Tall Coffee with whipped cream, vanilla x1 $3.49\n\
             Added to order: Chicken Sandwich on bagel with lettuce, tomatoes x1 $11.59\n"
        );
        assert_eq!(shell.session().current_order().len(), 3);

        Ok(())
    }

    #[test]
    fn missing_choices_are_reported() -> TestResult {
        let (shell, out) = run("donut cake\ncoffee\nsandwich -b sourdough\n")?;

        assert_eq!(
            out,
            "error: Please select a flavor\n\
             error: Please select a cup size\n\
             error: Please select protein and bread\n"
        );
        assert!(shell.session().current_order().is_empty());

        Ok(())
    }

    #[test]
    fn unknown_command_does_not_stop_the_shell() -> TestResult {
        let (shell, out) = run("brew espresso\ndonut hole plain\n")?;

        assert!(out.contains("error:"));
        assert!(out.ends_with("Added to order: Donut Hole (Plain) x1 $0.39\n"));
        assert_eq!(shell.session().current_order().len(), 1);

        Ok(())
    }

    #[test]
    fn skips_comments_and_stops_at_quit() -> TestResult {
        let (shell, out) = run("# morning rush\n\ndonut seasonal spooky\nquit\ndonut seasonal spooky\n")?;

        assert_eq!(out, "Added to order: Seasonal Donut (Spooky) x1 $2.49\n");
        assert_eq!(shell.session().current_order().len(), 1);

        Ok(())
    }

    #[test]
    fn place_and_cancel() -> TestResult {
        let (shell, out) = run("place\ndonut yeast maple\nplace\ncancel 7\ncancel 1\norders\n")?;

        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines.first().copied(),
            Some("error: Cannot place an empty order")
        );
        assert!(out.contains("Order #1 placed successfully!"));
        assert!(out.contains("error: No placed order #7"));
        assert!(out.contains("Order #1 cancelled"));
        assert!(out.ends_with("No orders placed yet.\n"));
        assert_eq!(shell.session().current_order().number(), OrderNumber::new(2));

        Ok(())
    }

    #[test]
    fn remove_uses_one_based_positions() -> TestResult {
        let (shell, out) = run("donut yeast jelly\ncoffee short\nremove 0\nremove 3\nremove 1\n")?;

        assert!(out.contains("error: Please select an item to remove (no item #0)\n"));
        assert!(out.contains("error: Please select an item to remove (no item #3)\n"));
        assert!(out.ends_with("Item removed from order\n"));

        let names: Vec<String> = shell
            .session()
            .current_order()
            .items()
            .map(|(_, item)| item.name())
            .collect();

        assert_eq!(names, vec!["Short Coffee"]);

        Ok(())
    }

    #[test]
    fn quotes_group_words() {
        assert_eq!(
            split_words(r#"export "my orders.txt""#),
            Some(vec!["export".to_string(), "my orders.txt".to_string()])
        );
        assert_eq!(
            split_words("donut  yeast 'boston cream' -q 2"),
            Some(vec![
                "donut".to_string(),
                "yeast".to_string(),
                "boston cream".to_string(),
                "-q".to_string(),
                "2".to_string(),
            ])
        );
        assert_eq!(split_words(r#"export """#), Some(vec!["export".to_string(), String::new()]));
        assert_eq!(split_words("export \"orders.txt"), None);
    }

    #[test]
    fn quoted_flavor_and_open_quote() -> TestResult {
        let (shell, out) = run("donut yeast \"Boston Cream\"\ndonut yeast \"boston\n")?;

        assert_eq!(
            out,
            "Added to order: Yeast Donut (Boston Cream) x1 $1.99\nerror: unterminated quote\n"
        );
        assert_eq!(shell.session().current_order().len(), 1);

        Ok(())
    }

    #[test]
    fn prompt_is_optional() -> TestResult {
        let mut shell = Shell::new(Session::new(Catalog::default())).with_prompt(true);
        let mut out = Vec::new();

        shell.run("quit\n".as_bytes(), &mut out)?;

        assert_eq!(out, b"> ");

        Ok(())
    }
}
