//! The interactive menu.
//!
//! Reads one choice per line, runs it against the session and loops. Names and
//! phones are prompted for one per line; phones that belong to a contact are
//! picked by their 1-based position in the listing. Recoverable errors are
//! printed and the loop continues. Quit, end of input and Ctrl+C all return
//! normally so the caller can close (and save) the session.

use super::interrupt;
use super::print::{write_error, write_messages, write_phones};
use colored::Colorize;
use rolodex::api::RolodexApi;
use rolodex::error::{Result, RolodexError};
use rolodex::model::Record;
use rolodex::store::ContactStore;
use std::io::{self, BufRead, Write};
use std::sync::atomic::AtomicBool;

const GREETING: &str = "Hi! I keep your contacts' phone numbers.\n\
Type 'help' if you feel lost, or press Ctrl+C to save and exit.";

const FAREWELL: &str = "See you later, Pal.";

const HELP: &str = "Supported commands:
0 or help          Show this help message.
1 or add           Add a new record.
2 or delete        Delete a record.
3 or change        Change the name or a phone of a record.
4 or add phone     Add phone numbers (type 'done' to finish).
5 or delete phone  Delete a phone number.
6 or show all      Show all records.
7 or exit          Save and exit (also: close, quit, q).
phone              Show the phones of one contact.
hello              Print a greeting.";

const CHOICES: &str = "What would you like to do?
0. Help
1. Add a record
2. Delete a record
3. Edit a record
4. Add phone(s)
5. Delete phone
6. Show all records
7. Exit";

const SEPARATOR: &str = "#------------------------------";

enum Flow {
    Continue,
    Quit,
}

/// True for the I/O errors that end the menu without being a failure.
fn ends_session(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof
    )
}

pub struct Menu<'a, R: BufRead, W: Write> {
    input: R,
    out: W,
    clear_screen: bool,
    stop: &'a AtomicBool,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(input: R, out: W, stop: &'a AtomicBool) -> Self {
        Self {
            input,
            out,
            clear_screen: false,
            stop,
        }
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn run<S: ContactStore>(&mut self, api: &mut RolodexApi<S>) -> Result<()> {
        self.clear()?;
        writeln!(self.out, "{}", GREETING)?;

        loop {
            writeln!(self.out, "\n{}\n{}", SEPARATOR, CHOICES)?;
            let choice = match self.prompt("Enter your choice (0-7): ") {
                Ok(choice) => choice.trim().to_lowercase(),
                Err(e) if ends_session(&e) => break,
                Err(e) => return Err(e.into()),
            };
            self.clear()?;

            match self.dispatch(api, &choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => {
                    writeln!(self.out, "{}", FAREWELL)?;
                    break;
                }
                Err(RolodexError::Io(e)) if ends_session(&e) => break,
                Err(e) if e.is_recoverable() => write_error(&mut self.out, &e)?,
                Err(e) => return Err(e),
            }
        }

        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn dispatch<S: ContactStore>(&mut self, api: &mut RolodexApi<S>, choice: &str) -> Result<Flow> {
        match choice {
            "0" | "help" => self.say(HELP)?,
            "1" | "add" => self.handle_add(api)?,
            "2" | "delete" => self.handle_delete(api)?,
            "3" | "change" => self.handle_change(api)?,
            "4" | "add phone" => self.handle_add_phone(api)?,
            "5" | "delete phone" => self.handle_delete_phone(api)?,
            "6" | "show all" => write!(self.out, "{}", api.render_all())?,
            "7" | "exit" | "close" | "quit" | "q" => return Ok(Flow::Quit),
            "phone" => self.handle_phone(api)?,
            "hello" => self.say(GREETING)?,
            _ => self.fail("Invalid choice. Try again.")?,
        }
        Ok(Flow::Continue)
    }

    fn handle_add<S: ContactStore>(&mut self, api: &mut RolodexApi<S>) -> Result<()> {
        let name = loop {
            let name = self.prompt("Enter a new name: ")?;
            if name.is_empty() {
                write_error(&mut self.out, &RolodexError::EmptyName)?;
            } else if api.book().contains(&name) {
                write_error(&mut self.out, &RolodexError::DuplicateName(name))?;
            } else {
                break name;
            }
        };
        let phone = self.prompt("Enter a new phone: ")?;
        let result = api.create_contact(&name, &[phone])?;
        write_messages(&mut self.out, &result.messages)?;
        Ok(())
    }

    fn handle_delete<S: ContactStore>(&mut self, api: &mut RolodexApi<S>) -> Result<()> {
        let name = self.prompt("Enter a name to delete: ")?;
        let result = api.delete_contact(&name)?;
        write_messages(&mut self.out, &result.messages)?;
        Ok(())
    }

    fn handle_change<S: ContactStore>(&mut self, api: &mut RolodexApi<S>) -> Result<()> {
        let name = self.prompt("Enter a name to edit: ")?;
        let record = existing(api, &name)?;

        writeln!(self.out, "\nSelect a field to edit for '{}':", name)?;
        writeln!(self.out, "1. Name\n2. Phone")?;
        let result = match self.prompt("Choose a field to edit (1/2): ")?.trim() {
            "1" => {
                let new_name = self.prompt("Enter a new name: ")?;
                api.rename_contact(&name, &new_name)?
            }
            "2" => {
                let Some(old) = self.pick_phone(&record, "edit")? else {
                    return Ok(());
                };
                let new = self.prompt("Enter the new phone number: ")?;
                api.edit_phone(&name, &old, &new)?
            }
            _ => return self.fail("Invalid input. Please try again."),
        };
        write_messages(&mut self.out, &result.messages)?;
        Ok(())
    }

    fn handle_add_phone<S: ContactStore>(&mut self, api: &mut RolodexApi<S>) -> Result<()> {
        let name = self.prompt("Enter a name: ")?;
        existing(api, &name)?;

        loop {
            let phone = self.prompt("Enter a phone number (type 'done' to finish): ")?;
            if phone.trim().eq_ignore_ascii_case("done") {
                break;
            }
            if phone.is_empty() {
                continue;
            }
            let result = api.add_phones(&name, &[phone])?;
            write_messages(&mut self.out, &result.messages)?;
        }
        Ok(())
    }

    fn handle_delete_phone<S: ContactStore>(&mut self, api: &mut RolodexApi<S>) -> Result<()> {
        let name = self.prompt("Enter a name: ")?;
        let record = existing(api, &name)?;
        if let Some(phone) = self.pick_phone(&record, "delete")? {
            let result = api.delete_phone(&name, &phone)?;
            write_messages(&mut self.out, &result.messages)?;
        }
        Ok(())
    }

    fn handle_phone<S: ContactStore>(&mut self, api: &mut RolodexApi<S>) -> Result<()> {
        let name = self.prompt("Enter a name to search: ")?;
        let result = api.show_contact(&name)?;
        for record in &result.listed {
            write_phones(&mut self.out, record)?;
        }
        Ok(())
    }

    /// Chooses one of the record's phones. A single phone is chosen without
    /// asking; `None` means nothing was chosen and a message was already shown.
    fn pick_phone(&mut self, record: &Record, action: &str) -> Result<Option<String>> {
        match record.phones() {
            [] => {
                self.fail(&format!("No phone numbers found for '{}'.", record.name()))?;
                Ok(None)
            }
            [only] => Ok(Some(only.clone())),
            phones => {
                write_phones(&mut self.out, record)?;
                let answer = self.prompt(&format!(
                    "Enter the index of the phone number to {}: ",
                    action
                ))?;
                match answer.trim().parse::<usize>() {
                    Ok(index) if (1..=phones.len()).contains(&index) => {
                        Ok(Some(phones[index - 1].clone()))
                    }
                    Ok(_) => {
                        self.fail("Invalid input. Please try again.")?;
                        Ok(None)
                    }
                    Err(_) => {
                        self.fail("Invalid input. Please enter a valid number.")?;
                        Ok(None)
                    }
                }
            }
        }
    }

    fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        match interrupt::read_line(&mut self.input, self.stop)? {
            Some(line) => Ok(line),
            None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input")),
        }
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    fn fail(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text.red())?;
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        if !self.clear_screen {
            return Ok(());
        }
        let term = console::Term::stdout();
        if term.is_term() {
            term.clear_screen()?;
        }
        Ok(())
    }
}

fn existing<S: ContactStore>(api: &RolodexApi<S>, name: &str) -> Result<Record> {
    api.get_contact(name)
        .cloned()
        .ok_or_else(|| RolodexError::ContactNotFound(name.to_string()))
}
